use crate::{
    catalog::OperatorCatalog,
    error::{StructuralError, StructuralResult},
    program::{token::strip_to_tokens, validator::validate_linear_program},
};

/// One step of a linear program: an operator applied to exactly as many
/// arguments as its arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The operator name.
    pub operator:  String,
    /// Argument tokens: constants, literals, placeholders, or `#i`
    /// back-references to earlier operations.
    pub arguments: Vec<String>,
}

impl Operation {
    /// Creates an operation from its parts.
    pub fn new(operator: impl Into<String>, arguments: Vec<String>) -> Self {
        Self { operator: operator.into(),
               arguments }
    }

    /// Iterates over the operation as flat tokens, operator first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.operator.as_str()).chain(self.arguments.iter().map(String::as_str))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.operator, self.arguments.join(","))
    }
}

/// An ordered sequence of operations. Operation `i` leaves its result in
/// memory slot `i`, which later operations name as `#i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearProgram {
    operations: Vec<Operation>,
}

impl LinearProgram {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups a flat token stream into operations using the catalog arities.
    ///
    /// The stream is validated first, so every operation carries exactly its
    /// arity of arguments.
    ///
    /// # Errors
    /// Returns the `StructuralError` the validator reports.
    ///
    /// # Example
    /// ```
    /// use mathqa::{catalog::OperatorCatalog, program::operation::LinearProgram};
    ///
    /// let catalog = OperatorCatalog::builtin();
    /// let program = LinearProgram::from_tokens(&["add", "n0", "n1", "factorial", "#0"], &catalog).unwrap();
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(program.to_string(), "add(n0,n1)|factorial(#0)");
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], catalog: &OperatorCatalog) -> StructuralResult<Self> {
        validate_linear_program(tokens, catalog, None)?;

        let mut operations = Vec::new();
        let mut idx = 0;
        while idx < tokens.len() {
            let operator = tokens[idx].as_ref();
            let arity = catalog.arity(operator)
                               .ok_or_else(|| StructuralError::ExpectedOperator { token:    operator.to_string(),
                                                                                  position: idx, })?;
            let arguments = tokens[idx + 1..idx + 1 + arity].iter()
                                                            .map(|t| t.as_ref().to_string())
                                                            .collect();
            operations.push(Operation::new(operator, arguments));
            idx += arity + 1;
        }

        Ok(Self { operations })
    }

    /// Tokenizes linear program text, in either the whitespace layout or the
    /// `op(a,b)|op(#0,c)|` layout, and groups it into operations.
    ///
    /// # Errors
    /// Returns the `StructuralError` the validator reports.
    pub fn parse(source: &str, catalog: &OperatorCatalog) -> StructuralResult<Self> {
        Self::from_tokens(&strip_to_tokens(source), catalog)
    }

    /// Appends an operation.
    pub fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// The operations in execution order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the program has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterates over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Mutable access to every argument token, in program order.
    pub fn arguments_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.operations.iter_mut().flat_map(|op| op.arguments.iter_mut())
    }

    /// Flattens the program back into a token stream.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.operations
            .iter()
            .flat_map(Operation::tokens)
            .map(str::to_string)
            .collect()
    }
}

impl From<Vec<Operation>> for LinearProgram {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

impl<'a> IntoIterator for &'a LinearProgram {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl std::fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
