use crate::{
    catalog::OperatorCatalog,
    error::{DomainError, EvalError, StructuralError},
    interpreter::{memory::MemoryBank, registry},
    numeral::parse_numeral,
    program::{
        operation::{LinearProgram, Operation},
        token::Argument,
    },
};

/// Result type used by the interpreter.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The deliberately short value `const_pi` resolves to. Answers in the dataset
/// were computed with it.
#[allow(clippy::approx_constant)]
pub const CONST_PI: f64 = 3.14159;

/// Executes linear programs.
///
/// The interpreter holds nothing but a borrowed catalog, which it only needs
/// to group flat token streams; every run starts from a fresh [`MemoryBank`].
/// It can therefore be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'c> {
    catalog: &'c OperatorCatalog,
}

impl<'c> Interpreter<'c> {
    /// Creates an interpreter over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'c OperatorCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this interpreter groups token streams with.
    #[must_use]
    pub const fn catalog(&self) -> &'c OperatorCatalog {
        self.catalog
    }

    /// Runs a program and returns its answer: the result of the last
    /// operation.
    ///
    /// An empty program has no answer and returns `Ok(None)`.
    ///
    /// # Errors
    /// Returns the first `EvalError` raised. The program is abandoned at that
    /// point; nothing else is affected.
    ///
    /// # Example
    /// ```
    /// use mathqa::{
    ///     catalog::OperatorCatalog,
    ///     interpreter::core::Interpreter,
    ///     program::operation::LinearProgram,
    /// };
    ///
    /// let catalog = OperatorCatalog::builtin();
    /// let program = LinearProgram::parse("add(120,const_1000)", &catalog).unwrap();
    /// let answer = Interpreter::new(&catalog).run(&program).unwrap();
    /// assert_eq!(answer, Some(1120.0));
    ///
    /// assert_eq!(Interpreter::new(&catalog).run(&LinearProgram::new()).unwrap(), None);
    /// ```
    pub fn run(&self, program: &LinearProgram) -> EvalResult<Option<f64>> {
        let mut memory = MemoryBank::new();
        self.run_with_memory(program, &mut memory)
    }

    /// Runs a program against a caller-supplied memory bank, leaving every
    /// intermediate result in it.
    ///
    /// Back-references index the bank from its start, so it should normally
    /// be empty when passed in.
    ///
    /// # Errors
    /// See [`Interpreter::run`].
    pub fn run_with_memory(&self, program: &LinearProgram, memory: &mut MemoryBank) -> EvalResult<Option<f64>> {
        if program.is_empty() {
            tracing::info!("solving empty program");
            return Ok(None);
        }

        for (step, operation) in program.iter().enumerate() {
            let value = self.execute(operation, memory, step)?;
            tracing::debug!(step, %operation, value, "executed operation");
            memory.push(value);
        }

        Ok(memory.last())
    }

    /// Groups a flat token stream through the catalog and runs it.
    ///
    /// # Errors
    /// Any structural error from grouping, then see [`Interpreter::run`].
    pub fn run_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> EvalResult<Option<f64>> {
        let program = LinearProgram::from_tokens(tokens, self.catalog)?;
        self.run(&program)
    }

    /// Executes one operation: resolves its arguments, then dispatches to the
    /// primitive.
    fn execute(&self, operation: &Operation, memory: &MemoryBank, step: usize) -> EvalResult<f64> {
        let primitive = registry::lookup(&operation.operator).ok_or_else(|| StructuralError::UnknownOperator { name: operation.operator.clone(),
                                                                                                               step })?;

        if operation.arguments.len() != primitive.arity {
            return Err(StructuralError::ArityMismatch { operator: operation.operator.clone(),
                                                        expected: primitive.arity,
                                                        found: operation.arguments.len(),
                                                        step }.into());
        }

        let values = operation.arguments
                              .iter()
                              .map(|arg| Self::resolve_argument(arg, memory, step))
                              .collect::<EvalResult<Vec<f64>>>()?;

        let result = (primitive.func)(&values, step)?;
        if !result.is_finite() {
            return Err(DomainError::NonFinite { operator: primitive.name,
                                                step }.into());
        }
        Ok(result)
    }

    /// Resolves an argument token to a number.
    ///
    /// # Errors
    /// - `ReferenceError` for a bad back-reference.
    /// - `StructuralError::InvalidConstant` / `InvalidLiteral` for tokens that
    ///   do not parse.
    /// - `EvalError::UnresolvedPlaceholder` for an `n<i>` token.
    pub fn resolve_argument(token: &str, memory: &MemoryBank, step: usize) -> EvalResult<f64> {
        match Argument::classify(token) {
            Argument::BackReference(index) => Ok(memory.resolve(index, step)?),
            Argument::Constant("pi") => Ok(CONST_PI),
            Argument::Constant(value) => {
                let value = value.replacen('_', ".", 1);
                parse_numeral(&value).ok_or_else(|| {
                                         StructuralError::InvalidConstant { token: token.to_string(),
                                                                            step }.into()
                                     })
            },
            Argument::Placeholder(_) => Err(EvalError::UnresolvedPlaceholder { token: token.to_string(),
                                                                                step }),
            Argument::Literal(literal) => parse_numeral(literal).ok_or_else(|| {
                                                                     StructuralError::InvalidLiteral { token: token.to_string(),
                                                                                                       step }.into()
                                                                 }),
        }
    }
}
