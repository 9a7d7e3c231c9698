use std::collections::HashSet;

use crate::{
    catalog::OperatorCatalog,
    error::{EvalError, StructuralError},
    program::{
        operation::{LinearProgram, Operation},
        token::{has_argument_shape, strip_to_tokens},
    },
};

/// A failed conversion: the reason, plus whatever operations had been emitted
/// before the failure was detected.
///
/// Only an orphan argument keeps the emitted operations; every other failure
/// discards them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    /// Why the conversion stopped.
    pub error:   StructuralError,
    /// Operations emitted before the failure.
    pub emitted: LinearProgram,
}

impl From<ConversionFailure> for EvalError {
    fn from(failure: ConversionFailure) -> Self {
        Self::Structural(failure.error)
    }
}

impl std::fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ConversionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An operator waiting for arguments. `base` is the height of the argument
/// stack when the operator was pushed; its own arguments live above it.
struct Frame<'a> {
    operator: &'a str,
    arity:    usize,
    base:     usize,
}

/// Converts the tokens of a nested program into a linear program.
///
/// The conversion is a single pass over two array-backed stacks. Operators are
/// pushed as frames; arguments are pushed onto the argument stack, and as soon
/// as the innermost pending operator has all of its arguments they are popped
/// (in push order), bound into an [`Operation`], and replaced by a `#k`
/// back-reference to that operation's result.
///
/// Without an `allowed` set, an argument must look like `n<digits>` or
/// `const_<digits>`. With one, it must be a member.
///
/// An empty token stream converts to an empty program.
///
/// # Errors
/// - `InvalidArgument`: a token is neither an operator nor an acceptable
///   argument.
/// - `OrphanArgument`: an argument arrived while no operator was pending.
///   The operations emitted so far are kept in the failure.
/// - `LeftoverArguments`: arguments remained unconsumed at the end.
/// - `UnfinishedOperators`: operators remained pending at the end.
///
/// # Example
/// ```
/// use mathqa::{catalog::OperatorCatalog, program::converter::convert_nested_to_linear};
///
/// let catalog = OperatorCatalog::builtin();
/// let tokens = ["add", "n0", "multiply", "n1", "const_100"];
/// let program = convert_nested_to_linear(&tokens, &catalog, None).unwrap();
/// assert_eq!(program.to_string(), "multiply(n1,const_100)|add(n0,#0)");
/// ```
pub fn convert_nested_to_linear<S: AsRef<str>>(tokens: &[S],
                                               catalog: &OperatorCatalog,
                                               allowed: Option<&HashSet<String>>)
                                               -> Result<LinearProgram, ConversionFailure> {
    if tokens.is_empty() {
        tracing::info!("converted empty program");
        return Ok(LinearProgram::new());
    }

    let mut output = LinearProgram::new();
    let mut operators: Vec<Frame<'_>> = Vec::new();
    let mut arguments: Vec<String> = Vec::new();
    let mut op_count = 0usize;

    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();

        if let Some(arity) = catalog.arity(token) {
            operators.push(Frame { operator: token,
                                   arity,
                                   base: arguments.len() });
            continue;
        }

        let acceptable = allowed.map_or_else(|| has_argument_shape(token), |set| set.contains(token));
        if !acceptable {
            tracing::error!(token, position, "received invalid token");
            return Err(ConversionFailure { error:   StructuralError::InvalidArgument { token: token.to_string(),
                                                                                       position },
                                           emitted: LinearProgram::new(), });
        }

        if operators.is_empty() {
            tracing::error!(token, position, "received argument with no pending operator");
            return Err(ConversionFailure { error:   StructuralError::OrphanArgument { token: token.to_string(),
                                                                                      position },
                                           emitted: output, });
        }

        arguments.push(token.to_string());

        while let Some(frame) = operators.last()
              && arguments.len() - frame.base >= frame.arity
        {
            let bound = arguments.split_off(arguments.len() - frame.arity);
            output.push(Operation::new(frame.operator, bound));
            operators.pop();
            arguments.push(format!("#{op_count}"));
            op_count += 1;
        }
    }

    if arguments.last().is_some_and(|a| a.starts_with('#')) {
        arguments.pop();
    }

    if !arguments.is_empty() {
        tracing::error!(leftover = ?arguments, "argument stack not empty at completion");
        return Err(ConversionFailure { error:   StructuralError::LeftoverArguments { arguments },
                                       emitted: LinearProgram::new(), });
    }

    if !operators.is_empty() {
        let pending: Vec<String> = operators.iter().map(|f| f.operator.to_string()).collect();
        tracing::error!(pending = ?pending, "operators left without arguments at completion");
        return Err(ConversionFailure { error:   StructuralError::UnfinishedOperators { operators: pending },
                                       emitted: LinearProgram::new(), });
    }

    tracing::debug!(program = %output, "converted program");
    Ok(output)
}

/// Tokenizes nested program text and converts it.
///
/// # Errors
/// See [`convert_nested_to_linear`].
///
/// # Example
/// ```
/// use mathqa::{catalog::OperatorCatalog, program::converter::linearize};
///
/// let catalog = OperatorCatalog::builtin();
/// let program = linearize("multiply(divide(n0, const_100), n1)", &catalog, None).unwrap();
/// assert_eq!(program.to_string(), "divide(n0,const_100)|multiply(#0,n1)");
/// ```
pub fn linearize(source: &str,
                 catalog: &OperatorCatalog,
                 allowed: Option<&HashSet<String>>)
                 -> Result<LinearProgram, ConversionFailure> {
    convert_nested_to_linear(&strip_to_tokens(source), catalog, allowed)
}
