use std::collections::HashSet;

use crate::{
    catalog::OperatorCatalog,
    error::{StructuralError, StructuralResult},
};

/// Checks that a flat token stream is a well-formed linear program.
///
/// The walk keeps a count of arguments the current operator is still owed.
/// While that count is positive every token must be an argument (a member of
/// `allowed` when given, otherwise anything that is not an operator); once it
/// reaches zero the next token must be an operator, which resets the count to
/// its arity. The stream must end with the count at zero.
///
/// An empty program is valid.
///
/// # Errors
/// - `ExpectedOperator`: the first token is not an operator.
/// - `MissingArguments`: an operator met another operator, or the stream
///   ended, before all of its arguments were supplied.
/// - `UnexpectedArgument`: an argument sits where an operator was expected.
/// - `InvalidArgument`: an argument outside the `allowed` set.
///
/// # Example
/// ```
/// use mathqa::{catalog::OperatorCatalog, program::validator::validate_linear_program};
///
/// let catalog = OperatorCatalog::builtin();
/// assert!(validate_linear_program(&["add", "n0", "n1", "sqrt", "#0"], &catalog, None).is_ok());
/// assert!(validate_linear_program(&["n0", "add", "n1"], &catalog, None).is_err());
/// assert!(validate_linear_program(&["add", "n0"], &catalog, None).is_err());
/// ```
pub fn validate_linear_program<S: AsRef<str>>(tokens: &[S],
                                              catalog: &OperatorCatalog,
                                              allowed: Option<&HashSet<String>>)
                                              -> StructuralResult<()> {
    let Some(first) = tokens.first() else {
        tracing::info!("validated empty program");
        return Ok(());
    };
    let first = first.as_ref();

    let Some(mut remaining) = catalog.arity(first) else {
        tracing::error!(token = first, "program cannot start with a non-operator");
        return Err(StructuralError::ExpectedOperator { token:    first.to_string(),
                                                       position: 0, });
    };
    let mut operator = first;

    for (position, token) in tokens.iter().enumerate().skip(1) {
        let token = token.as_ref();
        let is_operator = catalog.contains(token);

        if remaining > 0 {
            if is_operator {
                tracing::error!(operator, remaining, position, "operator is missing arguments");
                return Err(StructuralError::MissingArguments { operator: operator.to_string(),
                                                               remaining,
                                                               position });
            }
            if let Some(set) = allowed
               && !set.contains(token)
            {
                tracing::error!(token, position, "argument is not in the allowed set");
                return Err(StructuralError::InvalidArgument { token: token.to_string(),
                                                              position });
            }
            remaining -= 1;
        } else if let Some(arity) = catalog.arity(token) {
            remaining = arity;
            operator = token;
        } else {
            tracing::error!(token, position, "too many arguments");
            return Err(StructuralError::UnexpectedArgument { token: token.to_string(),
                                                             position });
        }
    }

    if remaining != 0 {
        tracing::error!(operator, remaining, "program ended before all arguments were supplied");
        return Err(StructuralError::MissingArguments { operator: operator.to_string(),
                                                       remaining,
                                                       position: tokens.len() });
    }

    Ok(())
}

/// Boolean form of [`validate_linear_program`].
#[must_use]
pub fn is_valid_linear_program<S: AsRef<str>>(tokens: &[S],
                                              catalog: &OperatorCatalog,
                                              allowed: Option<&HashSet<String>>)
                                              -> bool {
    validate_linear_program(tokens, catalog, allowed).is_ok()
}
