use crate::error::{DomainError, ReferenceError, StructuralError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every reason a single program can fail to produce an answer.
///
/// The first three variants are contained failures: they end the current
/// program only. `UnresolvedPlaceholder` is caller misuse, a program reached
/// the interpreter before its `n<i>` tokens were bound, and batch runners
/// propagate it instead of recording it.
pub enum EvalError {
    /// Malformed token or program shape.
    Structural(StructuralError),
    /// A primitive was given out-of-domain input.
    Domain(DomainError),
    /// A back-reference could not be resolved.
    Reference(ReferenceError),
    /// A variable placeholder survived until interpretation.
    UnresolvedPlaceholder {
        /// The placeholder token.
        token: String,
        /// Operation index in the program.
        step:  usize,
    },
}

impl EvalError {
    /// Returns `true` for failures that must not be swallowed by a batch.
    #[must_use]
    pub const fn is_misuse(&self) -> bool {
        matches!(self, Self::UnresolvedPlaceholder { .. })
    }
}

impl From<StructuralError> for EvalError {
    fn from(e: StructuralError) -> Self {
        Self::Structural(e)
    }
}

impl From<DomainError> for EvalError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<ReferenceError> for EvalError {
    fn from(e: ReferenceError) -> Self {
        Self::Reference(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(e) => write!(f, "Structural error: {e}"),
            Self::Domain(e) => write!(f, "Domain error: {e}"),
            Self::Reference(e) => write!(f, "Reference error: {e}"),
            Self::UnresolvedPlaceholder { token, step } => write!(f,
                                                                  "Step {step}: placeholder '{token}' was never bound to a number."),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Structural(e) => Some(e),
            Self::Domain(e) => Some(e),
            Self::Reference(e) => Some(e),
            Self::UnresolvedPlaceholder { .. } => None,
        }
    }
}
