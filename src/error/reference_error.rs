#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a back-reference (`#i`) that cannot be resolved against the
/// memory bank.
pub enum ReferenceError {
    /// The text after `#` is not a non-negative integer.
    Malformed {
        /// The offending token.
        token: String,
        /// Operation index in the program.
        step:  usize,
    },
    /// The reference points at a result that has not been computed yet.
    OutOfBounds {
        /// The referenced index.
        index: usize,
        /// Results in memory when the reference was resolved.
        len:   usize,
        /// Operation index in the program.
        step:  usize,
    },
}

impl std::fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { token, step } => {
                write!(f, "Step {step}: malformed back-reference '{token}'.")
            },
            Self::OutOfBounds { index, len, step } => write!(f,
                                                             "Step {step}: back-reference #{index} out of bounds, memory holds {len} result(s)."),
        }
    }
}

impl std::error::Error for ReferenceError {}
