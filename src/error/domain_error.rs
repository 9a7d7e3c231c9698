#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a primitive that was handed input outside its domain.
pub enum DomainError {
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// The primitive that rejected the input.
        operator: &'static str,
        /// Details about why the argument is invalid.
        details:  String,
        /// Operation index in the program.
        step:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The primitive that divided.
        operator: &'static str,
        /// Operation index in the program.
        step:     usize,
    },
    /// The primitive produced an infinite or NaN result.
    NonFinite {
        /// The primitive that produced it.
        operator: &'static str,
        /// Operation index in the program.
        step:     usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { operator,
                                    details,
                                    step, } => {
                write!(f, "Step {step}: invalid argument to '{operator}': {details}.")
            },
            Self::DivisionByZero { operator, step } => {
                write!(f, "Step {step}: division by zero in '{operator}'.")
            },
            Self::NonFinite { operator, step } => {
                write!(f, "Step {step}: '{operator}' produced a non-finite result.")
            },
        }
    }
}

impl std::error::Error for DomainError {}
