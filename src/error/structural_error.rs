/// Result type for operations that can only fail structurally.
pub type StructuralResult<T> = Result<T, StructuralError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every malformed-shape failure: bad tokens, bad program layout,
/// or a badly formatted option string.
///
/// Positions are zero-based token indices for the converter and validator, and
/// zero-based operation indices (`step`) for the interpreter.
pub enum StructuralError {
    /// A token in argument position is neither in the allowed-argument set nor
    /// shaped like `n<digits>` / `const_<digits>`.
    InvalidArgument {
        /// The offending token.
        token:    String,
        /// Token index in the program.
        position: usize,
    },
    /// An argument appeared while no operator was waiting for one.
    OrphanArgument {
        /// The offending token.
        token:    String,
        /// Token index in the program.
        position: usize,
    },
    /// Arguments were left on the argument stack after a conversion.
    LeftoverArguments {
        /// The arguments nobody consumed, in push order.
        arguments: Vec<String>,
    },
    /// Operators never received all of their arguments.
    UnfinishedOperators {
        /// The pending operators, outermost first.
        operators: Vec<String>,
    },
    /// A program has to start with an operator.
    ExpectedOperator {
        /// The token found instead.
        token:    String,
        /// Token index in the program.
        position: usize,
    },
    /// An operator ran out of tokens, or met another operator, before all of
    /// its arguments were supplied.
    MissingArguments {
        /// The operator still waiting.
        operator:  String,
        /// How many arguments it is still owed.
        remaining: usize,
        /// Token index where the shortage was detected.
        position:  usize,
    },
    /// An argument sits where the next operator was expected.
    UnexpectedArgument {
        /// The offending token.
        token:    String,
        /// Token index in the program.
        position: usize,
    },
    /// The operator has no primitive behind it.
    UnknownOperator {
        /// The operator name.
        name: String,
        /// Operation index in the program.
        step: usize,
    },
    /// An operation carries a different number of arguments than its
    /// primitive takes.
    ArityMismatch {
        /// The operator name.
        operator: String,
        /// Arguments the primitive takes.
        expected: usize,
        /// Arguments the operation supplied.
        found:    usize,
        /// Operation index in the program.
        step:     usize,
    },
    /// A `const_` token whose suffix is not a number.
    InvalidConstant {
        /// The offending token.
        token: String,
        /// Operation index in the program.
        step:  usize,
    },
    /// A literal argument that is not a number.
    InvalidLiteral {
        /// The offending token.
        token: String,
        /// Operation index in the program.
        step:  usize,
    },
    /// An option string did not split into exactly five groups.
    OptionCount {
        /// The number of groups found.
        found: usize,
    },
    /// A gold answer label outside `a` to `e`.
    InvalidOptionLabel {
        /// The label given.
        label: String,
    },
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { token, position } => {
                write!(f, "Token {position}: '{token}' is not a valid argument.")
            },
            Self::OrphanArgument { token, position } => write!(f,
                                                               "Token {position}: argument '{token}' has no operator to bind to."),
            Self::LeftoverArguments { arguments } => write!(f,
                                                            "Arguments left unconsumed at end of program: {}.",
                                                            arguments.join(", ")),
            Self::UnfinishedOperators { operators } => write!(f,
                                                              "Operators left without arguments at end of program: {}.",
                                                              operators.join(", ")),
            Self::ExpectedOperator { token, position } => write!(f,
                                                                 "Token {position}: expected an operator but found '{token}'."),
            Self::MissingArguments { operator,
                                     remaining,
                                     position, } => write!(f,
                                                           "Token {position}: '{operator}' expects {remaining} more argument(s)."),
            Self::UnexpectedArgument { token, position } => write!(f,
                                                                   "Token {position}: too many arguments, found '{token}' where an operator was expected."),
            Self::UnknownOperator { name, step } => {
                write!(f, "Step {step}: unknown operator '{name}'.")
            },
            Self::ArityMismatch { operator,
                                  expected,
                                  found,
                                  step, } => write!(f,
                                                    "Step {step}: '{operator}' takes {expected} argument(s) but {found} were given."),
            Self::InvalidConstant { token, step } => {
                write!(f, "Step {step}: invalid constant '{token}'.")
            },
            Self::InvalidLiteral { token, step } => {
                write!(f, "Step {step}: '{token}' is not a number.")
            },
            Self::OptionCount { found } => {
                write!(f, "Expected 5 options but found {found}.")
            },
            Self::InvalidOptionLabel { label } => {
                write!(f, "Invalid option label '{label}', expected one of a, b, c, d, e.")
            },
        }
    }
}

impl std::error::Error for StructuralError {}
