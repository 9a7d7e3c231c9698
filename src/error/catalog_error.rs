#[derive(Debug)]
/// Represents a failure to load an operator catalog.
///
/// Line numbers are one-based.
pub enum CatalogError {
    /// A line is not of the form `name | arity`.
    MalformedLine {
        /// The line as read.
        content: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The arity is not a positive integer.
    InvalidArity {
        /// The arity text as read.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator was declared twice.
    DuplicateOperator {
        /// The operator name.
        name: String,
        /// The source line of the second declaration.
        line: usize,
    },
    /// The catalog file could not be read.
    Io {
        /// The path that was being read.
        path:   String,
        /// The underlying error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine { content, line } => write!(f,
                                                            "Error on line {line}: expected 'name | arity' but found '{content}'."),
            Self::InvalidArity { value, line } => write!(f,
                                                         "Error on line {line}: arity '{value}' is not a positive integer."),
            Self::DuplicateOperator { name, line } => {
                write!(f, "Error on line {line}: operator '{name}' is already defined.")
            },
            Self::Io { path, source } => write!(f, "Failed to read '{path}': {source}."),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
