/// The program tokenizer.
///
/// Splits nested (`op(a, op(b, c))`) and linear (`op(a,b)|op(#0,c)|`) program
/// text into bare tokens, and classifies argument tokens by prefix.
pub mod token;
/// Operations and linear programs.
///
/// A linear program is a sequence of operations, each an operator bound to
/// exactly its arity of arguments. Results are referenced by position.
pub mod operation;
/// Nested-to-linear conversion.
///
/// Reduces the flattened token stream of a call tree into a linear program
/// without building the tree.
///
/// # Responsibilities
/// - Binds each operator to its arguments as soon as they are all present.
/// - Replaces each completed operation with a back-reference to its result.
/// - Rejects invalid argument tokens, orphan arguments, and leftovers.
pub mod converter;
/// Linear program validation against the operator catalog.
pub mod validator;

pub use converter::{ConversionFailure, convert_nested_to_linear, linearize};
pub use operation::{LinearProgram, Operation};
pub use validator::{is_valid_linear_program, validate_linear_program};

/// The textual shape of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramForm {
    /// Nested call syntax, `op(a, op(b, c))`.
    Nested,
    /// A flat, arity-grouped token stream.
    #[default]
    Linear,
}
