/// Core execution logic.
///
/// Contains the `Interpreter`, the result alias used by every evaluation
/// function, argument resolution, and the dispatch of each operation to its
/// primitive.
///
/// # Responsibilities
/// - Resolves back-references, named constants and literals to numbers.
/// - Dispatches each operation through the primitive registry.
/// - Stops a program at its first error without affecting anything else.
pub mod core;
/// The append-only memory bank of intermediate results.
pub mod memory;
/// The primitive registry.
///
/// A static table mapping each operator name to its arity and
/// implementation, generated once by a macro, with a lazily built name index
/// for lookup.
pub mod registry;
/// Primitive function implementations, grouped by topic.
pub mod primitives;

pub use self::core::{EvalResult, Interpreter};
pub use memory::MemoryBank;
