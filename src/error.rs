/// Structural errors.
///
/// Malformed shapes detected before or during evaluation: invalid tokens,
/// arguments where operators belong and vice versa, unparsable numerals, and
/// option strings that do not hold five groups.
pub mod structural_error;
/// Domain errors.
///
/// Raised by primitives given input outside the domain they are defined on,
/// such as a negative factorial or a division by zero.
pub mod domain_error;
/// Reference errors.
///
/// Raised when a back-reference names a result that does not exist.
pub mod reference_error;
/// Catalog loading errors.
pub mod catalog_error;
/// The per-program failure type that wraps the three kinds above.
pub mod eval_error;

pub use catalog_error::CatalogError;
pub use domain_error::DomainError;
pub use eval_error::EvalError;
pub use reference_error::ReferenceError;
pub use structural_error::{StructuralError, StructuralResult};
