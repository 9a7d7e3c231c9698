use crate::{error::StructuralError, interpreter::core::EvalResult};

/// Arithmetic primitives.
///
/// The four operations, powers and roots, rounding, logarithms, the
/// trigonometric functions, and the dataset's `reminder` (floored modulo).
pub mod arithmetic;
/// Counting and number-theory primitives.
///
/// Factorial, binomial coefficient, permutations, gcd, lcm, and probability
/// negation.
pub mod combinatorics;
/// Area, perimeter, surface and volume formulas.
pub mod geometry;
/// Speed and price formulas.
pub mod rates;

/// Destructures a primitive's argument slice into a fixed-size array.
///
/// The dispatcher already checks arity against the registry, so a mismatch
/// here means a primitive was called directly with the wrong slice.
///
/// # Errors
/// Returns `StructuralError::ArityMismatch` if `args` does not hold exactly
/// `N` values.
pub(crate) fn expect_args<const N: usize>(args: &[f64],
                                          operator: &'static str,
                                          step: usize)
                                          -> EvalResult<[f64; N]> {
    <[f64; N]>::try_from(args).map_err(|_| {
                                  StructuralError::ArityMismatch { operator: operator.to_string(),
                                                                   expected: N,
                                                                   found: args.len(),
                                                                   step }.into()
                              })
}
