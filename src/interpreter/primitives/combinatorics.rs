use crate::{
    error::DomainError,
    interpreter::{core::EvalResult, primitives::expect_args},
    util::num::{f64_as_exact_i64, f64_to_u64_checked, u64_to_f64_checked},
};

/// Largest argument accepted by [`factorial`].
pub const MAX_FACTORIAL_ARG: u64 = 50;

/// Any product of more than this many distinct positive integers exceeds
/// `f64::MAX` (`171!` does).
const MAX_FINITE_FACTORS: u64 = 170;

/// Computes `n!` for integral `0 <= n <= 50`.
///
/// # Errors
/// `DomainError::InvalidArgument` if `n` is negative, fractional, or larger
/// than [`MAX_FACTORIAL_ARG`].
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::factorial;
///
/// assert_eq!(factorial(&[10.0], 0).unwrap(), 3_628_800.0);
/// assert_eq!(factorial(&[0.0], 0).unwrap(), 1.0);
/// assert!(factorial(&[-1.0], 0).is_err());
/// assert!(factorial(&[51.0], 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(args: &[f64], step: usize) -> EvalResult<f64> {
    let [x] = expect_args(args, "factorial", step)?;
    let n = f64_to_u64_checked(x, "factorial", step)?;

    if n > MAX_FACTORIAL_ARG {
        return Err(DomainError::InvalidArgument { operator: "factorial",
                                                  details: format!("{n} is larger than {MAX_FACTORIAL_ARG}"),
                                                  step }.into());
    }

    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

/// Binomial coefficient `n choose k`; zero when `k > n`.
///
/// # Errors
/// - `DomainError::InvalidArgument` if either argument is negative or
///   fractional.
/// - `DomainError::NonFinite` as soon as the running product overflows.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::choose;
///
/// assert_eq!(choose(&[5.0, 2.0], 0).unwrap(), 10.0);
/// assert_eq!(choose(&[2.0, 5.0], 0).unwrap(), 0.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn choose(args: &[f64], step: usize) -> EvalResult<f64> {
    let [n, k] = expect_args(args, "choose", step)?;
    let n = f64_to_u64_checked(n, "choose", step)?;
    let k = f64_to_u64_checked(k, "choose", step)?;

    if k > n {
        return Ok(0.0);
    }

    let k = std::cmp::min(k, n - k);

    let mut exact: Option<u128> = Some(1);
    let mut approx = 1.0f64;
    for i in 1..=k {
        let factor = u128::from(n - k + i);
        exact = exact.and_then(|r| r.checked_mul(factor)).map(|r| r / u128::from(i));
        approx = approx * (n - k + i) as f64 / i as f64;
        if approx.is_infinite() {
            return Err(DomainError::NonFinite { operator: "choose",
                                                step }.into());
        }
    }

    match exact.and_then(|r| u64::try_from(r).ok()) {
        Some(r) => Ok(u64_to_f64_checked(r, "choose", step).unwrap_or(approx)),
        None => Ok(approx),
    }
}

/// Ordered selections, `n! / (n - k)!`.
///
/// # Errors
/// - `DomainError::InvalidArgument` if either argument is negative or
///   fractional, or if `k > n`.
/// - `DomainError::NonFinite` if `k` exceeds 170, where the product cannot be
///   finite.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::permutation;
///
/// assert_eq!(permutation(&[5.0, 2.0], 0).unwrap(), 20.0);
/// assert!(permutation(&[2.0, 5.0], 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn permutation(args: &[f64], step: usize) -> EvalResult<f64> {
    let [n, k] = expect_args(args, "permutation", step)?;
    let n = f64_to_u64_checked(n, "permutation", step)?;
    let k = f64_to_u64_checked(k, "permutation", step)?;

    if k > n {
        return Err(DomainError::InvalidArgument { operator: "permutation",
                                                  details: format!("cannot arrange {k} of {n}"),
                                                  step }.into());
    }
    if k > MAX_FINITE_FACTORS {
        return Err(DomainError::NonFinite { operator: "permutation",
                                            step }.into());
    }

    let product = (n - k + 1..=n).fold(1.0, |acc, i| acc * i as f64);
    if product.is_infinite() {
        return Err(DomainError::NonFinite { operator: "permutation",
                                            step }.into());
    }
    Ok(product)
}

/// Greatest common divisor of the arguments truncated toward zero.
///
/// # Errors
/// `DomainError::InvalidArgument` if an argument is not finite or too large
/// to truncate exactly.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::gcd;
///
/// assert_eq!(gcd(&[12.0, 18.0], 0).unwrap(), 6.0);
/// assert_eq!(gcd(&[-12.0, 18.9], 0).unwrap(), 6.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn gcd(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "gcd", step)?;
    Ok(truncated_gcd(a, b, "gcd", step)? as f64)
}

/// Least common multiple, `floor(|a * b| / gcd(a, b))`.
///
/// # Errors
/// `DomainError::DivisionByZero` if both arguments truncate to zero.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::lcm;
///
/// assert_eq!(lcm(&[4.0, 6.0], 0).unwrap(), 12.0);
/// assert!(lcm(&[0.0, 0.0], 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn lcm(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "lcm", step)?;
    let g = truncated_gcd(a, b, "lcm", step)?;
    if g == 0 {
        return Err(DomainError::DivisionByZero { operator: "lcm",
                                                 step }.into());
    }
    Ok(((a * b).abs() / g as f64).floor())
}

/// `1 - p` for a probability `p`.
///
/// # Errors
/// `DomainError::InvalidArgument` if `p` lies outside `[0, 1]`.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::combinatorics::negate_prob;
///
/// assert_eq!(negate_prob(&[0.25], 0).unwrap(), 0.75);
/// assert!(negate_prob(&[1.5], 0).is_err());
/// ```
pub fn negate_prob(args: &[f64], step: usize) -> EvalResult<f64> {
    let [p] = expect_args(args, "negate_prob", step)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(DomainError::InvalidArgument { operator: "negate_prob",
                                                  details: format!("{p} is not a probability"),
                                                  step }.into());
    }
    Ok(1.0 - p)
}

fn truncated_gcd(a: f64, b: f64, operator: &'static str, step: usize) -> EvalResult<u64> {
    let truncate = |x: f64| {
        f64_as_exact_i64(x.trunc()).ok_or_else(|| DomainError::InvalidArgument { operator,
                                                                                 details: format!("{x} cannot be truncated to an integer"),
                                                                                 step })
    };
    let mut a = truncate(a)?.unsigned_abs();
    let mut b = truncate(b)?.unsigned_abs();

    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}
