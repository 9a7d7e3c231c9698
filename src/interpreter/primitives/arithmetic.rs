use crate::{
    error::DomainError,
    interpreter::{core::EvalResult, primitives::expect_args},
};

/// `a + b`
pub fn add(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "add", step)?;
    Ok(a + b)
}

/// `a - b`
pub fn subtract(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "subtract", step)?;
    Ok(a - b)
}

/// `a * b`
pub fn multiply(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "multiply", step)?;
    Ok(a * b)
}

/// Divides `a` by `b`.
///
/// # Errors
/// `DomainError::DivisionByZero` when `b` is zero.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::arithmetic::divide;
///
/// assert_eq!(divide(&[7.0, 2.0], 0).unwrap(), 3.5);
/// assert!(divide(&[7.0, 0.0], 0).is_err());
/// ```
pub fn divide(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "divide", step)?;
    if b == 0.0 {
        return Err(DomainError::DivisionByZero { operator: "divide",
                                                 step }.into());
    }
    Ok(a / b)
}

/// Raises `a` to the power `b`.
pub fn power(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "power", step)?;
    Ok(a.powf(b))
}

/// The larger of `a` and `b`.
pub fn max(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "max", step)?;
    Ok(a.max(b))
}

/// The smaller of `a` and `b`.
pub fn min(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "min", step)?;
    Ok(a.min(b))
}

/// Floored modulo: the result takes the sign of the divisor, so
/// `remainder(-7, 3)` is `2`.
///
/// Registered under the dataset's spelling, `reminder`.
///
/// # Errors
/// `DomainError::DivisionByZero` when `b` is zero.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::arithmetic::remainder;
///
/// assert_eq!(remainder(&[17.0, 5.0], 0).unwrap(), 2.0);
/// assert_eq!(remainder(&[-7.0, 3.0], 0).unwrap(), 2.0);
/// assert_eq!(remainder(&[7.0, -3.0], 0).unwrap(), -2.0);
/// ```
pub fn remainder(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "reminder", step)?;
    if b == 0.0 {
        return Err(DomainError::DivisionByZero { operator: "reminder",
                                                 step }.into());
    }
    let m = a % b;
    if m != 0.0 && (m < 0.0) != (b < 0.0) {
        Ok(m + b)
    } else {
        Ok(m)
    }
}

/// Square root.
///
/// # Errors
/// `DomainError::InvalidArgument` for negative input.
pub fn sqrt(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "sqrt", step)?;
    if a < 0.0 {
        return Err(DomainError::InvalidArgument { operator: "sqrt",
                                                  details: format!("{a} is negative"),
                                                  step }.into());
    }
    Ok(a.sqrt())
}

/// Rounds toward negative infinity.
pub fn floor(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "floor", step)?;
    Ok(a.floor())
}

/// Natural logarithm.
///
/// # Errors
/// `DomainError::InvalidArgument` for zero or negative input.
pub fn log(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "log", step)?;
    if a <= 0.0 {
        return Err(DomainError::InvalidArgument { operator: "log",
                                                  details: format!("{a} is not positive"),
                                                  step }.into());
    }
    Ok(a.ln())
}

/// `1 / a`
///
/// # Errors
/// `DomainError::DivisionByZero` when `a` is zero.
pub fn inverse(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "inverse", step)?;
    if a == 0.0 {
        return Err(DomainError::DivisionByZero { operator: "inverse",
                                                 step }.into());
    }
    Ok(1.0 / a)
}

/// `-a`
pub fn negate(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "negate", step)?;
    Ok(-a)
}

/// Sine of an angle in radians.
pub fn sine(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "sine", step)?;
    Ok(a.sin())
}

/// Cosine of an angle in radians.
pub fn cosine(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "cosine", step)?;
    Ok(a.cos())
}

/// Tangent of an angle in radians.
pub fn tangent(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a] = expect_args(args, "tangent", step)?;
    Ok(a.tan())
}
