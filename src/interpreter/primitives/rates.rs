use crate::{
    error::DomainError,
    interpreter::{core::EvalResult, primitives::expect_args},
};

/// Distance over time.
///
/// # Errors
/// `DomainError::DivisionByZero` when the time is zero.
pub fn speed(args: &[f64], step: usize) -> EvalResult<f64> {
    let [distance, time] = expect_args(args, "speed", step)?;
    if time == 0.0 {
        return Err(DomainError::DivisionByZero { operator: "speed",
                                                 step }.into());
    }
    Ok(distance / time)
}

/// Mean of the downstream and upstream speeds.
pub fn stream_speed(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "stream_speed", step)?;
    Ok((a + b) / 2.0)
}

/// `a * b * 2`.
///
/// This is not the textbook still-water speed. The dataset's programs were
/// written against this definition, so it stays.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::rates::speed_in_still_water;
///
/// assert_eq!(speed_in_still_water(&[3.0, 5.0], 0).unwrap(), 30.0);
/// ```
pub fn speed_in_still_water(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "speed_in_still_water", step)?;
    Ok(a * b * 2.0)
}

/// Price before a `loss` percent loss that ended at `price`.
///
/// # Errors
/// `DomainError::InvalidArgument` unless `0 < 100 - loss <= 100`.
///
/// # Example
/// ```
/// use mathqa::interpreter::primitives::rates::original_price_before_loss;
///
/// assert_eq!(original_price_before_loss(&[20.0, 80.0], 0).unwrap(), 100.0);
/// assert!(original_price_before_loss(&[100.0, 80.0], 0).is_err());
/// assert!(original_price_before_loss(&[-5.0, 80.0], 0).is_err());
/// ```
pub fn original_price_before_loss(args: &[f64], step: usize) -> EvalResult<f64> {
    let [loss, price] = expect_args(args, "original_price_before_loss", step)?;
    let remaining = 100.0 - loss;
    if !(remaining > 0.0 && remaining <= 100.0) {
        return Err(DomainError::InvalidArgument { operator: "original_price_before_loss",
                                                  details: format!("a loss of {loss}% leaves {remaining}% of the price"),
                                                  step }.into());
    }
    Ok(100.0 / remaining * price)
}

/// Price before a `gain` percent gain that ended at `price`.
///
/// # Errors
/// `DomainError::DivisionByZero` when `gain` is `-100`.
pub fn original_price_before_gain(args: &[f64], step: usize) -> EvalResult<f64> {
    let [gain, price] = expect_args(args, "original_price_before_gain", step)?;
    let total = 100.0 + gain;
    if total == 0.0 {
        return Err(DomainError::DivisionByZero { operator: "original_price_before_gain",
                                                 step }.into());
    }
    Ok(100.0 / total * price)
}

/// `a` percent of `b`.
pub fn p_after_gain(args: &[f64], step: usize) -> EvalResult<f64> {
    let [a, b] = expect_args(args, "p_after_gain", step)?;
    Ok(a / 100.0 * b)
}
