/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, plus the decimal
/// rounding used when reporting ratios and answers.
///
/// Checked conversions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or a `DomainError` naming the primitive that asked for
/// it.
pub mod num;
