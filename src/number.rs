use crate::util::num::{DECIMAL_PLACES, f64_as_exact_i64, round_to_places};

/// A numeric value in canonical form.
///
/// Values with no fractional part are always held as `Integer`, so `12` and
/// `12.0` compare and print identically. Downstream exact-match comparisons
/// rely on this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integral value.
    Integer(i64),
    /// A value with a fractional part.
    Real(f64),
}

impl Number {
    /// Builds the canonical representation of `value`.
    ///
    /// # Example
    /// ```
    /// use mathqa::number::Number;
    ///
    /// assert_eq!(Number::canonical(12.0), Number::Integer(12));
    /// assert_eq!(Number::canonical(0.5), Number::Real(0.5));
    /// ```
    #[must_use]
    pub fn canonical(value: f64) -> Self {
        f64_as_exact_i64(value).map_or(Self::Real(value), Self::Integer)
    }

    /// Builds the representation used when reporting an answer: integral
    /// values as integers, everything else rounded to five decimals.
    ///
    /// # Example
    /// ```
    /// use mathqa::number::Number;
    ///
    /// assert_eq!(Number::rounded(1120.0), Number::Integer(1120));
    /// assert_eq!(Number::rounded(2.0 / 3.0), Number::Real(0.66667));
    /// ```
    #[must_use]
    pub fn rounded(value: f64) -> Self {
        match f64_as_exact_i64(value) {
            Some(i) => Self::Integer(i),
            None => Self::canonical(round_to_places(value, DECIMAL_PLACES)),
        }
    }

    /// Returns the value as an `f64`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is held as an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::canonical(v)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
