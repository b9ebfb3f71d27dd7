//! Numeric representation shared by every arithmetic combinator.
//!
//! Integers are kept exact in an `i128`; anything that cannot stay exact
//! (fractions, non-integral powers, overflowing literals) becomes an `f64`.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// A number carried by [`Value::Number`](super::Value::Number).
///
/// Equality and ordering compare across the two representations, so
/// `Number::Integer(2) == Number::Float(2.0)`.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::Number;
///
/// let sum = Number::Integer(2).checked_add(Number::Float(0.5), "Add").unwrap();
/// assert_eq!(sum, Number::Float(2.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// An exact integer.
    Integer(i128),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Returns the number as an `f64`, possibly losing precision.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(integer) => integer as f64,
            Self::Float(float) => float,
        }
    }

    /// Returns the number as an exact integer, if it has no fractional part.
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(self) -> Option<i128> {
        match self {
            Self::Integer(integer) => Some(integer),
            Self::Float(float)
                if float.is_finite()
                    && float.fract() == 0.0
                    && float.abs() < 1.0e38 =>
            {
                Some(float as i128)
            }
            Self::Float(_) => None,
        }
    }

    /// Returns the number as a sequence index, if it is a non-negative integer.
    pub fn as_index(self) -> Option<usize> {
        self.as_integer()
            .and_then(|integer| usize::try_from(integer).ok())
    }

    /// Adds two numbers, failing on integer overflow.
    pub fn checked_add(self, other: Self, combinator: &'static str) -> Result<Self> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_add(right)
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            (left, right) => Ok(Self::Float(left.as_f64() + right.as_f64())),
        }
    }

    /// Subtracts `other` from `self`, failing on integer overflow.
    pub fn checked_sub(self, other: Self, combinator: &'static str) -> Result<Self> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_sub(right)
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            (left, right) => Ok(Self::Float(left.as_f64() - right.as_f64())),
        }
    }

    /// Multiplies two numbers, failing on integer overflow.
    pub fn checked_mul(self, other: Self, combinator: &'static str) -> Result<Self> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_mul(right)
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            (left, right) => Ok(Self::Float(left.as_f64() * right.as_f64())),
        }
    }

    /// Divides `self` by `other`.
    ///
    /// Integer division stays exact when the divisor divides evenly and
    /// falls back to a float otherwise.
    pub fn checked_div(self, other: Self, combinator: &'static str) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero { combinator });
        }
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => {
                match (left.checked_div(right), left.checked_rem(right)) {
                    (None, _) => Err(Error::Overflow { combinator }),
                    (Some(quotient), Some(0)) => Ok(Self::Integer(quotient)),
                    _ => Ok(Self::Float(Self::Integer(left).as_f64() / Self::Integer(right).as_f64())),
                }
            }
            (left, right) => Ok(Self::Float(left.as_f64() / right.as_f64())),
        }
    }

    /// Remainder of `self` divided by `other`, with the sign of `self`.
    pub fn checked_rem(self, other: Self, combinator: &'static str) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero { combinator });
        }
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_rem(right)
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            (left, right) => Ok(Self::Float(left.as_f64() % right.as_f64())),
        }
    }

    /// Raises `self` to the power `exponent`.
    pub fn checked_pow(self, exponent: Self, combinator: &'static str) -> Result<Self> {
        match (self, exponent) {
            (Self::Integer(base), Self::Integer(power)) if power >= 0 => {
                let power = u32::try_from(power).map_err(|_| Error::Overflow { combinator })?;
                base.checked_pow(power)
                    .map(Self::Integer)
                    .ok_or(Error::Overflow { combinator })
            }
            (base, power) => Ok(Self::Float(base.as_f64().powf(power.as_f64()))),
        }
    }

    /// Negates the number.
    pub fn checked_neg(self, combinator: &'static str) -> Result<Self> {
        match self {
            Self::Integer(integer) => integer
                .checked_neg()
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            Self::Float(float) => Ok(Self::Float(-float)),
        }
    }

    /// Absolute value of the number.
    pub fn checked_abs(self, combinator: &'static str) -> Result<Self> {
        match self {
            Self::Integer(integer) => integer
                .checked_abs()
                .map(Self::Integer)
                .ok_or(Error::Overflow { combinator }),
            Self::Float(float) => Ok(Self::Float(float.abs())),
        }
    }

    /// Total ordering across both representations.
    ///
    /// `NaN` sorts after every other number.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (left, right) => left.as_f64().total_cmp(&right.as_f64()),
        }
    }

    /// Parses a decimal literal, preferring the exact integer form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::value::Number;
    ///
    /// assert_eq!(Number::parse("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::parse(" 1.5 "), Some(Number::Float(1.5)));
    /// assert_eq!(Number::parse("abc"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<i128>().map(Self::Integer).ok().or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|float| !float.is_nan() || trimmed.eq_ignore_ascii_case("nan"))
                .map(Self::Float)
        })
    }

    fn is_zero(self) -> bool {
        match self {
            Self::Integer(integer) => integer == 0,
            Self::Float(float) => float == 0.0,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (left, right) => left.as_f64() == right.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (left, right) => left.as_f64().partial_cmp(&right.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Float(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1.0e21 => {
                write!(formatter, "{float:.0}")
            }
            Self::Float(float) => write!(formatter, "{float}"),
        }
    }
}

impl From<i128> for Number {
    fn from(integer: i128) -> Self {
        Self::Integer(integer)
    }
}

impl From<f64> for Number {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}
