use super::error::PaymentError;
use std::fmt::{self, Display};

/// A validated monetary value: finite and never negative.
///
/// Displays as a plain decimal without a trailing `.0`: `100`, `12.5`. There is
/// never an exponent, so `1e21` renders as `1000000000000000000000` and `1e-7`
/// as `0.0000001`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, PaymentError> {
        if !value.is_finite() {
            return Err(PaymentError::NonFiniteAmount);
        }
        if value < 0.0 {
            return Err(PaymentError::NegativeAmount(value));
        }
        // -0.0 would otherwise display as "-0"
        Ok(Self(value.abs()))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = PaymentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_display_without_fraction() {
        assert_eq!(Amount::from(100).to_string(), "100");
        assert_eq!(Amount::new(150.0).unwrap().to_string(), "150");
        assert_eq!(Amount::new(12.5).unwrap().to_string(), "12.5");
    }

    #[test]
    fn extreme_amounts_display_as_plain_decimals() {
        assert_eq!(Amount::new(1e21).unwrap().to_string(), "1000000000000000000000");
        assert_eq!(Amount::new(1e-7).unwrap().to_string(), "0.0000001");
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(Amount::new(-1.0), Err(PaymentError::NegativeAmount(-1.0)));
        assert_eq!(Amount::new(f64::NAN), Err(PaymentError::NonFiniteAmount));
        assert_eq!(Amount::new(f64::INFINITY), Err(PaymentError::NonFiniteAmount));
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(Amount::new(-0.0).unwrap().to_string(), "0");
    }
}
