use crate::CatalogError;
use std::fmt;

/// Retail price of a device, in roubles.
///
/// Always finite and non-negative. Rendered with the default decimal
/// formatting, so whole amounts print without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        // normalize -0.0
        Ok(Self(amount.abs()))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amount_has_no_fraction() {
        assert_eq!(Price::new(5000.0).unwrap().to_string(), "5000");
        assert_eq!(Price::new(4999.5).unwrap().to_string(), "4999.5");
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(matches!(
            Price::new(-1.0),
            Err(CatalogError::InvalidPrice(_))
        ));
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(Price::new(-0.0).unwrap().to_string(), "0");
    }
}
