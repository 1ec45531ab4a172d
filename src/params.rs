// src/params.rs
//! Market parameters for a single European option valuation

use crate::error::{validation::*, BsResult};

/// The five scalar inputs to the Black-Scholes model.
///
/// A value type: construct one per valuation, price it, discard it. Nothing
/// else feeds the model, so two identical instances always price identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketParameters {
    /// Time to maturity T in years
    pub time_to_maturity: f64,
    /// Strike price K
    pub strike: f64,
    /// Current price of the underlying S
    pub current_price: f64,
    /// Annualized volatility σ
    pub volatility: f64,
    /// Continuously-compounded risk-free rate r
    pub interest_rate: f64,
}

impl MarketParameters {
    /// Validate the parameter set.
    ///
    /// Strike and spot must be strictly positive: `ln(S/K)` and the intrinsic
    /// payoff are meaningless otherwise and would propagate NaN. Non-positive
    /// maturity or volatility is NOT an error here: that combination selects
    /// the intrinsic-value branch of [`crate::pricing::price`].
    pub fn validate(&self) -> BsResult<()> {
        validate_finite("strike", self.strike)?;
        validate_positive("strike", self.strike)?;
        validate_finite("current_price", self.current_price)?;
        validate_positive("current_price", self.current_price)?;
        validate_finite("time_to_maturity", self.time_to_maturity)?;
        validate_finite("volatility", self.volatility)?;
        validate_finite("interest_rate", self.interest_rate)?;
        Ok(())
    }

    /// True when the analytic formulas do not apply (expired or certain
    /// world) and pricing falls back to intrinsic value.
    pub fn is_degenerate(&self) -> bool {
        self.time_to_maturity <= 0.0 || self.volatility <= 0.0
    }
}

impl Default for MarketParameters {
    fn default() -> Self {
        MarketParameters {
            time_to_maturity: 1.0,
            strike: 100.0,
            current_price: 100.0,
            volatility: 0.2,
            interest_rate: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(MarketParameters::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_predicate() {
        let expired = MarketParameters {
            time_to_maturity: 0.0,
            ..Default::default()
        };
        assert!(expired.is_degenerate());

        let zero_vol = MarketParameters {
            volatility: 0.0,
            ..Default::default()
        };
        assert!(zero_vol.is_degenerate());

        assert!(!MarketParameters::default().is_degenerate());
    }

    #[test]
    fn test_degenerate_is_still_valid() {
        // Degenerate inputs select a branch, they do not fail validation
        let expired = MarketParameters {
            time_to_maturity: 0.0,
            ..Default::default()
        };
        assert!(expired.validate().is_ok());
    }

    #[test]
    fn test_nonpositive_strike_rejected() {
        let bad = MarketParameters {
            strike: -10.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
