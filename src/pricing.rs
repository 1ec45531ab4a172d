// src/pricing.rs
//! Analytical Black-Scholes prices and Greeks for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options with no dividend yield this has closed-form
//! solutions involving the cumulative normal distribution function Φ(x):
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P  = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//!
//! When the option has expired (T ≤ 0) or the world is certain (σ ≤ 0) the
//! distribution of S_T collapses and the option is worth its intrinsic
//! value. That case is a defined branch of [`price`], not a failure.

use crate::error::BsResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::params::MarketParameters;

/// Fair values and sensitivities for a call and put sharing one parameter set
///
/// # Field Relationships
/// ```text
/// put_delta  = 1 - call_delta
/// put_gamma  = call_gamma        (gamma is strike-symmetric)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    /// Δ_call = ∂C/∂S = Φ(d₁), in [0, 1]
    pub call_delta: f64,
    pub put_delta: f64,
    /// Γ = ∂²V/∂S² = φ(d₁) / (S·σ·√T), identical for call and put
    pub call_gamma: f64,
    pub put_gamma: f64,
}

/// Price a European call/put pair and its first- and second-order Greeks.
///
/// Pure function of the parameters: no state is retained and identical
/// inputs produce bit-identical outputs.
///
/// # Branches
///
/// - **Intrinsic**: T ≤ 0 or σ ≤ 0 → `max(S-K, 0)` / `max(K-S, 0)` with all
///   Greeks zero.
/// - **Analytic**: the closed-form solution above.
///
/// # Errors
///
/// `BsError::InvalidParameter` for non-positive strike or spot, or any
/// non-finite input. NaN is never returned in place of an error.
pub fn price(params: &MarketParameters) -> BsResult<PricingResult> {
    params.validate()?;

    if params.is_degenerate() {
        return Ok(intrinsic(params));
    }

    let s = params.current_price;
    let k = params.strike;
    let r = params.interest_rate;
    let sigma = params.volatility;
    let t = params.time_to_maturity;

    let sqrt_t = t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    let discount = (-r * t).exp();

    let call_delta = norm_cdf(d1);
    let gamma = norm_pdf(d1) / (s * sigma * sqrt_t);

    Ok(PricingResult {
        call_price: s * call_delta - k * discount * norm_cdf(d2),
        put_price: k * discount * norm_cdf(-d2) - s * norm_cdf(-d1),
        call_delta,
        put_delta: 1.0 - call_delta,
        call_gamma: gamma,
        put_gamma: gamma,
    })
}

/// Intrinsic value at/after expiry or under zero volatility
fn intrinsic(params: &MarketParameters) -> PricingResult {
    PricingResult {
        call_price: (params.current_price - params.strike).max(0.0),
        put_price: (params.strike - params.current_price).max(0.0),
        call_delta: 0.0,
        put_delta: 0.0,
        call_gamma: 0.0,
        put_gamma: 0.0,
    }
}
