// src/surface.rs
//! Scenario surfaces over a spot/volatility grid
//!
//! # Evaluation Model
//!
//! A surface is an N×N matrix produced by perturbing the base parameters
//! along two axes:
//!
//! ```text
//! rows    ← N evenly spaced volatilities in [vol_min, vol_max]
//! columns ← N evenly spaced spot prices  in [spot_min, spot_max]
//! cell    ← metric(price(T, K, spot[col], vol[row], r))
//! ```
//!
//! Maturity, rate, and (except for the pricing-error metric) strike are held
//! at their base values. Every cell is an independent exact valuation (no
//! resampling or interpolation), so the double loop is embarrassingly
//! parallel and is evaluated with rayon. Cells are addressed by position,
//! which makes the result independent of evaluation order and thread count.

use crate::error::{validation::*, BsError, BsResult};
use crate::params::MarketParameters;
use crate::pricing::{price, PricingResult};
use bitflags::bitflags;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

bitflags! {
    /// Selects which matrices a single grid sweep produces
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SurfaceSet: u32 {
        const NONE       = 0;
        const CALL_PNL   = 1 << 0;
        const PUT_PNL    = 1 << 1;
        const CALL_DELTA = 1 << 2;
        const CALL_GAMMA = 1 << 3;
    }
}

/// Base parameters plus the grid to sweep them over
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub base: MarketParameters,
    pub spot_min: f64,
    pub spot_max: f64,
    pub vol_min: f64,
    pub vol_max: f64,
    /// Points per axis, inclusive of both endpoints
    pub points: usize,
}

impl SurfaceConfig {
    /// Validate the grid specification
    ///
    /// # Errors
    ///
    /// - `InvalidRange` when a bound pair is reversed or `points <= 1`
    /// - `InvalidParameter` when `spot_min` is not positive (every cell's
    ///   spot must survive `MarketParameters::validate`) or the base
    ///   parameters are themselves invalid
    pub fn validate(&self) -> BsResult<()> {
        self.base.validate()?;
        validate_positive("spot_min", self.spot_min)?;
        validate_ordered("spot", self.spot_min, self.spot_max)?;
        validate_ordered("vol", self.vol_min, self.vol_max)?;
        validate_grid_points(self.points)?;
        Ok(())
    }

    /// Build the (spot, vol) coordinate axes, strictly increasing
    fn axes(&self) -> (Array1<f64>, Array1<f64>) {
        (
            Array1::linspace(self.spot_min, self.spot_max, self.points),
            Array1::linspace(self.vol_min, self.vol_max, self.points),
        )
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            base: MarketParameters::default(),
            spot_min: 80.0,
            spot_max: 120.0,
            vol_min: 0.1,
            vol_max: 0.3,
            points: 10,
        }
    }
}

/// The scalar extracted from each grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceMetric {
    /// Modeled call value minus the premium paid
    CallPnl { purchase_price: f64 },

    /// Modeled put value minus the premium paid
    PutPnl { purchase_price: f64 },

    /// Modeled call value minus an observed market quote. The quote's strike
    /// replaces the base strike in every cell so model and market price the
    /// same contract.
    PricingError { market_price: f64, strike: f64 },

    /// Δ_call = Φ(d₁)
    CallDelta,

    /// Γ = φ(d₁) / (S·σ·√T)
    CallGamma,
}

impl SurfaceMetric {
    fn extract(&self, result: &PricingResult) -> f64 {
        match self {
            SurfaceMetric::CallPnl { purchase_price } => result.call_price - purchase_price,
            SurfaceMetric::PutPnl { purchase_price } => result.put_price - purchase_price,
            SurfaceMetric::PricingError { market_price, .. } => result.call_price - market_price,
            SurfaceMetric::CallDelta => result.call_delta,
            SurfaceMetric::CallGamma => result.call_gamma,
        }
    }

    fn strike_override(&self) -> Option<f64> {
        match self {
            SurfaceMetric::PricingError { strike, .. } => Some(*strike),
            _ => None,
        }
    }

    fn validate(&self) -> BsResult<()> {
        match self {
            SurfaceMetric::CallPnl { purchase_price } => {
                validate_finite("purchase_price", *purchase_price)
            }
            SurfaceMetric::PutPnl { purchase_price } => {
                validate_finite("purchase_price", *purchase_price)
            }
            SurfaceMetric::PricingError {
                market_price,
                strike,
            } => {
                validate_finite("market_price", *market_price)?;
                validate_finite("quote_strike", *strike)?;
                validate_positive("quote_strike", *strike)
            }
            SurfaceMetric::CallDelta | SurfaceMetric::CallGamma => Ok(()),
        }
    }
}

/// One evaluated surface: coordinate axes plus the value matrix
///
/// `values[[row, col]]` corresponds to `vol_axis[row]` and `spot_axis[col]`;
/// row 0 holds vol_min, column 0 holds spot_min.
#[derive(Debug, Clone)]
pub struct Surface {
    pub spot_axis: Array1<f64>,
    pub vol_axis: Array1<f64>,
    pub values: Array2<f64>,
}

/// Surfaces produced by one sweep of [`evaluate_surface_set`]
///
/// Unrequested members are `None`. All matrices share the same axes.
#[derive(Debug, Clone)]
pub struct SurfaceBundle {
    pub spot_axis: Array1<f64>,
    pub vol_axis: Array1<f64>,
    pub call_pnl: Option<Array2<f64>>,
    pub put_pnl: Option<Array2<f64>>,
    pub call_delta: Option<Array2<f64>>,
    pub call_gamma: Option<Array2<f64>>,
}

/// Price every grid cell once, returning the full pricing results in
/// row-major (vol-major) order.
fn sweep_grid(
    cfg: &SurfaceConfig,
    spots: &[f64],
    vols: &[f64],
    strike: f64,
) -> BsResult<Vec<PricingResult>> {
    let n = cfg.points;
    (0..n * n)
        .into_par_iter()
        .map(|idx| {
            let scenario = MarketParameters {
                current_price: spots[idx % n],
                volatility: vols[idx / n],
                strike,
                ..cfg.base
            };
            price(&scenario)
        })
        .collect()
}

/// Evaluate one metric over the grid described by `cfg`.
///
/// # Errors
///
/// Propagates `InvalidRange` / `InvalidParameter` from [`SurfaceConfig`],
/// the metric payload, and per-cell pricing.
pub fn evaluate_surface(cfg: &SurfaceConfig, metric: &SurfaceMetric) -> BsResult<Surface> {
    cfg.validate()?;
    metric.validate()?;

    let (spot_axis, vol_axis) = cfg.axes();
    let strike = metric.strike_override().unwrap_or(cfg.base.strike);

    let spots = spot_axis.to_vec();
    let vols = vol_axis.to_vec();
    let results = sweep_grid(cfg, &spots, &vols, strike)?;

    let n = cfg.points;
    let cells: Vec<f64> = results.iter().map(|r| metric.extract(r)).collect();
    let values = Array2::from_shape_vec((n, n), cells).map_err(|e| BsError::InvalidRange {
        field: "points".to_string(),
        reason: e.to_string(),
    })?;

    Ok(Surface {
        spot_axis,
        vol_axis,
        values,
    })
}

/// Evaluate several surfaces in one grid sweep.
///
/// Each cell is priced exactly once; every matrix selected in `set` is then
/// filled from the shared results. Call and put P&L use the supplied
/// purchase premiums.
pub fn evaluate_surface_set(
    cfg: &SurfaceConfig,
    set: SurfaceSet,
    call_purchase_price: f64,
    put_purchase_price: f64,
) -> BsResult<SurfaceBundle> {
    cfg.validate()?;
    if set.contains(SurfaceSet::CALL_PNL) {
        validate_finite("call_purchase_price", call_purchase_price)?;
    }
    if set.contains(SurfaceSet::PUT_PNL) {
        validate_finite("put_purchase_price", put_purchase_price)?;
    }

    let (spot_axis, vol_axis) = cfg.axes();
    let spots = spot_axis.to_vec();
    let vols = vol_axis.to_vec();
    let results = sweep_grid(cfg, &spots, &vols, cfg.base.strike)?;

    let n = cfg.points;
    let grid_of = |f: &dyn Fn(&PricingResult) -> f64| {
        Array2::from_shape_fn((n, n), |(row, col)| f(&results[row * n + col]))
    };

    let call_pnl = if set.contains(SurfaceSet::CALL_PNL) {
        Some(grid_of(&|r| r.call_price - call_purchase_price))
    } else {
        None
    };
    let put_pnl = if set.contains(SurfaceSet::PUT_PNL) {
        Some(grid_of(&|r| r.put_price - put_purchase_price))
    } else {
        None
    };
    let call_delta = if set.contains(SurfaceSet::CALL_DELTA) {
        Some(grid_of(&|r| r.call_delta))
    } else {
        None
    };
    let call_gamma = if set.contains(SurfaceSet::CALL_GAMMA) {
        Some(grid_of(&|r| r.call_gamma))
    } else {
        None
    };

    Ok(SurfaceBundle {
        spot_axis,
        vol_axis,
        call_pnl,
        put_pnl,
        call_delta,
        call_gamma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_inclusive_and_increasing() {
        let cfg = SurfaceConfig::default();
        let (spots, vols) = cfg.axes();

        assert_eq!(spots.len(), 10);
        assert_eq!(vols.len(), 10);
        assert!((spots[0] - 80.0).abs() < 1e-12);
        assert!((spots[9] - 120.0).abs() < 1e-12);
        assert!((vols[0] - 0.1).abs() < 1e-12);
        assert!((vols[9] - 0.3).abs() < 1e-12);

        for w in spots.to_vec().windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_metric_strike_override() {
        let metric = SurfaceMetric::PricingError {
            market_price: 4.2,
            strike: 95.0,
        };
        assert_eq!(metric.strike_override(), Some(95.0));
        assert_eq!(SurfaceMetric::CallDelta.strike_override(), None);
    }

    #[test]
    fn test_nonpositive_quote_strike_rejected() {
        let metric = SurfaceMetric::PricingError {
            market_price: 4.2,
            strike: 0.0,
        };
        assert!(evaluate_surface(&SurfaceConfig::default(), &metric).is_err());
    }
}
