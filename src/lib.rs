//! # bs-surface: Closed-Form Option Pricing and Scenario Surfaces
//!
//! A Rust library for analytic Black-Scholes valuation of European options
//! and for exploring how option values respond to spot and volatility moves.
//!
//! ## Key Features
//!
//! - **Closed-Form Pricing**: call/put fair values with delta and gamma from
//!   the standard Black-Scholes solution, intrinsic-value branch at expiry
//! - **Scenario Surfaces**: N×N grids over (spot, volatility) for P&L,
//!   pricing error against a market quote, delta, and gamma
//! - **Parallel Grid Sweeps**: independent cell valuations fan out with
//!   Rayon; results are identical at any thread count
//! - **Eager Validation**: malformed parameters and grids fail with typed
//!   errors instead of silently propagating NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface::params::MarketParameters;
//! use bs_surface::pricing::price;
//!
//! // At-the-money one-year option
//! let params = MarketParameters {
//!     time_to_maturity: 1.0, // Years
//!     strike: 100.0,
//!     current_price: 100.0,  // Spot
//!     volatility: 0.2,
//!     interest_rate: 0.05,
//! };
//!
//! let result = price(&params).expect("Valid parameters");
//! println!("Call: {:.4}, Put: {:.4}", result.call_price, result.put_price);
//! println!("Delta: {:.4}, Gamma: {:.4}", result.call_delta, result.call_gamma);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The library implements the no-dividend Black-Scholes closed form: prices
//! are discounted risk-neutral expectations expressed through the standard
//! normal CDF, and the surfaces re-evaluate that solution exactly at every
//! grid node rather than interpolating.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod output;
pub mod params;
pub mod pricing;
pub mod surface;

// Re-export commonly used types for convenience
pub use error::{BsError, BsResult};
