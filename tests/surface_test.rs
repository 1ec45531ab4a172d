// tests/surface_test.rs
use bs_surface::error::BsError;
use bs_surface::output::{surface_rows, PnlRow};
use bs_surface::params::MarketParameters;
use bs_surface::pricing::price;
use bs_surface::surface::{
    evaluate_surface, evaluate_surface_set, SurfaceConfig, SurfaceMetric, SurfaceSet,
};

fn reference_config() -> SurfaceConfig {
    // The reference grid: N=10 over spot in [80, 120], vol in [0.1, 0.3]
    SurfaceConfig {
        base: MarketParameters {
            time_to_maturity: 1.0,
            strike: 100.0,
            current_price: 100.0,
            volatility: 0.2,
            interest_rate: 0.05,
        },
        spot_min: 80.0,
        spot_max: 120.0,
        vol_min: 0.1,
        vol_max: 0.3,
        points: 10,
    }
}

#[test]
fn test_grid_shape_and_axis_ordering() {
    let surface = evaluate_surface(&reference_config(), &SurfaceMetric::CallDelta)
        .expect("Valid configuration");

    assert_eq!(surface.values.dim(), (10, 10));
    assert_eq!(surface.spot_axis.len(), 10);
    assert_eq!(surface.vol_axis.len(), 10);

    // Row 0 = vol_min, row 9 = vol_max; column 0 = spot_min, column 9 = spot_max
    assert!((surface.vol_axis[0] - 0.1).abs() < 1e-12);
    assert!((surface.vol_axis[9] - 0.3).abs() < 1e-12);
    assert!((surface.spot_axis[0] - 80.0).abs() < 1e-12);
    assert!((surface.spot_axis[9] - 120.0).abs() < 1e-12);

    // Linear spacing between inclusive endpoints
    let vol_step = (0.3 - 0.1) / 9.0;
    for i in 0..10 {
        assert!(
            (surface.vol_axis[i] - (0.1 + vol_step * i as f64)).abs() < 1e-12,
            "vol axis not linearly spaced at index {}",
            i
        );
    }
}

#[test]
fn test_cells_match_independent_valuations() {
    let cfg = reference_config();
    let metric = SurfaceMetric::CallPnl {
        purchase_price: 5.0,
    };
    let surface = evaluate_surface(&cfg, &metric).expect("Valid configuration");

    // Spot-check corners and an interior cell against direct pricing
    for &(row, col) in &[(0usize, 0usize), (0, 9), (9, 0), (9, 9), (4, 7)] {
        let scenario = MarketParameters {
            current_price: surface.spot_axis[col],
            volatility: surface.vol_axis[row],
            ..cfg.base
        };
        let expected = price(&scenario).expect("Valid parameters").call_price - 5.0;
        let actual = surface.values[[row, col]];
        assert_eq!(
            actual, expected,
            "Cell ({}, {}) diverges from an independent valuation",
            row, col
        );
    }
}

#[test]
fn test_put_pnl_surface() {
    let cfg = reference_config();
    let metric = SurfaceMetric::PutPnl {
        purchase_price: 3.0,
    };
    let surface = evaluate_surface(&cfg, &metric).expect("Valid configuration");

    let scenario = MarketParameters {
        current_price: surface.spot_axis[0],
        volatility: surface.vol_axis[0],
        ..cfg.base
    };
    let expected = price(&scenario).expect("Valid parameters").put_price - 3.0;
    assert_eq!(surface.values[[0, 0]], expected);
}

#[test]
fn test_pricing_error_surface_uses_quote_strike() {
    let cfg = reference_config();
    let metric = SurfaceMetric::PricingError {
        market_price: 12.5,
        strike: 95.0,
    };
    let surface = evaluate_surface(&cfg, &metric).expect("Valid configuration");

    // Every cell must be priced against the quote's strike, not the base one
    let scenario = MarketParameters {
        current_price: surface.spot_axis[3],
        volatility: surface.vol_axis[6],
        strike: 95.0,
        ..cfg.base
    };
    let expected = price(&scenario).expect("Valid parameters").call_price - 12.5;
    assert_eq!(surface.values[[6, 3]], expected);
}

#[test]
fn test_greek_surfaces() {
    let cfg = reference_config();

    let delta = evaluate_surface(&cfg, &SurfaceMetric::CallDelta).expect("Valid configuration");
    let gamma = evaluate_surface(&cfg, &SurfaceMetric::CallGamma).expect("Valid configuration");

    // Delta grows with spot along any row; gamma stays positive on this grid
    for row in 0..10 {
        for col in 1..10 {
            assert!(
                delta.values[[row, col]] > delta.values[[row, col - 1]],
                "Delta not increasing in spot at row {}",
                row
            );
        }
        for col in 0..10 {
            assert!(gamma.values[[row, col]] > 0.0);
        }
    }
}

#[test]
fn test_surface_set_matches_single_metric_sweeps() {
    let cfg = reference_config();
    let bundle = evaluate_surface_set(
        &cfg,
        SurfaceSet::CALL_PNL | SurfaceSet::PUT_PNL | SurfaceSet::CALL_GAMMA,
        5.0,
        3.0,
    )
    .expect("Valid configuration");

    let call_pnl = bundle.call_pnl.expect("CALL_PNL was requested");
    let put_pnl = bundle.put_pnl.expect("PUT_PNL was requested");
    let call_gamma = bundle.call_gamma.expect("CALL_GAMMA was requested");
    assert!(bundle.call_delta.is_none(), "CALL_DELTA was not requested");

    let single_call = evaluate_surface(&cfg, &SurfaceMetric::CallPnl { purchase_price: 5.0 })
        .expect("Valid configuration");
    let single_put = evaluate_surface(&cfg, &SurfaceMetric::PutPnl { purchase_price: 3.0 })
        .expect("Valid configuration");
    let single_gamma =
        evaluate_surface(&cfg, &SurfaceMetric::CallGamma).expect("Valid configuration");

    assert_eq!(call_pnl, single_call.values);
    assert_eq!(put_pnl, single_put.values);
    assert_eq!(call_gamma, single_gamma.values);
}

#[test]
fn test_degenerate_volatility_row() {
    // vol_min = 0 is allowed: that row prices through the intrinsic branch
    let cfg = SurfaceConfig {
        vol_min: 0.0,
        ..reference_config()
    };
    let surface = evaluate_surface(&cfg, &SurfaceMetric::CallDelta).expect("Valid configuration");

    for col in 0..10 {
        assert_eq!(
            surface.values[[0, col]],
            0.0,
            "Zero-volatility row must report zero delta at column {}",
            col
        );
    }
    // The next row is analytic again
    assert!(surface.values[[1, 9]] > 0.0);
}

#[test]
fn test_reversed_spot_bounds_rejected() {
    let cfg = SurfaceConfig {
        spot_min: 120.0,
        spot_max: 80.0,
        ..reference_config()
    };

    match evaluate_surface(&cfg, &SurfaceMetric::CallDelta) {
        Err(BsError::InvalidRange { field, .. }) => assert_eq!(field, "spot"),
        other => panic!("Expected InvalidRange for reversed spot bounds, got {:?}", other),
    }
}

#[test]
fn test_reversed_vol_bounds_rejected() {
    let cfg = SurfaceConfig {
        vol_min: 0.3,
        vol_max: 0.1,
        ..reference_config()
    };
    assert!(matches!(
        evaluate_surface(&cfg, &SurfaceMetric::CallDelta),
        Err(BsError::InvalidRange { .. })
    ));
}

#[test]
fn test_degenerate_resolution_rejected() {
    for points in [0usize, 1] {
        let cfg = SurfaceConfig {
            points,
            ..reference_config()
        };
        assert!(
            matches!(
                evaluate_surface(&cfg, &SurfaceMetric::CallDelta),
                Err(BsError::InvalidRange { .. })
            ),
            "points = {} must be rejected",
            points
        );
    }
}

#[test]
fn test_nonpositive_spot_min_rejected() {
    let cfg = SurfaceConfig {
        spot_min: 0.0,
        ..reference_config()
    };
    assert!(matches!(
        evaluate_surface(&cfg, &SurfaceMetric::CallDelta),
        Err(BsError::InvalidParameter { .. })
    ));
}

#[test]
fn test_surface_rows_flatten_vol_major() {
    let cfg = reference_config();
    let surface = evaluate_surface(&cfg, &SurfaceMetric::CallPnl { purchase_price: 5.0 })
        .expect("Valid configuration");

    let rows = surface_rows(&surface, true);
    assert_eq!(rows.len(), 100);

    // First row is the (vol_min, spot_min) cell, flagged as the call leg
    assert_eq!(
        rows[0],
        PnlRow {
            vol: surface.vol_axis[0],
            spot: surface.spot_axis[0],
            price: surface.values[[0, 0]],
            is_call: true,
        }
    );

    // Row-major order: index 10 starts the second volatility row
    assert_eq!(rows[10].vol, surface.vol_axis[1]);
    assert_eq!(rows[10].spot, surface.spot_axis[0]);

    let put_rows = surface_rows(&surface, false);
    assert!(put_rows.iter().all(|row| !row.is_call));
}
