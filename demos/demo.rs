// demos/demo.rs
use bs_surface::math_utils::Timer;
use bs_surface::output;
use bs_surface::params::MarketParameters;
use bs_surface::pricing::price;
use bs_surface::surface::{
    evaluate_surface, evaluate_surface_set, SurfaceConfig, SurfaceMetric, SurfaceSet,
};

fn main() {
    println!("Running bs-surface Demo\n");

    let params = MarketParameters {
        time_to_maturity: 1.0,
        strike: 100.0,
        current_price: 100.0,
        volatility: 0.2,
        interest_rate: 0.05,
    };

    // --- Single-Point Pricing ---
    println!("--- Single-Point Pricing ---");
    let result = price(&params).expect("Valid parameters");
    println!("Call Price: {:.4}", result.call_price);
    println!("Put Price: {:.4}", result.put_price);
    println!("Call Delta: {:.4}", result.call_delta);
    println!("Put Delta: {:.4}", result.put_delta);
    println!("Gamma: {:.6}", result.call_gamma);

    let parity = result.put_price - result.call_price
        - (params.strike * (-params.interest_rate * params.time_to_maturity).exp()
            - params.current_price);
    println!("Put-Call Parity Residual: {:.2e}\n", parity.abs());

    // --- P&L Surfaces (call and put in one sweep) ---
    println!("--- P&L Surfaces ---");
    let cfg = SurfaceConfig {
        base: params,
        spot_min: params.current_price * 0.8,
        spot_max: params.current_price * 1.2,
        vol_min: params.volatility * 0.5,
        vol_max: params.volatility * 1.5,
        points: 10,
    };

    let call_paid = 5.0;
    let put_paid = 5.0;

    let mut timer = Timer::new();
    timer.start();
    let bundle = evaluate_surface_set(
        &cfg,
        SurfaceSet::CALL_PNL | SurfaceSet::PUT_PNL,
        call_paid,
        put_paid,
    )
    .expect("Valid configuration");
    let elapsed = timer.elapsed_ms();

    let call_pnl = bundle.call_pnl.expect("CALL_PNL requested");
    let put_pnl = bundle.put_pnl.expect("PUT_PNL requested");
    println!(
        "Evaluated {}x{} call + put P&L grids in {:.3} ms",
        cfg.points, cfg.points, elapsed
    );
    println!(
        "Call P&L range: [{:.2}, {:.2}]",
        call_pnl.iter().cloned().fold(f64::INFINITY, f64::min),
        call_pnl.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );
    println!(
        "Put P&L range: [{:.2}, {:.2}]\n",
        put_pnl.iter().cloned().fold(f64::INFINITY, f64::min),
        put_pnl.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );

    // --- Greek and Pricing-Error Surfaces ---
    println!("--- Greek and Pricing-Error Surfaces ---");
    let delta_surface =
        evaluate_surface(&cfg, &SurfaceMetric::CallDelta).expect("Valid configuration");
    println!(
        "Delta at (vol_min, spot_min): {:.4}",
        delta_surface.values[[0, 0]]
    );
    println!(
        "Delta at (vol_max, spot_max): {:.4}",
        delta_surface.values[[cfg.points - 1, cfg.points - 1]]
    );

    // Pretend a quote for the 95 strike trades at 12.50
    let error_surface = evaluate_surface(
        &cfg,
        &SurfaceMetric::PricingError {
            market_price: 12.50,
            strike: 95.0,
        },
    )
    .expect("Valid configuration");
    println!(
        "Pricing error at base cell: {:.4}\n",
        error_surface.values[[4, 4]]
    );

    // --- CSV Export ---
    let call_surface = bs_surface::surface::Surface {
        spot_axis: bundle.spot_axis.clone(),
        vol_axis: bundle.vol_axis.clone(),
        values: call_pnl,
    };
    match output::write_surface_to_csv("call_pnl.csv", &call_surface, "pnl") {
        Ok(()) => println!("Wrote call P&L grid to call_pnl.csv"),
        Err(e) => println!("Could not write call_pnl.csv: {}", e),
    }

    let rows = output::surface_rows(&call_surface, true);
    println!("Flattened {} rows for persistence", rows.len());
}
