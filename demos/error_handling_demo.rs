// demos/error_handling_demo.rs
use bs_surface::params::MarketParameters;
use bs_surface::pricing::price;
use bs_surface::surface::{evaluate_surface, SurfaceConfig, SurfaceMetric};

fn main() {
    println!("Error Handling Demo for bs-surface");
    println!("===================================\n");

    // Test 1: Negative strike
    println!("1. Testing negative strike...");

    let bad_strike = MarketParameters {
        strike: -10.0,
        ..Default::default()
    };

    match price(&bad_strike) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: NaN volatility
    println!("\n2. Testing NaN volatility...");

    let nan_vol = MarketParameters {
        volatility: f64::NAN,
        ..Default::default()
    };

    match price(&nan_vol) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Expired option is a branch, not an error
    println!("\n3. Testing expired option (degenerate branch, not an error)...");

    let expired = MarketParameters {
        time_to_maturity: 0.0,
        strike: 90.0,
        current_price: 100.0,
        ..Default::default()
    };

    match price(&expired) {
        Ok(result) => println!(
            "   ✓ Priced at intrinsic value: call = {}, put = {}",
            result.call_price, result.put_price
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 4: Reversed spot bounds
    println!("\n4. Testing reversed spot bounds...");

    let reversed = SurfaceConfig {
        spot_min: 120.0,
        spot_max: 80.0,
        ..Default::default()
    };

    match evaluate_surface(&reversed, &SurfaceMetric::CallDelta) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Single-point grid
    println!("\n5. Testing single-point grid...");

    let too_coarse = SurfaceConfig {
        points: 1,
        ..Default::default()
    };

    match evaluate_surface(&too_coarse, &SurfaceMetric::CallGamma) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\nError handling demo completed.");
}
