// scripts/benchmark.rs
use bs_surface::math_utils::Timer;
use bs_surface::params::MarketParameters;
use bs_surface::pricing::price;
use bs_surface::surface::{evaluate_surface_set, SurfaceConfig, SurfaceSet};
use std::env;
use std::fs::File;
use std::io::Write;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rayon_threads: usize,
    rust_version: String,
}

impl SystemInfo {
    fn gather() -> Self {
        let os = env::consts::OS.to_string();
        let cpu_cores = num_cpus::get();
        let rayon_threads = rayon::current_num_threads();
        let rust_version = option_env!("CARGO_PKG_RUST_VERSION")
            .unwrap_or("unknown")
            .to_string();

        Self {
            os,
            cpu_cores,
            rayon_threads,
            rust_version,
        }
    }

    fn print(&self) {
        println!("OS: {}", self.os);
        println!("CPU cores: {}", self.cpu_cores);
        println!("Rayon threads: {}", self.rayon_threads);
        println!("Minimum rustc: {}", self.rust_version);
    }
}

fn bench_single_point(iterations: usize) -> (f64, f64) {
    let params = MarketParameters::default();

    let mut timer = Timer::new();
    timer.start();
    let mut accumulator = 0.0;
    for _ in 0..iterations {
        let result = price(&params).expect("Valid parameters");
        accumulator += result.call_price;
    }
    let elapsed_ms = timer.elapsed_ms();

    // The accumulator keeps the loop from being optimized away
    assert!(accumulator.is_finite());

    let per_sec = iterations as f64 / (elapsed_ms / 1000.0);
    (elapsed_ms, per_sec)
}

fn bench_surface_sweep(points: usize) -> (f64, f64) {
    let cfg = SurfaceConfig {
        points,
        ..Default::default()
    };

    let mut timer = Timer::new();
    timer.start();
    let bundle = evaluate_surface_set(
        &cfg,
        SurfaceSet::CALL_PNL | SurfaceSet::PUT_PNL | SurfaceSet::CALL_DELTA | SurfaceSet::CALL_GAMMA,
        5.0,
        5.0,
    )
    .expect("Valid configuration");
    let elapsed_ms = timer.elapsed_ms();

    assert!(bundle.call_pnl.is_some());

    let cells = (points * points) as f64;
    let cells_per_sec = cells / (elapsed_ms / 1000.0);
    (elapsed_ms, cells_per_sec)
}

fn main() {
    println!("bs-surface benchmark");
    println!("====================\n");

    let info = SystemInfo::gather();
    info.print();
    println!(
        "\nRun started: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    // --- Single-point pricing throughput ---
    let iterations = 1_000_000;
    let (point_ms, point_rate) = bench_single_point(iterations);
    println!(
        "Single-point pricing: {} evaluations in {:.1} ms ({:.0} evals/sec)",
        iterations, point_ms, point_rate
    );

    // --- Surface sweeps at increasing resolution ---
    println!("\nSurface sweeps (4 matrices per sweep):");
    println!("points\tcells\ttime_ms\tcells_per_sec");

    let mut lines = Vec::new();
    for points in [10usize, 50, 100, 200, 500] {
        let (sweep_ms, cells_per_sec) = bench_surface_sweep(points);
        println!(
            "{}\t{}\t{:.2}\t{:.0}",
            points,
            points * points,
            sweep_ms,
            cells_per_sec
        );
        lines.push(format!(
            "{},{},{:.4},{:.1}",
            points,
            points * points,
            sweep_ms,
            cells_per_sec
        ));
    }

    // --- CSV output ---
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("surface_bench_{}.csv", timestamp);
    match File::create(&filename) {
        Ok(mut file) => {
            let _ = writeln!(file, "points,cells,time_ms,cells_per_sec");
            for line in &lines {
                let _ = writeln!(file, "{}", line);
            }
            println!("\nBenchmark results written to {}", filename);
        }
        Err(e) => println!("\nCould not write {}: {}", filename, e),
    }
}
