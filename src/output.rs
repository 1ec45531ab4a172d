// src/output.rs
//! Row and CSV export for evaluated surfaces
//!
//! Downstream collaborators (persistence, rendering) consume grids as flat
//! rows; these helpers produce that shape. Nothing here is called
//! implicitly: the engine itself never writes.

use crate::surface::Surface;
use std::fs::File;
use std::io::{self, Write};

/// One grid cell in the flat form a persistence layer stores:
/// the volatility shock, the spot shock, the resulting value, and whether
/// the value belongs to the call or the put leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PnlRow {
    pub vol: f64,
    pub spot: f64,
    pub price: f64,
    pub is_call: bool,
}

/// Flatten a surface into rows, vol-major (row 0 of the matrix first)
pub fn surface_rows(surface: &Surface, is_call: bool) -> Vec<PnlRow> {
    surface
        .values
        .indexed_iter()
        .map(|((row, col), &value)| PnlRow {
            vol: surface.vol_axis[row],
            spot: surface.spot_axis[col],
            price: value,
            is_call,
        })
        .collect()
}

/// Write one surface as `vol,spot,<label>` CSV rows
pub fn write_surface_to_csv(filename: &str, surface: &Surface, value_label: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "vol,spot,{}", value_label)?;
    for ((row, col), value) in surface.values.indexed_iter() {
        writeln!(
            file,
            "{},{},{}",
            surface.vol_axis[row], surface.spot_axis[col], value
        )?;
    }
    Ok(())
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
