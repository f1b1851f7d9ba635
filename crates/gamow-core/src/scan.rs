// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Temperature Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulation of the Gamow-peak quantities over a temperature grid.

use ndarray::{Array1, Array2};

use gamow_types::error::{require_positive, RateError, RateResult};
use gamow_types::reaction::Reaction;

use crate::gamow::gamow_energy;

/// Column layout of [`rate_table`].
pub const COL_T6: usize = 0;
pub const COL_E0: usize = 1;
pub const COL_DELTA: usize = 2;
pub const COL_TAU: usize = 3;
pub const COL_RATE: usize = 4;
pub const N_COLS: usize = 5;

/// Log-spaced T₆ grid from `t6_min` to `t6_max` inclusive.
pub fn log_temperatures(t6_min: f64, t6_max: f64, points: usize) -> RateResult<Array1<f64>> {
    require_positive("t6_min", t6_min)?;
    require_positive("t6_max", t6_max)?;
    if t6_max <= t6_min {
        return Err(RateError::InvalidArgument(format!(
            "t6_max ({t6_max}) must exceed t6_min ({t6_min})"
        )));
    }
    if points < 2 {
        return Err(RateError::InvalidArgument(format!(
            "temperature grid needs at least 2 points, got {points}"
        )));
    }
    let mut grid = Array1::logspace(10.0, t6_min.log10(), t6_max.log10(), points);
    // Pin the endpoints against log/exp roundoff.
    grid[0] = t6_min;
    grid[points - 1] = t6_max;
    Ok(grid)
}

/// One row per temperature: `[T6, E0, delta, tau, rate]`.
///
/// Fails on the first temperature the Gamow kernel rejects.
pub fn rate_table(
    reaction: &Reaction,
    temperatures: &Array1<f64>,
    s_kevb: f64,
) -> RateResult<Array2<f64>> {
    let mut table = Array2::zeros((temperatures.len(), N_COLS));
    for (i, &t6) in temperatures.iter().enumerate() {
        let peak = gamow_energy(reaction.a1, reaction.z1, reaction.a2, reaction.z2, t6, s_kevb)?;
        table[[i, COL_T6]] = t6;
        table[[i, COL_E0]] = peak.e0_kev;
        table[[i, COL_DELTA]] = peak.delta_kev;
        table[[i, COL_TAU]] = peak.tau;
        table[[i, COL_RATE]] = peak.rate_cm3_s;
    }
    Ok(table)
}
