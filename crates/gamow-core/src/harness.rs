// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Harness
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Batch evaluation of a [`RunConfig`] into labelled report lines.
//!
//! Evaluation order: potentials, distances, barriers, Sommerfeld, Gamow.
//! The first failing case aborts the batch.

use gamow_types::config::RunConfig;
use gamow_types::error::RateResult;

use crate::coulomb::{coulomb_barrier, coulomb_potential, nuclear_distance};
use crate::gamow::gamow_energy;
use crate::report::{barrier_report, gamow_report, sommerfeld_report};
use crate::sommerfeld::sommerfeld;

/// One evaluated call and its summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessEntry {
    /// Call signature, e.g. `GamowEnergy(1, 1, 1, 1, 15, 550)`.
    pub call: String,
    pub summary: String,
}

impl HarnessEntry {
    pub fn line(&self) -> String {
        format!("{}: {}", self.call, self.summary)
    }
}

pub fn run_config(config: &RunConfig) -> RateResult<Vec<HarnessEntry>> {
    let mut entries = Vec::with_capacity(config.len());

    for case in &config.potentials {
        let v = coulomb_potential(case.z1, case.z2, case.r_cm)?;
        entries.push(HarnessEntry {
            call: format!("CoulombPotential({}, {}, {:e})", case.z1, case.z2, case.r_cm),
            summary: format!("V={v:.3e} keV"),
        });
    }

    for r in &config.distances {
        let d = nuclear_distance(r.a1, r.z1, r.a2, r.z2, config.r0_cm)?;
        entries.push(HarnessEntry {
            call: format!("NuclearDistance({}, {}, {}, {})", r.a1, r.z1, r.a2, r.z2),
            summary: format!("r={d:.3e} cm"),
        });
    }

    for r in &config.barriers {
        let barrier = coulomb_barrier(r.a1, r.z1, r.a2, r.z2, config.r0_cm)?;
        entries.push(HarnessEntry {
            call: format!("CoulombBarrier({}, {}, {}, {})", r.a1, r.z1, r.a2, r.z2),
            summary: barrier_report(&barrier),
        });
    }

    for case in &config.sommerfeld {
        let r = &case.reaction;
        let factor = sommerfeld(r.a1, r.z1, r.a2, r.z2, case.e_cm_kev)?;
        entries.push(HarnessEntry {
            call: format!(
                "Sommerfeld({}, {}, {}, {}, {})",
                r.a1, r.z1, r.a2, r.z2, case.e_cm_kev
            ),
            summary: sommerfeld_report(&factor),
        });
    }

    for case in &config.gamow {
        let r = &case.reaction;
        let peak = gamow_energy(r.a1, r.z1, r.a2, r.z2, case.t6, case.s_kevb)?;
        entries.push(HarnessEntry {
            call: format!(
                "GamowEnergy({}, {}, {}, {}, {}, {})",
                r.a1, r.z1, r.a2, r.z2, case.t6, case.s_kevb
            ),
            summary: gamow_report(&peak),
        });
    }

    Ok(entries)
}

/// Evaluate the built-in reference set.
pub fn run_reference() -> RateResult<Vec<HarnessEntry>> {
    run_config(&RunConfig::reference())
}
