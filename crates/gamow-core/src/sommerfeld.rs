// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Sommerfeld
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Low-energy Coulomb penetration factor P = exp(−2πη).

use gamow_types::constants::{R0_DEFAULT_CM, SOMMERFELD_COEFF};
use gamow_types::error::{ensure_finite, require_positive, RateResult};
use gamow_types::reaction::{reduced_mass, Reaction};

use crate::coulomb::coulomb_barrier;

/// Penetration factor at a single centre-of-mass energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SommerfeldFactor {
    /// Centre-of-mass energy [keV].
    pub e_cm_kev: f64,
    /// μ = A₁A₂/(A₁+A₂) [amu].
    pub reduced_mass: f64,
    /// 2πη = 31.29 Z₁Z₂ √(μ/E).
    pub two_pi_eta: f64,
    /// exp(−2πη).
    pub penetration: f64,
    /// Coulomb barrier at the default r₀ [keV].
    pub barrier_kev: f64,
    /// E_cm < E_C, i.e. the low-energy approximation applies.
    pub below_barrier: bool,
}

/// Sommerfeld factor exp(−2πη) for E_cm in keV.
///
/// Only meaningful well below the Coulomb barrier. Larger energies are not
/// refused; `below_barrier` is false in that case.
///
/// The reduced mass is built from the mass numbers alone, without
/// mass-excess corrections.
pub fn sommerfeld(
    a1: f64,
    z1: f64,
    a2: f64,
    z2: f64,
    e_cm_kev: f64,
) -> RateResult<SommerfeldFactor> {
    let reaction = Reaction::new(a1, z1, a2, z2);
    reaction.validate()?;
    require_positive("E_cm", e_cm_kev)?;
    let mu = require_positive("mu", ensure_finite("mu", reduced_mass(a1, a2))?)?;

    let two_pi_eta = ensure_finite(
        "two_pi_eta",
        SOMMERFELD_COEFF * reaction.charge_product() * (mu / e_cm_kev).sqrt(),
    )?;
    let penetration = (-two_pi_eta).exp();

    let barrier = coulomb_barrier(a1, z1, a2, z2, R0_DEFAULT_CM)?;

    Ok(SommerfeldFactor {
        e_cm_kev,
        reduced_mass: mu,
        two_pi_eta,
        penetration,
        barrier_kev: barrier.energy_kev,
        below_barrier: e_cm_kev < barrier.energy_kev,
    })
}
