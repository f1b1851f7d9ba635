// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Coulomb
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coulomb potential, nuclear contact distance and Coulomb barrier.
//!
//! Lengths are in cm, energies in keV (e² = 1.44e-10 keV·cm).

use gamow_types::constants::{E2_KEV_CM, K_KEV_PER_K};
use gamow_types::error::{ensure_finite, require_non_negative, require_positive, RateResult};

/// Coulomb barrier of a reaction, evaluated at the contact radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombBarrier {
    /// Contact radius r₀(A₁^⅓ + A₂^⅓) [cm].
    pub radius_cm: f64,
    /// Barrier height E_C [keV].
    pub energy_kev: f64,
    /// Equivalent temperature E_C / k [K].
    pub temperature_k: f64,
}

/// V(r) = Z₁Z₂e²/r [keV], r in cm.
pub fn coulomb_potential(z1: f64, z2: f64, r_cm: f64) -> RateResult<f64> {
    require_non_negative("Z1", z1)?;
    require_non_negative("Z2", z2)?;
    require_positive("r", r_cm)?;
    ensure_finite("coulomb_potential", z1 * z2 * E2_KEV_CM / r_cm)
}

/// Contact distance r = r₀(A₁^⅓ + A₂^⅓), in the length unit of `r0`.
///
/// The atomic numbers are accepted for call-site symmetry and ignored.
pub fn nuclear_distance(a1: f64, _z1: f64, a2: f64, _z2: f64, r0: f64) -> RateResult<f64> {
    require_positive("A1", a1)?;
    require_positive("A2", a2)?;
    require_positive("r0", r0)?;
    ensure_finite("nuclear_distance", r0 * (a1.cbrt() + a2.cbrt()))
}

/// Coulomb barrier E_C = V(r_contact) and its equivalent temperature.
pub fn coulomb_barrier(
    a1: f64,
    z1: f64,
    a2: f64,
    z2: f64,
    r0: f64,
) -> RateResult<CoulombBarrier> {
    let radius_cm = nuclear_distance(a1, z1, a2, z2, r0)?;
    let energy_kev = coulomb_potential(z1, z2, radius_cm)?;
    let temperature_k = ensure_finite("temperature_k", energy_kev / K_KEV_PER_K)?;
    Ok(CoulombBarrier {
        radius_cm,
        energy_kev,
        temperature_k,
    })
}
