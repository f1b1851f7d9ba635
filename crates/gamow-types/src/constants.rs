// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants and the numerical coefficients of the Gamow-peak
//! approximations (Rolfs & Rodney, "Cauldrons in the Cosmos", ch. 4).
//!
//! The coefficients assume energies in keV, temperatures in units of 10⁶ K,
//! masses in amu and S-factors in keV·b.

/// Coulomb constant e²/(4πε₀) [keV·cm].
pub const E2_KEV_CM: f64 = 1.44e-10;

/// Reduced Planck constant ℏ [eV·s].
pub const HBAR_EV_S: f64 = 6.5821195e-16;

/// Boltzmann constant [keV/K].
pub const K_KEV_PER_K: f64 = 8.617343e-8;

/// Default nuclear radius parameter r₀ [cm] (1.3 fm).
pub const R0_DEFAULT_CM: f64 = 1.3e-13;

/// 2πη = SOMMERFELD_COEFF · Z₁Z₂ · √(μ/E_cm), E_cm in keV.
pub const SOMMERFELD_COEFF: f64 = 31.29;

/// b = GAMOW_B_COEFF · Z₁Z₂ · √μ [keV^½].
pub const GAMOW_B_COEFF: f64 = 0.989;

/// E₀ = GAMOW_E0_COEFF · (μ T₆² Z₁²Z₂²)^(1/3) [keV].
pub const GAMOW_E0_COEFF: f64 = 1.22;

/// τ = GAMOW_TAU_COEFF · (Z₁²Z₂²μ / T₆)^(1/3).
pub const GAMOW_TAU_COEFF: f64 = 42.46;

/// Δ = GAMOW_DELTA_COEFF · (Z₁²Z₂²μ T₆⁵)^(1/6) [keV].
pub const GAMOW_DELTA_COEFF: f64 = 0.749;

/// ⟨σv⟩ = RATE_COEFF / (μ Z₁Z₂) · τ² e^(−τ) · S(E₀) [cm³/s].
pub const RATE_COEFF: f64 = 7.20e-19;

/// Temperature unit of T₆ [K].
pub const T6_KELVIN: f64 = 1.0e6;
