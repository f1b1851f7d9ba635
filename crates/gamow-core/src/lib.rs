// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Gamow Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermonuclear reaction-rate kernels for charged-particle reactions.
//!
//! All functions are pure: scalars in, scalars or plain records out.
//! Arguments follow the positional order (A₁, Z₁, A₂, Z₂, ...).

pub mod coulomb;
pub mod gamow;
pub mod harness;
pub mod report;
pub mod scan;
pub mod sommerfeld;

pub use coulomb::{coulomb_barrier, coulomb_potential, nuclear_distance, CoulombBarrier};
pub use gamow::{gamow_energy, gamow_energy_corrected, GamowPeak, RateCorrection};
pub use sommerfeld::{sommerfeld, SommerfeldFactor};
