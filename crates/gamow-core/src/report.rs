// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-line summaries of computed records. Formatting only, no output.

use std::fmt;

use crate::coulomb::CoulombBarrier;
use crate::gamow::GamowPeak;
use crate::sommerfeld::SommerfeldFactor;

/// `kT=<..> keV, E0=<..> keV delta/2=<..> keV Imax=<..> rate=<..> cm3/s`
///
/// The `delta/2` field is the half-width; the record keeps the full Δ.
pub fn gamow_report(peak: &GamowPeak) -> String {
    format!(
        "kT={:.3e} keV, E0={:.3e} keV delta/2={:.3e} keV Imax={:.3e} rate={:.3e} cm3/s",
        peak.kt_kev,
        peak.e0_kev,
        peak.delta_kev / 2.0,
        peak.imax,
        peak.rate_cm3_s
    )
}

/// `E=<..> keV 2pi*eta=<..> P=<..> Ec=<..> keV`, suffixed `[E>=Ec]` outside
/// the low-energy regime.
pub fn sommerfeld_report(factor: &SommerfeldFactor) -> String {
    let mut line = format!(
        "E={:.3e} keV 2pi*eta={:.3e} P={:.3e} Ec={:.3e} keV",
        factor.e_cm_kev, factor.two_pi_eta, factor.penetration, factor.barrier_kev
    );
    if !factor.below_barrier {
        line.push_str(" [E>=Ec]");
    }
    line
}

/// `r=<..> cm Ec=<..> keV T=<..> K`
pub fn barrier_report(barrier: &CoulombBarrier) -> String {
    format!(
        "r={:.3e} cm Ec={:.3e} keV T={:.3e} K",
        barrier.radius_cm, barrier.energy_kev, barrier.temperature_k
    )
}

impl fmt::Display for GamowPeak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&gamow_report(self))
    }
}

impl fmt::Display for SommerfeldFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sommerfeld_report(self))
    }
}

impl fmt::Display for CoulombBarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&barrier_report(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coulomb::coulomb_barrier;
    use crate::gamow::gamow_energy;
    use crate::sommerfeld::sommerfeld;
    use gamow_types::constants::R0_DEFAULT_CM;

    #[test]
    fn test_gamow_field_order() {
        let peak = GamowPeak {
            kt_kev: 1.0,
            e0_kev: 2.0,
            tau: 3.0,
            imax: 4.0,
            delta_kev: 5.0,
            rate_cm3_s: 6.0,
        };
        assert_eq!(
            gamow_report(&peak),
            "kT=1.000e0 keV, E0=2.000e0 keV delta/2=2.500e0 keV Imax=4.000e0 rate=6.000e0 cm3/s"
        );
    }

    #[test]
    fn test_gamow_display_matches_report() {
        let peak = gamow_energy(1.0, 1.0, 1.0, 1.0, 15.0, 550.0).unwrap();
        let line = peak.to_string();
        assert_eq!(line, gamow_report(&peak));
        assert!(line.starts_with("kT=1.293e0 keV, E0=5.889e0 keV"), "{line}");
        assert!(line.ends_with(" cm3/s"));
    }

    #[test]
    fn test_gamow_report_half_width() {
        // Full Gamow width for p+p at 15 MK is ~6.37 keV.
        let peak = gamow_energy(1.0, 1.0, 1.0, 1.0, 15.0, 550.0).unwrap();
        assert!((peak.delta_kev - 6.374).abs() < 1e-2, "delta = {}", peak.delta_kev);
        let line = gamow_report(&peak);
        assert!(line.contains(" delta/2=3.187e0 keV "), "{line}");
    }

    #[test]
    fn test_sommerfeld_regime_flag() {
        let low = sommerfeld(1.0, 1.0, 2.0, 1.0, 66.0).unwrap();
        assert!(!sommerfeld_report(&low).contains("[E>=Ec]"));
        assert!(sommerfeld_report(&low).starts_with("E=6.600e1 keV 2pi*eta=3.145e0"));

        let high = sommerfeld(1.0, 1.0, 2.0, 1.0, 2000.0).unwrap();
        assert!(high.to_string().ends_with(" [E>=Ec]"));
    }

    #[test]
    fn test_barrier_report() {
        let barrier = coulomb_barrier(1.0, 1.0, 2.0, 1.0, R0_DEFAULT_CM).unwrap();
        let line = barrier_report(&barrier);
        assert!(line.starts_with("r=2.938e-13 cm Ec=4.901e2 keV T="), "{line}");
        assert!(line.ends_with(" K"));
    }
}
