// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Gamow Peak
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gamow peak and non-resonant thermonuclear reaction rate.
//!
//! Gaussian approximation of the Gamow window (Rolfs & Rodney, eqs. 4.21–4.56):
//!   E₀ = 1.22 (μ T₆² Z₁²Z₂²)^(1/3)                  keV
//!   τ  = 42.46 (Z₁²Z₂² μ / T₆)^(1/3)
//!   Δ  = 0.749 (Z₁²Z₂² μ T₆⁵)^(1/6)                 keV
//!   ⟨σv⟩ = 7.20e-19 / (μ Z₁Z₂) · τ² e^(−τ) · S(E₀)  cm³/s
//!
//! No F(τ) correction is applied to the rate.

use std::fmt;
use std::str::FromStr;

use gamow_types::constants::{
    GAMOW_B_COEFF, GAMOW_DELTA_COEFF, GAMOW_E0_COEFF, GAMOW_TAU_COEFF, K_KEV_PER_K, RATE_COEFF,
    T6_KELVIN,
};
use gamow_types::error::{
    ensure_finite, require_non_negative, require_positive, RateError, RateResult,
};
use gamow_types::reaction::Reaction;

/// Gamow-window quantities at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamowPeak {
    /// Thermal energy kT [keV].
    pub kt_kev: f64,
    /// Gamow peak energy E₀ [keV].
    pub e0_kev: f64,
    /// Peak exponent τ = 3E₀/kT.
    pub tau: f64,
    /// Integrand maximum exp(−τ).
    pub imax: f64,
    /// Gaussian width of the Gamow peak [keV].
    pub delta_kev: f64,
    /// Non-resonant ⟨σv⟩ per particle pair [cm³/s].
    pub rate_cm3_s: f64,
}

/// Correction factors that may be requested on top of the Gaussian rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateCorrection {
    /// Plain Gaussian approximation.
    #[default]
    None,
    /// Asymmetry correction F(τ) = 1 + 5/(12τ) + ...
    FTau,
}

impl fmt::Display for RateCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateCorrection::None => write!(f, "none"),
            RateCorrection::FTau => write!(f, "ftau"),
        }
    }
}

impl FromStr for RateCorrection {
    type Err = RateError;

    fn from_str(s: &str) -> RateResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(RateCorrection::None),
            "ftau" | "f(tau)" => Ok(RateCorrection::FTau),
            other => Err(RateError::InvalidArgument(format!(
                "unknown rate correction '{other}'"
            ))),
        }
    }
}

/// Gamow peak, width and non-resonant rate.
///
/// `t6` is the temperature in 10⁶ K, `s_kevb` the S-factor at E₀ in keV·b.
/// Both charges must be positive. When exp(−τ) underflows the rate is
/// exactly zero; any non-finite intermediate is reported as overflow.
pub fn gamow_energy(
    a1: f64,
    z1: f64,
    a2: f64,
    z2: f64,
    t6: f64,
    s_kevb: f64,
) -> RateResult<GamowPeak> {
    let reaction = Reaction::new(a1, z1, a2, z2);
    reaction.validate()?;
    require_positive("Z1", z1)?;
    require_positive("Z2", z2)?;
    require_positive("T6", t6)?;
    require_non_negative("S", s_kevb)?;
    let mu = require_positive("mu", ensure_finite("mu", reaction.reduced_mass())?)?;

    let zz = ensure_finite("Z1*Z2", reaction.charge_product())?;
    let zz2 = ensure_finite("Z1^2*Z2^2", zz * zz)?;

    let kt_kev = ensure_finite("kT", K_KEV_PER_K * t6 * T6_KELVIN)?;
    let e0_kev = ensure_finite("E0", GAMOW_E0_COEFF * (mu * t6 * t6 * zz2).cbrt())?;
    let tau = ensure_finite("tau", GAMOW_TAU_COEFF * (zz2 * mu / t6).cbrt())?;
    // Split so that T₆ enters through a single power.
    let delta_kev = ensure_finite(
        "delta",
        GAMOW_DELTA_COEFF * (zz2 * mu).powf(1.0 / 6.0) * t6.powf(5.0 / 6.0),
    )?;

    let imax = (-tau).exp();
    let rate_cm3_s = if imax == 0.0 {
        0.0
    } else {
        let prefactor = RATE_COEFF / (mu * zz) * tau * tau * imax;
        ensure_finite("rate", prefactor * s_kevb)?
    };

    Ok(GamowPeak {
        kt_kev,
        e0_kev,
        tau,
        imax,
        delta_kev,
        rate_cm3_s,
    })
}

/// [`gamow_energy`] with an explicit correction request.
pub fn gamow_energy_corrected(
    a1: f64,
    z1: f64,
    a2: f64,
    z2: f64,
    t6: f64,
    s_kevb: f64,
    correction: RateCorrection,
) -> RateResult<GamowPeak> {
    match correction {
        RateCorrection::None => gamow_energy(a1, z1, a2, z2, t6, s_kevb),
        RateCorrection::FTau => Err(RateError::Unsupported(
            "F(tau) correction is not applied; multiply the rate by F(tau) after the fact"
                .to_string(),
        )),
    }
}

/// Gamow energy scale b² = (0.989 Z₁Z₂ √μ)² [keV].
pub fn gamow_b_squared(a1: f64, z1: f64, a2: f64, z2: f64) -> RateResult<f64> {
    let reaction = Reaction::new(a1, z1, a2, z2);
    reaction.validate()?;
    let b = GAMOW_B_COEFF * reaction.charge_product() * reaction.reduced_mass().sqrt();
    ensure_finite("b^2", b * b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pp_sun_core() {
        let peak = gamow_energy(1.0, 1.0, 1.0, 1.0, 15.0, 550.0).unwrap();
        // Textbook value: E₀ ≈ 5.9 keV for p+p at 15 MK.
        assert!(
            (peak.e0_kev - 5.89).abs() / 5.89 < 5e-3,
            "E0 = {}",
            peak.e0_kev
        );
        assert!(
            (peak.kt_kev - 1.2926).abs() < 1e-3,
            "kT = {}",
            peak.kt_kev
        );
        assert!((peak.tau - 13.665).abs() < 1e-3, "tau = {}", peak.tau);
        assert_eq!(peak.imax, (-peak.tau).exp());
        assert!(peak.rate_cm3_s > 0.0 && peak.rate_cm3_s.is_finite());
    }

    #[test]
    fn test_tau_is_three_e0_over_kt() {
        let peak = gamow_energy(1.0, 1.0, 14.0, 7.0, 15.0, 0.0).unwrap();
        let ratio = 3.0 * peak.e0_kev / peak.kt_kev;
        assert!(
            (ratio - peak.tau).abs() / peak.tau < 2e-3,
            "3E0/kT = {ratio}, tau = {}",
            peak.tau
        );
    }

    #[test]
    fn test_zero_s_factor_zero_rate() {
        let peak = gamow_energy(4.0, 2.0, 12.0, 6.0, 15.0, 0.0).unwrap();
        assert_eq!(peak.rate_cm3_s, 0.0);
        assert!(peak.e0_kev > 0.0);
        assert!(peak.delta_kev > 0.0);
        assert!(peak.imax > 0.0);
    }

    #[test]
    fn test_underflow_gives_exact_zero() {
        let peak = gamow_energy(16.0, 8.0, 16.0, 8.0, 0.01, 1e6).unwrap();
        assert!(peak.tau > 1000.0, "tau = {}", peak.tau);
        assert_eq!(peak.imax, 0.0);
        assert_eq!(peak.rate_cm3_s, 0.0);
    }

    #[test]
    fn test_dhe3_high_temperature_rate() {
        let peak = gamow_energy(2.0, 1.0, 3.0, 2.0, 8000.0, 10000.0).unwrap();
        assert!(peak.rate_cm3_s > 0.0 && peak.rate_cm3_s.is_finite());
        let doubled = gamow_energy(2.0, 1.0, 3.0, 2.0, 8000.0, 20000.0).unwrap();
        assert_eq!(doubled.rate_cm3_s, 2.0 * peak.rate_cm3_s);
    }

    #[test]
    fn test_rejects_neutral_and_cold() {
        assert!(matches!(
            gamow_energy(1.0, 0.0, 12.0, 6.0, 15.0, 1.0),
            Err(RateError::InvalidArgument(_))
        ));
        assert!(matches!(
            gamow_energy(1.0, 1.0, 12.0, 6.0, 0.0, 1.0),
            Err(RateError::InvalidArgument(_))
        ));
        assert!(matches!(
            gamow_energy(1.0, 1.0, 12.0, 6.0, 15.0, -1.0),
            Err(RateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_huge_charge_overflows() {
        let err = gamow_energy(1.0, 1e100, 1.0, 1e100, 15.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), "numerical_overflow");
    }

    #[test]
    fn test_ftau_unsupported() {
        let err = gamow_energy_corrected(1.0, 1.0, 1.0, 1.0, 15.0, 1.0, RateCorrection::FTau)
            .unwrap_err();
        assert_eq!(err.kind(), "unsupported");
        let plain =
            gamow_energy_corrected(1.0, 1.0, 1.0, 1.0, 15.0, 1.0, RateCorrection::None).unwrap();
        assert_eq!(plain, gamow_energy(1.0, 1.0, 1.0, 1.0, 15.0, 1.0).unwrap());
    }

    #[test]
    fn test_correction_parse() {
        assert_eq!("none".parse::<RateCorrection>().unwrap(), RateCorrection::None);
        assert_eq!("FTAU".parse::<RateCorrection>().unwrap(), RateCorrection::FTau);
        assert!("gauss".parse::<RateCorrection>().is_err());
        assert_eq!(RateCorrection::FTau.to_string(), "ftau");
    }

    #[test]
    fn test_b_squared_pp() {
        let b2 = gamow_b_squared(1.0, 1.0, 1.0, 1.0).unwrap();
        let expected = 0.989 * 0.989 * 0.5;
        assert!((b2 - expected).abs() < 1e-12, "b^2 = {b2}");
    }
}
