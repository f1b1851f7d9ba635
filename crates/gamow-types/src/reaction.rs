// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Reaction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, RateResult};

/// Entrance channel of a two-body charged-particle reaction.
/// Field order follows the positional convention (A₁, Z₁, A₂, Z₂).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub a1: f64, // mass number of the projectile [amu]
    pub z1: f64, // atomic number of the projectile
    pub a2: f64, // mass number of the target [amu]
    pub z2: f64, // atomic number of the target
}

impl Reaction {
    pub fn new(a1: f64, z1: f64, a2: f64, z2: f64) -> Self {
        Reaction { a1, z1, a2, z2 }
    }

    /// Check mass numbers (> 0) and atomic numbers (>= 0).
    pub fn validate(&self) -> RateResult<()> {
        require_positive("A1", self.a1)?;
        require_non_negative("Z1", self.z1)?;
        require_positive("A2", self.a2)?;
        require_non_negative("Z2", self.z2)?;
        Ok(())
    }

    /// μ = A₁A₂/(A₁+A₂) in amu. No mass-excess correction.
    pub fn reduced_mass(&self) -> f64 {
        reduced_mass(self.a1, self.a2)
    }

    /// Z₁Z₂.
    pub fn charge_product(&self) -> f64 {
        self.z1 * self.z2
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})+({},{})", self.a1, self.z1, self.a2, self.z2)
    }
}

/// μ = A₁A₂/(A₁+A₂) from mass numbers alone.
pub fn reduced_mass(a1: f64, a2: f64) -> f64 {
    a1 * a2 / (a1 + a2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_mass_pp() {
        let pp = Reaction::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(pp.reduced_mass(), 0.5);
        assert_eq!(pp.charge_product(), 1.0);
    }

    #[test]
    fn test_reduced_mass_pd() {
        let pd = Reaction::new(1.0, 1.0, 2.0, 1.0);
        assert!((pd.reduced_mass() - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_validate_rejects_bad_masses() {
        assert!(Reaction::new(0.0, 1.0, 2.0, 1.0).validate().is_err());
        assert!(Reaction::new(1.0, 1.0, f64::NAN, 1.0).validate().is_err());
        assert!(Reaction::new(1.0, -1.0, 2.0, 1.0).validate().is_err());
        assert!(Reaction::new(4.0, 0.0, 12.0, 6.0).validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Reaction::new(12.0, 6.0, 4.0, 2.0).to_string(), "(12,6)+(4,2)");
    }
}
