// ─────────────────────────────────────────────────────────────────────
// SCPN Gamow Rates — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::R0_DEFAULT_CM;
use crate::reaction::Reaction;

/// A batch of rate calculations.
/// Every list is optional in JSON; `r0_cm` defaults to 1.3 fm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Nuclear radius parameter used for distances and barriers [cm].
    #[serde(default = "default_r0_cm")]
    pub r0_cm: f64,
    #[serde(default)]
    pub potentials: Vec<PotentialCase>,
    #[serde(default)]
    pub distances: Vec<Reaction>,
    #[serde(default)]
    pub barriers: Vec<Reaction>,
    #[serde(default)]
    pub sommerfeld: Vec<SommerfeldCase>,
    #[serde(default)]
    pub gamow: Vec<GamowCase>,
}

/// Coulomb potential at an explicit separation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialCase {
    pub z1: f64,
    pub z2: f64,
    pub r_cm: f64,
}

/// Penetration factor at a centre-of-mass energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SommerfeldCase {
    #[serde(flatten)]
    pub reaction: Reaction,
    pub e_cm_kev: f64,
}

/// Gamow peak and non-resonant rate at a stellar temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GamowCase {
    #[serde(flatten)]
    pub reaction: Reaction,
    /// Temperature [10⁶ K].
    pub t6: f64,
    /// Astrophysical S-factor at E₀ [keV·b].
    #[serde(default)]
    pub s_kevb: f64,
}

fn default_r0_cm() -> f64 {
    R0_DEFAULT_CM
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            r0_cm: default_r0_cm(),
            potentials: Vec::new(),
            distances: Vec::new(),
            barriers: Vec::new(),
            sommerfeld: Vec::new(),
            gamow: Vec::new(),
        }
    }
}

impl GamowCase {
    pub fn new(a1: f64, z1: f64, a2: f64, z2: f64, t6: f64, s_kevb: f64) -> Self {
        GamowCase {
            reaction: Reaction::new(a1, z1, a2, z2),
            t6,
            s_kevb,
        }
    }
}

impl RunConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> crate::error::RateResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> crate::error::RateResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// The reference set: p+d barrier quantities and ten stellar reactions
    /// spanning the pp chain, CNO cycle, helium and carbon burning.
    pub fn reference() -> Self {
        let pd = Reaction::new(1.0, 1.0, 2.0, 1.0);
        RunConfig {
            r0_cm: default_r0_cm(),
            potentials: vec![PotentialCase {
                z1: 1.0,
                z2: 2.0,
                r_cm: 1.2e-13,
            }],
            distances: vec![pd],
            barriers: vec![pd],
            sommerfeld: vec![SommerfeldCase {
                reaction: pd,
                e_cm_kev: 66.0,
            }],
            gamow: vec![
                GamowCase::new(1.0, 1.0, 1.0, 1.0, 15.0, 550.0),
                GamowCase::new(1.0, 1.0, 14.0, 7.0, 15.0, 0.0),
                GamowCase::new(4.0, 2.0, 12.0, 6.0, 15.0, 0.0),
                GamowCase::new(16.0, 8.0, 16.0, 8.0, 15.0, 0.0),
                GamowCase::new(1.0, 1.0, 2.0, 1.0, 765.0, 2.5e-4),
                GamowCase::new(2.0, 1.0, 2.0, 1.0, 765.0, 58.0),
                GamowCase::new(2.0, 1.0, 3.0, 1.0, 765.0, 14000.0),
                GamowCase::new(2.0, 1.0, 3.0, 2.0, 8000.0, 10000.0),
                GamowCase::new(3.0, 2.0, 3.0, 2.0, 310.0, 550.0),
                GamowCase::new(1.0, 1.0, 11.0, 5.0, 6600.0, 550.0),
            ],
        }
    }

    /// Total number of calculations in the batch.
    pub fn len(&self) -> usize {
        self.potentials.len()
            + self.distances.len()
            + self.barriers.len()
            + self.sommerfeld.len()
            + self.gamow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
