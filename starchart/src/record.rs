//! Star record produced for each usable catalog line

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::coordinates::direction_from_ra_dec;

/// Placeholder used when a catalog entry carries no name
pub const NO_NAME: &str = "NO_NAME";

/// A single star ready to be placed on the sky sphere.
///
/// Records are immutable once parsed. Angles are in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    right_ascension: f64,
    declination: f64,
    apparent_magnitude: f64,
    spectral_type: String,
    name: String,
}

impl StarRecord {
    pub fn new(
        right_ascension: f64,
        declination: f64,
        apparent_magnitude: f64,
        spectral_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            right_ascension,
            declination,
            apparent_magnitude,
            spectral_type: spectral_type.into(),
            name: name.into(),
        }
    }

    /// Right ascension in radians
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in radians
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Apparent visual magnitude (lower is brighter)
    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    /// Raw 20 column spectral classification, including padding
    pub fn spectral_type(&self) -> &str {
        &self.spectral_type
    }

    /// Zero padded catalog index followed by the star's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit vector pointing from the observer towards this star
    pub fn direction(&self) -> Vector3<f64> {
        direction_from_ra_dec(self.right_ascension, self.declination)
    }
}

impl fmt::Display for StarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "star data- ra:{} de:{} ma:{}",
            self.right_ascension, self.declination, self.apparent_magnitude
        )
    }
}
