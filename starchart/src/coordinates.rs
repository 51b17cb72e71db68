//! Sexagesimal to radian conversion and sky-sphere direction vectors.
//!
//! Right ascension follows the usual 24h = 2π convention. Declination
//! defaults to the conversion the bright star charts have always used, which
//! drops the arc-seconds term and adds arc-minutes without regard to the sign
//! of the degrees field. [`DeclinationConversion::Sexagesimal`] is the
//! astronomically correct alternative and must be selected explicitly.
//!
//! # Direction vectors
//!
//! Directions are expressed in the renderer's frame: `+Z` forward, `+Y` up,
//! `+X` right. A star is placed by rotating the forward axis by the Euler
//! angles `(pitch = dec, yaw = ra, roll = 0)`, applied roll first, then
//! pitch about X, then yaw about Y:
//!
//! ```text
//! d = Ry(ra) * Rx(dec) * (0, 0, 1)
//!   = (cos(dec) sin(ra), -sin(dec), cos(dec) cos(ra))
//! ```

use std::f64::consts::TAU;

use nalgebra::{Rotation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Convert right ascension in hours, minutes and seconds to radians.
///
/// Values are not wrapped: 24h maps to exactly 2π.
pub fn right_ascension_to_radians(hours: f64, minutes: f64, seconds: f64) -> f64 {
    let total_hours = hours + (minutes + seconds / 60.0) / 60.0;
    total_hours / 24.0 * TAU
}

/// Convert declination to radians using the catalog charting formula.
///
/// `seconds` is accepted for symmetry but ignored, and `minutes` is always
/// added, so `-10° 30'` becomes `-9.5°`. See [`DeclinationConversion`].
pub fn declination_to_radians(degrees: f64, minutes: f64, _seconds: f64) -> f64 {
    (degrees + minutes / 60.0) / 360.0 * TAU
}

/// Convert signed sexagesimal declination to radians.
///
/// The sign is taken from `degrees` and applies to the whole value, so a
/// `-00` degrees field with non-zero minutes must be passed as `-0.0`.
pub fn sexagesimal_declination_to_radians(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    magnitude.copysign(degrees).to_radians()
}

/// How declination fields are turned into an angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclinationConversion {
    /// Legacy charting formula, see [`declination_to_radians`]
    #[default]
    Catalog,
    /// Sign-aware degrees, arc-minutes and arc-seconds
    Sexagesimal,
}

impl DeclinationConversion {
    pub fn to_radians(self, degrees: f64, minutes: f64, seconds: f64) -> f64 {
        match self {
            DeclinationConversion::Catalog => declination_to_radians(degrees, minutes, seconds),
            DeclinationConversion::Sexagesimal => {
                sexagesimal_declination_to_radians(degrees, minutes, seconds)
            }
        }
    }
}

/// Rotation that turns the forward axis towards `(ra, dec)`.
///
/// Equivalent to Euler angles `(dec, ra, 0)` in degrees applied Z, X, then Y.
pub fn sky_rotation(ra: f64, dec: f64) -> UnitQuaternion<f64> {
    let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), ra);
    let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), dec);
    let roll = Rotation3::from_axis_angle(&Vector3::z_axis(), 0.0);
    UnitQuaternion::from_rotation_matrix(&(yaw * pitch * roll))
}

/// Unit direction towards a star at right ascension `ra` and declination `dec` (radians)
pub fn direction_from_ra_dec(ra: f64, dec: f64) -> Vector3<f64> {
    sky_rotation(ra, dec) * Vector3::z()
}
