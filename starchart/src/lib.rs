//! Bright star charting for rendered sky spheres.
//!
//! Reads the Yale Bright Star Catalogue in its fixed-width ASCII form, keeps
//! the stars brighter than a magnitude limit and converts their equatorial
//! coordinates into unit direction vectors. Placing, scaling and parenting
//! the resulting objects is left to the caller.
//!
//! ```rust
//! use starchart::{parse_catalog, StarRecord};
//!
//! let mut line = " ".repeat(150);
//! line.replace_range(0..4, "   1");
//! line.replace_range(5..14, "  Sirius ");
//! line.replace_range(60..66, "010203");
//! line.replace_range(68..75, "+040506");
//! line.replace_range(103..107, "3.50");
//! line.replace_range(128..131, "G2V");
//!
//! let stars: Vec<StarRecord> = parse_catalog(&line, 4.0);
//! assert_eq!(stars.len(), 1);
//! assert_eq!(stars[0].name(), "0001 Sirius");
//!
//! let direction = stars[0].direction();
//! assert!((direction.norm() - 1.0).abs() < 1e-12);
//! ```

pub mod catalogs;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod record;

pub use catalogs::{
    parse_catalog, parse_catalog_with_summary, parse_line, BrightStarCatalog, CatalogParser,
    ParseSummary, StarCatalog,
};
pub use config::{ChartConfig, StarChart, DEFAULT_MAGNITUDE_LIMIT};
pub use coordinates::{
    declination_to_radians, direction_from_ra_dec, right_ascension_to_radians,
    DeclinationConversion,
};
pub use error::{CatalogError, ParseError};
pub use record::{StarRecord, NO_NAME};
