//! Yale Bright Star Catalogue (BSC5) ASCII reader
//!
//! Each line of the catalog is one fixed-width record (see [`super::layout`]).
//! Lines are parsed independently: a malformed line is dropped without
//! affecting its neighbours, and the parse as a whole never fails.
//!
//! Catalog: <http://tdc-www.harvard.edu/catalogs/bsc5.html>

use std::path::Path;

use log::{info, trace};

use super::layout::CatalogField;
use super::StarCatalog;
use crate::coordinates::{right_ascension_to_radians, DeclinationConversion};
use crate::error::{CatalogError, ParseError};
use crate::record::{StarRecord, NO_NAME};

/// Aggregate counts from one pass over a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines seen, including blank and malformed ones
    pub lines: usize,
    /// Lines that produced a record
    pub parsed: usize,
    /// Lines discarded as malformed
    pub rejected: usize,
    /// Records that also passed the magnitude filter
    pub kept: usize,
}

/// Line parser and magnitude filter for bright star catalog text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogParser {
    magnitude_limit: f64,
    declination: DeclinationConversion,
}

impl CatalogParser {
    /// Keep stars strictly brighter than `magnitude_limit`
    pub fn new(magnitude_limit: f64) -> Self {
        Self {
            magnitude_limit,
            declination: DeclinationConversion::default(),
        }
    }

    pub fn with_declination(mut self, declination: DeclinationConversion) -> Self {
        self.declination = declination;
        self
    }

    pub fn magnitude_limit(&self) -> f64 {
        self.magnitude_limit
    }

    pub fn declination(&self) -> DeclinationConversion {
        self.declination
    }

    /// Parse one catalog record.
    ///
    /// Either every field is read successfully or the line is rejected as a
    /// whole. The magnitude limit is not applied here.
    pub fn parse_line(&self, line: &str) -> Result<StarRecord, ParseError> {
        let ra = right_ascension_to_radians(
            CatalogField::RaHours.extract_number(line)?,
            CatalogField::RaMinutes.extract_number(line)?,
            CatalogField::RaSeconds.extract_number(line)?,
        );

        let de = self.declination.to_radians(
            CatalogField::DecDegrees.extract_number(line)?,
            CatalogField::DecMinutes.extract_number(line)?,
            CatalogField::DecSeconds.extract_number(line)?,
        );

        let magnitude = CatalogField::Magnitude.extract_number(line)?;
        let spectral_type = CatalogField::SpectralType.extract(line)?;

        let name = CatalogField::Name.extract(line)?.trim();
        let name = if name.is_empty() { NO_NAME } else { name };
        let index = CatalogField::CatalogIndex.extract(line)?.replace(' ', "0");

        Ok(StarRecord::new(
            ra,
            de,
            magnitude,
            spectral_type,
            format!("{index} {name}"),
        ))
    }

    /// Parse every line of `text`, keeping only stars brighter than the limit.
    ///
    /// Lines are split on `'\n'` alone; output order follows input order.
    pub fn parse(&self, text: &str) -> (Vec<StarRecord>, ParseSummary) {
        let mut stars = Vec::new();
        let mut summary = ParseSummary::default();

        for (line_no, line) in text.split('\n').enumerate() {
            summary.lines += 1;
            match self.parse_line(line) {
                Ok(star) => {
                    summary.parsed += 1;
                    if star.apparent_magnitude() < self.magnitude_limit {
                        stars.push(star);
                    }
                }
                Err(e) => {
                    summary.rejected += 1;
                    trace!("Skipping catalog line {}: {}", line_no + 1, e);
                }
            }
        }

        summary.kept = stars.len();
        info!("{} usable stars found in catalog", summary.kept);
        (stars, summary)
    }
}

/// Parse one record using the catalog declination formula
pub fn parse_line(line: &str) -> Result<StarRecord, ParseError> {
    CatalogParser::new(f64::INFINITY).parse_line(line)
}

/// Parse catalog text, keeping stars with magnitude strictly below `magnitude_limit`
pub fn parse_catalog(text: &str, magnitude_limit: f64) -> Vec<StarRecord> {
    parse_catalog_with_summary(text, magnitude_limit).0
}

/// Same as [`parse_catalog`] but also reports how many lines were discarded
pub fn parse_catalog_with_summary(
    text: &str,
    magnitude_limit: f64,
) -> (Vec<StarRecord>, ParseSummary) {
    CatalogParser::new(magnitude_limit).parse(text)
}

/// Stars read from a bright star catalog file
#[derive(Debug, Clone, Default)]
pub struct BrightStarCatalog {
    stars: Vec<StarRecord>,
    summary: ParseSummary,
}

impl BrightStarCatalog {
    /// Build a catalog from text already in memory
    pub fn parse(text: &str, parser: &CatalogParser) -> Self {
        let (stars, summary) = parser.parse(text);
        Self { stars, summary }
    }

    /// Read and parse a catalog file
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        parser: &CatalogParser,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text, parser))
    }

    /// Counts from the pass that built this catalog
    pub fn summary(&self) -> ParseSummary {
        self.summary
    }

    pub fn into_stars(self) -> Vec<StarRecord> {
        self.stars
    }
}

impl StarCatalog for BrightStarCatalog {
    type Star = StarRecord;

    fn get_star(&self, id: usize) -> Option<&Self::Star> {
        self.stars.get(id)
    }

    fn stars(&self) -> impl Iterator<Item = &Self::Star> {
        self.stars.iter()
    }

    fn len(&self) -> usize {
        self.stars.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Self::Star>
    where
        F: Fn(&Self::Star) -> bool,
    {
        self.stars.iter().filter(|&star| predicate(star)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::{declination_to_radians, sexagesimal_declination_to_radians};
    use approx::assert_relative_eq;

    /// Build a record line with the given fields at their catalog columns
    fn record(index: &str, name: &str, ra: &str, dec: &str, mag: &str, spectral: &str) -> String {
        let mut line = " ".repeat(150);
        line.replace_range(0..4, index);
        line.replace_range(5..14, name);
        line.replace_range(60..66, ra);
        line.replace_range(68..75, dec);
        line.replace_range(103..107, mag);
        line.replace_range(128..128 + spectral.len(), spectral);
        line
    }

    #[test]
    fn test_parse_line_fields() {
        let line = record("   1", "  Sirius ", "010203", "+040506", "3.50", "G2V");
        let star = parse_line(&line).unwrap();

        assert_eq!(star.name(), "0001 Sirius");
        assert_eq!(star.apparent_magnitude(), 3.5);
        assert_eq!(star.spectral_type().len(), 20);
        assert!(star.spectral_type().starts_with("G2V"));
        assert_relative_eq!(
            star.right_ascension(),
            right_ascension_to_radians(1.0, 2.0, 3.0)
        );
        assert_relative_eq!(star.declination(), declination_to_radians(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_blank_name_gets_placeholder() {
        let line = record("  12", "         ", "000000", "+000000", "5.00", "K0");
        let star = parse_line(&line).unwrap();
        assert_eq!(star.name(), "0012 NO_NAME");
    }

    #[test]
    fn test_short_line_rejected() {
        let line = record("   1", "Alpha    ", "010203", "+040506", "3.50", "G2V");
        assert!(parse_line(&line[..147]).is_err());
        assert!(parse_line(&line[..148]).is_ok());
    }

    #[test]
    fn test_non_numeric_field_rejects_whole_line() {
        let line = record("   1", "Alpha    ", "01xx03", "+040506", "3.50", "G2V");
        assert!(matches!(
            parse_line(&line),
            Err(ParseError::InvalidNumber {
                field: CatalogField::RaMinutes,
                ..
            })
        ));
    }

    #[test]
    fn test_sexagesimal_parser() {
        let line = record("   7", "Rigel    ", "051432", "-081205", "0.12", "B8Ia");
        let parser = CatalogParser::new(6.0).with_declination(DeclinationConversion::Sexagesimal);
        let star = parser.parse_line(&line).unwrap();
        assert_relative_eq!(
            star.declination(),
            sexagesimal_declination_to_radians(-8.0, 12.0, 5.0)
        );
        assert!(star.declination() < declination_to_radians(-8.0, 12.0, 5.0));
    }

    #[test]
    fn test_parse_summary_counts() {
        let bright = record("   1", "Bright   ", "010000", "+100000", "1.00", "A0");
        let faint = record("   2", "Faint    ", "020000", "+200000", "5.00", "M0");
        let text = format!("{bright}\n{faint}\nnot a record\n");

        let (stars, summary) = parse_catalog_with_summary(&text, 4.0);
        assert_eq!(stars.len(), 1);
        assert_eq!(
            summary,
            ParseSummary {
                lines: 4,
                parsed: 2,
                rejected: 2,
                kept: 1,
            }
        );
    }

    #[test]
    fn test_crlf_lines_still_parse() {
        let a = record("   1", "A        ", "010000", "+100000", "1.00", "A0");
        let b = record("   2", "B        ", "020000", "+200000", "2.00", "F5");
        let text = format!("{a}\r\n{b}\r\n");
        let stars = parse_catalog(&text, 4.0);
        assert_eq!(stars.len(), 2);
        assert_eq!(stars[1].name(), "0002 B");
    }

    #[test]
    fn test_catalog_trait_access() {
        let a = record("   1", "A        ", "010000", "+100000", "1.00", "A0");
        let b = record("   2", "B        ", "020000", "-200000", "2.00", "F5");
        let catalog = BrightStarCatalog::parse(&format!("{a}\n{b}"), &CatalogParser::new(4.0));

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get_star(1).map(|s| s.name()), Some("0002 B"));
        assert!(catalog.get_star(2).is_none());

        let southern = catalog.filter(|s| s.declination() < 0.0);
        assert_eq!(southern.len(), 1);
        assert_eq!(southern[0].name(), "0002 B");
    }
}
