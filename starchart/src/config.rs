//! Chart configuration and the top-level charting driver.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalogs::{BrightStarCatalog, CatalogParser, ParseSummary, StarCatalog};
use crate::coordinates::DeclinationConversion;
use crate::error::CatalogError;
use crate::record::StarRecord;

/// Faintest magnitude charted when nothing else is configured
pub const DEFAULT_MAGNITUDE_LIMIT: f64 = 4.0;

/// Settings for charting a bright star catalog.
///
/// Stored as JSON, e.g.
/// ```json
/// { "magnitude_limit": 4.5, "declination": "sexagesimal" }
/// ```
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Exclusive upper bound on apparent magnitude
    pub magnitude_limit: f64,
    /// Declination conversion applied to every record
    pub declination: DeclinationConversion,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            magnitude_limit: DEFAULT_MAGNITUDE_LIMIT,
            declination: DeclinationConversion::default(),
        }
    }
}

impl ChartConfig {
    /// Reject settings that would make every comparison meaningless
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.magnitude_limit.is_finite() {
            return Err(CatalogError::InvalidInput(format!(
                "magnitude limit must be finite, got {}",
                self.magnitude_limit
            )));
        }
        Ok(())
    }

    /// Parser configured with these settings
    pub fn parser(&self) -> CatalogParser {
        CatalogParser::new(self.magnitude_limit).with_declination(self.declination)
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Charts stars from a bright star catalog.
///
/// Holds the configuration and the catalog text to chart. The text may be
/// supplied directly or read from disk; charting without any catalog is an
/// input error, while a catalog with no usable lines simply charts nothing.
#[derive(Debug, Clone, Default)]
pub struct StarChart {
    config: ChartConfig,
    catalog: Option<String>,
}

impl StarChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            catalog: None,
        }
    }

    /// Use `text` as the catalog to chart
    pub fn with_catalog_text(mut self, text: impl Into<String>) -> Self {
        self.catalog = Some(text.into());
        self
    }

    /// Read the catalog to chart from `path`
    pub fn load_catalog(&mut self, path: &Path) -> Result<(), CatalogError> {
        debug!("Loading catalog from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.catalog = Some(text);
        Ok(())
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    /// Parse and filter the catalog.
    ///
    /// Fails only if no catalog has been supplied or the configuration is
    /// invalid; malformed lines are skipped.
    pub fn chart(&self) -> Result<BrightStarCatalog, CatalogError> {
        self.config.validate()?;
        let text = self
            .catalog
            .as_deref()
            .ok_or_else(|| CatalogError::InvalidInput("no catalog text supplied".to_string()))?;

        let catalog = BrightStarCatalog::parse(text, &self.config.parser());
        let ParseSummary {
            lines, rejected, ..
        } = catalog.summary();
        debug!("{} of {} catalog lines rejected", rejected, lines);
        info!("Done charting stars! {} stars mapped", catalog.len());
        Ok(catalog)
    }

    /// Shorthand for [`StarChart::chart`] returning only the records
    pub fn chart_stars(&self) -> Result<Vec<StarRecord>, CatalogError> {
        self.chart().map(BrightStarCatalog::into_stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn line(index: &str, mag: &str) -> String {
        let mut line = " ".repeat(148);
        line.replace_range(0..4, index);
        line.replace_range(5..14, "Test     ");
        line.replace_range(60..66, "063000");
        line.replace_range(68..75, "-163000");
        line.replace_range(103..107, mag);
        line
    }

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.magnitude_limit, 4.0);
        assert_eq!(config.declination, DeclinationConversion::Catalog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_limit_is_invalid() {
        let config = ChartConfig {
            magnitude_limit: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let config = ChartConfig {
            magnitude_limit: 5.5,
            declination: DeclinationConversion::Sexagesimal,
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(ChartConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ChartConfig = serde_json::from_str(r#"{ "magnitude_limit": 2.0 }"#).unwrap();
        assert_eq!(config.magnitude_limit, 2.0);
        assert_eq!(config.declination, DeclinationConversion::Catalog);
    }

    #[test]
    fn test_malformed_config_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ChartConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Config { .. }));
    }

    #[test]
    fn test_chart_without_catalog_is_invalid_input() {
        let chart = StarChart::new(ChartConfig::default());
        assert!(!chart.has_catalog());
        assert!(matches!(chart.chart(), Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_chart_empty_catalog_is_ok() {
        let chart = StarChart::default().with_catalog_text("");
        assert!(chart.chart_stars().unwrap().is_empty());
    }

    #[test]
    fn test_chart_applies_limit() {
        let text = format!("{}\n{}\n", line("   1", "1.50"), line("   2", "4.00"));
        let chart = StarChart::default().with_catalog_text(text);
        let stars = chart.chart_stars().unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].name(), "0001 Test");
    }

    #[test]
    fn test_load_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", line("  42", "0.03")).unwrap();

        let mut chart = StarChart::new(ChartConfig::default());
        chart.load_catalog(file.path()).unwrap();
        let catalog = chart.chart().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.summary().lines, 2);
    }

    #[test]
    fn test_load_missing_catalog_is_io_error() {
        let mut chart = StarChart::default();
        let err = chart
            .load_catalog(Path::new("/nonexistent/bsc5.dat"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
