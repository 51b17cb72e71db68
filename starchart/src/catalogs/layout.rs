//! Column layout of the Yale Bright Star Catalogue ASCII records
//!
//! Every field occupies a fixed, 0-indexed, half-open byte range of the line.
//! The catalog is pure ASCII so byte and character columns coincide.

use std::fmt;

use crate::error::ParseError;

/// A half-open `[start, start + len)` byte range within a catalog line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub start: usize,
    pub len: usize,
}

impl FieldSpan {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end column
    pub const fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Fields read from each catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogField {
    /// Harvard Revised number, right aligned
    CatalogIndex,
    /// Bayer/Flamsteed designation or proper name
    Name,
    RaHours,
    RaMinutes,
    RaSeconds,
    /// Signed degrees, e.g. `+04` or `-16`
    DecDegrees,
    DecMinutes,
    DecSeconds,
    /// Visual magnitude, e.g. ` 4.12` or `-1.46`
    Magnitude,
    /// MK spectral classification, kept verbatim
    SpectralType,
}

impl CatalogField {
    /// Every field, in the order they are parsed
    pub const ALL: [CatalogField; 10] = [
        CatalogField::RaHours,
        CatalogField::RaMinutes,
        CatalogField::RaSeconds,
        CatalogField::DecDegrees,
        CatalogField::DecMinutes,
        CatalogField::DecSeconds,
        CatalogField::Magnitude,
        CatalogField::SpectralType,
        CatalogField::Name,
        CatalogField::CatalogIndex,
    ];

    /// Byte range this field occupies in a record
    pub const fn span(self) -> FieldSpan {
        match self {
            CatalogField::CatalogIndex => FieldSpan::new(0, 4),
            CatalogField::Name => FieldSpan::new(5, 9),
            CatalogField::RaHours => FieldSpan::new(60, 2),
            CatalogField::RaMinutes => FieldSpan::new(62, 2),
            CatalogField::RaSeconds => FieldSpan::new(64, 2),
            CatalogField::DecDegrees => FieldSpan::new(68, 3),
            CatalogField::DecMinutes => FieldSpan::new(71, 2),
            CatalogField::DecSeconds => FieldSpan::new(73, 2),
            CatalogField::Magnitude => FieldSpan::new(103, 4),
            CatalogField::SpectralType => FieldSpan::new(128, 20),
        }
    }

    /// Slice this field out of `line`
    pub fn extract(self, line: &str) -> Result<&str, ParseError> {
        let span = self.span();
        line.get(span.start..span.end())
            .ok_or(ParseError::FieldOutOfRange {
                field: self,
                start: span.start,
                end: span.end(),
                line_len: line.len(),
            })
    }

    /// Extract and parse a numeric field
    ///
    /// Surrounding whitespace is ignored and an explicit sign is accepted.
    /// Blank, non-numeric and non-finite values are rejected.
    pub fn extract_number(self, line: &str) -> Result<f64, ParseError> {
        let raw = self.extract(line)?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                field: self,
                value: raw.to_string(),
            })
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogField::CatalogIndex => "catalog index",
            CatalogField::Name => "name",
            CatalogField::RaHours => "RA hours",
            CatalogField::RaMinutes => "RA minutes",
            CatalogField::RaSeconds => "RA seconds",
            CatalogField::DecDegrees => "Dec degrees",
            CatalogField::DecMinutes => "Dec minutes",
            CatalogField::DecSeconds => "Dec seconds",
            CatalogField::Magnitude => "magnitude",
            CatalogField::SpectralType => "spectral type",
        };
        f.write_str(name)
    }
}

/// Shortest line that can hold every field
pub const MIN_RECORD_LEN: usize = {
    let mut max = 0;
    let mut i = 0;
    while i < CatalogField::ALL.len() {
        let end = CatalogField::ALL[i].span().end();
        if end > max {
            max = end;
        }
        i += 1;
    }
    max
};
