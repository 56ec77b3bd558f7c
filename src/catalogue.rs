//! Line-oriented sky data: bright stars, stick figures and label points.
//!
//! Each source is whitespace separated, one record per line. Blank lines and
//! lines starting with `#` are ignored. A malformed line is reported and
//! skipped; it never aborts loading.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{RecordError, Result, StarWheelError};
use crate::projection::CelestialPoint;

pub const BRIGHT_STARS_FILE: &str = "bright_stars.dat";
pub const STICK_FIGURES_FILE: &str = "constellation_stick_figures.dat";
pub const CONSTELLATION_NAMES_FILE: &str = "constellation_names.dat";

const BUNDLED_BRIGHT_STARS: &str = include_str!("../data/bright_stars.dat");
const BUNDLED_STICK_FIGURES: &str = include_str!("../data/constellation_stick_figures.dat");
const BUNDLED_CONSTELLATION_NAMES: &str = include_str!("../data/constellation_names.dat");

/// Degrees of right ascension per hour.
const DEG_PER_HOUR: f64 = 360.0 / 24.0;

/// Records that parsed plus the lines that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<RecordError>,
}

impl<T> Default for ParseReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> ParseReport<T> {
    fn push(&mut self, parsed: std::result::Result<T, RecordError>) {
        match parsed {
            Ok(record) => self.records.push(record),
            Err(e) => self.skipped.push(e),
        }
    }

    /// Log every skipped line under `source` and keep only the records.
    pub fn into_records(self, source: &str) -> Vec<T> {
        for e in &self.skipped {
            warn!("Skipping malformed record in {}: {}", source, e);
        }
        debug!(
            "Loaded {} records from {} ({} skipped)",
            self.records.len(),
            source,
            self.skipped.len()
        );
        self.records
    }
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_field(line: usize, field: &str, what: &str) -> std::result::Result<f64, RecordError> {
    let value: f64 = field
        .parse()
        .map_err(|_| RecordError::new(line, format!("{} '{}' is not a number", what, field)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordError::new(line, format!("{} '{}' is not finite", what, field)))
    }
}

/// A catalogue star. `magnitude` is `None` where the catalogue has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: Option<String>,
    pub position: CelestialPoint,
    pub magnitude: Option<f64>,
}

/// Parse `ra dec magnitude [name]`; a non-numeric magnitude means "unknown".
pub fn parse_bright_stars(text: &str) -> ParseReport<Star> {
    let mut report = ParseReport::default();
    for (line, content) in data_lines(text) {
        report.push(parse_star(line, content));
    }
    report
}

fn parse_star(line: usize, content: &str) -> std::result::Result<Star, RecordError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(RecordError::new(
            line,
            format!("expected ra, dec and magnitude, found {} fields", fields.len()),
        ));
    }
    let ra = parse_field(line, fields[0], "right ascension")?;
    let dec = parse_field(line, fields[1], "declination")?;
    let magnitude = fields[2].parse::<f64>().ok().filter(|m| m.is_finite());
    Ok(Star {
        name: fields.get(3).map(|s| s.to_string()),
        position: CelestialPoint::new(ra, dec),
        magnitude,
    })
}

/// One line of a constellation stick figure.
#[derive(Debug, Clone, PartialEq)]
pub struct StickSegment {
    pub constellation: String,
    pub start: CelestialPoint,
    pub end: CelestialPoint,
}

/// Parse `name ra1 dec1 ra2 dec2`, all in degrees.
pub fn parse_stick_figures(text: &str) -> ParseReport<StickSegment> {
    let mut report = ParseReport::default();
    for (line, content) in data_lines(text) {
        report.push(parse_stick_segment(line, content));
    }
    report
}

fn parse_stick_segment(line: usize, content: &str) -> std::result::Result<StickSegment, RecordError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(RecordError::new(
            line,
            format!("expected 5 fields, found {}", fields.len()),
        ));
    }
    Ok(StickSegment {
        constellation: fields[0].to_string(),
        start: CelestialPoint::new(
            parse_field(line, fields[1], "ra1")?,
            parse_field(line, fields[2], "dec1")?,
        ),
        end: CelestialPoint::new(
            parse_field(line, fields[3], "ra2")?,
            parse_field(line, fields[4], "dec2")?,
        ),
    })
}

/// Where a constellation's name is written. Position is in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPoint {
    pub name: String,
    pub position: CelestialPoint,
}

/// Parse `name ra_hours dec_degrees ...`; fields after the third are ignored.
pub fn parse_constellation_names(text: &str) -> ParseReport<LabelPoint> {
    let mut report = ParseReport::default();
    for (line, content) in data_lines(text) {
        report.push(parse_label_point(line, content));
    }
    report
}

fn parse_label_point(line: usize, content: &str) -> std::result::Result<LabelPoint, RecordError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(RecordError::new(
            line,
            format!("expected name, ra and dec, found {} fields", fields.len()),
        ));
    }
    let ra_hours = parse_field(line, fields[1], "right ascension")?;
    let dec = parse_field(line, fields[2], "declination")?;
    Ok(LabelPoint {
        name: fields[0].to_string(),
        position: CelestialPoint::new(ra_hours * DEG_PER_HOUR, dec),
    })
}

/// Everything drawn on the wheel that comes from data files.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub stars: Vec<Star>,
    pub stick_figures: Vec<StickSegment>,
    pub labels: Vec<LabelPoint>,
}

impl Catalogue {
    pub fn from_sources(stars: &str, stick_figures: &str, labels: &str) -> Self {
        Self {
            stars: parse_bright_stars(stars).into_records(BRIGHT_STARS_FILE),
            stick_figures: parse_stick_figures(stick_figures).into_records(STICK_FIGURES_FILE),
            labels: parse_constellation_names(labels).into_records(CONSTELLATION_NAMES_FILE),
        }
    }

    /// The data shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_sources(
            BUNDLED_BRIGHT_STARS,
            BUNDLED_STICK_FIGURES,
            BUNDLED_CONSTELLATION_NAMES,
        )
    }

    /// Read all three sources from `dir`. Any missing file is fatal.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let stars = read_source(dir.join(BRIGHT_STARS_FILE))?;
        let stick_figures = read_source(dir.join(STICK_FIGURES_FILE))?;
        let labels = read_source(dir.join(CONSTELLATION_NAMES_FILE))?;
        Ok(Self::from_sources(&stars, &stick_figures, &labels))
    }
}

fn read_source(path: PathBuf) -> Result<String> {
    std::fs::read_to_string(&path).map_err(|source| StarWheelError::DataFile { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let report = parse_stick_figures("# header\n\n   \nOrion 88.8 7.4 81.3 6.3\n");
        assert_eq!(report.records.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn dash_magnitude_is_unknown_not_an_error() {
        let report = parse_bright_stars("10.0 20.0 - Foo\n11.0 21.0 3.5\n");
        assert!(report.skipped.is_empty());
        assert_eq!(report.records[0].magnitude, None);
        assert_eq!(report.records[0].name.as_deref(), Some("Foo"));
        assert_eq!(report.records[1].magnitude, Some(3.5));
        assert_eq!(report.records[1].name, None);
    }

    #[test]
    fn malformed_lines_are_skipped_with_line_numbers() {
        let text = "Orion 88.8 7.4 81.3\nOrion 88.8 x 81.3 6.3\nOrion 88.8 7.4 81.3 6.3\n";
        let report = parse_stick_figures(text);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line, 1);
        assert_eq!(report.skipped[1].line, 2);
    }

    #[test]
    fn label_right_ascension_is_converted_from_hours() {
        let report = parse_constellation_names("Orion 5.6 5.0 Ori extra\n");
        let label = &report.records[0];
        assert_eq!(label.name, "Orion");
        assert!((label.position.ra - 84.0).abs() < 1e-9);
        assert_eq!(label.position.dec, 5.0);
    }

    #[test]
    fn bundled_data_parses_cleanly() {
        for report in [
            parse_bright_stars(BUNDLED_BRIGHT_STARS).skipped,
            parse_stick_figures(BUNDLED_STICK_FIGURES).skipped,
            parse_constellation_names(BUNDLED_CONSTELLATION_NAMES).skipped,
        ] {
            assert!(report.is_empty(), "{:?}", report);
        }
        let catalogue = Catalogue::bundled();
        assert!(!catalogue.stars.is_empty());
        assert!(!catalogue.stick_figures.is_empty());
        assert!(!catalogue.labels.is_empty());
    }
}
