//! Calendar date to wheel rotation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::geometry::UNIT_REV;
use crate::projection::Hemisphere;

/// Julian day number of 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Unix time of the March equinox 2014-03-20 16:55:00 UTC.
pub const REFERENCE_EQUINOX_UNIX: i64 = 1_395_334_500;

/// Continuous day number for an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    JD_UNIX_EPOCH + seconds / SECONDS_PER_DAY
}

/// Day number for a UTC calendar date and time, or `None` if the date does not exist.
pub fn julian_day_from_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<f64> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    Some(julian_day(naive.and_utc()))
}

/// Converts dates into rotation angles about the disc centre.
///
/// One full turn per 365.25 days from the reference equinox; the direction
/// of travel flips with the hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateAngle {
    reference_jd: f64,
    sign: f64,
}

impl DateAngle {
    pub fn new(hemisphere: Hemisphere) -> Self {
        Self {
            reference_jd: JD_UNIX_EPOCH + REFERENCE_EQUINOX_UNIX as f64 / SECONDS_PER_DAY,
            sign: hemisphere.ring_sign(),
        }
    }

    pub fn reference_jd(&self) -> f64 {
        self.reference_jd
    }

    /// Rotation in radians for a day number. Not wrapped.
    pub fn angle_at(&self, jd: f64) -> f64 {
        self.sign * (jd - self.reference_jd) / DAYS_PER_YEAR * UNIT_REV
    }

    pub fn angle(&self, instant: DateTime<Utc>) -> f64 {
        self.angle_at(julian_day(instant))
    }

    /// Angle of the reference instant itself; anchors the Nakshatra ring.
    pub fn reference_angle(&self) -> f64 {
        self.angle_at(self.reference_jd)
    }
}
