//! Sky-to-disc projection.
//!
//! The wheel uses an equidistant polar projection centred on the visible
//! celestial pole: distance from the centre grows linearly with angular
//! distance from the pole, scaled so the observer's horizon lands on the
//! disc's horizon radius.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarWheelError};
use crate::geometry::{DiscGeometry, UNIT_DEG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn is_southern(self) -> bool {
        self == Hemisphere::South
    }

    /// Direction in which the date ring advances: -1 north, +1 south.
    pub fn ring_sign(self) -> f64 {
        match self {
            Hemisphere::North => -1.0,
            Hemisphere::South => 1.0,
        }
    }
}

/// Where the chart is drawn for. Fixed for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    pub latitude_abs: f64,
    pub hemisphere: Hemisphere,
}

impl ObserverContext {
    /// Build from a signed latitude; the sign selects the hemisphere.
    pub fn from_latitude(latitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(StarWheelError::InvalidSettings(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        Ok(Self {
            latitude_abs: latitude.abs(),
            hemisphere: Hemisphere::from_latitude(latitude),
        })
    }
}

/// A position on the sky, both coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPoint {
    pub ra: f64,
    pub dec: f64,
}

impl CelestialPoint {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }
}

/// Flip a raw catalogue coordinate for a southern chart.
///
/// Both axes are negated together. Call exactly once per raw record.
pub fn normalize(point: CelestialPoint, hemisphere: Hemisphere) -> CelestialPoint {
    match hemisphere {
        Hemisphere::North => point,
        Hemisphere::South => CelestialPoint {
            ra: -point.ra,
            dec: -point.dec,
        },
    }
}

/// Distance from the disc centre of the declination circle `dec`.
///
/// `dec = 90` maps to the centre and `dec = latitude_abs - 90` (the
/// southernmost declination above the horizon) maps to the horizon radius.
/// Inputs without a meaningful radius return `f64::INFINITY`, which every
/// caller treats as off-disc.
pub fn radius(dec: f64, latitude_abs: f64, geometry: &DiscGeometry) -> f64 {
    if !dec.is_finite() || !latitude_abs.is_finite() || !(-90.0..=90.0).contains(&dec) {
        return f64::INFINITY;
    }
    let horizon_dec = latitude_abs - 90.0;
    geometry.horizon_radius() * (90.0 - dec) / (90.0 - horizon_dec)
}

/// A point on the disc plane, derived per feature and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub radius: f64,
    /// Right ascension in radians, as used for the azimuth on the disc.
    pub azimuth: f64,
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn from_polar(radius: f64, ra_deg: f64) -> Self {
        let azimuth = ra_deg * UNIT_DEG;
        Self {
            radius,
            azimuth,
            x: -radius * azimuth.cos(),
            y: -radius * azimuth.sin(),
        }
    }

    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_within(&self, limit: f64) -> bool {
        self.radius <= limit
    }
}

/// Normalizes and projects raw catalogue points for one observer.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    pub observer: ObserverContext,
    pub geometry: &'a DiscGeometry,
}

impl<'a> Projector<'a> {
    pub fn new(observer: ObserverContext, geometry: &'a DiscGeometry) -> Self {
        Self { observer, geometry }
    }

    pub fn radius(&self, dec: f64) -> f64 {
        radius(dec, self.observer.latitude_abs, self.geometry)
    }

    /// Normalize a raw point for the hemisphere, then project it.
    ///
    /// Returns the point actually used for projection alongside the result.
    pub fn project(&self, raw: CelestialPoint) -> (CelestialPoint, ProjectedPoint) {
        let sky = normalize(raw, self.observer.hemisphere);
        let r = self.radius(sky.dec);
        (sky, ProjectedPoint::from_polar(r, sky.ra))
    }

    /// Star-chart boundary (r2).
    pub fn clip_radius(&self) -> f64 {
        self.geometry.r2()
    }
}
