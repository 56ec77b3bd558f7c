//! Physical layout of the printed disc.
//!
//! All lengths are millimetres on paper; all angles handed to the drawing
//! surface are radians.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

pub const UNIT_MM: f64 = 1.0;
pub const UNIT_CM: f64 = 10.0 * UNIT_MM;
pub const UNIT_DEG: f64 = PI / 180.0;
pub const UNIT_REV: f64 = TAU;

/// Margin around the disc included in the output bounding box.
const BOUNDING_MARGIN: f64 = 4.0 * UNIT_MM;

/// Point on the disc plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Point at `radius` along the ring direction `angle`; y grows downwards.
    pub fn on_ring(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: -radius * angle.sin(),
        }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned box in disc-plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Radii that define the star wheel. Constant for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscGeometry {
    /// Outer edge of the wheel (r1).
    pub outer_radius: f64,
    /// Width of the date ring between r1 and r2.
    pub gap: f64,
    pub central_hole_radius: f64,
    /// Longest stick-figure stroke drawn, measured on the printed disc.
    pub stick_length_cap: f64,
}

impl Default for DiscGeometry {
    fn default() -> Self {
        Self {
            outer_radius: 75.0 * UNIT_MM,
            gap: 12.0 * UNIT_MM,
            central_hole_radius: 1.5 * UNIT_MM,
            stick_length_cap: 4.0 * UNIT_CM,
        }
    }
}

impl DiscGeometry {
    pub fn r1(&self) -> f64 {
        self.outer_radius
    }

    /// Boundary between the star chart and the date ring.
    pub fn r2(&self) -> f64 {
        self.outer_radius - self.gap
    }

    /// Radius at which the observer's horizon is drawn.
    pub fn horizon_radius(&self) -> f64 {
        self.r2()
    }

    /// Inner edge of the shaded band behind the date ring.
    pub fn shading_inner_radius(&self) -> f64 {
        self.r1() * 0.55 + self.r2() * 0.45
    }

    pub fn nakshatra_label_radius(&self) -> f64 {
        self.r1() * 0.75 + self.r2() * 0.25
    }

    pub fn tick_length(&self) -> f64 {
        0.15 * UNIT_CM
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let extent = self.r1() + BOUNDING_MARGIN;
        BoundingBox {
            x_min: -extent,
            x_max: extent,
            y_min: -extent,
            y_max: extent,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let all_finite = [
            self.outer_radius,
            self.gap,
            self.central_hole_radius,
            self.stick_length_cap,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err("disc geometry must be finite".into());
        }
        if self.gap <= 0.0 || self.gap >= self.outer_radius {
            return Err(format!(
                "gap {} must lie strictly between 0 and the outer radius {}",
                self.gap, self.outer_radius
            ));
        }
        if self.central_hole_radius < 0.0 || self.central_hole_radius >= self.r2() {
            return Err(format!(
                "central hole {} must be smaller than r2 {}",
                self.central_hole_radius,
                self.r2()
            ));
        }
        if self.stick_length_cap <= 0.0 {
            return Err("stick length cap must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_radii_sit_inside_the_ring() {
        let g = DiscGeometry::default();
        assert!(g.r2() < g.r1());
        assert!(g.shading_inner_radius() > g.r2() && g.shading_inner_radius() < g.r1());
        assert!(g.nakshatra_label_radius() > g.r2() && g.nakshatra_label_radius() < g.r1());
        assert!(g.r1() - g.tick_length() > g.r2());
    }

    #[test]
    fn bounding_box_adds_margin() {
        let g = DiscGeometry::default();
        let bb = g.bounding_box();
        assert_eq!(bb.x_max, g.r1() + 4.0);
        assert_eq!(bb.width(), bb.height());
    }

    #[test]
    fn rejects_gap_wider_than_disc() {
        let g = DiscGeometry {
            gap: 80.0,
            ..DiscGeometry::default()
        };
        assert!(g.validate().is_err());
        assert!(DiscGeometry::default().validate().is_ok());
    }
}
