//! The 27-sector Nakshatra ring between r2 and r1.

use crate::geometry::{DiscGeometry, Point, UNIT_DEG, UNIT_REV};

pub const NAKSHATRAS: [&str; 27] = [
    "Aśvinī",
    "Bharaṇī",
    "Kṛttikā",
    "Rohiṇī",
    "Mṛgaśīrṣā",
    "Ārdrā",
    "Punarvasu",
    "Puṣya",
    "Āśleṣā",
    "Maghā",
    "Pūrva Phālgunī",
    "Uttara Phālgunī",
    "Hasta",
    "Citrā",
    "Svātī",
    "Viśākhā",
    "Anurādhā",
    "Jyeṣṭhā",
    "Mūla",
    "Pūrva Āṣāḍhā",
    "Uttara Āṣāḍhā",
    "Śravaṇa",
    "Dhaniṣṭhā",
    "Śatabhiṣā",
    "Pūrva Bhādrapadā",
    "Uttara Bhādrapadā",
    "Revatī",
];

/// Angular width of one sector, in degrees.
pub const SECTOR_STEP_DEG: f64 = 360.0 / NAKSHATRAS.len() as f64;

/// Tick direction of sector `index` in degrees, wrapped into `[0, 360)`.
pub fn tick_angle_deg(base_deg: f64, index: usize) -> f64 {
    (base_deg + index as f64 * SECTOR_STEP_DEG).rem_euclid(360.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraSector {
    pub index: usize,
    pub name: &'static str,
    /// Start of the sector in radians (not wrapped).
    pub tick_angle: f64,
    /// Centre of the sector in radians.
    pub mid_angle: f64,
    pub tick_outer: Point,
    pub tick_inner: Point,
    pub label_at: Point,
    pub label_rotation: f64,
}

impl NakshatraSector {
    pub fn tick_angle_deg(&self) -> f64 {
        (self.tick_angle / UNIT_DEG).rem_euclid(360.0)
    }
}

/// Lay out all 27 sectors starting from `base_angle` (radians).
pub fn nakshatra_ring(base_angle: f64, geometry: &DiscGeometry) -> Vec<NakshatraSector> {
    let tick_outer = geometry.r1();
    let tick_inner = geometry.r1() - geometry.tick_length();
    let label_radius = geometry.nakshatra_label_radius();
    let step = SECTOR_STEP_DEG * UNIT_DEG;

    NAKSHATRAS
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            let tick_angle = base_angle + index as f64 * step;
            let mid_angle = tick_angle + step / 2.0;
            NakshatraSector {
                index,
                name,
                tick_angle,
                mid_angle,
                tick_outer: Point::on_ring(tick_outer, tick_angle),
                tick_inner: Point::on_ring(tick_inner, tick_angle),
                label_at: Point::on_ring(label_radius, mid_angle),
                label_rotation: UNIT_REV / 2.0 - mid_angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_step_is_a_27th_of_a_turn() {
        assert!((SECTOR_STEP_DEG - 13.333_333_333).abs() < 1e-6);
        assert!((SECTOR_STEP_DEG * 27.0 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn labels_sit_between_r2_and_r1() {
        let g = DiscGeometry::default();
        for sector in nakshatra_ring(0.0, &g) {
            let r = sector.label_at.norm();
            assert!(r > g.r2() && r < g.r1(), "{} at {}", sector.name, r);
            assert!((sector.tick_outer.norm() - g.r1()).abs() < 1e-9);
        }
    }

    #[test]
    fn tick_angle_wraps() {
        assert!((tick_angle_deg(350.0, 1) - 3.333_333_333).abs() < 1e-6);
    }
}
