use crate::projection::Projector;

pub const GRID_FIRST_DEC: f64 = -80.0;
pub const GRID_LAST_DEC: f64 = 80.0;
pub const GRID_STEP_DEC: f64 = 15.0;
pub const EQUATOR_DEC: f64 = 0.0;

/// Declinations that get a grid circle: -80, -65, ... , +70, plus the
/// celestial equator, in ascending order.
pub fn grid_declinations() -> impl Iterator<Item = f64> {
    let stepped = (0..)
        .map(|i| GRID_FIRST_DEC + f64::from(i) * GRID_STEP_DEC)
        .take_while(|dec| *dec <= GRID_LAST_DEC);
    let mut decs: Vec<f64> = stepped.chain(std::iter::once(EQUATOR_DEC)).collect();
    decs.sort_by(f64::total_cmp);
    decs.dedup();
    decs.into_iter()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclinationRing {
    pub declination: f64,
    pub radius: f64,
}

/// Grid circles that fit inside the star chart for this observer.
pub fn declination_rings(projector: &Projector) -> Vec<DeclinationRing> {
    grid_declinations()
        .map(|declination| DeclinationRing {
            declination,
            radius: projector.radius(declination),
        })
        .filter(|ring| ring.radius <= projector.clip_radius())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DiscGeometry;
    use crate::projection::ObserverContext;

    #[test]
    fn grid_runs_from_minus_80_in_15_degree_steps() {
        let decs: Vec<f64> = grid_declinations().collect();
        assert_eq!(decs.first(), Some(&-80.0));
        assert_eq!(decs.last(), Some(&70.0));
        assert_eq!(decs.len(), 12);
        assert!(decs.contains(&0.0));
        assert!(decs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn equator_observer_keeps_every_ring() {
        let g = DiscGeometry::default();
        let projector = Projector::new(ObserverContext::from_latitude(0.0).unwrap(), &g);
        assert_eq!(declination_rings(&projector).len(), 12);
    }

    #[test]
    fn polar_observer_loses_the_southern_sky() {
        let g = DiscGeometry::default();
        let projector = Projector::new(ObserverContext::from_latitude(90.0).unwrap(), &g);
        let rings = declination_rings(&projector);
        assert!(rings.iter().all(|r| r.declination >= 0.0));
        // 0, 10, 25, 40, 55, 70
        assert_eq!(rings.len(), 6);
    }
}
