use starwheel::catalogue::{Catalogue, StickSegment};
use starwheel::geometry::{DiscGeometry, UNIT_CM, UNIT_DEG};
use starwheel::i18n::Translations;
use starwheel::layout::figures::layout_segment;
use starwheel::layout::nakshatra::tick_angle_deg;
use starwheel::layout::{
    declination_rings, nakshatra_ring, SegmentRejection, StarStyle, WheelLayout, NAKSHATRAS,
    SECTOR_STEP_DEG,
};
use starwheel::projection::{CelestialPoint, ObserverContext, Projector};

fn segment(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> StickSegment {
    StickSegment {
        constellation: "Test".to_string(),
        start: CelestialPoint::new(ra1, dec1),
        end: CelestialPoint::new(ra2, dec2),
    }
}

fn angular_gap_deg(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

#[test]
fn long_stick_segment_is_dropped() {
    let g = DiscGeometry::default();
    let projector = Projector::new(ObserverContext::from_latitude(52.0).unwrap(), &g);

    // Opposite sides of the equator ring, roughly 9 cm apart on the disc.
    let long = segment(0.0, 0.0, 180.0, 0.0);
    assert_eq!(
        layout_segment(&projector, &long),
        Err(SegmentRejection::TooLong)
    );

    let short = segment(0.0, 60.0, 10.0, 60.0);
    let stroke = layout_segment(&projector, &short).unwrap();
    assert!(stroke.length() < 4.0 * UNIT_CM);
}

#[test]
fn segment_below_the_horizon_is_dropped() {
    let g = DiscGeometry::default();
    let projector = Projector::new(ObserverContext::from_latitude(52.0).unwrap(), &g);
    let below = segment(100.0, -60.0, 101.0, -59.0);
    assert_eq!(
        layout_segment(&projector, &below),
        Err(SegmentRejection::OffDisc)
    );
}

#[test]
fn stick_length_cap_is_configurable() {
    let g = DiscGeometry {
        stick_length_cap: 1.0,
        ..DiscGeometry::default()
    };
    let projector = Projector::new(ObserverContext::from_latitude(52.0).unwrap(), &g);
    let short = segment(0.0, 60.0, 10.0, 60.0);
    assert_eq!(
        layout_segment(&projector, &short),
        Err(SegmentRejection::TooLong)
    );
}

#[test]
fn star_marker_boundary() {
    let style = StarStyle::default();
    assert_eq!(style.marker_radius(5.0), None);
    assert_eq!(style.marker_radius(6.2), None);
    assert!(style.marker_radius(4.99).unwrap() > 0.0);

    let sirius = style.marker_radius(-1.46).unwrap();
    let vega = style.marker_radius(0.03).unwrap();
    let zero = style.marker_radius(0.0).unwrap();
    assert!(sirius > zero, "sirius {sirius} not larger than magnitude 0 {zero}");
    assert!(zero > vega);
    assert!((zero - 0.9).abs() < 1e-12);
    assert!((sirius - 0.18 * (5.0 + 1.46)).abs() < 1e-12);
}

#[test]
fn nakshatra_sectors_split_the_circle_evenly() {
    let g = DiscGeometry::default();
    for base in [0.0, 37.0 * UNIT_DEG, -200.0 * UNIT_DEG] {
        let sectors = nakshatra_ring(base, &g);
        assert_eq!(sectors.len(), 27);

        let angles: Vec<f64> = sectors.iter().map(|s| s.tick_angle_deg()).collect();
        for i in 0..angles.len() {
            let next = angles[(i + 1) % angles.len()];
            let gap = angular_gap_deg(angles[i], next);
            assert!(
                (gap - SECTOR_STEP_DEG).abs() < 1e-9,
                "sector {i} spans {gap} degrees"
            );
        }
        for (sector, name) in sectors.iter().zip(NAKSHATRAS) {
            assert_eq!(sector.name, name);
        }
    }
}

#[test]
fn tick_angles_match_the_pure_helper() {
    let g = DiscGeometry::default();
    let base_deg: f64 = 12.5;
    for sector in nakshatra_ring(base_deg * UNIT_DEG, &g) {
        let expected = tick_angle_deg(base_deg, sector.index);
        let got = sector.tick_angle_deg();
        let diff = (got - expected).abs();
        assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "{got} vs {expected}");
    }
}

#[test]
fn northern_grid_keeps_the_equator() {
    let g = DiscGeometry::default();
    let projector = Projector::new(ObserverContext::from_latitude(52.0).unwrap(), &g);
    let rings = declination_rings(&projector);

    assert!(rings.iter().all(|r| r.radius <= g.r2()));
    assert!(rings.iter().any(|r| r.declination == 0.0));
    // -38 is the horizon at 52N.
    assert!(rings.iter().all(|r| r.declination >= -38.0));
    assert_eq!(rings.first().map(|r| r.declination), Some(-35.0));
}

#[test]
fn bundled_layout_stays_on_the_chart() {
    let g = DiscGeometry::default();
    let catalogue = Catalogue::bundled();
    let translations = Translations::bundled().unwrap();
    let language = translations.language("en").unwrap();

    for lat in [52.0, -35.0, 0.0] {
        let projector = Projector::new(ObserverContext::from_latitude(lat).unwrap(), &g);
        let layout = WheelLayout::compute(&projector, &catalogue, &language, &StarStyle::default());

        assert!(!layout.stars.is_empty(), "no stars at {lat}");
        assert!(layout.stars.iter().all(|s| s.at.radius <= g.r2()));
        assert!(layout.stars.iter().all(|s| s.magnitude < 5.0));
        assert!(layout.labels.iter().all(|l| l.at.radius <= g.r2()));
        assert!(layout
            .strokes
            .iter()
            .all(|s| s.length() <= g.stick_length_cap));
        assert!(layout.labels.iter().all(|l| !l.text.contains('_')));
        assert_eq!(layout.sectors.len(), 27);
    }
}

#[test]
fn unknown_magnitude_is_never_drawn() {
    let catalogue = Catalogue::from_sources("10.0 80.0 -\n20.0 80.0 2.0 Bright\n", "", "");
    let g = DiscGeometry::default();
    let projector = Projector::new(ObserverContext::from_latitude(52.0).unwrap(), &g);
    let translations = Translations::bundled().unwrap();
    let language = translations.language("en").unwrap();
    let layout = WheelLayout::compute(&projector, &catalogue, &language, &StarStyle::default());

    assert_eq!(catalogue.stars.len(), 2);
    assert_eq!(layout.stars.len(), 1);
    assert_eq!(layout.stars[0].name.as_deref(), Some("Bright"));
}
