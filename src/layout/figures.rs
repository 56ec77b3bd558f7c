use crate::catalogue::StickSegment;
use crate::projection::{CelestialPoint, ProjectedPoint, Projector};

/// A stick-figure line that survived clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStroke {
    pub constellation: String,
    pub sky: (CelestialPoint, CelestialPoint),
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
}

impl FigureStroke {
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}

/// Why a segment was left off the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRejection {
    /// An endpoint lies beyond r2.
    OffDisc,
    /// Longer than the printed-length cap; heavily distorted near the rim.
    TooLong,
}

pub fn layout_segment(
    projector: &Projector,
    segment: &StickSegment,
) -> Result<FigureStroke, SegmentRejection> {
    let (sky_from, from) = projector.project(segment.start);
    let (sky_to, to) = projector.project(segment.end);
    let limit = projector.clip_radius();
    if !from.is_within(limit) || !to.is_within(limit) {
        return Err(SegmentRejection::OffDisc);
    }
    if from.distance_to(&to) > projector.geometry.stick_length_cap {
        return Err(SegmentRejection::TooLong);
    }
    Ok(FigureStroke {
        constellation: segment.constellation.clone(),
        sky: (sky_from, sky_to),
        from,
        to,
    })
}

pub fn stick_figures(projector: &Projector, segments: &[StickSegment]) -> Vec<FigureStroke> {
    segments
        .iter()
        .filter_map(|segment| layout_segment(projector, segment).ok())
        .collect()
}
