//! Inner-string displacement engine
//!
//! Walks the well from surface with a breakpoint set that adds the inner
//! string's own boundaries and the POI to the outer pipe boundaries. For
//! every sub-range it resolves the outer container (upper completion
//! excluded) and computes:
//! - bore volume inside the inner string
//! - annulus volume between the inner string OD and the container ID
//! - steel displacement to subtract from the container's gross volume
//! - open casing volume, the container volume not taken by any of the above
//!
//! The walk is a pure function of its inputs; drill-pipe and tubing calls
//! share nothing.

use tracing::debug;

use crate::types::{
    InnerPoiSplit, InnerSegmentVolume, InnerString, InnerStringReport, PipeDescriptor, Split,
    SuppressionFlags,
};

use super::accumulator::{accumulate, owner_area};
use super::ownership::{resolve_owner, OwnershipRules};
use super::primitives::{
    capacity_to_area, diameter_to_area, overlap_length, split_at_poi, steel_area_from_capacity,
};
use super::segmenter::{segments, DepthSegment};

// ============================================================================
// Inner-string pieces
// ============================================================================

/// One contiguous piece of the inner string with its per-meter areas (m²).
#[derive(Debug, Clone, PartialEq)]
pub struct InnerPiece {
    /// Drill-pipe segment index, 0 for tubing
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
    pub od_in: f64,
    pub bore_area: f64,
    pub od_area: f64,
    pub steel_area: f64,
}

fn positive_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Lay the inner string out in depth.
///
/// Drill-pipe segments stack from 0 m in order; segments with a
/// non-positive or non-finite length are skipped and take no depth.
pub fn inner_pieces(inner: &InnerString) -> Vec<InnerPiece> {
    match inner {
        InnerString::DrillPipe { segments } => {
            let mut pieces = Vec::with_capacity(segments.len());
            let mut depth = 0.0;
            for (index, seg) in segments.iter().enumerate() {
                if !(seg.length.is_finite() && seg.length > 0.0) {
                    debug!(
                        index,
                        length = seg.length,
                        "Skipping drill-pipe segment with no length"
                    );
                    continue;
                }
                let od_in = positive_or_zero(seg.od);
                let bore_l_per_m = positive_or_zero(seg.bore_l_per_m);
                let steel_area = match seg.eod_l_per_m {
                    Some(eod) if eod.is_finite() && eod >= 0.0 => capacity_to_area(eod),
                    _ => steel_area_from_capacity(od_in, bore_l_per_m),
                };
                pieces.push(InnerPiece {
                    index,
                    top: depth,
                    bottom: depth + seg.length,
                    od_in,
                    bore_area: capacity_to_area(bore_l_per_m),
                    od_area: diameter_to_area(od_in),
                    steel_area,
                });
                depth += seg.length;
            }
            pieces
        }
        InnerString::Tubing(tubing) => {
            if !(tubing.top.is_finite() && tubing.depth.is_finite() && tubing.depth > tubing.top) {
                debug!(
                    top = tubing.top,
                    depth = tubing.depth,
                    "Skipping tubing with empty or inverted interval"
                );
                return Vec::new();
            }
            let od_in = positive_or_zero(tubing.od);
            let bore_area = diameter_to_area(positive_or_zero(tubing.id));
            let od_area = diameter_to_area(od_in);
            vec![InnerPiece {
                index: 0,
                top: tubing.top,
                bottom: tubing.depth,
                od_in,
                bore_area,
                od_area,
                steel_area: (od_area - bore_area).max(0.0),
            }]
        }
    }
}

// ============================================================================
// Walk
// ============================================================================

/// Volumes of one sub-range of the walk (m³).
#[derive(Debug, Clone, PartialEq)]
pub struct InnerSubRange {
    pub segment: DepthSegment,
    /// Outer container, `None` below every active pipe
    pub owner: Option<usize>,
    /// Container bore area (m²)
    pub owner_area: f64,
    /// Index into [`InnerStringWalk::pieces`] when the string is present
    pub piece: Option<usize>,
    pub gross: f64,
    pub bore: f64,
    pub annulus: f64,
    pub steel: f64,
    pub open_casing: f64,
}

/// The depth walk of one inner string against the outer stack.
#[derive(Debug, Clone, PartialEq)]
pub struct InnerStringWalk {
    pub pieces: Vec<InnerPiece>,
    pub ranges: Vec<InnerSubRange>,
}

impl InnerStringWalk {
    pub fn new(
        pipes: &[PipeDescriptor],
        inner: &InnerString,
        suppression: SuppressionFlags,
        poi: Option<f64>,
    ) -> Self {
        let pieces = inner_pieces(inner);
        let mut extra: Vec<f64> = pieces.iter().flat_map(|p| [p.top, p.bottom]).collect();
        extra.extend(poi);

        let rules = OwnershipRules::for_inner_string(suppression);
        let ranges = segments(pipes, &extra)
            .into_iter()
            .map(|segment| {
                let owner = resolve_owner(pipes, segment, rules);
                let owner_area = owner.map_or(0.0, |i| owner_area(&pipes[i]));
                let length = segment.length();
                let gross = owner_area * length;

                let piece = pieces.iter().position(|p| {
                    overlap_length(p.top, p.bottom, segment.start, segment.end) > 0.0
                });
                let (bore, annulus, steel) = piece.map_or((0.0, 0.0, 0.0), |i| {
                    let p = &pieces[i];
                    (
                        p.bore_area * length,
                        (owner_area - p.od_area).max(0.0) * length,
                        p.steel_area * length,
                    )
                });

                InnerSubRange {
                    segment,
                    owner,
                    owner_area,
                    piece,
                    gross,
                    bore,
                    annulus,
                    steel,
                    open_casing: (gross - steel - bore - annulus).max(0.0),
                }
            })
            .collect();

        Self { pieces, ranges }
    }

    /// Sub-ranges where the inner string is present.
    pub fn occupied(&self) -> impl Iterator<Item = &InnerSubRange> {
        self.ranges.iter().filter(|r| r.piece.is_some())
    }

    /// Deepest point reached by the string, 0 when it has no pieces.
    pub fn bottom(&self) -> f64 {
        self.pieces.iter().map(|p| p.bottom).fold(0.0, f64::max)
    }

    /// Summarise the walk into a report.
    ///
    /// `outer_total_m3` is the gross volume of the outer stack; the outer net
    /// volume is that total less the string's steel. The walk's own gross
    /// leaves out the upper completion and only feeds annulus and open casing.
    pub fn report(
        &self,
        inner: &InnerString,
        poi: Option<f64>,
        outer_total_m3: f64,
    ) -> InnerStringReport {
        let mut segments: Vec<InnerSegmentVolume> = self
            .pieces
            .iter()
            .map(|p| InnerSegmentVolume {
                index: p.index,
                top: p.top,
                bottom: p.bottom,
                bore_volume_m3: 0.0,
                annulus_volume_m3: 0.0,
                steel_displacement_m3: 0.0,
            })
            .collect();
        let mut split = poi.map(|_| InnerPoiSplit::default());
        let (mut bore, mut annulus, mut steel, mut open) = (0.0, 0.0, 0.0, 0.0);

        for range in &self.ranges {
            bore += range.bore;
            annulus += range.annulus;
            steel += range.steel;
            open += range.open_casing;

            if let Some(i) = range.piece {
                segments[i].bore_volume_m3 += range.bore;
                segments[i].annulus_volume_m3 += range.annulus;
                segments[i].steel_displacement_m3 += range.steel;
            }

            if let (Some(poi), Some(split)) = (poi, split.as_mut()) {
                let DepthSegment { start, end } = range.segment;
                let (above_len, below_len) = split_at_poi(start, end, poi);
                let length = range.segment.length();
                let share = |volume: f64, target: &mut Split| {
                    if length > 0.0 {
                        target.above += volume * (above_len / length);
                        target.below += volume * (below_len / length);
                    }
                };
                share(range.bore, &mut split.bore);
                share(range.annulus, &mut split.annulus);
                share(range.open_casing, &mut split.open_casing);
                share(range.steel, &mut split.steel);
            }
        }

        InnerStringReport {
            mode: inner.mode(),
            bottom_m: self.bottom(),
            bore_volume_m3: bore,
            annulus_volume_m3: annulus,
            steel_displacement_m3: steel,
            open_casing_volume_m3: open,
            outer_net_volume_m3: outer_total_m3 - steel,
            segments,
            poi: split,
        }
    }
}

/// Displacement report for `inner` run inside `pipes`.
pub fn displacement(
    pipes: &[PipeDescriptor],
    inner: &InnerString,
    suppression: SuppressionFlags,
    poi: Option<f64>,
) -> InnerStringReport {
    let outer_total = accumulate(pipes, suppression, poi).total_volume_m3;
    InnerStringWalk::new(pipes, inner, suppression, poi).report(inner, poi, outer_total)
}
