//! Volume accumulator for the outer string stack
//!
//! Integrates owner area × segment length over the segmented depth range,
//! crediting each segment to exactly one pipe and splitting at the POI.

use tracing::debug;

use crate::types::{
    OuterVolumeReport, OwnedSegment, PipeDescriptor, PipeVolume, Split, SuppressionFlags,
};

use super::ownership::{resolve_owner, OwnershipRules};
use super::primitives::{diameter_to_area, split_at_poi};
use super::segmenter::segments;

/// Owner bore area in m², zero when the owner has no usable inner diameter.
pub(crate) fn owner_area(pipe: &PipeDescriptor) -> f64 {
    pipe.bore_diameter().map_or(0.0, diameter_to_area)
}

/// Gross volume of the outer stack, per pipe and in total.
///
/// Segments straddling the POI are divided by length using the same owner
/// area, never by re-resolving ownership.
pub fn accumulate(
    pipes: &[PipeDescriptor],
    suppression: SuppressionFlags,
    poi: Option<f64>,
) -> OuterVolumeReport {
    for (i, p) in pipes.iter().enumerate() {
        if !p.in_use {
            debug!(index = i, role = %p.role, "Skipping inactive pipe");
            continue;
        }
        if !p.has_valid_interval() {
            debug!(
                index = i,
                role = %p.role,
                top = p.top,
                depth = p.depth,
                "Skipping pipe with empty or inverted interval"
            );
        }
        if !p.id.is_some_and(f64::is_finite) {
            debug!(
                index = i,
                role = %p.role,
                id = ?p.id,
                "Pipe has no finite inner diameter, ranked outermost"
            );
        }
    }

    let rules = OwnershipRules::new(suppression);
    let mut per_pipe: Vec<PipeVolume> = pipes
        .iter()
        .enumerate()
        .map(|(index, p)| PipeVolume {
            index,
            role: p.role,
            volume_m3: 0.0,
            owned_length_m: 0.0,
        })
        .collect();
    let mut total = 0.0;
    let mut split = poi.map(|_| Split::default());
    let mut owned = Vec::new();

    for segment in segments(pipes, &[]) {
        let Some(owner) = resolve_owner(pipes, segment, rules) else {
            continue;
        };
        let pipe = &pipes[owner];
        let area = owner_area(pipe);
        let volume = area * segment.length();

        total += volume;
        per_pipe[owner].volume_m3 += volume;
        per_pipe[owner].owned_length_m += segment.length();

        if let (Some(poi), Some(split)) = (poi, split.as_mut()) {
            let (above_len, below_len) = split_at_poi(segment.start, segment.end, poi);
            split.above += area * above_len;
            split.below += area * below_len;
        }

        owned.push(OwnedSegment {
            start: segment.start,
            end: segment.end,
            owner,
            role: pipe.role,
            id_in: pipe.bore_diameter(),
            volume_m3: volume,
        });
    }

    OuterVolumeReport {
        total_volume_m3: total,
        per_pipe,
        poi: split,
        segments: owned,
    }
}
