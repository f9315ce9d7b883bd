//! Inner string grouped by the outer casing it occupies
//!
//! Outer pipes are visited from narrowest to widest. Each one claims the
//! occupied sub-ranges it owns that no narrower pipe has claimed yet, and
//! every contiguous run of claimed sub-ranges becomes one table row.

use crate::types::{CasingBreakdownRow, PipeDescriptor};

use super::inner_string::InnerStringWalk;
use super::ownership::compare_candidates;

/// Rows ordered narrowest container first, then by depth.
pub fn casing_breakdown(
    pipes: &[PipeDescriptor],
    walk: &InnerStringWalk,
) -> Vec<CasingBreakdownRow> {
    let occupied: Vec<_> = walk.occupied().collect();

    let mut owners: Vec<usize> = occupied.iter().filter_map(|r| r.owner).collect();
    owners.sort_unstable();
    owners.dedup();
    owners.sort_by(|&a, &b| compare_candidates((a, &pipes[a]), (b, &pipes[b])));

    let mut claimed = vec![false; occupied.len()];
    let mut rows = Vec::new();

    for owner in owners {
        let pipe = &pipes[owner];
        let mut current: Option<CasingBreakdownRow> = None;

        for (i, range) in occupied.iter().enumerate() {
            if claimed[i] || range.owner != Some(owner) {
                continue;
            }
            claimed[i] = true;

            let contiguous = current.as_ref().is_some_and(|row| row.bottom == range.segment.start);
            if !contiguous {
                rows.extend(current.take());
            }
            let row = current.get_or_insert_with(|| CasingBreakdownRow {
                pipe_index: owner,
                role: pipe.role,
                outer_id_in: pipe.bore_diameter(),
                top: range.segment.start,
                bottom: range.segment.start,
                length_m: 0.0,
                bore_volume_m3: 0.0,
                annulus_volume_m3: 0.0,
            });
            row.bottom = range.segment.end;
            row.length_m += range.segment.length();
            row.bore_volume_m3 += range.bore;
            row.annulus_volume_m3 += range.annulus;
        }
        rows.extend(current);
    }

    rows.retain(|row| row.length_m > 0.0);
    rows
}
