//! Volume Engine Module
//!
//! Deterministic wellbore volume accounting. Every function here is pure:
//! it takes a complete snapshot of the pipe stack, inner string and POI and
//! returns a complete result, so calls can be repeated or interleaved
//! across inner-string modes without any shared state.
//!
//! ## Pipeline
//! - `segmenter` - depth breakpoints with constant pipe cover
//! - `ownership` - one owning pipe per segment (innermost wins)
//! - `accumulator` - gross volumes, per pipe and split at the POI
//! - `inner_string` - bore, annulus, steel and open-casing volumes
//! - `breakdown` - inner string grouped by outer casing
//! - `draw` - schematic draw list

pub mod accumulator;
pub mod breakdown;
pub mod draw;
pub mod inner_string;
pub mod ownership;
pub mod primitives;
pub mod segmenter;

pub use accumulator::accumulate;
pub use breakdown::casing_breakdown;
pub use draw::draw_list;
pub use inner_string::{displacement, inner_pieces, InnerStringWalk};
pub use ownership::{resolve_owner, OwnershipRules};
pub use primitives::{annulus_area, diameter_to_area};
pub use segmenter::{breakpoints, segments, DepthSegment};

use tracing::debug;

use crate::request::VolumeRequest;
use crate::types::{InnerStringMode, VolumeResults};

/// Compute every volume quantity for one request.
pub fn compute_volumes(request: &VolumeRequest) -> VolumeResults {
    let poi = request.poi.resolve();
    let outer = accumulate(&request.pipes, request.suppression, poi);

    let Some(inner) = request.inner_string() else {
        return VolumeResults {
            draw_list: draw_list(&request.pipes, &[], false),
            outer,
            ..VolumeResults::default()
        };
    };

    let walk = InnerStringWalk::new(&request.pipes, &inner, request.suppression, poi);
    let report = walk.report(&inner, poi, outer.total_volume_m3);
    let breakdown = casing_breakdown(&request.pipes, &walk);
    let draw = draw_list(
        &request.pipes,
        &walk.pieces,
        inner.mode() == InnerStringMode::Tubing,
    );

    debug!(
        mode = %inner.mode(),
        total_m3 = outer.total_volume_m3,
        bore_m3 = report.bore_volume_m3,
        annulus_m3 = report.annulus_volume_m3,
        "Volumes computed"
    );

    VolumeResults {
        outer,
        inner: Some(report),
        breakdown,
        draw_list: draw,
    }
}
