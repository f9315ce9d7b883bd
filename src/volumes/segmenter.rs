//! Depth segmenter
//!
//! Reduces a set of possibly overlapping pipe intervals to the minimal
//! ordered list of non-overlapping depth segments. Within any returned
//! segment the set of active pipes overlapping it is constant, which is
//! what ownership resolution relies on.

use serde::{Deserialize, Serialize};

use crate::types::PipeDescriptor;

/// Half-open depth interval `[start, end)` in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSegment {
    pub start: f64,
    pub end: f64,
}

impl DepthSegment {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Sorted, de-duplicated breakpoints: 0, every contributing pipe's top and
/// bottom, and any finite non-negative `extra` depth (POI, inner-string
/// boundaries).
pub fn breakpoints(pipes: &[PipeDescriptor], extra: &[f64]) -> Vec<f64> {
    let mut points = Vec::with_capacity(1 + pipes.len() * 2 + extra.len());
    points.push(0.0);
    for pipe in pipes.iter().filter(|p| p.contributes()) {
        points.push(pipe.top);
        points.push(pipe.depth);
    }
    points.extend(extra.iter().copied().filter(|d| d.is_finite() && *d >= 0.0));

    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

/// Consecutive breakpoint pairs with positive length.
pub fn segments(pipes: &[PipeDescriptor], extra: &[f64]) -> Vec<DepthSegment> {
    breakpoints(pipes, extra)
        .windows(2)
        .filter(|w| w[1] > w[0])
        .map(|w| DepthSegment {
            start: w[0],
            end: w[1],
        })
        .collect()
}
