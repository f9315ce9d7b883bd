//! Result records produced by the volume engine
//!
//! All volumes are cubic meters, all depths and lengths meters, diameters
//! inches. Every record is derived from a single engine call and carries no
//! state between calls.

use serde::{Deserialize, Serialize};

use super::{InnerStringMode, PipeRole};

/// A quantity divided at the point of interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub above: f64,
    pub below: f64,
}

impl Split {
    pub fn total(&self) -> f64 {
        self.above + self.below
    }
}

/// Volume credited to one input pipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeVolume {
    /// Position of the pipe in the request's pipe list
    pub index: usize,
    pub role: PipeRole,
    pub volume_m3: f64,
    /// Total depth length this pipe owns after ownership resolution
    pub owned_length_m: f64,
}

/// A depth interval together with the pipe that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedSegment {
    pub start: f64,
    pub end: f64,
    pub owner: usize,
    pub role: PipeRole,
    /// `None` when the owner has no usable inner diameter
    pub id_in: Option<f64>,
    pub volume_m3: f64,
}

/// Gross volumes of the outer string stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OuterVolumeReport {
    pub total_volume_m3: f64,
    /// One entry per input pipe, in input order
    pub per_pipe: Vec<PipeVolume>,
    /// Above/below POI ("plug above" / "plug below"), when a POI is set
    pub poi: Option<Split>,
    /// Owned, non-overlapping segments in depth order
    pub segments: Vec<OwnedSegment>,
}

/// Volumes attributed to one piece of the inner string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerSegmentVolume {
    /// Drill-pipe segment index, 0 for tubing
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
    pub bore_volume_m3: f64,
    pub annulus_volume_m3: f64,
    pub steel_displacement_m3: f64,
}

/// POI split of every inner-string quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerPoiSplit {
    pub bore: Split,
    pub annulus: Split,
    pub open_casing: Split,
    pub steel: Split,
}

/// Displacement summary for the active inner string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerStringReport {
    pub mode: InnerStringMode,
    /// Deepest point reached by the string
    pub bottom_m: f64,
    pub bore_volume_m3: f64,
    pub annulus_volume_m3: f64,
    pub steel_displacement_m3: f64,
    /// Outer volume not taken by bore, annulus or steel
    pub open_casing_volume_m3: f64,
    /// Outer gross volume less steel displacement
    pub outer_net_volume_m3: f64,
    pub segments: Vec<InnerSegmentVolume>,
    pub poi: Option<InnerPoiSplit>,
}

/// One row of the inner-string-by-casing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingBreakdownRow {
    /// Index of the outer pipe in the request
    pub pipe_index: usize,
    pub role: PipeRole,
    pub outer_id_in: Option<f64>,
    pub top: f64,
    pub bottom: f64,
    pub length_m: f64,
    pub bore_volume_m3: f64,
    pub annulus_volume_m3: f64,
}

/// What a draw-list entry depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawKind {
    Pipe { role: PipeRole },
    DrillPipe { segment: usize },
    Tubing,
}

/// Geometry handed to the schematic renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    #[serde(flatten)]
    pub kind: DrawKind,
    pub id_in: Option<f64>,
    pub od_in: Option<f64>,
    pub top: f64,
    pub bottom: f64,
    pub z_order: u8,
}

/// Everything one engine call produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeResults {
    pub outer: OuterVolumeReport,
    pub inner: Option<InnerStringReport>,
    /// Inner string grouped by the outer pipe it occupies, narrowest first
    pub breakdown: Vec<CasingBreakdownRow>,
    pub draw_list: Vec<DrawItem>,
}
