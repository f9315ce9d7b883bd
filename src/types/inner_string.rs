//! Inner strings run inside the outer pipe stack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One drill-pipe joint group, already resolved against the size catalog.
///
/// Segments are laid from surface downward: the first segment starts at
/// 0 m and each following one starts where the previous ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPipeSegment {
    /// Index of the size in the catalog snapshot this segment came from
    pub size_index: usize,

    /// Segment length (m)
    pub length: f64,

    /// Internal capacity (L/m)
    pub bore_l_per_m: f64,

    /// Outer diameter (in)
    pub od: f64,

    /// Open-ended steel displacement (L/m). Derived from `od` and
    /// `bore_l_per_m` when absent.
    #[serde(default)]
    pub eod_l_per_m: Option<f64>,
}

/// Production tubing: a single contiguous string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubingString {
    /// Inner diameter (in)
    pub id: f64,

    /// Outer diameter (in)
    pub od: f64,

    /// Top (m)
    #[serde(default)]
    pub top: f64,

    /// Bottom (m)
    pub depth: f64,
}

/// The string currently run inside the outer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum InnerString {
    #[serde(rename = "drillpipe")]
    DrillPipe { segments: Vec<DrillPipeSegment> },
    Tubing(TubingString),
}

impl InnerString {
    pub fn mode(&self) -> InnerStringMode {
        match self {
            Self::DrillPipe { .. } => InnerStringMode::DrillPipe,
            Self::Tubing(_) => InnerStringMode::Tubing,
        }
    }
}

/// Which inner string the caller wants evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnerStringMode {
    #[default]
    None,
    #[serde(rename = "drillpipe")]
    DrillPipe,
    Tubing,
}

impl fmt::Display for InnerStringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::DrillPipe => "drillpipe",
            Self::Tubing => "tubing",
        };
        f.write_str(s)
    }
}

impl FromStr for InnerStringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "drillpipe" | "drill_pipe" | "drill-pipe" | "dp" => Ok(Self::DrillPipe),
            "tubing" => Ok(Self::Tubing),
            other => Err(format!(
                "unknown inner string mode '{other}' (expected drillpipe, tubing or none)"
            )),
        }
    }
}
