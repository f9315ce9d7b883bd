//! Point-of-interest and suppression inputs

use serde::{Deserialize, Serialize};

use super::{PipeDescriptor, PipeRole};

/// POI as entered by the user: a depth plus an enable toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiSetting {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub depth: Option<f64>,
}

impl PoiSetting {
    pub fn at(depth: f64) -> Self {
        Self {
            enabled: true,
            depth: Some(depth),
        }
    }

    /// The POI depth to split volumes at, or `None` when disabled or non-numeric.
    pub fn resolve(&self) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        self.depth.filter(|d| d.is_finite())
    }
}

/// Flags for the nested-casing suppression rule.
///
/// A conductor is not exposed to wellbore fluid once a surface casing is in
/// use, and a surface casing is not once an intermediate casing is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionFlags {
    #[serde(default)]
    pub surface_in_use: bool,
    #[serde(default)]
    pub intermediate_in_use: bool,
}

impl SuppressionFlags {
    /// Derive the flags from the active pipes of the stack.
    ///
    /// Only the `use` flag matters here: a pipe with a missing diameter still
    /// suppresses the string it is nested in.
    pub fn from_pipes(pipes: &[PipeDescriptor]) -> Self {
        let active = |role: PipeRole| pipes.iter().any(|p| p.in_use && p.role == role);
        Self {
            surface_in_use: active(PipeRole::Surface),
            intermediate_in_use: active(PipeRole::Intermediate),
        }
    }

    /// Whether a pipe of `role` is hidden behind a nested string.
    pub fn suppresses(&self, role: PipeRole) -> bool {
        match role {
            PipeRole::Conductor => self.surface_in_use,
            PipeRole::Surface => self.intermediate_in_use,
            _ => false,
        }
    }
}
