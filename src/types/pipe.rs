//! Pipe descriptors for the outer string stack

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Pipe Role
// ============================================================================

/// Role tag of a casing, liner, riser or open-hole element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeRole {
    Conductor,
    Riser,
    Surface,
    Intermediate,
    Production,
    Tieback,
    Reservoir,
    SmallLiner,
    UpperCompletion,
    OpenHole,
}

/// Ownership category used when candidates of different classes overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeCategory {
    /// Conductor, riser, surface, intermediate, production, tie-back
    MainWellbore,
    /// Reservoir liner, small liner, upper completion, open hole
    Supplemental,
}

struct RoleTraits {
    role: PipeRole,
    key: &'static str,
    label: &'static str,
    category: PipeCategory,
    /// Schematic z-order, higher draws on top
    z_order: u8,
}

/// Static per-role lookup table, indexed by `PipeRole as usize`.
const ROLE_TABLE: [RoleTraits; 10] = [
    RoleTraits {
        role: PipeRole::Conductor,
        key: "conductor",
        label: "Conductor",
        category: PipeCategory::MainWellbore,
        z_order: 1,
    },
    RoleTraits {
        role: PipeRole::Riser,
        key: "riser",
        label: "Riser",
        category: PipeCategory::MainWellbore,
        z_order: 2,
    },
    RoleTraits {
        role: PipeRole::Surface,
        key: "surface",
        label: "Surface casing",
        category: PipeCategory::MainWellbore,
        z_order: 3,
    },
    RoleTraits {
        role: PipeRole::Intermediate,
        key: "intermediate",
        label: "Intermediate casing",
        category: PipeCategory::MainWellbore,
        z_order: 4,
    },
    RoleTraits {
        role: PipeRole::Production,
        key: "production",
        label: "Production casing",
        category: PipeCategory::MainWellbore,
        z_order: 5,
    },
    RoleTraits {
        role: PipeRole::Tieback,
        key: "tieback",
        label: "Tie-back",
        category: PipeCategory::MainWellbore,
        z_order: 6,
    },
    RoleTraits {
        role: PipeRole::Reservoir,
        key: "reservoir",
        label: "Reservoir liner",
        category: PipeCategory::Supplemental,
        z_order: 7,
    },
    RoleTraits {
        role: PipeRole::SmallLiner,
        key: "small_liner",
        label: "Small liner",
        category: PipeCategory::Supplemental,
        z_order: 8,
    },
    RoleTraits {
        role: PipeRole::UpperCompletion,
        key: "upper_completion",
        label: "Upper completion",
        category: PipeCategory::Supplemental,
        z_order: 9,
    },
    RoleTraits {
        role: PipeRole::OpenHole,
        key: "open_hole",
        label: "Open hole",
        category: PipeCategory::Supplemental,
        z_order: 0,
    },
];

impl PipeRole {
    pub const ALL: [Self; 10] = [
        Self::Conductor,
        Self::Riser,
        Self::Surface,
        Self::Intermediate,
        Self::Production,
        Self::Tieback,
        Self::Reservoir,
        Self::SmallLiner,
        Self::UpperCompletion,
        Self::OpenHole,
    ];

    fn traits(self) -> &'static RoleTraits {
        &ROLE_TABLE[self as usize]
    }

    pub fn category(self) -> PipeCategory {
        self.traits().category
    }

    /// Fixed schematic draw priority for this role.
    pub fn z_order(self) -> u8 {
        self.traits().z_order
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        self.traits().label
    }

    /// Stable snake_case key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        self.traits().key
    }

    /// Whether this role can act as the outer container of an inner string.
    ///
    /// The upper completion is itself the tubing in tubing mode, so it never
    /// owns an inner-string annulus.
    pub fn is_outer_container(self) -> bool {
        self != Self::UpperCompletion
    }
}

impl fmt::Display for PipeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PipeRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == ' ', "_");
        ROLE_TABLE
            .iter()
            .find(|t| t.key == wanted)
            .map(|t| t.role)
            .ok_or_else(|| format!("unknown pipe role '{s}'"))
    }
}

// ============================================================================
// Pipe Descriptor
// ============================================================================

/// One element of the outer string stack.
///
/// Diameters are inches, depths are meters measured from surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeDescriptor {
    pub role: PipeRole,

    /// Inner diameter (in). Optional for descriptors that only bound depth.
    #[serde(default)]
    pub id: Option<f64>,

    /// Outer diameter (in).
    #[serde(default)]
    pub od: Option<f64>,

    /// Top of the interval (m).
    #[serde(default)]
    pub top: f64,

    /// Bottom of the interval (m).
    pub depth: f64,

    /// Inactive pipes contribute nothing.
    #[serde(default = "default_in_use", rename = "use", alias = "in_use")]
    pub in_use: bool,
}

fn default_in_use() -> bool {
    true
}

impl PipeDescriptor {
    pub fn new(role: PipeRole, id: f64, top: f64, depth: f64) -> Self {
        Self {
            role,
            id: Some(id),
            od: None,
            top,
            depth,
            in_use: true,
        }
    }

    #[must_use]
    pub fn with_od(mut self, od: f64) -> Self {
        self.od = Some(od);
        self
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.in_use = false;
        self
    }

    /// Finite interval with `depth > top`.
    pub fn has_valid_interval(&self) -> bool {
        self.top.is_finite() && self.depth.is_finite() && self.depth > self.top
    }

    /// Active and bounded by a valid interval.
    pub fn contributes(&self) -> bool {
        self.in_use && self.has_valid_interval()
    }

    /// Inner diameter usable for area calculations, if any.
    pub fn bore_diameter(&self) -> Option<f64> {
        self.id.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// True when the pipe interval overlaps `[start, end)`.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.depth > start && self.top < end
    }
}
