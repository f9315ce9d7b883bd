//! Size Catalog Module
//!
//! The definitions collaborator: turns the built-in size tables plus any
//! user definitions from `[catalog]` into an immutable [`Catalog`]
//! snapshot. Well files reference sizes by name or index; the catalog
//! resolves those references into concrete geometry before anything
//! reaches the engine, so the engine never sees catalog state.

mod builtin;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::types::{DrillPipeSegment, TubingString};
use crate::volumes::diameter_to_area;
use crate::volumes::primitives::cubic_meters_to_liters;

// ============================================================================
// Definitions
// ============================================================================

/// A drill-pipe size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPipeDefinition {
    pub name: String,
    pub od_in: f64,
    /// Nominal body ID, used when no capacity is given
    #[serde(default)]
    pub id_in: Option<f64>,
    /// Internal capacity (L/m)
    #[serde(default)]
    pub bore_l_per_m: Option<f64>,
    /// Open-ended displacement (L/m)
    #[serde(default)]
    pub eod_l_per_m: Option<f64>,
}

impl DrillPipeDefinition {
    /// Internal capacity in L/m, from the explicit value or the body ID.
    pub fn capacity_l_per_m(&self) -> Option<f64> {
        self.bore_l_per_m
            .or_else(|| self.id_in.map(|id| cubic_meters_to_liters(diameter_to_area(id))))
    }
}

/// A tubing size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubingDefinition {
    pub name: String,
    pub od_in: f64,
    pub id_in: f64,
}

// ============================================================================
// References from well files
// ============================================================================

/// A drill-string segment as written in a well file: a size plus a length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillStringEntry {
    /// Catalog name (takes precedence over `size_index`)
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub size_index: Option<usize>,
    pub length: f64,
}

/// Tubing as written in a well file: a catalog size or explicit diameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubingEntry {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub id: Option<f64>,
    #[serde(default)]
    pub od: Option<f64>,
    #[serde(default)]
    pub top: f64,
    pub depth: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("unknown drill-pipe size '{0}'")]
    UnknownDrillPipe(String),

    #[error("drill-pipe size index {0} is outside the catalog")]
    UnknownDrillPipeIndex(usize),

    #[error("drill-string segment {0} names no size")]
    MissingSize(usize),

    #[error("drill-pipe size '{0}' has neither a capacity nor a body ID")]
    NoCapacity(String),

    #[error("unknown tubing size '{0}'")]
    UnknownTubing(String),

    #[error("tubing needs a catalog size or both id and od")]
    IncompleteTubing,

    #[error("duplicate catalog entry '{0}'")]
    DuplicateName(String),
}

// ============================================================================
// Catalog snapshot
// ============================================================================

/// Read-only size tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    drill_pipe: Vec<DrillPipeDefinition>,
    tubing: Vec<TubingDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Overlay `user` definitions onto `base`: same name replaces, new names append.
fn overlay<T: Clone>(
    base: Vec<T>,
    user: &[T],
    name: impl Fn(&T) -> &str,
) -> Result<Vec<T>, CatalogError> {
    for (i, def) in user.iter().enumerate() {
        if user[..i].iter().any(|other| same_name(name(other), name(def))) {
            return Err(CatalogError::DuplicateName(name(def).to_string()));
        }
    }

    let mut merged = base;
    for def in user {
        match merged.iter_mut().find(|existing| same_name(name(existing), name(def))) {
            Some(existing) => {
                debug!(name = name(def), "Catalog entry overridden by config");
                *existing = def.clone();
            }
            None => merged.push(def.clone()),
        }
    }
    Ok(merged)
}

impl Catalog {
    /// Built-in sizes only.
    pub fn builtin() -> Self {
        Self {
            drill_pipe: builtin::drill_pipe(),
            tubing: builtin::tubing(),
        }
    }

    /// Snapshot built from the `[catalog]` config section.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let (dp_base, tubing_base) = if config.replace_builtin {
            (Vec::new(), Vec::new())
        } else {
            (builtin::drill_pipe(), builtin::tubing())
        };
        let catalog = Self {
            drill_pipe: overlay(dp_base, &config.drill_pipe, |d| d.name.as_str())?,
            tubing: overlay(tubing_base, &config.tubing, |t| t.name.as_str())?,
        };
        info!(
            drill_pipe = catalog.drill_pipe.len(),
            tubing = catalog.tubing.len(),
            "Catalog snapshot built"
        );
        Ok(catalog)
    }

    pub fn drill_pipe(&self) -> &[DrillPipeDefinition] {
        &self.drill_pipe
    }

    pub fn tubing(&self) -> &[TubingDefinition] {
        &self.tubing
    }

    /// Drill-pipe size by name (case-insensitive), with its index.
    pub fn find_drill_pipe(&self, name: &str) -> Option<(usize, &DrillPipeDefinition)> {
        self.drill_pipe
            .iter()
            .enumerate()
            .find(|(_, d)| same_name(&d.name, name))
    }

    pub fn find_tubing(&self, name: &str) -> Option<&TubingDefinition> {
        self.tubing.iter().find(|t| same_name(&t.name, name))
    }

    /// Resolve well-file drill-string entries into engine segments.
    pub fn resolve_drill_string(
        &self,
        entries: &[DrillStringEntry],
    ) -> Result<Vec<DrillPipeSegment>, CatalogError> {
        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let (size_index, def) = match (&entry.size, entry.size_index) {
                    (Some(name), _) => self
                        .find_drill_pipe(name)
                        .ok_or_else(|| CatalogError::UnknownDrillPipe(name.clone()))?,
                    (None, Some(index)) => self
                        .drill_pipe
                        .get(index)
                        .map(|d| (index, d))
                        .ok_or(CatalogError::UnknownDrillPipeIndex(index))?,
                    (None, None) => return Err(CatalogError::MissingSize(position)),
                };
                let bore_l_per_m = def
                    .capacity_l_per_m()
                    .ok_or_else(|| CatalogError::NoCapacity(def.name.clone()))?;
                Ok(DrillPipeSegment {
                    size_index,
                    length: entry.length,
                    bore_l_per_m,
                    od: def.od_in,
                    eod_l_per_m: def.eod_l_per_m,
                })
            })
            .collect()
    }

    /// Resolve a well-file tubing entry. Explicit diameters override the size.
    pub fn resolve_tubing(&self, entry: &TubingEntry) -> Result<TubingString, CatalogError> {
        let sized = match &entry.size {
            Some(name) => Some(
                self.find_tubing(name)
                    .ok_or_else(|| CatalogError::UnknownTubing(name.clone()))?,
            ),
            None => None,
        };
        let id = entry.id.or(sized.map(|t| t.id_in));
        let od = entry.od.or(sized.map(|t| t.od_in));
        match (id, od) {
            (Some(id), Some(od)) => Ok(TubingString {
                id,
                od,
                top: entry.top,
                depth: entry.depth,
            }),
            _ => Err(CatalogError::IncompleteTubing),
        }
    }
}
