//! Volume requests and the well files they are loaded from
//!
//! A [`VolumeRequest`] is the complete snapshot the engine computes from.
//! A [`WellFile`] is its on-disk form: pipes and POI as entered, with the
//! inner strings still referencing catalog sizes by name or index.
//!
//! ```toml
//! mode = "drillpipe"
//!
//! [poi]
//! enabled = true
//! depth = 850.0
//!
//! [[pipe]]
//! role = "riser"
//! id = 7.725
//! depth = 800.0
//!
//! [[drill_string]]
//! size = "5.875in 23.40ppf"
//! length = 900.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError, DrillStringEntry, TubingEntry};
use crate::types::{
    DrillPipeSegment, InnerString, InnerStringMode, PipeDescriptor, PoiSetting, SuppressionFlags,
    TubingString,
};

// ============================================================================
// Engine input
// ============================================================================

/// Everything one volume computation needs.
///
/// Both inner strings can be configured at once; `mode` selects which one
/// is run, so switching modes never loses the other string's geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeRequest {
    pub pipes: Vec<PipeDescriptor>,
    #[serde(default)]
    pub drill_string: Vec<DrillPipeSegment>,
    #[serde(default)]
    pub tubing: Option<TubingString>,
    #[serde(default)]
    pub mode: InnerStringMode,
    #[serde(default)]
    pub poi: PoiSetting,
    #[serde(default)]
    pub suppression: SuppressionFlags,
}

impl VolumeRequest {
    /// A request for an outer stack alone, with suppression derived from it.
    pub fn new(pipes: Vec<PipeDescriptor>) -> Self {
        Self {
            suppression: SuppressionFlags::from_pipes(&pipes),
            pipes,
            ..Self::default()
        }
    }

    pub fn with_drill_string(mut self, segments: Vec<DrillPipeSegment>) -> Self {
        self.drill_string = segments;
        self
    }

    pub fn with_tubing(mut self, tubing: TubingString) -> Self {
        self.tubing = Some(tubing);
        self
    }

    pub fn with_mode(mut self, mode: InnerStringMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_poi(mut self, poi: PoiSetting) -> Self {
        self.poi = poi;
        self
    }

    /// The inner string selected by `mode`, if that string is configured.
    pub fn inner_string(&self) -> Option<InnerString> {
        match self.mode {
            InnerStringMode::None => None,
            InnerStringMode::DrillPipe if self.drill_string.is_empty() => None,
            InnerStringMode::DrillPipe => Some(InnerString::DrillPipe {
                segments: self.drill_string.clone(),
            }),
            InnerStringMode::Tubing => self.tubing.clone().map(InnerString::Tubing),
        }
    }
}

// ============================================================================
// Well files
// ============================================================================

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Well file I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Well file parse error ({}): {}", .0.display(), .1)]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("Well file parse error ({}): {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Well file references the catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// A well as written on disk (TOML or JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellFile {
    #[serde(default, rename = "pipe")]
    pub pipes: Vec<PipeDescriptor>,

    #[serde(default)]
    pub drill_string: Vec<DrillStringEntry>,

    #[serde(default)]
    pub tubing: Option<TubingEntry>,

    #[serde(default)]
    pub mode: InnerStringMode,

    #[serde(default)]
    pub poi: PoiSetting,

    /// Overrides for the suppression flags; derived from the pipes when unset
    #[serde(default)]
    pub surface_in_use: Option<bool>,
    #[serde(default)]
    pub intermediate_in_use: Option<bool>,
}

impl WellFile {
    /// Load a well file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, RequestError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RequestError::Io(path.to_path_buf(), e))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let file: Self = if is_json {
            serde_json::from_str(&contents).map_err(|e| RequestError::Json(path.to_path_buf(), e))?
        } else {
            toml::from_str(&contents).map_err(|e| RequestError::Toml(path.to_path_buf(), e))?
        };

        info!(
            path = %path.display(),
            pipes = file.pipes.len(),
            drill_string = file.drill_string.len(),
            tubing = file.tubing.is_some(),
            mode = %file.mode,
            "Loaded well file"
        );
        Ok(file)
    }

    /// Resolve catalog references and build the engine request.
    pub fn into_request(self, catalog: &Catalog) -> Result<VolumeRequest, RequestError> {
        let drill_string = catalog.resolve_drill_string(&self.drill_string)?;
        let tubing = self
            .tubing
            .as_ref()
            .map(|t| catalog.resolve_tubing(t))
            .transpose()?;

        let derived = SuppressionFlags::from_pipes(&self.pipes);
        let suppression = SuppressionFlags {
            surface_in_use: self.surface_in_use.unwrap_or(derived.surface_in_use),
            intermediate_in_use: self.intermediate_in_use.unwrap_or(derived.intermediate_in_use),
        };
        if suppression != derived {
            debug!(?suppression, ?derived, "Suppression flags overridden by well file");
        }

        Ok(VolumeRequest {
            pipes: self.pipes,
            drill_string,
            tubing,
            mode: self.mode,
            poi: self.poi,
            suppression,
        })
    }
}
