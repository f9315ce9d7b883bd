//! Well Configuration - catalog definitions and calculator settings as TOML
//!
//! Each struct implements `Default` with the built-in values, so running
//! without a config file behaves exactly like an empty one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_K_VALUE, DEFAULT_PRESSURE_DELTA_BAR,
    DEFAULT_REPORT_DECIMALS,
};
use crate::catalog::{DrillPipeDefinition, TubingDefinition};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the volume calculator.
///
/// Load with `WellConfig::load()` which searches:
/// 1. `$WELLBORE_CONFIG` env var
/// 2. `./wellbore_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellConfig {
    /// Well / rig identification
    #[serde(default)]
    pub well: WellInfo,

    /// User size definitions layered over the built-in catalog
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Pressure-test volume settings
    #[serde(default)]
    pub pressure_test: PressureTestConfig,

    /// Text report formatting
    #[serde(default)]
    pub report: ReportConfig,
}

impl WellConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELLBORE_CONFIG` environment variable
    /// 2. `./wellbore_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(
                            path = %p.display(),
                            well = %config.well.name,
                            "Loaded config from {CONFIG_ENV_VAR}"
                        );
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from {CONFIG_ENV_VAR}, falling back"
                        );
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        // 2. Check the working directory
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded config from ./{CONFIG_FILE_NAME}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{CONFIG_FILE_NAME}, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No {CONFIG_FILE_NAME} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys only warn.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in &super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Validate all values for internal consistency.
    ///
    /// Rules:
    /// - K-value and pressure delta must be finite and positive
    /// - Catalog entries must have OD > ID and a usable capacity
    /// - Catalog names must be unique per table
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let pt = &self.pressure_test;
        Self::check_positive(pt.k_value, "pressure_test.k_value", &mut errors);
        Self::check_positive(
            pt.default_pressure_delta_bar,
            "pressure_test.default_pressure_delta_bar",
            &mut errors,
        );

        if self.report.decimals > 12 {
            errors.push(format!(
                "report.decimals ({}) must be <= 12",
                self.report.decimals
            ));
        }

        // Physical range validation
        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_positive(value: f64, name: &str, errors: &mut Vec<String>) {
        // NaN comparisons silently pass; catch them explicitly
        if !value.is_finite() {
            errors.push(format!("{name}: value must be finite (got {value})"));
        } else if value <= 0.0 {
            errors.push(format!("{name}: value must be > 0 (got {value})"));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata. Not used for logic, only appears in logs and reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name / identifier
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Field name
    #[serde(default)]
    pub field: String,

    /// Rig name
    #[serde(default)]
    pub rig: String,
}

fn default_well_name() -> String {
    "DEFAULT".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
            rig: String::new(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// User size definitions.
///
/// Entries whose name matches a built-in size replace it; new names are
/// appended. With `replace_builtin = true` only these entries exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub replace_builtin: bool,

    #[serde(default)]
    pub drill_pipe: Vec<DrillPipeDefinition>,

    #[serde(default)]
    pub tubing: Vec<TubingDefinition>,
}

// ============================================================================
// Pressure Test
// ============================================================================

/// Fluid compressibility settings for pressure-test volumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureTestConfig {
    /// K-value (bar): `liters = m³ × ΔP / K`
    #[serde(default = "default_k_value")]
    pub k_value: f64,

    /// Pressure delta used when none is given on the command line (bar)
    #[serde(default = "default_pressure_delta")]
    pub default_pressure_delta_bar: f64,
}

fn default_k_value() -> f64 {
    DEFAULT_K_VALUE
}

fn default_pressure_delta() -> f64 {
    DEFAULT_PRESSURE_DELTA_BAR
}

impl Default for PressureTestConfig {
    fn default() -> Self {
        Self {
            k_value: default_k_value(),
            default_pressure_delta_bar: default_pressure_delta(),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for volumes in the text report
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_decimals() -> usize {
    DEFAULT_REPORT_DECIMALS
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
