//! Well Configuration Module
//!
//! Provides per-well configuration loaded from TOML files: catalog
//! overrides, pressure-test settings and report formatting.
//!
//! ## Loading Order
//!
//! 1. `WELLBORE_CONFIG` environment variable (path to TOML file)
//! 2. `wellbore_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! The config is loaded once by the binary and passed down explicitly.
//! The volume engine never reads it.
//!
//! ```ignore
//! let config = WellConfig::load();
//! let catalog = Catalog::from_config(&config.catalog)?;
//! ```

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;
