//! Wellbore Volumes: geometry segmentation and volume accounting
//!
//! Reconciles a stack of possibly overlapping casings, liners and open hole
//! into owned depth segments, integrates their volumes, and overlays the
//! bore, annulus and steel displacement of a drill string or tubing run
//! inside them.
//!
//! ## Architecture
//!
//! - **Types**: pipe descriptors, inner strings, POI and result records
//! - **Volumes**: the pure engine (segmenter, ownership, accumulator, inner string)
//! - **Catalog**: drill-pipe and tubing size tables resolved before the engine runs
//! - **Request**: well files and the engine input snapshot
//! - **Pressure Test**: named quantities and pressure-up volumes

pub mod config;
pub mod types;
pub mod volumes;
pub mod catalog;
pub mod request;
pub mod pressure_test;

// Re-export well configuration
pub use config::WellConfig;

// Re-export commonly used types
pub use types::{
    InnerString, InnerStringMode, PipeCategory, PipeDescriptor, PipeRole, PoiSetting,
    SuppressionFlags, VolumeResults,
};

// Re-export the engine entry point
pub use volumes::compute_volumes;

pub use catalog::{Catalog, CatalogError};
pub use request::{RequestError, VolumeRequest, WellFile};
pub use pressure_test::{required_volume_liters, VolumeKey};
