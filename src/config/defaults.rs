//! System-wide default constants.
//!
//! Centralises unit conversions and fallback values used by the engine,
//! the catalog and the CLI. Grouped by subsystem for easy discovery.

// ============================================================================
// Units
// ============================================================================

/// Inches to meters.
pub const INCH_TO_METER: f64 = 0.0254;

/// Liters in one cubic meter.
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

// ============================================================================
// Pressure Test
// ============================================================================

/// Fluid compressibility K-value (bar) for water-based fluids.
///
/// `volume_liters = volume_m3 × pressure_delta_bar / k_value`
pub const DEFAULT_K_VALUE: f64 = 21.0;

/// Pressure delta pre-filled in the pressure-test calculator (bar).
pub const DEFAULT_PRESSURE_DELTA_BAR: f64 = 345.0;

// ============================================================================
// Reporting
// ============================================================================

/// Decimal places in the text report.
pub const DEFAULT_REPORT_DECIMALS: usize = 3;

/// Default config file searched in the working directory.
pub const CONFIG_FILE_NAME: &str = "wellbore_config.toml";

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "WELLBORE_CONFIG";
