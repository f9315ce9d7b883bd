//! wellbore-volumes - wellbore volume calculator
//!
//! Loads a well file (pipe stack, inner strings, POI), computes every volume
//! quantity, and prints a text report or JSON.
//!
//! # Usage
//!
//! ```bash
//! # Text report
//! wellbore-volumes --well well.toml
//!
//! # Tubing instead of the file's mode, split at 1200 m, with pressure-up volumes
//! wellbore-volumes --well well.toml --mode tubing --poi 1200 --pressure-delta 345
//!
//! # Machine-readable output
//! wellbore-volumes --well well.json --json
//!
//! # Write a config template
//! wellbore-volumes --print-config > wellbore_config.toml
//! ```
//!
//! # Environment Variables
//!
//! - `WELLBORE_CONFIG`: Path to the config TOML (default: ./wellbore_config.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use wellbore_volumes::config::{WellConfig, WellInfo};
use wellbore_volumes::pressure_test::{self, PressureTestPlan, VolumeKey};
use wellbore_volumes::types::{InnerStringMode, PoiSetting, VolumeResults};
use wellbore_volumes::{compute_volumes, Catalog, WellFile};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wellbore-volumes")]
#[command(about = "Wellbore geometry volume calculator")]
#[command(version)]
struct CliArgs {
    /// Well file describing pipes, inner strings and POI (TOML, or JSON by extension)
    #[arg(long, short, value_name = "FILE")]
    well: Option<PathBuf>,

    /// Config file (overrides WELLBORE_CONFIG and ./wellbore_config.toml)
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Split volumes at this depth (m), overriding the well file's POI
    #[arg(long, value_name = "M")]
    poi: Option<f64>,

    /// Inner string to run: drillpipe, tubing or none
    #[arg(long)]
    mode: Option<InnerStringMode>,

    /// Print pressure-test volumes for this pressure delta (bar).
    /// Without a value the config's default delta is used.
    #[arg(long, value_name = "BAR", num_args = 0..=1, default_missing_value = "NaN")]
    pressure_delta: Option<f64>,

    /// Emit the full result as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "WELLBORE_LOG_JSON")]
    log_json: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// List the size catalog and exit
    #[arg(long)]
    list_catalog: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    well: &'a WellInfo,
    results: &'a VolumeResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pressure_test: Option<PressureTestPlan>,
}

// ============================================================================
// Text Output
// ============================================================================

fn print_catalog(catalog: &Catalog) {
    println!("Drill pipe:");
    for (i, dp) in catalog.drill_pipe().iter().enumerate() {
        let capacity = dp
            .capacity_l_per_m()
            .map_or_else(|| "-".to_string(), |c| format!("{c:.3} L/m"));
        let eod = dp
            .eod_l_per_m
            .map_or_else(|| "derived".to_string(), |e| format!("{e:.3} L/m"));
        println!("  [{i}] {:<20} OD {:>6.3} in  bore {capacity:<12} EOD {eod}", dp.name, dp.od_in);
    }
    println!("Tubing:");
    for t in catalog.tubing() {
        println!("  {:<20} OD {:>6.3} in  ID {:>6.3} in", t.name, t.od_in, t.id_in);
    }
}

fn print_report(config: &WellConfig, results: &VolumeResults, plan: Option<&PressureTestPlan>) {
    let d = config.report.decimals;
    let outer = &results.outer;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Well: {}", config.well.name);
    if !config.well.field.is_empty() {
        println!("  Field: {}", config.well.field);
    }
    if !config.well.rig.is_empty() {
        println!("  Rig: {}", config.well.rig);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("Total volume: {:.d$} m³", outer.total_volume_m3);
    for pipe in outer.per_pipe.iter().filter(|p| p.owned_length_m > 0.0) {
        println!(
            "  [{}] {:<18} {:>12.d$} m³ over {:.1} m",
            pipe.index,
            pipe.role.label(),
            pipe.volume_m3,
            pipe.owned_length_m
        );
    }
    if let Some(split) = outer.poi {
        println!("Above POI: {:.d$} m³  Below POI: {:.d$} m³", split.above, split.below);
    }

    if let Some(inner) = &results.inner {
        println!();
        println!("Inner string ({}) to {:.1} m", inner.mode, inner.bottom_m);
        println!("  Bore:              {:.d$} m³", inner.bore_volume_m3);
        println!("  Annulus:           {:.d$} m³", inner.annulus_volume_m3);
        println!("  Steel:             {:.d$} m³", inner.steel_displacement_m3);
        println!("  Open casing:       {:.d$} m³", inner.open_casing_volume_m3);
        println!("  Well less steel:   {:.d$} m³", inner.outer_net_volume_m3);
        if let Some(poi) = &inner.poi {
            println!("  POI split (above / below):");
            for (label, split) in [
                ("bore", poi.bore),
                ("annulus", poi.annulus),
                ("open casing", poi.open_casing),
                ("steel", poi.steel),
            ] {
                println!("    {label:<12} {:.d$} / {:.d$} m³", split.above, split.below);
            }
        }
    }

    if !results.breakdown.is_empty() {
        println!();
        println!("By casing:");
        for row in &results.breakdown {
            println!(
                "  {:<18} {:>8.1}-{:<8.1} m  bore {:.d$} m³  annulus {:.d$} m³",
                row.role.label(),
                row.top,
                row.bottom,
                row.bore_volume_m3,
                row.annulus_volume_m3
            );
        }
    }

    if let Some(plan) = plan {
        println!();
        println!(
            "Pressure test: Δp {:.1} bar, K {:.1}",
            plan.pressure_delta_bar, plan.k_value
        );
        for line in &plan.lines {
            println!(
                "  {:<28} {:>12.d$} m³  {:>10.1} L",
                line.key.label(),
                line.volume_m3,
                line.required_liters
            );
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_json);

    let config = match &args.config {
        Some(path) => WellConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => WellConfig::load(),
    };

    if args.print_config {
        print!("{}", config.to_toml().context("Failed to serialize config")?);
        return Ok(());
    }

    let catalog = Catalog::from_config(&config.catalog).context("Invalid size catalog")?;

    if args.list_catalog {
        print_catalog(&catalog);
        return Ok(());
    }

    let Some(well_path) = &args.well else {
        anyhow::bail!("--well <FILE> is required (or use --print-config / --list-catalog)");
    };

    let mut request = WellFile::load(well_path)
        .and_then(|file| file.into_request(&catalog))
        .with_context(|| format!("Failed to read well file {}", well_path.display()))?;

    if let Some(mode) = args.mode {
        request.mode = mode;
    }
    if let Some(depth) = args.poi {
        request.poi = PoiSetting::at(depth);
    }

    info!(
        well = %config.well.name,
        pipes = request.pipes.len(),
        mode = %request.mode,
        poi = ?request.poi.resolve(),
        "Computing volumes"
    );
    let results = compute_volumes(&request);

    let plan = args.pressure_delta.map(|delta| {
        let delta = if delta.is_finite() {
            delta
        } else {
            config.pressure_test.default_pressure_delta_bar
        };
        pressure_test::plan(&results, &VolumeKey::ALL, delta, config.pressure_test.k_value)
    });

    if args.json {
        let report = JsonReport {
            generated_at: Utc::now(),
            well: &config.well,
            results: &results,
            pressure_test: plan,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize results")?
        );
    } else {
        print_report(&config, &results, plan.as_ref());
    }

    Ok(())
}
