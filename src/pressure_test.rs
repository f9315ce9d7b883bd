//! Pressure-test volume selection
//!
//! Reads named quantities out of a [`VolumeResults`] and converts them into
//! the fluid volume needed to raise the pressure of that space:
//!
//! `liters = volume_m3 × Δp_bar / K`
//!
//! where K is the fluid compressibility constant of the test fluid.
//! Nothing here feeds back into the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::VolumeResults;

/// Fixed key names for the quantities a pressure test can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeKey {
    TotalVolume,
    OuterNetVolume,
    InnerBoreCapacity,
    AnnulusCapacity,
    InnermostAnnulusCapacity,
    OpenCasingVolume,
    SteelDisplacement,
    PlugAboveVolume,
    PlugBelowVolume,
}

impl VolumeKey {
    pub const ALL: [Self; 9] = [
        Self::TotalVolume,
        Self::OuterNetVolume,
        Self::InnerBoreCapacity,
        Self::AnnulusCapacity,
        Self::InnermostAnnulusCapacity,
        Self::OpenCasingVolume,
        Self::SteelDisplacement,
        Self::PlugAboveVolume,
        Self::PlugBelowVolume,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TotalVolume => "total_volume",
            Self::OuterNetVolume => "outer_net_volume",
            Self::InnerBoreCapacity => "inner_bore_capacity",
            Self::AnnulusCapacity => "annulus_capacity",
            Self::InnermostAnnulusCapacity => "innermost_annulus_capacity",
            Self::OpenCasingVolume => "open_casing_volume",
            Self::SteelDisplacement => "steel_displacement",
            Self::PlugAboveVolume => "plug_above_volume",
            Self::PlugBelowVolume => "plug_below_volume",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TotalVolume => "Total well volume",
            Self::OuterNetVolume => "Well volume less steel",
            Self::InnerBoreCapacity => "Inner-bore capacity",
            Self::AnnulusCapacity => "Annulus capacity",
            Self::InnermostAnnulusCapacity => "Innermost annulus capacity",
            Self::OpenCasingVolume => "Open casing volume",
            Self::SteelDisplacement => "Steel displacement",
            Self::PlugAboveVolume => "Volume above POI",
            Self::PlugBelowVolume => "Volume below POI",
        }
    }
}

impl fmt::Display for VolumeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VolumeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.key() == wanted)
            .ok_or_else(|| format!("unknown volume key '{s}'"))
    }
}

impl VolumeResults {
    /// Look up a named quantity (m³).
    ///
    /// Returns `None` when the quantity does not exist for this result:
    /// inner-string keys without an inner string, POI keys without a POI.
    /// The outer net volume falls back to the gross total when no inner
    /// string is run.
    pub fn quantity(&self, key: VolumeKey) -> Option<f64> {
        let inner = self.inner.as_ref();
        match key {
            VolumeKey::TotalVolume => Some(self.outer.total_volume_m3),
            VolumeKey::OuterNetVolume => Some(
                inner.map_or(self.outer.total_volume_m3, |i| i.outer_net_volume_m3),
            ),
            VolumeKey::InnerBoreCapacity => inner.map(|i| i.bore_volume_m3),
            VolumeKey::AnnulusCapacity => inner.map(|i| i.annulus_volume_m3),
            VolumeKey::InnermostAnnulusCapacity => {
                // Breakdown rows are ordered narrowest casing first
                let first = self.breakdown.first()?;
                Some(
                    self.breakdown
                        .iter()
                        .filter(|r| r.pipe_index == first.pipe_index)
                        .map(|r| r.annulus_volume_m3)
                        .sum(),
                )
            }
            VolumeKey::OpenCasingVolume => inner.map(|i| i.open_casing_volume_m3),
            VolumeKey::SteelDisplacement => inner.map(|i| i.steel_displacement_m3),
            VolumeKey::PlugAboveVolume => self.outer.poi.map(|s| s.above),
            VolumeKey::PlugBelowVolume => self.outer.poi.map(|s| s.below),
        }
    }
}

/// Fluid volume (L) to pressure up `volume_m3` by `pressure_delta_bar`.
///
/// Returns 0 for a non-positive or non-finite K-value.
pub fn required_volume_liters(volume_m3: f64, pressure_delta_bar: f64, k_value: f64) -> f64 {
    if !k_value.is_finite() || k_value <= 0.0 {
        return 0.0;
    }
    (volume_m3 * pressure_delta_bar) / k_value
}

/// One line of a pressure-test plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureTestLine {
    pub key: VolumeKey,
    pub volume_m3: f64,
    pub required_liters: f64,
}

/// Pressure-test volumes for every available quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureTestPlan {
    pub pressure_delta_bar: f64,
    pub k_value: f64,
    pub lines: Vec<PressureTestLine>,
}

/// Build a plan over `keys`, skipping quantities the result does not carry.
pub fn plan(
    results: &VolumeResults,
    keys: &[VolumeKey],
    pressure_delta_bar: f64,
    k_value: f64,
) -> PressureTestPlan {
    let lines = keys
        .iter()
        .filter_map(|&key| {
            let volume_m3 = results.quantity(key)?;
            Some(PressureTestLine {
                key,
                volume_m3,
                required_liters: required_volume_liters(volume_m3, pressure_delta_bar, k_value),
            })
        })
        .collect();

    PressureTestPlan {
        pressure_delta_bar,
        k_value,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::VolumeRequest;
    use crate::types::{DrillPipeSegment, InnerStringMode, PipeDescriptor, PipeRole, PoiSetting};
    use crate::volumes::compute_volumes;

    fn casing_only() -> VolumeResults {
        let request = VolumeRequest::new(vec![PipeDescriptor::new(
            PipeRole::Production,
            6.276,
            0.0,
            100.0,
        )])
            .with_poi(PoiSetting::at(40.0));
        compute_volumes(&request)
    }

    #[test]
    fn test_required_volume_formula() {
        // 10 m³ at 345 bar with K = 21
        let liters = required_volume_liters(10.0, 345.0, 21.0);
        assert!((liters - 164.285_714).abs() < 1e-3);
    }

    #[test]
    fn test_required_volume_bad_k() {
        assert_eq!(required_volume_liters(10.0, 345.0, 0.0), 0.0);
        assert_eq!(required_volume_liters(10.0, 345.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_key_round_trip_names() {
        for key in VolumeKey::ALL {
            assert_eq!(key.key().parse::<VolumeKey>().unwrap(), key);
        }
        assert_eq!("plug-above-volume".parse::<VolumeKey>().unwrap(), VolumeKey::PlugAboveVolume);
        assert!("kill_volume".parse::<VolumeKey>().is_err());
    }

    #[test]
    fn test_quantities_without_inner_string() {
        let results = casing_only();
        let total = results.quantity(VolumeKey::TotalVolume).unwrap();
        assert_eq!(results.quantity(VolumeKey::OuterNetVolume), Some(total));
        assert!(results.quantity(VolumeKey::InnerBoreCapacity).is_none());
        assert!(results.quantity(VolumeKey::InnermostAnnulusCapacity).is_none());

        let above = results.quantity(VolumeKey::PlugAboveVolume).unwrap();
        let below = results.quantity(VolumeKey::PlugBelowVolume).unwrap();
        assert!((above + below - total).abs() < 1e-9);
    }

    #[test]
    fn test_innermost_annulus_uses_narrowest_casing() {
        let pipes = vec![
            PipeDescriptor::new(PipeRole::Riser, 7.725, 0.0, 800.0),
            PipeDescriptor::new(PipeRole::Production, 8.535, 800.0, 3000.0),
        ];
        let request = VolumeRequest::new(pipes)
            .with_drill_string(vec![DrillPipeSegment {
                size_index: 4,
                length: 900.0,
                bore_l_per_m: 13.128,
                od: 5.875,
                eod_l_per_m: None,
            }])
            .with_mode(InnerStringMode::DrillPipe);
        let results = compute_volumes(&request);

        let innermost = results.quantity(VolumeKey::InnermostAnnulusCapacity).unwrap();
        let riser_rows: f64 = results
            .breakdown
            .iter()
            .filter(|r| r.role == PipeRole::Riser)
            .map(|r| r.annulus_volume_m3)
            .sum();
        assert!((innermost - riser_rows).abs() < 1e-12);
        assert!(innermost < results.quantity(VolumeKey::AnnulusCapacity).unwrap());
    }

    #[test]
    fn test_plan_skips_missing_quantities() {
        let results = casing_only();
        let plan = plan(&results, &VolumeKey::ALL, 345.0, 21.0);
        assert_eq!(plan.lines.len(), 4);
        let total = &plan.lines[0];
        assert_eq!(total.key, VolumeKey::TotalVolume);
        assert!((total.required_liters - total.volume_m3 * 345.0 / 21.0).abs() < 1e-12);
    }
}
