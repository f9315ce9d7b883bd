//! Volume Scenario Tests
//!
//! Worked well geometries run end-to-end through `compute_volumes`:
//! single casing, POI splits, a drill string crossing a riser/production
//! boundary, tubing, suppression and mode switching.

use wellbore_volumes::types::{
    DrawKind, DrillPipeSegment, InnerStringMode, PipeDescriptor, PipeRole, PoiSetting,
    TubingString,
};
use wellbore_volumes::{compute_volumes, VolumeRequest};

const TOL: f64 = 1e-9;

fn area(id_in: f64) -> f64 {
    std::f64::consts::PI * (id_in / 2.0 * 0.0254).powi(2)
}

fn single_casing() -> Vec<PipeDescriptor> {
    vec![PipeDescriptor::new(PipeRole::Production, 6.276, 0.0, 100.0)]
}

fn riser_and_production() -> Vec<PipeDescriptor> {
    vec![
        PipeDescriptor::new(PipeRole::Riser, 7.725, 0.0, 800.0),
        PipeDescriptor::new(PipeRole::Production, 8.535, 800.0, 3000.0),
    ]
}

fn five_seven_eighths(length: f64) -> DrillPipeSegment {
    DrillPipeSegment {
        size_index: 4,
        length,
        bore_l_per_m: 13.128,
        od: 5.875,
        eod_l_per_m: None,
    }
}

fn tubing() -> TubingString {
    TubingString {
        id: 3.958,
        od: 4.5,
        top: 0.0,
        depth: 2500.0,
    }
}

// ============================================================================
// Outer stack
// ============================================================================

#[test]
fn single_casing_total_matches_formula() {
    let results = compute_volumes(&VolumeRequest::new(single_casing()));
    let expected = std::f64::consts::PI * ((6.276 / 2.0 * 0.0254_f64).powi(2)) * 100.0;
    assert!((results.outer.total_volume_m3 - expected).abs() < TOL);
    assert!(results.outer.poi.is_none());
    assert!(results.inner.is_none());
    assert!(results.breakdown.is_empty());
}

#[test]
fn single_casing_poi_split_by_length() {
    let request = VolumeRequest::new(single_casing()).with_poi(PoiSetting::at(40.0));
    let results = compute_volumes(&request);
    let split = results.outer.poi.expect("POI is enabled");
    let total = results.outer.total_volume_m3;

    assert!((split.above - total * 0.4).abs() < TOL);
    assert!((split.below - total * 0.6).abs() < TOL);
    assert!((split.total() - total).abs() < TOL);
}

#[test]
fn disabled_or_non_numeric_poi_skips_split() {
    let disabled = PoiSetting {
        enabled: false,
        depth: Some(40.0),
    };
    let nan = PoiSetting {
        enabled: true,
        depth: Some(f64::NAN),
    };
    for poi in [disabled, nan] {
        let results = compute_volumes(&VolumeRequest::new(single_casing()).with_poi(poi));
        assert!(results.outer.poi.is_none());
    }
}

#[test]
fn poi_at_surface_puts_everything_below() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::DrillPipe)
        .with_poi(PoiSetting::at(0.0));
    let results = compute_volumes(&request);

    let outer = results.outer.poi.unwrap();
    assert_eq!(outer.above, 0.0);
    assert!((outer.below - results.outer.total_volume_m3).abs() < TOL);

    let inner = results.inner.unwrap();
    let split = inner.poi.unwrap();
    assert_eq!(split.bore.above, 0.0);
    assert_eq!(split.annulus.above, 0.0);
    assert_eq!(split.open_casing.above, 0.0);
    assert!((split.bore.below - inner.bore_volume_m3).abs() < TOL);
}

#[test]
fn smaller_supplemental_liner_owns_overlap() {
    let pipes = vec![
        PipeDescriptor::new(PipeRole::Production, 8.535, 0.0, 3000.0),
        PipeDescriptor::new(PipeRole::Reservoir, 6.184, 2500.0, 3500.0),
    ];
    let results = compute_volumes(&VolumeRequest::new(pipes));
    let per_pipe = &results.outer.per_pipe;

    assert!((per_pipe[0].owned_length_m - 2500.0).abs() < TOL);
    assert!((per_pipe[1].owned_length_m - 1000.0).abs() < TOL);
    let expected = area(8.535) * 2500.0 + area(6.184) * 1000.0;
    assert!((results.outer.total_volume_m3 - expected).abs() < TOL);
}

#[test]
fn conductor_suppressed_behind_surface_casing() {
    let pipes = vec![
        PipeDescriptor::new(PipeRole::Conductor, 28.0, 0.0, 100.0),
        PipeDescriptor::new(PipeRole::Surface, 18.73, 0.0, 600.0),
        PipeDescriptor::new(PipeRole::Intermediate, 12.415, 0.0, 1500.0),
    ];
    let results = compute_volumes(&VolumeRequest::new(pipes));
    let per_pipe = &results.outer.per_pipe;

    assert_eq!(per_pipe[0].volume_m3, 0.0);
    assert_eq!(per_pipe[1].volume_m3, 0.0);
    assert!((per_pipe[2].volume_m3 - area(12.415) * 1500.0).abs() < TOL);
}

#[test]
fn inactive_and_inverted_pipes_contribute_nothing() {
    let pipes = vec![
        PipeDescriptor::new(PipeRole::Production, 8.535, 0.0, 1000.0),
        PipeDescriptor::new(PipeRole::Reservoir, 4.0, 0.0, 1000.0).inactive(),
        PipeDescriptor::new(PipeRole::SmallLiner, 3.0, 900.0, 500.0),
    ];
    let results = compute_volumes(&VolumeRequest::new(pipes));
    assert!((results.outer.total_volume_m3 - area(8.535) * 1000.0).abs() < TOL);
    assert_eq!(results.outer.per_pipe[1].volume_m3, 0.0);
    assert_eq!(results.outer.per_pipe[2].volume_m3, 0.0);
}

// ============================================================================
// Drill pipe
// ============================================================================

#[test]
fn drill_pipe_annulus_across_riser_and_production() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::DrillPipe);
    let results = compute_volumes(&request);
    let inner = results.inner.as_ref().expect("drill pipe is configured");

    let riser = (area(7.725) - area(5.875)) * 800.0;
    let production = (area(8.535) - area(5.875)) * 100.0;
    assert!((inner.annulus_volume_m3 - (riser + production)).abs() < TOL);
    assert!((inner.bore_volume_m3 - 13.128 / 1000.0 * 900.0).abs() < TOL);
    assert!((inner.bottom_m - 900.0).abs() < TOL);

    assert_eq!(results.breakdown.len(), 2);
    let r = &results.breakdown[0];
    assert_eq!(r.role, PipeRole::Riser);
    assert!((r.length_m - 800.0).abs() < TOL);
    assert!((r.annulus_volume_m3 - riser).abs() < TOL);
    let p = &results.breakdown[1];
    assert_eq!(p.role, PipeRole::Production);
    assert!((p.top - 800.0).abs() < TOL && (p.bottom - 900.0).abs() < TOL);
    assert!((p.annulus_volume_m3 - production).abs() < TOL);
}

#[test]
fn drill_pipe_volumes_balance_against_outer_gross() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::DrillPipe);
    let results = compute_volumes(&request);
    let inner = results.inner.unwrap();

    let total = results.outer.total_volume_m3;
    assert!((inner.outer_net_volume_m3 - (total - inner.steel_displacement_m3)).abs() < 1e-9);
    let parts = inner.bore_volume_m3 + inner.annulus_volume_m3 + inner.open_casing_volume_m3;
    assert!((parts - inner.outer_net_volume_m3).abs() < 1e-9);
}

#[test]
fn poi_at_string_bottom_is_entirely_above() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(500.0), five_seven_eighths(400.0)])
        .with_mode(InnerStringMode::DrillPipe)
        .with_poi(PoiSetting::at(900.0));
    let results = compute_volumes(&request);
    let inner = results.inner.unwrap();
    let split = inner.poi.unwrap();

    assert_eq!(split.bore.below, 0.0);
    assert_eq!(split.annulus.below, 0.0);
    assert_eq!(split.steel.below, 0.0);
    assert!((split.bore.above - inner.bore_volume_m3).abs() < TOL);
    assert!((split.annulus.above - inner.annulus_volume_m3).abs() < TOL);
    // Below the string the whole production casing is open
    assert!((split.open_casing.below - area(8.535) * 2100.0).abs() < 1e-9);
}

#[test]
fn poi_inside_string_splits_bore_and_annulus() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::DrillPipe)
        .with_poi(PoiSetting::at(850.0));
    let results = compute_volumes(&request);
    let split = results.inner.unwrap().poi.unwrap();

    assert!((split.bore.below - 13.128 / 1000.0 * 50.0).abs() < TOL);
    assert!((split.annulus.below - (area(8.535) - area(5.875)) * 50.0).abs() < TOL);
}

#[test]
fn explicit_eod_is_used_over_fallback() {
    let mut segment = five_seven_eighths(900.0);
    segment.eod_l_per_m = Some(4.0);
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![segment])
        .with_mode(InnerStringMode::DrillPipe);
    let inner = compute_volumes(&request).inner.unwrap();
    assert!((inner.steel_displacement_m3 - 4.0 / 1000.0 * 900.0).abs() < TOL);
}

#[test]
fn upper_completion_never_contains_the_drill_string() {
    let pipes = vec![
        PipeDescriptor::new(PipeRole::Production, 8.535, 0.0, 3000.0),
        PipeDescriptor::new(PipeRole::UpperCompletion, 6.184, 0.0, 1000.0).with_od(7.0),
    ];
    let request = VolumeRequest::new(pipes)
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::DrillPipe);
    let results = compute_volumes(&request);

    // The outer stack still credits the completion with its own bore
    assert!((results.outer.per_pipe[1].owned_length_m - 1000.0).abs() < TOL);

    let inner = results.inner.unwrap();
    let expected = (area(8.535) - area(5.875)) * 900.0;
    assert!((inner.annulus_volume_m3 - expected).abs() < TOL);
    assert!(results.breakdown.iter().all(|r| r.role == PipeRole::Production));

    // Net volume is the whole well less steel, never more than the well
    let total = results.outer.total_volume_m3;
    assert!((inner.outer_net_volume_m3 - (total - inner.steel_displacement_m3)).abs() < 1e-9);
    assert!(inner.outer_net_volume_m3 < total);
}

// ============================================================================
// Tubing and mode switching
// ============================================================================

#[test]
fn tubing_volumes_in_production_casing() {
    let pipes = vec![PipeDescriptor::new(PipeRole::Production, 8.535, 0.0, 3000.0)];
    let request = VolumeRequest::new(pipes)
        .with_tubing(tubing())
        .with_mode(InnerStringMode::Tubing);
    let results = compute_volumes(&request);
    let inner = results.inner.unwrap();

    assert_eq!(inner.mode, InnerStringMode::Tubing);
    assert!((inner.bore_volume_m3 - area(3.958) * 2500.0).abs() < TOL);
    assert!((inner.annulus_volume_m3 - (area(8.535) - area(4.5)) * 2500.0).abs() < TOL);
    assert!((inner.steel_displacement_m3 - (area(4.5) - area(3.958)) * 2500.0).abs() < TOL);
    assert!((inner.open_casing_volume_m3 - area(8.535) * 500.0).abs() < 1e-9);
}

#[test]
fn annulus_floors_at_zero_for_oversized_string() {
    let pipes = vec![PipeDescriptor::new(PipeRole::SmallLiner, 4.0, 0.0, 500.0)];
    let request = VolumeRequest::new(pipes)
        .with_drill_string(vec![five_seven_eighths(500.0)])
        .with_mode(InnerStringMode::DrillPipe);
    let inner = compute_volumes(&request).inner.unwrap();
    assert_eq!(inner.annulus_volume_m3, 0.0);
    assert!(inner.open_casing_volume_m3 >= 0.0);
}

#[test]
fn drill_pipe_results_ignore_tubing_geometry() {
    let base = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_tubing(tubing())
        .with_poi(PoiSetting::at(850.0));

    let first = compute_volumes(&base.clone().with_mode(InnerStringMode::DrillPipe));
    let tubing_run = compute_volumes(&base.clone().with_mode(InnerStringMode::Tubing));
    let again = compute_volumes(&base.clone().with_mode(InnerStringMode::DrillPipe));

    assert_eq!(tubing_run.inner.as_ref().unwrap().mode, InnerStringMode::Tubing);
    assert_eq!(first, again);

    // A different tubing string leaves drill-pipe results untouched
    let mut other = base.with_mode(InnerStringMode::DrillPipe);
    other.tubing = Some(TubingString {
        id: 2.441,
        od: 2.875,
        top: 100.0,
        depth: 1800.0,
    });
    assert_eq!(compute_volumes(&other), first);
}

#[test]
fn mode_none_reports_outer_stack_only() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(900.0)])
        .with_mode(InnerStringMode::None);
    let results = compute_volumes(&request);
    assert!(results.inner.is_none());
    assert!(results.breakdown.is_empty());
    assert_eq!(results.draw_list.len(), 2);
}

#[test]
fn draw_list_puts_inner_string_on_top() {
    let request = VolumeRequest::new(riser_and_production())
        .with_drill_string(vec![five_seven_eighths(500.0), five_seven_eighths(400.0)])
        .with_mode(InnerStringMode::DrillPipe);
    let draw = compute_volumes(&request).draw_list;

    assert_eq!(draw.len(), 4);
    assert!(draw.windows(2).all(|w| w[0].z_order <= w[1].z_order));
    let last = draw.last().unwrap();
    assert_eq!(last.kind, DrawKind::DrillPipe { segment: 1 });
    assert_eq!(last.od_in, Some(5.875));
    assert!((last.top - 500.0).abs() < TOL);
}
