//! Built-in drill-pipe and tubing size tables
//!
//! Nominal API dimensions. Drill-pipe entries without an explicit capacity
//! derive it from the nominal body ID.

use super::{DrillPipeDefinition, TubingDefinition};

/// (name, OD in, body ID in, capacity L/m, open-ended displacement L/m)
type DrillPipeRow = (&'static str, f64, Option<f64>, Option<f64>, Option<f64>);

/// (name, OD in, ID in)
type TubingRow = (&'static str, f64, f64);

const DRILL_PIPE: &[DrillPipeRow] = &[
    ("3.5in 13.30ppf", 3.5, Some(2.764), None, None),
    ("4in 14.00ppf", 4.0, Some(3.340), None, None),
    ("5in 19.50ppf", 5.0, Some(4.276), None, None),
    ("5.5in 21.90ppf", 5.5, Some(4.778), None, None),
    ("5.875in 23.40ppf", 5.875, None, Some(13.128), None),
];

const TUBING: &[TubingRow] = &[
    ("2.875in 6.50ppf", 2.875, 2.441),
    ("3.5in 9.20ppf", 3.5, 2.992),
    ("4.5in 12.60ppf", 4.5, 3.958),
    ("5.5in 17.00ppf", 5.5, 4.892),
    ("7in 29.00ppf", 7.0, 6.184),
];

pub fn drill_pipe() -> Vec<DrillPipeDefinition> {
    DRILL_PIPE
        .iter()
        .map(|&(name, od_in, id_in, bore_l_per_m, eod_l_per_m)| DrillPipeDefinition {
            name: name.to_string(),
            od_in,
            id_in,
            bore_l_per_m,
            eod_l_per_m,
        })
        .collect()
}

pub fn tubing() -> Vec<TubingDefinition> {
    TUBING
        .iter()
        .map(|&(name, od_in, id_in)| TubingDefinition {
            name: name.to_string(),
            od_in,
            id_in,
        })
        .collect()
}
