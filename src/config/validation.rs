//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks on catalog definitions.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for WellConfig.
///
/// Array-of-table entries (`[[catalog.drill_pipe]]`) share the dotted path
/// of their array. Any new field added to WellConfig must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [well]
        "well",
        "well.name",
        "well.field",
        "well.rig",
        // [catalog]
        "catalog",
        "catalog.replace_builtin",
        "catalog.drill_pipe",
        "catalog.drill_pipe.name",
        "catalog.drill_pipe.od_in",
        "catalog.drill_pipe.id_in",
        "catalog.drill_pipe.bore_l_per_m",
        "catalog.drill_pipe.eod_l_per_m",
        "catalog.tubing",
        "catalog.tubing.name",
        "catalog.tubing.od_in",
        "catalog.tubing.id_in",
        // [pressure_test]
        "pressure_test",
        "pressure_test.k_value",
        "pressure_test.default_pressure_delta_bar",
        // [report]
        "report",
        "report.decimals",
    ];
    keys.iter().copied().collect()
}

/// Recursively walk a TOML value tree and collect all dotted key paths.
///
/// Tables inside arrays are walked under the array's own path.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                keys.push(path.clone());
                if v.is_table() || v.is_array() {
                    keys.extend(walk_toml_keys(v, &path));
                }
            }
        }
        toml::Value::Array(items) => {
            for item in items.iter().filter(|i| i.is_table()) {
                for key in walk_toml_keys(item, prefix) {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
            }
        }
        _ => {}
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist > 3 {
            continue;
        }
        // Ties resolve alphabetically so suggestions are stable
        let better = match best {
            None => true,
            Some((best_key, best_dist)) => dist < best_dist || (dist == best_dist && k < best_key),
        };
        if better {
            best = Some((k, dist));
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns. Existing configs
/// always continue to work.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

fn check_duplicates<'a>(
    table: &str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.trim().to_ascii_lowercase()) {
            errors.push(format!("catalog.{table}: duplicate name '{name}'"));
        }
    }
}

/// Validate physical ranges on a parsed WellConfig.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent startup; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::WellConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let catalog = &config.catalog;

    for dp in &catalog.drill_pipe {
        let field = format!("catalog.drill_pipe '{}'", dp.name);
        if !dp.od_in.is_finite() || dp.od_in <= 0.0 {
            errors.push(format!("{field}: od_in = {} must be > 0", dp.od_in));
            continue;
        }
        match (dp.id_in, dp.bore_l_per_m) {
            (None, None) => errors.push(format!("{field}: needs id_in or bore_l_per_m")),
            (Some(id), _) if !id.is_finite() || id <= 0.0 || id >= dp.od_in => errors.push(format!(
                "{field}: id_in = {id} must be > 0 and < od_in ({})",
                dp.od_in
            )),
            _ => {}
        }
        if let Some(bore) = dp.bore_l_per_m {
            if !bore.is_finite() || bore <= 0.0 {
                errors.push(format!("{field}: bore_l_per_m = {bore} must be > 0"));
            } else if crate::volumes::primitives::steel_area_from_capacity(dp.od_in, bore) <= 0.0 {
                errors.push(format!(
                    "{field}: bore_l_per_m = {bore} exceeds the capacity of a {} in OD",
                    dp.od_in
                ));
            }
        }
        if let Some(eod) = dp.eod_l_per_m {
            if !eod.is_finite() || eod < 0.0 {
                errors.push(format!("{field}: eod_l_per_m = {eod} cannot be negative"));
            }
        }

        // 2-7 in covers slim-hole through 6⅝" drill pipe
        if !(2.0..=7.0).contains(&dp.od_in) {
            warnings.push(ValidationWarning {
                field: field.clone(),
                message: format!(
                    "{field}: od_in = {:.3} is outside typical range (2-7 in)",
                    dp.od_in
                ),
                suggestion: None,
            });
        }
    }

    for t in &catalog.tubing {
        let field = format!("catalog.tubing '{}'", t.name);
        if !t.od_in.is_finite() || !t.id_in.is_finite() || t.id_in <= 0.0 || t.id_in >= t.od_in {
            errors.push(format!(
                "{field}: requires 0 < id_in ({}) < od_in ({})",
                t.id_in, t.od_in
            ));
        }
    }

    check_duplicates("drill_pipe", catalog.drill_pipe.iter().map(|d| d.name.as_str()), &mut errors);
    check_duplicates("tubing", catalog.tubing.iter().map(|t| t.name.as_str()), &mut errors);

    // K-value: typical drilling fluids sit between 10 and 30 bar
    let k = config.pressure_test.k_value;
    if k.is_finite() && k > 0.0 && !(10.0..=30.0).contains(&k) {
        warnings.push(ValidationWarning {
            field: "pressure_test.k_value".to_string(),
            message: format!("k_value = {k:.1} is outside typical range (10-30)"),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
