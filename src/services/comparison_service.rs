//! services/comparison_service.rs
//! Compara un JSON de resultados existente contra un parseo nuevo.
//! Ambos son objetos `clave (ERN o asiento) -> estudiante`.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::models::comparison_model::{ComparisonReport, MismatchSample, SubjectTotalsMatch};
use crate::models::student_model::StudentRecord;

/// Campos comparados como texto
const TEXT_FIELDS: [&str; 5] = ["seatNumber", "gender", "totalMarks", "result", "ern"];
const SGPA_TOLERANCE: f64 = 0.01;
const MAX_MISMATCH_SAMPLES: usize = 3;

/// Objeto `clave -> estudiante`, el formato que guarda el CLI.
/// Una clave repetida se queda con el último registro.
pub fn keyed_students(students: &[StudentRecord]) -> serde_json::Result<Map<String, Value>> {
    let mut keyed = Map::new();
    for student in students {
        keyed.insert(student.key().to_string(), serde_json::to_value(student)?);
    }
    Ok(keyed)
}

pub fn compare(existing: &Map<String, Value>, parsed: &Map<String, Value>) -> ComparisonReport {
    let old_keys: BTreeSet<&String> = existing.keys().collect();
    let new_keys: BTreeSet<&String> = parsed.keys().collect();

    let common: Vec<&String> = old_keys.intersection(&new_keys).copied().collect();
    let mut report = ComparisonReport {
        existing_count: existing.len(),
        parsed_count: parsed.len(),
        common: common.len(),
        missing: old_keys
            .difference(&new_keys)
            .map(|k| k.to_string())
            .collect(),
        extra: new_keys
            .difference(&old_keys)
            .map(|k| k.to_string())
            .collect(),
        ..Default::default()
    };

    if common.is_empty() {
        return report;
    }

    for field in TEXT_FIELDS.iter().chain(["name", "sgpa", "subjects_count"].iter()) {
        report.field_matches.insert(field.to_string(), 0);
    }

    let mut subject_totals = SubjectTotalsMatch::default();
    for key in &common {
        let old = &existing[key.as_str()];
        let new = &parsed[key.as_str()];

        for field in TEXT_FIELDS {
            if field_text(old.get(field)) == field_text(new.get(field)) {
                bump(&mut report, field);
            }
        }

        if normalized_name(old, true) == normalized_name(new, false) {
            bump(&mut report, "name");
        }

        if (number(old.get("sgpa")) - number(new.get("sgpa"))).abs() < SGPA_TOLERANCE {
            bump(&mut report, "sgpa");
        }

        let old_subjects = subjects(old);
        let new_subjects = subjects(new);
        if old_subjects.len() == new_subjects.len() {
            bump(&mut report, "subjects_count");
        }
        for (o, n) in old_subjects.iter().zip(new_subjects.iter()) {
            subject_totals.total += 1;
            if subject_total(o) == subject_total(n) {
                subject_totals.matched += 1;
            }
        }
    }
    report.subject_totals = subject_totals;

    // `common` ya viene ordenado (BTreeSet)
    report.mismatches = common
        .iter()
        .filter(|key| {
            let old = &existing[key.as_str()];
            let new = &parsed[key.as_str()];
            old.get("totalMarks").and_then(Value::as_f64)
                != new.get("totalMarks").and_then(Value::as_f64)
                || (number(old.get("sgpa")) - number(new.get("sgpa"))).abs() > SGPA_TOLERANCE
        })
        .take(MAX_MISMATCH_SAMPLES)
        .map(|key| {
            let old = &existing[key.as_str()];
            let new = &parsed[key.as_str()];
            MismatchSample {
                key: key.to_string(),
                old_total_marks: old.get("totalMarks").and_then(Value::as_f64),
                new_total_marks: new.get("totalMarks").and_then(Value::as_f64),
                old_sgpa: old.get("sgpa").and_then(Value::as_f64),
                new_sgpa: new.get("sgpa").and_then(Value::as_f64),
                old_name: old.get("name").and_then(Value::as_str).map(str::to_string),
                new_name: new.get("name").and_then(Value::as_str).map(str::to_string),
            }
        })
        .collect();

    report
}

fn bump(report: &mut ComparisonReport, field: &str) {
    *report.field_matches.entry(field.to_string()).or_insert(0) += 1;
}

/// Representación textual de un campo: ausente -> "", null -> "None".
fn field_text(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

/// Nombre en minúsculas; los ledgers viejos traían "repeater" pegado al nombre.
fn normalized_name(student: &Value, strip_repeater: bool) -> String {
    let name = student
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    let name = if strip_repeater {
        name.replace("repeater", "")
    } else {
        name
    };
    name.trim().to_string()
}

fn number(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

fn subjects(student: &Value) -> &[Value] {
    student
        .get("subjects")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn subject_total(subject: &Value) -> Option<f64> {
    subject
        .get("marks")
        .and_then(|m| m.get("total"))
        .and_then(Value::as_f64)
}
