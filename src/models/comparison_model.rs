//! models/comparison_model.rs
//! Reporte de precisión entre un JSON existente y un parseo nuevo (solo CLI).

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubjectTotalsMatch {
    pub matched: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchSample {
    pub key: String,
    pub old_total_marks: Option<f64>,
    pub new_total_marks: Option<f64>,
    pub old_sgpa: Option<f64>,
    pub new_sgpa: Option<f64>,
    pub old_name: Option<String>,
    pub new_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub existing_count: usize,
    pub parsed_count: usize,
    pub common: usize,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    /// campo -> cantidad de estudiantes en común que coinciden
    pub field_matches: BTreeMap<String, u32>,
    pub subject_totals: SubjectTotalsMatch,
    pub mismatches: Vec<MismatchSample>,
}

impl ComparisonReport {
    /// Porcentaje de coincidencia de un campo sobre los estudiantes en común.
    pub fn field_accuracy(&self, field: &str) -> Option<f64> {
        if self.common == 0 {
            return None;
        }
        self.field_matches
            .get(field)
            .map(|count| *count as f64 / self.common as f64 * 100.0)
    }
}
