//! models/student_model.rs
//! Registro de un estudiante tal como lo consume el front-end (camelCase).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// Condición de inscripción que figura en la cabecera del bloque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionStatus {
    Regular,
    Repeater,
    #[serde(rename = "ATKT")]
    Atkt,
}

impl AdmissionStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "REGULAR" => Some(AdmissionStatus::Regular),
            "REPEATER" => Some(AdmissionStatus::Repeater),
            "ATKT" => Some(AdmissionStatus::Atkt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Estado por materia: "P" o "F".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkStatus {
    #[serde(rename = "P")]
    Pass,
    #[serde(rename = "F")]
    Fail,
}

/// Componente responsable de un KT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KtType {
    External,
    Internal,
    TermWork,
    Oral,
    Overall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMarks {
    pub term_work: Option<u32>,
    pub oral: Option<u32>,
    pub external: Option<u32>,
    pub internal: Option<u32>,
    pub total: u32,
    pub grade_point: u32,
    pub grade: String,
    pub credits: f64,
    pub credit_points: f64,
    pub status: MarkStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub code: String,
    pub name: String,
    pub marks: SubjectMarks,
    #[serde(rename = "isKT")]
    pub is_kt: bool,
    #[serde(rename = "ktType")]
    pub kt_type: Option<KtType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KtSummary {
    #[serde(rename = "totalKT")]
    pub total_kt: u32,
    #[serde(rename = "internalKT")]
    pub internal_kt: u32,
    /// Incluye los KT de tipo `overall`
    #[serde(rename = "externalKT")]
    pub external_kt: u32,
    #[serde(rename = "termWorkKT")]
    pub term_work_kt: u32,
    #[serde(rename = "oralKT")]
    pub oral_kt: u32,
    #[serde(rename = "failedSubjects")]
    pub failed_subjects: Vec<String>,
    #[serde(rename = "hasKT")]
    pub has_kt: bool,
}

impl KtSummary {
    pub fn from_subjects(subjects: &[SubjectResult]) -> Self {
        let count = |kinds: &[KtType]| {
            subjects
                .iter()
                .filter(|s| s.kt_type.is_some_and(|k| kinds.contains(&k)))
                .count() as u32
        };

        let failed_subjects: Vec<String> = subjects
            .iter()
            .filter(|s| s.is_kt)
            .map(|s| s.name.clone())
            .collect();

        KtSummary {
            total_kt: failed_subjects.len() as u32,
            internal_kt: count(&[KtType::Internal]),
            external_kt: count(&[KtType::External, KtType::Overall]),
            term_work_kt: count(&[KtType::TermWork]),
            oral_kt: count(&[KtType::Oral]),
            has_kt: !failed_subjects.is_empty(),
            failed_subjects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub seat_number: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub ern: Option<String>,
    pub college: String,
    pub status: AdmissionStatus,
    pub subjects: Vec<SubjectResult>,
    pub total_marks: u32,
    pub max_marks: u32,
    pub result: ResultStatus,
    pub sgpa: f64,
    pub cgpa: Option<f64>,
    pub total_credits: f64,
    pub total_credit_points: f64,
    pub kt: KtSummary,
}

impl StudentRecord {
    /// Clave de deduplicación: ERN si existe, si no el número de asiento.
    pub fn key(&self) -> &str {
        self.ern.as_deref().unwrap_or(&self.seat_number)
    }

    pub fn passed(&self) -> bool {
        self.result == ResultStatus::Pass
    }
}
