//! models/analysis_model.rs
//! Resumen agregado de un documento.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksDistribution {
    pub distinction: u32,
    pub first_class: u32,
    pub second_class: u32,
    pub pass_class: u32,
    pub fail: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KtDistribution {
    #[serde(rename = "noKT")]
    pub no_kt: u32,
    #[serde(rename = "oneKT")]
    pub one_kt: u32,
    #[serde(rename = "twoKT")]
    pub two_kt: u32,
    #[serde(rename = "threeOrMoreKT")]
    pub three_or_more_kt: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub total_students: u32,
    pub passed_count: u32,
    pub failed_count: u32,
    pub pass_percentage: f64,
    #[serde(rename = "studentsWithKT")]
    pub students_with_kt: u32,
    #[serde(rename = "averageKTPerStudent")]
    pub average_kt_per_student: f64,
    pub highest_marks: u32,
    pub lowest_marks: u32,
    pub average_marks: u32,
    #[serde(rename = "averageSGPA")]
    pub average_sgpa: f64,
    pub marks_distribution: MarksDistribution,
    pub kt_distribution: KtDistribution,
}
