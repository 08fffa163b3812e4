//! models/parse_model.rs
//! Estructuras de requests/responses de la API HTTP.

use serde::{Deserialize, Serialize};

use crate::models::analysis_model::Analysis;
use crate::models::student_model::StudentRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    pub source_file: String,
    pub total_pages: u32,
    /// RFC 3339
    pub parsed_at: String,
    pub parse_time_ms: u64,
    pub exam_session: String,
    pub university: String,
    pub total_students: u32,
}

/// Respuesta de POST /parse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub students: Vec<StudentRecord>,
    pub metadata: ParseMetadata,
    pub analysis: Analysis,
}

/// GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
