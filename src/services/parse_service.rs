//! services/parse_service.rs
//! Flujo completo de POST /parse: validar, extraer texto, parsear y analizar.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use bytes::Bytes;
use chrono::Utc;

use crate::config::app_config::AppConfig;
use crate::errors::ApiError;
use crate::models::parse_model::{ParseMetadata, ParseResponse};
use crate::services::analysis_service::generate_analysis;
use crate::services::pdf_text_service::{ExtractedDocument, PdfTextService};
use crate::services::result_parser::{parse_lines, ParseOutcome};

/// Firma de cabecera de un PDF
const PDF_SIGNATURE: &[u8] = b"%PDF-";
/// La firma puede aparecer dentro del primer KB
const SIGNATURE_WINDOW: usize = 1024;
/// Cantidad de errores de bloque que se muestran en el log
const LOGGED_BLOCK_ERRORS: usize = 5;

#[derive(Clone)]
pub struct ParseService {
    config: Arc<AppConfig>,
    text_service: PdfTextService,
}

impl ParseService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let text_service =
            PdfTextService::new(config.max_concurrent_parses, config.parse_timeout());
        Self {
            config,
            text_service,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Nombre con extensión .pdf, tamaño dentro del límite y firma `%PDF-`.
    pub fn validate_upload(&self, file_name: &str, pdf_bytes: &[u8]) -> Result<(), ApiError> {
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(ApiError::InvalidFile);
        }
        if pdf_bytes.is_empty() {
            return Err(ApiError::MissingFile);
        }
        if pdf_bytes.len() > self.config.max_upload_bytes {
            return Err(ApiError::FileTooLarge(self.config.max_upload_label()));
        }
        if !has_pdf_signature(pdf_bytes) {
            return Err(ApiError::InvalidFile);
        }
        Ok(())
    }

    pub async fn parse_upload(
        &self,
        file_name: &str,
        pdf_bytes: Bytes,
    ) -> Result<ParseResponse, ApiError> {
        let started = Instant::now();
        self.validate_upload(file_name, &pdf_bytes)?;

        let document = self
            .text_service
            .extract(pdf_bytes)
            .await
            .map_err(ApiError::Parsing)?;

        // El parseo de líneas también es CPU-bound
        let total_pages = document.total_pages;
        let outcome = tokio::task::spawn_blocking(move || parse_lines(&document.lines))
            .await
            .context("La tarea de parseo terminó abruptamente")
            .map_err(ApiError::Parsing)?;

        Ok(self.assemble_response(file_name, total_pages, outcome, started))
    }

    /// Parsea las líneas ya extraídas y arma la respuesta con metadata y análisis.
    pub fn build_response(
        &self,
        file_name: &str,
        document: ExtractedDocument,
        started: Instant,
    ) -> ParseResponse {
        let outcome = parse_lines(&document.lines);
        self.assemble_response(file_name, document.total_pages, outcome, started)
    }

    fn assemble_response(
        &self,
        file_name: &str,
        total_pages: u32,
        outcome: ParseOutcome,
        started: Instant,
    ) -> ParseResponse {
        log::info!(
            "{}: {} estudiantes de {} bloques ({} líneas)",
            file_name,
            outcome.students.len(),
            outcome.blocks_found,
            outcome.total_lines
        );
        if !outcome.errors.is_empty() {
            log::warn!("{} bloques con errores", outcome.errors.len());
            for err in outcome.errors.iter().take(LOGGED_BLOCK_ERRORS) {
                log::warn!("  - {}", err);
            }
        }

        let analysis = generate_analysis(&outcome.students);
        let metadata = ParseMetadata {
            source_file: file_name.to_string(),
            total_pages,
            parsed_at: Utc::now().to_rfc3339(),
            parse_time_ms: started.elapsed().as_millis() as u64,
            exam_session: self.config.exam_session.clone(),
            university: self.config.university.clone(),
            total_students: outcome.students.len() as u32,
        };

        ParseResponse {
            students: outcome.students,
            metadata,
            analysis,
        }
    }
}

fn has_pdf_signature(pdf_bytes: &[u8]) -> bool {
    let head = &pdf_bytes[..pdf_bytes.len().min(SIGNATURE_WINDOW)];
    head.windows(PDF_SIGNATURE.len()).any(|w| w == PDF_SIGNATURE)
}
