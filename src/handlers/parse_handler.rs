//! handlers/parse_handler.rs
//! Endpoint para parsear un PDF de resultados.

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use bytes::{Bytes, BytesMut};
use futures_util::TryStreamExt;
use log::error;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::services::parse_service::ParseService;

/// Nombre del campo multipart que trae el PDF
const FILE_FIELD: &str = "file";

/// POST /parse
/// Recibe `multipart/form-data` con el campo `file` y retorna el JSON parseado.
pub async fn parse_pdf_endpoint(
    parse_service: web::Data<ParseService>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    log::info!("[{}] Entrando a parse_pdf_endpoint", request_id);

    let (file_name, pdf_bytes) = read_upload(&mut payload, &parse_service).await?;
    log::info!(
        "[{}] Archivo recibido: {} ({} bytes)",
        request_id,
        file_name,
        pdf_bytes.len()
    );

    match parse_service.parse_upload(&file_name, pdf_bytes).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("[{}] Error parseando {}: {}", request_id, file_name, e);
            Err(e)
        }
    }
}

/// Lee el campo `file` completo. El nombre se valida antes de leer el contenido
/// y el tamaño se controla mientras llegan los chunks.
async fn read_upload(
    payload: &mut Multipart,
    parse_service: &ParseService,
) -> Result<(String, Bytes), ApiError> {
    let max_bytes = parse_service.config().max_upload_bytes;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        if name.as_deref() != Some(FILE_FIELD) {
            drain(&mut field).await?;
            continue;
        }

        let file_name = file_name.unwrap_or_default();
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(ApiError::InvalidFile);
        }

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?
        {
            if data.len() + chunk.len() > max_bytes {
                return Err(ApiError::FileTooLarge(
                    parse_service.config().max_upload_label(),
                ));
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(ApiError::MissingFile);
        }
        return Ok((file_name, data.freeze()));
    }

    Err(ApiError::MissingFile)
}

async fn drain(field: &mut Field) -> Result<(), ApiError> {
    while field
        .try_next()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .is_some()
    {}
    Ok(())
}
