use anyhow::{anyhow, Context, Result};
use bytes::Bytes;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{
    sync::{Semaphore, SemaphorePermit},
    time::timeout,
};

/// Tiempo máximo esperando un permiso de extracción
const PERMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Texto de un PDF, ya partido en líneas.
#[derive(Debug, Clone, Default)]
pub struct ExtractedDocument {
    pub lines: Vec<String>,
    pub total_pages: u32,
}

impl ExtractedDocument {
    pub fn from_text(text: &str, total_pages: u32) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            total_pages,
        }
    }
}

#[derive(Clone)]
pub struct PdfTextService {
    semaphore: Arc<Semaphore>,
    extraction_timeout: Duration,
}

impl PdfTextService {
    pub fn new(max_concurrent: usize, extraction_timeout: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            extraction_timeout,
        }
    }

    /// Extrae el texto de todas las páginas.
    /// La extracción es CPU-bound, corre en el pool bloqueante de tokio.
    pub async fn extract(&self, pdf_bytes: Bytes) -> Result<ExtractedDocument> {
        let start = Instant::now();

        // Control de concurrencia
        let _guard = self.acquire_permit().await?;

        let task = tokio::task::spawn_blocking(move || extract_from_bytes(&pdf_bytes));
        let document = timeout(self.extraction_timeout, task)
            .await
            .context("Timeout extrayendo texto del PDF")?
            .context("La tarea de extracción terminó abruptamente")??;

        log::info!(
            "Texto extraído en {:.2}s ({} páginas, {} líneas)",
            start.elapsed().as_secs_f32(),
            document.total_pages,
            document.lines.len()
        );

        Ok(document)
    }

    async fn acquire_permit(&self) -> Result<SemaphorePermit<'_>> {
        timeout(PERMIT_TIMEOUT, self.semaphore.acquire())
            .await
            .context("Timeout esperando permiso en PdfTextService")?
            .map_err(|_| anyhow!("No se pudo adquirir el semaphore"))
    }
}

/// Versión síncrona: cuenta páginas con lopdf y extrae el texto con pdf-extract.
pub fn extract_from_bytes(pdf_bytes: &[u8]) -> Result<ExtractedDocument> {
    let document =
        lopdf::Document::load_mem(pdf_bytes).context("No se pudo leer la estructura del PDF")?;
    let total_pages = document.get_pages().len() as u32;

    let text = pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| anyhow!("No se pudo extraer texto del PDF: {:?}", e))?;

    Ok(ExtractedDocument::from_text(&text, total_pages))
}
