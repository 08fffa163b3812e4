//! config/app_config.rs
//! Configuración global del servicio (host, puerto, CORS, límites de subida...).
//! Todos los valores se leen del entorno (o de un .env) y tienen un valor por defecto.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "mu-result-parser";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Orígenes permitidos para CORS. `*` permite cualquiera.
    pub allowed_origins: Vec<String>,
    /// Tamaño máximo del PDF subido (bytes)
    pub max_upload_bytes: usize,
    /// Cantidad máxima de extracciones de texto simultáneas
    pub max_concurrent_parses: usize,
    pub parse_timeout_secs: u64,
    pub exam_session: String,
    pub university: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            allowed_origins: vec!["*".to_string()],
            max_upload_bytes: 50 * 1024 * 1024,
            max_concurrent_parses: 8,
            parse_timeout_secs: 120,
            exam_session: "December 2025".to_string(),
            university: "University of Mumbai".to_string(),
        }
    }
}

impl AppConfig {
    /// Construye la configuración a partir de variables `MU_PARSER_*`.
    /// Valores ausentes o inválidos caen al default (con un warning en el log).
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        AppConfig {
            host: env_string("MU_PARSER_HOST").unwrap_or(defaults.host),
            port: env_parsed("MU_PARSER_PORT").unwrap_or(defaults.port),
            workers: env_parsed("MU_PARSER_WORKERS")
                .filter(|w| *w > 0)
                .unwrap_or(defaults.workers),
            allowed_origins: env_string("MU_PARSER_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
            max_upload_bytes: env_parsed::<usize>("MU_PARSER_MAX_UPLOAD_MB")
                .map(|mb| mb * 1024 * 1024)
                .unwrap_or(defaults.max_upload_bytes),
            max_concurrent_parses: env_parsed("MU_PARSER_MAX_CONCURRENT_PARSES")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_concurrent_parses),
            parse_timeout_secs: env_parsed("MU_PARSER_PARSE_TIMEOUT_SECS")
                .unwrap_or(defaults.parse_timeout_secs),
            exam_session: env_string("MU_PARSER_EXAM_SESSION").unwrap_or(defaults.exam_session),
            university: env_string("MU_PARSER_UNIVERSITY").unwrap_or(defaults.university),
        }
    }

    pub fn parse_timeout(&self) -> Duration {
        Duration::from_secs(self.parse_timeout_secs)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Límite legible para los mensajes de error ("50MB").
    pub fn max_upload_label(&self) -> String {
        const MB: usize = 1024 * 1024;
        if self.max_upload_bytes >= MB {
            format!("{}MB", self.max_upload_bytes / MB)
        } else {
            format!("{} bytes", self.max_upload_bytes)
        }
    }
}

/// "https://a.com, https://b.com" -> ["https://a.com", "https://b.com"]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env_string(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Valor inválido para {}: {:?}, usando el default", key, raw);
            None
        }
    }
}
