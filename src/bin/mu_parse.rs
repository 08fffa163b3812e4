//! Parsea un PDF local y guarda el resultado como JSON `clave -> estudiante`.
//! Con `--compare` además mide la precisión contra un JSON existente.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use clap::Parser;
use serde_json::{Map, Value};

use mu_result_parser::config::app_config::AppConfig;
use mu_result_parser::logger::init_cli_logger;
use mu_result_parser::models::comparison_model::ComparisonReport;
use mu_result_parser::services::comparison_service::{compare, keyed_students};
use mu_result_parser::services::parse_service::ParseService;

/// Cuántas claves faltantes/sobrantes se muestran
const SHOWN_KEYS: usize = 5;

#[derive(Parser)]
#[command(name = "mu-parse")]
#[command(about = "Parse a Mumbai University result PDF into JSON")]
struct Args {
    /// PDF de resultados
    pdf: PathBuf,

    /// Archivo JSON de salida
    #[arg(short, long, default_value = "parsed_results.json")]
    output: PathBuf,

    /// JSON existente contra el cual comparar
    #[arg(long)]
    compare: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    if !args.pdf.exists() {
        bail!("{} no existe", args.pdf.display());
    }

    let file_name = args
        .pdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let pdf_bytes = std::fs::read(&args.pdf)
        .with_context(|| format!("No se pudo leer {}", args.pdf.display()))?;

    log::info!("Parseando {}...", args.pdf.display());
    let service = ParseService::new(Arc::new(AppConfig::default()));
    let response = service
        .parse_upload(&file_name, Bytes::from(pdf_bytes))
        .await?;

    let keyed = keyed_students(&response.students)?;

    let json = serde_json::to_string_pretty(&keyed)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("No se pudo escribir {}", args.output.display()))?;
    log::info!(
        "{} estudiantes guardados en {}",
        keyed.len(),
        args.output.display()
    );

    if let Some(existing_path) = &args.compare {
        let raw = std::fs::read_to_string(existing_path)
            .with_context(|| format!("No se pudo leer {}", existing_path.display()))?;
        let existing: Map<String, Value> = serde_json::from_str(&raw)
            .with_context(|| format!("{} no es un objeto JSON", existing_path.display()))?;

        let report = compare(&existing, &keyed);
        log_report(&report);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn log_report(report: &ComparisonReport) {
    log::info!(
        "Existente: {} | Nuevo: {} | En común: {} | Faltan: {} | Sobran: {}",
        report.existing_count,
        report.parsed_count,
        report.common,
        report.missing.len(),
        report.extra.len()
    );
    for key in report.missing.iter().take(SHOWN_KEYS) {
        log::info!("  - falta {}", key);
    }
    for key in report.extra.iter().take(SHOWN_KEYS) {
        log::info!("  + sobra {}", key);
    }
    for field in report.field_matches.keys() {
        if let Some(pct) = report.field_accuracy(field) {
            log::info!("  {}: {:.1}%", field, pct);
        }
    }
    if report.subject_totals.total > 0 {
        log::info!(
            "  subject_totals: {}/{}",
            report.subject_totals.matched,
            report.subject_totals.total
        );
    }
}
