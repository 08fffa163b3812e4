//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod analysis_service;
pub mod comparison_service;
pub mod line_parser;
pub mod parse_service;
pub mod pdf_text_service;
pub mod result_parser;
