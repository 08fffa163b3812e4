//! config/mod.rs
//! Configuración del servicio y catálogo de materias.

pub mod app_config;
pub mod subject_config;
