//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod analysis_model;
pub mod comparison_model;
pub mod parse_model;
pub mod student_model;
