//! handlers/mod.rs
//! Módulo que agrupa los handlers HTTP.

pub mod health_handler;
pub mod parse_handler;
