//! tests/mod.rs
//! Pruebas del crate.

mod config_tests;
mod fixtures;
mod line_parser_tests;
