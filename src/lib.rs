//! Servicio HTTP que parsea los PDF de resultados de la Universidad de Mumbai
//! y los devuelve como JSON estructurado.

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;
