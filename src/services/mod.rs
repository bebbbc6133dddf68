//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod scheduled_service;
