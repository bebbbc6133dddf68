//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod message_model;
