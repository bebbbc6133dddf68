//! services/scheduled_service.rs
//! Almacén en memoria de mensajes programados.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::sync::Mutex;

use crate::errors::ScheduledError;
use crate::models::message_model::ScheduledMessage;

/// Seed por defecto, embebido en el binario.
const DEFAULT_SEED: &str = include_str!("../../data/scheduled_messages.json");

/// Clonar el servicio comparte el mismo almacén (un `Arc` por dentro).
#[derive(Clone, Debug)]
pub struct ScheduledService {
    messages: Arc<Mutex<Vec<ScheduledMessage>>>,
}

impl ScheduledService {
    /// Construye el almacén a partir de una lista de mensajes.
    /// Falla si hay ids repetidos.
    pub fn from_seed(messages: Vec<ScheduledMessage>) -> Result<Self> {
        let mut seen = HashSet::new();
        for msg in &messages {
            if !seen.insert(msg.id.as_str()) {
                bail!("Duplicate scheduled message id in seed: {}", msg.id);
            }
        }

        Ok(ScheduledService {
            messages: Arc::new(Mutex::new(messages)),
        })
    }

    /// Almacén con los seis mensajes de fábrica.
    pub fn seeded() -> Result<Self> {
        Self::from_seed(parse_seed(DEFAULT_SEED).context("Embedded seed is invalid")?)
    }

    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read seed file {}", path.display()))?;
        let messages = parse_seed(&raw)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;
        Self::from_seed(messages)
    }

    /// Todos los mensajes, en el orden del almacén.
    pub async fn list(&self) -> Vec<ScheduledMessage> {
        self.messages.lock().await.clone()
    }

    /// Quita el primer mensaje con ese id y lo devuelve.
    /// Buscar y quitar ocurren bajo el mismo lock.
    pub async fn cancel(&self, id: &str) -> Result<ScheduledMessage, ScheduledError> {
        let mut messages = self.messages.lock().await;
        let pos = messages
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ScheduledError::NotFound(id.to_string()))?;

        Ok(messages.remove(pos))
    }

    pub async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn parse_seed(raw: &str) -> Result<Vec<ScheduledMessage>> {
    let messages: Vec<ScheduledMessage> =
        serde_json::from_str(raw).context("Seed is not a valid JSON array of messages")?;
    Ok(messages)
}
