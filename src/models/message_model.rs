//! models/message_model.rs
//! Estructuras de datos para los mensajes programados y sus requests.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Formato fijo de fechas que usa el proveedor: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Un email encolado para envío futuro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMessage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: NaiveDateTime,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub send_at: NaiveDateTime,
    pub from_email: String,
    pub to: String,
    pub subject: String,
}

fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

/// Body de POST /api/1.0/messages/cancel-scheduled.json
///
/// Campos extra (por ejemplo `key`) se ignoran.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelScheduledRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
