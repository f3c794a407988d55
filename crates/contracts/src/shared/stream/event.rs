//! Typed events carried by the statement analysis stream.

use super::framing::StreamFormat;
use crate::domain::bank_statement::{StatementAnalysis, TaxAdvisory};
use crate::domain::tax::TaxResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event is not a JSON object")]
    NotAnObject,
    #[error("event has no `type` or `event` discriminator")]
    MissingType,
    #[error("invalid `{kind}` payload: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressUpdate {
    pub stage: Option<String>,
    pub message: Option<String>,
    #[serde(alias = "progress")]
    pub percent: Option<f64>,
}

/// Cumulative text for one fragment: each delta carries the whole text so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextDelta {
    pub text_type: String,
    pub title: Option<String>,
    pub text: String,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Completion {
    pub message: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamFailure {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl StreamFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            message: None,
        }
    }

    pub fn reason(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Stream failed")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Progress(ProgressUpdate),
    Analysis(StatementAnalysis),
    TaxEstimate(TaxResult),
    TaxAdvisory(TaxAdvisory),
    Text(TextDelta),
    Complete(Completion),
    Error(StreamFailure),
}

impl StreamEvent {
    /// Discriminator as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamEvent::Progress(_) => "progress",
            StreamEvent::Analysis(_) => "analysis",
            StreamEvent::TaxEstimate(_) => "taxEstimate",
            StreamEvent::TaxAdvisory(_) => "taxAdvisory",
            StreamEvent::Text(_) => "text",
            StreamEvent::Complete(_) => "complete",
            StreamEvent::Error(_) => "error",
        }
    }

    /// Build an event from a decoded JSON object. `fallback_kind` is the SSE
    /// `event:` name, used only when the object carries no discriminator.
    /// Unknown discriminators yield `Ok(None)`.
    pub fn from_value(value: Value, fallback_kind: Option<&str>) -> Result<Option<Self>, StreamError> {
        let obj = value.as_object().ok_or(StreamError::NotAnObject)?;
        let kind = obj
            .get("type")
            .and_then(Value::as_str)
            .or_else(|| obj.get("event").and_then(Value::as_str))
            .or(fallback_kind)
            .ok_or(StreamError::MissingType)?
            .to_string();

        let event = match kind.as_str() {
            "progress" => StreamEvent::Progress(flat(value, "progress")?),
            "analysis" => StreamEvent::Analysis(nested(value, "analysis")?),
            "taxEstimate" => StreamEvent::TaxEstimate(nested(value, "taxEstimate")?),
            "taxAdvisory" => StreamEvent::TaxAdvisory(nested(value, "taxAdvisory")?),
            "text" => StreamEvent::Text(flat(value, "text")?),
            "complete" => StreamEvent::Complete(flat(value, "complete")?),
            "error" => StreamEvent::Error(flat(value, "error")?),
            other => {
                log::debug!("[STREAM] ignoring event type `{}`", other);
                return Ok(None);
            }
        };
        Ok(Some(event))
    }
}

fn flat<T: DeserializeOwned>(value: Value, kind: &'static str) -> Result<T, StreamError> {
    serde_json::from_value(value).map_err(|source| StreamError::InvalidPayload { kind, source })
}

/// Payload either sits under `data` or is spread over the event object itself.
fn nested<T: DeserializeOwned>(mut value: Value, kind: &'static str) -> Result<T, StreamError> {
    let inner = if value.get("data").is_some_and(Value::is_object) {
        value["data"].take()
    } else {
        value
    };
    flat(inner, kind)
}

/// Parse one complete frame produced by [`super::FrameDecoder`].
pub fn parse_frame(format: StreamFormat, frame: &str) -> Result<Option<StreamEvent>, StreamError> {
    match format {
        StreamFormat::Ndjson => {
            let value: Value = serde_json::from_str(frame.trim())?;
            StreamEvent::from_value(value, None)
        }
        StreamFormat::Sse => parse_sse_block(frame),
    }
}

fn parse_sse_block(frame: &str) -> Result<Option<StreamEvent>, StreamError> {
    let mut name: Option<&str> = None;
    let mut data: Vec<&str> = Vec::new();

    for line in frame.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((f, v)) => (f, v.strip_prefix(' ').unwrap_or(v)),
            None => (line, ""),
        };
        match field {
            "event" => name = Some(value.trim()),
            "data" => data.push(value),
            _ => {}
        }
    }

    if data.is_empty() {
        return Ok(None);
    }
    let payload = data.join("\n");
    if payload.trim() == "[DONE]" {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(&payload)?;
    StreamEvent::from_value(value, name.filter(|n| !n.is_empty()))
}
