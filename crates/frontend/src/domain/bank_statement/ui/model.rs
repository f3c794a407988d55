//! Bank statement - Model (API functions and stream driver)

use crate::shared::http::{post_form, send_form, ApiError};
use contracts::domain::bank_statement::upload::STATEMENT_FIELD;
use contracts::domain::bank_statement::StatementAnalysis;
use contracts::domain::tax::Deductions;
use contracts::shared::stream::{
    SessionTicket, StreamFormat, StreamHandler, StreamReader, StreamStats, TicketedHandler,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ReadableStreamDefaultReader};

const ANALYZE_PATH: &str = "/api/transactions/analyze-statement";
const ANALYZE_STREAM_PATH: &str = "/api/transactions/analyze-statement-stream";

pub const ANALYZE_FAILED: &str = "Failed to analyze statement";

/// Live streaming by default; single request as a fallback for proxies that
/// buffer chunked responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    Live,
    Single,
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Live => "Live analysis",
            AnalysisMode::Single => "Single request",
        }
    }
}

/// Detected deductions worth showing: labelled and strictly positive.
pub fn detected_deductions(d: &Deductions) -> Vec<(&'static str, f64)> {
    [
        ("Pension", d.pension),
        ("NHF", d.nhf),
        ("NHIS", d.nhis),
        ("Rent Paid", d.rent_paid),
        ("Life Assurance", d.life_assurance),
    ]
    .into_iter()
    .filter(|(_, v)| *v > 0.0)
    .collect()
}

fn statement_form(file: &File) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    form.append_with_blob_and_filename(STATEMENT_FIELD, file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    Ok(form)
}

pub async fn analyze_statement(file: &File) -> Result<StatementAnalysis, ApiError> {
    post_form(ANALYZE_PATH, statement_form(file)?).await
}

/// Upload `file` to the streaming endpoint and push every decoded event into
/// `handler` as it arrives.
///
/// Events reach `handler` only while `ticket` is current. Once it is retired
/// (a newer upload, or the page going away) the browser reader is cancelled.
/// Request and read failures reach `handler.on_error`.
pub async fn stream_statement<H: StreamHandler>(
    file: &File,
    handler: H,
    ticket: SessionTicket,
) -> StreamStats {
    let handler = TicketedHandler::new(ticket.clone(), handler);
    let response = match statement_form(file) {
        Ok(form) => send_form(ANALYZE_STREAM_PATH, form).await,
        Err(e) => Err(e),
    };
    let response = match response {
        Ok(r) => r,
        Err(e) => {
            let mut reader = StreamReader::new(StreamFormat::default(), handler);
            reader.fail(e.user_message(ANALYZE_FAILED));
            return reader.stats();
        }
    };

    let content_type = response.headers().get("content-type");
    let format = StreamFormat::from_content_type(content_type.as_deref());
    let mut reader = StreamReader::new(format, handler);
    log::debug!("[STREAM] Connected, session {}, format {}", ticket.id(), format.as_str());

    let Some(body) = response.body() else {
        reader.fail("Response has no body");
        return reader.stats();
    };
    let js_reader: ReadableStreamDefaultReader = match body.get_reader().dyn_into() {
        Ok(r) => r,
        Err(e) => {
            reader.fail(format!("Failed to open stream: {e:?}"));
            return reader.stats();
        }
    };

    loop {
        if !ticket.is_current() {
            log::debug!("[STREAM] Session {} cancelled", ticket.id());
            let _ = js_reader.cancel();
            break;
        }

        let chunk = match JsFuture::from(js_reader.read()).await {
            Ok(c) => c,
            Err(e) => {
                reader.fail(format!("Stream read failed: {e:?}"));
                break;
            }
        };

        let done = js_sys::Reflect::get(&chunk, &"done".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            reader.finish();
            break;
        }

        if let Ok(value) = js_sys::Reflect::get(&chunk, &"value".into()) {
            let bytes = js_sys::Uint8Array::new(&value).to_vec();
            reader.feed(&bytes);
        }
    }

    reader.stats()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_deductions_skip_zero() {
        let d = Deductions {
            pension: 120000.0,
            rent_paid: 900000.0,
            ..Default::default()
        };
        assert_eq!(
            detected_deductions(&d),
            vec![("Pension", 120000.0), ("Rent Paid", 900000.0)]
        );
        assert!(detected_deductions(&Deductions::default()).is_empty());
    }

    #[test]
    fn test_default_mode_is_live() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Live);
        assert_eq!(AnalysisMode::Single.label(), "Single request");
    }
}
