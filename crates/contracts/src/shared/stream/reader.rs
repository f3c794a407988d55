use super::event::{
    parse_frame, Completion, ProgressUpdate, StreamEvent, StreamFailure, TextDelta,
};
use super::framing::{FrameDecoder, StreamFormat};
use crate::domain::bank_statement::{StatementAnalysis, TaxAdvisory};
use crate::domain::tax::TaxResult;

/// Receives decoded stream events. Every hook is optional.
pub trait StreamHandler {
    fn on_progress(&mut self, _update: ProgressUpdate) {}
    fn on_analysis(&mut self, _analysis: StatementAnalysis) {}
    fn on_tax_estimate(&mut self, _estimate: TaxResult) {}
    fn on_tax_advisory(&mut self, _advisory: TaxAdvisory) {}
    fn on_text(&mut self, _delta: TextDelta) {}
    fn on_complete(&mut self, _completion: Completion) {}
    fn on_error(&mut self, _failure: StreamFailure) {}
}

impl StreamEvent {
    pub fn dispatch<H: StreamHandler + ?Sized>(self, handler: &mut H) {
        match self {
            StreamEvent::Progress(p) => handler.on_progress(p),
            StreamEvent::Analysis(a) => handler.on_analysis(a),
            StreamEvent::TaxEstimate(t) => handler.on_tax_estimate(t),
            StreamEvent::TaxAdvisory(a) => handler.on_tax_advisory(a),
            StreamEvent::Text(t) => handler.on_text(t),
            StreamEvent::Complete(c) => handler.on_complete(c),
            StreamEvent::Error(e) => handler.on_error(e),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Frames turned into events and handed to the handler.
    pub dispatched: usize,
    /// Well-formed frames with an unknown discriminator, or SSE blocks without data.
    pub ignored: usize,
    /// Malformed frames dropped with a warning.
    pub skipped: usize,
}

/// Feeds raw body chunks through a [`FrameDecoder`] and routes the resulting
/// events to a [`StreamHandler`]. A bad frame never aborts the stream.
#[derive(Debug)]
pub struct StreamReader<H> {
    decoder: FrameDecoder,
    handler: H,
    stats: StreamStats,
    finished: bool,
}

impl<H: StreamHandler> StreamReader<H> {
    pub fn new(format: StreamFormat, handler: H) -> Self {
        Self {
            decoder: FrameDecoder::new(format),
            handler,
            stats: StreamStats::default(),
            finished: false,
        }
    }

    pub fn format(&self) -> StreamFormat {
        self.decoder.format()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        if self.finished {
            log::warn!("[STREAM] chunk of {} bytes after end of stream dropped", chunk.len());
            return;
        }
        for frame in self.decoder.push(chunk) {
            self.handle_frame(&frame);
        }
    }

    /// The body signalled `done`: flush an unterminated last frame.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        if let Some(rest) = self.decoder.finish() {
            self.handle_frame(&rest);
        }
        self.finished = true;
        log::debug!(
            "[STREAM] Stream ended: {} dispatched, {} ignored, {} skipped",
            self.stats.dispatched,
            self.stats.ignored,
            self.stats.skipped
        );
    }

    /// Reading the body failed; report it through `on_error` and stop.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("[STREAM] Read error: {}", reason);
        self.finished = true;
        self.handler.on_error(StreamFailure::new(reason));
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    fn handle_frame(&mut self, frame: &str) {
        match parse_frame(self.decoder.format(), frame) {
            Ok(Some(event)) => {
                log::debug!("[STREAM] Received: {}", event.kind());
                self.stats.dispatched += 1;
                event.dispatch(&mut self.handler);
            }
            Ok(None) => self.stats.ignored += 1,
            Err(e) => {
                log::warn!("[STREAM] Skipping frame: {} | {}", e, preview(frame));
                self.stats.skipped += 1;
            }
        }
    }
}

fn preview(frame: &str) -> &str {
    match frame.char_indices().nth(100) {
        Some((idx, _)) => &frame[..idx],
        None => frame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::stream::TextFragments;

    #[derive(Default)]
    struct Recorder {
        kinds: Vec<&'static str>,
        fragments: TextFragments,
        errors: Vec<String>,
        progress: Vec<String>,
    }

    impl StreamHandler for Recorder {
        fn on_progress(&mut self, update: ProgressUpdate) {
            self.kinds.push("progress");
            self.progress.push(update.message.unwrap_or_default());
        }
        fn on_analysis(&mut self, _analysis: StatementAnalysis) {
            self.kinds.push("analysis");
        }
        fn on_tax_estimate(&mut self, _estimate: TaxResult) {
            self.kinds.push("taxEstimate");
        }
        fn on_text(&mut self, delta: TextDelta) {
            self.kinds.push("text");
            self.fragments.apply(delta);
        }
        fn on_complete(&mut self, _completion: Completion) {
            self.kinds.push("complete");
        }
        fn on_error(&mut self, failure: StreamFailure) {
            self.kinds.push("error");
            self.errors.push(failure.reason().to_string());
        }
    }

    const BODY: &str = concat!(
        "{\"type\":\"progress\",\"message\":\"Reading statement\"}\n",
        "{\"type\":\"analysis\",\"data\":{\"extracted\":{\"totalTransactions\":3}}}\n",
        "{oops\n",
        "{\"type\":\"text\",\"textType\":\"summary\",\"title\":\"Overview\",\"text\":\"Your\",\"isComplete\":false}\n",
        "{\"type\":\"keepalive\"}\n",
        "{\"type\":\"text\",\"textType\":\"summary\",\"title\":\"Overview\",\"text\":\"Your income\",\"isComplete\":true}\n",
        "{\"type\":\"taxEstimate\",\"data\":{\"grossIncome\":10}}\n",
        "{\"type\":\"complete\"}\n",
    );

    #[test]
    fn test_routes_events_and_skips_bad_lines() {
        for chunk_size in [1, 3, 7, 64, BODY.len()] {
            let mut reader = StreamReader::new(StreamFormat::Ndjson, Recorder::default());
            for chunk in BODY.as_bytes().chunks(chunk_size) {
                reader.feed(chunk);
            }
            reader.finish();

            let stats = reader.stats();
            assert_eq!(stats.dispatched, 6, "chunk size {}", chunk_size);
            assert_eq!(stats.skipped, 1);
            assert_eq!(stats.ignored, 1);

            let rec = reader.into_handler();
            assert_eq!(
                rec.kinds,
                vec!["progress", "analysis", "text", "text", "taxEstimate", "complete"]
            );
            assert_eq!(rec.progress, vec!["Reading statement".to_string()]);
            assert_eq!(rec.fragments.len(), 1);
            assert_eq!(rec.fragments.items()[0].text, "Your income");
            assert!(rec.fragments.all_complete());
        }
    }

    #[test]
    fn test_finish_flushes_tail_once() {
        let mut reader = StreamReader::new(StreamFormat::Ndjson, Recorder::default());
        reader.feed(b"{\"type\":\"complete\"}");
        assert!(reader.handler().kinds.is_empty());
        reader.finish();
        reader.finish();
        assert_eq!(reader.handler().kinds, vec!["complete"]);

        reader.feed(b"{\"type\":\"progress\"}\n");
        assert_eq!(reader.handler().kinds.len(), 1);
    }

    #[test]
    fn test_fail_reports_through_on_error() {
        let mut reader = StreamReader::new(StreamFormat::Ndjson, Recorder::default());
        reader.feed(b"{\"type\":\"progress\"}\n");
        reader.fail("network connection lost");
        assert!(reader.is_finished());
        assert_eq!(reader.handler().errors, vec!["network connection lost".to_string()]);
        assert_eq!(reader.handler().kinds, vec!["progress", "error"]);
    }

    #[test]
    fn test_sse_stream() {
        let body = "event: progress\ndata: {\"message\":\"Parsing\"}\n\n\
                    : ping\n\n\
                    event: error\ndata: {\"error\":\"Model overloaded\"}\n\n";
        let mut reader = StreamReader::new(StreamFormat::Sse, Recorder::default());
        for chunk in body.as_bytes().chunks(5) {
            reader.feed(chunk);
        }
        reader.finish();

        let rec = reader.handler();
        assert_eq!(rec.kinds, vec!["progress", "error"]);
        assert_eq!(rec.errors, vec!["Model overloaded".to_string()]);
        assert_eq!(reader.stats().ignored, 1);
    }

    #[test]
    fn test_loose_backend_payloads_are_dispatched() {
        let body = concat!(
            "{\"type\":\"analysis\",\"data\":{\"extracted\":{\"totalTransactions\":4.0},",
            "\"detectedData\":{\"incomeSources\":[{\"type\":\"rental\",\"amount\":1200000}]}}}\n",
            "{\"type\":\"taxEstimate\",\"data\":{\"grossIncome\":null,\"taxPayable\":0}}\n",
        );
        let mut reader = StreamReader::new(StreamFormat::Ndjson, Recorder::default());
        reader.feed(body.as_bytes());
        reader.finish();

        assert_eq!(reader.stats().skipped, 0);
        assert_eq!(reader.handler().kinds, vec!["analysis", "taxEstimate"]);
    }

    #[test]
    fn test_preview_is_char_safe() {
        let long = "₦".repeat(150);
        assert_eq!(preview(&long).chars().count(), 100);
        assert_eq!(preview("short"), "short");
    }
}
