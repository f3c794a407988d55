//! Incremental frame splitting for streamed response bodies.
//!
//! Chunks arrive at arbitrary byte offsets, so the decoder buffers raw bytes
//! and only converts a frame to text once its delimiter has been seen. A
//! multi-byte character split across two chunks is therefore decoded intact.

/// Wire framing of the analysis stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamFormat {
    /// One JSON object per `\n`-terminated line.
    #[default]
    Ndjson,
    /// `event:`/`data:` blocks separated by a blank line.
    Sse,
}

impl StreamFormat {
    /// `text/event-stream` selects SSE; anything else (including a missing
    /// header or `application/x-ndjson`) is read as NDJSON.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct)
                if ct
                    .split(';')
                    .next()
                    .is_some_and(|m| m.trim().eq_ignore_ascii_case("text/event-stream")) =>
            {
                StreamFormat::Sse
            }
            _ => StreamFormat::Ndjson,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamFormat::Ndjson => "ndjson",
            StreamFormat::Sse => "sse",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameDecoder {
    format: StreamFormat,
    buf: Vec<u8>,
    /// Prefix of `buf` already searched without finding a delimiter.
    scanned: usize,
}

impl FrameDecoder {
    pub fn new(format: StreamFormat) -> Self {
        Self {
            format,
            buf: Vec::new(),
            scanned: 0,
        }
    }

    pub fn format(&self) -> StreamFormat {
        self.format
    }

    /// Bytes held back waiting for a delimiter.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Append a chunk and return every frame it completed, in order.
    /// Blank frames are dropped; the incomplete tail stays buffered.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some((end, delim_len)) = self.next_boundary() {
            let raw: Vec<u8> = self.buf.drain(..end + delim_len).collect();
            self.scanned = 0;
            if let Some(frame) = self.to_frame(&raw[..end]) {
                frames.push(frame);
            }
        }
        self.scanned = self.buf.len();
        frames
    }

    /// End of stream: hand back whatever was left without a delimiter.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buf);
        self.scanned = 0;
        self.to_frame(&rest)
    }

    /// Resumes where the last search stopped, backing up far enough to catch
    /// a delimiter that straddles the previous chunk boundary.
    fn next_boundary(&self) -> Option<(usize, usize)> {
        match self.format {
            StreamFormat::Ndjson => {
                let from = self.scanned;
                self.buf[from..]
                    .iter()
                    .position(|b| *b == b'\n')
                    .map(|p| (from + p, 1))
            }
            StreamFormat::Sse => {
                let from = self.scanned.saturating_sub(3);
                find_blank_line(&self.buf[from..]).map(|(p, len)| (from + p, len))
            }
        }
    }

    fn to_frame(&self, raw: &[u8]) -> Option<String> {
        let text = String::from_utf8_lossy(raw);
        let text = match self.format {
            StreamFormat::Ndjson => text.trim_end_matches('\r'),
            StreamFormat::Sse => text.as_ref(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Earliest `\n\n` or `\r\n\r\n`, as (offset, delimiter length).
fn find_blank_line(buf: &[u8]) -> Option<(usize, usize)> {
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|p| (p, 2));
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| (p, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndjson_split_across_chunks() {
        let mut dec = FrameDecoder::new(StreamFormat::Ndjson);
        assert!(dec.push(br#"{"type":"progress","#).is_empty());
        assert!(dec.pending() > 0);

        let frames = dec.push(b"\"message\":\"a\"}\n{\"type\":\"comp");
        assert_eq!(frames, vec![r#"{"type":"progress","message":"a"}"#.to_string()]);

        let frames = dec.push(b"lete\"}\n");
        assert_eq!(frames, vec![r#"{"type":"complete"}"#.to_string()]);
        assert_eq!(dec.pending(), 0);
    }

    #[test]
    fn test_ndjson_every_byte_separately() {
        let body = "{\"a\":1}\r\n\n   \n{\"b\":2}\n";
        let mut dec = FrameDecoder::new(StreamFormat::Ndjson);
        let frames: Vec<String> = body.bytes().flat_map(|b| dec.push(&[b])).collect();
        assert_eq!(frames, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn test_multibyte_char_split_between_chunks() {
        let line = "{\"text\":\"₦500k relief\"}\n".as_bytes();
        // '₦' is three bytes; cut through the middle of it.
        let cut = line.iter().position(|b| *b == 0xE2).unwrap() + 1;
        let mut dec = FrameDecoder::new(StreamFormat::Ndjson);
        assert!(dec.push(&line[..cut]).is_empty());
        let frames = dec.push(&line[cut..]);
        assert_eq!(frames, vec!["{\"text\":\"₦500k relief\"}"]);
    }

    #[test]
    fn test_finish_returns_unterminated_tail() {
        let mut dec = FrameDecoder::new(StreamFormat::Ndjson);
        assert!(dec.push(b"{\"type\":\"complete\"}").is_empty());
        assert_eq!(dec.finish().as_deref(), Some("{\"type\":\"complete\"}"));
        assert_eq!(dec.finish(), None);

        let mut blank = FrameDecoder::new(StreamFormat::Ndjson);
        blank.push(b"  \r");
        assert_eq!(blank.finish(), None);
    }

    #[test]
    fn test_sse_blank_line_delimiter() {
        let mut dec = FrameDecoder::new(StreamFormat::Sse);
        let frames = dec.push(b"event: progress\ndata: {\"message\":\"x\"}\n\nevent: comp");
        assert_eq!(frames, vec!["event: progress\ndata: {\"message\":\"x\"}"]);

        let frames = dec.push(b"lete\r\ndata: {}\r\n\r\n");
        assert_eq!(frames, vec!["event: complete\r\ndata: {}"]);
    }

    #[test]
    fn test_sse_single_newline_does_not_split() {
        let mut dec = FrameDecoder::new(StreamFormat::Sse);
        assert!(dec.push(b"event: text\ndata: {\"text\":\"a\"}\n").is_empty());
        assert_eq!(dec.push(b"\n").len(), 1);
    }

    #[test]
    fn test_format_from_content_type() {
        assert_eq!(
            StreamFormat::from_content_type(Some("text/event-stream; charset=utf-8")),
            StreamFormat::Sse
        );
        assert_eq!(
            StreamFormat::from_content_type(Some("application/x-ndjson")),
            StreamFormat::Ndjson
        );
        assert_eq!(StreamFormat::from_content_type(None), StreamFormat::Ndjson);
    }

    #[test]
    fn test_long_frame_in_small_chunks_resumes_scan() {
        let payload = "x".repeat(10_000);
        let line = format!("{{\"text\":\"{}\"}}\n", payload);
        let mut dec = FrameDecoder::new(StreamFormat::Ndjson);
        let mut frames = Vec::new();
        for chunk in line.as_bytes().chunks(2) {
            frames.extend(dec.push(chunk));
            assert_eq!(dec.scanned, dec.pending());
        }
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), line.len() - 1);
    }

    #[test]
    fn test_sse_delimiter_straddling_chunks() {
        for split in 1..4 {
            let mut dec = FrameDecoder::new(StreamFormat::Sse);
            let body = b"data: {\"a\":1}\r\n\r\ndata: {\"b\":2}\n\n";
            let cut = b"data: {\"a\":1}".len() + split;
            let mut frames = dec.push(&body[..cut]);
            frames.extend(dec.push(&body[cut..]));
            assert_eq!(frames, vec!["data: {\"a\":1}", "data: {\"b\":2}"], "split {}", split);
            assert_eq!(dec.pending(), 0);
        }
    }
}
