//! Incremental reader for the statement analysis stream.
//!
//! The body is either NDJSON (one tagged JSON object per line) or SSE
//! (`event:`/`data:` blocks). [`StreamReader`] buffers partial input,
//! decodes complete frames into [`StreamEvent`]s and routes them to a
//! [`StreamHandler`].

pub mod event;
pub mod fragments;
pub mod framing;
pub mod reader;
pub mod session;

pub use event::{
    parse_frame, Completion, ProgressUpdate, StreamError, StreamEvent, StreamFailure, TextDelta,
};
pub use fragments::{TextFragment, TextFragments};
pub use framing::{FrameDecoder, StreamFormat};
pub use reader::{StreamHandler, StreamReader, StreamStats};
pub use session::{SessionTicket, StreamSessions, TicketedHandler};
