//! One live stream per page.
//!
//! [`StreamSessions::begin`] hands out a ticket and retires every earlier
//! one. A [`TicketedHandler`] drops events once its ticket is retired, so a
//! stream still draining in the background can never write into the state
//! of the request that replaced it.

use super::event::{Completion, ProgressUpdate, StreamFailure, TextDelta};
use super::reader::StreamHandler;
use crate::domain::bank_statement::{StatementAnalysis, TaxAdvisory};
use crate::domain::tax::TaxResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct StreamSessions {
    current: Arc<AtomicU64>,
}

impl StreamSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session; all earlier tickets stop being current.
    pub fn begin(&self) -> SessionTicket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        SessionTicket {
            id,
            current: self.current.clone(),
        }
    }

    /// Retire every ticket, e.g. when the page unmounts.
    pub fn cancel_all(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct SessionTicket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl SessionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

/// Forwards events to `inner` only while `ticket` is current.
#[derive(Debug)]
pub struct TicketedHandler<H> {
    ticket: SessionTicket,
    inner: H,
    dropped: usize,
}

impl<H: StreamHandler> TicketedHandler<H> {
    pub fn new(ticket: SessionTicket, inner: H) -> Self {
        Self {
            ticket,
            inner,
            dropped: 0,
        }
    }

    pub fn ticket(&self) -> &SessionTicket {
        &self.ticket
    }

    /// Events swallowed after the ticket was retired.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    fn live(&mut self) -> Option<&mut H> {
        if self.ticket.is_current() {
            Some(&mut self.inner)
        } else {
            if self.dropped == 0 {
                log::debug!("[STREAM] session {} superseded, dropping events", self.ticket.id);
            }
            self.dropped += 1;
            None
        }
    }
}

impl<H: StreamHandler> StreamHandler for TicketedHandler<H> {
    fn on_progress(&mut self, update: ProgressUpdate) {
        if let Some(h) = self.live() {
            h.on_progress(update);
        }
    }

    fn on_analysis(&mut self, analysis: StatementAnalysis) {
        if let Some(h) = self.live() {
            h.on_analysis(analysis);
        }
    }

    fn on_tax_estimate(&mut self, estimate: TaxResult) {
        if let Some(h) = self.live() {
            h.on_tax_estimate(estimate);
        }
    }

    fn on_tax_advisory(&mut self, advisory: TaxAdvisory) {
        if let Some(h) = self.live() {
            h.on_tax_advisory(advisory);
        }
    }

    fn on_text(&mut self, delta: TextDelta) {
        if let Some(h) = self.live() {
            h.on_text(delta);
        }
    }

    fn on_complete(&mut self, completion: Completion) {
        if let Some(h) = self.live() {
            h.on_complete(completion);
        }
    }

    fn on_error(&mut self, failure: StreamFailure) {
        if let Some(h) = self.live() {
            h.on_error(failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::stream::{StreamFormat, StreamReader};

    #[derive(Default)]
    struct Advisories(Vec<String>);

    impl StreamHandler for Advisories {
        fn on_tax_advisory(&mut self, advisory: TaxAdvisory) {
            self.0.push(advisory.summary.unwrap_or_default());
        }
    }

    #[test]
    fn test_begin_retires_previous_ticket() {
        let sessions = StreamSessions::new();
        let first = sessions.begin();
        assert!(first.is_current());

        let second = sessions.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_ne!(first.id(), second.id());

        sessions.cancel_all();
        assert!(!second.is_current());
    }

    #[test]
    fn test_late_events_from_replaced_stream_are_dropped() {
        let sessions = StreamSessions::new();
        let mut old = StreamReader::new(
            StreamFormat::Ndjson,
            TicketedHandler::new(sessions.begin(), Advisories::default()),
        );
        old.feed(b"{\"type\":\"taxAdvisory\",\"summary\":\"first\"}\n");

        // A new request starts while the old body is still draining.
        let mut new = StreamReader::new(
            StreamFormat::Ndjson,
            TicketedHandler::new(sessions.begin(), Advisories::default()),
        );
        old.feed(b"{\"type\":\"taxAdvisory\",\"summary\":\"late\"}\n");
        new.feed(b"{\"type\":\"taxAdvisory\",\"summary\":\"fresh\"}\n");

        assert_eq!(old.handler().inner().0, vec!["first".to_string()]);
        assert_eq!(old.handler().dropped(), 1);
        assert_eq!(new.handler().inner().0, vec!["fresh".to_string()]);
        assert_eq!(new.handler().dropped(), 0);
    }
}
