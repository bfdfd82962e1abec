use std::sync::Mutex;

use crate::trace::trace::{TraceEvent, TraceKind};

/// Destination for diagnostic events emitted while collecting and classifying.
///
/// Passed explicitly into every operation so callers decide whether events are
/// dropped, kept in memory, written to a file or forwarded to `tracing`.
pub trait DiagnosticSink {
    fn record(&self, event: TraceEvent);
}

/// Drops every event.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: TraceEvent) {}
}

/// Keeps events in memory, mostly for tests.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<TraceEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn events_of(&self, kind: TraceKind) -> Vec<TraceEvent> {
        self.events().into_iter().filter(|e| e.kind == kind).collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: TraceEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

/// Forwards events to the `tracing` subscriber installed by the binary.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: TraceEvent) {
        tracing::debug!(
            stage = ?event.stage,
            kind = ?event.kind,
            hint = event.hint.as_deref().unwrap_or(""),
            field = event.field.as_deref().unwrap_or(""),
            detail = event.detail.as_deref().unwrap_or(""),
            "autofill diagnostic"
        );
    }
}

/// Fans one event out to several sinks.
pub struct TeeSink<'a> {
    sinks: Vec<&'a dyn DiagnosticSink>,
}

impl<'a> TeeSink<'a> {
    pub fn new(sinks: Vec<&'a dyn DiagnosticSink>) -> Self {
        Self { sinks }
    }
}

impl DiagnosticSink for TeeSink<'_> {
    fn record(&self, event: TraceEvent) {
        for sink in &self.sinks {
            sink.record(event.clone());
        }
    }
}
