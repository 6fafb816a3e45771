//! Structured trace of a COI computation.
//!
//! The engine narrates its per-pair decisions through a [TraceSink] instead
//! of logging, so the computation stays a pure function: tests and the CLI
//! collect events into a `Vec`, everything else passes [NoTrace].

use serde::Serialize;

use crate::matcher::MatchedBy;

///
/// One decision made while cross-referencing the two ancestor lists
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A (sire entry, dam entry) pair was tested for identity.
    Compared {
        sire_path: String,
        dam_path: String,
        matched_by: Option<MatchedBy>,
    },

    /// A matching pair's path key was already processed; skipped. Distinct
    /// paths make this logically unreachable, the engine defends anyway.
    DuplicatePairSkipped { sire_path: String, dam_path: String },

    /// A matching pair was accepted and its contribution added.
    MatchRecorded {
        sire_path: String,
        dam_path: String,
        n1: u8,
        n2: u8,
        contribution: f64,
    },
}

pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards every event; the default for untraced runs.
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Adapter for callback-style consumers.
pub struct FnTrace<F: FnMut(TraceEvent)>(pub F);

impl<F: FnMut(TraceEvent)> TraceSink for FnTrace<F> {
    fn record(&mut self, event: TraceEvent) {
        (self.0)(event);
    }
}
