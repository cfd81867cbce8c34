use serde::Serialize;

/// One structured observation of the verifier at work.
///
/// The stream interleaves index mutations, range queries, sweep-line
/// stops and recorded crossings in execution order; an external
/// visualizer replays it step by step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceEvent {
    /// A horizontal wire entered the active index.
    Add { id: String },
    /// A horizontal wire left the active index.
    Delete { id: String },
    /// A range list over `[from, to]` and the candidates it matched.
    List {
        from: f64,
        to: f64,
        ids: Vec<String>,
    },
    /// A range count over `[from, to]` (count-only runs).
    Count { from: f64, to: f64, count: usize },
    /// The sweep line advanced to `x`.
    Sweep { x: f64 },
    /// A crossing was recorded, query wire first.
    Crossing { id1: String, id2: String },
}

/// Observer hooks for a verification run.
///
/// Invoked synchronously at every index mutation, range query, sweep
/// advance and recorded crossing. Tracing is pure observation: a sink
/// can never alter the algorithm's results.
pub trait TraceSink {
    /// Whether the verifier should bother materializing events.
    fn enabled(&self) -> bool {
        true
    }

    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards everything; the default for untraced runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that retains every event in order, for the visualizer.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
