use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::events::{Event, EventPhase};
use crate::index::{RangeIndex, SweepKey};
use crate::layer::WireLayer;
use crate::results::ResultSet;
use crate::trace::{NoTrace, TraceEvent, TraceSink};
use crate::wire::Wire;

/// Checks a wire layer for crossing wires.
///
/// Sweeps a conceptual vertical line left to right over the layer,
/// holding the horizontal wires currently cut by the line in a
/// [`RangeIndex`] keyed by Y. Each vertical wire triggers one
/// inclusive range query over its Y span, and every candidate is
/// re-tested with the full intersection predicate. This runs in
/// O((n + k) log n) for n wires and k crossings, against O(n^2) for
/// testing every pair.
///
/// A verifier is single-use: the sweep consumes its event schedule
/// and index, so a second request for either output fails with
/// [`Error::AlreadyConsumed`]. Re-run by building a fresh verifier
/// over the same (immutable) layer.
///
/// The optional [`TraceSink`] observes index mutations, range
/// queries, sweep stops and crossings; it never affects the result.
pub struct CrossingVerifier<S: TraceSink = NoTrace> {
    events: Vec<Event>,
    index: RangeIndex,
    sink: S,
    performed: bool,
}

impl CrossingVerifier<NoTrace> {
    pub fn new(layer: &WireLayer) -> Self {
        Self::with_sink(layer, NoTrace)
    }
}

impl<S: TraceSink> CrossingVerifier<S> {
    /// Build a verifier reporting its steps to `sink`.
    pub fn with_sink(layer: &WireLayer, sink: S) -> Self {
        let mut events = Vec::with_capacity(2 * layer.len());
        for wire in layer.wires() {
            if wire.is_horizontal() {
                events.push(Event {
                    x: wire.x1(),
                    phase: EventPhase::Add,
                    wire: wire.clone(),
                });
                events.push(Event {
                    x: wire.x2(),
                    phase: EventPhase::Delete,
                    wire: wire.clone(),
                });
            } else {
                events.push(Event {
                    x: wire.x1(),
                    phase: EventPhase::Query,
                    wire: wire.clone(),
                });
            }
        }
        events.sort_unstable();

        CrossingVerifier {
            events,
            index: RangeIndex::new(),
            sink,
            performed: false,
        }
    }

    /// Number of pairs of wires that cross each other.
    pub fn count_crossings(&mut self) -> Result<usize> {
        self.begin()?;
        self.compute(true).map(|(count, _)| count)
    }

    /// The pairs of wires that cross each other, in discovery order.
    pub fn wire_crossings(&mut self) -> Result<ResultSet> {
        self.begin()?;
        self.compute(false).map(|(_, results)| results)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recover the sink, typically to inspect a collected trace.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn begin(&mut self) -> Result<()> {
        if self.performed {
            return Err(Error::AlreadyConsumed);
        }
        self.performed = true;
        Ok(())
    }

    fn compute(&mut self, count_only: bool) -> Result<(usize, ResultSet)> {
        debug!("sweeping {} events", self.events.len());
        let events = std::mem::take(&mut self.events);
        let mut count = 0;
        let mut results = ResultSet::new();

        for event in &events {
            let wire = &event.wire;
            match event.phase {
                EventPhase::Add => {
                    trace!("add {} at x = {}", wire.name(), event.x);
                    if self.sink.enabled() {
                        self.sink.record(TraceEvent::Add {
                            id: wire.name().to_owned(),
                        });
                    }
                    self.index
                        .insert(SweepKey::entry(wire.y1(), wire.id()), wire.clone())?;
                }
                EventPhase::Delete => {
                    trace!("delete {} at x = {}", wire.name(), event.x);
                    if self.sink.enabled() {
                        self.sink.record(TraceEvent::Delete {
                            id: wire.name().to_owned(),
                        });
                    }
                    self.index
                        .remove(&SweepKey::entry(wire.y1(), wire.id()))?;
                }
                EventPhase::Query => {
                    trace!("query {} at x = {}", wire.name(), event.x);
                    if self.sink.enabled() {
                        self.sink.record(TraceEvent::Sweep { x: event.x });
                    }

                    let lo = SweepKey::low(wire.y1());
                    let hi = SweepKey::high(wire.y2());
                    let candidates: SmallVec<[&Wire; 8]> = self.index.range(lo, hi).collect();
                    if self.sink.enabled() {
                        self.sink.record(if count_only {
                            TraceEvent::Count {
                                from: wire.y1(),
                                to: wire.y2(),
                                count: candidates.len(),
                            }
                        } else {
                            TraceEvent::List {
                                from: wire.y1(),
                                to: wire.y2(),
                                ids: candidates.iter().map(|w| w.name().to_owned()).collect(),
                            }
                        });
                    }

                    for candidate in candidates {
                        // The range scan filters by Y only; X containment
                        // is settled by the full intersection test.
                        if !wire.intersects(candidate) {
                            continue;
                        }
                        if count_only {
                            count += 1;
                        } else {
                            if self.sink.enabled() {
                                self.sink.record(TraceEvent::Crossing {
                                    id1: wire.name().to_owned(),
                                    id2: candidate.name().to_owned(),
                                });
                            }
                            results.record(wire, candidate);
                        }
                    }
                }
            }
        }

        debug_assert!(self.index.is_empty(), "active index not drained after sweep");
        if count_only {
            debug!("sweep found {} crossings", count);
            Ok((count, results))
        } else {
            debug!("sweep found {} crossings", results.count());
            Ok((results.count(), results))
        }
    }
}
