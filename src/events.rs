use std::cmp::Ordering;

use crate::wire::Wire;

/// Phase of a sweep event.
///
/// The derived variant order is a correctness invariant: at one X
/// stop, every horizontal wire starting there is added before any
/// vertical query runs, and a wire ending there is still present for
/// those queries and only removed before the sweep advances. A
/// vertical wire at X therefore sees exactly the horizontal wires
/// whose closed X-span contains X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum EventPhase {
    Add,
    Query,
    Delete,
}

/// A stop of the sweep line: one index mutation or range query at `x`.
#[derive(Debug, Clone)]
pub(crate) struct Event {
    pub(crate) x: f64,
    pub(crate) phase: EventPhase,
    pub(crate) wire: Wire,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.phase == other.phase && self.wire.id() == other.wire.id()
    }
}

impl Eq for Event {}

/// Events order by `(x, phase)`, with the wire's creation-order id as
/// a final tiebreak so the schedule is fully deterministic.
impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) => Some(
                self.phase
                    .cmp(&other.phase)
                    .then_with(|| self.wire.id().cmp(&other.wire.id())),
            ),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .expect("event coordinates are finite")
    }
}
