use std::cmp::Ordering;
use std::collections::btree_map::{BTreeMap, Entry};
use std::ops::Bound;

use crate::error::{Error, Result};
use crate::wire::{Wire, WireId};

/// Secondary component of a [`SweepKey`].
///
/// Real index entries carry the wire's creation-order id. `Low` and
/// `High` are sentinel bounds that sort below and above every entry
/// with the same `y`; they only ever appear as query bounds and are
/// never inserted. The derived variant order encodes exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tiebreak {
    Low,
    Entry(WireId),
    High,
}

/// Ordering key of the active-wire index.
///
/// Keys order by `y` first, then by tiebreak; equality requires both.
/// Coordinates are validated finite at wire construction, so the
/// `Ord` impl can safely unwrap `partial_cmp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepKey {
    pub y: f64,
    pub tiebreak: Tiebreak,
}

impl SweepKey {
    /// Key under which a horizontal wire is held while active.
    pub fn entry(y: f64, id: WireId) -> Self {
        SweepKey {
            y,
            tiebreak: Tiebreak::Entry(id),
        }
    }

    /// Inclusive lower bound of a range query at `y`.
    pub fn low(y: f64) -> Self {
        SweepKey {
            y,
            tiebreak: Tiebreak::Low,
        }
    }

    /// Inclusive upper bound of a range query at `y`.
    pub fn high(y: f64) -> Self {
        SweepKey {
            y,
            tiebreak: Tiebreak::High,
        }
    }
}

impl Eq for SweepKey {}

impl PartialOrd for SweepKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.y.partial_cmp(&other.y) {
            Some(Ordering::Equal) => self.tiebreak.partial_cmp(&other.tiebreak),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl Ord for SweepKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .expect("sweep keys hold finite coordinates")
    }
}

/// Ordered index over the horizontal wires cut by the sweep line.
///
/// Backed by a balanced ordered tree, giving O(log n) insert, delete
/// and range-start lookup; this is the performance-critical path of
/// the sweep. Only the ordering and tie-break contract is part of the
/// interface, the backing structure is not.
#[derive(Debug, Default)]
pub struct RangeIndex {
    tree: BTreeMap<SweepKey, Wire>,
}

impl RangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Insert a wire under `key`. An equal key already being present
    /// is an invariant breach and fails with
    /// [`Error::DuplicateKey`].
    pub fn insert(&mut self, key: SweepKey, wire: Wire) -> Result<()> {
        match self.tree.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateKey { key }),
            Entry::Vacant(slot) => {
                slot.insert(wire);
                Ok(())
            }
        }
    }

    /// Remove the entry matching `key` by full equality (y and
    /// tiebreak). Absence fails with [`Error::KeyNotFound`].
    pub fn remove(&mut self, key: &SweepKey) -> Result<Wire> {
        self.tree
            .remove(key)
            .ok_or(Error::KeyNotFound { key: *key })
    }

    /// Wires with key in `[lo, hi]`, both bounds inclusive, in
    /// ascending key order.
    pub fn range(&self, lo: SweepKey, hi: SweepKey) -> impl Iterator<Item = &Wire> {
        self.tree
            .range((Bound::Included(lo), Bound::Included(hi)))
            .map(|(_, wire)| wire)
    }

    /// Number of keys in `[lo, hi]`; always consistent with the
    /// length of [`range`](Self::range) over the same bounds.
    pub fn range_count(&self, lo: SweepKey, hi: SweepKey) -> usize {
        self.range(lo, hi).count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn horizontal(id: usize, y: f64) -> Wire {
        Wire::new(WireId(id), format!("w{}", id), 0., y, 10., y).unwrap()
    }

    fn key_of(wire: &Wire) -> SweepKey {
        SweepKey::entry(wire.y1(), wire.id())
    }

    #[test]
    fn key_ordering_breaks_ties_by_id() {
        let a = SweepKey::entry(1., WireId(0));
        let b = SweepKey::entry(1., WireId(1));
        let c = SweepKey::entry(2., WireId(0));
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, SweepKey::entry(1., WireId(0)));
    }

    #[test]
    fn sentinels_bracket_entries_with_equal_y() {
        let lo = SweepKey::low(1.);
        let hi = SweepKey::high(1.);
        let entry = SweepKey::entry(1., WireId(usize::MAX));
        assert!(lo < entry);
        assert!(entry < hi);
    }

    #[test]
    fn insert_remove_and_range() {
        let mut index = RangeIndex::new();
        let wires: Vec<_> = [3., 1., 2., 1.]
            .iter()
            .enumerate()
            .map(|(id, &y)| horizontal(id, y))
            .collect();
        for w in &wires {
            index.insert(key_of(w), w.clone()).unwrap();
        }
        assert_eq!(index.len(), 4);

        // Ascending (y, id) order; both y == 1 wires are in range.
        let names: Vec<_> = index
            .range(SweepKey::low(1.), SweepKey::high(2.))
            .map(|w| w.name().to_owned())
            .collect();
        assert_eq!(names, ["w1", "w3", "w2"]);
        assert_eq!(index.range_count(SweepKey::low(1.), SweepKey::high(2.)), 3);

        index.remove(&key_of(&wires[3])).unwrap();
        assert_eq!(index.range_count(SweepKey::low(1.), SweepKey::high(2.)), 2);
    }

    #[test]
    fn duplicate_insert_is_an_error() {
        let mut index = RangeIndex::new();
        let w = horizontal(0, 1.);
        index.insert(key_of(&w), w.clone()).unwrap();
        assert!(matches!(
            index.insert(key_of(&w), w),
            Err(Error::DuplicateKey { .. })
        ));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn removing_an_absent_key_is_an_error() {
        let mut index = RangeIndex::new();
        let present = horizontal(0, 1.);
        index.insert(key_of(&present), present.clone()).unwrap();

        // Same y, different identity: full equality must fail.
        let absent = SweepKey::entry(1., WireId(7));
        assert!(matches!(
            index.remove(&absent),
            Err(Error::KeyNotFound { .. })
        ));
        assert_eq!(index.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i8),
        Remove(usize),
        Query(i8, i8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-8i8..8).prop_map(Op::Insert),
            any::<usize>().prop_map(Op::Remove),
            (-8i8..8, -8i8..8).prop_map(|(a, b)| Op::Query(a, b)),
        ]
    }

    proptest! {
        /// Interleaved inserts, deletes and range queries agree with a
        /// linear scan over the same operation sequence.
        #[test]
        fn range_queries_match_linear_reference(ops in prop::collection::vec(op(), 1..200)) {
            let mut index = RangeIndex::new();
            let mut live: Vec<Wire> = Vec::new();
            let mut next_id = 0usize;

            for op in ops {
                match op {
                    Op::Insert(y) => {
                        let wire = horizontal(next_id, y as f64);
                        next_id += 1;
                        index.insert(key_of(&wire), wire.clone()).unwrap();
                        live.push(wire);
                    }
                    Op::Remove(sel) => {
                        if live.is_empty() {
                            continue;
                        }
                        let wire = live.remove(sel % live.len());
                        index.remove(&key_of(&wire)).unwrap();
                    }
                    Op::Query(a, b) => {
                        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                        let (lo, hi) = (lo as f64, hi as f64);

                        let mut expected: Vec<&Wire> = live
                            .iter()
                            .filter(|w| lo <= w.y1() && w.y1() <= hi)
                            .collect();
                        expected.sort_by_key(|w| key_of(*w));
                        let expected: Vec<_> =
                            expected.iter().map(|w| w.name().to_owned()).collect();

                        let actual: Vec<_> = index
                            .range(SweepKey::low(lo), SweepKey::high(hi))
                            .map(|w| w.name().to_owned())
                            .collect();

                        prop_assert_eq!(&actual, &expected);
                        prop_assert_eq!(
                            index.range_count(SweepKey::low(lo), SweepKey::high(hi)),
                            expected.len()
                        );
                    }
                }
            }
        }
    }
}
