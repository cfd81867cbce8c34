use std::io::{self, Write};

use crate::wire::Wire;

/// The crossings found by one verification run.
///
/// Each pair's names are stored in lexicographic order, so a pair's
/// spelling does not depend on which wire the sweep encountered
/// first. Pairs themselves stay in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultSet {
    crossings: Vec<(String, String)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `a` and `b` cross.
    pub(crate) fn record(&mut self, a: &Wire, b: &Wire) {
        let (first, second) = if a.name() <= b.name() { (a, b) } else { (b, a) };
        self.crossings
            .push((first.name().to_owned(), second.name().to_owned()));
    }

    pub fn count(&self) -> usize {
        self.crossings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }

    /// Crossing pairs in discovery order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.crossings
    }

    /// Write one `name1 name2` line per crossing.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        for (a, b) in &self.crossings {
            writeln!(out, "{} {}", a, b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireId;

    fn wire(id: usize, name: &str) -> Wire {
        Wire::new(WireId(id), name, 0., id as f64, 10., id as f64).unwrap()
    }

    #[test]
    fn pairs_are_ordered_within_but_not_across() {
        let (b, a, c) = (wire(0, "b"), wire(1, "a"), wire(2, "c"));
        let mut results = ResultSet::new();
        results.record(&b, &a);
        results.record(&c, &b);

        assert_eq!(results.count(), 2);
        assert_eq!(
            results.pairs(),
            [
                ("a".to_owned(), "b".to_owned()),
                ("b".to_owned(), "c".to_owned()),
            ]
        );
    }

    #[test]
    fn writes_one_line_per_crossing() {
        let mut results = ResultSet::new();
        results.record(&wire(0, "v"), &wire(1, "h"));

        let mut out = Vec::new();
        results.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "h v\n");
    }
}
