use crate::table::{FrequencyTable, WordRecord};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that the weakest candidate sits on top: lower count
/// first, then later first appearance.
#[derive(Clone, Copy)]
struct Candidate<'a> {
    seen: usize,
    record: &'a WordRecord,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .record
            .count
            .cmp(&self.record.count)
            .then_with(|| self.seen.cmp(&other.seen))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Returns the `n` most frequent records, highest count first.
///
/// `n` is clamped to the number of distinct words. Equal counts keep the
/// order in which the words first appeared, so the result matches a stable
/// descending sort over the table's enumeration.
pub fn select_top(table: &FrequencyTable, n: usize) -> Vec<&WordRecord> {
    let n = n.min(table.unique_words());
    if n == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(n + 1);
    for (seen, record) in table.records().enumerate() {
        heap.push(Candidate { seen, record });
        if heap.len() > n {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|candidate| candidate.record)
        .collect()
}
