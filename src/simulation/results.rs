// src/simulation/results.rs
use std::collections::HashMap;
use std::fmt;

/// The outcome frequencies of a sampling run: measured basis-state label to
/// occurrence count. Only labels that actually occurred have entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: HashMap<u64, u64>,
}

impl Histogram {
    /// Creates a new, empty histogram. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    /// Records one observation of a basis label. (Internal visibility)
    pub(crate) fn record(&mut self, label: u64) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    /// The occurrence count of a specific label; 0 if it never occurred.
    pub fn count(&self, label: u64) -> u64 {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Returns a reference to the underlying label-to-count map.
    pub fn counts(&self) -> &HashMap<u64, u64> {
        &self.counts
    }

    /// The number of distinct labels observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total number of shots recorded across all labels.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The most frequently observed label and its count; ties resolve to the
    /// smallest label. `None` for an empty histogram.
    pub fn most_frequent(&self) -> Option<(u64, u64)> {
        self.counts
            .iter()
            .map(|(&label, &count)| (label, count))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Histogram:")?;
        if self.counts.is_empty() {
            writeln!(f, "  (no shots recorded)")?;
        } else {
            // Sort by label for consistent and readable output
            let mut sorted: Vec<_> = self.counts.iter().collect();
            sorted.sort_by_key(|(label, _)| **label);
            for (label, count) in sorted {
                writeln!(f, "  {}: {}", label, count)?;
            }
        }
        Ok(())
    }
}
