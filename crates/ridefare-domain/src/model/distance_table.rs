//! Static origin/destination distances used when geocoding fails

use serde::{Deserialize, Serialize};

/// Known distance between two named places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

impl DistanceEntry {
    /// True if the entry names both places, in either direction.
    ///
    /// Matching is a case-insensitive substring test so that
    /// "pushpakunj, kankaria" matches an entry for "kankaria".
    fn matches(&self, origin: &str, destination: &str) -> bool {
        let a = self.origin.to_lowercase();
        let b = self.destination.to_lowercase();
        (origin.contains(&a) && destination.contains(&b))
            || (origin.contains(&b) && destination.contains(&a))
    }
}

/// Ordered fallback table; the first matching entry wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackDistanceTable {
    entries: Vec<DistanceEntry>,
}

impl FallbackDistanceTable {
    pub fn new(entries: Vec<DistanceEntry>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, origin: &str, destination: &str) -> Option<f64> {
        let origin = origin.to_lowercase();
        let destination = destination.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.matches(&origin, &destination))
            .map(|e| e.distance_km)
    }

    /// Append entries after the existing ones
    pub fn extend(&mut self, entries: impl IntoIterator<Item = DistanceEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[DistanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
