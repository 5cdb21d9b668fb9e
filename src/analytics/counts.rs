//! Tallies and count-ranked mappings.
//!
//! Several analytics outputs are "name → count, sorted by count descending".
//! [`RankedCounts`] keeps that order explicit: entries are ranked by count,
//! and ties keep the order in which names were first seen. It serializes as a
//! JSON object whose keys appear in rank order.

use std::collections::{BTreeSet, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Message;

/// Incremental counter that remembers first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the count for `key`.
    pub fn add(&mut self, key: &str, n: usize) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), n));
            }
        }
    }

    /// Adds one to the count for `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranks the tally by count, descending. The sort is stable.
    pub fn into_ranked(self) -> RankedCounts {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        RankedCounts(entries)
    }
}

/// Name → count pairs ranked by count, descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCounts(Vec<(String, usize)>);

impl RankedCounts {
    /// Returns the count for `name`, if present.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == name).map(|&(_, v)| v)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, v)| v).sum()
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns at most `n` highest-ranked entries.
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.0[..n.min(self.0.len())]
    }

    /// Returns all entries in rank order.
    pub fn as_slice(&self) -> &[(String, usize)] {
        &self.0
    }
}

impl Serialize for RankedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// Counts messages per sender.
pub fn sender_counts(messages: &[Message]) -> RankedCounts {
    let mut tally = Tally::new();
    for msg in messages {
        tally.increment(&msg.sender);
    }
    tally.into_ranked()
}

/// Returns the distinct senders, sorted ascending.
pub fn roster(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
