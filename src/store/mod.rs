//! In-memory reading history.
//!
//! Holds the server-confirmed entries from the last successful poll plus any
//! locally-synthesized speculative entries that no poll has superseded yet.
//! Always ordered newest-first.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::classify::{classify, NormalRanges};
use crate::models::entry::new_local_id;
use crate::models::{Entry, Provenance, Reading};

pub struct ReadingStore {
    ranges: NormalRanges,
    entries: Vec<Entry>,
}

impl ReadingStore {
    pub fn new(ranges: NormalRanges) -> Self {
        Self {
            ranges,
            entries: Vec::new(),
        }
    }

    pub fn ranges(&self) -> &NormalRanges {
        &self.ranges
    }

    /// Replace the confirmed subset wholesale with the latest fetched set.
    ///
    /// The previous confirmed entries are discarded, never diffed; the remote
    /// store is the source of truth. Speculative entries survive unless some
    /// confirmed entry carries an equal-or-later timestamp, in which case the
    /// poll is assumed to have reflected the user action and the speculative
    /// entry is dropped. Idempotent for a given input set.
    pub fn replace_confirmed(&mut self, confirmed: Vec<Entry>) -> &[Entry] {
        let newest_confirmed = confirmed.iter().map(|e| e.created_at).max();

        let mut merged: Vec<Entry> = self
            .entries
            .drain(..)
            .filter(|e| e.is_speculative())
            .filter(|e| match newest_confirmed {
                Some(newest) => e.created_at > newest,
                None => true,
            })
            .collect();

        let mut seen_ids = HashSet::with_capacity(confirmed.len());
        for mut entry in confirmed {
            // No two history rows may share a server id
            if !seen_ids.insert(entry.id.clone()) {
                continue;
            }
            entry.provenance = Provenance::Confirmed;
            merged.push(entry);
        }

        merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.entries = merged;
        &self.entries
    }

    /// Classify and insert a locally-created reading at the front of history.
    ///
    /// The entry gets a fresh id in the reserved local namespace, so it can
    /// never collide with a server id. Ordering stays newest-first by
    /// timestamp; on a timestamp tie the new entry sits in front.
    pub fn add_speculative(&mut self, reading: Reading, now: DateTime<Utc>) -> Entry {
        let entry = Entry {
            id: new_local_id(),
            created_at: now,
            states: classify(&self.ranges, &reading),
            sensor_readings: reading,
            provenance: Provenance::Speculative,
        };

        self.entries.insert(0, entry.clone());
        // Stable sort: the freshly-inserted entry stays ahead of equal timestamps
        self.entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entry
    }

    /// Current ordered history. Mutations are atomic with respect to this view.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
