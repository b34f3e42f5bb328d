//! In-memory [`EntryRepository`] used by tests and throwaway sessions.

use super::{Entry, EntryFilter, EntryRepository, NewEntry};
use crate::errors::{AppResult, DatabaseError};
use std::cmp::Reverse;
use tracing::debug;

/// Keeps entries in a `Vec`, mirroring the ordering rules of the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryEntryRepository {
    entries: Vec<Entry>,
    next_id: i64,
}

impl MemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut entries: Vec<Entry>) -> Vec<Entry> {
        entries.sort_by_key(|e| Reverse((e.date, e.id)));
        entries
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DatabaseError::NotFound(format!("Entry with id {} not found", id)).into())
    }
}

impl EntryRepository for MemoryEntryRepository {
    fn create(&mut self, entry: NewEntry) -> AppResult<Entry> {
        self.next_id += 1;
        let entry = entry.with_id(self.next_id);
        debug!("Created in-memory entry {}", entry.id);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn all(&self) -> AppResult<Vec<Entry>> {
        Ok(Self::sorted(self.entries.clone()))
    }

    fn filter(&self, filter: &EntryFilter) -> AppResult<Vec<Entry>> {
        let matching = self
            .entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Ok(Self::sorted(matching))
    }

    fn update(&mut self, entry: &Entry) -> AppResult<()> {
        let idx = self.position(entry.id)?;
        self.entries[idx] = entry.clone();
        Ok(())
    }

    fn delete(&mut self, entry: &Entry) -> AppResult<()> {
        let idx = self.position(entry.id)?;
        self.entries.remove(idx);
        Ok(())
    }
}
