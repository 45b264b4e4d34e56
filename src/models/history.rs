//! Per-station reading history

use serde::Serialize;
use uuid::Uuid;

use super::Reading;
use crate::summary::{self, Summary};

/// Readings of one station in insertion order.
///
/// Insertion order is not timestamp order: back-dated manual reports land at the end. Use
/// [`ReadingHistory::latest`] rather than the last element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadingHistory(Vec<Reading>);

impl ReadingHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: Reading) {
        self.0.push(reading);
    }

    /// Remove the reading with `id`, wherever it sits
    pub fn remove(&mut self, id: Uuid) -> Option<Reading> {
        let index = self.0.iter().position(|r| r.id == id)?;
        Some(self.0.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Reading> {
        self.0.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reading with the greatest timestamp
    #[must_use]
    pub fn latest(&self) -> Option<&Reading> {
        summary::latest(&self.0)
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        summary::summarize(&self.0)
    }

    /// Readings sorted newest first; equal timestamps keep insertion order
    #[must_use]
    pub fn newest_first(&self) -> Vec<&Reading> {
        let mut readings: Vec<&Reading> = self.0.iter().collect();
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        readings
    }
}

impl From<Vec<Reading>> for ReadingHistory {
    fn from(readings: Vec<Reading>) -> Self {
        Self(readings)
    }
}
