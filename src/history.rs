use std::{collections::VecDeque, time::Instant};

use crate::types::{Letter, LetterResult};

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub letter: Letter,
    pub timestamp: Instant,
    pub landmarks: Option<Vec<(f32, f32)>>,
}

/// Recently recognised letters, oldest first.
///
/// A result is only recorded when it carries a letter that differs from the
/// current one, so holding a sign across many frames yields a single entry.
#[derive(Debug)]
pub struct LetterHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    current: Option<Letter>,
}

impl LetterHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            current: None,
        }
    }

    pub fn record(&mut self, result: &LetterResult) -> bool {
        let Some(letter) = result.classification.letter() else {
            return false;
        };
        if self.current == Some(letter) {
            return false;
        }

        self.current = Some(letter);
        self.entries.push_back(HistoryEntry {
            letter,
            timestamp: result.timestamp,
            landmarks: result.landmarks.clone(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        log::info!("new letter recognised: {letter}");
        true
    }

    pub fn current(&self) -> Option<Letter> {
        self.current
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn letters(&self) -> String {
        self.entries.iter().map(|e| e.letter.as_char()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops recorded entries. The current letter is kept, so a sign still
    /// being held is not recorded again.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LetterHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
