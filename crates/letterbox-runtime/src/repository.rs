use chrono::{DateTime, Utc};
use letterbox_store::Store;
use letterbox_types::{Letter, LetterInput};

use crate::Result;

/// In-memory ordered collection of letters, newest first.
///
/// Every mutation is persisted before it becomes visible in memory, so a
/// failed save leaves the repository exactly as it was.
pub struct Repository {
    store: Store,
    letters: Vec<Letter>,
}

impl Repository {
    /// Load the persisted collection once at startup
    pub fn open(store: Store) -> Self {
        let letters = store.load();
        tracing::debug!(count = letters.len(), slot = %store.location(), "repository opened");
        Self { store, letters }
    }

    pub fn insert_front(&mut self, input: LetterInput) -> Result<Letter> {
        self.insert_front_at(input, Utc::now())
    }

    /// Stamp `input` with `at`, prepend it and persist the new snapshot.
    pub fn insert_front_at(&mut self, input: LetterInput, at: DateTime<Utc>) -> Result<Letter> {
        let letter = Letter::stamp(input, at);

        let mut next = Vec::with_capacity(self.letters.len() + 1);
        next.push(letter.clone());
        next.extend(self.letters.iter().cloned());

        self.store.save(&next)?;
        self.letters = next;

        tracing::info!(id = %letter.id, title = %letter.title, "letter saved");
        Ok(letter)
    }

    /// Replace the collection with an empty one and persist it.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.save(&[])?;
        let removed = std::mem::take(&mut self.letters).len();

        tracing::info!(removed, "all letters cleared");
        Ok(())
    }

    pub fn all(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
