use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Note;

pub const SEED_NOTE_COUNT: usize = 10;

/// In-memory note storage, shared by every request handler for the lifetime
/// of the process.
///
/// Cloning is cheap: clones are handles onto the same collection. Reads run
/// concurrently, mutations are exclusive, and every operation holds the lock
/// for the whole of its body, so readers always observe a complete snapshot.
#[derive(Clone, Default)]
pub struct NoteStore {
    notes: Arc<RwLock<IndexMap<Uuid, Note>>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample notes a fresh process serves.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let notes = (1..=SEED_NOTE_COUNT)
            .map(|n| {
                let note = Note::new(
                    Uuid::new_v4(),
                    format!("Title {n}"),
                    format!("Lorem {n}\nipsum {n}\ndolor {n}\nsit {n} amet"),
                    now,
                    now,
                );
                (note.id, note)
            })
            .collect();

        Self {
            notes: Arc::new(RwLock::new(notes)),
        }
    }

    /// Returns the note with the given id, if any.
    pub async fn get(&self, note_id: Uuid) -> Option<Note> {
        self.notes.read().await.get(&note_id).cloned()
    }

    /// Returns the notes created inside the inclusive range
    /// `[min_creation, max_creation]`, newest first, skipping `offset`
    /// matches and returning at most `limit` (`usize::MAX` for unbounded).
    ///
    /// An inverted range or an offset beyond the match count yields an empty
    /// vector rather than an error.
    pub async fn find(
        &self,
        min_creation: DateTime<Utc>,
        max_creation: DateTime<Utc>,
        offset: usize,
        limit: usize,
    ) -> Vec<Note> {
        let notes = self.notes.read().await;

        let mut matching: Vec<&Note> = notes
            .values()
            .filter(|note| note.creation_time >= min_creation && note.creation_time <= max_creation)
            .collect();

        // Stable sort: notes sharing a creation time stay in insertion order.
        matching.sort_by(|a, b| b.creation_time.cmp(&a.creation_time));

        matching.into_iter().skip(offset).take(limit).cloned().collect()
    }

    /// Inserts a caller-constructed note. Fails with `false` when a note
    /// with the same id is already present, leaving the store unchanged.
    pub async fn add(&self, note: Note) -> bool {
        let mut notes = self.notes.write().await;

        if notes.contains_key(&note.id) {
            return false;
        }

        notes.insert(note.id, note);
        true
    }

    /// Overwrites the title and message of the note carrying the same id,
    /// stamping its last-modified time. The incoming note's timestamps are
    /// ignored. Fails with `false` when the id is unknown.
    pub async fn update(&self, note: Note) -> bool {
        let mut notes = self.notes.write().await;

        match notes.get_mut(&note.id) {
            Some(existing) => {
                existing.update(note.title, note.message);
                true
            }
            None => false,
        }
    }

    /// Removes the note with the given id. Fails with `false` when the id
    /// is unknown.
    pub async fn delete(&self, note_id: Uuid) -> bool {
        // shift_remove keeps the remaining notes in insertion order.
        self.notes.write().await.shift_remove(&note_id).is_some()
    }
}
