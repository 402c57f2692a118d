use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A personal note.
///
/// `id` and `creation_time` are fixed for the lifetime of the note; `title`,
/// `message` and `last_modified_time` only ever change together, through
/// [`Note::update`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub creation_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl Note {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        message: impl Into<String>,
        creation_time: DateTime<Utc>,
        last_modified_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            creation_time,
            last_modified_time,
        }
    }

    /// Overwrites the note contents and stamps `last_modified_time`.
    pub fn update(&mut self, title: String, message: String) {
        self.title = title;
        self.message = message;
        self.last_modified_time = Utc::now();
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FindNotesResponse {
    pub results: Vec<Note>,
}
