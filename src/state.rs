use axum::extract::FromRef;

use crate::notes::NoteStore;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub notes: NoteStore,
}
