use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{config::config, state::AppState, Error, Result};

use super::{FindNotesResponse, Note, NoteStore};

#[derive(Debug, Deserialize)]
struct FindNotesQuery {
    min_creation: Option<DateTime<Utc>>,
    max_creation: Option<DateTime<Utc>>,
    offset: Option<usize>,
    limit: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/notes", get(find_notes).post(create_note).put(update_note))
        .route("/api/v1/notes/{note_id}", get(get_note).delete(delete_note))
        .with_state(state)
}

async fn find_notes(
    State(store): State<NoteStore>,
    Query(query): Query<FindNotesQuery>,
) -> Json<FindNotesResponse> {
    let now = Utc::now();
    let min_creation = query
        .min_creation
        .unwrap_or_else(|| now - Duration::days(config().list_window_days));
    let max_creation = query.max_creation.unwrap_or(now);
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(config().list_limit);

    let results = store.find(min_creation, max_creation, offset, limit).await;

    Json(FindNotesResponse { results })
}

async fn get_note(State(store): State<NoteStore>, Path(note_id): Path<Uuid>) -> Result<Json<Note>> {
    let note = store
        .get(note_id)
        .await
        .ok_or_else(|| Error::NotFound("Note not found".into()))?;

    Ok(Json(note))
}

async fn create_note(State(store): State<NoteStore>, Json(note): Json<Note>) -> Result<(StatusCode, Json<Note>)> {
    let created = note.clone();

    if !store.add(note).await {
        return Err(Error::Conflict("A note with this id already exists".into()));
    }

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_note(State(store): State<NoteStore>, Json(note): Json<Note>) -> Result<StatusCode> {
    if !store.update(note).await {
        return Err(Error::NotFound("Note not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_note(State(store): State<NoteStore>, Path(note_id): Path<Uuid>) -> Result<StatusCode> {
    if !store.delete(note_id).await {
        return Err(Error::NotFound("Note not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}
