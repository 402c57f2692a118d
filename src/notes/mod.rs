mod model;
mod routes;
mod store;

pub use model::{FindNotesResponse, Note};
pub use store::NoteStore;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    routes::router(state)
}
