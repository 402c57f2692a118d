use axum::{middleware, response::IntoResponse, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use rand::Rng;
use serde_json::json;

use crate::{
    config::config,
    errors::{handle_panic, on_error},
    notes::NoteStore,
    state::AppState,
};

pub struct AppParams<R>
where
    R: FnOnce(AppState) -> Router,
{
    pub notes: NoteStore,
    pub router: R,
}

pub fn create<R>(AppParams { notes, router }: AppParams<R>) -> Router
where
    R: FnOnce(AppState) -> Router,
{
    let state = AppState { notes };

    Router::new()
        .route("/__version__", get(version))
        .route("/__heartbeat__", get(heartbeat))
        .route("/__lbheartbeat__", get(lbheartbeat))
        .merge(router(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(on_error))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

async fn version() -> impl IntoResponse {
    let config = &config();
    Json(json!({
        "source" : config.source,
        "version": config.version,
        "commit" : config.git_commit,
        "build"  : config.pipeline_id
    }))
}

async fn heartbeat() -> impl IntoResponse {
    let mut rng = rand::thread_rng();
    let random: u32 = rng.gen_range(0..=10000);

    Json(json!({
        "status" : "ok",
        "random": random,
    }))
}

async fn lbheartbeat() -> impl IntoResponse {
    ""
}
