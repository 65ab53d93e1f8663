use axum::{Router, routing::get};

use super::handler;
use super::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/archive", get(handler::archive))
        .route("/about", get(handler::about))
        .route("/entries/:slug", get(handler::entry))
        .route("/entries/:slug/keymap", get(handler::keymap))
}
