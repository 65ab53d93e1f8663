use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::info;

use crate::api::{APIResponse, KeymapQuery, KeymapResponse};
use crate::dom::PageDom;
use crate::enhance::{self, KeyEvent};
use crate::pages::theme;
use crate::site::Site;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<RwLock<Site>>,
}

pub async fn health() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(APIResponse::new("ok"))
}

fn client_descriptor(headers: &HeaderMap) -> &str {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Run the enhancement pass and serialize the page. Every HTML
/// response carries an ETag over the enhanced body, since the same
/// path renders differently per device class.
fn serve_page(dom: &mut PageDom, headers: &HeaderMap, current_nav: &str) -> Response {
    let outcome = enhance::enhance(dom, client_descriptor(headers), Some(current_nav));
    tracing::debug!("enhanced page for {:?}", outcome.device);

    let html = dom.render();
    let etag = format!("\"{}\"", hex::encode(Sha256::digest(html.as_bytes())));
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::ETAG, etag),
        ],
        html,
    )
        .into_response()
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let site = state.site.read().await;
    let (mut dom, nav) = theme::index_page(&site);
    serve_page(&mut dom, &headers, nav)
}

pub async fn archive(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let site = state.site.read().await;
    let (mut dom, nav) = theme::archive_page(&site);
    serve_page(&mut dom, &headers, nav)
}

pub async fn about(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let site = state.site.read().await;
    let (mut dom, nav) = theme::about_page(&site);
    serve_page(&mut dom, &headers, nav)
}

pub async fn entry(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let site = state.site.read().await;
    let Some(entry) = site.entry(&slug) else {
        info!("entry not found: {}", slug);
        return (StatusCode::NOT_FOUND, Json(APIResponse::new("entry not found"))).into_response();
    };
    let (mut dom, nav) = theme::entry_page(&site, entry);
    serve_page(&mut dom, &headers, nav)
}

/// Resolve one key event against the entry page's enhanced bindings.
/// 204 means "no navigation": unknown key, guarded target, missing
/// neighbor, or a mobile client (which never gets bindings).
pub async fn keymap(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<KeymapQuery>,
    headers: HeaderMap,
) -> Response {
    let site = state.site.read().await;
    let Some(entry) = site.entry(&slug) else {
        return (StatusCode::NOT_FOUND, Json(APIResponse::new("entry not found"))).into_response();
    };

    let (mut dom, nav) = theme::entry_page(&site, entry);
    let outcome = enhance::enhance(&mut dom, client_descriptor(&headers), Some(nav));

    let event = KeyEvent::new(query.key, query.target.as_deref().unwrap_or("body"));
    let href = outcome
        .key_bindings
        .as_ref()
        .and_then(|bindings| bindings.resolve(&event));

    match href {
        Some(href) => {
            (StatusCode::OK, Json(KeymapResponse { href: href.to_string() })).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
