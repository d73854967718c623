use axum::extract::{Query, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Form;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use super::pages;
use super::AppState;
use crate::auth::{MaybeUser, Session, SESSION_COOKIE};
use crate::pagination::page_count;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing))
        .route("/sign-in", get(sign_in_page).post(sign_in_post))
        .route("/sign-out", post(sign_out))
        .route("/api/healthz", get(health))
        .route("/api/items", get(api_items))
}

// ========== HTML Routes ==========

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    page: Option<u32>,
    query: Option<String>,
    filter: Option<String>,
}

/// GET / - Paginated, searchable item listing.
async fn listing(
    State(state): State<AppState>,
    MaybeUser(session): MaybeUser,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<ListingParams>,
) -> Response {
    let query = params.query.unwrap_or_default();
    let filter = params.filter.unwrap_or_default();
    let per_page = state.config.per_page;

    let matches = state.catalog.search(&query, &filter);
    let total_pages = page_count(matches.len(), per_page);

    // Navigation guard: an out-of-range page request navigates nowhere
    // beyond the valid range; the page is clamped before anything renders.
    let page = params.page.unwrap_or(1).clamp(1, total_pages);

    let offset = (page as usize - 1) * per_page;
    let items: Vec<_> = matches.iter().skip(offset).take(per_page).copied().collect();
    let categories = state.catalog.categories();

    let html = pages::render_listing_page(&pages::ListingPage {
        items: &items,
        categories: &categories,
        query: &query,
        filter: &filter,
        current_page: page,
        total_pages,
        total_matches: matches.len(),
        raw_query: raw_query.as_deref().unwrap_or(""),
        session: session.as_ref(),
    });
    Html(html.into_string()).into_response()
}

// ========== Auth Routes ==========

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    username: String,
    password: String,
}

/// GET /sign-in - Show the sign-in form.
async fn sign_in_page(MaybeUser(session): MaybeUser) -> Response {
    // Already signed in: straight back to the listing.
    if session.is_some() {
        return Redirect::to("/").into_response();
    }
    Html(pages::render_sign_in_page(None).into_string()).into_response()
}

/// POST /sign-in - Validate credentials and issue a session cookie.
///
/// Credential checking proper belongs to the external identity provider;
/// this stand-in only rejects blank input.
async fn sign_in_post(State(state): State<AppState>, Form(form): Form<SignInForm>) -> Response {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Html(
            pages::render_sign_in_page(Some("Username and password are required"))
                .into_string(),
        )
        .into_response();
    }

    let session = Session::issue(username, state.config.session_ttl);
    let cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        session.token,
        state.config.session_ttl.as_secs()
    );
    tracing::info!(username = %username, "user signed in");
    state.sessions.insert(session).await;

    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

/// POST /sign-out - Drop the session and clear the cookie.
async fn sign_out(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = cookie_value(&headers, SESSION_COOKIE) {
        state.sessions.remove(&token).await;
    }

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(header::SET_COOKIE, cookie)], Redirect::to("/sign-in")).into_response()
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get("cookie")
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix(name)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(String::from)
            })
        })
}

// ========== API Routes ==========

#[derive(Debug, Deserialize)]
pub struct ApiItemsParams {
    page: Option<u32>,
    per_page: Option<u32>,
    query: Option<String>,
    filter: Option<String>,
}

/// GET /api/items - JSON listing with the same search semantics as the page.
async fn api_items(
    State(state): State<AppState>,
    Query(params): Query<ApiItemsParams>,
) -> Response {
    let query = params.query.unwrap_or_default();
    let filter = params.filter.unwrap_or_default();
    let per_page = params.per_page.unwrap_or(20).clamp(1, 100) as usize;

    let matches = state.catalog.search(&query, &filter);
    let total_pages = page_count(matches.len(), per_page);
    let page = params.page.unwrap_or(1).clamp(1, total_pages);
    let offset = (page as usize - 1) * per_page;
    let items: Vec<_> = matches.iter().skip(offset).take(per_page).collect();

    let response = serde_json::json!({
        "data": items,
        "page": page,
        "per_page": per_page,
        "total_pages": total_pages,
        "count": items.len(),
    });
    Json(response).into_response()
}

// ========== Utility Routes ==========

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
