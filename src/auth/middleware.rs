use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::session::Session;
use super::shield::ShieldDecision;
use crate::web::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Path where unauthenticated requests are sent.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Paths that bypass the session/shield gate: the API, static assets,
/// the sign-in page itself, and the favicon.
static EXCLUDED_ROUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?:api|assets|static|sign-in)(?:/|$)|^/favicon\.ico$")
        .expect("excluded-routes pattern is valid")
});

/// Whether `path` bypasses the authentication gate.
#[must_use]
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_ROUTES.is_match(path)
}

/// Extract the session token from the request's cookie header.
fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("cookie")
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(String::from)
            })
        })
}

/// Gate every matched request behind a valid session, then the shield.
///
/// No session (or an expired one) redirects to the sign-in page. A live
/// shield deny returns 403. Excluded routes pass straight through.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if is_excluded(path) {
        return next.run(request).await;
    }

    let session = match session_token(request.headers()) {
        Some(token) => state.sessions.get(&token).await,
        None => None,
    };
    if session.is_none() {
        debug!(path = %path, "no valid session, redirecting to sign-in");
        return Redirect::to(SIGN_IN_PATH).into_response();
    }

    let decision = state.shield.evaluate(request.headers()).await;
    match decision {
        ShieldDecision::Deny { reason } => {
            warn!(path = %path, reason = %reason, "shield denied request");
            (StatusCode::FORBIDDEN, "Request blocked").into_response()
        }
        ShieldDecision::Allow => next.run(request).await,
    }
}

/// Current session (if any), for handlers that render differently for
/// signed-in users. The gating itself is [`require_session`]'s job.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let Some(token) = session_token(&parts.headers) else {
            return Ok(MaybeUser(None));
        };

        Ok(MaybeUser(state.sessions.get(&token).await))
    }
}
