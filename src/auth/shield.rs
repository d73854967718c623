//! Abuse/bot shield boundary.
//!
//! The shield decides allow/deny for a request after the session check has
//! passed. Its decision logic is opaque to the rest of the application; the
//! built-in heuristic implementation exists so the gating flow is exercisable
//! without an external policy service.

use async_trait::async_trait;
use axum::http::HeaderMap;
use tracing::warn;

/// How a shield's verdict is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldMode {
    /// Deny verdicts block the request.
    Live,
    /// Deny verdicts are logged but the request proceeds.
    DryRun,
}

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShieldDecision {
    Allow,
    Deny { reason: String },
}

/// A policy layer that inspects request headers and decides allow/deny.
#[async_trait]
pub trait Shield: Send + Sync {
    async fn evaluate(&self, headers: &HeaderMap) -> ShieldDecision;
}

/// User-agent substrings treated as automated clients.
const BOT_AGENTS: &[&str] = &[
    "curl",
    "wget",
    "python-requests",
    "go-http-client",
    "scrapy",
];

/// Built-in shield: denies requests with a missing, empty, or known-bot
/// user agent. Deliberately simple; real abuse detection belongs to an
/// external service behind the same trait.
#[derive(Debug, Clone)]
pub struct HeuristicShield {
    mode: ShieldMode,
}

impl HeuristicShield {
    #[must_use]
    pub fn new(mode: ShieldMode) -> Self {
        Self { mode }
    }

    fn verdict(headers: &HeaderMap) -> ShieldDecision {
        let agent = headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");

        if agent.trim().is_empty() {
            return ShieldDecision::Deny {
                reason: "missing user agent".to_string(),
            };
        }

        let lowered = agent.to_lowercase();
        for bot in BOT_AGENTS {
            if lowered.contains(bot) {
                return ShieldDecision::Deny {
                    reason: format!("automated client: {bot}"),
                };
            }
        }

        ShieldDecision::Allow
    }
}

#[async_trait]
impl Shield for HeuristicShield {
    async fn evaluate(&self, headers: &HeaderMap) -> ShieldDecision {
        match Self::verdict(headers) {
            ShieldDecision::Deny { reason } if self.mode == ShieldMode::DryRun => {
                warn!(reason = %reason, "shield would deny request (dry-run)");
                ShieldDecision::Allow
            }
            decision => decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_agent(agent: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(agent) = agent {
            headers.insert("user-agent", HeaderValue::from_str(agent).unwrap());
        }
        headers
    }

    #[tokio::test]
    async fn test_live_allows_browser_agent() {
        let shield = HeuristicShield::new(ShieldMode::Live);
        let headers = headers_with_agent(Some("Mozilla/5.0 (X11; Linux x86_64)"));
        assert_eq!(shield.evaluate(&headers).await, ShieldDecision::Allow);
    }

    #[tokio::test]
    async fn test_live_denies_missing_agent() {
        let shield = HeuristicShield::new(ShieldMode::Live);
        let decision = shield.evaluate(&headers_with_agent(None)).await;
        assert!(matches!(decision, ShieldDecision::Deny { .. }));
    }

    #[tokio::test]
    async fn test_live_denies_bot_agent() {
        let shield = HeuristicShield::new(ShieldMode::Live);
        let decision = shield.evaluate(&headers_with_agent(Some("curl/8.4.0"))).await;
        assert!(matches!(decision, ShieldDecision::Deny { .. }));
    }

    #[tokio::test]
    async fn test_dry_run_allows_bot_agent() {
        let shield = HeuristicShield::new(ShieldMode::DryRun);
        let decision = shield.evaluate(&headers_with_agent(Some("curl/8.4.0"))).await;
        assert_eq!(decision, ShieldDecision::Allow);
    }
}
