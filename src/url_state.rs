//! Query-string merging for navigation links.
//!
//! Builds the `path?query` target for a navigation element from the current
//! request's query string plus a set of overrides, without touching any
//! ambient request state. Purely a string transformation; the caller hands
//! the result to whatever performs the actual navigation.

use std::borrow::Cow;

use url::form_urlencoded;
use urlencoding::encode;

/// The parameter holding free-text search input. A blank value for this
/// parameter means "no search" and is dropped from generated URLs.
pub const QUERY_PARAM: &str = "query";

/// Merge `overrides` into `existing` and render `base_path?query`.
///
/// Rules:
/// - An override with `Some(value)` sets the parameter, overwriting in place
///   if it already exists (keeping its original position).
/// - An override with `None` removes the parameter entirely. For
///   [`QUERY_PARAM`] a `Some` value that is empty or whitespace-only is also
///   treated as removal.
/// - Parameters not named by any override pass through unchanged, in order.
/// - Overrides for parameters not already present are appended in the order
///   given.
///
/// `existing` may carry a leading `?`. When the merged set is empty the bare
/// `base_path` is returned. Deterministic and idempotent.
#[must_use]
pub fn merge_params(
    existing: &str,
    overrides: &[(&str, Option<&str>)],
    base_path: &str,
) -> String {
    let mut merged: Vec<(Cow<'_, str>, Cow<'_, str>)> = Vec::new();
    let mut applied = vec![false; overrides.len()];

    let raw = existing.strip_prefix('?').unwrap_or(existing);
    for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
        match overrides.iter().position(|(n, _)| *n == name) {
            Some(idx) => {
                // First occurrence takes the override's value and position;
                // duplicates of an overridden name collapse away.
                if applied[idx] {
                    continue;
                }
                applied[idx] = true;
                if let Some(v) = effective_value(overrides[idx].0, overrides[idx].1) {
                    merged.push((name, Cow::Borrowed(v)));
                }
            }
            None => merged.push((name, value)),
        }
    }

    for (idx, &(name, value)) in overrides.iter().enumerate() {
        if applied[idx] {
            continue;
        }
        if let Some(v) = effective_value(name, value) {
            merged.push((Cow::Borrowed(name), Cow::Borrowed(v)));
        }
    }

    if merged.is_empty() {
        return base_path.to_string();
    }

    let query = merged
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base_path}?{query}")
}

/// Resolve an override to the value that should appear in the output, or
/// `None` when the parameter is to be removed.
fn effective_value<'a>(name: &str, value: Option<&'a str>) -> Option<&'a str> {
    match value {
        Some(v) if name == QUERY_PARAM && v.trim().is_empty() => None,
        other => other,
    }
}
