//! Catalog Browser library.
//!
//! A server-rendered web application for browsing a searchable, filterable
//! item catalog. Pages are gated behind a session check plus an abuse shield;
//! the pagination strip and its navigation URLs are computed by the pure
//! functions in [`pagination`] and [`url_state`].

pub mod auth;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pagination;
pub mod url_state;
pub mod web;
