//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `pagination`: Page navigation strip
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{BaseLayout, Pagination};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Pagination::new(2, 10))
//!     };
//!     BaseLayout::new("My Page", None).render(content)
//! }
//! ```

pub mod layout;
pub mod pagination;

pub use layout::BaseLayout;
pub use pagination::Pagination;

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
