//! Pagination component for navigating through multi-page content.
//!
//! Renders previous/next controls and a strip of page links computed by
//! [`crate::pagination::page_range`], with hrefs built by
//! [`crate::url_state::merge_params`] so the active search and filter carry
//! across page changes.

use maud::{html, Markup, Render};

use crate::pagination::{page_range, PageLabel};
use crate::url_state::merge_params;

/// Pagination strip for the listing page.
///
/// Holds no state beyond what is passed in; every render is a pure
/// projection of (current page, total pages, query, filter) onto markup.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Current page number (1-indexed, already clamped by the handler)
    pub current_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Active search text to carry in links (blank means none)
    pub query_string: String,
    /// Active category filter to carry in links (blank means none)
    pub filter_string: String,
    /// The request's raw query string, preserved through link generation
    pub current_query: String,
    /// Path the links navigate to
    pub base_path: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 10,
            query_string: String::new(),
            filter_string: String::new(),
            current_query: String::new(),
            base_path: "/".to_string(),
        }
    }
}

impl Pagination {
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            ..Self::default()
        }
    }

    /// Carry a search query in every generated link.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query_string = query.to_string();
        self
    }

    /// Carry a category filter in every generated link.
    #[must_use]
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter_string = filter.to_string();
        self
    }

    /// Preserve unrelated parameters from the request's query string.
    #[must_use]
    pub fn with_current_query(mut self, raw_query: &str) -> Self {
        self.current_query = raw_query.to_string();
        self
    }

    /// Build the navigation target for `page`.
    ///
    /// Returns `None` when `page` is outside `[1, total_pages]`; callers
    /// render a disabled control instead of a link, so an out-of-range
    /// target never navigates.
    #[must_use]
    pub fn page_url(&self, page: u32) -> Option<String> {
        if page < 1 || page > self.total_pages {
            return None;
        }
        let page_value = page.to_string();
        let query = self.query_string.trim();
        let overrides = [
            ("page", Some(page_value.as_str())),
            ("query", (!query.is_empty()).then_some(query)),
            (
                "filter",
                (!self.filter_string.is_empty()).then_some(self.filter_string.as_str()),
            ),
        ];
        Some(merge_params(&self.current_query, &overrides, &self.base_path))
    }
}

impl Render for Pagination {
    fn render(&self) -> Markup {
        let current = self.current_page.clamp(1, self.total_pages.max(1));

        html! {
            nav class="pagination" {
                // Previous button; page 0 fails the bounds check and
                // renders disabled.
                @if let Some(url) = self.page_url(current - 1) {
                    a href=(url) { "\u{00ab} Previous" }
                } @else {
                    span class="disabled" { "\u{00ab} Previous" }
                }

                @for label in page_range(current, self.total_pages) {
                    @match label {
                        PageLabel::Ellipsis => {
                            span class="ellipsis" { "\u{2026}" }
                        }
                        PageLabel::Page(page) => {
                            @if page == current {
                                span class="current" { (page) }
                            } @else {
                                @if let Some(url) = self.page_url(page) {
                                    a href=(url) { (page) }
                                }
                            }
                        }
                    }
                }

                // Next button
                @if let Some(url) = self.page_url(current + 1) {
                    a href=(url) { "Next \u{00bb}" }
                } @else {
                    span class="disabled" { "Next \u{00bb}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, 10);
        assert!(pagination.query_string.is_empty());
        assert!(pagination.filter_string.is_empty());
    }

    #[test]
    fn test_page_url_guard_rejects_out_of_range() {
        let pagination = Pagination::new(1, 10);
        assert!(pagination.page_url(0).is_none());
        assert!(pagination.page_url(11).is_none());
        assert!(pagination.page_url(1).is_some());
        assert!(pagination.page_url(10).is_some());
    }

    #[test]
    fn test_page_url_carries_query_and_filter() {
        let pagination = Pagination::new(2, 10)
            .with_query("shoes")
            .with_filter("sale");
        assert_eq!(
            pagination.page_url(3).as_deref(),
            Some("/?page=3&query=shoes&filter=sale")
        );
    }

    #[test]
    fn test_page_url_omits_blank_query_and_filter() {
        let pagination = Pagination::new(2, 10).with_query("   ");
        assert_eq!(pagination.page_url(3).as_deref(), Some("/?page=3"));
    }

    #[test]
    fn test_page_url_overwrites_existing_page_in_place() {
        let pagination = Pagination::new(2, 10)
            .with_query("shoes")
            .with_current_query("page=2&sort=asc");
        assert_eq!(
            pagination.page_url(3).as_deref(),
            Some("/?page=3&sort=asc&query=shoes")
        );
    }

    #[test]
    fn test_render_first_page_disables_previous() {
        let html = Pagination::new(1, 10).render().into_string();
        assert!(html.contains("class=\"disabled\""));
        assert!(html.contains("Previous"));
        assert!(html.contains("class=\"current\">1<"));
        assert!(html.contains("page=2"));
    }

    #[test]
    fn test_render_last_page_disables_next() {
        let html = Pagination::new(10, 10).render().into_string();
        assert!(html.contains("page=9"));
        assert!(html.contains("class=\"disabled\""));
        assert!(!html.contains("page=11"));
    }

    #[test]
    fn test_render_middle_page_has_window_and_ellipses() {
        let html = Pagination::new(10, 20).render().into_string();
        assert!(html.contains("page=9"));
        assert!(html.contains("class=\"current\">10<"));
        assert!(html.contains("page=11"));
        assert!(html.contains("page=20"));
        assert!(html.contains("\u{2026}"));
        assert!(!html.contains("page=0"));
        assert!(!html.contains("page=21"));
    }

    #[test]
    fn test_render_single_page_has_no_links() {
        let html = Pagination::new(1, 1).render().into_string();
        assert!(!html.contains("<a"));
        assert!(html.contains("class=\"current\">1<"));
    }

    #[test]
    fn test_render_preserves_filters_in_links() {
        let html = Pagination::new(2, 10)
            .with_query("shoes")
            .with_filter("sale")
            .render()
            .into_string();
        assert!(html.contains("query=shoes"));
        assert!(html.contains("filter=sale"));
    }
}
