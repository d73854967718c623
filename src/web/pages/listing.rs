//! Listing page: search form, filter select, item grid, pagination strip.

use maud::{html, Markup};

use crate::auth::Session;
use crate::catalog::CatalogItem;
use crate::components::{BaseLayout, Pagination};

/// Everything the listing page needs to render one request.
#[derive(Debug)]
pub struct ListingPage<'a> {
    /// Items on the current page, in catalog order
    pub items: &'a [&'a CatalogItem],
    /// All category keys for the filter select
    pub categories: &'a [&'a str],
    /// Active search text (blank if none)
    pub query: &'a str,
    /// Active category filter (blank if none)
    pub filter: &'a str,
    /// Current page number, already clamped to `[1, total_pages]`
    pub current_page: u32,
    /// Total number of pages for the active query/filter
    pub total_pages: u32,
    /// Total matching items across all pages
    pub total_matches: usize,
    /// The request's raw query string, for link generation
    pub raw_query: &'a str,
    /// The signed-in session
    pub session: Option<&'a Session>,
}

/// Render the listing page.
#[must_use]
pub fn render_listing_page(page: &ListingPage<'_>) -> Markup {
    let pagination = Pagination::new(page.current_page, page.total_pages)
        .with_query(page.query)
        .with_filter(page.filter)
        .with_current_query(page.raw_query);

    let content = html! {
        h1 { "Browse the catalog" }

        form method="get" action="/" class="search-form" {
            input type="search" name="query" value=(page.query)
                placeholder="Search items...";
            select name="filter" {
                option value="" selected[page.filter.is_empty()] { "All categories" }
                @for category in page.categories {
                    option value=(category) selected[*category == page.filter] {
                        (category)
                    }
                }
            }
            button type="submit" { "Search" }
        }

        @if !page.query.is_empty() || !page.filter.is_empty() {
            p {
                "Found " (page.total_matches) " matching items"
            }
        }

        @if page.items.is_empty() {
            p class="empty" { "No items found." }
        } @else {
            div class="item-grid" {
                @for item in page.items {
                    article class="item-card" {
                        h3 { (item.title) }
                        p class="category" { (item.category) }
                        @if !item.description.is_empty() {
                            p { (item.description) }
                        }
                    }
                }
            }
        }

        (pagination)
    };

    BaseLayout::new("Browse", page.session).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample_catalog() -> Catalog {
        Catalog::from_items(
            (1..=3)
                .map(|i| CatalogItem {
                    id: i,
                    title: format!("Item {i}"),
                    category: "general".to_string(),
                    description: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_listing_page_shows_items_and_pagination() {
        let catalog = sample_catalog();
        let items = catalog.search("", "");
        let categories = catalog.categories();
        let html = render_listing_page(&ListingPage {
            items: &items,
            categories: &categories,
            query: "",
            filter: "",
            current_page: 1,
            total_pages: 3,
            total_matches: 3,
            raw_query: "",
            session: None,
        })
        .into_string();

        assert!(html.contains("Item 1"));
        assert!(html.contains("class=\"pagination\""));
        assert!(html.contains("page=2"));
        // No search performed, so no result count line.
        assert!(!html.contains("matching items"));
    }

    #[test]
    fn test_listing_page_shows_result_count_for_search() {
        let catalog = sample_catalog();
        let items = catalog.search("Item 2", "");
        let categories = catalog.categories();
        let html = render_listing_page(&ListingPage {
            items: &items,
            categories: &categories,
            query: "Item 2",
            filter: "",
            current_page: 1,
            total_pages: 1,
            total_matches: 1,
            raw_query: "query=Item+2",
            session: None,
        })
        .into_string();

        assert!(html.contains("Found 1 matching items"));
    }

    #[test]
    fn test_listing_page_empty_state() {
        let html = render_listing_page(&ListingPage {
            items: &[],
            categories: &[],
            query: "zzz",
            filter: "",
            current_page: 1,
            total_pages: 1,
            total_matches: 0,
            raw_query: "query=zzz",
            session: None,
        })
        .into_string();

        assert!(html.contains("No items found."));
    }
}
