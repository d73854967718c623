//! Catalog items and the search/filter queries the listing page runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One browsable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// In-memory item catalog, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the catalog from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// items.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { items })
    }

    #[must_use]
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching a free-text query and a category filter, in catalog
    /// order. A blank query matches everything; a blank filter matches every
    /// category. The query is a case-insensitive substring match on title and
    /// description; the filter is an exact category key.
    #[must_use]
    pub fn search(&self, query: &str, filter: &str) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| filter.is_empty() || item.category == filter)
            .filter(|item| {
                needle.is_empty()
                    || item.title.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct category keys, sorted, for the filter select.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .items
            .iter()
            .map(|item| item.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem {
                id: 1,
                title: "Red Shoes".to_string(),
                category: "footwear".to_string(),
                description: "Bright red runners".to_string(),
            },
            CatalogItem {
                id: 2,
                title: "Blue Jacket".to_string(),
                category: "outerwear".to_string(),
                description: String::new(),
            },
            CatalogItem {
                id: 3,
                title: "Green Shoes".to_string(),
                category: "footwear".to_string(),
                description: String::new(),
            },
        ])
    }

    #[test]
    fn test_search_blank_matches_all() {
        assert_eq!(sample().search("", "").len(), 3);
    }

    #[test]
    fn test_search_query_is_case_insensitive_substring() {
        let catalog = sample();
        let hits = catalog.search("SHOES", "");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|item| item.title.contains("Shoes")));
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = sample();
        let hits = catalog.search("runners", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_filter_is_exact_category() {
        let catalog = sample();
        assert_eq!(catalog.search("", "footwear").len(), 2);
        assert_eq!(catalog.search("", "foot").len(), 0);
    }

    #[test]
    fn test_query_and_filter_combine() {
        let catalog = sample();
        let hits = catalog.search("green", "footwear");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        assert_eq!(sample().categories(), vec!["footwear", "outerwear"]);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": 1, "title": "Desk Lamp", "category": "lighting"}}]"#
        )
        .expect("write catalog");

        let catalog = Catalog::load(file.path()).expect("load catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search("lamp", "").len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
