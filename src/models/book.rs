use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// A single recommendable book as published in the catalog feed.
///
/// Records are immutable once loaded. Within a category, `title` is the
/// identity used to suppress repeats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub note: String,
    pub category: String,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        note: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            note: note.into(),
            category: category.into(),
        }
    }
}

/// Books grouped by category, in the order categories first appear in the feed.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: Vec<String>,
    pools: HashMap<String, Vec<BookRecord>>,
}

impl Catalog {
    pub fn from_records(records: Vec<BookRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            if !catalog.pools.contains_key(&record.category) {
                catalog.categories.push(record.category.clone());
            }
            catalog
                .pools
                .entry(record.category.clone())
                .or_default()
                .push(record);
        }
        catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Pool for a category. Unknown categories yield an empty pool.
    pub fn pool(&self, category: &str) -> &[BookRecord] {
        self.pools.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_feed_order_of_categories() {
        let catalog = Catalog::from_records(vec![
            BookRecord::new("Dune", "Frank Herbert", "", "Adventure"),
            BookRecord::new("Cosmos", "Carl Sagan", "", "Science"),
            BookRecord::new("Hatchet", "Gary Paulsen", "", "Adventure"),
        ]);

        assert_eq!(catalog.categories(), ["Adventure", "Science"]);
        assert_eq!(catalog.pool("Adventure").len(), 2);
        assert_eq!(catalog.pool("Adventure")[1].title, "Hatchet");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_unknown_category_is_empty_pool() {
        let catalog = Catalog::from_records(vec![BookRecord::new("Cosmos", "", "", "Science")]);
        assert!(catalog.pool("Poetry").is_empty());
        assert!(Catalog::default().is_empty());
    }
}
