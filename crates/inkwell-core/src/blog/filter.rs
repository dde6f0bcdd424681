//! Filter criteria for blog listings.

use super::model::Category;
use serde::{Deserialize, Serialize};

/// Which collection of records a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every user's posts, filterable by category and author.
    Feed,
    /// The signed-in user's own posts, filterable by category only.
    Mine,
}

impl Scope {
    pub fn supports_author(self) -> bool {
        matches!(self, Scope::Feed)
    }
}

/// Criteria that decide which records are fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub author: Option<String>,
}

impl FilterCriteria {
    pub fn new(category: Option<Category>, author: Option<String>) -> Self {
        Self { category, author }.normalized()
    }

    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            author: None,
        }
    }

    /// Trims the author and drops it when blank.
    pub fn normalized(mut self) -> Self {
        self.author = self
            .author
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty());
        self
    }

    /// Restricts the criteria to what `scope` can filter on.
    pub fn for_scope(self, scope: Scope) -> Self {
        let mut filter = self.normalized();
        if !scope.supports_author() {
            filter.author = None;
        }
        filter
    }

    /// Query parameters for the listing request.
    ///
    /// Only present fields are emitted; an absent field never becomes an
    /// empty `key=` pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(author) = self.author.as_deref().map(str::trim)
            && !author.is_empty()
        {
            pairs.push(("author", author.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_only_omits_author() {
        let filter = FilterCriteria::by_category(Category::Tech);
        assert_eq!(filter.query_pairs(), vec![("category", "Tech".to_string())]);
    }

    #[test]
    fn test_blank_author_is_not_sent() {
        let filter = FilterCriteria {
            category: None,
            author: Some("   ".to_string()),
        };
        assert!(filter.query_pairs().is_empty());
        assert!(filter.is_empty());
        assert_eq!(filter.normalized().author, None);
    }

    #[test]
    fn test_both_fields_are_sent_in_order() {
        let filter = FilterCriteria::new(Some(Category::Travel), Some(" Ada ".to_string()));
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("category", "Travel".to_string()),
                ("author", "Ada".to_string())
            ]
        );
    }

    #[test]
    fn test_mine_scope_drops_author() {
        let filter = FilterCriteria::new(Some(Category::Finance), Some("Ada".to_string()))
            .for_scope(Scope::Mine);
        assert_eq!(filter.author, None);
        assert_eq!(filter.category, Some(Category::Finance));
    }
}
