use crate::config::CategoryConfig;

/// Reserved category name that selects every post
pub const ALL_CATEGORY: &str = "All";

/// Number of posts in one configured category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub icon: String,
    pub count: usize,
}

/// Selected category plus the fixed list of selectable categories
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    categories: Vec<CategoryConfig>,
    selected: String,
}

impl CategoryFilter {
    /// Create a filter over `categories` with "All" selected
    pub fn new(categories: Vec<CategoryConfig>) -> Self {
        Self {
            categories,
            selected: ALL_CATEGORY.to_string(),
        }
    }

    pub fn categories(&self) -> &[CategoryConfig] {
        &self.categories
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORY
    }

    /// Check whether `name` is one of the configured categories
    pub fn is_known(&self, name: &str) -> bool {
        name == ALL_CATEGORY || self.categories.iter().any(|c| c.name == name)
    }

    /// Select a category; returns whether the selection changed
    pub fn select(&mut self, name: &str) -> bool {
        if self.selected == name {
            return false;
        }
        if !self.is_known(name) {
            tracing::warn!("Selecting category '{}' that is not configured", name);
        }
        self.selected = name.to_string();
        true
    }

    /// Check whether a post with `category` passes the current selection
    pub fn matches(&self, category: Option<&str>) -> bool {
        self.is_all() || category == Some(self.selected.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CategoryFilter {
        CategoryFilter::new(vec![
            CategoryConfig::new("All", "🌟"),
            CategoryConfig::new("AI", "🤖"),
        ])
    }

    #[test]
    fn test_defaults_to_all() {
        let filter = filter();
        assert!(filter.is_all());
        assert!(filter.matches(None));
        assert!(filter.matches(Some("anything")));
    }

    #[test]
    fn test_select_reports_change() {
        let mut filter = filter();
        assert!(filter.select("AI"));
        assert!(!filter.select("AI"));
        assert!(filter.matches(Some("AI")));
        assert!(!filter.matches(Some("Web3")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let mut filter = filter();
        assert!(!filter.is_known("Cooking"));
        assert!(filter.select("Cooking"));
        assert_eq!(filter.selected(), "Cooking");
    }
}
