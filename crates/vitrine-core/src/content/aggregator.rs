use std::sync::Arc;

use tokio::sync::watch;

use super::category::{CategoryCount, CategoryFilter, ALL_CATEGORY};
use super::models::ContentItem;
use super::source::ContentSource;
use crate::config::CategoryConfig;
use crate::{Error, Result};

/// Outcome of the most recent load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet
    Idle,
    Loaded { count: usize },
    /// Fetch failed; the collection was left as it was
    Failed,
    /// Page was torn down before the fetch finished
    Cancelled,
}

/// Page-owned view model over a content collection
///
/// Holds the fetched posts newest-first plus the selected category. Derived
/// views (`filtered_view`, `featured`, `category_counts`) are recomputed on
/// every read and never modify the collection.
pub struct ContentAggregator {
    source: Arc<dyn ContentSource>,
    collection: String,
    items: Vec<ContentItem>,
    filter: CategoryFilter,
    state: LoadState,
}

impl ContentAggregator {
    pub fn new(
        source: Arc<dyn ContentSource>,
        collection: impl Into<String>,
        categories: Vec<CategoryConfig>,
    ) -> Self {
        Self {
            source,
            collection: collection.into(),
            items: Vec::new(),
            filter: CategoryFilter::new(categories),
            state: LoadState::Idle,
        }
    }

    /// Fetch the collection and replace the current items
    ///
    /// Failures are logged and absorbed: the collection stays as it was and
    /// the page keeps rendering.
    pub async fn load(&mut self) -> &[ContentItem] {
        let result = self.source.fetch(&self.collection).await;
        self.apply(result);
        &self.items
    }

    /// Like [`load`](Self::load), but abandons the fetch once `teardown` flips to `true`
    pub async fn load_until(&mut self, mut teardown: watch::Receiver<bool>) -> &[ContentItem] {
        if *teardown.borrow() {
            self.apply(Err(Error::Cancelled));
            return &self.items;
        }

        let source = Arc::clone(&self.source);
        let collection = self.collection.clone();
        let fetch = source.fetch(&collection);
        tokio::pin!(fetch);

        let result = loop {
            tokio::select! {
                result = &mut fetch => break result,
                changed = teardown.changed() => {
                    match changed {
                        Ok(()) if *teardown.borrow() => break Err(Error::Cancelled),
                        Ok(()) => continue,
                        // Lifetime handle dropped without tearing down; keep waiting on the fetch
                        Err(_) => break (&mut fetch).await,
                    }
                }
            }
        };

        self.apply(result);
        &self.items
    }

    fn apply(&mut self, result: Result<Vec<ContentItem>>) {
        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                tracing::info!(
                    "Loaded {} items from collection '{}'",
                    items.len(),
                    self.collection
                );
                self.state = LoadState::Loaded { count: items.len() };
                self.items = items;
            }
            Err(Error::Cancelled) => {
                tracing::info!("Load of collection '{}' cancelled", self.collection);
                self.state = LoadState::Cancelled;
            }
            Err(e) => {
                tracing::error!("Failed to load collection '{}': {}", self.collection, e);
                self.state = LoadState::Failed;
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// All items, newest first
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// The most recent item, or an empty slice when nothing is loaded
    pub fn featured(&self) -> &[ContentItem] {
        &self.items[..self.items.len().min(1)]
    }

    pub fn selected_category(&self) -> &str {
        self.filter.selected()
    }

    pub fn categories(&self) -> &[CategoryConfig] {
        self.filter.categories()
    }

    pub fn set_category(&mut self, name: &str) {
        if self.filter.select(name) {
            tracing::debug!("Category filter set to '{}'", name);
        }
    }

    /// Items in the selected category, in collection order
    pub fn filtered_view(&self) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.category.as_deref()))
            .collect()
    }

    /// Item count per configured category ("All" counts everything)
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.filter
            .categories()
            .iter()
            .map(|category| CategoryCount {
                name: category.name.clone(),
                icon: category.icon.clone(),
                count: self.count_in(&category.name),
            })
            .collect()
    }

    fn count_in(&self, category: &str) -> usize {
        if category == ALL_CATEGORY {
            self.items.len()
        } else {
            self.items.iter().filter(|i| i.is_in_category(category)).count()
        }
    }
}

/// Stable sort by `posted_on`, newest first; undated items go last
fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
}
