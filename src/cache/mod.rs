//! In-memory content cache
//!
//! Parsed content items are kept for as long as the cache lives. Content files
//! are build inputs that do not change while a build runs, so there is no
//! invalidation and no eviction. A cache is created by the caller and handed to
//! the loaders that should share it; tests get isolation by making a new one.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::content::ContentItem;

/// Shared handle to parsed content items, keyed by resolved file path
pub struct ContentCache<M> {
    entries: Arc<RwLock<HashMap<PathBuf, Arc<ContentItem<M>>>>>,
}

impl<M> ContentCache<M> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the cached item for a path
    pub fn get(&self, path: &Path) -> Option<Arc<ContentItem<M>>> {
        self.entries.read().get(path).cloned()
    }

    /// Store an item unless one is already cached for the path.
    ///
    /// Returns the item that ends up cached, so two racing loads of the same
    /// file both hand out the first value.
    pub fn insert(&self, path: PathBuf, item: ContentItem<M>) -> Arc<ContentItem<M>> {
        let mut entries = self.entries.write();
        entries
            .entry(path)
            .or_insert_with(|| Arc::new(item))
            .clone()
    }

    /// Number of cached items
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Whether a path has been loaded
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.read().contains_key(path)
    }
}

impl<M> Default for ContentCache<M> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: cloning the handle must not require `M: Clone`
impl<M> Clone for ContentCache<M> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<M> fmt::Debug for ContentCache<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::parse_date_string;

    fn item(slug: &str, content: &str) -> ContentItem<String> {
        ContentItem {
            slug: slug.to_string(),
            lang: "en".to_string(),
            meta: slug.to_uppercase(),
            date: parse_date_string("2024-01-01").unwrap(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let cache = ContentCache::new();
        let path = PathBuf::from("/site/blog/en/hello.mdx");
        assert!(cache.get(&path).is_none());

        let stored = cache.insert(path.clone(), item("hello", "body"));
        let fetched = cache.get(&path).unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&path));
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = ContentCache::new();
        let path = PathBuf::from("/site/blog/en/hello.mdx");

        let first = cache.insert(path.clone(), item("hello", "first"));
        let second = cache.insert(path.clone(), item("hello", "second"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.content, "first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache: ContentCache<String> = ContentCache::new();
        let handle = cache.clone();
        handle.insert(PathBuf::from("a.mdx"), item("a", ""));
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_fresh_caches_are_isolated() {
        let a: ContentCache<String> = ContentCache::new();
        let b: ContentCache<String> = ContentCache::new();
        a.insert(PathBuf::from("a.mdx"), item("a", ""));
        assert!(b.is_empty());
    }
}
