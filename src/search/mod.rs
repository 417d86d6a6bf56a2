//! Search and pagination over in-memory collections
//!
//! List views filter their items with a tolerant text query and show them a
//! page at a time, with a compressed page-number bar.

mod fuzzy;
mod pages;
mod pagination;

use std::borrow::Cow;
use std::sync::Arc;

use crate::content::ContentItem;

pub use fuzzy::{FuzzyMatcher, SearchHit, DEFAULT_THRESHOLD};
pub use pages::{visible_page_numbers, PageLink, MAX_PAGES_SHOWN};
pub use pagination::SearchAndPagination;

/// Items whose text fields can be searched by dotted key (`title`, `author.name`)
pub trait Searchable {
    /// Text of the field, or `None` if the item has no such field
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Content items expose `slug` plus their metadata fields, with or without
/// a `meta.` prefix
impl<M: Searchable> Searchable for ContentItem<M> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "slug" => Some(Cow::Borrowed(self.slug.as_str())),
            _ => self.meta.field(key.strip_prefix("meta.").unwrap_or(key)),
        }
    }
}

impl<T: Searchable + ?Sized> Searchable for Arc<T> {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field(key)
    }
}
