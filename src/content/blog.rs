//! Blog posts

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

use super::{ContentItem, ContentLoader, Meta};
use crate::cache::ContentCache;
use crate::search::Searchable;

/// Post author, as shown in the post header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Headshot image name, without extension
    pub photo: String,
    /// Role or position
    pub title: String,
}

/// Blog post front-matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub author: Author,
    pub date: String,
    pub description: String,
    pub thumbnail: String,
    pub title: String,
}

impl Meta for PostMeta {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl Searchable for PostMeta {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match key {
            "title" => &self.title,
            "description" => &self.description,
            "date" => &self.date,
            "thumbnail" => &self.thumbnail,
            "author.name" => &self.author.name,
            "author.title" => &self.author.title,
            "author.photo" => &self.author.photo,
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

pub type BlogPost = ContentItem<PostMeta>;

/// Loader for `<content_dir>/<lang>/<slug>.<ext>` blog posts
pub fn loader<P: AsRef<Path>>(
    content_dir: P,
    extension: &str,
    cache: ContentCache<PostMeta>,
) -> ContentLoader<PostMeta> {
    ContentLoader::with_serde(content_dir.as_ref(), extension, cache)
}
