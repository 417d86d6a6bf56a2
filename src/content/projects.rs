//! Projects showcase

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use super::{ContentItem, ContentLoader, Meta};
use crate::cache::ContentCache;
use crate::search::Searchable;

/// Whether a project is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Concluded,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Concluded => "concluded",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project front-matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    pub description: String,
    pub date: String,
    pub status: ProjectStatus,
    pub category: String,
}

impl Meta for ProjectMeta {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl Searchable for ProjectMeta {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "description" => Some(Cow::Borrowed(self.description.as_str())),
            "date" => Some(Cow::Borrowed(self.date.as_str())),
            "category" => Some(Cow::Borrowed(self.category.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

pub type Project = ContentItem<ProjectMeta>;

/// Loader for `<content_dir>/<lang>/<slug>.<ext>` projects
pub fn loader<P: AsRef<Path>>(
    content_dir: P,
    extension: &str,
    cache: ContentCache<ProjectMeta>,
) -> ContentLoader<ProjectMeta> {
    ContentLoader::with_serde(content_dir.as_ref(), extension, cache)
}
