//! Content module - loading, parsing and typing of content files

pub mod blog;
mod error;
mod frontmatter;
pub mod item;
pub mod loader;
pub mod projects;

use std::fmt;
use std::str::FromStr;

pub use error::ContentError;
pub use frontmatter::{Frontmatter, FrontmatterError};
pub use item::{ContentItem, Meta};
pub use loader::{ContentLoader, Projection, ProjectionError};

/// The content collections of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Blog,
    Projects,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Blog, ContentKind::Projects];

    /// URL segment of the collection (`/en/blog/...`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Projects => "projects",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" | "post" | "posts" => Ok(ContentKind::Blog),
            "projects" | "project" => Ok(ContentKind::Projects),
            _ => Err(format!(
                "Unknown content type: {}. Available: blog, projects",
                s
            )),
        }
    }
}
