//! carbophile-content: content loading and list search for the Carbophile website
//!
//! Blog posts and projects are MDX files with a front-matter header, stored
//! per language (`blog/content/en/<slug>.mdx`). This crate loads and caches
//! them as typed items, and provides the fuzzy search and pagination used by
//! the list pages.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod search;

use anyhow::Result;
use std::path::{Path, PathBuf};

use cache::ContentCache;
use content::blog::PostMeta;
use content::projects::ProjectMeta;
use content::{ContentKind, ContentLoader};
use search::{FuzzyMatcher, SearchAndPagination, Searchable};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site: its configuration and one loader per content collection
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    blog: ContentLoader<PostMeta>,
    projects: ContentLoader<ProjectMeta>,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration, with fresh caches
    pub fn with_config<P: Into<PathBuf>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.into();
        let blog = content::blog::loader(
            base_dir.join(&config.blog.content_dir),
            &config.content_extension,
            ContentCache::new(),
        );
        let projects = content::projects::loader(
            base_dir.join(&config.projects.content_dir),
            &config.content_extension,
            ContentCache::new(),
        );

        Self {
            config,
            base_dir,
            blog,
            projects,
        }
    }

    /// Loader for blog posts
    pub fn blog(&self) -> &ContentLoader<PostMeta> {
        &self.blog
    }

    /// Loader for projects
    pub fn projects(&self) -> &ContentLoader<ProjectMeta> {
        &self.projects
    }

    /// Content root of a collection
    pub fn content_dir(&self, kind: ContentKind) -> PathBuf {
        self.base_dir.join(self.config.collection(kind).content_dir)
    }

    /// Search-and-paginate state for a collection's list page
    pub fn search<T: Searchable>(&self, kind: ContentKind, items: Vec<T>) -> SearchAndPagination<T> {
        let collection = self.config.collection(kind);
        SearchAndPagination::new(items, collection.search_keys.iter().cloned(), collection.per_page)
            .with_matcher(FuzzyMatcher::new(self.config.search.threshold))
    }

    /// Resolve an optional language argument against the configuration
    pub fn language(&self, lang: Option<&str>) -> Result<String> {
        match lang {
            None => Ok(self.config.default_language.clone()),
            Some(lang) if self.config.has_language(lang) => Ok(lang.to_string()),
            Some(lang) => anyhow::bail!(
                "Unknown language: {}. Available: {}",
                lang,
                self.config.languages.join(", ")
            ),
        }
    }
}
