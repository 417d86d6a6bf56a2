//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::ContentKind;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Languages
    pub languages: Vec<String>,
    pub default_language: String,

    // Content
    pub content_extension: String,
    pub blog: BlogConfig,
    pub projects: ProjectsConfig,

    // Search
    pub search: SearchConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Carbophile".to_string(),
            url: "https://carbophile.org".to_string(),

            languages: vec!["en".to_string(), "hr".to_string()],
            default_language: "en".to_string(),

            content_extension: "mdx".to_string(),
            blog: BlogConfig::default(),
            projects: ProjectsConfig::default(),

            search: SearchConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the loaders cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            anyhow::bail!("At least one language must be configured");
        }
        if !self.languages.contains(&self.default_language) {
            anyhow::bail!(
                "Default language '{}' is not one of {:?}",
                self.default_language,
                self.languages
            );
        }
        if self.content_extension.is_empty() || self.content_extension.starts_with('.') {
            anyhow::bail!(
                "Invalid content extension '{}' (expected e.g. 'mdx')",
                self.content_extension
            );
        }
        if !(0.0..=1.0).contains(&self.search.threshold) {
            anyhow::bail!(
                "Search threshold must be between 0.0 and 1.0, got {}",
                self.search.threshold
            );
        }
        Ok(())
    }

    /// Settings for one content collection
    pub fn collection(&self, kind: ContentKind) -> CollectionConfig<'_> {
        match kind {
            ContentKind::Blog => CollectionConfig {
                content_dir: &self.blog.content_dir,
                per_page: self.blog.per_page,
                search_keys: &self.blog.search_keys,
            },
            ContentKind::Projects => CollectionConfig {
                content_dir: &self.projects.content_dir,
                per_page: self.projects.per_page,
                search_keys: &self.projects.search_keys,
            },
        }
    }

    /// Whether a language code is configured
    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.iter().any(|l| l == lang)
    }
}

/// Blog collection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Content root, relative to the site base directory
    pub content_dir: String,
    /// Posts per page in the blog list
    pub per_page: usize,
    /// Metadata fields the search box matches against
    pub search_keys: Vec<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: "blog/content".to_string(),
            per_page: 5,
            search_keys: vec![
                "title".to_string(),
                "description".to_string(),
                "author.name".to_string(),
            ],
        }
    }
}

/// Projects collection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub content_dir: String,
    pub per_page: usize,
    pub search_keys: Vec<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            content_dir: "projects/content".to_string(),
            per_page: 6,
            search_keys: vec![
                "title".to_string(),
                "description".to_string(),
                "category".to_string(),
            ],
        }
    }
}

/// Borrowed view over the settings of either collection
#[derive(Debug, Clone, Copy)]
pub struct CollectionConfig<'a> {
    pub content_dir: &'a str,
    pub per_page: usize,
    pub search_keys: &'a [String],
}

/// Fuzzy search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Highest accepted match score (0.0 = exact only, 1.0 = anything)
    pub threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}
