//! Content loader - loads typed content items from a language-partitioned directory
//!
//! Files live at `<base_dir>/<lang>/<slug>.<ext>`. Each file is read once,
//! split into front-matter and body, projected into the collection's metadata
//! type, validated and cached.

use serde::de::DeserializeOwned;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{ContentError, Result};
use super::item::{newest_first, parse_date_string};
use super::{ContentItem, Frontmatter, Meta};
use crate::cache::ContentCache;

/// Error type returned by projections
pub type ProjectionError = Box<dyn std::error::Error + Send + Sync>;

/// Maps raw front-matter to a collection's metadata type
pub type Projection<M> =
    Arc<dyn Fn(&Frontmatter) -> std::result::Result<M, ProjectionError> + Send + Sync>;

/// Loads content items of one collection (blog, projects, ...)
pub struct ContentLoader<M> {
    base_dir: PathBuf,
    extension: String,
    project: Projection<M>,
    cache: ContentCache<M>,
}

impl<M: Meta + 'static> ContentLoader<M> {
    /// Create a loader with a custom front-matter projection
    pub fn new<P, F>(base_dir: P, extension: &str, cache: ContentCache<M>, project: F) -> Self
    where
        P: Into<PathBuf>,
        F: Fn(&Frontmatter) -> std::result::Result<M, ProjectionError> + Send + Sync + 'static,
    {
        Self {
            base_dir: base_dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
            project: Arc::new(project),
            cache,
        }
    }

    /// Create a loader that deserializes the front-matter straight into `M`
    pub fn with_serde<P: Into<PathBuf>>(base_dir: P, extension: &str, cache: ContentCache<M>) -> Self
    where
        M: DeserializeOwned,
    {
        Self::new(base_dir, extension, cache, |fm: &Frontmatter| {
            fm.deserialize::<M>().map_err(Into::into)
        })
    }

    /// Root directory holding one subdirectory per language
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Recognized content file extension, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn cache(&self) -> &ContentCache<M> {
        &self.cache
    }

    /// Get a single item.
    ///
    /// Returns `Ok(None)` when there is no file for the language and slug.
    /// Unreadable files and malformed front-matter are errors.
    pub async fn get_item_by_slug(
        &self,
        lang: &str,
        slug: &str,
    ) -> Result<Option<Arc<ContentItem<M>>>> {
        let Some(path) = self.item_path(lang, slug) else {
            tracing::debug!("Rejected content lookup {}/{}", lang, slug);
            return Ok(None);
        };

        if let Some(item) = self.cache.get(&path) {
            tracing::debug!("Cache hit: {:?}", path);
            return Ok(Some(item));
        }

        let source = match tokio::fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No content at {:?}", path);
                return Ok(None);
            }
            Err(source) => return Err(ContentError::Io { path, source }),
        };

        let item = self.build_item(&path, lang, slug, &source)?;
        tracing::debug!("Loaded {:?}", path);
        Ok(Some(self.cache.insert(path, item)))
    }

    /// Get every item of a language, newest first.
    ///
    /// A missing language directory yields no items.
    pub async fn get_all_items(&self, lang: &str) -> Result<Vec<Arc<ContentItem<M>>>> {
        if !is_path_segment(lang) {
            return Ok(Vec::new());
        }
        let dir = self.base_dir.join(lang);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No content directory {:?}", dir);
                return Ok(Vec::new());
            }
            Err(source) => return Err(ContentError::Io { path: dir, source }),
        };

        let mut slugs = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => return Err(ContentError::Io { path: dir, source }),
            };
            let path = entry.path();
            if !self.has_content_extension(&path) {
                continue;
            }
            // Follows symlinks, unlike `DirEntry::file_type`
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => {}
                _ => {
                    tracing::debug!("Skipping non-file entry {:?}", path);
                    continue;
                }
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(slug) => slugs.push(slug.to_string()),
                None => tracing::warn!("Skipping content file with non UTF-8 name: {:?}", path),
            }
        }

        let mut items = Vec::with_capacity(slugs.len());
        for slug in &slugs {
            if let Some(item) = self.get_item_by_slug(lang, slug).await? {
                items.push(item);
            }
        }

        items.sort_by(|a, b| newest_first(a, b));
        Ok(items)
    }

    /// Every `(lang, slug)` pair across the given languages, for static export
    pub async fn static_params(&self, langs: &[String]) -> Result<Vec<(String, String)>> {
        let mut params = Vec::new();
        for lang in langs {
            for item in self.get_all_items(lang).await? {
                params.push((lang.clone(), item.slug.clone()));
            }
        }
        Ok(params)
    }

    fn item_path(&self, lang: &str, slug: &str) -> Option<PathBuf> {
        if !is_path_segment(lang) || !is_path_segment(slug) {
            return None;
        }
        Some(
            self.base_dir
                .join(lang)
                .join(format!("{}.{}", slug, self.extension)),
        )
    }

    fn has_content_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }

    fn build_item(&self, path: &Path, lang: &str, slug: &str, source: &str) -> Result<ContentItem<M>> {
        let (fm, body) = Frontmatter::parse(source).map_err(|e| ContentError::Frontmatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let invalid = |message: String| ContentError::InvalidMeta {
            path: path.to_path_buf(),
            message,
        };

        let meta = (self.project)(&fm).map_err(|e| invalid(e.to_string()))?;

        if meta.title().trim().is_empty() {
            return Err(invalid("title must not be empty".to_string()));
        }
        let date = parse_date_string(meta.date())
            .ok_or_else(|| invalid(format!("unrecognized date '{}'", meta.date())))?;

        Ok(ContentItem {
            slug: slug.to_string(),
            lang: lang.to_string(),
            meta,
            date,
            content: body.to_string(),
        })
    }
}

impl<M> Clone for ContentLoader<M> {
    fn clone(&self) -> Self {
        Self {
            base_dir: self.base_dir.clone(),
            extension: self.extension.clone(),
            project: Arc::clone(&self.project),
            cache: self.cache.clone(),
        }
    }
}

impl<M> fmt::Debug for ContentLoader<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentLoader")
            .field("base_dir", &self.base_dir)
            .field("extension", &self.extension)
            .field("cache", &self.cache)
            .finish()
    }
}

/// A single, plain path component: no separators, no `.` or `..`
fn is_path_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && !s.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Deserialize)]
    struct TestMeta {
        title: String,
        date: String,
        #[serde(default)]
        tag: Option<String>,
    }

    impl Meta for TestMeta {
        fn title(&self) -> &str {
            &self.title
        }

        fn date(&self) -> &str {
            &self.date
        }
    }

    fn write(dir: &TempDir, rel: &str, content: &str) -> PathBuf {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn doc(title: &str, date: &str) -> String {
        format!("---\ntitle: {}\ndate: {}\n---\nBody of {}\n", title, date, title)
    }

    fn loader(dir: &TempDir) -> ContentLoader<TestMeta> {
        ContentLoader::with_serde(dir.path(), "mdx", ContentCache::new())
    }

    #[tokio::test]
    async fn test_get_item_by_slug() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/hello.mdx", "---\ntitle: Hello\ndate: 2024-01-15\ntag: news\n---\n# Hi\n");

        let item = loader(&dir)
            .get_item_by_slug("en", "hello")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item.slug, "hello");
        assert_eq!(item.lang, "en");
        assert_eq!(item.meta.title, "Hello");
        assert_eq!(item.meta.tag.as_deref(), Some("news"));
        assert_eq!(item.content, "# Hi\n");
    }

    #[tokio::test]
    async fn test_missing_item_is_none() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/hello.mdx", &doc("Hello", "2024-01-15"));
        let loader = loader(&dir);

        assert!(loader.get_item_by_slug("en", "nope").await.unwrap().is_none());
        assert!(loader.get_item_by_slug("hr", "hello").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_path_traversal_is_not_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "secret.mdx", &doc("Secret", "2024-01-15"));
        write(&dir, "en/ok.mdx", &doc("Ok", "2024-01-15"));
        let loader = loader(&dir);

        assert!(loader.get_item_by_slug("en", "../secret").await.unwrap().is_none());
        assert!(loader.get_item_by_slug("..", "secret").await.unwrap().is_none());
        assert!(loader.get_item_by_slug("en", "").await.unwrap().is_none());
        assert!(loader.get_all_items("..").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_cached() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "en/hello.mdx", &doc("Original", "2024-01-15"));
        let loader = loader(&dir);

        let first = loader.get_item_by_slug("en", "hello").await.unwrap().unwrap();
        fs::write(&path, doc("Changed", "2025-01-01")).unwrap();
        let second = loader.get_item_by_slug("en", "hello").await.unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.meta.title, "Original");
        assert_eq!(loader.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_cache_survives_file_removal() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "en/hello.mdx", &doc("Hello", "2024-01-15"));
        let loader = loader(&dir);

        loader.get_item_by_slug("en", "hello").await.unwrap().unwrap();
        fs::remove_file(&path).unwrap();
        assert!(loader.get_item_by_slug("en", "hello").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_language_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/hello.mdx", &doc("Hello", "2024-01-15"));

        let items = loader(&dir).get_all_items("hr").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_items_sorted_by_date_desc() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/first.mdx", &doc("First", "2024-01-01"));
        write(&dir, "en/second.mdx", &doc("Second", "2023-01-01"));
        write(&dir, "en/third.mdx", &doc("Third", "2025-01-01"));

        let items = loader(&dir).get_all_items("en").await.unwrap();
        let dates: Vec<_> = items.iter().map(|i| i.meta.date.as_str()).collect();
        assert_eq!(dates, ["2025-01-01", "2024-01-01", "2023-01-01"]);
        for pair in items.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_get_all_items_ties_ordered_by_slug() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/b-post.mdx", &doc("B", "2024-03-03"));
        write(&dir, "en/a-post.mdx", &doc("A", "2024-03-03"));
        write(&dir, "en/c-post.mdx", &doc("C", "2024-03-03"));

        let items = loader(&dir).get_all_items("en").await.unwrap();
        let slugs: Vec<_> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, ["a-post", "b-post", "c-post"]);
    }

    #[tokio::test]
    async fn test_get_all_items_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/post.mdx", &doc("Post", "2024-01-01"));
        write(&dir, "en/notes.txt", "not content");
        write(&dir, "en/draft.md", &doc("Draft", "2024-01-01"));
        fs::create_dir_all(dir.path().join("en/folder.mdx")).unwrap();

        let items = loader(&dir).get_all_items("en").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "post");
    }

    #[tokio::test]
    async fn test_get_all_items_shares_cache_with_single_lookup() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/post.mdx", &doc("Post", "2024-01-01"));
        let loader = loader(&dir);

        let single = loader.get_item_by_slug("en", "post").await.unwrap().unwrap();
        let all = loader.get_all_items("en").await.unwrap();
        assert!(Arc::ptr_eq(&single, &all[0]));
    }

    #[tokio::test]
    async fn test_malformed_frontmatter_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/good.mdx", &doc("Good", "2024-01-01"));
        write(&dir, "en/bad.mdx", "---\ntitle: [broken\n---\nBody");
        let loader = loader(&dir);

        let err = loader.get_item_by_slug("en", "bad").await.unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
        assert!(err.path().ends_with("en/bad.mdx"));

        // A bad file fails the whole listing instead of being dropped
        assert!(loader.get_all_items("en").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_required_field_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/untitled.mdx", "---\ndate: 2024-01-01\n---\nBody");

        let err = loader(&dir).get_item_by_slug("en", "untitled").await.unwrap_err();
        assert!(matches!(err, ContentError::InvalidMeta { .. }));
    }

    #[tokio::test]
    async fn test_invalid_date_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/when.mdx", &doc("When", "someday"));

        let err = loader(&dir).get_item_by_slug("en", "when").await.unwrap_err();
        assert!(err.to_string().contains("someday"));
    }

    #[tokio::test]
    async fn test_empty_title_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/blank.mdx", "---\ntitle: ''\ndate: 2024-01-01\n---\n");

        let err = loader(&dir).get_item_by_slug("en", "blank").await.unwrap_err();
        assert!(matches!(err, ContentError::InvalidMeta { .. }));
    }

    #[tokio::test]
    async fn test_custom_projection() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/shout.mdx", &doc("quiet", "2024-01-01"));

        let loader = ContentLoader::new(dir.path(), ".mdx", ContentCache::new(), |fm: &Frontmatter| {
            let mut meta: TestMeta = fm.deserialize()?;
            meta.title = meta.title.to_uppercase();
            Ok(meta)
        });
        assert_eq!(loader.extension(), "mdx");

        let item = loader.get_item_by_slug("en", "shout").await.unwrap().unwrap();
        assert_eq!(item.meta.title, "QUIET");
    }

    #[tokio::test]
    async fn test_static_params() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en/a.mdx", &doc("A", "2024-01-01"));
        write(&dir, "en/b.mdx", &doc("B", "2024-02-01"));
        write(&dir, "hr/a.mdx", &doc("A hr", "2024-01-01"));

        let langs = vec!["en".to_string(), "hr".to_string(), "de".to_string()];
        let params = loader(&dir).static_params(&langs).await.unwrap();
        assert_eq!(
            params,
            vec![
                ("en".to_string(), "b".to_string()),
                ("en".to_string(), "a".to_string()),
                ("hr".to_string(), "a".to_string()),
            ]
        );
    }
}
