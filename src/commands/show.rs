//! Show a single content item

use anyhow::Result;
use serde::Serialize;

use crate::content::{ContentItem, ContentKind};
use crate::Site;

/// Print the metadata and raw body of one item
pub async fn run(site: &Site, kind: ContentKind, slug: &str, lang: Option<&str>) -> Result<()> {
    let lang = site.language(lang)?;

    let rendered = match kind {
        ContentKind::Blog => site
            .blog()
            .get_item_by_slug(&lang, slug)
            .await?
            .map(|post| render(&post))
            .transpose()?,
        ContentKind::Projects => site
            .projects()
            .get_item_by_slug(&lang, slug)
            .await?
            .map(|project| render(&project))
            .transpose()?,
    };

    match rendered {
        Some(text) => {
            print!("{}", text);
            Ok(())
        }
        None => anyhow::bail!("Not found: {}/{}/{}", lang, kind, slug),
    }
}

/// Front-matter style rendering of an item
pub fn render<M: Serialize>(item: &ContentItem<M>) -> Result<String> {
    let meta = serde_yaml::to_string(&item.meta)?;
    Ok(format!(
        "# {}/{}\n---\n{}---\n{}",
        item.lang, item.slug, meta, item.content
    ))
}
