//! List site content

use anyhow::Result;

use crate::content::ContentKind;
use crate::Site;

/// List a collection, newest first
pub async fn run(site: &Site, kind: ContentKind, lang: Option<&str>) -> Result<()> {
    let lang = site.language(lang)?;

    match kind {
        ContentKind::Blog => {
            let posts = site.blog().get_all_items(&lang).await?;
            println!("Posts [{}] ({}):", lang, posts.len());
            for post in posts {
                println!(
                    "  {} - {} by {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.meta.title,
                    post.meta.author.name,
                    post.slug
                );
            }
        }
        ContentKind::Projects => {
            let projects = site.projects().get_all_items(&lang).await?;
            println!("Projects [{}] ({}):", lang, projects.len());
            for project in projects {
                println!(
                    "  {} - {} ({}, {}) [{}]",
                    project.date.format("%Y-%m-%d"),
                    project.meta.title,
                    project.meta.category,
                    project.meta.status,
                    project.slug
                );
            }
        }
    }

    Ok(())
}
