//! Create a new blog post or project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentKind;
use crate::Site;

const POST_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
description: ''
thumbnail: ''
author:
  name: ''
  photo: ''
  title: ''
---
"#;

const PROJECT_SCAFFOLD: &str = r#"---
title: {{ title }}
description: ''
date: {{ date }}
status: ongoing
category: ''
---
"#;

/// Create a content file from the collection's scaffold.
///
/// `scaffolds/<kind>.<ext>` in the site directory overrides the built-in one.
pub fn create(site: &Site, kind: ContentKind, title: &str, lang: Option<&str>) -> Result<PathBuf> {
    let lang = site.language(lang)?;
    let now = chrono::Local::now();

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = site.content_dir(kind).join(&lang);
    fs::create_dir_all(&target_dir)?;

    let extension = &site.config.content_extension;
    let file_path = target_dir.join(format!("{}.{}", slug, extension));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = site
        .base_dir
        .join("scaffolds")
        .join(format!("{}.{}", kind, extension));
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        match kind {
            ContentKind::Blog => POST_SCAFFOLD.to_string(),
            ContentKind::Projects => PROJECT_SCAFFOLD.to_string(),
        }
    };

    let content = scaffold
        .replace("{{ title }}", &yaml_scalar(title)?)
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    fs::write(&file_path, content)?;
    tracing::info!("Created {} {:?}", kind, file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, kind: ContentKind, title: &str, lang: Option<&str>) -> Result<()> {
    let path = create(site, kind, title, lang)?;
    println!("Created: {:?}", path);
    Ok(())
}

/// A string as a YAML scalar, quoted when needed (`a: b` -> `'a: b'`)
fn yaml_scalar(value: &str) -> Result<String> {
    Ok(serde_yaml::to_string(value)?.trim_end().to_string())
}
