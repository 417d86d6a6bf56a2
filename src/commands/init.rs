//! Initialize a new content site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::ContentKind;
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?}", config_path);
    }

    let config = SiteConfig::default();

    // One directory per collection and language
    for kind in ContentKind::ALL {
        let content_dir = target_dir.join(config.collection(kind).content_dir);
        for lang in &config.languages {
            fs::create_dir_all(content_dir.join(lang))?;
        }
    }
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    let config_content = format!(
        "# Content configuration\n# Every key is optional; missing keys use these defaults.\n\n{}",
        serde_yaml::to_string(&config)?
    );
    fs::write(&config_path, config_content)?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let ext = &config.content_extension;
    let lang = &config.default_language;

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: The first post on this site
thumbnail: hello-world.webp
author:
  name: Editorial Team
  photo: team
  title: Editors
---

Welcome! Posts live in `{}/<lang>/<slug>.{}`; the file name is the slug.
"#,
        today, config.blog.content_dir, ext
    );
    fs::write(
        target_dir
            .join(&config.blog.content_dir)
            .join(lang)
            .join(format!("hello-world.{}", ext)),
        sample_post,
    )?;

    let sample_project = format!(
        r#"---
title: Sample Project
description: Replace this with a real project
date: {}
status: ongoing
category: General
---

Describe the project here.
"#,
        today
    );
    fs::write(
        target_dir
            .join(&config.projects.content_dir)
            .join(lang)
            .join(format!("sample-project.{}", ext)),
        sample_project,
    )?;

    tracing::debug!("Initialized site in {:?}", target_dir);
    Ok(())
}
