//! Static export parameters

use anyhow::Result;

use crate::content::ContentKind;
use crate::Site;

/// Every content URL path the static export has to render
pub async fn collect(site: &Site) -> Result<Vec<String>> {
    let langs = &site.config.languages;
    let mut paths = Vec::new();

    for kind in ContentKind::ALL {
        let params = match kind {
            ContentKind::Blog => site.blog().static_params(langs).await?,
            ContentKind::Projects => site.projects().static_params(langs).await?,
        };
        tracing::debug!("{}: {} pages", kind, params.len());
        paths.extend(
            params
                .into_iter()
                .map(|(lang, slug)| format!("/{}/{}/{}", lang, kind, slug)),
        );
    }

    Ok(paths)
}

/// Print one path per line
pub async fn run(site: &Site) -> Result<()> {
    for path in collect(site).await? {
        println!("{}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_collect_paths() {
        let dir = TempDir::new().unwrap();
        let blog_hr = dir.path().join("blog/content/hr");
        let projects_en = dir.path().join("projects/content/en");
        fs::create_dir_all(&blog_hr).unwrap();
        fs::create_dir_all(&projects_en).unwrap();
        fs::write(
            blog_hr.join("dobrodosli.mdx"),
            "---\ntitle: Dobrodošli\ndate: 2024-01-01\ndescription: d\nthumbnail: t\nauthor:\n  name: A\n  photo: a\n  title: T\n---\n",
        )
        .unwrap();
        fs::write(
            projects_en.join("kiln.mdx"),
            "---\ntitle: Kiln\ndescription: d\ndate: 2024-01-01\nstatus: ongoing\ncategory: c\n---\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let paths = collect(&site).await.unwrap();
        assert_eq!(paths, ["/hr/blog/dobrodosli", "/en/projects/kiln"]);
    }
}
