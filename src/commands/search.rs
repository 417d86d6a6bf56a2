//! Search a collection and show one page of results

use anyhow::Result;
use std::sync::Arc;

use crate::content::{ContentItem, ContentKind};
use crate::search::{PageLink, SearchAndPagination, Searchable};
use crate::Site;

/// Filter a collection by `query` and print the requested page
pub async fn run(
    site: &Site,
    kind: ContentKind,
    query: &str,
    lang: Option<&str>,
    page: usize,
) -> Result<()> {
    let lang = site.language(lang)?;

    let output = match kind {
        ContentKind::Blog => {
            let posts = site.blog().get_all_items(&lang).await?;
            let mut state = site.search(kind, posts);
            apply(&mut state, query, page);
            render(&state, |post| format!("{} (by {})", post.meta.title, post.meta.author.name))
        }
        ContentKind::Projects => {
            let projects = site.projects().get_all_items(&lang).await?;
            let mut state = site.search(kind, projects);
            apply(&mut state, query, page);
            render(&state, |project| {
                format!("{} [{}, {}]", project.meta.title, project.meta.category, project.meta.status)
            })
        }
    };

    print!("{}", output);
    Ok(())
}

/// Set the query, then move to `page` clamped to the available pages
fn apply<T: Searchable>(state: &mut SearchAndPagination<T>, query: &str, page: usize) {
    state.set_query(query.trim());
    state.set_page(page.clamp(1, state.total_pages().max(1)));
    tracing::debug!(
        "Query {:?}: {} matches, page {}/{}",
        state.query(),
        state.filtered_count(),
        state.current_page(),
        state.total_pages()
    );
}

/// Text listing of the current page plus the page-number bar
pub fn render<M, F>(state: &SearchAndPagination<Arc<ContentItem<M>>>, describe: F) -> String
where
    M: Searchable,
    F: Fn(&ContentItem<M>) -> String,
{
    let mut out = String::new();

    if state.query().is_empty() {
        out.push_str(&format!("{} items", state.filtered_count()));
    } else {
        out.push_str(&format!(
            "{} of {} items match {:?}",
            state.filtered_count(),
            state.items().len(),
            state.query()
        ));
    }
    if state.total_pages() > 0 {
        out.push_str(&format!(
            ", page {} of {}",
            state.current_page(),
            state.total_pages()
        ));
    }
    out.push('\n');

    for item in state.paginated_items() {
        out.push_str(&format!(
            "  {} - {} <{}>\n",
            item.date.format("%Y-%m-%d"),
            describe(item.as_ref()),
            item.slug
        ));
    }

    if state.shows_pagination() {
        out.push_str(&format!(
            "  {}\n",
            page_bar(&state.visible_page_numbers(), state.current_page())
        ));
    }

    out
}

/// Page bar with the current page in brackets: `1 … 4 [5] 6 … 10`
pub fn page_bar(links: &[PageLink], current_page: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == current_page => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
