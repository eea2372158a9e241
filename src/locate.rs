use crate::dom::DocumentNode;
use crate::model::CatalogEntry;
use crate::normalize::{matches, normalize};
use crate::title::resolve_title;

/// Table following the last text node that matches `query`.
///
/// Section titles usually appear first in a table of contents, so the last occurrence is the
/// one that sits above the real table.
pub fn find_table<N: DocumentNode>(root: &N, query: &str) -> Option<N> {
    find_table_at(root, query, -1)
}

/// Like [`find_table`] but picks the match at `index`; negative values count from the end.
pub fn find_table_at<N: DocumentNode>(root: &N, query: &str, index: isize) -> Option<N> {
    if normalize(query).is_empty() {
        tracing::debug!(query, "query normalizes to nothing; refusing to match blank text");
        return None;
    }

    let hits = root.find_all_text(matches(query));
    let Some(hit) = select(&hits, index) else {
        tracing::debug!(query, index, matches = hits.len(), "no text match at index");
        return None;
    };

    let table = hit.find_next("table");
    if table.is_none() {
        tracing::debug!(query, "title matched but no table follows it");
    }
    table
}

fn select<T>(items: &[T], index: isize) -> Option<&T> {
    match usize::try_from(index) {
        Ok(forward) => items.get(forward),
        Err(_) => items
            .len()
            .checked_sub(index.unsigned_abs())
            .and_then(|position| items.get(position)),
    }
}

/// Every table in the document, in document order, paired with its resolved caption.
pub fn catalog_tables<N: DocumentNode>(root: &N) -> Vec<CatalogEntry<N>> {
    root.find_all("table")
        .into_iter()
        .enumerate()
        .map(|(index, table)| CatalogEntry {
            index,
            title: resolve_title(&table),
            table,
        })
        .collect()
}
