use crate::dom::DocumentNode;

/// Scale note printed above most financial tables; never a caption.
pub const SCALE_ANNOTATION: &str = "in millions";

fn is_caption_candidate(trimmed: &str) -> bool {
    !(trimmed.is_empty() || trimmed.contains('\n') || trimmed.contains(SCALE_ANNOTATION))
}

/// Walks backwards from `table` through its previous siblings and returns the text of the
/// first one that reads like a caption: non-blank, single-line and not a scale annotation.
pub fn resolve_title<N: DocumentNode>(table: &N) -> Option<String> {
    let mut current = table.prev_sibling();
    while let Some(node) = current {
        if is_caption_candidate(&node.trimmed_text()) {
            return Some(node.text());
        }
        current = node.prev_sibling();
    }

    tracing::debug!("no caption found before table");
    None
}
