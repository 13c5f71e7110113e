//! Cross-reference resolution across the chapter collection.
//!
//! Tutorials and chapters are linked three ways, all author-declared:
//!
//! - `tutorial_id` groups chapters under their tutorial; `order` fixes the
//!   listing sequence (ties are author error, not validated here).
//! - `prev`/`next` name sibling chapter files for in-chapter navigation.
//! - A chapter with no `next` is the terminal chapter; its "what's next"
//!   slot shows the tutorial's related-product block instead.
//!
//! ## prev/next are strings, not lookups
//!
//! A declared identifier resolves to a link by dropping the current
//! chapter's final slug segment and appending the identifier — pure string
//! assembly. Nothing checks that the target chapter exists, so a typo ships
//! as a dead link. That behavior is deliberate and preserved;
//! [`dangling_refs`] reports such typos as non-fatal warnings for `check`,
//! without ever failing a build or patching the link.

use crate::collect::Collections;
use crate::types::Chapter;
use serde::Serialize;

/// What the renderer should show after a chapter's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// Link to the declared next chapter.
    Chapter { href: String },
    /// Terminal chapter: substitute the tutorial's related-product block.
    RelatedProduct,
}

/// All chapters of one tutorial, listing order.
///
/// Filters by `tutorial_id`, sorts by `order` ascending, and hides drafts.
/// Zero chapters is a valid empty result — the caller renders a not-found
/// view, nothing crashes.
pub fn chapters_of<'a>(collections: &'a Collections, tutorial_id: &str) -> Vec<&'a Chapter> {
    let mut chapters: Vec<&Chapter> = collections
        .chapters
        .iter()
        .filter(|c| c.tutorial_id == tutorial_id && !c.draft)
        .collect();
    chapters.sort_by_key(|c| c.order);
    chapters
}

/// Resolve a chapter's forward navigation.
pub fn next_step(chapter: &Chapter) -> NextStep {
    match &chapter.next {
        Some(target) => NextStep::Chapter {
            href: sibling_href(&chapter.slug, target),
        },
        None => NextStep::RelatedProduct,
    }
}

/// Resolve a chapter's backward navigation, if declared.
pub fn prev_href(chapter: &Chapter) -> Option<String> {
    chapter
        .prev
        .as_ref()
        .map(|target| sibling_href(&chapter.slug, target))
}

/// Swap the final slug segment for the declared sibling identifier.
///
/// `/tutorials/react-basics/02-hooks` + `03-effects` →
/// `/tutorials/react-basics/03-effects`. No existence check.
fn sibling_href(slug: &str, target: &str) -> String {
    match slug.rsplit_once('/') {
        Some((parent, _)) => format!("{parent}/{target}"),
        None => format!("/{target}"),
    }
}

/// A declared prev/next identifier that resolves to no real chapter.
#[derive(Debug, Clone, Serialize)]
pub struct DanglingRef {
    /// Source path of the chapter declaring the reference.
    pub source_path: String,
    /// Which field: `"prev"` or `"next"`.
    pub field: &'static str,
    /// The identifier as declared.
    pub target: String,
    /// The dead link it would produce.
    pub href: String,
}

/// Cross-check every declared prev/next against the chapter collection.
///
/// Diagnostic only: dead links are reported, never fixed and never fatal.
pub fn dangling_refs(collections: &Collections) -> Vec<DanglingRef> {
    let mut dangling = Vec::new();
    for chapter in &collections.chapters {
        for (field, declared) in [("prev", &chapter.prev), ("next", &chapter.next)] {
            let Some(target) = declared else { continue };
            let href = sibling_href(&chapter.slug, target);
            if !collections.chapters.iter().any(|c| c.slug == href) {
                dangling.push(DanglingRef {
                    source_path: chapter.source_path.clone(),
                    field,
                    target: target.clone(),
                    href,
                });
            }
        }
    }
    dangling
}
