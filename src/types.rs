//! Document records shared across the pipeline.
//!
//! These are the collection builder's output and the renderer's input —
//! immutable once built, serialized into the `collections.json` manifest.
//! Every record carries the same derived trio (`slug_as_params`, `slug`,
//! `headings`) plus its kind-specific front-matter fields, flattened the way
//! the renderer wants to read them.
//!
//! The body stays raw: [`Body`] is an opaque handle to the untransformed
//! MDX source. Turning it into HTML is the renderer's job, not ours.

use crate::headings::Heading;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque handle to the raw MDX source of a document, passed through to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub raw: String,
}

/// A standalone page (about, products, courses...). Routed at the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Storage-relative source path, unique within the kind.
    pub source_path: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub cover: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_size: Option<String>,
    /// Route parameter: source path minus the extension.
    pub slug_as_params: String,
    /// Public URL path.
    pub slug: String,
    pub headings: Vec<Heading>,
    pub body: Body,
}

/// A blog post, routed under `/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub source_path: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub cover: String,
    /// Published elsewhere; the listing links out instead of rendering.
    pub external: bool,
    pub slug_as_params: String,
    pub slug: String,
    pub headings: Vec<Heading>,
    pub body: Body,
}

/// Cross-promotion block shown when a tutorial's last chapter ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedProduct {
    pub title: String,
    pub link: String,
    pub description: String,
    pub cover: String,
}

/// A multi-chapter tutorial, defined by its folder's `index.mdx`.
///
/// `tutorial_id` is the author-assigned identifier chapters point back to.
/// It is independent of the path, though by convention the folder name
/// agrees with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    pub source_path: String,
    pub title: String,
    pub description: String,
    pub tutorial_id: String,
    pub date: NaiveDate,
    /// Difficulty tag ("beginner", "intermediate", ...). Free-form.
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub related_product: RelatedProduct,
    pub slug_as_params: String,
    pub slug: String,
    pub headings: Vec<Heading>,
    pub body: Body,
}

/// One chapter of a tutorial.
///
/// Navigation is author-declared, not computed: `order` fixes the listing
/// sequence, and `prev`/`next` name sibling chapter files directly. The
/// pipeline resolves those names into links without checking they exist —
/// see [`crate::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub source_path: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Foreign key to [`Tutorial::tutorial_id`].
    pub tutorial_id: String,
    /// Author-assigned listing position. Not derived from file order.
    pub order: u32,
    /// Learning objectives shown before the chapter body.
    pub highlights: Vec<String>,
    /// Narrative lead-in shown with the next-chapter card.
    pub leading: String,
    /// Wrap-up shown after the chapter body.
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Hidden from chapter listings, still reachable by direct slug.
    pub draft: bool,
    /// Sibling chapter file name, if the author declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub slug_as_params: String,
    pub slug: String,
    pub headings: Vec<Heading>,
    pub body: Body,
}
