//! ATX heading extraction for in-page tables of contents.
//!
//! Every document type carries a `headings` sequence so the renderer can
//! build an outline and anchor links without re-parsing the body. Extraction
//! is a single pass over the raw MDX source — headings are line-anchored, so
//! a full Markdown parse buys nothing here.
//!
//! ## Level Bucketing
//!
//! Outline indentation only distinguishes three depths, so heading levels
//! collapse into three buckets:
//!
//! - `#` → [`HeadingLevel::One`]
//! - `##` → [`HeadingLevel::Two`]
//! - `###` through `######` → [`HeadingLevel::Three`]
//!
//! This flattening is intentional and load-bearing: anchor indentation in
//! the rendered outline depends on it.
//!
//! ## Anchor Slugs
//!
//! Heading slugs become URL fragments, so they must be deterministic (external
//! links reference them) and unique within one document. [`Slugger`] is
//! stateful per document: repeated heading text gets a numeric suffix
//! (`overview`, `overview-1`, `overview-2`, ...), GitHub-style.
//!
//! Headings inside fenced code blocks are skipped — a `# comment` in a shell
//! snippet is not a heading.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Outline depth bucket for a heading.
///
/// Serialized lowercase (`"one"`, `"two"`, `"three"`) — these values are part
/// of the record contract consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Bucket a raw hash count. Anything deeper than `###` flattens to Three.
    fn from_hashes(count: usize) -> Self {
        match count {
            1 => HeadingLevel::One,
            2 => HeadingLevel::Two,
            _ => HeadingLevel::Three,
        }
    }
}

/// One extracted heading, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    /// Heading text with the `#` markers and surrounding whitespace removed.
    pub text: String,
    /// Document-unique anchor slug.
    pub slug: String,
}

/// `#` to `######`, whitespace, then non-empty text. Anchored at line start.
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid")
});

/// Stateful anchor slug generator, unique within one document.
///
/// Mirrors GitHub's anchor rules: lowercase, punctuation dropped, whitespace
/// becomes dashes. A repeated slug gets a `-N` suffix where N counts prior
/// occurrences of the same base.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the anchor slug for one heading text.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.seen.contains_key(&slug) {
            let counter = self.seen.entry(base.clone()).or_insert(0);
            *counter += 1;
            slug = format!("{base}-{counter}");
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

/// Lowercase, keep alphanumerics/dashes/underscores, whitespace → dash,
/// drop everything else. No deduplication — that's [`Slugger`]'s job.
fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('-');
        }
    }
    out
}

/// Extract all ATX headings from a raw body, in source order.
///
/// A body with no headings produces an empty vector. Lines inside fenced
/// code blocks (``` or ~~~) are ignored.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut slugger = Slugger::new();
    let mut headings = Vec::new();
    let mut fence: Option<&str> = None;

    for line in body.lines() {
        if let Some(marker) = fence {
            if line.starts_with(marker) {
                fence = None;
            }
            continue;
        }
        if line.starts_with("```") {
            fence = Some("```");
            continue;
        }
        if line.starts_with("~~~") {
            fence = Some("~~~");
            continue;
        }
        if let Some(caps) = ATX_HEADING.captures(line) {
            let text = caps[2].trim().to_string();
            let slug = slugger.slug(&text);
            headings.push(Heading {
                level: HeadingLevel::from_hashes(caps[1].len()),
                text,
                slug,
            });
        }
    }

    headings
}
