//! Collection building: directory traversal, validation, record assembly.
//!
//! This is the pipeline's single entry point. One call to [`build`] walks
//! the content root and produces the four in-memory collections:
//!
//! ```text
//! content/
//! ├── site.toml                        # Site config (optional)
//! ├── pages/
//! │   └── about.mdx                    # Page → /about
//! ├── posts/
//! │   └── hello-world.mdx              # Post → /posts/hello-world
//! └── tutorials/
//!     └── react-basics/
//!         ├── index.mdx                # Tutorial → /tutorials/react-basics
//!         ├── 01-setup.mdx             # Chapter → /tutorials/react-basics/01-setup
//!         └── 02-hooks.mdx             # Chapter → /tutorials/react-basics/02-hooks
//! ```
//!
//! Per document: split and validate front-matter against the kind's schema,
//! derive the slug pair, extract headings, and attach the raw body handle.
//! Collections keep directory-traversal order (walkdir, sorted by file
//! name), so output is deterministic for a given tree.
//!
//! ## Validation
//!
//! All fatal conditions surface here, never at render time:
//! - Missing or mistyped required front-matter field → [`BuildError::Schema`]
//!   naming the file and field.
//! - Two documents of one kind deriving the same route parameter →
//!   [`BuildError::SlugCollision`] naming both files.
//!
//! Front-matter keys are camelCase on disk (`tutorialId`, `coverSize`) —
//! the authoring convention predates this tool. Unknown keys are ignored,
//! not rejected: authors keep scratch fields in front-matter.
//!
//! Collections are immutable after build. There is no incremental update;
//! removing a source file simply removes its record on the next run.

use crate::config::{self, SiteConfig};
use crate::frontmatter::{self, FrontMatterError};
use crate::headings::extract_headings;
use crate::routes::ContentKind;
use crate::types::{Body, Chapter, Page, Post, RelatedProduct, Tutorial};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid front-matter in {kind} '{path}': {source}")]
    Schema {
        kind: &'static str,
        path: String,
        #[source]
        source: FrontMatterError,
    },
    #[error("Slug collision: {kind} slug '{slug}' is produced by both '{first}' and '{second}'")]
    SlugCollision {
        kind: &'static str,
        slug: String,
        first: String,
        second: String,
    },
}

/// The four content collections plus site config, built once per run and
/// read-only afterwards.
///
/// Pass this by reference to every consumer — it is the explicit dependency
/// replacing the ambient module-level caches a framework would give you.
#[derive(Debug, Serialize)]
pub struct Collections {
    pub config: SiteConfig,
    pub pages: Vec<Page>,
    pub posts: Vec<Post>,
    pub tutorials: Vec<Tutorial>,
    pub chapters: Vec<Chapter>,
}

impl Collections {
    /// Look up a page by route parameter. A miss is the caller's 404.
    pub fn page_by_params(&self, params: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug_as_params == params)
    }

    pub fn post_by_params(&self, params: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug_as_params == params)
    }

    pub fn tutorial_by_params(&self, params: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.slug_as_params == params)
    }

    /// Direct chapter lookup. Drafts are reachable here even though they
    /// are hidden from listings.
    pub fn chapter_by_params(&self, params: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.slug_as_params == params)
    }

    pub fn tutorial_by_id(&self, tutorial_id: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.tutorial_id == tutorial_id)
    }

    pub fn document_count(&self) -> usize {
        self.pages.len() + self.posts.len() + self.tutorials.len() + self.chapters.len()
    }
}

/// Build all collections from a content root.
pub fn build(root: &Path) -> Result<Collections, BuildError> {
    let config = config::load_config(root)?;

    let pages = build_kind(root, ContentKind::Page, assemble_page)?;
    let posts = build_kind(root, ContentKind::Post, assemble_post)?;
    let tutorials = build_kind(root, ContentKind::Tutorial, assemble_tutorial)?;
    let chapters = build_kind(root, ContentKind::Chapter, assemble_chapter)?;

    Ok(Collections {
        config,
        pages,
        posts,
        tutorials,
        chapters,
    })
}

// ============================================================================
// Per-kind front-matter schemas
// ============================================================================
//
// Required vs optional is the struct definition; serde reports the missing
// field by name and the Schema error wraps in the file path.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    title: String,
    description: String,
    category: Option<String>,
    cover: String,
    cover_size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostMeta {
    title: String,
    description: String,
    date: NaiveDate,
    category: Option<String>,
    cover: String,
    #[serde(default)]
    external: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TutorialMeta {
    title: String,
    description: String,
    tutorial_id: String,
    date: NaiveDate,
    level: String,
    cover: Option<String>,
    related_product_title: String,
    related_product_link: String,
    related_product_description: String,
    related_product_cover: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChapterMeta {
    title: String,
    description: String,
    date: NaiveDate,
    tutorial_id: String,
    order: u32,
    highlights: Vec<String>,
    leading: String,
    summary: String,
    category: Option<String>,
    cover: Option<String>,
    #[serde(default)]
    draft: bool,
    prev: Option<String>,
    next: Option<String>,
}

// ============================================================================
// Traversal and assembly
// ============================================================================

/// Derived addressing shared by every record: source path, slug pair,
/// headings, raw body.
struct DocumentParts {
    source_path: String,
    slug_as_params: String,
    slug: String,
    body: String,
}

/// Walk one kind's directory and assemble its collection in traversal order.
fn build_kind<T>(
    root: &Path,
    kind: ContentKind,
    assemble: fn(&DocumentParts, &str) -> Result<T, FrontMatterError>,
) -> Result<Vec<T>, BuildError> {
    let mut records = Vec::new();
    // source path already claimed for each derived route parameter
    let mut claimed: HashMap<String, String> = HashMap::new();

    for (rel_path, abs_path) in source_files(&root.join(kind.directory()), kind)? {
        let raw = fs::read_to_string(&abs_path)?;
        let (yaml, body) = frontmatter::split(&raw).map_err(|source| BuildError::Schema {
            kind: kind.label(),
            path: rel_path.clone(),
            source,
        })?;

        let slug_as_params = kind.slug_as_params(&rel_path);
        if let Some(first) = claimed.insert(slug_as_params.clone(), rel_path.clone()) {
            return Err(BuildError::SlugCollision {
                kind: kind.label(),
                slug: slug_as_params,
                first,
                second: rel_path,
            });
        }

        let parts = DocumentParts {
            source_path: rel_path.clone(),
            slug: kind.slug(&slug_as_params),
            slug_as_params,
            body: body.to_string(),
        };
        let record = assemble(&parts, yaml).map_err(|source| BuildError::Schema {
            kind: kind.label(),
            path: rel_path,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// All of a kind's source files under `dir`, as `(relative, absolute)`
/// pairs in sorted traversal order. A missing directory is an empty
/// collection, not an error.
fn source_files(dir: &Path, kind: ContentKind) -> Result<Vec<(String, PathBuf)>, BuildError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if kind.matches(&rel) {
            files.push((rel, entry.path().to_path_buf()));
        }
    }
    Ok(files)
}

fn assemble_page(parts: &DocumentParts, yaml: &str) -> Result<Page, FrontMatterError> {
    let meta: PageMeta = frontmatter::parse(yaml)?;
    Ok(Page {
        source_path: parts.source_path.clone(),
        title: meta.title,
        description: meta.description,
        category: meta.category,
        cover: meta.cover,
        cover_size: meta.cover_size,
        slug_as_params: parts.slug_as_params.clone(),
        slug: parts.slug.clone(),
        headings: extract_headings(&parts.body),
        body: Body {
            raw: parts.body.clone(),
        },
    })
}

fn assemble_post(parts: &DocumentParts, yaml: &str) -> Result<Post, FrontMatterError> {
    let meta: PostMeta = frontmatter::parse(yaml)?;
    Ok(Post {
        source_path: parts.source_path.clone(),
        title: meta.title,
        description: meta.description,
        date: meta.date,
        category: meta.category,
        cover: meta.cover,
        external: meta.external,
        slug_as_params: parts.slug_as_params.clone(),
        slug: parts.slug.clone(),
        headings: extract_headings(&parts.body),
        body: Body {
            raw: parts.body.clone(),
        },
    })
}

fn assemble_tutorial(parts: &DocumentParts, yaml: &str) -> Result<Tutorial, FrontMatterError> {
    let meta: TutorialMeta = frontmatter::parse(yaml)?;
    Ok(Tutorial {
        source_path: parts.source_path.clone(),
        title: meta.title,
        description: meta.description,
        tutorial_id: meta.tutorial_id,
        date: meta.date,
        level: meta.level,
        cover: meta.cover,
        related_product: RelatedProduct {
            title: meta.related_product_title,
            link: meta.related_product_link,
            description: meta.related_product_description,
            cover: meta.related_product_cover,
        },
        slug_as_params: parts.slug_as_params.clone(),
        slug: parts.slug.clone(),
        headings: extract_headings(&parts.body),
        body: Body {
            raw: parts.body.clone(),
        },
    })
}

fn assemble_chapter(parts: &DocumentParts, yaml: &str) -> Result<Chapter, FrontMatterError> {
    let meta: ChapterMeta = frontmatter::parse(yaml)?;
    Ok(Chapter {
        source_path: parts.source_path.clone(),
        title: meta.title,
        description: meta.description,
        date: meta.date,
        tutorial_id: meta.tutorial_id,
        order: meta.order,
        highlights: meta.highlights,
        leading: meta.leading,
        summary: meta.summary,
        category: meta.category,
        cover: meta.cover,
        draft: meta.draft,
        prev: meta.prev,
        next: meta.next,
        slug_as_params: parts.slug_as_params.clone(),
        slug: parts.slug.clone(),
        headings: extract_headings(&parts.body),
        body: Body {
            raw: parts.body.clone(),
        },
    })
}
