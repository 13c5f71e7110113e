//! # Contentfold
//!
//! A build-time content collection pipeline for MDX blogs and tutorials.
//! Your filesystem is the data source: `.mdx` files with YAML front-matter
//! become typed, addressable, cross-linked records — the renderer's entire
//! world.
//!
//! # Architecture: One-Pass Pipeline
//!
//! ```text
//! content/  →  Collection Builder  →  Cross-Reference Resolver  →  consumers
//!              (per-file transform)    (across one collection)     (renderer, feed)
//! ```
//!
//! Data flows one way. The whole pipeline is synchronous, single-threaded,
//! and rebuilt from scratch on every invocation — collections are tens to
//! low hundreds of documents, so incremental machinery would cost more than
//! it saves. Everything fatal is detected while building (schema violations,
//! slug collisions), so a broken content change fails the build instead of
//! corrupting a live page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | Walks the content root, validates and assembles the four collections |
//! | [`headings`] | ATX heading extraction + GitHub-style anchor slugger |
//! | [`routes`] | Content kinds, file patterns, slug assignment |
//! | [`frontmatter`] | YAML front-matter splitting and schema parsing |
//! | [`resolve`] | Chapter grouping, prev/next navigation, dangling-ref diagnostics |
//! | [`types`] | Record types handed to the renderer (`Page`, `Post`, `Tutorial`, `Chapter`) |
//! | [`feed`] | RSS 2.0 generation from the Post collection |
//! | [`config`] | `site.toml` loading and validation |
//! | [`output`] | CLI inventory formatting |
//!
//! # Design Decisions
//!
//! ## Raw Body Handles
//!
//! Records carry the untransformed MDX source ([`types::Body`]), not
//! rendered HTML. Rendering belongs to the presentation layer; keeping the
//! pipeline renderer-agnostic means heading anchors and routes stay stable
//! no matter what consumes them.
//!
//! ## Author-Declared Navigation
//!
//! Chapter ordering (`order`) and prev/next links are front-matter, not
//! derived from file order or recomputed from the collection. The pipeline
//! resolves declared identifiers into links by string assembly and never
//! second-guesses the author — a missing target is reported by `check` as a
//! warning, not silently repaired.
//!
//! ## Explicit Collections, No Ambient State
//!
//! [`collect::build`] returns one [`collect::Collections`] value; every
//! consumer takes it by reference. There is no global cache and no
//! mutation after construction.

pub mod collect;
pub mod config;
pub mod feed;
pub mod frontmatter;
pub mod headings;
pub mod output;
pub mod resolve;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
