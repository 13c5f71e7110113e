//! CLI output formatting for the content inventory.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every document is its semantic identity — positional index + title —
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines. This makes the output readable as a content inventory while still
//! letting users trace records back to files.
//!
//! # Output Format
//!
//! ```text
//! Pages
//! 001 About Me → /about
//!     Source: about.mdx
//!
//! Posts
//! 001 Hello World → /posts/hello-world
//!     Source: hello-world.mdx
//!
//! Tutorials
//! 001 React Basics → /tutorials/react-basics (3 chapters)
//!     Source: react-basics/index.mdx
//!     001 Setting Up → /tutorials/react-basics/01-setup
//!         Source: react-basics/01-setup.mdx
//!     002 Hooks → /tutorials/react-basics/02-hooks [draft]
//!
//! 4 pages, 12 posts, 2 tutorials, 7 chapters
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability; `print_*`
//! wrappers write to stdout. Format functions are pure — no I/O.

use crate::collect::Collections;
use crate::resolve::{self, DanglingRef};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for one document: index, title, route, optional marker.
fn document_line(depth: usize, index: usize, title: &str, slug: &str, marker: &str) -> String {
    format!("{}{} {} → {}{}", indent(depth), format_index(index), title, slug, marker)
}

fn source_line(depth: usize, source_path: &str) -> String {
    format!("{}Source: {}", indent(depth + 1), source_path)
}

/// Format the full content inventory after a build.
pub fn format_build_output(collections: &Collections) -> Vec<String> {
    let mut lines = Vec::new();

    if !collections.pages.is_empty() {
        lines.push("Pages".to_string());
        for (i, page) in collections.pages.iter().enumerate() {
            lines.push(document_line(0, i + 1, &page.title, &page.slug, ""));
            lines.push(source_line(0, &page.source_path));
        }
        lines.push(String::new());
    }

    if !collections.posts.is_empty() {
        lines.push("Posts".to_string());
        for (i, post) in collections.posts.iter().enumerate() {
            let marker = if post.external { " [external]" } else { "" };
            lines.push(document_line(0, i + 1, &post.title, &post.slug, marker));
            lines.push(source_line(0, &post.source_path));
        }
        lines.push(String::new());
    }

    if !collections.tutorials.is_empty() {
        lines.push("Tutorials".to_string());
        for (i, tutorial) in collections.tutorials.iter().enumerate() {
            let chapters = resolve::chapters_of(collections, &tutorial.tutorial_id);
            let header = format!(
                "{} ({} chapters)",
                document_line(0, i + 1, &tutorial.title, &tutorial.slug, ""),
                chapters.len()
            );
            lines.push(header);
            lines.push(source_line(0, &tutorial.source_path));
            for (j, chapter) in chapters.iter().enumerate() {
                lines.push(document_line(1, j + 1, &chapter.title, &chapter.slug, ""));
                lines.push(source_line(1, &chapter.source_path));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "{} pages, {} posts, {} tutorials, {} chapters",
        collections.pages.len(),
        collections.posts.len(),
        collections.tutorials.len(),
        collections.chapters.len()
    ));

    lines
}

/// Format dangling prev/next diagnostics for `check`. Empty input, empty
/// output — callers print nothing when content is clean.
pub fn format_dangling_refs(dangling: &[DanglingRef]) -> Vec<String> {
    dangling
        .iter()
        .map(|d| {
            format!(
                "warning: {}: '{}' points at '{}' but no chapter resolves to {}",
                d.source_path, d.field, d.target, d.href
            )
        })
        .collect()
}

pub fn print_build_output(collections: &Collections) {
    for line in format_build_output(collections) {
        println!("{line}");
    }
}

pub fn print_dangling_refs(dangling: &[DanglingRef]) {
    for line in format_dangling_refs(dangling) {
        eprintln!("{line}");
    }
}
