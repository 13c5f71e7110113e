//! Shared test utilities for the contentfold test suite.
//!
//! Provides a programmatic content-tree fixture and lookup helpers that
//! panic with a clear message on miss, so individual tests read as
//! assertions rather than plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let collections = collect::build(tmp.path()).unwrap();
//!
//! let post = find_post(&collections, "hello-world");
//! assert_eq!(post.title, "Hello World");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::collect::Collections;
use crate::types::{Chapter, Page, Post, Tutorial};

/// Write one fixture file, creating parent directories as needed.
pub fn write_content(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Build a representative content tree in a temp directory:
///
/// ```text
/// pages/about.mdx, pages/legal/privacy.mdx
/// posts/hello-world.mdx (2024), posts/older-post.mdx (2023, external)
/// tutorials/react-basics/  index + 3 chapters + 1 draft appendix
/// tutorials/empty-tutorial/  index only, zero chapters
/// ```
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_content(
        root,
        "pages/about.mdx",
        "---\n\
         title: About Me\n\
         description: Who writes this site\n\
         cover: /covers/about.png\n\
         ---\n\
         \n\
         # Hello\n\
         \n\
         I write about maintainable frontend code.\n",
    );

    write_content(
        root,
        "pages/legal/privacy.mdx",
        "---\n\
         title: Privacy\n\
         description: Privacy policy\n\
         cover: /covers/legal.png\n\
         ---\n\
         \n\
         No tracking here.\n",
    );

    write_content(
        root,
        "posts/hello-world.mdx",
        "---\n\
         title: Hello World\n\
         description: The first post\n\
         date: 2024-03-01\n\
         cover: /covers/hello.png\n\
         ---\n\
         \n\
         # Intro\n\
         \n\
         Some text\n\
         \n\
         ## Intro\n\
         \n\
         More text.\n",
    );

    write_content(
        root,
        "posts/older-post.mdx",
        "---\n\
         title: Older Post\n\
         description: Syndicated from elsewhere\n\
         date: 2023-01-15\n\
         cover: /covers/older.png\n\
         external: true\n\
         ---\n\
         \n\
         Read this on the original site.\n",
    );

    write_content(
        root,
        "tutorials/react-basics/index.mdx",
        "---\n\
         title: React Basics\n\
         description: A gentle introduction to React\n\
         tutorialId: react-basics\n\
         date: 2024-01-10\n\
         level: beginner\n\
         relatedProductTitle: Maintainable React\n\
         relatedProductLink: https://example.com/books/maintainable-react\n\
         relatedProductDescription: Go deeper with the book\n\
         relatedProductCover: /covers/book.png\n\
         ---\n\
         \n\
         # What You Will Learn\n\
         \n\
         Components, hooks, effects.\n",
    );

    write_content(
        root,
        "tutorials/react-basics/01-setup.mdx",
        "---\n\
         title: Setting Up\n\
         description: Tooling and first component\n\
         date: 2024-01-11\n\
         tutorialId: react-basics\n\
         order: 1\n\
         highlights:\n\
         \x20 - Install the toolchain\n\
         \x20 - Render a component\n\
         leading: Next we look at hooks.\n\
         summary: You rendered your first component.\n\
         next: 02-hooks\n\
         ---\n\
         \n\
         # Setup\n\
         \n\
         Install things.\n",
    );

    write_content(
        root,
        "tutorials/react-basics/02-hooks.mdx",
        "---\n\
         title: Hooks\n\
         description: State and effects\n\
         date: 2024-01-12\n\
         tutorialId: react-basics\n\
         order: 2\n\
         highlights:\n\
         \x20 - useState\n\
         \x20 - useEffect\n\
         leading: Effects close the loop.\n\
         summary: Hooks hold state between renders.\n\
         prev: 01-setup\n\
         next: 03-effects\n\
         ---\n\
         \n\
         # Hooks\n\
         \n\
         ```jsx\n\
         # not a heading, just a comment in a snippet\n\
         ```\n\
         \n\
         ## useState\n",
    );

    write_content(
        root,
        "tutorials/react-basics/03-effects.mdx",
        "---\n\
         title: Effects\n\
         description: Synchronizing with the outside world\n\
         date: 2024-01-13\n\
         tutorialId: react-basics\n\
         order: 3\n\
         highlights:\n\
         \x20 - Dependencies\n\
         \x20 - Cleanup\n\
         leading: That wraps up the basics.\n\
         summary: Effects run after render.\n\
         prev: 02-hooks\n\
         ---\n\
         \n\
         # Effects\n\
         \n\
         The last chapter.\n",
    );

    write_content(
        root,
        "tutorials/react-basics/99-appendix.mdx",
        "---\n\
         title: Appendix\n\
         description: Work in progress\n\
         date: 2024-01-14\n\
         tutorialId: react-basics\n\
         order: 99\n\
         highlights:\n\
         \x20 - Extra reading\n\
         leading: Nothing follows.\n\
         summary: Bonus material.\n\
         draft: true\n\
         ---\n\
         \n\
         Draft notes.\n",
    );

    write_content(
        root,
        "tutorials/empty-tutorial/index.mdx",
        "---\n\
         title: Empty Tutorial\n\
         description: Announced, not yet written\n\
         tutorialId: empty-tutorial\n\
         date: 2024-02-01\n\
         level: intermediate\n\
         relatedProductTitle: Placeholder Product\n\
         relatedProductLink: https://example.com/products/placeholder\n\
         relatedProductDescription: Coming soon\n\
         relatedProductCover: /covers/placeholder.png\n\
         ---\n\
         \n\
         Chapters are on the way.\n",
    );

    tmp
}

// =========================================================================
// Collection lookups — panic with a clear message on miss
// =========================================================================

/// Find a page by route parameter. Panics if not found.
pub fn find_page<'a>(collections: &'a Collections, params: &str) -> &'a Page {
    collections.page_by_params(params).unwrap_or_else(|| {
        let available: Vec<&str> = collections
            .pages
            .iter()
            .map(|p| p.slug_as_params.as_str())
            .collect();
        panic!("page '{params}' not found. Available: {available:?}")
    })
}

/// Find a post by route parameter. Panics if not found.
pub fn find_post<'a>(collections: &'a Collections, params: &str) -> &'a Post {
    collections.post_by_params(params).unwrap_or_else(|| {
        let available: Vec<&str> = collections
            .posts
            .iter()
            .map(|p| p.slug_as_params.as_str())
            .collect();
        panic!("post '{params}' not found. Available: {available:?}")
    })
}

/// Find a tutorial by route parameter. Panics if not found.
pub fn find_tutorial<'a>(collections: &'a Collections, params: &str) -> &'a Tutorial {
    collections.tutorial_by_params(params).unwrap_or_else(|| {
        let available: Vec<&str> = collections
            .tutorials
            .iter()
            .map(|t| t.slug_as_params.as_str())
            .collect();
        panic!("tutorial '{params}' not found. Available: {available:?}")
    })
}

/// Find a chapter by route parameter. Panics if not found.
pub fn find_chapter<'a>(collections: &'a Collections, params: &str) -> &'a Chapter {
    collections.chapter_by_params(params).unwrap_or_else(|| {
        let available: Vec<&str> = collections
            .chapters
            .iter()
            .map(|c| c.slug_as_params.as_str())
            .collect();
        panic!("chapter '{params}' not found. Available: {available:?}")
    })
}
