//! Content kinds and slug assignment.
//!
//! Every document gets two derived addresses, both pure functions of its
//! storage-relative path and content kind:
//!
//! - **slug params**: the path with its kind-specific filename suffix
//!   stripped. `react-basics/02-hooks.mdx` → `react-basics/02-hooks`. Used
//!   as the route parameter.
//! - **slug**: the public URL path, the kind's route root plus the params.
//!   `/tutorials/react-basics/02-hooks`.
//!
//! ## File Patterns
//!
//! Kinds map to directories under the content root, and two kinds share one:
//!
//! ```text
//! content/
//! ├── pages/        # Page:     **/*.{md,mdx}
//! ├── posts/        # Post:     **/*.{md,mdx}
//! └── tutorials/    # Tutorial: **/index.{md,mdx}   (one per tutorial folder)
//!                   # Chapter:  every other **/*.{md,mdx} in the same folders
//! ```
//!
//! Tutorials strip the whole `/index.mdx` marker so the folder name is the
//! route (`react-basics/index.mdx` → `react-basics`); everything else strips
//! just the extension.

/// The four content types, each with its own file pattern, schema, and
/// route root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Page,
    Post,
    Tutorial,
    Chapter,
}

/// Accepted source extensions, tried in order when stripping.
const EXTENSIONS: &[&str] = &[".mdx", ".md"];

impl ContentKind {
    /// Directory under the content root that holds this kind's sources.
    pub fn directory(self) -> &'static str {
        match self {
            ContentKind::Page => "pages",
            ContentKind::Post => "posts",
            ContentKind::Tutorial | ContentKind::Chapter => "tutorials",
        }
    }

    /// Route prefix for the public slug. Pages live at the site root.
    pub fn route_root(self) -> &'static str {
        match self {
            ContentKind::Page => "",
            ContentKind::Post => "/posts",
            ContentKind::Tutorial | ContentKind::Chapter => "/tutorials",
        }
    }

    /// Display name for error messages and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Page => "page",
            ContentKind::Post => "post",
            ContentKind::Tutorial => "tutorial",
            ContentKind::Chapter => "chapter",
        }
    }

    /// Whether a path (relative to this kind's directory, `/`-separated)
    /// belongs to this kind.
    pub fn matches(self, rel_path: &str) -> bool {
        if !has_source_extension(rel_path) {
            return false;
        }
        match self {
            ContentKind::Tutorial => is_index(rel_path),
            ContentKind::Chapter => !is_index(rel_path),
            ContentKind::Page | ContentKind::Post => true,
        }
    }

    /// Derive the route parameter from a relative source path.
    ///
    /// Pure and deterministic: same path and kind, same result. Collision
    /// detection across documents is the collection builder's job.
    pub fn slug_as_params(self, rel_path: &str) -> String {
        match self {
            ContentKind::Tutorial => strip_index_marker(rel_path),
            _ => strip_extension(rel_path).to_string(),
        }
    }

    /// Derive the public URL path from the route parameter.
    pub fn slug(self, params: &str) -> String {
        format!("{}/{}", self.route_root(), params)
    }
}

fn has_source_extension(path: &str) -> bool {
    EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn is_index(rel_path: &str) -> bool {
    let stem = strip_extension(rel_path);
    stem == "index" || stem.ends_with("/index")
}

fn strip_extension(path: &str) -> &str {
    for ext in EXTENSIONS {
        if let Some(stem) = path.strip_suffix(ext) {
            return stem;
        }
    }
    path
}

/// Strip a trailing `/index.{md,mdx}` so the tutorial folder becomes the
/// route. A bare `index.mdx` at the directory root degenerates to `""`.
fn strip_index_marker(rel_path: &str) -> String {
    let stem = strip_extension(rel_path);
    match stem.strip_suffix("/index") {
        Some(folder) => folder.to_string(),
        None if stem == "index" => String::new(),
        None => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_strip_extension_only() {
        assert_eq!(ContentKind::Page.slug_as_params("about.mdx"), "about");
        assert_eq!(
            ContentKind::Page.slug_as_params("legal/privacy.mdx"),
            "legal/privacy"
        );
    }

    #[test]
    fn page_slug_is_rooted_at_site_root() {
        assert_eq!(ContentKind::Page.slug("about"), "/about");
    }

    #[test]
    fn post_slug_carries_route_prefix() {
        let params = ContentKind::Post.slug_as_params("hello-world.mdx");
        assert_eq!(params, "hello-world");
        assert_eq!(ContentKind::Post.slug(&params), "/posts/hello-world");
    }

    #[test]
    fn md_extension_is_accepted() {
        assert_eq!(ContentKind::Post.slug_as_params("old-post.md"), "old-post");
        assert!(ContentKind::Post.matches("old-post.md"));
    }

    #[test]
    fn tutorial_params_strip_index_marker() {
        assert_eq!(
            ContentKind::Tutorial.slug_as_params("react-basics/index.mdx"),
            "react-basics"
        );
    }

    #[test]
    fn chapter_params_keep_tutorial_folder() {
        let params = ContentKind::Chapter.slug_as_params("react-basics/02-hooks.mdx");
        assert_eq!(params, "react-basics/02-hooks");
        assert_eq!(
            ContentKind::Chapter.slug(&params),
            "/tutorials/react-basics/02-hooks"
        );
    }

    #[test]
    fn index_files_split_tutorials_from_chapters() {
        assert!(ContentKind::Tutorial.matches("react-basics/index.mdx"));
        assert!(!ContentKind::Tutorial.matches("react-basics/02-hooks.mdx"));
        assert!(ContentKind::Chapter.matches("react-basics/02-hooks.mdx"));
        assert!(!ContentKind::Chapter.matches("react-basics/index.mdx"));
    }

    #[test]
    fn non_source_files_never_match() {
        assert!(!ContentKind::Post.matches("notes.txt"));
        assert!(!ContentKind::Chapter.matches("react-basics/cover.png"));
    }

    #[test]
    fn index_named_chapter_is_still_a_tutorial_marker_with_md() {
        assert!(ContentKind::Tutorial.matches("react-basics/index.md"));
        assert_eq!(
            ContentKind::Tutorial.slug_as_params("react-basics/index.md"),
            "react-basics"
        );
    }

    #[test]
    fn determinism_same_input_same_output() {
        for _ in 0..3 {
            assert_eq!(
                ContentKind::Chapter.slug_as_params("t/01-intro.mdx"),
                "t/01-intro"
            );
        }
    }
}
