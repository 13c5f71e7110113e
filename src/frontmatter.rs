//! Front-matter splitting and schema parsing.
//!
//! Every source file opens with a YAML metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2024-03-01
//! ---
//!
//! Body starts here.
//! ```
//!
//! [`split`] separates the YAML from the body without interpreting either.
//! [`parse`] deserializes the YAML into a typed per-kind schema struct —
//! required vs optional fields are the struct definition, and a missing or
//! mistyped field surfaces as a YAML error naming the field. The collection
//! builder wraps that error with the offending file path, so a broken
//! content change fails the build with both.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing front-matter block (file must start with '---')")]
    MissingBlock,
    #[error("unterminated front-matter block (no closing '---')")]
    Unterminated,
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

const DELIMITER: &str = "---";

/// Split a raw source file into `(yaml, body)`.
///
/// The file must start with a `---` line; the block ends at the next `---`
/// line. The body is everything after the closing delimiter, leading newline
/// trimmed. Neither half is parsed here.
pub fn split(raw: &str) -> Result<(&str, &str), FrontMatterError> {
    let rest = raw
        .strip_prefix(DELIMITER)
        .ok_or(FrontMatterError::MissingBlock)?;
    let rest = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
        .ok_or(FrontMatterError::MissingBlock)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body.strip_prefix('\n').unwrap_or(body)));
        }
        offset += line.len();
    }
    Err(FrontMatterError::Unterminated)
}

/// Deserialize a front-matter YAML block into a typed schema.
pub fn parse<T: DeserializeOwned>(yaml: &str) -> Result<T, FrontMatterError> {
    Ok(serde_yaml::from_str(yaml)?)
}
