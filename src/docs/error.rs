//! Error types for the docs site.
//!
//! - [`DocsError`] - Embedded page descriptions that fail to load

use std::fmt;

/// Errors raised while loading the embedded docs pages.
#[derive(Debug, Clone, PartialEq)]
pub enum DocsError {
    /// Page TOML failed to parse
    Parse { page: &'static str, message: String },
    /// A section references a demo that is not registered
    UnknownDemo { page: String, demo: String },
    /// Two pages share a slug
    DuplicateSlug(String),
}

impl fmt::Display for DocsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { page, message } => {
                write!(f, "Failed to parse docs page '{}': {}", page, message)
            }
            Self::UnknownDemo { page, demo } => {
                write!(f, "Page '{}' references unknown demo '{}'", page, demo)
            }
            Self::DuplicateSlug(slug) => write!(f, "Duplicate docs page slug '{}'", slug),
        }
    }
}

impl std::error::Error for DocsError {}
