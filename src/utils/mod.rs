//! Utility modules for formatting, DOM access, and docs rendering.
//!
//! Provides:
//! - [`join_classes`] - Class list assembly
//! - [`Translations`] - Token lookup with `{name}` interpolation
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
pub mod format;
pub mod i18n;
mod markdown;

pub use format::join_classes;
pub use i18n::Translations;
pub use markdown::markdown_to_html;
