//! Library and docs-site configuration.
//!
//! Centralizes the constants shared by components and the documentation
//! site. Docs content is loaded at compile time using `include_str!` in
//! the docs binary.

// =============================================================================
// Application Metadata
// =============================================================================

/// Name shown in the docs site header.
pub const APP_NAME: &str = "waypoint";

/// Library version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Component Defaults
// =============================================================================

/// Expression defaults.
pub mod expression {
    /// Description width applied in `columns` display when none is given.
    pub const DEFAULT_DESCRIPTION_WIDTH: &str = "20%";
}

/// Progress defaults.
pub mod progress {
    /// Translation token for the percentage readout.
    pub const VALUE_TEXT_TOKEN: &str = "progress.valueText";
    /// Fallback template for [`VALUE_TEXT_TOKEN`].
    pub const VALUE_TEXT_DEFAULT: &str = "{value}%";
}

/// Side navigation defaults.
pub mod side_nav {
    /// Media query under which the tree collapses behind the mobile toggle.
    pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";
    /// Separator between id segments of a node path.
    pub const PATH_SEPARATOR: char = '/';
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the library.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
