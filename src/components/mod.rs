//! UI components built with Leptos.
//!
//! - [`expression`] - Description/value pairs, static or clickable
//! - [`progress`] - Determinate and indeterminate progress bars
//! - [`side_nav`] - Collapsible navigation tree
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod expression;
pub mod icons;
pub mod progress;
pub mod side_nav;

pub use expression::{Expression, ExpressionAction};
pub use progress::{Progress, ValueText};
pub use side_nav::SideNav;
