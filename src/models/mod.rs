//! Data models and configuration types for the components.
//!
//! Contains types for:
//! - [`ExpressionStyle`], [`ExpressionColor`], [`DescriptionWidth`] - Expression options
//! - [`ProgressMode`], [`ProgressColor`], [`ProgressSize`] - Progress bar options
//! - [`NavItem`], [`NavPath`], [`OpenItems`] - Side navigation tree

mod expression;
mod progress;
mod side_nav;

pub use expression::{
    DescriptionWidth, ExpressionColor, ExpressionDisplay, ExpressionStyle, TextWrap,
};
pub use progress::{NamedColor, ProgressColor, ProgressMode, ProgressPosition, ProgressSize};
pub use side_nav::{NavIcon, NavItem, NavLink, NavPath, NavSegment, OpenItems};
