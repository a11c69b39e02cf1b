//! Presentational Leptos components.
//!
//! - [`components::Expression`] - `description value` pairs
//! - [`components::Progress`] - Progress bars
//! - [`components::SideNav`] - Collapsible navigation tree
//!
//! Configuration types live in [`models`]; side nav state rules in [`core`].

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub mod prelude {
    pub use crate::components::{Expression, ExpressionAction, Progress, SideNav, ValueText};
    pub use crate::models::{
        DescriptionWidth, ExpressionColor, ExpressionDisplay, NamedColor, NavIcon, NavItem,
        NavLink, NavPath, NavSegment, OpenItems, ProgressColor, ProgressMode, ProgressPosition,
        ProgressSize, TextWrap,
    };
    pub use crate::utils::Translations;
}
