//! Live demos shown on the docs pages.
//!
//! Every demo lives in its own file so the page can echo that file
//! verbatim as the demo's source.

mod expression;
mod expression_click;
mod expression_columns;
mod progress;
mod progress_color;
mod progress_value;
mod side_nav;
mod side_nav_complex;
mod side_nav_emphasis;
mod side_nav_force_open;

use leptos::prelude::*;

/// Ids that page descriptions may reference.
pub const DEMO_IDS: &[&str] = &[
    "expression",
    "expression_click",
    "expression_columns",
    "progress",
    "progress_value",
    "progress_color",
    "side_nav",
    "side_nav_complex",
    "side_nav_force_open",
    "side_nav_emphasis",
];

/// Render the demo registered under `id`.
pub fn render_demo(id: &str) -> Option<AnyView> {
    let view = match id {
        "expression" => view! { <expression::ExpressionDemo /> }.into_any(),
        "expression_click" => view! { <expression_click::ExpressionClickDemo /> }.into_any(),
        "expression_columns" => view! { <expression_columns::ExpressionColumnsDemo /> }.into_any(),
        "progress" => view! { <progress::ProgressDemo /> }.into_any(),
        "progress_value" => view! { <progress_value::ProgressValueDemo /> }.into_any(),
        "progress_color" => view! { <progress_color::ProgressColorDemo /> }.into_any(),
        "side_nav" => view! { <side_nav::SideNavDemo /> }.into_any(),
        "side_nav_complex" => view! { <side_nav_complex::SideNavComplexDemo /> }.into_any(),
        "side_nav_force_open" => view! { <side_nav_force_open::SideNavForceOpenDemo /> }.into_any(),
        "side_nav_emphasis" => view! { <side_nav_emphasis::SideNavEmphasisDemo /> }.into_any(),
        _ => return None,
    };
    Some(view)
}

/// Source text of the demo registered under `id`.
pub fn demo_source(id: &str) -> Option<&'static str> {
    let source = match id {
        "expression" => include_str!("expression.rs"),
        "expression_click" => include_str!("expression_click.rs"),
        "expression_columns" => include_str!("expression_columns.rs"),
        "progress" => include_str!("progress.rs"),
        "progress_value" => include_str!("progress_value.rs"),
        "progress_color" => include_str!("progress_color.rs"),
        "side_nav" => include_str!("side_nav.rs"),
        "side_nav_complex" => include_str!("side_nav_complex.rs"),
        "side_nav_force_open" => include_str!("side_nav_force_open.rs"),
        "side_nav_emphasis" => include_str!("side_nav_emphasis.rs"),
        _ => return None,
    };
    Some(source)
}
