//! Expression component.
//!
//! Renders a `description value` pair such as `WHEN avg() IS ABOVE 100`.
//! A click action turns the expression into a button with an editable
//! underline; otherwise it is a static `<span>`.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{
    DescriptionWidth, ExpressionColor, ExpressionDisplay, ExpressionStyle, TextWrap,
};
use crate::utils::join_classes;

stylance::import_crate_style!(css, "src/components/expression/expression.module.css");

/// Whether the expression reacts to clicks.
///
/// A clickable expression renders as `<button>`, a static one as `<span>`.
#[derive(Clone, Default)]
pub enum ExpressionAction {
    #[default]
    None,
    Click(Callback<ev::MouseEvent>),
}

impl ExpressionAction {
    pub fn click(handler: impl Fn(ev::MouseEvent) + Send + Sync + 'static) -> Self {
        Self::Click(Callback::new(handler))
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self, Self::Click(_))
    }
}

fn color_class(color: ExpressionColor) -> &'static str {
    match color {
        ExpressionColor::Subdued => css::subdued,
        ExpressionColor::Primary => css::primary,
        ExpressionColor::Secondary => css::secondary,
        ExpressionColor::Accent => css::accent,
        ExpressionColor::Warning => css::warning,
        ExpressionColor::Danger => css::danger,
    }
}

fn display_class(display: ExpressionDisplay) -> &'static str {
    match display {
        ExpressionDisplay::Inline => "",
        ExpressionDisplay::Columns => css::columns,
    }
}

fn text_wrap_class(wrap: TextWrap) -> &'static str {
    match wrap {
        TextWrap::BreakWord => "",
        TextWrap::Truncate => css::truncate,
    }
}

/// Class list of the top-level element.
fn expression_classes(style: &ExpressionStyle, clickable: bool, extra: Option<&str>) -> String {
    join_classes([
        css::expression,
        extra.unwrap_or(""),
        if style.is_active { css::isActive } else { "" },
        if clickable { css::isClickable } else { "" },
        if style.uppercase { css::isUppercase } else { "" },
        display_class(style.display),
        color_class(style.resolved_color()),
        text_wrap_class(style.text_wrap),
    ])
}

/// Expression component.
///
/// # Props
/// - `description`: First part of the expression
/// - `value`: Second part of the expression
/// - `color`: Color of the description (forced to danger when invalid)
/// - `uppercase`: Auto-uppercase the description (default `true`)
/// - `is_active`: Solid underline
/// - `is_invalid`: Danger color plus an alert icon
/// - `display`: `Inline` (default) or `Columns`
/// - `description_width`: Description width in `Columns` display (default `20%`)
/// - `text_wrap`: `BreakWord` (default) or `Truncate`
/// - `action`: [`ExpressionAction::Click`] makes the expression a button
#[component]
pub fn Expression(
    #[prop(into)] description: ViewFn,
    #[prop(optional, into)] value: Option<ViewFn>,
    #[prop(optional)] color: ExpressionColor,
    #[prop(default = true)] uppercase: bool,
    #[prop(optional)] is_active: bool,
    #[prop(optional)] is_invalid: bool,
    #[prop(optional)] display: ExpressionDisplay,
    #[prop(optional)] text_wrap: TextWrap,
    #[prop(optional, into)] description_width: DescriptionWidth,
    #[prop(optional)] action: ExpressionAction,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] description_class: Option<String>,
    #[prop(optional, into)] value_class: Option<String>,
) -> impl IntoView {
    let style = ExpressionStyle {
        color,
        uppercase,
        is_active,
        is_invalid,
        display,
        text_wrap,
        description_width,
    };

    let classes = expression_classes(&style, action.is_clickable(), class.as_deref());
    let description_style = style.description_style();
    let description_classes =
        join_classes([css::description, description_class.as_deref().unwrap_or("")]);
    let value_classes = join_classes([css::value, value_class.as_deref().unwrap_or("")]);

    let inner = view! {
        <span class=description_classes style=description_style>
            {description.run()}
        </span>
        " "
        {value.map(|value| view! { <span class=value_classes>{value.run()}</span> })}
        {is_invalid.then(|| view! {
            <span class=css::icon aria-hidden="true"><Icon icon=ic::ALERT /></span>
        })}
    };

    match action {
        ExpressionAction::Click(on_click) => view! {
            <button type="button" class=classes on:click=move |ev| on_click.run(ev)>
                {inner}
            </button>
        }
        .into_any(),
        ExpressionAction::None => view! { <span class=classes>{inner}</span> }.into_any(),
    }
}
