//! Progress bar component.
//!
//! Determinate bars (a known `max`) render a native `<progress>` element,
//! optionally preceded by a label/value row. Indeterminate bars render a
//! plain `<div>`: Firefox cannot animate an indeterminate `<progress>`.

use leptos::prelude::*;

use crate::config::progress::{VALUE_TEXT_DEFAULT, VALUE_TEXT_TOKEN};
use crate::models::{NamedColor, ProgressColor, ProgressMode, ProgressPosition, ProgressSize};
use crate::utils::format::{format_value, inner_text};
use crate::utils::i18n::use_translation;
use crate::utils::join_classes;

stylance::import_crate_style!(css, "src/components/progress/progress.module.css");

/// Readout shown next to the label of a determinate bar.
#[derive(Clone, Default)]
pub enum ValueText {
    #[default]
    Hidden,
    /// Localized `{value}%`
    Percent,
    /// Caller-supplied node, rendered verbatim
    Custom(ViewFn),
}

impl ValueText {
    pub fn custom<V: IntoView + 'static>(view: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self::Custom(ViewFn::from(view))
    }

    pub fn is_shown(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl From<bool> for ValueText {
    fn from(show: bool) -> Self {
        if show { Self::Percent } else { Self::Hidden }
    }
}

fn size_class(size: ProgressSize) -> &'static str {
    match size {
        ProgressSize::Xs => css::sizeXs,
        ProgressSize::S => css::sizeS,
        ProgressSize::M => css::sizeM,
        ProgressSize::L => css::sizeL,
    }
}

fn position_class(position: ProgressPosition) -> &'static str {
    match position {
        ProgressPosition::Fixed => css::fixed,
        ProgressPosition::Absolute => css::absolute,
        ProgressPosition::Static => "",
    }
}

fn color_class(color: NamedColor) -> &'static str {
    match color {
        NamedColor::Primary => css::primary,
        NamedColor::Secondary => css::secondary,
        NamedColor::Success => css::success,
        NamedColor::Warning => css::warning,
        NamedColor::Danger => css::danger,
        NamedColor::Subdued => css::subdued,
        NamedColor::Accent => css::accent,
        NamedColor::Vis0 => css::vis0,
        NamedColor::Vis1 => css::vis1,
        NamedColor::Vis2 => css::vis2,
        NamedColor::Vis3 => css::vis3,
        NamedColor::Vis4 => css::vis4,
        NamedColor::Vis5 => css::vis5,
        NamedColor::Vis6 => css::vis6,
        NamedColor::Vis7 => css::vis7,
        NamedColor::Vis8 => css::vis8,
        NamedColor::Vis9 => css::vis9,
    }
}

fn data_color_class(color: NamedColor) -> &'static str {
    match color {
        NamedColor::Primary => css::dataPrimary,
        NamedColor::Secondary => css::dataSecondary,
        NamedColor::Success => css::dataSuccess,
        NamedColor::Warning => css::dataWarning,
        NamedColor::Danger => css::dataDanger,
        NamedColor::Subdued => css::dataSubdued,
        NamedColor::Accent => css::dataAccent,
        NamedColor::Vis0 => css::dataVis0,
        NamedColor::Vis1 => css::dataVis1,
        NamedColor::Vis2 => css::dataVis2,
        NamedColor::Vis3 => css::dataVis3,
        NamedColor::Vis4 => css::dataVis4,
        NamedColor::Vis5 => css::dataVis5,
        NamedColor::Vis6 => css::dataVis6,
        NamedColor::Vis7 => css::dataVis7,
        NamedColor::Vis8 => css::dataVis8,
        NamedColor::Vis9 => css::dataVis9,
    }
}

/// Resolved presentation of a bar: its classes, the accessory row classes
/// and the inline style for custom colors.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ProgressClasses {
    bar: String,
    data: String,
    style: Option<String>,
}

fn progress_classes(
    mode: &ProgressMode,
    color: &ProgressColor,
    size: ProgressSize,
    position: ProgressPosition,
    extra: Option<&str>,
) -> ProgressClasses {
    let (color_class, data_color_class) = match color {
        ProgressColor::Named(named) => (color_class(*named), data_color_class(*named)),
        ProgressColor::Custom(value) if value.is_empty() => ("", ""),
        ProgressColor::Custom(_) => (css::customColor, ""),
    };

    let bar = join_classes([
        css::progress,
        if mode.is_determinate() { css::native } else { css::indeterminate },
        size_class(size),
        color_class,
        position_class(position),
        extra.unwrap_or(""),
    ]);

    let data = join_classes([
        css::data,
        if size == ProgressSize::L { css::dataL } else { "" },
        data_color_class,
    ]);

    ProgressClasses {
        bar,
        data,
        style: color.custom_style(),
    }
}

/// Progress bar component.
///
/// # Props
/// - `mode`: [`ProgressMode::Indeterminate`] (default) or determinate with a `max`
/// - `color`: Palette token (`"primary"`, `"vis3"`, ...) or any CSS color
/// - `size`: Bar thickness (default `M`)
/// - `position`: `Static` (default), `Fixed` or `Absolute`
/// - `label`: Text shown above a determinate bar
/// - `value_text`: Readout shown opposite the label
#[component]
pub fn Progress(
    #[prop(optional)] mode: ProgressMode,
    #[prop(optional, into)] color: ProgressColor,
    #[prop(optional)] size: ProgressSize,
    #[prop(optional)] position: ProgressPosition,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] value_text: ValueText,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] label_class: Option<String>,
) -> impl IntoView {
    let classes = progress_classes(&mode, &color, size, position, class.as_deref());

    let ProgressMode::Determinate { value, max } = mode else {
        return view! { <div class=classes.bar style=classes.style></div> }.into_any();
    };

    let label = label.filter(|label| !label.is_empty());
    let has_label = label.is_some();
    let has_value_text = value_text.is_shown();

    let value_render = match value_text {
        ValueText::Hidden => None,
        ValueText::Percent => {
            let text = use_translation(
                VALUE_TEXT_TOKEN,
                VALUE_TEXT_DEFAULT,
                &[("value", &format_value(value))],
            );
            let title = inner_text(&text);
            Some(
                view! {
                    <span class=css::valueText style=classes.style.clone() title=title>
                        {text}
                    </span>
                }
                .into_any(),
            )
        }
        ValueText::Custom(custom) => {
            // Title mirrors whatever text the custom node rendered
            let value_ref = NodeRef::<leptos::html::Span>::new();
            Effect::new(move |_| {
                if let Some(el) = value_ref.get() {
                    let _ = el.set_attribute("title", &inner_text(&el.inner_text()));
                }
            });
            Some(
                view! {
                    <span class=css::valueText style=classes.style.clone() node_ref=value_ref>
                        {custom.run()}
                    </span>
                }
                .into_any(),
            )
        }
    };

    let label_classes = join_classes([css::label, label_class.as_deref().unwrap_or("")]);
    let label_render = label.map(|label| {
        let title = inner_text(&label);
        view! { <span class=label_classes title=title>{label}</span> }
    });

    let data_row = (has_label || has_value_text).then(|| {
        view! { <div class=classes.data>{label_render}{value_render}</div> }
    });

    // Label and readout already announce the state
    let aria_hidden = if has_label && has_value_text { "true" } else { "false" };

    view! {
        {data_row}
        <progress
            class=classes.bar
            style=classes.style
            max=max.to_string()
            value=value.map(|v| v.to_string())
            aria-hidden=aria_hidden
        ></progress>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(classes: &str, class: &str) -> bool {
        classes.split(' ').any(|c| c == class)
    }

    fn bounded() -> ProgressMode {
        ProgressMode::determinate(70.0, 100.0)
    }

    #[test]
    fn test_mode_classes_are_exclusive() {
        let default_color = ProgressColor::default();
        let determinate = progress_classes(
            &bounded(),
            &default_color,
            ProgressSize::M,
            ProgressPosition::Static,
            None,
        );
        assert!(has(&determinate.bar, css::native));
        assert!(!has(&determinate.bar, css::indeterminate));

        let indeterminate = progress_classes(
            &ProgressMode::Indeterminate,
            &default_color,
            ProgressSize::M,
            ProgressPosition::Static,
            None,
        );
        assert!(has(&indeterminate.bar, css::indeterminate));
        assert!(!has(&indeterminate.bar, css::native));
    }

    #[test]
    fn test_named_color_uses_preset_class() {
        let classes = progress_classes(
            &bounded(),
            &ProgressColor::from("vis3"),
            ProgressSize::M,
            ProgressPosition::Static,
            None,
        );
        assert!(has(&classes.bar, css::vis3));
        assert!(has(&classes.data, css::dataVis3));
        assert!(!has(&classes.bar, css::customColor));
        assert_eq!(classes.style, None);
    }

    #[test]
    fn test_custom_color_uses_inline_style() {
        let classes = progress_classes(
            &ProgressMode::Indeterminate,
            &ProgressColor::from("#32CD32"),
            ProgressSize::M,
            ProgressPosition::Static,
            None,
        );
        assert!(has(&classes.bar, css::customColor));
        assert_eq!(classes.style.as_deref(), Some("color: #32CD32"));
        assert_eq!(classes.data, css::data);
    }

    #[test]
    fn test_size_and_position() {
        let classes = progress_classes(
            &bounded(),
            &ProgressColor::default(),
            ProgressSize::L,
            ProgressPosition::Fixed,
            Some("custom"),
        );
        assert!(has(&classes.bar, css::sizeL));
        assert!(has(&classes.bar, css::fixed));
        assert!(has(&classes.bar, "custom"));
        assert!(has(&classes.data, css::dataL));

        let stat = progress_classes(
            &bounded(),
            &ProgressColor::default(),
            ProgressSize::Xs,
            ProgressPosition::Static,
            None,
        );
        assert!(!has(&stat.bar, css::fixed));
        assert!(!has(&stat.bar, css::absolute));
        assert!(!has(&stat.data, css::dataL));
    }

    #[test]
    fn test_value_text_from_bool() {
        assert!(ValueText::from(true).is_shown());
        assert!(!ValueText::from(false).is_shown());
        assert!(ValueText::custom(|| "150 / 200 MB").is_shown());
    }
}
