//! Minimal token-based string lookup.
//!
//! Components ask for a token with a built-in default template. Hosts can
//! override templates by providing a [`Translations`] context at the root:
//!
//! ```ignore
//! provide_context(Translations::new().with("progress.valueText", "{value} %"));
//! ```

use std::collections::HashMap;

use leptos::prelude::*;

/// Token → template overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translations {
    templates: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(token.into(), template.into());
        self
    }

    /// Template for `token`, or `default` when not overridden.
    pub fn template<'a>(&'a self, token: &str, default: &'a str) -> &'a str {
        self.templates.get(token).map(String::as_str).unwrap_or(default)
    }

    /// Look up `token` and fill in its `{name}` placeholders.
    pub fn translate(&self, token: &str, default: &str, values: &[(&str, &str)]) -> String {
        interpolate(self.template(token, default), values)
    }
}

/// Replace `{name}` placeholders. Unknown placeholders are left as-is.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

/// Translate using the [`Translations`] context if one is provided.
pub fn use_translation(token: &str, default: &str, values: &[(&str, &str)]) -> String {
    match use_context::<Translations>() {
        Some(translations) => translations.translate(token, default, values),
        None => interpolate(default, values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("{value}%", &[("value", "42")]), "42%");
        assert_eq!(interpolate("{a} of {b}", &[("a", "1"), ("b", "3")]), "1 of 3");
        assert_eq!(interpolate("{missing}", &[("value", "1")]), "{missing}");
    }

    #[test]
    fn test_override() {
        let translations = Translations::new().with("progress.valueText", "{value} pct");
        assert_eq!(
            translations.translate("progress.valueText", "{value}%", &[("value", "7")]),
            "7 pct"
        );
        assert_eq!(
            translations.translate("other.token", "{value}%", &[("value", "7")]),
            "7%"
        );
    }
}
