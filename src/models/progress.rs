//! Progress bar configuration types.

/// Bar thickness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressSize {
    Xs,
    S,
    #[default]
    M,
    L,
}

/// CSS positioning of the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPosition {
    Fixed,
    Absolute,
    #[default]
    Static,
}

/// Palette and visualization colors with preset classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamedColor {
    Primary,
    #[default]
    Secondary,
    Success,
    Warning,
    Danger,
    Subdued,
    Accent,
    Vis0,
    Vis1,
    Vis2,
    Vis3,
    Vis4,
    Vis5,
    Vis6,
    Vis7,
    Vis8,
    Vis9,
}

impl NamedColor {
    pub const ALL: [Self; 17] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Subdued,
        Self::Accent,
        Self::Vis0,
        Self::Vis1,
        Self::Vis2,
        Self::Vis3,
        Self::Vis4,
        Self::Vis5,
        Self::Vis6,
        Self::Vis7,
        Self::Vis8,
        Self::Vis9,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Subdued => "subdued",
            Self::Accent => "accent",
            Self::Vis0 => "vis0",
            Self::Vis1 => "vis1",
            Self::Vis2 => "vis2",
            Self::Vis3 => "vis3",
            Self::Vis4 => "vis4",
            Self::Vis5 => "vis5",
            Self::Vis6 => "vis6",
            Self::Vis7 => "vis7",
            Self::Vis8 => "vis8",
            Self::Vis9 => "vis9",
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.token() == token)
    }
}

/// A named palette color or any CSS color value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressColor {
    Named(NamedColor),
    Custom(String),
}

impl Default for ProgressColor {
    fn default() -> Self {
        Self::Named(NamedColor::default())
    }
}

impl From<NamedColor> for ProgressColor {
    fn from(color: NamedColor) -> Self {
        Self::Named(color)
    }
}

/// Named tokens win; anything else is treated as a CSS color.
impl From<&str> for ProgressColor {
    fn from(value: &str) -> Self {
        match NamedColor::from_token(value) {
            Some(named) => Self::Named(named),
            None => Self::Custom(value.to_string()),
        }
    }
}

impl From<String> for ProgressColor {
    fn from(value: String) -> Self {
        match NamedColor::from_token(&value) {
            Some(named) => Self::Named(named),
            None => Self::Custom(value),
        }
    }
}

impl ProgressColor {
    /// Inline style for custom colors.
    pub fn custom_style(&self) -> Option<String> {
        match self {
            Self::Custom(value) if !value.is_empty() => Some(format!("color: {}", value)),
            _ => None,
        }
    }
}

/// Determinate bars know their completion; indeterminate bars animate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ProgressMode {
    #[default]
    Indeterminate,
    Determinate { value: Option<f64>, max: f64 },
}

impl ProgressMode {
    pub fn determinate(value: f64, max: f64) -> Self {
        Self::Determinate {
            value: Some(value),
            max,
        }
    }

    pub fn is_determinate(&self) -> bool {
        matches!(self, Self::Determinate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_resolution() {
        for named in NamedColor::ALL {
            assert_eq!(ProgressColor::from(named.token()), ProgressColor::Named(named));
        }
    }

    #[test]
    fn test_custom_color_fallback() {
        let color = ProgressColor::from("#32CD32");
        assert_eq!(color, ProgressColor::Custom("#32CD32".to_string()));
        assert_eq!(color.custom_style().as_deref(), Some("color: #32CD32"));

        // Lookup is case-sensitive
        assert_eq!(
            ProgressColor::from("Primary"),
            ProgressColor::Custom("Primary".to_string())
        );
        assert_eq!(ProgressColor::from(String::from("vis3")), NamedColor::Vis3.into());
    }

    #[test]
    fn test_named_color_has_no_style() {
        assert_eq!(ProgressColor::default().custom_style(), None);
        assert_eq!(ProgressColor::from("").custom_style(), None);
    }

    #[test]
    fn test_mode() {
        assert!(!ProgressMode::default().is_determinate());
        assert_eq!(
            ProgressMode::determinate(70.0, 100.0),
            ProgressMode::Determinate {
                value: Some(70.0),
                max: 100.0
            }
        );
    }
}
