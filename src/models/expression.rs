//! Expression configuration types.

use crate::config::expression::DEFAULT_DESCRIPTION_WIDTH;

/// Color of the expression description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpressionColor {
    Subdued,
    Primary,
    #[default]
    Secondary,
    Accent,
    Warning,
    Danger,
}

impl ExpressionColor {
    pub const ALL: [Self; 6] = [
        Self::Subdued,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Warning,
        Self::Danger,
    ];
}

/// Layout of description and value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpressionDisplay {
    /// Description and value flow inline (default)
    #[default]
    Inline,
    /// Description takes a fixed-width column
    Columns,
}

/// How long text wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextWrap {
    #[default]
    BreakWord,
    Truncate,
}

/// Width of the description column in `columns` display.
#[derive(Clone, Debug, PartialEq)]
pub enum DescriptionWidth {
    /// Pixel width
    Px(f64),
    /// Any CSS length (e.g. `"20%"`, `"8rem"`)
    Css(String),
}

impl DescriptionWidth {
    /// CSS value for `flex-basis`. `None` for an empty length.
    pub fn css_value(&self) -> Option<String> {
        match self {
            Self::Px(px) => Some(format!("{}px", px)),
            Self::Css(len) if len.trim().is_empty() => None,
            Self::Css(len) => Some(len.clone()),
        }
    }
}

impl Default for DescriptionWidth {
    fn default() -> Self {
        Self::Css(DEFAULT_DESCRIPTION_WIDTH.to_string())
    }
}

impl From<f64> for DescriptionWidth {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<u32> for DescriptionWidth {
    fn from(px: u32) -> Self {
        Self::Px(px as f64)
    }
}

impl From<&str> for DescriptionWidth {
    fn from(len: &str) -> Self {
        Self::Css(len.to_string())
    }
}

impl From<String> for DescriptionWidth {
    fn from(len: String) -> Self {
        Self::Css(len)
    }
}

/// Everything that decides how an expression is styled.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStyle {
    pub color: ExpressionColor,
    pub uppercase: bool,
    pub is_active: bool,
    pub is_invalid: bool,
    pub display: ExpressionDisplay,
    pub text_wrap: TextWrap,
    pub description_width: DescriptionWidth,
}

impl Default for ExpressionStyle {
    fn default() -> Self {
        Self {
            color: ExpressionColor::default(),
            uppercase: true,
            is_active: false,
            is_invalid: false,
            display: ExpressionDisplay::default(),
            text_wrap: TextWrap::default(),
            description_width: DescriptionWidth::default(),
        }
    }
}

impl ExpressionStyle {
    /// Invalid expressions always render as danger.
    pub fn resolved_color(&self) -> ExpressionColor {
        if self.is_invalid {
            ExpressionColor::Danger
        } else {
            self.color
        }
    }

    /// Inline style for the description span. Only `columns` display
    /// applies the width.
    pub fn description_style(&self) -> Option<String> {
        match self.display {
            ExpressionDisplay::Inline => None,
            ExpressionDisplay::Columns => self
                .description_width
                .css_value()
                .map(|width| format!("flex-basis: {}", width)),
        }
    }
}
