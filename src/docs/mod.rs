//! Documentation site content.
//!
//! Each component page is described by a TOML file under `assets/docs/`,
//! embedded at compile time. A page is a list of guide sections; each
//! section names the demo it shows, and the demo's own source file is
//! echoed next to it.
//!
//! - [`load_pages`] - Parse and validate every embedded page
//! - [`guide`] - Page and section components
//! - [`demos`] - Live demos and their source text

pub mod demos;
mod error;
pub mod guide;
pub mod route;

use serde::Deserialize;

pub use error::DocsError;
pub use route::DocsRoute;

/// Embedded page descriptions, in navigation order.
const PAGE_SOURCES: &[(&str, &str)] = &[
    ("expression", include_str!("../../assets/docs/expression.toml")),
    ("progress", include_str!("../../assets/docs/progress.toml")),
    ("side_nav", include_str!("../../assets/docs/side_nav.toml")),
];

/// One row of a props table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PropDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub default: Option<String>,
    pub description: String,
}

/// A titled block of prose, demo, snippet and props.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DocsSection {
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown
    pub text: String,
    /// Registered demo id (see [`demos::DEMO_IDS`])
    pub demo: String,
    pub snippet: String,
    #[serde(default)]
    pub props: Vec<PropDoc>,
}

/// A component page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DocsPage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub sections: Vec<DocsSection>,
}

/// Parse one page description and check its demo references.
pub fn parse_page(name: &'static str, source: &str) -> Result<DocsPage, DocsError> {
    let page: DocsPage = toml::from_str(source).map_err(|e| DocsError::Parse {
        page: name,
        message: e.to_string(),
    })?;

    if let Some(section) = page
        .sections
        .iter()
        .find(|section| !demos::DEMO_IDS.contains(&section.demo.as_str()))
    {
        return Err(DocsError::UnknownDemo {
            page: page.slug.clone(),
            demo: section.demo.clone(),
        });
    }

    Ok(page)
}

/// Load every embedded page.
pub fn load_pages() -> Result<Vec<DocsPage>, DocsError> {
    let mut pages: Vec<DocsPage> = Vec::with_capacity(PAGE_SOURCES.len());
    for &(name, source) in PAGE_SOURCES {
        let page = parse_page(name, source)?;
        if pages.iter().any(|p| p.slug == page.slug) {
            return Err(DocsError::DuplicateSlug(page.slug));
        }
        pages.push(page);
    }
    Ok(pages)
}
