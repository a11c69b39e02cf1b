//! Hash-based routing for the docs site.

use waypoint::utils::dom;

/// Docs routes.
/// URL format: `#/<page-slug>` (e.g. `#/side_nav`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocsRoute {
    /// Landing page: #/ or empty hash
    Home,
    /// Component page: #/slug
    Page(String),
}

impl DocsRoute {
    /// Parse URL hash into DocsRoute
    pub fn from_hash(hash: &str) -> Self {
        let slug = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if slug.is_empty() {
            return Self::Home;
        }

        Self::Page(slug.to_string())
    }

    /// Convert DocsRoute to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Page(slug) => format!("#/{}", slug),
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Page(slug) => Some(slug),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route. Fires `hashchange`, which updates the route
    /// signal.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(DocsRoute::from_hash(""), DocsRoute::Home);
        assert_eq!(DocsRoute::from_hash("#"), DocsRoute::Home);
        assert_eq!(DocsRoute::from_hash("#/"), DocsRoute::Home);
        assert_eq!(
            DocsRoute::from_hash("#/side_nav"),
            DocsRoute::Page("side_nav".to_string())
        );
        // Trailing slash is ignored
        assert_eq!(
            DocsRoute::from_hash("#/progress/"),
            DocsRoute::Page("progress".to_string())
        );
        // Hash without the '#' (as returned by dom::get_hash)
        assert_eq!(
            DocsRoute::from_hash("/expression"),
            DocsRoute::Page("expression".to_string())
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(DocsRoute::Home.to_hash(), "#/");
        assert_eq!(DocsRoute::Page("side_nav".to_string()).to_hash(), "#/side_nav");
        assert_eq!(DocsRoute::Page("progress".to_string()).slug(), Some("progress"));
        assert_eq!(DocsRoute::Home.slug(), None);
    }
}
