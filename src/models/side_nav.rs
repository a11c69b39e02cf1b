//! Side navigation tree data types.
//!
//! A [`NavItem`] tree is handed to the side nav wholesale on every render.
//! Trees can be built in code with the builder methods or declared in TOML
//! (all types here implement `Deserialize`).

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::config::side_nav::PATH_SEPARATOR;

/// Named icon shown before a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Activity,
    Database,
    Folder,
    Home,
    Settings,
    User,
}

/// What activating a navigation item does.
///
/// `Href` and `Select` are mutually exclusive, so they share one enum
/// instead of two optional fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLink {
    /// No navigation; a branch with no link only toggles.
    #[default]
    None,
    /// Plain anchor navigation.
    Href(String),
    /// Reported to the tree's selection callback.
    Select,
}

impl NavLink {
    pub fn is_navigable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A node of the side navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Unique within its sibling scope only.
    pub id: Option<String>,
    pub name: String,
    pub icon: Option<NavIcon>,
    pub items: Vec<NavItem>,
    pub link: NavLink,
    pub is_selected: bool,
    /// Initial open state when the tree owns its own [`OpenItems`].
    pub is_open: bool,
    /// Pins the branch expanded regardless of toggle state.
    pub force_open: bool,
    pub emphasize: bool,
}

impl NavItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Item without an id; its sibling index is used for identity.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.link = NavLink::Href(href.into());
        self
    }

    pub fn select(mut self) -> Self {
        self.link = NavLink::Select;
        self
    }

    pub fn icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = NavItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    pub fn force_open(mut self, force: bool) -> Self {
        self.force_open = force;
        self
    }

    pub fn emphasize(mut self, emphasize: bool) -> Self {
        self.emphasize = emphasize;
        self
    }

    pub fn is_branch(&self) -> bool {
        !self.items.is_empty()
    }

    /// Identity segment of this item among its siblings.
    pub fn segment(&self, index: usize) -> NavSegment {
        match &self.id {
            Some(id) => NavSegment::Id(id.clone()),
            None => NavSegment::Index(index),
        }
    }
}

/// One step of a [`NavPath`]: the item's id, or its sibling index when it
/// has none. Ids are opaque, so an id may contain the separator or look
/// like an index without aliasing another node.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NavSegment {
    Id(String),
    Index(usize),
}

impl NavSegment {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for NavSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Index(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for NavSegment {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for NavSegment {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

/// Position of a node in the tree: the chain of sibling-scoped segments
/// from the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavPath(Vec<NavSegment>);

impl NavPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path made of the given ids, outermost first.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(|id| NavSegment::Id(id.into())).collect())
    }

    pub fn child(&self, segment: impl Into<NavSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[NavSegment] {
        &self.0
    }

    /// Nesting level; top-level items are depth 0.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Last segment, i.e. the item's own identity.
    pub fn leaf(&self) -> Option<&NavSegment> {
        self.0.last()
    }

    /// Id of the item itself, if it has one.
    pub fn leaf_id(&self) -> Option<&str> {
        self.leaf().and_then(NavSegment::id)
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Set of branches currently toggled open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenItems(BTreeSet<NavPath>);

impl OpenItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &NavPath) -> bool {
        self.0.contains(path)
    }

    pub fn open(&mut self, path: NavPath) {
        self.0.insert(path);
    }

    pub fn close(&mut self, path: &NavPath) {
        self.0.remove(path);
    }

    /// Flip the open state of `path`, returning the new state.
    pub fn toggle(&mut self, path: &NavPath) -> bool {
        if self.0.remove(path) {
            false
        } else {
            self.0.insert(path.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavPath> {
        self.0.iter()
    }
}

impl FromIterator<NavPath> for OpenItems {
    fn from_iter<I: IntoIterator<Item = NavPath>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_child_and_depth() {
        let root = NavPath::root();
        let top = root.child("1");
        let nested = top.child("1.1").child("1.1.2");

        assert_eq!(top, NavPath::ids(["1"]));
        assert_eq!(top.depth(), 0);
        assert_eq!(nested, NavPath::ids(["1", "1.1", "1.1.2"]));
        assert_eq!(nested.to_string(), "1/1.1/1.1.2");
        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.leaf_id(), Some("1.1.2"));
        assert_eq!(root.depth(), 0);
        assert_eq!(root.leaf(), None);
    }

    #[test]
    fn test_segment_falls_back_to_index() {
        assert_eq!(NavItem::new("a", "A").segment(3), NavSegment::Id("a".to_string()));
        assert_eq!(NavItem::anonymous("A").segment(3), NavSegment::Index(3));
        assert_eq!(NavSegment::Index(3).to_string(), "#3");
        assert_eq!(NavSegment::Index(3).id(), None);
    }

    #[test]
    fn test_separator_in_id_stays_one_segment() {
        let slashed = NavPath::root().child("a/b");
        let nested = NavPath::root().child("a").child("b");

        assert_eq!(slashed.depth(), 0);
        assert_eq!(slashed.leaf_id(), Some("a/b"));
        assert_ne!(slashed, nested);
    }

    #[test]
    fn test_index_fallback_does_not_alias_id() {
        let anonymous = NavPath::root().child(NavItem::anonymous("A").segment(0));
        let literal = NavPath::root().child(NavItem::new("#0", "B").segment(1));

        assert_ne!(anonymous, literal);
        assert_eq!(anonymous.to_string(), literal.to_string());
    }

    #[test]
    fn test_toggle() {
        let mut open = OpenItems::new();
        let path = NavPath::ids(["1", "2"]);

        assert!(open.toggle(&path));
        assert!(open.contains(&path));
        assert!(!open.toggle(&path));
        assert!(open.is_empty());
    }

    #[test]
    fn test_builder() {
        let item = NavItem::new("1", "Kibana")
            .icon(NavIcon::Home)
            .items([NavItem::new("1.1", "Settings").select()]);

        assert!(item.is_branch());
        assert_eq!(item.link, NavLink::None);
        assert_eq!(item.items[0].link, NavLink::Select);
        assert!(item.items[0].link.is_navigable());
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Tree {
            items: Vec<NavItem>,
        }

        let tree: Tree = toml::from_str(
            r##"
            [[items]]
            id = "0"
            name = "Elasticsearch"
            icon = "database"

            [[items.items]]
            id = "0.1"
            name = "Data source"
            link = "select"

            [[items.items]]
            id = "0.2"
            name = "Users"
            link = { href = "#" }
            is_selected = true
            "##,
        )
        .unwrap();

        let top = &tree.items[0];
        assert_eq!(top.icon, Some(NavIcon::Database));
        assert_eq!(top.items.len(), 2);
        assert_eq!(top.items[0].link, NavLink::Select);
        assert_eq!(top.items[1].link, NavLink::Href("#".to_string()));
        assert!(top.items[1].is_selected);
    }
}
