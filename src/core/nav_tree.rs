//! Open/closed state logic for the side navigation tree.
//!
//! Identity of a node is its [`NavPath`], so ids only need to be unique
//! among siblings. Expansion is decided per node:
//!
//! | Node | Expanded when |
//! |------|---------------|
//! | Top-level | always |
//! | `force_open` branch | always |
//! | Other branch | its path is in [`OpenItems`] |
//! | Leaf | never (nothing to show) |

use crate::models::{NavItem, NavPath, OpenItems};

/// Derived rendering flags for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeState {
    pub path: NavPath,
    pub depth: usize,
    pub is_parent: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub is_emphasized: bool,
    /// Some ancestor is emphasized.
    pub in_emphasized: bool,
    /// Toggling has an effect on this node.
    pub is_toggleable: bool,
}

/// Compute the rendering flags for `item` at `path`.
pub fn node_state(item: &NavItem, path: &NavPath, open: &OpenItems, in_emphasized: bool) -> NodeState {
    let depth = path.depth();
    let is_parent = item.is_branch();
    let pinned = depth == 0 || item.force_open;
    NodeState {
        path: path.clone(),
        depth,
        is_parent,
        is_expanded: is_parent && (pinned || open.contains(path)),
        is_selected: item.is_selected,
        is_emphasized: item.emphasize,
        in_emphasized,
        is_toggleable: is_parent && !pinned,
    }
}

/// Initial open set for a tree that owns its own state.
///
/// Opens branches flagged `is_open` or `force_open` and every ancestor of
/// a selected or open item.
pub fn seed_open_items(items: &[NavItem]) -> OpenItems {
    let mut open = OpenItems::new();
    seed_into(items, &NavPath::root(), &mut open);
    open
}

/// Returns whether the subtree contains a selected or open item.
fn seed_into(items: &[NavItem], parent: &NavPath, open: &mut OpenItems) -> bool {
    let mut wants_open = false;
    for (index, item) in items.iter().enumerate() {
        let path = parent.child(item.segment(index));
        let below = seed_into(&item.items, &path, open);
        let opened = item.is_branch() && (item.is_open || item.force_open || below);
        if opened {
            open.open(path);
        }
        wants_open |= item.is_selected || opened;
    }
    wants_open
}

/// Toggle the branch at `path`. Forced and top-level branches, and leaves,
/// are left untouched. Returns whether the open set changed.
pub fn toggle_item(open: &mut OpenItems, item: &NavItem, path: &NavPath) -> bool {
    let state = node_state(item, path, open, false);
    if !state.is_toggleable {
        return false;
    }
    open.toggle(path);
    true
}

/// Mark exactly the item at `selected` as selected, clearing every other
/// selection flag. Lets callers drive selection from a single path.
pub fn with_selection(items: Vec<NavItem>, selected: Option<&NavPath>) -> Vec<NavItem> {
    mark_selected(items, &NavPath::root(), selected)
}

fn mark_selected(items: Vec<NavItem>, parent: &NavPath, selected: Option<&NavPath>) -> Vec<NavItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            let path = parent.child(item.segment(index));
            item.is_selected = selected == Some(&path);
            item.items = mark_selected(std::mem::take(&mut item.items), &path, selected);
            item
        })
        .collect()
}

/// Look up the item at `path`.
pub fn find_item<'a>(items: &'a [NavItem], path: &NavPath) -> Option<&'a NavItem> {
    let mut level = items;
    let mut found = None;
    for segment in path.segments() {
        let item = level
            .iter()
            .enumerate()
            .find(|(index, item)| item.segment(*index) == *segment)
            .map(|(_, item)| item)?;
        level = &item.items;
        found = Some(item);
    }
    found
}

/// Paths of every node that would currently be rendered, in display order.
pub fn visible_paths(items: &[NavItem], open: &OpenItems) -> Vec<NavPath> {
    let mut paths = Vec::new();
    collect_visible(items, &NavPath::root(), open, &mut paths);
    paths
}

fn collect_visible(items: &[NavItem], parent: &NavPath, open: &OpenItems, out: &mut Vec<NavPath>) {
    for (index, item) in items.iter().enumerate() {
        let path = parent.child(item.segment(index));
        let expanded = node_state(item, &path, open, false).is_expanded;
        out.push(path.clone());
        if expanded {
            collect_visible(&item.items, &path, open, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavSegment;

    /// Tree from the forced-open docs example; note the repeated id "1".
    fn forced_tree() -> Vec<NavItem> {
        vec![NavItem::new("1", "Kibana").items([NavItem::new("1", "Kibana").items([
            NavItem::new("0.1", "Forced open items")
                .select()
                .force_open(true)
                .items([
                    NavItem::new("0.1.1", "General").select(),
                    NavItem::new("0.1.2", "Timelion").select(),
                ]),
            NavItem::new("1.1", "Closed items").select().items([
                NavItem::new("1.1.1", "General").select(),
                NavItem::new("1.1.2", "Timelion").select(),
            ]),
        ])])]
    }

    #[test]
    fn test_duplicate_ids_get_distinct_paths() {
        let tree = forced_tree();
        let open = seed_open_items(&tree);
        let paths = visible_paths(&tree, &open);

        assert_eq!(paths[0], NavPath::ids(["1"]));
        assert_eq!(paths[1], NavPath::ids(["1", "1"]));
        assert_ne!(paths[0], paths[1]);
    }

    #[test]
    fn test_force_open_ignores_toggle() {
        let tree = forced_tree();
        let mut open = seed_open_items(&tree);
        let forced_path = NavPath::ids(["1", "1", "0.1"]);
        let forced = find_item(&tree, &forced_path).unwrap();

        assert!(!toggle_item(&mut open, forced, &forced_path));
        assert!(node_state(forced, &forced_path, &open, false).is_expanded);

        let visible = visible_paths(&tree, &open);
        assert!(visible.contains(&NavPath::ids(["1", "1", "0.1", "0.1.1"])));
        assert!(!visible.contains(&NavPath::ids(["1", "1", "1.1", "1.1.1"])));
    }

    #[test]
    fn test_toggle_branch() {
        let tree = forced_tree();
        let mut open = seed_open_items(&tree);
        let closed_path = NavPath::ids(["1", "1", "1.1"]);
        let closed = find_item(&tree, &closed_path).unwrap();

        assert!(toggle_item(&mut open, closed, &closed_path));
        assert!(node_state(closed, &closed_path, &open, false).is_expanded);
        assert!(visible_paths(&tree, &open).contains(&NavPath::ids(["1", "1", "1.1", "1.1.2"])));

        assert!(toggle_item(&mut open, closed, &closed_path));
        assert!(!node_state(closed, &closed_path, &open, false).is_expanded);
    }

    #[test]
    fn test_leaf_and_top_level_not_toggleable() {
        let tree = forced_tree();
        let mut open = OpenItems::new();
        let top = NavPath::ids(["1"]);
        let leaf = NavPath::ids(["1", "1", "0.1", "0.1.1"]);

        assert!(!toggle_item(&mut open, &tree[0], &top));
        assert!(!toggle_item(&mut open, find_item(&tree, &leaf).unwrap(), &leaf));
        assert!(open.is_empty());
        assert!(node_state(&tree[0], &top, &open, false).is_expanded);
    }

    #[test]
    fn test_seed_opens_ancestors_of_selected() {
        let tree = vec![NavItem::new("1", "Kibana").items([NavItem::new("1.1", "Advanced settings")
            .select()
            .items([
                NavItem::new("1.1.1", "General").select(),
                NavItem::new("1.1.2", "Timelion").select().items([
                    NavItem::new("1.1.2.1", "Time Stuff").select(),
                    NavItem::new("1.1.2.2", "Lion Stuff").select().selected(true),
                ]),
            ])])];

        let open = seed_open_items(&tree);
        assert!(open.contains(&NavPath::ids(["1", "1.1"])));
        assert!(open.contains(&NavPath::ids(["1", "1.1", "1.1.2"])));
        assert_eq!(
            visible_paths(&tree, &open).last(),
            Some(&NavPath::ids(["1", "1.1", "1.1.2", "1.1.2.2"]))
        );
    }

    #[test]
    fn test_seed_opens_ancestors_of_open_items() {
        let tree = vec![NavItem::new("1", "APM").items([NavItem::new("2", "Services").items([
            NavItem::anonymous("opbeans-java")
                .emphasize(true)
                .open(true)
                .items([NavItem::new("0.1.1", "Transactions").select()]),
        ])])];

        let open = seed_open_items(&tree);
        assert!(open.contains(&NavPath::ids(["1", "2"]).child(NavSegment::Index(0))));
        assert!(open.contains(&NavPath::ids(["1", "2"])));
        let opbeans = NavPath::ids(["1", "2"]).child(NavSegment::Index(0));
        assert!(visible_paths(&tree, &open).contains(&opbeans.child("0.1.1")));
    }

    #[test]
    fn test_with_selection_is_exclusive() {
        let tree = with_selection(forced_tree(), Some(&NavPath::ids(["1", "1", "1.1", "1.1.2"])));
        let selected: Vec<_> = visible_paths(&tree, &seed_open_items(&tree))
            .into_iter()
            .filter(|path| find_item(&tree, path).is_some_and(|item| item.is_selected))
            .collect();
        assert_eq!(selected, [NavPath::ids(["1", "1", "1.1", "1.1.2"])]);

        let cleared = with_selection(tree, None);
        assert!(!find_item(&cleared, &NavPath::ids(["1", "1", "1.1", "1.1.2"])).unwrap().is_selected);
    }

    #[test]
    fn test_find_item_missing() {
        let tree = forced_tree();
        assert!(find_item(&tree, &NavPath::ids(["1", "9"])).is_none());
        assert_eq!(
            find_item(&tree, &NavPath::ids(["1", "1", "1.1", "1.1.2"])).map(|i| i.name.as_str()),
            Some("Timelion")
        );
    }

    #[test]
    fn test_top_level_id_with_separator_stays_expanded() {
        let tree = vec![
            NavItem::new("a/b", "Slashed").items([NavItem::new("x", "X").select()]),
            NavItem::new("a", "A").items([
                NavItem::new("b", "B").items([NavItem::new("y", "Y").select()]),
            ]),
        ];
        let mut open = seed_open_items(&tree);
        let top = NavPath::root().child("a/b");
        let nested = NavPath::ids(["a", "b"]);

        let state = node_state(&tree[0], &top, &open, false);
        assert_eq!(state.depth, 0);
        assert!(state.is_expanded);
        assert!(!state.is_toggleable);

        assert_eq!(
            visible_paths(&tree, &open),
            [
                top.clone(),
                top.child("x"),
                NavPath::ids(["a"]),
                nested.clone(),
            ]
        );

        assert!(toggle_item(&mut open, find_item(&tree, &nested).unwrap(), &nested));
        assert!(open.contains(&nested));
        assert!(!open.contains(&top));
        assert_eq!(find_item(&tree, &top).map(|i| i.name.as_str()), Some("Slashed"));
    }

    #[test]
    fn test_index_fallback_and_hash_id_are_distinct_nodes() {
        let tree = vec![NavItem::new("root", "Root").items([
            NavItem::anonymous("Anonymous").items([NavItem::new("c", "C").select()]),
            NavItem::new("#0", "Hash id").items([NavItem::new("d", "D").select()]),
        ])];
        let mut open = OpenItems::new();
        let anonymous = NavPath::ids(["root"]).child(NavSegment::Index(0));
        let hashed = NavPath::ids(["root", "#0"]);

        assert_ne!(anonymous, hashed);
        assert_eq!(find_item(&tree, &anonymous).map(|i| i.name.as_str()), Some("Anonymous"));
        assert_eq!(find_item(&tree, &hashed).map(|i| i.name.as_str()), Some("Hash id"));

        assert!(toggle_item(&mut open, &tree[0].items[0], &anonymous));
        assert!(node_state(&tree[0].items[0], &anonymous, &open, false).is_expanded);
        assert!(!node_state(&tree[0].items[1], &hashed, &open, false).is_expanded);
    }
}
