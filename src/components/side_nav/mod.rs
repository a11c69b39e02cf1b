//! Side navigation tree.
//!
//! Renders a [`NavItem`] tree as nested, collapsible sections.
//!
//! ## Open state
//!
//! Which branches are open lives in an [`OpenItems`] signal. Pass
//! `open_items` to own it from the outside; otherwise the nav creates one
//! seeded from the tree (`is_open` items and ancestors of the selection).
//! `force_open` branches stay expanded whatever the signal says.
//!
//! ## Responsive behavior
//!
//! | Breakpoint | Display |
//! |------------|---------|
//! | Desktop (>= 768px) | Tree always visible |
//! | Mobile (< 768px) | Toggle button with `mobile_title`; tree shown while `is_open_on_mobile` |

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::config::side_nav::MOBILE_MEDIA_QUERY;
use crate::core::{NodeState, node_state, seed_open_items, toggle_item};
use crate::models::{NavItem, NavLink, NavPath, OpenItems};
use crate::utils::dom::console_log;
use crate::utils::join_classes;

stylance::import_crate_style!(css, "src/components/side_nav/side_nav.module.css");

/// Shared state for every node of one tree.
#[derive(Clone, Copy)]
struct SideNavContext {
    open: RwSignal<OpenItems>,
    on_select: Option<Callback<NavPath>>,
}

/// Whether the tree body is shown.
fn content_visible(is_mobile: bool, is_open_on_mobile: bool) -> bool {
    !is_mobile || is_open_on_mobile
}

fn depth_class(depth: usize) -> &'static str {
    match depth {
        0 => css::root,
        1 => css::trunk,
        _ => css::branch,
    }
}

fn item_classes(state: &NodeState) -> String {
    join_classes([
        css::item,
        depth_class(state.depth),
        if state.is_selected { css::isSelected } else { "" },
        if state.is_expanded { css::isOpen } else { "" },
        if state.is_emphasized { css::emphasized } else { "" },
        if state.in_emphasized { css::inEmphasized } else { "" },
    ])
}

fn button_classes(clickable: bool) -> String {
    join_classes([css::button, if clickable { css::isClickable } else { "" }])
}

/// Side navigation component.
///
/// # Props
/// - `items`: The tree, supplied wholesale
/// - `open_items`: Caller-owned open state (optional)
/// - `on_select`: Called with the path of an activated `NavLink::Select` item
/// - `mobile_title`: Label of the mobile toggle button
/// - `is_open_on_mobile`: Whether the tree is shown on mobile
/// - `toggle_open_on_mobile`: Called when the mobile toggle is pressed
#[component]
pub fn SideNav(
    #[prop(into)] items: Signal<Vec<NavItem>>,
    #[prop(optional)] open_items: Option<RwSignal<OpenItems>>,
    #[prop(optional)] on_select: Option<Callback<NavPath>>,
    #[prop(optional, into)] mobile_title: MaybeProp<String>,
    #[prop(optional, into)] is_open_on_mobile: MaybeProp<bool>,
    #[prop(optional)] toggle_open_on_mobile: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let open = open_items
        .unwrap_or_else(|| RwSignal::new(items.with_untracked(|items| seed_open_items(items))));
    provide_context(SideNavContext { open, on_select });

    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);
    let mobile_open = Signal::derive(move || is_open_on_mobile.get().unwrap_or(false));
    let visible = Signal::derive(move || content_visible(is_mobile.get(), mobile_open.get()));

    let on_mobile_toggle = move |_: leptos::ev::MouseEvent| {
        if let Some(toggle) = toggle_open_on_mobile {
            toggle.run(());
        }
    };

    view! {
        <nav class=join_classes([css::sideNav, class.as_deref().unwrap_or("")]) aria-label="Side navigation">
            <Show when=move || is_mobile.get()>
                <button
                    type="button"
                    class=css::mobileToggle
                    on:click=on_mobile_toggle
                    aria-expanded=move || mobile_open.get().to_string()
                >
                    <span class=css::mobileTitle>{move || mobile_title.get().unwrap_or_default()}</span>
                    <span class=css::mobileIcon aria-hidden="true"><Icon icon=ic::MENU /></span>
                </button>
            </Show>
            <Show when=move || visible.get()>
                <div class=css::content>
                    {move || view! {
                        <NavItems items=items.get() parent=NavPath::root() in_emphasized=false />
                    }}
                </div>
            </Show>
        </nav>
    }
}

/// One level of the tree.
#[component]
fn NavItems(items: Vec<NavItem>, parent: NavPath, in_emphasized: bool) -> impl IntoView {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let path = parent.child(item.segment(index));
            view! { <NavNode item=item path=path in_emphasized=in_emphasized /> }
        })
        .collect_view()
}

/// A single item and, when expanded, its children.
#[component]
fn NavNode(item: NavItem, path: NavPath, in_emphasized: bool) -> impl IntoView {
    let ctx = use_context::<SideNavContext>().expect("SideNavContext must be provided by SideNav");

    let children = item.items.clone();
    let name = item.name.clone();
    let icon = item.icon;
    let link = item.link.clone();
    let item = StoredValue::new(item);
    let node_path = StoredValue::new(path);

    let state = Memo::new(move |_| {
        let path = node_path.get_value();
        ctx.open
            .with(|open| item.with_value(|item| node_state(item, &path, open, in_emphasized)))
    });

    let is_toggleable = state.get_untracked().is_toggleable;
    let is_top_level = state.get_untracked().depth == 0;
    let emphasized_below = in_emphasized || item.with_value(|item| item.emphasize);

    let on_activate = move |_: leptos::ev::MouseEvent| {
        let path = node_path.get_value();
        ctx.open.update(|open| {
            item.with_value(|item| toggle_item(open, item, &path));
        });
        if item.with_value(|item| item.link == NavLink::Select)
            && let Some(on_select) = ctx.on_select
        {
            console_log(&format!("side nav: select {}", path));
            on_select.run(path);
        }
    };

    let label = view! {
        {icon.map(|icon| view! {
            <span class=css::icon aria-hidden="true"><Icon icon=ic::nav_icon(icon) /></span>
        })}
        <span class=css::label>{name}</span>
        {is_toggleable.then(|| view! {
            <span class=css::caret aria-hidden="true">
                {move || if state.get().is_expanded {
                    view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                } else {
                    view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                }}
            </span>
        })}
    };

    let aria_current = move || state.get().is_selected.then_some("page");
    let aria_expanded = move || {
        let state = state.get();
        state.is_toggleable.then(|| state.is_expanded.to_string())
    };

    let button = match link {
        NavLink::Href(href) => view! {
            <a
                class=button_classes(true)
                href=href
                on:click=on_activate
                aria-current=aria_current
                aria-expanded=aria_expanded
            >
                {label}
            </a>
        }
        .into_any(),
        NavLink::None if is_top_level => view! {
            <div class=button_classes(false)>{label}</div>
        }
        .into_any(),
        NavLink::Select | NavLink::None => view! {
            <button
                type="button"
                class=button_classes(true)
                on:click=on_activate
                aria-current=aria_current
                aria-expanded=aria_expanded
            >
                {label}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class=move || item_classes(&state.get())>
            {button}
            {move || state.get().is_expanded.then(|| {
                view! {
                    <div class=css::items>
                        <NavItems
                            items=children.clone()
                            parent=node_path.get_value()
                            in_emphasized=emphasized_below
                        />
                    </div>
                }
                .into_any()
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(classes: &str, class: &str) -> bool {
        classes.split(' ').any(|c| c == class)
    }

    fn state(depth: usize) -> NodeState {
        let mut path = NavPath::root();
        for segment in 0..=depth {
            path = path.child(segment.to_string());
        }
        NodeState {
            path,
            depth,
            is_parent: true,
            is_expanded: false,
            is_selected: false,
            is_emphasized: false,
            in_emphasized: false,
            is_toggleable: depth > 0,
        }
    }

    #[test]
    fn test_content_visibility() {
        assert!(content_visible(false, false));
        assert!(content_visible(false, true));
        assert!(!content_visible(true, false));
        assert!(content_visible(true, true));
    }

    #[test]
    fn test_depth_classes() {
        assert!(has(&item_classes(&state(0)), css::root));
        assert!(has(&item_classes(&state(1)), css::trunk));
        assert!(has(&item_classes(&state(4)), css::branch));
    }

    #[test]
    fn test_presentation_flags() {
        let selected = NodeState {
            is_selected: true,
            is_expanded: true,
            ..state(2)
        };
        let classes = item_classes(&selected);
        assert!(has(&classes, css::isSelected));
        assert!(has(&classes, css::isOpen));
        assert!(!has(&classes, css::emphasized));

        let emphasized = NodeState {
            is_emphasized: true,
            in_emphasized: true,
            ..state(2)
        };
        let classes = item_classes(&emphasized);
        assert!(has(&classes, css::emphasized));
        assert!(has(&classes, css::inEmphasized));
        assert!(!has(&classes, css::isSelected));
    }

    #[test]
    fn test_button_classes() {
        assert!(has(&button_classes(true), css::isClickable));
        assert_eq!(button_classes(false), css::button);
    }
}
