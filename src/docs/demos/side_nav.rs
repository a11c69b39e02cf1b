use leptos::prelude::*;
use waypoint::core::with_selection;
use waypoint::prelude::*;

fn tree() -> Vec<NavItem> {
    vec![NavItem::new("0", "Kibana").items([
        NavItem::new("1", "Advanced settings").select(),
        NavItem::new("2", "Index Patterns (link)").href("#/side_nav"),
        NavItem::new("3", "Saved objects").select(),
        NavItem::new("4", "Reporting").select(),
    ])]
}

#[component]
pub fn SideNavDemo() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);
    let selected = RwSignal::new(None::<NavPath>);
    let items = Signal::derive(move || with_selection(tree(), selected.get().as_ref()));

    view! {
        <SideNav
            items=items
            mobile_title="Navbar items"
            is_open_on_mobile=mobile_open
            toggle_open_on_mobile=Callback::new(move |_| set_mobile_open.update(|open| *open = !*open))
            on_select=Callback::new(move |path: NavPath| selected.set(Some(path)))
        />
    }
}
