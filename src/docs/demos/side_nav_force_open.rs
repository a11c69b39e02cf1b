use leptos::prelude::*;
use waypoint::core::with_selection;
use waypoint::prelude::*;

fn tree() -> Vec<NavItem> {
    vec![NavItem::new("1", "Kibana").items([NavItem::new("1", "Kibana").items([
        NavItem::new("0.1", "Forced open items")
            .select()
            .force_open(true)
            .items([
                NavItem::new("0.1.1", "General").select(),
                NavItem::new("0.1.2", "Timelion").select(),
            ]),
        NavItem::new("1.1", "Closed items")
            .select()
            .force_open(false)
            .items([
                NavItem::new("1.1.1", "General").select(),
                NavItem::new("1.1.2", "Timelion").select(),
            ]),
    ])])]
}

#[component]
pub fn SideNavForceOpenDemo() -> impl IntoView {
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
