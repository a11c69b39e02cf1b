use leptos::prelude::*;
use waypoint::core::with_selection;
use waypoint::prelude::*;

fn tree() -> Vec<NavItem> {
    vec![NavItem::new("1", "APM").items([
        NavItem::new("2", "Services").items([NavItem::anonymous("opbeans-java")
            .emphasize(true)
            .open(true)
            .items([
                NavItem::new("0.1.1", "Transactions").select(),
                NavItem::new("0.1.2", "Errors").select(),
                NavItem::new("0.1.3", "Metrics").select(),
            ])]),
        NavItem::new("3", "Traces").select(),
        NavItem::new("4", "Service map").select(),
    ])]
}

#[component]
pub fn SideNavEmphasisDemo() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);
    let selected = RwSignal::new(None::<NavPath>);
    let items = Signal::derive(move || with_selection(tree(), selected.get().as_ref()));

    view! {
        // Emphasized backgrounds bleed sideways; clip them here
        <div style="overflow: hidden">
            <SideNav
                items=items
                mobile_title="Navbar items"
                is_open_on_mobile=mobile_open
                toggle_open_on_mobile=Callback::new(move |_| set_mobile_open.update(|open| *open = !*open))
                on_select=Callback::new(move |path: NavPath| selected.set(Some(path)))
            />
        </div>
    }
}
