use leptos::prelude::*;
use waypoint::core::with_selection;
use waypoint::prelude::*;

fn tree() -> Vec<NavItem> {
    vec![
        NavItem::new("0", "Elasticsearch")
            .icon(NavIcon::Database)
            .items([
                NavItem::new("0.1", "Data source").select(),
                NavItem::new("0.2", "Users").href("#/side_nav"),
                NavItem::new("0.3", "Roles").select(),
                NavItem::new("0.4", "Watches").select(),
                NavItem::new("0.5", "Extremely long title will become truncated when the browser is narrow enough").select(),
            ]),
        NavItem::new("1", "Kibana").icon(NavIcon::Activity).items([
            NavItem::new("1.1", "Advanced settings").select().items([
                NavItem::new("1.1.1", "General").select(),
                NavItem::new("1.1.2", "Timelion").select().items([
                    NavItem::new("1.1.2.1", "Time Stuff").select().icon(NavIcon::Settings),
                    NavItem::new("1.1.2.2", "Lion Stuff").select().icon(NavIcon::User),
                ]),
                NavItem::new("1.1.3", "Visualizations").select(),
            ]),
            NavItem::new("1.2", "Index Patterns").select(),
            NavItem::new("1.3", "Saved Objects").select(),
            NavItem::new("1.4", "Reporting").select(),
        ]),
        NavItem::new("2", "Logstash").icon(NavIcon::Folder).items([
            NavItem::new("2.1", "Pipeline viewer").select(),
        ]),
    ]
}

#[component]
pub fn SideNavComplexDemo() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);
    let selected = RwSignal::new(Some(NavPath::ids(["1", "1.1", "1.1.2", "1.1.2.2"])));
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
