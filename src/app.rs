//! Root application module.
//!
//! Contains the docs site shell: the [`App`] error boundary, hash routing
//! and the side navigation listing every component page.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use waypoint::config::{APP_NAME, APP_VERSION};
use waypoint::core::with_selection;
use waypoint::prelude::*;
use waypoint::utils::dom::console_log;
use waypoint::utils::markdown_to_html;

use crate::docs::guide::GuidePage;
use crate::docs::{DocsPage, DocsRoute, load_pages};

stylance::import_crate_style!(css, "src/docs/docs.module.css");

/// Id of the single top-level nav section holding every page.
const COMPONENTS_SECTION: &str = "components";

const HOME_TEXT: &str = "\
Presentational components for Leptos apps.

- **Expression** states a rule or clause, like `WHEN count() IS ABOVE 100`.
- **Progress** shows determinate or indeterminate progress.
- **SideNav** renders a collapsible navigation tree.

Pick a component from the navigation to see it live.";

/// Navigation tree for the docs sidebar.
fn nav_tree(pages: &[DocsPage], route: &DocsRoute) -> Vec<NavItem> {
    let tree = vec![NavItem::new(COMPONENTS_SECTION, "Components").items(
        pages
            .iter()
            .map(|page| NavItem::new(page.slug.clone(), page.title.clone()).select()),
    )];
    let selected = route
        .slug()
        .map(|slug| NavPath::root().child(COMPONENTS_SECTION).child(slug));
    with_selection(tree, selected.as_ref())
}

/// Root application component with error boundary.
///
/// Provides the [`Translations`] context and renders the docs site. Pages
/// that fail to load surface in the fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_context(Translations::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #bd271e; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #69707d; margin-bottom: 2rem;">
                            "The documentation could not be loaded."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f5f7fa;
                            padding: 1rem;
                            border-radius: 4px;
                        ">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #bd271e;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                    </div>
                </div>
            }
        >
            {load_pages().map(|pages| view! { <DocsSite pages=pages /> })}
        </ErrorBoundary>
    }
}

/// Sidebar plus the page for the current route.
///
/// The URL hash is the source of truth; navigation writes the hash and the
/// `hashchange` listener updates the route signal.
#[component]
fn DocsSite(pages: Vec<DocsPage>) -> impl IntoView {
    let route = RwSignal::new(DocsRoute::current());

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(DocsRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let pages = StoredValue::new(pages);
    let items = Signal::derive(move || pages.with_value(|pages| nav_tree(pages, &route.get())));
    let mobile_open = RwSignal::new(false);

    let on_select = Callback::new(move |path: NavPath| {
        mobile_open.set(false);
        if let Some(slug) = path.leaf_id() {
            DocsRoute::Page(slug.to_string()).push();
        }
    });

    let content = move || match route.get() {
        DocsRoute::Home => view! { <Home /> }.into_any(),
        DocsRoute::Page(slug) => {
            match pages.with_value(|pages| pages.iter().find(|p| p.slug == slug).cloned()) {
                Some(page) => view! { <GuidePage page=page /> }.into_any(),
                None => {
                    console_log(&format!("[docs] no page for slug '{}'", slug));
                    view! { <NotFound slug=slug /> }.into_any()
                }
            }
        }
    };

    view! {
        <div class=css::layout>
            <aside class=css::sidebar>
                <a class=css::brand href=DocsRoute::Home.to_hash()>
                    {APP_NAME}
                    <span class=css::version>{format!("v{}", APP_VERSION)}</span>
                </a>
                <SideNav
                    items=items
                    mobile_title="Components"
                    is_open_on_mobile=mobile_open
                    toggle_open_on_mobile=Callback::new(move |_| mobile_open.update(|open| *open = !*open))
                    on_select=on_select
                />
            </aside>
            <main class=css::main>{content}</main>
        </div>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <article class=css::page>
            <h1 class=css::title>{APP_NAME}</h1>
            <div class=css::prose inner_html=markdown_to_html(HOME_TEXT)></div>
        </article>
    }
}

#[component]
fn NotFound(slug: String) -> impl IntoView {
    view! {
        <article class=css::page>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::notFound>{format!("No component page named '{}'.", slug)}</p>
            <a href=DocsRoute::Home.to_hash()>"Back to the overview"</a>
        </article>
    }
}
