//! Docs page rendering.
//!
//! A [`GuidePage`] is a title, optional intro and a list of
//! [`GuideSection`]s. Each section shows markdown prose, the live demo and
//! a tabbed code panel (usage snippet or full demo source), followed by a
//! props table when the page lists props.

use leptos::prelude::*;

use waypoint::utils::{join_classes, markdown_to_html};

use super::demos::{demo_source, render_demo};
use super::{DocsPage, DocsSection, PropDoc};

stylance::import_crate_style!(css, "src/docs/docs.module.css");

/// Which code is shown under a demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CodeTab {
    Snippet,
    Source,
}

impl CodeTab {
    const ALL: [Self; 2] = [Self::Snippet, Self::Source];

    fn label(self) -> &'static str {
        match self {
            Self::Snippet => "Snippet",
            Self::Source => "Demo source",
        }
    }
}

/// Code shown for `tab`. Unregistered demos have no source.
fn code_for(tab: CodeTab, section: &DocsSection) -> String {
    match tab {
        CodeTab::Snippet => section.snippet.trim().to_string(),
        CodeTab::Source => demo_source(&section.demo).unwrap_or_default().to_string(),
    }
}

/// A full component page.
#[component]
pub fn GuidePage(page: DocsPage) -> impl IntoView {
    let intro = page.intro.as_deref().map(markdown_to_html);

    view! {
        <article class=css::page>
            <h1 class=css::title>{page.title}</h1>
            {intro.map(|html| view! { <div class=css::prose inner_html=html></div> })}
            {page
                .sections
                .into_iter()
                .map(|section| view! { <GuideSection section=section /> })
                .collect_view()}
        </article>
    }
}

/// One section: prose, demo, code tabs and props.
#[component]
pub fn GuideSection(section: DocsSection) -> impl IntoView {
    let tab = RwSignal::new(CodeTab::Snippet);
    let html = markdown_to_html(&section.text);
    let demo = render_demo(&section.demo);
    let props = section.props.clone();
    let section = StoredValue::new(section);

    view! {
        <section class=css::section>
            {section.with_value(|s| s.title.clone()).map(|title| view! {
                <h2 class=css::sectionTitle>{title}</h2>
            })}
            <div class=css::prose inner_html=html></div>
            <div class=css::demo>{demo}</div>
            <div class=css::code>
                <div class=css::tabs role="tablist">
                    {CodeTab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || join_classes([css::tab, if tab.get() == t { css::tabActive } else { "" }])
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <pre class=css::pre><code>{move || section.with_value(|s| code_for(tab.get(), s))}</code></pre>
            </div>
            {(!props.is_empty()).then(|| view! { <PropsTable props=props /> })}
        </section>
    }
}

#[component]
fn PropsTable(props: Vec<PropDoc>) -> impl IntoView {
    view! {
        <table class=css::props>
            <thead>
                <tr>
                    <th>"Prop"</th>
                    <th>"Type"</th>
                    <th>"Default"</th>
                    <th>"Description"</th>
                </tr>
            </thead>
            <tbody>
                {props
                    .into_iter()
                    .map(|prop| {
                        let description = markdown_to_html(&prop.description);
                        view! {
                            <tr>
                                <td><code>{prop.name}</code></td>
                                <td><code>{prop.ty}</code></td>
                                <td>{prop.default.map(|d| view! { <code>{d}</code> })}</td>
                                <td inner_html=description></td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> DocsSection {
        DocsSection {
            title: None,
            text: "text".to_string(),
            demo: "progress".to_string(),
            snippet: "\n<Progress />\n".to_string(),
            props: Vec::new(),
        }
    }

    #[test]
    fn test_snippet_tab_is_trimmed() {
        assert_eq!(code_for(CodeTab::Snippet, &section()), "<Progress />");
    }

    #[test]
    fn test_source_tab_echoes_demo_file() {
        let source = code_for(CodeTab::Source, &section());
        assert!(source.contains("fn ProgressDemo"));
    }

    #[test]
    fn test_unknown_demo_has_empty_source() {
        let mut s = section();
        s.demo = "missing".to_string();
        assert_eq!(code_for(CodeTab::Source, &s), "");
    }
}
