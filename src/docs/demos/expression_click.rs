use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ExpressionClickDemo() -> impl IntoView {
    let (is_active, set_is_active) = signal(false);
    let (clicks, set_clicks) = signal(0u32);

    view! {
        <div>
            <Expression
                description=|| "when"
                value=move || view! { "clicked " {move || clicks.get()} " times" }
                action=ExpressionAction::click(move |_| {
                    set_clicks.update(|n| *n += 1);
                    set_is_active.update(|active| *active = !*active);
                })
            />
            <p>{move || if is_active.get() { "Popover open" } else { "Popover closed" }}</p>
        </div>
    }
}
