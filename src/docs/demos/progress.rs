use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ProgressDemo() -> impl IntoView {
    let (show_fixed, set_show_fixed) = signal(false);

    view! {
        <div>
            <Progress size=ProgressSize::Xs color="accent" />
            <br />
            <Progress size=ProgressSize::S color="vis5" />
            <br />
            <Progress size=ProgressSize::M />
            <br />
            <Progress size=ProgressSize::L color="primary" />
            <br />
            <div style="position: relative; padding: 1rem; border: 1px solid #d3dae6">
                <Progress size=ProgressSize::Xs color="subdued" position=ProgressPosition::Absolute />
                "Absolute bars sit at the top of their container."
            </div>
            <br />
            <button type="button" on:click=move |_| set_show_fixed.update(|show| *show = !*show)>
                {move || if show_fixed.get() { "Hide fixed bar" } else { "Show fixed bar" }}
            </button>
            <Show when=move || show_fixed.get()>
                <Progress size=ProgressSize::Xs color="accent" position=ProgressPosition::Fixed />
            </Show>
        </div>
    }
}
