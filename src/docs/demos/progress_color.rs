use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ProgressColorDemo() -> impl IntoView {
    view! {
        <div>
            <Progress
                mode=ProgressMode::determinate(60.0, 100.0)
                color="vis4"
                label="Visualization palette"
                value_text=true
            />
            <br />
            <Progress
                mode=ProgressMode::determinate(35.0, 100.0)
                color="#32CD32"
                label="Any CSS color"
                value_text=true
            />
            <br />
            <Progress color="rebeccapurple" size=ProgressSize::S />
        </div>
    }
}
