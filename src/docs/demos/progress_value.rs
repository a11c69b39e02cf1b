use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ProgressValueDemo() -> impl IntoView {
    view! {
        <div>
            <Progress mode=ProgressMode::determinate(70.0, 100.0) size=ProgressSize::L value_text=true />
            <br />
            <Progress
                mode=ProgressMode::determinate(42.0, 100.0)
                label="Basic percentage"
                value_text=true
            />
            <br />
            <Progress
                mode=ProgressMode::determinate(150.0, 200.0)
                size=ProgressSize::S
                color="success"
                label="Downloading"
                value_text=ValueText::custom(|| "150 / 200 MB")
            />
        </div>
    }
}
