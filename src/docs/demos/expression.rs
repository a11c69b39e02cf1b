use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ExpressionDemo() -> impl IntoView {
    view! {
        <div>
            <Expression description=|| "when" value=|| "count()" />
            <Expression description=|| "Since" value=|| "21 years ago" />
            <Expression
                description=|| "sort by"
                value=|| "count"
                color=ExpressionColor::Accent
                is_active=true
            />
            <Expression
                description=|| "is above"
                value=|| "100"
                color=ExpressionColor::Primary
                uppercase=false
            />
        </div>
    }
}
