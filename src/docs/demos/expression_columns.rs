use leptos::prelude::*;
use waypoint::prelude::*;

#[component]
pub fn ExpressionColumnsDemo() -> impl IntoView {
    view! {
        <div style="max-width: 240px">
            <Expression
                description=|| "indices"
                value=|| "kibana_sample_data_ky_counties"
                display=ExpressionDisplay::Columns
                text_wrap=TextWrap::Truncate
            />
            <Expression
                description=|| "fields"
                value=|| "@timestamp, bytes"
                display=ExpressionDisplay::Columns
                description_width=80u32
            />
            <Expression
                description=|| "email"
                value=|| "not an address"
                display=ExpressionDisplay::Columns
                description_width="6rem"
                is_invalid=true
            />
        </div>
    }
}
