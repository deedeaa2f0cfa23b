//! UI Components

use leptos::prelude::*;

/// Output pane rendering the last response (or the placeholder)
#[component]
pub fn OutputPane(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <pre class="output">{move || text.get()}</pre>
    }
}
