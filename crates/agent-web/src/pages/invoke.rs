//! Invoke Panel Page

use leptos::prelude::*;

use crate::api;
use crate::components::OutputPane;
use crate::state::InvocationState;

/// Initial query shown in the input field
const INITIAL_QUERY: &str = "What is momentum?";

#[component]
pub fn InvokePage() -> impl IntoView {
    let (query, set_query) = signal(INITIAL_QUERY.to_string());
    let (state, set_state) = signal(InvocationState::default());

    // One outbound request per click, no retries or cancellation.
    // Overlapping invocations race and the last settlement wins; the
    // disabled button is the only re-entrancy guard.
    let run = move |_| {
        let q = query.get();
        set_state.update(InvocationState::begin);

        leptos::task::spawn_local(async move {
            let outcome = api::invoke(&q).await;
            set_state.update(|s| s.settle(outcome));
        });
    };

    view! {
        <div class="panel">
            <h2>"🎓 TutorAgent"</h2>
            <p class="subtitle">
                "Standalone UI served by the agent (also embeddable behind a proxy)."
            </p>

            <div class="query-row">
                <input
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button on:click=run disabled=move || state.get().busy>
                    {move || if state.get().busy { "Running…" } else { "Invoke" }}
                </button>
            </div>

            {move || state.get().error.map(|e| view! {
                <div class="error">{format!("Error: {e}")}</div>
            })}

            <OutputPane text=Signal::derive(move || state.get().output_text()) />

            <footer class="links">
                <a href="/healthz" target="_blank" rel="noreferrer">"Health"</a>
                " • "
                <a href="/" target="_blank" rel="noreferrer">"Root"</a>
            </footer>
        </div>
    }
}
