//! Delete Confirm Button Component
//!
//! Inline delete confirmation: × first, then "Delete?" with ✓/✗.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button class=button_class.clone() on:click=move |_| set_confirming.set(true)>
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
