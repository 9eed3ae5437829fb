//! Welcome Form Component
//!
//! Asks for the user's name before showing the todo list.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::store::{store_set_user_name, use_app_store};

/// Shown when the submitted name is blank
pub const NAME_REQUIRED: &str = "Please enter your name.";

/// Trimmed name, or the message to show
pub fn validate_name(input: &str) -> Result<String, &'static str> {
    let name = input.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(name.to_string())
}

#[component]
pub fn WelcomeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Pre-populate from the last visit
    let (name, set_name) = signal(ctx.saved_name());
    let (error, set_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_name(&name.get()) {
            Ok(valid) => {
                set_error.set(None);
                ctx.save_name(&valid);
                store_set_user_name(&store, valid);
                ctx.show(Page::Todos);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <form class="welcome-form" on:submit=on_submit>
            <h1>"Welcome!"</h1>
            <input
                type="text"
                placeholder="Your name"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"Continue"</button>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(validate_name(""), Err(NAME_REQUIRED));
        assert_eq!(validate_name("   "), Err(NAME_REQUIRED));
        assert_eq!(validate_name("\t\n"), Err(NAME_REQUIRED));
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  John Doe "), Ok("John Doe".to_string()));
    }
}
