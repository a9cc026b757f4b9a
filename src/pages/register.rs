//! Registration page creating a student account.

use leptos::prelude::*;

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug)]
struct RegistrationInput {
    email: String,
    password: String,
    full_name: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_registration_input(
    email: &str,
    password: &str,
    confirm: &str,
    full_name: &str,
) -> Result<RegistrationInput, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || full_name.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegistrationInput {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
    })
}

/// Registration page — same submission contract as login; new accounts are
/// always students, role upgrades are an admin operation.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::session::Session>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let input = match validate_registration_input(
                &email.get(),
                &password.get(),
                &confirm.get(),
                &full_name.get(),
            ) {
                Ok(input) => input,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .register(
                        &input.email,
                        &input.password,
                        &input.full_name,
                        crate::net::types::Role::Student,
                    )
                    .await;
                match result {
                    Ok(_) => {
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Account"</h1>
                <p class="auth-card__subtitle">"Start learning today"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm your password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
