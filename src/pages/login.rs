//! Login page with email + password credentials.

use leptos::prelude::*;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

#[cfg(any(test, feature = "hydrate"))]
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — submits credentials through the session context and shows
/// the backend's rejection message verbatim on failure.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
            let (email_value, password_value) =
                match validate_login_input(&email.get(), &password.get()) {
                    Ok(values) => values,
                    Err(message) => {
                        error.set(message.to_owned());
                        return;
                    }
                };
            busy.set(true);
            error.set(String::new());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&email_value, &password_value).await {
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
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue learning"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
