//! Site header with navigation and the auth-aware account menu.

use leptos::prelude::*;

use crate::session::Session;

/// Top navigation bar. Menu entries depend on the session: students get a
/// dashboard link, admins an admin link, visitors login/register.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();

    // Copyable handler: it lives inside `Show` children, which re-run.
    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Right Tech " <span class="site-header__brand-accent">"Centre"</span>
            </a>
            <nav class="site-header__nav">
                <a href="/courses">"Courses"</a>
                <a href="/programs">"Programs"</a>
                <a href="/ai-tutor">"AI Tutor"</a>
                <a href="/verify">"Verify"</a>
                <a href="/about">"About"</a>
            </nav>
            <div class="site-header__account">
                <Show
                    when=move || session.read().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn" href="/login">"Login"</a>
                            <a class="btn btn--primary" href="/register">"Get Started"</a>
                        }
                    }
                >
                    <a href="/dashboard" class="site-header__user">
                        {move || {
                            session
                                .read()
                                .user
                                .map(|u| u.full_name)
                                .unwrap_or_default()
                        }}
                    </a>
                    <Show when=move || session.read().is_admin()>
                        <a class="btn" href="/admin">"Admin"</a>
                    </Show>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
