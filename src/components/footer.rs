//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__links">
                <a href="/courses">"Course Catalog"</a>
                <a href="/programs">"Programs"</a>
                <a href="/verify">"Verify a Certificate"</a>
                <a href="/about">"About Us"</a>
            </div>
            <p class="site-footer__note">
                "Right Tech Centre — accredited online technology education."
            </p>
        </footer>
    }
}
