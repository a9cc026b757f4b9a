//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Right Tech Centre"</h1>
            <p>
                "Right Tech Centre is an online education platform offering "
                "accredited technology programs: diplomas, bachelor degrees and "
                "professional certifications."
            </p>
            <p>
                "Every program is taught by practitioners, backed by an AI tutor "
                "available around the clock, and finishes with a certificate "
                "anyone can verify on this site."
            </p>
            <a class="btn btn--primary" href="/courses">"Explore the Catalog"</a>
        </div>
    }
}
