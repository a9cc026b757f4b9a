//! Landing page with hero and a featured slice of the catalog.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::types::Course;
use crate::session::Session;

/// Number of courses featured on the landing page.
const FEATURED_COUNT: usize = 3;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let featured = LocalResource::new(move || {
        let api = session.api();
        async move {
            let mut courses = api
                .get_json::<Vec<Course>>("/courses")
                .await
                .unwrap_or_default();
            courses.truncate(FEATURED_COUNT);
            courses
        }
    });

    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1>"Build a Tech Career That Lasts"</h1>
                <p>
                    "Accredited diploma, bachelor and certification programs, "
                    "taught online with an AI tutor at your side."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/courses">"Browse Courses"</a>
                    <a class="btn" href="/register">"Create Account"</a>
                </div>
            </section>

            <section class="landing-page__featured">
                <h2>"Featured Programs"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        featured
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="landing-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|course| view! { <CourseCard course=course/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
