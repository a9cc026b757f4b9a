//! Course detail page with enrollment / checkout entry point.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Course, Enrollment};
use crate::session::Session;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{course_type_label, format_price};

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

/// Find the caller's enrollment in `course_id`, if any.
fn enrollment_for<'a>(enrollments: &'a [Enrollment], course_id: &str) -> Option<&'a Enrollment> {
    enrollments.iter().find(|e| e.course_id == course_id)
}

/// Learning view for an enrolled student. Same content as the detail page,
/// but the route requires an authenticated session.
#[component]
pub fn LearnPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());
    view! { <CourseDetailPage/> }
}

/// Course detail page — public course info plus, for authenticated users,
/// enrollment state and a checkout button that hands off to the hosted
/// payment page.
#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();
    let course_id = move || params.get().get("id").unwrap_or_default();

    let course = LocalResource::new(move || {
        let path = format!("/courses/{}", course_id());
        let api = session.api();
        async move { api.get_json::<Course>(&path).await.ok() }
    });

    // Re-fetches when auth state changes so the enroll button settles after
    // bootstrap.
    let enrollment = LocalResource::new(move || {
        let authenticated = session.read().is_authenticated();
        let id = course_id();
        let api = session.api();
        async move {
            if !authenticated {
                return None;
            }
            let enrollments = api.get_json::<Vec<Enrollment>>("/enrollments").await.ok()?;
            enrollment_for(&enrollments, &id).cloned()
        }
    });

    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Copyable handler: it lives inside re-running Suspense children.
    let on_enroll = move |_| {
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) else {
                return;
            };
            busy.set(true);
            error.set(String::new());

            let request = crate::net::types::CheckoutRequest {
                course_id: course_id(),
                origin_url: origin,
            };
            let api = session.api();
            leptos::task::spawn_local(async move {
                let checkout = api
                    .post_json::<_, crate::net::types::CheckoutResponse>(
                        "/payments/checkout",
                        &request,
                    )
                    .await;
                match checkout {
                    Ok(checkout) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&checkout.checkout_url);
                        }
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
        <div class="course-detail-page">
            <Suspense fallback=move || view! { <p>"Loading course..."</p> }>
                {move || {
                    course
                        .get()
                        .map(|found| match found {
                            None => view! { <p>"Course not found."</p> }.into_any(),
                            Some(course) => {
                                let module_count = course.modules.len();
                                view! {
                                    <article class="course-detail">
                                        <span class="course-detail__type">
                                            {course_type_label(&course.course_type)}
                                        </span>
                                        <h1>{course.title.clone()}</h1>
                                        <p class="course-detail__description">
                                            {course.description.clone()}
                                        </p>
                                        <ul class="course-detail__facts">
                                            <li>{format_price(course.price)}</li>
                                            <li>{course.credit_hours} " credit hours"</li>
                                            <li>{course.duration_months} " months"</li>
                                            <li>{module_count} " modules"</li>
                                            <li>{course.enrolled_count} " students enrolled"</li>
                                        </ul>
                                        {move || {
                                            if let Some(e) = enrollment.get().flatten() {
                                                view! {
                                                    <p class="course-detail__enrolled">
                                                        "Enrolled — progress "
                                                        {format!("{:.0}%", e.progress)}
                                                    </p>
                                                }
                                                    .into_any()
                                            } else if session.read().is_authenticated() {
                                                view! {
                                                    <button
                                                        class="btn btn--primary"
                                                        disabled=move || busy.get()
                                                        on:click=on_enroll
                                                    >
                                                        "Enroll Now"
                                                    </button>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <a class="btn btn--primary" href="/login">
                                                        "Login to Enroll"
                                                    </a>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                        <Show when=move || !error.get().is_empty()>
                                            <p class="course-detail__error">{move || error.get()}</p>
                                        </Show>
                                    </article>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
