//! Student dashboard: enrollments, progress and earned certificates.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Certificate, Enrollment};
use crate::session::Session;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::format_date;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Mean progress across enrollments, 0.0 when there are none.
fn average_progress(enrollments: &[Enrollment]) -> f64 {
    if enrollments.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = enrollments.len() as f64;
    enrollments.iter().map(|e| e.progress).sum::<f64>() / count
}

fn completed_count(enrollments: &[Enrollment]) -> usize {
    enrollments.iter().filter(|e| e.status == "completed").count()
}

/// Student dashboard page — requires an authenticated session.
#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session, use_navigate());

    let enrollments = LocalResource::new(move || {
        let ready = session.read().is_authenticated();
        let api = session.api();
        async move {
            if !ready {
                return Vec::new();
            }
            api.get_json::<Vec<Enrollment>>("/enrollments")
                .await
                .unwrap_or_default()
        }
    });

    let certificates = LocalResource::new(move || {
        let ready = session.read().is_authenticated();
        let api = session.api();
        async move {
            if !ready {
                return Vec::new();
            }
            api.get_json::<Vec<Certificate>>("/certificates")
                .await
                .unwrap_or_default()
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>
                    {move || {
                        session
                            .read()
                            .user
                            .map_or_else(
                                || "Dashboard".to_owned(),
                                |u| format!("Welcome back, {}", u.full_name),
                            )
                    }}
                </h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading your courses..."</p> }>
                {move || {
                    enrollments
                        .get()
                        .map(|list| {
                            let avg = average_progress(&list);
                            let completed = completed_count(&list);
                            view! {
                                <section class="dashboard-page__stats">
                                    <div class="stat-card">
                                        <span class="stat-card__value">{list.len()}</span>
                                        <span class="stat-card__label">"Enrolled Courses"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{completed}</span>
                                        <span class="stat-card__label">"Completed"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">
                                            {format!("{avg:.0}%")}
                                        </span>
                                        <span class="stat-card__label">"Average Progress"</span>
                                    </div>
                                </section>
                                <section class="dashboard-page__enrollments">
                                    <h2>"My Courses"</h2>
                                    {if list.is_empty() {
                                        view! {
                                            <p>
                                                "Nothing here yet — "
                                                <a href="/courses">"browse the catalog"</a> "."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="enrollment-list">
                                                {list
                                                    .into_iter()
                                                    .map(|e| {
                                                        let learn_href =
                                                            format!("/learn/{}", e.course_id);
                                                        view! {
                                                            <li class="enrollment-list__item">
                                                                <a href=learn_href>
                                                                    "Continue course"
                                                                </a>
                                                                <span class="enrollment-list__status">
                                                                    {e.status.clone()}
                                                                </span>
                                                                <progress
                                                                    max="100"
                                                                    value=format!("{:.0}", e.progress)
                                                                ></progress>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }}
                                </section>
                            }
                        })
                }}
            </Suspense>

            <section class="dashboard-page__certificates">
                <h2>"Certificates"</h2>
                <Suspense fallback=move || view! { <p>"Loading certificates..."</p> }>
                    {move || {
                        certificates
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p>"Complete a course to earn a certificate."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="certificate-list">
                                            {list
                                                .into_iter()
                                                .map(|c| {
                                                    view! {
                                                        <li class="certificate-list__item">
                                                            <strong>{c.course_title.clone()}</strong>
                                                            <span>{c.certificate_number.clone()}</span>
                                                            <span>
                                                                {c.credit_hours} " credit hours"
                                                            </span>
                                                            <span>{format_date(&c.issued_at)}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
