//! Admin dashboard: platform analytics, user management, catalog summary.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{AnalyticsOverview, Course, Role, User};
use crate::session::Session;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};
use crate::util::format::format_price;

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Parse a role select value. Unknown strings are rejected rather than
/// defaulted so a UI bug cannot silently demote anyone.
fn parse_role(value: &str) -> Option<Role> {
    match value {
        "student" => Some(Role::Student),
        "instructor" => Some(Role::Instructor),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

/// Admin dashboard page. `required` is the minimum role for the route
/// (`/admin` demands admin, `/instructor` accepts instructors too).
#[component]
pub fn AdminDashboardPage(#[prop(default = Role::Admin)] required: Role) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());
    install_role_redirect(session, required, navigate);

    // Bumped after a role change to refetch the user list.
    let users_version = RwSignal::new(0u32);

    let overview = LocalResource::new(move || {
        let ready = session.read().is_admin();
        let api = session.api();
        async move {
            if !ready {
                return None;
            }
            api.get_json::<AnalyticsOverview>("/analytics/overview")
                .await
                .ok()
        }
    });

    let users = LocalResource::new(move || {
        users_version.track();
        let ready = session.read().is_admin();
        let api = session.api();
        async move {
            if !ready {
                return Vec::new();
            }
            api.get_json::<Vec<User>>("/users").await.unwrap_or_default()
        }
    });

    let courses = LocalResource::new(move || {
        let api = session.api();
        async move {
            api.get_json::<Vec<Course>>("/courses?is_published=true")
                .await
                .unwrap_or_default()
        }
    });

    let error = RwSignal::new(String::new());

    let on_role_change = move |user_id: String, raw: String| {
        let Some(new_role) = parse_role(&raw) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            leptos::task::spawn_local(async move {
                let path = format!("/users/{user_id}/role");
                let request = crate::net::types::RoleUpdateRequest { new_role };
                match api.put_json(&path, &request).await {
                    Ok(()) => users_version.update(|v| *v += 1),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, new_role);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>

            <Suspense fallback=move || view! { <p>"Loading analytics..."</p> }>
                {move || {
                    overview
                        .get()
                        .flatten()
                        .map(|o| {
                            view! {
                                <section class="admin-page__stats">
                                    <div class="stat-card">
                                        <span class="stat-card__value">{o.total_users}</span>
                                        <span class="stat-card__label">"Users"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{o.total_courses}</span>
                                        <span class="stat-card__label">"Courses"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{o.total_enrollments}</span>
                                        <span class="stat-card__label">"Enrollments"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{o.total_certificates}</span>
                                        <span class="stat-card__label">"Certificates"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">
                                            {format_price(o.total_revenue)}
                                        </span>
                                        <span class="stat-card__label">"Revenue"</span>
                                    </div>
                                </section>
                            }
                        })
                }}
            </Suspense>

            <section class="admin-page__users">
                <h2>"Users"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="admin-page__error">{move || error.get()}</p>
                </Show>
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|list| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|u| {
                                                    let user_id = u.id.clone();
                                                    let current = u.role;
                                                    view! {
                                                        <tr>
                                                            <td>{u.full_name.clone()}</td>
                                                            <td>{u.email.clone()}</td>
                                                            <td>
                                                                <select on:change=move |ev| {
                                                                    on_role_change(
                                                                        user_id.clone(),
                                                                        event_target_value(&ev),
                                                                    );
                                                                }>
                                                                    {[
                                                                        Role::Student,
                                                                        Role::Instructor,
                                                                        Role::Admin,
                                                                    ]
                                                                        .into_iter()
                                                                        .map(|r| {
                                                                            view! {
                                                                                <option
                                                                                    value=r.as_str()
                                                                                    selected=current == r
                                                                                >
                                                                                    {r.as_str()}
                                                                                </option>
                                                                            }
                                                                        })
                                                                        .collect::<Vec<_>>()}
                                                                </select>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="admin-page__courses">
                <h2>"Published Courses"</h2>
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || {
                        courses
                            .get()
                            .map(|list| {
                                view! {
                                    <ul class="admin-course-list">
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <li>
                                                        {c.title.clone()} " — "
                                                        {c.enrolled_count} " enrolled"
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
