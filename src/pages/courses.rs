//! Course catalog page with type filter and search.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::course_card::CourseCard;
use crate::net::types::Course;
use crate::session::Session;
use crate::util::format::course_type_label;

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

const COURSE_TYPES: [&str; 3] = ["diploma", "bachelor", "certification"];

/// Percent-encode a query component, keeping unreserved characters.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Build the catalog endpoint path for the given filters. `"all"` or an
/// empty type means no type constraint.
fn catalog_path(course_type: &str, search: &str) -> String {
    let mut params = Vec::new();
    if !course_type.is_empty() && course_type != "all" {
        params.push(format!("course_type={}", encode_component(course_type)));
    }
    let search = search.trim();
    if !search.is_empty() {
        params.push(format!("search={}", encode_component(search)));
    }
    if params.is_empty() {
        "/courses".to_owned()
    } else {
        format!("/courses?{}", params.join("&"))
    }
}

/// Case-insensitive substring match over title and description.
fn matches_search(course: &Course, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    course.title.to_lowercase().contains(&query)
        || course.description.to_lowercase().contains(&query)
}

/// Catalog page — fetches `/courses` for the selected type and narrows the
/// list client-side as the visitor types.
#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query_map = use_query_map();
    let initial = query_map.get_untracked();

    let selected_type = RwSignal::new(initial.get("type").unwrap_or_else(|| "all".to_owned()));
    let search = RwSignal::new(initial.get("search").unwrap_or_default());
    let submitted_search = RwSignal::new(search.get_untracked());

    let courses = LocalResource::new(move || {
        let path = catalog_path(&selected_type.get(), &submitted_search.get());
        let api = session.api();
        async move { api.get_json::<Vec<Course>>(&path).await.unwrap_or_default() }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted_search.set(search.get());
    };

    view! {
        <div class="courses-page">
            <section class="courses-page__hero">
                <h1>"Course Catalog"</h1>
                <p>"Diploma, bachelor and certification programs in technology."</p>
                <form class="courses-page__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search courses..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| selected_type.set(event_target_value(&ev))>
                        <option value="all" selected=move || selected_type.get() == "all">
                            "All Programs"
                        </option>
                        {COURSE_TYPES
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option value=t selected=move || selected_type.get() == t>
                                        {course_type_label(t)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" type="submit">"Search"</button>
                </form>
            </section>

            <section class="courses-page__grid">
                <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
                    {move || {
                        courses
                            .get()
                            .map(|list| {
                                let visible: Vec<Course> = list
                                    .into_iter()
                                    .filter(|c| matches_search(c, &search.get()))
                                    .collect();
                                if visible.is_empty() {
                                    view! { <p class="courses-page__empty">"No courses match."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="courses-page__cards">
                                            {visible
                                                .into_iter()
                                                .map(|course| view! { <CourseCard course=course/> })
                                                .collect::<Vec<_>>()}
                                        </div>
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
