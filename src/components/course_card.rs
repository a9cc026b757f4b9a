//! Catalog card for a single course.

use leptos::prelude::*;

use crate::net::types::Course;
use crate::util::format::{course_type_label, format_price};

/// A clickable card linking to the course detail page.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    let type_label = course_type_label(&course.course_type);
    let price = format_price(course.price);

    view! {
        <a class="course-card" href=href>
            <span class="course-card__type">{type_label}</span>
            <h3 class="course-card__title">{course.title}</h3>
            <p class="course-card__description">{course.description}</p>
            <div class="course-card__meta">
                <span>{course.credit_hours} " credit hours"</span>
                <span>{course.duration_months} " months"</span>
                <span>{course.enrolled_count} " enrolled"</span>
            </div>
            <span class="course-card__price">{price}</span>
        </a>
    }
}
