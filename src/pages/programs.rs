//! Programs overview page describing the three program tracks.

use leptos::prelude::*;

use crate::util::format::course_type_label;

const TRACKS: [(&str, &str); 3] = [
    (
        "diploma",
        "Focused one-to-two year programs for a fast route into industry.",
    ),
    (
        "bachelor",
        "Full degree programs with accredited credit hours and capstones.",
    ),
    (
        "certification",
        "Short, skill-specific credentials you can verify publicly.",
    ),
];

#[component]
pub fn ProgramsPage() -> impl IntoView {
    view! {
        <div class="programs-page">
            <h1>"Programs"</h1>
            <div class="programs-page__tracks">
                {TRACKS
                    .into_iter()
                    .map(|(kind, blurb)| {
                        let href = format!("/courses?type={kind}");
                        view! {
                            <a class="program-track" href=href>
                                <h2>{course_type_label(kind)}</h2>
                                <p>{blurb}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
