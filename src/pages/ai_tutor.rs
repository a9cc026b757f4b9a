//! AI tutor chat page.
//!
//! DESIGN
//! ======
//! The transcript lives client-side; the backend keeps the conversational
//! memory under a session id it returns with every reply. Tutor answers are
//! markdown and rendered with raw HTML stripped.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::session::Session;

#[cfg(test)]
#[path = "ai_tutor_test.rs"]
mod ai_tutor_test;

const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Speaker {
    Student,
    Tutor,
}

#[derive(Clone, Debug, PartialEq)]
struct ChatEntry {
    speaker: Speaker,
    content: String,
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// AI tutor page — free-form questions, answered with course-aware context
/// on the backend. Sending requires an authenticated session.
#[component]
pub fn AiTutorPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let messages = RwSignal::new(Vec::<ChatEntry>::new());
    let input = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let chat_session = RwSignal::new(None::<String>);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let question = input.get().trim().to_owned();
        if question.is_empty() {
            return;
        }
        if !session.snapshot().is_authenticated() {
            notice.set("Please login to use the AI Tutor.".to_owned());
            return;
        }
        notice.set(String::new());
        input.set(String::new());
        messages.update(|m| {
            m.push(ChatEntry {
                speaker: Speaker::Student,
                content: question.clone(),
            });
        });
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::ChatRequest {
                    content: question,
                    lesson_context: None,
                    course_id: None,
                };
                let reply = api
                    .post_json::<_, crate::net::types::ChatReply>("/ai/chat", &request)
                    .await;
                let content = match reply {
                    Ok(reply) => {
                        chat_session.set(Some(reply.session_id));
                        reply.response
                    }
                    Err(_) => APOLOGY.to_owned(),
                };
                messages.update(|m| {
                    m.push(ChatEntry {
                        speaker: Speaker::Tutor,
                        content,
                    });
                });
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    view! {
        <div class="tutor-page">
            <h1>"AI Tutor"</h1>
            <p class="tutor-page__subtitle">
                "Ask anything about your coursework. Answers are generated and may be imperfect."
            </p>

            <div
                class="tutor-page__messages"
                data-conversation=move || chat_session.get().unwrap_or_default()
            >
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=|(_, entry)| {
                        match entry.speaker {
                            Speaker::Student => view! {
                                <div class="chat-message chat-message--student">
                                    {entry.content}
                                </div>
                            }
                                .into_any(),
                            Speaker::Tutor => {
                                let rendered = render_markdown_html(&entry.content);
                                view! {
                                    <div
                                        class="chat-message chat-message--tutor"
                                        inner_html=rendered
                                    ></div>
                                }
                                    .into_any()
                            }
                        }
                    }
                />
            </div>

            <Show when=move || !notice.get().is_empty()>
                <p class="tutor-page__notice">{move || notice.get()}</p>
            </Show>

            <form class="tutor-page__composer" on:submit=on_send>
                <input
                    type="text"
                    placeholder="Ask the tutor..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
