//! Public certificate verification page.

use leptos::prelude::*;

use crate::net::types::CertificateVerification;
use crate::session::Session;
use crate::util::format::format_date;

#[cfg(test)]
#[path = "certificate_verify_test.rs"]
mod certificate_verify_test;

/// Endpoint path for a certificate number, `None` for blank input.
fn verify_path(raw: &str) -> Option<String> {
    let number = raw.trim();
    if number.is_empty() {
        return None;
    }
    Some(format!("/certificates/verify/{number}"))
}

/// Certificate verification page — anyone can check a certificate number;
/// no authentication required.
#[component]
pub fn CertificateVerifyPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let number = RwSignal::new(String::new());
    let result = RwSignal::new(None::<CertificateVerification>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(path) = verify_path(&number.get()) else {
            error.set("Enter a certificate number.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());
        result.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            leptos::task::spawn_local(async move {
                match api.get_json::<CertificateVerification>(&path).await {
                    Ok(verification) => result.set(Some(verification)),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, path);
            busy.set(false);
        }
    };

    view! {
        <div class="verify-page">
            <h1>"Verify a Certificate"</h1>
            <p>"Enter the certificate number printed on the document."</p>

            <form class="verify-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="RTC-2026-0001"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Verify"
                </button>
            </form>

            <Show when=move || !error.get().is_empty()>
                <p class="verify-page__error">{move || error.get()}</p>
            </Show>

            {move || {
                result
                    .get()
                    .map(|verification| {
                        if let Some(cert) = verification.certificate.filter(|_| verification.valid)
                        {
                            view! {
                                <div class="verify-card verify-card--valid">
                                    <h2>"Valid Certificate"</h2>
                                    <p><strong>{cert.user_name.clone()}</strong></p>
                                    <p>{cert.course_title.clone()}</p>
                                    <p>{cert.credit_hours} " credit hours"</p>
                                    <p>"Issued " {format_date(&cert.issued_at)}</p>
                                    <p class="verify-card__number">{cert.certificate_number}</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            let message = verification
                                .message
                                .unwrap_or_else(|| "Certificate not found".to_owned());
                            view! {
                                <div class="verify-card verify-card--invalid">
                                    <h2>"Not Verified"</h2>
                                    <p>{message}</p>
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
