//! Post-checkout landing page that confirms the payment settled.
//!
//! DESIGN
//! ======
//! The backend learns the final payment state from the gateway, so this page
//! polls `/payments/status/:session_id` a bounded number of times and then
//! gives up. Transport errors consume an attempt and keep polling; the loop
//! is started once per page visit and is not re-entrant.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::ApiError;
use crate::net::types::PaymentStatus;
use crate::session::Session;
use crate::util::format::format_price;

#[cfg(test)]
#[path = "payment_success_test.rs"]
mod payment_success_test;

/// Fixed attempt cap for status polling.
pub const MAX_POLL_ATTEMPTS: u32 = 5;
/// Fixed delay between attempts.
pub const POLL_INTERVAL_MS: u32 = 2000;

/// What the poll loop should do after one status fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PollDecision {
    /// Payment settled; stop and show success.
    Confirmed,
    /// Checkout session expired; stop and show failure.
    Expired,
    /// Not settled yet (or the fetch failed); wait and try again.
    Retry,
}

fn classify_outcome(outcome: &Result<PaymentStatus, ApiError>) -> PollDecision {
    match outcome {
        Ok(status) if status.payment_status == "paid" => PollDecision::Confirmed,
        Ok(status) if status.status == "expired" => PollDecision::Expired,
        Ok(_) | Err(_) => PollDecision::Retry,
    }
}

/// Displayed phase of the confirmation flow.
#[derive(Clone, Debug, PartialEq)]
enum CheckPhase {
    Checking,
    Confirmed(PaymentStatus),
    Failed,
}

/// Payment confirmation page — polls the checkout session until it settles,
/// expires or the attempt budget runs out.
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query = use_query_map();
    let phase = RwSignal::new(CheckPhase::Checking);

    let session_id = query.get_untracked().get("session_id").unwrap_or_default();
    if session_id.is_empty() {
        phase.set(CheckPhase::Failed);
    } else {
        #[cfg(feature = "hydrate")]
        {
            let api = session.api();
            let path = format!("/payments/status/{session_id}");
            leptos::task::spawn_local(async move {
                for attempt in 0.. {
                    if attempt >= MAX_POLL_ATTEMPTS {
                        phase.set(CheckPhase::Failed);
                        return;
                    }
                    let outcome = api.get_json::<PaymentStatus>(&path).await;
                    match classify_outcome(&outcome) {
                        PollDecision::Confirmed => {
                            if let Ok(status) = outcome {
                                phase.set(CheckPhase::Confirmed(status));
                            }
                            return;
                        }
                        PollDecision::Expired => {
                            phase.set(CheckPhase::Failed);
                            return;
                        }
                        PollDecision::Retry => {
                            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    view! {
        <div class="payment-page">
            {move || match phase.get() {
                CheckPhase::Checking => {
                    view! {
                        <div class="payment-card">
                            <h1>"Processing Payment"</h1>
                            <p>"Please wait while we confirm your payment..."</p>
                        </div>
                    }
                        .into_any()
                }
                CheckPhase::Confirmed(status) => {
                    let amount = status
                        .amount_total
                        .map(|cents| format_price(cents / 100.0));
                    view! {
                        <div class="payment-card payment-card--success">
                            <h1>"Payment Successful"</h1>
                            <p>"You are enrolled. Your course is ready on your dashboard."</p>
                            {amount.map(|a| view! { <p class="payment-card__amount">{a}</p> })}
                            <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                        </div>
                    }
                        .into_any()
                }
                CheckPhase::Failed => {
                    view! {
                        <div class="payment-card payment-card--failed">
                            <h1>"Payment Not Confirmed"</h1>
                            <p>
                                "We could not confirm your payment. If you were charged, it "
                                "will appear on your dashboard shortly."
                            </p>
                            <a class="btn" href="/courses">"Back to Courses"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
