use super::*;

fn status(session: &str, payment: &str) -> PaymentStatus {
    PaymentStatus {
        status: session.to_owned(),
        payment_status: payment.to_owned(),
        amount_total: Some(49900.0),
        currency: Some("usd".to_owned()),
    }
}

#[test]
fn paid_status_confirms() {
    let outcome = Ok(status("complete", "paid"));
    assert_eq!(classify_outcome(&outcome), PollDecision::Confirmed);
}

#[test]
fn expired_session_fails() {
    let outcome = Ok(status("expired", "unpaid"));
    assert_eq!(classify_outcome(&outcome), PollDecision::Expired);
}

#[test]
fn paid_wins_over_expired_marker() {
    // The gateway reports payment state authoritatively.
    let outcome = Ok(status("expired", "paid"));
    assert_eq!(classify_outcome(&outcome), PollDecision::Confirmed);
}

#[test]
fn pending_status_retries() {
    let outcome = Ok(status("open", "initiated"));
    assert_eq!(classify_outcome(&outcome), PollDecision::Retry);
}

#[test]
fn fetch_error_retries_rather_than_failing() {
    let outcome = Err(ApiError::Transport("connection reset".to_owned()));
    assert_eq!(classify_outcome(&outcome), PollDecision::Retry);
}

#[test]
fn poll_budget_is_bounded() {
    assert_eq!(MAX_POLL_ATTEMPTS, 5);
    assert_eq!(POLL_INTERVAL_MS, 2000);
}
