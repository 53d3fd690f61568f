use super::*;

#[test]
fn patient_path_formats_expected_path() {
    assert_eq!(patient_path("p42"), "/api/patients/p42");
}

#[test]
fn records_path_uses_kind_segment() {
    assert_eq!(records_path(RecordKind::Vaccine, "p1"), "/api/patients/p1/vaccines");
    assert_eq!(records_path(RecordKind::Hospitalization, "p1"), "/api/patients/p1/hospitalizations");
}

#[test]
fn record_path_appends_record_id() {
    assert_eq!(record_path(RecordKind::Surgery, "p1", "s9"), "/api/patients/p1/surgeries/s9");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on_ready(fetch_me());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never yields `Pending` (the SSR stubs return immediately).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("ssr stub unexpectedly pending"),
    }
}
