//! Unit tests for construction, inspection, and combinator contracts.

use std::cell::Cell;

use rstest::{fixture, rstest};
use test_helpers::{CallCounter, catch_payload, panic_message};

use super::{Outcome, UnwrapAbort, and_then, map, or, or_else};
use crate::OutcomeError;

#[fixture]
fn counter() -> CallCounter {
    CallCounter::new()
}

fn fail() -> OutcomeError {
    OutcomeError::msg("fail")
}

#[rstest]
#[case(0)]
#[case(-7)]
#[case(i64::MAX)]
fn success_reports_value(#[case] value: i64) {
    let outcome = Outcome::success(value);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.into_parts(), (value, None));
}

#[test]
fn failure_reports_error_unchanged() {
    let outcome = Outcome::<i64>::failure(fail());
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert_eq!(outcome.error(), Some(&fail()));
    assert_eq!(outcome.unwrap_error(), Some(fail()));
}

#[test]
fn failure_parts_use_default_value() {
    let outcome = Outcome::<String>::failure("fail");
    assert_eq!(outcome.into_parts(), (String::new(), Some(fail())));
}

#[test]
fn success_has_no_error() {
    assert_eq!(Outcome::success(1).unwrap_error(), None);
    assert_eq!(Outcome::success(1).error(), None);
}

#[rstest]
#[case(Outcome::success(5), 5)]
#[case(Outcome::failure("fail"), 100)]
fn unwrap_or_picks_value_or_fallback(#[case] outcome: Outcome<i32>, #[case] expected: i32) {
    assert_eq!(outcome.unwrap_or(100), expected);
}

#[rstest]
fn unwrap_or_else_skips_producer_on_success(counter: CallCounter) {
    let value = Outcome::success(5).unwrap_or_else(|| counter.tick(99));
    assert_eq!(value, 5);
    assert!(counter.never_called());
}

#[rstest]
fn unwrap_or_else_runs_producer_once_on_failure(counter: CallCounter) {
    let value = Outcome::<i32>::failure(fail()).unwrap_or_else(|| counter.tick(99));
    assert_eq!(value, 99);
    assert!(counter.called_once());
}

#[test]
fn must_unwrap_returns_success_value() {
    assert_eq!(Outcome::success("hello").must_unwrap(), "hello");
}

#[test]
fn must_unwrap_aborts_with_stored_error() {
    let abort = catch_payload::<UnwrapAbort, _>(|| Outcome::<i32>::failure(fail()).must_unwrap())
        .unwrap_or_else(|| panic!("expected must_unwrap to abort"));
    assert_eq!(abort.cause(), &fail());
    assert_eq!(abort.message(), "fail");
}

#[test]
fn must_unwrap_cause_can_be_taken() {
    let abort = catch_payload::<UnwrapAbort, _>(|| {
        Outcome::<i32>::failure(fail().context("outer")).must_unwrap()
    })
    .unwrap_or_else(|| panic!("expected must_unwrap to abort"));
    assert_eq!(abort.to_string(), "outer: fail");
    assert_eq!(abort.into_cause(), fail().context("outer"));
}

#[test]
fn expect_prefixes_caller_context() {
    let message = panic_message(|| Outcome::<i32>::failure(fail()).expect("should not fail"));
    assert_eq!(message.as_deref(), Some("should not fail: fail"));
}

#[test]
fn expect_returns_success_value() {
    assert_eq!(Outcome::success(8).expect("never shown"), 8);
}

#[test]
fn map_transforms_success() {
    let mapped = map(Outcome::success(3), |x| x + 1);
    assert_eq!(mapped.into_parts(), (4, None));
}

#[rstest]
fn map_carries_failure_without_calling(counter: CallCounter) {
    let mapped: Outcome<String> = map(Outcome::<i32>::failure(fail()), |x| {
        counter.tick(x.to_string())
    });
    assert_eq!(mapped, Outcome::Failure(fail()));
    assert!(counter.never_called());
}

#[rstest]
#[case(Outcome::success(11))]
#[case(Outcome::failure("fail"))]
fn map_identity_is_a_no_op(#[case] outcome: Outcome<i32>) {
    assert_eq!(map(outcome.clone(), |x| x), outcome);
}

#[rstest]
fn map_same_runs_once_on_success(counter: CallCounter) {
    let mapped = Outcome::success(3).map_same(|x| counter.tick(x * 10));
    assert_eq!(mapped, Outcome::success(30));
    assert!(counter.called_once());
}

#[rstest]
fn map_error_is_identity_on_success(counter: CallCounter) {
    let outcome = Outcome::success(2).map_error(|e| counter.tick(e.context("wrapped")));
    assert_eq!(outcome, Outcome::success(2));
    assert!(counter.never_called());
}

#[rstest]
fn map_error_transforms_failure_once(counter: CallCounter) {
    let outcome =
        Outcome::<i32>::failure(fail()).map_error(|e| counter.tick(e.context("wrapped")));
    let rendered = outcome.unwrap_error().map(|e| e.to_string());
    assert_eq!(rendered.as_deref(), Some("wrapped: fail"));
    assert!(counter.called_once());
}

#[test]
fn and_then_returns_continuation_outcome() {
    let chained = and_then(Outcome::success(5), |x| {
        Outcome::success(format!("{x} ok"))
    });
    assert_eq!(chained, Outcome::success(String::from("5 ok")));
}

#[test]
fn and_then_does_not_rewrap_continuation_failure() {
    let chained: Outcome<u8> = and_then(Outcome::success(5), |_| Outcome::failure("too big"));
    assert_eq!(chained, Outcome::Failure(OutcomeError::msg("too big")));
}

#[rstest]
fn and_then_short_circuits_failure(counter: CallCounter) {
    let chained: Outcome<String> = and_then(Outcome::<i32>::failure(fail()), |x| {
        counter.tick(Outcome::success(x.to_string()))
    });
    assert_eq!(chained, Outcome::Failure(fail()));
    assert!(counter.never_called());
}

#[rstest]
fn inspect_observes_success_once(counter: CallCounter) {
    let seen = Cell::new(None);
    let outcome = Outcome::success("value").inspect(|v| {
        counter.record();
        seen.set(Some(*v));
    });
    assert_eq!(outcome, Outcome::success("value"));
    assert_eq!(seen.get(), Some("value"));
    assert!(counter.called_once());
}

#[rstest]
fn inspect_skips_failure(counter: CallCounter) {
    let outcome = Outcome::<&str>::failure(fail()).inspect(|_| counter.record());
    assert_eq!(outcome, Outcome::Failure(fail()));
    assert!(counter.never_called());
}

#[test]
fn errorf_leaves_success_untouched() {
    let outcome = Outcome::success(1).errorf(format_args!("loading {}", "cfg"));
    assert_eq!(outcome, Outcome::success(1));
}

#[test]
fn errorf_wraps_failure_with_cause() {
    let path = "app.toml";
    let outcome = Outcome::<()>::failure(fail()).errorf(format_args!("reading {path}"));
    let error = outcome
        .unwrap_error()
        .unwrap_or_else(|| panic!("expected a failure"));
    assert_eq!(error.to_string(), "reading app.toml: fail");
    assert_eq!(error.cause(), Some(&fail()));
}

#[rstest]
#[case(Outcome::<()>::failure(fail()).errorf("reading config"))]
#[case(Outcome::<()>::failure(fail()).errorf(String::from("reading config")))]
#[case(Outcome::<()>::failure(fail()).errorf(format!("reading {}", "config")))]
#[case(Outcome::<()>::failure(fail()).errorf(OutcomeError::msg("reading config")))]
fn errorf_accepts_any_displayable_context(#[case] outcome: Outcome<()>) {
    assert_eq!(outcome, Outcome::Failure(fail().context("reading config")));
}

#[test]
fn repeated_errorf_keeps_layers_in_order() {
    let error = Outcome::<()>::failure(fail())
        .errorf(format_args!("inner"))
        .errorf(format_args!("outer"))
        .unwrap_error()
        .unwrap_or_else(|| panic!("expected a failure"));
    let layers: Vec<String> = error.chain().map(ToString::to_string).collect();
    assert_eq!(layers, ["outer: inner: fail", "inner: fail", "fail"]);
    assert_eq!(error.root_cause(), &fail());
}

#[rstest]
#[case(Outcome::success("primary"), "primary")]
#[case(Outcome::failure("bad"), "ok")]
fn or_prefers_primary_success(#[case] primary: Outcome<&'static str>, #[case] expected: &str) {
    assert_eq!(or(primary, Outcome::success("ok")), Outcome::success(expected));
}

#[test]
fn or_returns_alternative_failure_as_is() {
    let alternative = Outcome::<i32>::failure("second");
    assert_eq!(
        or(Outcome::failure("first"), alternative.clone()),
        alternative
    );
}

#[rstest]
fn or_else_skips_producer_on_success(counter: CallCounter) {
    let outcome = or_else(Outcome::success(1), || counter.tick(Outcome::success(77)));
    assert_eq!(outcome, Outcome::success(1));
    assert!(counter.never_called());
}

#[rstest]
fn or_else_runs_producer_once_on_failure(counter: CallCounter) {
    let outcome = Outcome::<i32>::failure("bad").or_else(|| counter.tick(Outcome::success(77)));
    assert_eq!(outcome.must_unwrap(), 77);
    assert!(counter.called_once());
}

#[test]
fn as_success_borrows_value() {
    let outcome = Outcome::success(vec![1, 2, 3]);
    assert_eq!(outcome.as_success().map(Vec::len), Some(3));
    assert!(Outcome::<Vec<u8>>::failure("bad").as_success().is_none());
}

#[test]
fn converts_to_and_from_result() {
    let ok: Result<i32, OutcomeError> = Outcome::success(4).into();
    assert_eq!(ok, Ok(4));
    let err: Result<i32, OutcomeError> = Outcome::failure(fail()).into();
    assert_eq!(err, Err(fail()));
    assert_eq!(Outcome::from(Err::<i32, _>(fail())), Outcome::Failure(fail()));
    assert_eq!(Outcome::from(Ok::<_, OutcomeError>(4)), Outcome::success(4));
}
