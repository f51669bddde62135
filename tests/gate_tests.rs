use ttviewer::core::gate::{AttemptGate, GateState, MAX_ATTEMPTS};
use ttviewer::errors::AppError;
use ttviewer::models::notice::Severity;

#[test]
fn test_new_gate_is_open_zero() {
    let gate = AttemptGate::new();
    assert_eq!(gate.state(), GateState::Open(0));
    assert_eq!(gate.successful_views(), 0);
    assert!(!gate.locked());
    assert_eq!(gate.max_attempts(), MAX_ATTEMPTS);
}

#[test]
fn test_threshold_notices_fire_once_each() {
    let mut gate = AttemptGate::new();
    let mut severities = Vec::new();

    for _ in 0..5 {
        severities.push(gate.record_view().expect("view allowed").map(|n| n.severity));
    }

    assert_eq!(
        severities,
        vec![
            None,
            None,
            Some(Severity::Warning),
            Some(Severity::Error),
            Some(Severity::Info),
        ]
    );
    assert_eq!(gate.state(), GateState::Locked);
    assert_eq!(gate.successful_views(), 5);
}

#[test]
fn test_no_view_after_lock_until_reset() {
    let mut gate = AttemptGate::new();
    for _ in 0..5 {
        gate.record_view().expect("view allowed");
    }

    assert!(matches!(
        gate.record_view(),
        Err(AppError::AttemptsExhausted(5))
    ));
    assert_eq!(gate.successful_views(), 5);
    assert!(gate.locked());

    gate.reset();
    assert!(gate.record_view().is_ok());
    assert_eq!(gate.successful_views(), 1);
}

#[test]
fn test_count_never_decreases_without_reset() {
    let mut gate = AttemptGate::new();
    let mut last = 0;
    for _ in 0..8 {
        let _ = gate.record_view();
        assert!(gate.successful_views() >= last);
        last = gate.successful_views();
    }
    assert_eq!(last, 5);
}

#[test]
fn test_reset_always_returns_to_open_zero() {
    for views in 0..=5 {
        for locked in [false, true] {
            let mut gate = AttemptGate::restore(views, locked, MAX_ATTEMPTS);
            gate.reset();
            assert_eq!(gate.successful_views(), 0);
            assert!(!gate.locked());
            gate.reset();
            assert_eq!(gate.state(), GateState::Open(0));
        }
    }
}

#[test]
fn test_block_forces_lock() {
    let mut gate = AttemptGate::restore(5, false, MAX_ATTEMPTS);
    assert!(gate.locked());

    let mut gate2 = AttemptGate::restore(2, true, MAX_ATTEMPTS);
    let err = gate2.block();
    assert!(matches!(err, AppError::AttemptsExhausted(5)));
    assert!(gate2.locked());
    assert_eq!(gate2.successful_views(), 2);

    gate.reset();
    assert!(gate.can_view());
}

#[test]
fn test_restore_clamps_count() {
    let gate = AttemptGate::restore(42, false, MAX_ATTEMPTS);
    assert_eq!(gate.successful_views(), 5);
    assert!(gate.locked());
}

#[test]
fn test_advisory_only_when_two_or_fewer_left_and_open() {
    assert!(AttemptGate::restore(2, false, 5).advisory().is_none());

    let three = AttemptGate::restore(3, false, 5).advisory().expect("advisory at 3");
    assert_eq!(three.severity, Severity::Warning);
    assert!(three.text.contains("2"));

    assert!(AttemptGate::restore(4, false, 5).advisory().is_some());
    assert!(AttemptGate::restore(5, false, 5).advisory().is_none());
    assert!(AttemptGate::restore(3, true, 5).advisory().is_none());
}

#[test]
fn test_status_line() {
    let gate = AttemptGate::restore(2, false, 5);
    assert_eq!(gate.status_line(), "Attempts used this session: 2 / 5");
}

#[test]
fn test_custom_limit_of_one_locks_after_first_view() {
    let mut gate = AttemptGate::with_limit(1);
    let notice = gate.record_view().expect("first view allowed");
    assert_eq!(notice.map(|n| n.severity), Some(Severity::Info));
    assert!(gate.locked());
}
