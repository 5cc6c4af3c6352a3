use super::*;

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    (Rc::clone(&count), count)
}

// =============================================================
// ManualTimers
// =============================================================

#[test]
fn manual_timers_fire_only_when_due() {
    let timers = ManualTimers::new();
    let (fired, probe) = counter();
    timers.after(100, Box::new(move || fired.set(fired.get() + 1)));

    timers.advance(99);
    assert_eq!(probe.get(), 0);
    assert_eq!(timers.pending(), 1);

    timers.advance(1);
    assert_eq!(probe.get(), 1);
    assert_eq!(timers.pending(), 0);
    assert_eq!(timers.now(), 100);
}

#[test]
fn manual_timers_fire_same_instant_in_schedule_order() {
    let timers = ManualTimers::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        timers.after(10, Box::new(move || order.borrow_mut().push(label)));
    }
    timers.advance(10);
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn manual_timers_run_tasks_scheduled_during_advance() {
    let timers = ManualTimers::new();
    let (fired, probe) = counter();
    let inner = timers.clone();
    timers.after(
        10,
        Box::new(move || {
            inner.after(10, Box::new(move || fired.set(fired.get() + 1)));
        }),
    );
    timers.advance(25);
    assert_eq!(probe.get(), 1);
    assert_eq!(timers.now(), 25);
}

// =============================================================
// spawn_chain
// =============================================================

#[test]
fn chain_reschedules_with_returned_delays() {
    let timers = ManualTimers::new();
    let stamps = Rc::new(RefCell::new(Vec::new()));
    let clock = timers.clone();
    let record = Rc::clone(&stamps);
    let mut delays = vec![30, 20, 10].into_iter();
    spawn_chain(timers.clone(), CancelToken::new(), 5, move || {
        record.borrow_mut().push(clock.now());
        delays.next()
    });

    timers.advance(1_000);
    assert_eq!(*stamps.borrow(), vec![5, 35, 55, 65]);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn chain_stops_after_cancel() {
    let timers = ManualTimers::new();
    let token = CancelToken::new();
    let (ticks, probe) = counter();
    spawn_chain(timers.clone(), token.clone(), 10, move || {
        ticks.set(ticks.get() + 1);
        Some(10)
    });

    timers.advance(35);
    assert_eq!(probe.get(), 3);

    token.cancel();
    timers.advance(100);
    assert_eq!(probe.get(), 3);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn cancelled_before_first_step_never_runs() {
    let timers = ManualTimers::new();
    let token = CancelToken::new();
    token.cancel();
    let (ticks, probe) = counter();
    spawn_chain(timers.clone(), token, 0, move || {
        ticks.set(ticks.get() + 1);
        Some(1)
    });
    timers.advance(10);
    assert_eq!(probe.get(), 0);
}

#[test]
fn cancel_token_clones_share_state() {
    let token = CancelToken::new();
    let other = token.clone();
    assert!(!other.is_cancelled());
    token.cancel();
    assert!(other.is_cancelled());
}
