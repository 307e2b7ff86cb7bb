//! Loop behavior: invocation, failure isolation, cancellation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use loopvisor::{ActionError, ActionFn, ActionRef, RunnerSpec, start};

/// Polls `cond` every 10ms until it holds or `deadline` elapses.
fn wait_until(deadline: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let started = Instant::now();
    while started.elapsed() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    cond()
}

/// Action that bumps a counter on every invocation and always succeeds.
fn counting_action(name: &'static str, calls: &Arc<AtomicU64>) -> ActionRef {
    let calls = Arc::clone(calls);
    ActionFn::arc(name, move |_ctx: CancellationToken| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ActionError>(())
        }
    })
}

#[test]
fn start_returns_without_blocking_and_action_runs() {
    let calls = Arc::new(AtomicU64::new(0));
    let token = CancellationToken::new();
    let spec = RunnerSpec::new(counting_action("probe", &calls), Duration::from_secs(10));

    let before = Instant::now();
    let handle = start(spec, token.clone()).expect("start failed");
    assert!(
        before.elapsed() < Duration::from_millis(250),
        "start must not block on the loop"
    );

    assert!(
        wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) >= 1),
        "action was never invoked"
    );

    token.cancel();
    handle.join().expect("loop thread panicked");
}

#[test]
fn failing_action_invokes_hook_every_iteration() {
    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("flaky")
        .with_retry_delay(Duration::from_millis(100))
        .with_hook(Arc::new(move |err: &ActionError| {
            sink.lock().unwrap().push(err.to_string());
        }))
        .build(|_ctx: CancellationToken| async move { Err(ActionError::from("boom")) });

    let handle = start(spec, token.clone()).expect("start failed");
    thread::sleep(Duration::from_millis(350));

    let count = messages.lock().unwrap().len();
    assert!(
        (3..=4).contains(&count),
        "expected 3-4 hook calls after 350ms at 100ms delay, got {count}"
    );
    for msg in messages.lock().unwrap().iter() {
        assert!(msg.contains("boom"), "unexpected hook message: {msg}");
    }

    token.cancel();
    handle.join().expect("loop thread panicked");
}

#[test]
fn succeeding_action_never_invokes_hook() {
    let calls = Arc::new(AtomicU64::new(0));
    let hook_calls = Arc::new(AtomicU64::new(0));
    let hook_sink = Arc::clone(&hook_calls);
    let token = CancellationToken::new();

    let spec = RunnerSpec::new(
        counting_action("healthy", &calls),
        Duration::from_millis(20),
    )
    .with_hook(Arc::new(move |_err: &ActionError| {
        hook_sink.fetch_add(1, Ordering::SeqCst);
    }));

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(wait_until(Duration::from_secs(2), || {
        calls.load(Ordering::SeqCst) >= 3
    }));

    assert_eq!(hook_calls.load(Ordering::SeqCst), 0);

    token.cancel();
    handle.join().expect("loop thread panicked");
}

#[test]
fn cancellation_stops_further_invocations() {
    let calls = Arc::new(AtomicU64::new(0));
    let token = CancellationToken::new();
    let spec = RunnerSpec::new(
        counting_action("worker", &calls),
        Duration::from_millis(25),
    );

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(wait_until(Duration::from_secs(2), || {
        calls.load(Ordering::SeqCst) >= 2
    }));

    token.cancel();
    assert!(
        wait_until(Duration::from_secs(1), || handle.is_finished()),
        "loop did not exit after cancellation"
    );

    let after_exit = calls.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(150));
    assert_eq!(
        calls.load(Ordering::SeqCst),
        after_exit,
        "action invoked after the loop exited"
    );

    handle.join().expect("loop thread panicked");
}

#[test]
fn cancellation_interrupts_sleep() {
    let calls = Arc::new(AtomicU64::new(0));
    let token = CancellationToken::new();
    let spec = RunnerSpec::new(counting_action("sleeper", &calls), Duration::from_secs(30));

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(wait_until(Duration::from_secs(2), || {
        calls.load(Ordering::SeqCst) == 1
    }));

    let before = Instant::now();
    token.cancel();
    handle.join().expect("loop thread panicked");

    assert!(
        before.elapsed() < Duration::from_secs(5),
        "join took a full retry delay; sleep was not interrupted"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn starting_twice_creates_independent_contexts() {
    let calls = Arc::new(AtomicU64::new(0));
    let token = CancellationToken::new();
    let spec = RunnerSpec::new(counting_action("twin", &calls), Duration::from_secs(10));

    let first = spec.start_on(token.clone()).expect("first start failed");
    let second = spec.start_on(token.clone()).expect("second start failed");
    assert_eq!(first.name(), second.name());

    // Each context runs its own first iteration despite the long delay.
    assert!(
        wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) >= 2),
        "second context never ran"
    );

    token.cancel();
    first.join().expect("first loop thread panicked");
    second.join().expect("second loop thread panicked");
}

#[test]
fn panicking_action_keeps_looping() {
    let calls = Arc::new(AtomicU64::new(0));
    let call_sink = Arc::clone(&calls);
    let errors: Arc<Mutex<Vec<(bool, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let error_sink = Arc::clone(&errors);
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("explosive")
        .with_retry_delay(Duration::from_millis(20))
        .with_hook(Arc::new(move |err: &ActionError| {
            error_sink
                .lock()
                .unwrap()
                .push((err.is_panic(), err.to_string()));
        }))
        .build(move |_ctx: CancellationToken| {
            let calls = Arc::clone(&call_sink);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < u64::MAX {
                    panic!("kaboom");
                }
                Ok::<_, ActionError>(())
            }
        });

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(
        wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) >= 3),
        "loop did not survive panicking iterations"
    );

    token.cancel();
    handle.join().expect("panic escaped the loop");

    let seen = errors.lock().unwrap();
    assert!(!seen.is_empty());
    for (is_panic, msg) in seen.iter() {
        assert!(*is_panic, "expected a panic error, got: {msg}");
        assert!(msg.contains("kaboom"), "unexpected panic message: {msg}");
    }
}

#[test]
fn failure_then_success_continues() {
    let calls = Arc::new(AtomicU64::new(0));
    let call_sink = Arc::clone(&calls);
    let hook_calls = Arc::new(AtomicU64::new(0));
    let hook_sink = Arc::clone(&hook_calls);
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("flaky-once")
        .with_retry_delay(Duration::from_millis(20))
        .with_hook(Arc::new(move |_err: &ActionError| {
            hook_sink.fetch_add(1, Ordering::SeqCst);
        }))
        .build(move |_ctx: CancellationToken| {
            let calls = Arc::clone(&call_sink);
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n == 2 {
                    Err(ActionError::from("flaky"))
                } else {
                    Ok(())
                }
            }
        });

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(
        wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) >= 4),
        "loop stopped after the failed iteration"
    );

    assert_eq!(hook_calls.load(Ordering::SeqCst), 1);

    token.cancel();
    handle.join().expect("loop thread panicked");
}
