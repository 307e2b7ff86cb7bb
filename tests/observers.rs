//! Observability: event delivery, context ids, observer isolation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use loopvisor::{
    ActionError, ActionFn, Config, Event, EventKind, Observe, RunnerSpec, start,
};

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

/// Observer collecting every event it sees.
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    fn snapshot(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Observe for Recorder {
    async fn on_event(&self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}

/// Observer that panics on every event.
struct Faulty;

#[async_trait]
impl Observe for Faulty {
    async fn on_event(&self, _event: &Event) {
        panic!("observer blew up");
    }

    fn name(&self) -> &'static str {
        "faulty"
    }
}

#[test]
fn events_carry_context_and_detail() {
    let recorder = Arc::new(Recorder::default());
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("flaky-loop")
        .with_retry_delay(Duration::from_millis(100))
        .with_observer(recorder.clone())
        .build(|_ctx: CancellationToken| async move { Err(ActionError::from("boom")) });

    let handle = start(spec, token.clone()).expect("start failed");
    thread::sleep(Duration::from_millis(250));
    token.cancel();
    handle.join().expect("loop thread panicked");

    let events = recorder.snapshot();
    assert!(events.len() >= 4, "expected a full event trail, got {events:?}");

    assert_eq!(events.first().unwrap().kind, EventKind::LoopStarted);
    assert_eq!(events.last().unwrap().kind, EventKind::LoopStopped);
    for ev in &events {
        assert_eq!(ev.context.as_deref(), Some("flaky-loop"));
    }
    for pair in events.windows(2) {
        assert!(pair[0].seq < pair[1].seq, "event seq not monotonic");
    }

    let failed: Vec<&Event> = events
        .iter()
        .filter(|e| e.kind == EventKind::ActionFailed)
        .collect();
    assert!(!failed.is_empty());
    assert_eq!(failed[0].iteration, Some(1));
    assert!(failed[0].error.as_deref().unwrap().contains("boom"));

    let sleeps: Vec<&Event> = events
        .iter()
        .filter(|e| e.kind == EventKind::SleepScheduled)
        .collect();
    assert!(!sleeps.is_empty());
    assert_eq!(sleeps[0].delay_ms, Some(100));
}

#[test]
fn hook_panic_is_reported_and_loop_continues() {
    let recorder = Arc::new(Recorder::default());
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("bad-hook")
        .with_retry_delay(Duration::from_millis(20))
        .with_observer(recorder.clone())
        .with_hook(Arc::new(|_err: &ActionError| {
            panic!("hook blew up");
        }))
        .build(|_ctx: CancellationToken| async move { Err(ActionError::from("boom")) });

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(
        wait_until(Duration::from_secs(2), || {
            recorder
                .snapshot()
                .iter()
                .filter(|e| e.kind == EventKind::ActionFailed)
                .count()
                >= 2
        }),
        "loop did not survive the panicking hook"
    );

    token.cancel();
    handle.join().expect("loop thread panicked");

    let events = recorder.snapshot();
    let hook_panics: Vec<&Event> = events
        .iter()
        .filter(|e| e.kind == EventKind::HookPanicked)
        .collect();
    assert!(!hook_panics.is_empty());
    assert!(
        hook_panics[0]
            .error
            .as_deref()
            .unwrap()
            .contains("hook blew up")
    );
}

#[test]
fn observer_panic_does_not_stop_loop() {
    let calls = Arc::new(AtomicU64::new(0));
    let call_sink = Arc::clone(&calls);
    let token = CancellationToken::new();

    let spec = RunnerSpec::builder("observed")
        .with_retry_delay(Duration::from_millis(20))
        .with_observer(Arc::new(Faulty))
        .build(move |_ctx: CancellationToken| {
            let calls = Arc::clone(&call_sink);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ActionError>(())
            }
        });

    let handle = start(spec, token.clone()).expect("start failed");
    assert!(
        wait_until(Duration::from_secs(2), || calls.load(Ordering::SeqCst) >= 3),
        "faulty observer stopped the loop"
    );

    token.cancel();
    handle.join().expect("observer panic escaped the loop");
}

#[test]
fn with_defaults_inherits_config() {
    let cfg = Config {
        retry_delay: Duration::from_secs(5),
        stack_size: Some(256 * 1024),
    };
    let action = ActionFn::arc("configured", |_ctx: CancellationToken| async move {
        Ok::<_, ActionError>(())
    });

    let spec = RunnerSpec::with_defaults(action, &cfg);
    assert_eq!(spec.name(), "configured");
    assert_eq!(spec.retry_delay(), Duration::from_secs(5));
    assert_eq!(spec.stack_size(), Some(256 * 1024));
    assert!(spec.hook().is_none());
    assert!(spec.observers().is_empty());
}
