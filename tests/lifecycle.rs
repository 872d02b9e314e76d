//! Lifecycle coordination tests: cancellation fan-out, join-all, stragglers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use service_scaffold::lifecycle::{
    Component, ComponentError, Shutdown, ShutdownReason, Supervisor,
};

/// Component that serves until cancelled, then records that it stopped.
struct Waiter {
    name: &'static str,
    stopped: Arc<AtomicBool>,
}

#[async_trait]
impl Component for Waiter {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> &'static str {
        "waiter"
    }

    async fn run(self, shutdown: Shutdown) -> Result<(), ComponentError> {
        shutdown.cancelled().await;
        self.stopped.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Component that fails fatally right after starting.
struct FailsOnStartup;

#[async_trait]
impl Component for FailsOnStartup {
    fn name(&self) -> &str {
        "doomed"
    }

    fn kind(&self) -> &'static str {
        "test"
    }

    async fn run(self, _shutdown: Shutdown) -> Result<(), ComponentError> {
        Err(ComponentError::Serve(std::io::Error::other("boom")))
    }
}

/// Component that ignores cancellation entirely.
struct Stubborn;

#[async_trait]
impl Component for Stubborn {
    fn name(&self) -> &str {
        "stubborn"
    }

    fn kind(&self) -> &'static str {
        "test"
    }

    async fn run(self, _shutdown: Shutdown) -> Result<(), ComponentError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

#[tokio::test]
async fn trigger_stops_every_component() {
    let shutdown = Shutdown::new();
    let mut supervisor = Supervisor::new(shutdown.clone());

    let flags: Vec<Arc<AtomicBool>> = (0..3).map(|_| Arc::new(AtomicBool::new(false))).collect();
    for (i, stopped) in flags.iter().enumerate() {
        supervisor.spawn(Waiter {
            name: ["a", "b", "c"][i],
            stopped: stopped.clone(),
        });
    }

    let coordinator = tokio::spawn(supervisor.run(Duration::from_secs(5)));
    shutdown.trigger(ShutdownReason::Interrupt);

    tokio::time::timeout(Duration::from_secs(5), coordinator)
        .await
        .expect("coordinator should return after trigger")
        .expect("coordinator should not panic");

    for stopped in &flags {
        assert!(stopped.load(Ordering::SeqCst), "every component must reach stopped");
    }
}

#[tokio::test]
async fn component_failure_cancels_siblings() {
    let shutdown = Shutdown::new();
    let mut supervisor = Supervisor::new(shutdown.clone());

    let stopped = Arc::new(AtomicBool::new(false));
    supervisor.spawn(Waiter {
        name: "sibling",
        stopped: stopped.clone(),
    });
    supervisor.spawn(FailsOnStartup);

    // No external trigger: the failing component must bring the rest down.
    tokio::time::timeout(Duration::from_secs(5), supervisor.run(Duration::from_secs(5)))
        .await
        .expect("failure must cancel the whole process");

    assert_eq!(shutdown.reason(), Some(ShutdownReason::ComponentFailure));
    assert!(stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn straggler_is_aborted_after_grace_period() {
    let shutdown = Shutdown::new();
    let mut supervisor = Supervisor::new(shutdown.clone());

    let stopped = Arc::new(AtomicBool::new(false));
    supervisor.spawn(Waiter {
        name: "cooperative",
        stopped: stopped.clone(),
    });
    supervisor.spawn(Stubborn);

    let coordinator = tokio::spawn(supervisor.run(Duration::from_millis(200)));
    shutdown.trigger(ShutdownReason::Terminate);

    // Must return despite the non-cooperative component.
    tokio::time::timeout(Duration::from_secs(5), coordinator)
        .await
        .expect("grace period must bound the join")
        .expect("coordinator should not panic");

    assert!(stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn coordinator_with_no_components_still_waits_for_trigger() {
    let shutdown = Shutdown::new();
    let supervisor = Supervisor::new(shutdown.clone());

    let coordinator = tokio::spawn(supervisor.run(Duration::from_secs(1)));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!coordinator.is_finished(), "must block until the signal fires");

    shutdown.trigger(ShutdownReason::Interrupt);
    tokio::time::timeout(Duration::from_secs(1), coordinator)
        .await
        .expect("coordinator should return")
        .expect("coordinator should not panic");
}
