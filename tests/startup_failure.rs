//! Whole-process behavior when a component fails during startup.

use std::time::Duration;

use service_scaffold::config::{DatabaseConfig, FrontendConfig, ServiceConfig};
use service_scaffold::database::Postgres;
use service_scaffold::diagnostics::Diagnostics;
use service_scaffold::frontend::HttpFrontend;
use service_scaffold::lifecycle::{Shutdown, ShutdownReason, Supervisor};
use service_scaffold::resilience::RetryPolicy;

mod common;

#[tokio::test]
async fn unreachable_database_shuts_the_process_down() {
    let frontend_port = 28331;
    let service_port = 28332;

    let database_cfg = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        // Nothing listens here; every connection attempt fails fast.
        port: 1,
        ..DatabaseConfig::default()
    };

    let shutdown = Shutdown::new();
    let mut supervisor = Supervisor::new(shutdown.clone());

    supervisor.spawn(Diagnostics::new(ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: service_port,
    }));

    let postgres = Postgres::new(database_cfg)
        .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(10)));
    let database = postgres.database();
    supervisor.spawn(postgres);

    supervisor.spawn(HttpFrontend::new(
        FrontendConfig {
            name: "test-frontend".to_string(),
            host: "127.0.0.1".to_string(),
            port: frontend_port,
        },
        database,
    ));

    // No external trigger: retry exhaustion must cancel everything.
    tokio::time::timeout(Duration::from_secs(30), supervisor.run(Duration::from_secs(5)))
        .await
        .expect("exhausted retries must shut the process down");

    assert_eq!(shutdown.reason(), Some(ShutdownReason::ComponentFailure));

    // The frontend released its listener on the way out.
    let client = common::client();
    assert!(client
        .post(format!("http://127.0.0.1:{frontend_port}/test"))
        .send()
        .await
        .is_err());
}

#[tokio::test]
async fn bind_conflict_cancels_siblings() {
    let port = 28341;
    let database = Postgres::new(DatabaseConfig::default()).database();

    let shutdown = Shutdown::new();
    let mut supervisor = Supervisor::new(shutdown.clone());

    // Two frontends racing for one port: whichever loses reports a bind
    // failure, which must take the winner down too.
    for name in ["first", "second"] {
        supervisor.spawn(HttpFrontend::new(
            FrontendConfig {
                name: name.to_string(),
                host: "127.0.0.1".to_string(),
                port,
            },
            database.clone(),
        ));
    }

    tokio::time::timeout(Duration::from_secs(10), supervisor.run(Duration::from_secs(5)))
        .await
        .expect("bind failure must shut the process down");

    assert_eq!(shutdown.reason(), Some(ShutdownReason::ComponentFailure));
}
