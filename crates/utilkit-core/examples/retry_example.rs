//! Example: Using `RetryExecutor` for bounded retries
//!
//! This example demonstrates:
//! 1. Retrying a flaky operation until it succeeds
//! 2. Exhausting the attempt budget
//! 3. Cancelling a run from another task
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p utilkit-core --example retry_example
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use utilkit_core::prelude::*;

/// A simulated service that fails the first few times
struct UnreliableService {
    attempts: Arc<AtomicU32>,
    fail_count: u32,
}

impl UnreliableService {
    fn new(fail_count: u32) -> Self {
        Self {
            attempts: Arc::new(AtomicU32::new(0)),
            fail_count,
        }
    }

    async fn call(&self) -> Result<String, std::io::Error> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if attempt <= self.fail_count {
            println!("  Attempt {attempt}: FAILED");
            Err(std::io::Error::other(format!(
                "transient error on attempt {attempt}"
            )))
        } else {
            println!("  Attempt {attempt}: SUCCESS");
            Ok("service response".to_string())
        }
    }

    fn total_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

/// Example 1: Succeeds on the third attempt
async fn example_eventual_success() -> anyhow::Result<()> {
    println!("\n=== Example 1: Eventual Success ===\n");

    let executor = RetryExecutor::new(
        RetryConfig::builder()
            .max_attempts(5)
            .interval(Duration::from_millis(100))
            .build(),
    );
    let service = UnreliableService::new(2);

    let start = Instant::now();
    let result = executor
        .run_named("unreliable_service", || {
            let service = &service;
            async move { service.call().await }
        })
        .await?;

    println!("\nResult: {result}");
    println!("Total attempts: {}", service.total_attempts());
    println!("Total time: {:?} (expected ~200ms)", start.elapsed());

    Ok(())
}

/// Example 2: Every attempt fails
async fn example_exhaustion() -> anyhow::Result<()> {
    println!("\n=== Example 2: Exhaustion ===\n");

    let executor = RetryExecutor::new(
        RetryConfig::builder()
            .max_attempts(3)
            .interval(Duration::from_millis(50))
            .build(),
    );
    let service = UnreliableService::new(u32::MAX);

    let err = executor
        .run_named("unreliable_service", || {
            let service = &service;
            async move { service.call().await }
        })
        .await
        .expect_err("service never succeeds");

    println!("\nError: {err}");
    if let Some(last) = err.last_error() {
        println!("  caused by: {last}");
    }

    Ok(())
}

/// Example 3: Cancelled while waiting
async fn example_cancellation() -> anyhow::Result<()> {
    println!("\n=== Example 3: Cancellation ===\n");

    let shutdown = CancellationToken::new();
    let executor = RetryExecutor::new(
        RetryConfig::builder()
            .max_attempts(10)
            .interval(Duration::from_secs(5))
            .cancellation(shutdown.child_token())
            .build(),
    );
    let service = UnreliableService::new(u32::MAX);

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        println!("  Shutdown requested");
        trigger.cancel();
    });

    let result = executor
        .run(|| {
            let service = &service;
            async move { service.call().await }
        })
        .await;

    match result {
        Err(RetryError::Cancelled) => println!(
            "\nRun cancelled after {} attempt(s)",
            service.total_attempts()
        ),
        other => println!("\nUnexpected outcome: {other:?}"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("==============================================");
    println!("   utilkit-core: Retry Executor Examples");
    println!("==============================================");

    example_eventual_success().await?;
    example_exhaustion().await?;
    example_cancellation().await?;

    println!("\n==============================================");
    println!("   All examples completed successfully!");
    println!("==============================================\n");

    Ok(())
}
