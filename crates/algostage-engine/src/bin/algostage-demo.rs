//! AlgoStage Demo
//!
//! Run one algorithm over a random dataset and print the animated trace.
//!
//! ```text
//! algostage-demo [algorithm] [size] [delay_ms]
//! algostage-demo quick 16 40
//! ```

use algostage_engine::{Algorithm, RunStatus, Stage, StageConfig, TerminalResult};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let algorithm: Algorithm = args.get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let size: usize = args.get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);

    let delay_ms: u64 = args.get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(120);

    println!("AlgoStage Demo");
    println!("==============");
    println!();

    let stage = Stage::new(StageConfig::default().with_default_delay_ms(delay_ms));
    stage.set_algorithm(algorithm).await;
    stage.regenerate(size).await?;

    let dataset = stage.dataset().await;
    if algorithm.is_search() {
        // Aim at a value from the dataset so the demo usually finds one.
        let target = dataset[dataset.len() / 2];
        stage.set_target(target).await;
        println!("{} over {} values, target {}", algorithm, size, target);
    } else {
        println!("{} over {} values", algorithm, size);
    }
    println!("  {:?}", dataset);
    println!();

    stage.start().await?;

    // Follow the trace as it grows. The timeout arm keeps the loop moving
    // if a wakeup slips past between the drain and the wait.
    let mut seen = 0u64;
    loop {
        for step in stage.steps_since(seen).await {
            println!(
                "  #{:<4} {:<8} idx {:?} val {:?}",
                step.ordinal,
                step.action.label(),
                step.indices,
                step.values
            );
            seen = step.ordinal;
        }
        if stage.status().await != RunStatus::Running {
            break;
        }
        tokio::select! {
            _ = stage.changed() => {}
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
    }
    for step in stage.steps_since(seen).await {
        println!(
            "  #{:<4} {:<8} idx {:?} val {:?}",
            step.ordinal,
            step.action.label(),
            step.indices,
            step.values
        );
    }

    let snapshot = stage.snapshot().await;
    println!();
    match snapshot.result {
        Some(TerminalResult::Found { index }) => println!("Found target at index {}", index),
        Some(TerminalResult::NotFound) => println!("Target is not in the dataset"),
        Some(TerminalResult::Sorted) => println!("Dataset sorted: {:?}", snapshot.dataset),
        None => println!("Run ended without a result"),
    }
    println!();
    println!("Final snapshot:");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
