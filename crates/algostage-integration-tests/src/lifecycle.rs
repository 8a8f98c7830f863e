//! Command sequences a user actually performs: interrupt, retune, rerun.

use std::time::Duration;

use algostage_engine::{
    Algorithm, RunStatus, Stage, StageConfig, StepAction, TerminalResult, Value,
};

fn instant_stage() -> Stage {
    Stage::new(StageConfig::default().with_default_delay_ms(0))
}

#[tokio::test]
async fn identical_inputs_replay_identical_traces() {
    let input: Vec<Value> = vec![6, 2, 5, 1, 9, 3];
    let stage = instant_stage();
    stage.set_algorithm(Algorithm::InsertionSort).await;

    stage.submit_custom_dataset(input.clone()).await.unwrap();
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    let first = stage.history().await;

    stage.submit_custom_dataset(input).await.unwrap();
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    let second = stage.history().await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn interrupting_commands_land_the_stage_idle() {
    let stage = instant_stage();
    stage
        .submit_custom_dataset((1..=24).rev().collect())
        .await
        .unwrap();

    stage.start().await.unwrap();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert_eq!(stage.status().await, RunStatus::Running);

    stage.regenerate(8).await.unwrap();
    assert_eq!(stage.status().await, RunStatus::Idle);
    assert_eq!(stage.dataset().await.len(), 8);
    assert!(stage.history().await.is_empty());

    // The replacement dataset runs to completion untouched by the old task.
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    let snapshot = stage.snapshot().await;
    assert_eq!(snapshot.status, RunStatus::Completed);
    assert!(snapshot.dataset.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn switching_algorithms_mid_run_starts_clean() {
    let stage = instant_stage();
    stage
        .submit_custom_dataset((1..=24).rev().collect())
        .await
        .unwrap();

    stage.start().await.unwrap();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    stage.set_algorithm(Algorithm::SelectionSort).await;
    assert_eq!(stage.status().await, RunStatus::Idle);
    assert!(stage.history().await.is_empty());

    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    assert_eq!(stage.result().await, Some(TerminalResult::Sorted));
}

#[tokio::test]
async fn linear_search_reports_hits_and_misses() {
    let stage = instant_stage();
    stage.submit_custom_dataset(vec![9, 2, 7]).await.unwrap();
    stage.set_algorithm(Algorithm::LinearSearch).await;

    stage.set_target(7).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    assert_eq!(
        stage.result().await,
        Some(TerminalResult::Found { index: 2 })
    );
    assert_eq!(stage.dataset().await, vec![9, 2, 7]);

    stage.set_target(5).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    assert_eq!(stage.result().await, Some(TerminalResult::NotFound));
    assert_eq!(stage.dataset().await, vec![9, 2, 7]);
}

#[tokio::test]
async fn binary_search_miss_probes_without_a_found_step() {
    let stage = instant_stage();
    stage
        .submit_custom_dataset(vec![1, 3, 5, 7, 9])
        .await
        .unwrap();
    stage.set_algorithm(Algorithm::BinarySearch).await;
    stage.set_target(4).await;

    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let history = stage.history().await;
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|s| s.action == StepAction::Check));
    assert_eq!(stage.result().await, Some(TerminalResult::NotFound));
}

#[tokio::test]
async fn clones_command_one_shared_stage() {
    let stage = instant_stage();
    let controls = stage.clone();

    controls.submit_custom_dataset(vec![3, 1, 2]).await.unwrap();
    controls.start().await.unwrap();
    stage.wait_until_settled().await;

    assert_eq!(stage.dataset().await, vec![1, 2, 3]);
    assert_eq!(stage.result().await, Some(TerminalResult::Sorted));
}

#[tokio::test(flavor = "multi_thread")]
async fn lowering_the_delay_speeds_up_a_live_run() {
    let stage = Stage::new(StageConfig::default().with_default_delay_ms(200));
    stage
        .submit_custom_dataset((1..=16).rev().collect())
        .await
        .unwrap();

    let started = std::time::Instant::now();
    stage.start().await.unwrap();

    // Let the first paced step land, then drop the delay to zero. The
    // remaining ~200 steps would take ~40s at the original pace.
    tokio::time::timeout(Duration::from_secs(5), async {
        while stage.snapshot().await.step_count == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
    stage.set_delay(0);

    tokio::time::timeout(Duration::from_secs(10), stage.wait_until_settled())
        .await
        .unwrap();
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(stage.status().await, RunStatus::Completed);
}
