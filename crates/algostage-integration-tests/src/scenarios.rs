//! Fixed walkthroughs with hand-checked traces.

use algostage_engine::{
    Algorithm, RunStatus, Stage, StageConfig, Step, StepAction, TerminalResult, Value,
};

async fn stage_over(algorithm: Algorithm, values: Vec<Value>) -> Stage {
    let stage = Stage::new(StageConfig::default().with_default_delay_ms(0));
    stage.submit_custom_dataset(values).await.unwrap();
    stage.set_algorithm(algorithm).await;
    stage
}

fn assert_trace(stage_history: &[Step], expected: &[(StepAction, &[usize], &[Value])]) {
    assert_eq!(stage_history.len(), expected.len(), "step count");
    for (step, (action, indices, values)) in stage_history.iter().zip(expected.iter()) {
        assert_eq!(step.action, *action, "action of step {}", step.ordinal);
        assert_eq!(step.indices, *indices, "indices of step {}", step.ordinal);
        assert_eq!(step.values, *values, "values of step {}", step.ordinal);
    }
    for (i, step) in stage_history.iter().enumerate() {
        assert_eq!(step.ordinal, i as u64 + 1);
    }
}

#[tokio::test]
async fn bubble_walkthrough_matches_the_storyboard() {
    let stage = stage_over(Algorithm::BubbleSort, vec![5, 3, 8, 1]).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let history = stage.history().await;
    assert_trace(
        &history,
        &[
            (StepAction::Compare, &[0, 1], &[5, 3]),
            (StepAction::Swap, &[0, 1], &[3, 5]),
            (StepAction::Compare, &[1, 2], &[5, 8]),
            (StepAction::Compare, &[2, 3], &[8, 1]),
            // The largest value reaches its seat at the end of the pass.
            (StepAction::Swap, &[2, 3], &[1, 8]),
            (StepAction::Compare, &[0, 1], &[3, 5]),
            (StepAction::Compare, &[1, 2], &[5, 1]),
            (StepAction::Swap, &[1, 2], &[1, 5]),
            (StepAction::Compare, &[0, 1], &[3, 1]),
            (StepAction::Swap, &[0, 1], &[1, 3]),
        ],
    );

    let snapshot = stage.snapshot().await;
    assert_eq!(snapshot.dataset, vec![1, 3, 5, 8]);
    assert_eq!(snapshot.result, Some(TerminalResult::Sorted));
}

#[tokio::test]
async fn binary_walkthrough_narrows_then_finds() {
    let stage = stage_over(Algorithm::BinarySearch, vec![1, 3, 5, 7, 9]).await;
    stage.set_target(7).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let history = stage.history().await;
    assert_trace(
        &history,
        &[
            // Checks carry [mid, low, high] so the UI can shade the window.
            (StepAction::Check, &[2, 0, 4], &[5, 1, 9]),
            (StepAction::Check, &[3, 3, 4], &[7, 7, 9]),
            (StepAction::Found, &[3], &[7]),
        ],
    );

    let snapshot = stage.snapshot().await;
    assert_eq!(snapshot.result, Some(TerminalResult::Found { index: 3 }));
    assert_eq!(snapshot.dataset, vec![1, 3, 5, 7, 9]);
}

#[tokio::test]
async fn selection_on_equal_keys_compares_without_swapping() {
    let stage = stage_over(Algorithm::SelectionSort, vec![4, 4, 4]).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let history = stage.history().await;
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|s| s.action == StepAction::Compare));

    let snapshot = stage.snapshot().await;
    assert_eq!(snapshot.dataset, vec![4, 4, 4]);
    assert_eq!(snapshot.result, Some(TerminalResult::Sorted));
}

#[tokio::test]
async fn current_indices_follow_the_latest_step() {
    let stage = stage_over(Algorithm::QuickSort, vec![6, 1, 4, 2]).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let snapshot = stage.snapshot().await;
    let last = snapshot.last_step.as_ref().unwrap();
    assert_eq!(snapshot.current_indices, last.indices);

    stage.reset().await;
    assert!(stage.snapshot().await.current_indices.is_empty());
}

#[tokio::test]
async fn trivial_datasets_settle_instantly() {
    let stage = stage_over(Algorithm::BubbleSort, vec![7]).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;
    assert_eq!(stage.snapshot().await.step_count, 0);
    assert_eq!(stage.snapshot().await.result, Some(TerminalResult::Sorted));

    // A search over one value still probes it.
    let stage = stage_over(Algorithm::LinearSearch, vec![7]).await;
    stage.set_target(7).await;
    stage.start().await.unwrap();
    stage.wait_until_settled().await;

    let history = stage.history().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, StepAction::Check);
    assert_eq!(history[1].action, StepAction::Found);
    assert_eq!(
        stage.result().await,
        Some(TerminalResult::Found { index: 0 })
    );
}

#[tokio::test]
async fn every_sort_reports_sorted_over_the_same_input() {
    for algorithm in Algorithm::ALL {
        if algorithm.is_search() {
            continue;
        }
        let stage = stage_over(algorithm, vec![9, -3, 9, 0, 2, -3]).await;
        stage.start().await.unwrap();
        stage.wait_until_settled().await;

        let snapshot = stage.snapshot().await;
        assert_eq!(snapshot.status, RunStatus::Completed, "{algorithm}");
        assert_eq!(snapshot.dataset, vec![-3, -3, 0, 2, 9, 9], "{algorithm}");
        assert_eq!(snapshot.result, Some(TerminalResult::Sorted), "{algorithm}");
    }
}
