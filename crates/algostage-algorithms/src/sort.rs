//! Animated sort routines.
//!
//! All five sorts mutate the working copy in place between steps, so the
//! mirrored dataset observers read always reflects the frame just emitted.
//! `Swap` and `Shift` are emitted after the exchange and carry the
//! post-exchange values; `Compare` is emitted before it and carries the
//! compared values. A `Swap` is only emitted when two distinct positions
//! actually exchange.
//!
//! Merge and quick sort recurse through boxed futures; the recursion depth
//! is bounded by the controller's dataset size cap.

use algostage_trace::{Cancelled, StepAction, StepContext, TerminalResult, Value};
use futures::future::BoxFuture;

/// Adjacent-exchange passes with a shrinking upper bound.
///
/// A pass that performs no exchange proves the prefix sorted and ends the
/// run early.
pub(crate) async fn bubble_sort(ctx: &mut StepContext<'_>) -> Result<TerminalResult, Cancelled> {
    let n = ctx.len();
    if n < 2 {
        return Ok(TerminalResult::Sorted);
    }

    let mut bound = n - 1;
    loop {
        let mut swapped = false;
        for j in 0..bound {
            ctx.emit(StepAction::Compare, &[j, j + 1]).await?;
            ctx.pace().await?;
            if ctx.data()[j] > ctx.data()[j + 1] {
                ctx.data_mut().swap(j, j + 1);
                ctx.emit(StepAction::Swap, &[j, j + 1]).await?;
                ctx.pace().await?;
                swapped = true;
            }
        }
        if !swapped || bound == 1 {
            break;
        }
        bound -= 1;
    }
    Ok(TerminalResult::Sorted)
}

/// Select the minimum of the unsorted suffix into each position.
///
/// The scan compares every candidate against the running minimum; the one
/// `Swap` per outer position is skipped when the minimum is already seated,
/// so an all-equal dataset sorts with zero exchanges.
pub(crate) async fn selection_sort(ctx: &mut StepContext<'_>) -> Result<TerminalResult, Cancelled> {
    let n = ctx.len();
    if n < 2 {
        return Ok(TerminalResult::Sorted);
    }

    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            ctx.emit(StepAction::Compare, &[j, min]).await?;
            ctx.pace().await?;
            if ctx.data()[j] < ctx.data()[min] {
                min = j;
            }
        }
        if min != i {
            ctx.data_mut().swap(i, min);
            ctx.emit(StepAction::Swap, &[i, min]).await?;
            ctx.pace().await?;
        }
    }
    Ok(TerminalResult::Sorted)
}

/// Walk each key leftward through the sorted prefix by adjacent exchanges.
///
/// One `Compare` precedes every `Shift`; the trailing `Insert` marks where
/// the key settled and is emitted even when it never moved, so an already
/// sorted dataset still animates one `Insert` per key.
pub(crate) async fn insertion_sort(ctx: &mut StepContext<'_>) -> Result<TerminalResult, Cancelled> {
    let n = ctx.len();
    if n < 2 {
        return Ok(TerminalResult::Sorted);
    }

    for i in 1..n {
        let mut j = i;
        while j > 0 && ctx.data()[j - 1] > ctx.data()[j] {
            ctx.emit(StepAction::Compare, &[j - 1, j]).await?;
            ctx.pace().await?;
            ctx.data_mut().swap(j - 1, j);
            ctx.emit(StepAction::Shift, &[j - 1, j]).await?;
            ctx.pace().await?;
            j -= 1;
        }
        ctx.emit(StepAction::Insert, &[j]).await?;
        ctx.pace().await?;
    }
    Ok(TerminalResult::Sorted)
}

/// Recursive halving with a stepped merge. Stable: the left candidate wins
/// ties.
pub(crate) async fn merge_sort(ctx: &mut StepContext<'_>) -> Result<TerminalResult, Cancelled> {
    let n = ctx.len();
    if n < 2 {
        return Ok(TerminalResult::Sorted);
    }
    merge_range(ctx, 0, n - 1).await?;
    Ok(TerminalResult::Sorted)
}

fn merge_range<'a, 'b: 'a>(
    ctx: &'a mut StepContext<'b>,
    lo: usize,
    hi: usize,
) -> BoxFuture<'a, Result<(), Cancelled>> {
    Box::pin(async move {
        if lo >= hi {
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        merge_range(ctx, lo, mid).await?;
        merge_range(ctx, mid + 1, hi).await?;
        merge(ctx, lo, mid, hi).await
    })
}

/// Merge the two sorted halves of `lo..=hi` back into place.
///
/// Candidates are compared out of a scratch copy: once any right element
/// has been written back, the left candidate's array slot already holds a
/// merged element, so the live array cannot supply the compared values.
/// Drain writes emit `Merge` without a preceding `Compare`.
async fn merge(
    ctx: &mut StepContext<'_>,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Result<(), Cancelled> {
    let scratch: Vec<Value> = ctx.data()[lo..=hi].to_vec();
    let left_len = mid - lo + 1;

    let mut li = 0;
    let mut ri = left_len;
    let mut dest = lo;

    while li < left_len && ri < scratch.len() {
        let left_value = scratch[li];
        let right_value = scratch[ri];
        ctx.emit_with(
            StepAction::Compare,
            &[lo + li, lo + ri],
            vec![left_value, right_value],
        )
        .await?;
        ctx.pace().await?;

        let value = if left_value <= right_value {
            li += 1;
            left_value
        } else {
            ri += 1;
            right_value
        };
        ctx.data_mut()[dest] = value;
        ctx.emit(StepAction::Merge, &[dest]).await?;
        ctx.pace().await?;
        dest += 1;
    }

    while li < left_len {
        let value = scratch[li];
        li += 1;
        ctx.data_mut()[dest] = value;
        ctx.emit(StepAction::Merge, &[dest]).await?;
        ctx.pace().await?;
        dest += 1;
    }

    while ri < scratch.len() {
        let value = scratch[ri];
        ri += 1;
        ctx.data_mut()[dest] = value;
        ctx.emit(StepAction::Merge, &[dest]).await?;
        ctx.pace().await?;
        dest += 1;
    }

    Ok(())
}

/// Lomuto partition around the last element, left partition first.
pub(crate) async fn quick_sort(ctx: &mut StepContext<'_>) -> Result<TerminalResult, Cancelled> {
    let n = ctx.len();
    if n < 2 {
        return Ok(TerminalResult::Sorted);
    }
    quick_range(ctx, 0, n - 1).await?;
    Ok(TerminalResult::Sorted)
}

fn quick_range<'a, 'b: 'a>(
    ctx: &'a mut StepContext<'b>,
    lo: usize,
    hi: usize,
) -> BoxFuture<'a, Result<(), Cancelled>> {
    Box::pin(async move {
        if lo >= hi {
            return Ok(());
        }
        let p = partition(ctx, lo, hi).await?;
        if p > lo {
            quick_range(ctx, lo, p - 1).await?;
        }
        quick_range(ctx, p + 1, hi).await?;
        Ok(())
    })
}

/// Partition `lo..=hi` around `data[hi]`, returning the pivot's seat.
///
/// Every scanned element emits `Compare [j, hi]` against the pivot; an
/// element already at its destination exchanges with itself and emits
/// nothing, and the final seating `Swap [i, hi]` is skipped when the pivot
/// is already home.
async fn partition(ctx: &mut StepContext<'_>, lo: usize, hi: usize) -> Result<usize, Cancelled> {
    let pivot = ctx.data()[hi];
    let mut i = lo;

    for j in lo..hi {
        ctx.emit(StepAction::Compare, &[j, hi]).await?;
        ctx.pace().await?;
        if ctx.data()[j] < pivot {
            if i != j {
                ctx.data_mut().swap(i, j);
                ctx.emit(StepAction::Swap, &[i, j]).await?;
                ctx.pace().await?;
            }
            i += 1;
        }
    }

    if i != hi {
        ctx.data_mut().swap(i, hi);
        ctx.emit(StepAction::Swap, &[i, hi]).await?;
        ctx.pace().await?;
    }
    Ok(i)
}
