//! Animated search routines.
//!
//! Each probe emits a `Check` step before the candidate is tested, so the
//! highlight lands on the element while it is being examined. A successful
//! probe additionally emits `Found` and returns without pacing again; the
//! run ends on that frame.

use algostage_trace::{Cancelled, StepAction, StepContext, TerminalResult, Value};

/// Scan the dataset front to back. First match wins.
pub(crate) async fn linear_search(
    ctx: &mut StepContext<'_>,
    target: Value,
) -> Result<TerminalResult, Cancelled> {
    for i in 0..ctx.len() {
        ctx.emit(StepAction::Check, &[i]).await?;
        ctx.pace().await?;
        if ctx.data()[i] == target {
            ctx.emit(StepAction::Found, &[i]).await?;
            return Ok(TerminalResult::Found { index: i });
        }
    }
    Ok(TerminalResult::NotFound)
}

/// Halve an ascending dataset until the target is pinned or the bounds
/// cross.
///
/// Each probe emits `Check [mid, left, right]`; the three entries collapse
/// onto one another as the window shrinks. Callers guarantee ascending
/// input, the controller enforces it on assignment.
pub(crate) async fn binary_search(
    ctx: &mut StepContext<'_>,
    target: Value,
) -> Result<TerminalResult, Cancelled> {
    if ctx.is_empty() {
        return Ok(TerminalResult::NotFound);
    }

    let mut left = 0usize;
    let mut right = ctx.len() - 1;
    while left <= right {
        let mid = left + (right - left) / 2;
        ctx.emit(StepAction::Check, &[mid, left, right]).await?;
        ctx.pace().await?;

        let probe = ctx.data()[mid];
        if probe == target {
            ctx.emit(StepAction::Found, &[mid]).await?;
            return Ok(TerminalResult::Found { index: mid });
        }
        if probe < target {
            left = mid + 1;
        } else if mid == 0 {
            // Target is smaller than the first element.
            break;
        } else {
            right = mid - 1;
        }
    }
    Ok(TerminalResult::NotFound)
}
