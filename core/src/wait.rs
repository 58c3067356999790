//! Settle strategies used after `tpvm install` and `tpvm start`.
//!
//! [`WaitMode::Blind`] sleeps for the whole ceiling. [`WaitMode::Poll`] runs a
//! check every interval and returns as soon as it holds, never waiting past
//! the ceiling. Running out of time is not an error: the deployment re-checks
//! the TPVM state afterwards and decides there.

use std::future::Future;
use std::time::Duration;

use efa_deploy_common::config::WaitMode;
use efa_deploy_common::error::ExecutionError;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Waits for at most `ceiling`. Returns whether the check was seen to hold;
/// blind waits never run the check and report `false`.
pub async fn settle<F, Fut>(
    mode: WaitMode,
    ceiling: Duration,
    mut check: F,
) -> Result<bool, ExecutionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, ExecutionError>>,
{
    let interval = match mode {
        WaitMode::Blind => {
            sleep(ceiling).await;
            return Ok(false);
        }
        WaitMode::Poll { interval } => interval,
    };

    let deadline = Instant::now() + ceiling;
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        if check().await? {
            debug!(attempts, "settled before the ceiling");
            return Ok(true);
        }

        let now = Instant::now();
        if now >= deadline {
            debug!(attempts, "ceiling reached without settling");
            return Ok(false);
        }
        sleep(interval.min(deadline - now)).await;
    }
}
