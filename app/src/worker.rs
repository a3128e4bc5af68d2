//! Runs a fetch off the control loop and posts the outcome back to it.

use states_core::{FetchTask, FetchTicket};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::controller::ScreenEvent;

/// Run `task` on the blocking pool, then send
/// `ScreenEvent::FetchCompleted` for `ticket`.
///
/// Must be called from within a tokio runtime. The worker is never aborted;
/// if the control loop is gone by the time it finishes, the result is dropped.
pub fn spawn_fetch(
    task: FetchTask,
    ticket: FetchTicket,
    events: UnboundedSender<ScreenEvent>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let outcome = task.run();
        if events
            .send(ScreenEvent::FetchCompleted { ticket, outcome })
            .is_err()
        {
            debug!(%ticket, "control loop closed, dropping fetch result");
        }
    })
}
