//! The fetch → parse sequence run by a background worker.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use crate::client::StatesClient;
use crate::error::FetchError;
use crate::transport::Transport;
use crate::types::FetchOutcome;

/// Identifies one activation of the list screen.
///
/// A completion is only applied if it carries the ticket of the most recent
/// activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchTicket(pub u64);

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One GET against the states endpoint, with everything it needs injected.
#[derive(Clone)]
pub struct FetchTask {
    client: StatesClient,
    transport: Arc<dyn Transport>,
}

impl FetchTask {
    pub fn new(client: StatesClient, transport: Arc<dyn Transport>) -> Self {
        Self { client, transport }
    }

    /// Perform a single attempt and collapse any error into `Failure`.
    ///
    /// Blocks on the transport; never panics and never returns an error.
    pub fn run(&self) -> FetchOutcome {
        match self.try_run() {
            Ok(items) => {
                info!(url = self.client.url(), count = items.len(), "fetched states");
                FetchOutcome::Success(items)
            }
            Err(err) => {
                error!(url = self.client.url(), error = %err, "error fetching states");
                FetchOutcome::Failure
            }
        }
    }

    fn try_run(&self) -> Result<Vec<String>, FetchError> {
        let request = self.client.build_list_states();
        let response = self.transport.execute(&request)?;
        self.client.parse_list_states(response)
    }
}

impl fmt::Debug for FetchTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchTask")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
