//! State machine for the states list screen.
//!
//! # Design
//! `ListScreen` never renders anything and never starts I/O. Each input
//! (`activate`, `complete`, `select`, ...) returns the `ScreenEffect`s the
//! host must carry out, in order. The host owns the only `ListScreen`, so
//! all display state is mutated from one place.
//!
//! Typing narrows the visible rows the way a list's text filter does: a row
//! matches when it, or any space-separated word in it, starts with the typed
//! text, ignoring case. Selection indexes the visible rows.
//!
//! Every activation issues a new `FetchTicket`. A completion for any other
//! ticket is stale and dropped, so when activations overlap the newest one
//! decides what the list shows.

use tracing::{debug, info};

use crate::labels::Labels;
use crate::task::FetchTicket;
use crate::types::FetchOutcome;

/// A short-lived message; the host dismisses it on its own, with no input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
}

/// The modal shown when a fetch fails. It can only be closed through its
/// button, never by backing out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
    pub button: String,
}

/// Something the host must do on behalf of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEffect {
    /// Show a blocking progress indicator.
    ShowBusy { title: String, message: String },
    HideBusy,
    /// Launch the fetch task; its outcome comes back through `complete`.
    StartFetch(FetchTicket),
    /// Replace the whole list with these rows.
    ReplaceItems(Vec<String>),
    ShowErrorDialog(ErrorDialog),
    DismissErrorDialog,
    ShowNotification(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Loading { ticket: FetchTicket },
    Populated,
    Error { dialog_open: bool },
}

#[derive(Debug)]
pub struct ListScreen {
    labels: Labels,
    state: ScreenState,
    items: Vec<String>,
    filter: String,
    next_ticket: u64,
}

impl ListScreen {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            state: ScreenState::Idle,
            items: Vec::new(),
            filter: String::new(),
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Rows that pass the current filter, in list order.
    pub fn visible_items(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(String::as_str)
            .filter(|item| matches_filter(item, &self.filter))
            .collect()
    }

    /// The screen became active: show the busy indicator and start a fetch.
    ///
    /// Runs on every activation, not just the first.
    pub fn activate(&mut self) -> Vec<ScreenEffect> {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = FetchTicket(self.next_ticket);
        info!(%ticket, "list screen activated");

        self.filter.clear();
        let mut effects = Vec::with_capacity(3);
        if matches!(self.state, ScreenState::Error { dialog_open: true }) {
            effects.push(ScreenEffect::DismissErrorDialog);
        }
        self.state = ScreenState::Loading { ticket };
        effects.push(ScreenEffect::ShowBusy {
            title: self.labels.progress_title.clone(),
            message: self.labels.progress_message.clone(),
        });
        effects.push(ScreenEffect::StartFetch(ticket));
        effects
    }

    /// The screen left the active state. Displayed data is discarded.
    pub fn deactivate(&mut self) -> Vec<ScreenEffect> {
        let mut effects = Vec::with_capacity(3);
        match self.state {
            ScreenState::Loading { .. } => effects.push(ScreenEffect::HideBusy),
            ScreenState::Error { dialog_open: true } => {
                effects.push(ScreenEffect::DismissErrorDialog)
            }
            _ => {}
        }
        self.state = ScreenState::Idle;
        self.filter.clear();
        if !self.items.is_empty() {
            self.items.clear();
            effects.push(ScreenEffect::ReplaceItems(Vec::new()));
        }
        effects
    }

    /// A fetch finished. Stale tickets produce no effects.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> Vec<ScreenEffect> {
        match self.state {
            ScreenState::Loading { ticket: current } if current == ticket => {}
            _ => {
                debug!(%ticket, state = ?self.state, "discarding stale fetch result");
                return Vec::new();
            }
        }

        match outcome {
            FetchOutcome::Success(items) => {
                info!(%ticket, count = items.len(), "list populated");
                self.items = items;
                self.state = ScreenState::Populated;
                vec![
                    ScreenEffect::HideBusy,
                    ScreenEffect::ReplaceItems(self.items.clone()),
                ]
            }
            FetchOutcome::Failure => {
                info!(%ticket, "fetch failed, showing error dialog");
                self.items.clear();
                self.state = ScreenState::Error { dialog_open: true };
                vec![
                    ScreenEffect::HideBusy,
                    ScreenEffect::ReplaceItems(Vec::new()),
                    ScreenEffect::ShowErrorDialog(ErrorDialog {
                        title: self.labels.alert_title.clone(),
                        message: self.labels.alert_error.clone(),
                        button: self.labels.alert_ok.clone(),
                    }),
                ]
            }
        }
    }

    /// The dialog's button was pressed. Nothing else happens.
    pub fn acknowledge_dialog(&mut self) -> Vec<ScreenEffect> {
        match self.state {
            ScreenState::Error { dialog_open: true } => {
                self.state = ScreenState::Error { dialog_open: false };
                vec![ScreenEffect::DismissErrorDialog]
            }
            _ => Vec::new(),
        }
    }

    /// Narrow the list to rows matching `text`. An empty filter shows every
    /// row again. Ignored unless the list is showing.
    pub fn set_filter(&mut self, text: &str) -> Vec<ScreenEffect> {
        if self.state != ScreenState::Populated {
            debug!(state = ?self.state, "ignoring filter");
            return Vec::new();
        }
        self.filter = text.trim().to_lowercase();
        let visible: Vec<String> = self.visible_items().into_iter().map(str::to_string).collect();
        debug!(filter = %self.filter, shown = visible.len(), "list filtered");
        vec![ScreenEffect::ReplaceItems(visible)]
    }

    /// A visible row was tapped. Only honoured while the list is showing and
    /// nothing modal is in front of it.
    pub fn select(&self, index: usize) -> Vec<ScreenEffect> {
        if self.state != ScreenState::Populated {
            return Vec::new();
        }
        match self.visible_items().get(index) {
            Some(text) => vec![ScreenEffect::ShowNotification(Notification {
                text: text.to_string(),
            })],
            None => Vec::new(),
        }
    }
}

/// `filter` is already lowercased.
fn matches_filter(item: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let item = item.to_lowercase();
    item.starts_with(filter) || item.split(' ').any(|word| word.starts_with(filter))
}
