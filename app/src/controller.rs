//! The control loop that owns the list screen.
//!
//! # Design
//! Every input reaches the screen as a `ScreenEvent` on one channel: user
//! commands from the console and fetch completions from workers alike. The
//! loop applies each event to `ListScreen`, launches a worker for
//! `StartFetch`, and passes every other effect to the `View`. Nothing else
//! touches the screen or the view.

use std::io;
use std::ops::ControlFlow;

use states_core::{FetchOutcome, FetchTask, FetchTicket, ListScreen, ScreenEffect};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::worker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Activate,
    Deactivate,
    Select(usize),
    /// Narrow the list to rows matching this text; empty shows all rows.
    Filter(String),
    AcknowledgeDialog,
    FetchCompleted {
        ticket: FetchTicket,
        outcome: FetchOutcome,
    },
    Quit,
}

/// Renders screen effects. `StartFetch` never reaches a view.
pub trait View {
    fn apply(&mut self, effect: &ScreenEffect) -> io::Result<()>;
}

pub struct Controller<V> {
    screen: ListScreen,
    view: V,
    task: FetchTask,
    events: UnboundedSender<ScreenEvent>,
}

impl<V: View> Controller<V> {
    /// `events` is where workers post their results; it should feed the
    /// receiver later passed to `run`.
    pub fn new(
        screen: ListScreen,
        view: V,
        task: FetchTask,
        events: UnboundedSender<ScreenEvent>,
    ) -> Self {
        Self {
            screen,
            view,
            task,
            events,
        }
    }

    pub fn screen(&self) -> &ListScreen {
        &self.screen
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Apply one event. Must run inside a tokio runtime.
    pub fn handle(&mut self, event: ScreenEvent) -> io::Result<ControlFlow<()>> {
        let effects = match event {
            ScreenEvent::Activate => self.screen.activate(),
            ScreenEvent::Deactivate => self.screen.deactivate(),
            ScreenEvent::Select(index) => self.screen.select(index),
            ScreenEvent::Filter(text) => self.screen.set_filter(&text),
            ScreenEvent::AcknowledgeDialog => self.screen.acknowledge_dialog(),
            ScreenEvent::FetchCompleted { ticket, outcome } => {
                self.screen.complete(ticket, outcome)
            }
            ScreenEvent::Quit => return Ok(ControlFlow::Break(())),
        };

        for effect in &effects {
            match effect {
                ScreenEffect::StartFetch(ticket) => {
                    worker::spawn_fetch(self.task.clone(), *ticket, self.events.clone());
                }
                other => self.view.apply(other)?,
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Process events until `Quit` arrives, then hand the view back.
    ///
    /// The controller keeps its own sender for workers, so the channel never
    /// closes while the loop runs. Some producer has to send `Quit`.
    pub async fn run(mut self, mut events: UnboundedReceiver<ScreenEvent>) -> io::Result<V> {
        while let Some(event) = events.recv().await {
            if self.handle(event)?.is_break() {
                break;
            }
        }
        Ok(self.view)
    }
}
