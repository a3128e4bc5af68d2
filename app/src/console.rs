//! Line-oriented terminal front end.

use std::io::{self, Write};

use states_core::ScreenEffect;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::controller::{ScreenEvent, View};

/// What a line typed at the prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based index into the visible rows.
    Select(usize),
    /// Typed after `/`; a bare `/` clears the filter.
    Filter(String),
    Acknowledge,
    /// Leave the screen and come back, which fetches again.
    Reload,
    Quit,
}

impl Command {
    pub fn events(&self) -> Vec<ScreenEvent> {
        match self {
            Command::Select(index) => vec![ScreenEvent::Select(*index)],
            Command::Filter(text) => vec![ScreenEvent::Filter(text.clone())],
            Command::Acknowledge => vec![ScreenEvent::AcknowledgeDialog],
            Command::Reload => vec![ScreenEvent::Deactivate, ScreenEvent::Activate],
            Command::Quit => vec![ScreenEvent::Quit],
        }
    }
}

/// Rows are numbered from 1 on screen.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(text) = line.strip_prefix('/') {
        return Some(Command::Filter(text.trim().to_string()));
    }
    match line.to_ascii_lowercase().as_str() {
        "" | "ok" => Some(Command::Acknowledge),
        "r" | "reload" => Some(Command::Reload),
        "q" | "quit" => Some(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(Command::Select),
    }
}

/// Read commands from `input` and forward them as events.
///
/// Stops after a quit command or at end of input, which also counts as quit.
pub async fn forward_input<R>(input: R, events: UnboundedSender<ScreenEvent>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            warn!(input = %line.trim(), "unrecognised command");
            continue;
        };
        for event in command.events() {
            if events.send(event).is_err() {
                return Ok(());
            }
        }
        if command == Command::Quit {
            return Ok(());
        }
    }
    let _ = events.send(ScreenEvent::Quit);
    Ok(())
}

/// Writes effects as plain text.
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn apply(&mut self, effect: &ScreenEffect) -> io::Result<()> {
        match effect {
            ScreenEffect::ShowBusy { title, message } => {
                writeln!(self.out, "[{title}] {message}")?;
            }
            ScreenEffect::ReplaceItems(items) => {
                if items.is_empty() {
                    writeln!(self.out, "(empty)")?;
                }
                for (n, item) in items.iter().enumerate() {
                    writeln!(self.out, "{:>3}. {item}", n + 1)?;
                }
            }
            ScreenEffect::ShowErrorDialog(dialog) => {
                let width = dialog.title.chars().count().max(dialog.message.chars().count());
                let rule = "-".repeat(width + 2);
                writeln!(self.out, "+{rule}+")?;
                writeln!(self.out, "| {:<width$} |", dialog.title)?;
                writeln!(self.out, "+{rule}+")?;
                writeln!(self.out, "| {:<width$} |", dialog.message)?;
                writeln!(self.out, "+{rule}+")?;
                writeln!(self.out, "[ {} ] (press Enter)", dialog.button)?;
            }
            ScreenEffect::ShowNotification(notification) => {
                writeln!(self.out, ">> {}", notification.text)?;
            }
            ScreenEffect::HideBusy
            | ScreenEffect::DismissErrorDialog
            | ScreenEffect::StartFetch(_) => {}
        }
        self.out.flush()
    }
}
