//! Client core for the states list screen.
//!
//! # Overview
//! Builds the single `GET` request the screen needs, parses its response into
//! display rows, and models the list screen as a state machine that returns
//! effects instead of drawing. Nothing here opens a socket: HTTP goes through
//! the `Transport` trait and rendering is left to whoever consumes
//! `ScreenEffect`s.
//!
//! # Design
//! - `StatesClient` is stateless and holds only the endpoint URL.
//! - `FetchTask` runs build → execute → parse once and reports a two-valued
//!   `FetchOutcome`; the concrete cause is logged, not returned.
//! - `ListScreen` tags each activation with a `FetchTicket` so that results
//!   from superseded activations are ignored.

pub mod charset;
pub mod client;
pub mod error;
pub mod http;
pub mod labels;
pub mod screen;
pub mod task;
pub mod transport;
pub mod types;

pub use charset::decode_latin1;
pub use client::StatesClient;
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use labels::Labels;
pub use screen::{ErrorDialog, ListScreen, Notification, ScreenEffect, ScreenState};
pub use task::{FetchTask, FetchTicket};
pub use transport::Transport;
pub use types::{FetchOutcome, RemoteState};
