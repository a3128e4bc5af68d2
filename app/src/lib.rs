//! Terminal host for the states list screen.
//!
//! # Overview
//! Wires `states-core` to the outside world: a ureq `Transport` for the HTTP
//! round-trip, a tokio control loop that owns the `ListScreen`, blocking
//! workers that run each fetch, and a console `View` that prints effects.

pub mod config;
pub mod console;
pub mod controller;
pub mod transport;
pub mod worker;

pub use config::{AppConfig, ConfigError, DEFAULT_URL};
pub use console::{forward_input, parse_command, Command, ConsoleView};
pub use controller::{Controller, ScreenEvent, View};
pub use transport::UreqTransport;
pub use worker::spawn_fetch;
