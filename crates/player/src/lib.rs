//! Delve Player - party creation client for the Delve game server.
//!
//! Layers, inside out: `state` (pure builder state machine), `ports`
//! (outbound traits), `application` (services over the ports),
//! `infrastructure` (reqwest and rand adapters), `ui` (view models and the
//! terminal controller). `runner` wires them together.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;
