//! Terminal front-end: view models, command parsing, controller, rendering.

pub mod character_sheet;
pub mod commands;
pub mod controller;
pub mod map;
pub mod terminal;
pub mod view_model;

pub use commands::{Command, CommandError, USAGE};
pub use controller::{Panel, PlayerController, Reply};
