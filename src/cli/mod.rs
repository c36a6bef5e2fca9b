//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the core validate/calculate/encode/decode
//! pipeline.

pub mod check;
pub mod create;
pub mod view;

pub use check::handle_check_command;
pub use create::{handle_create_command, CreateArgs};
pub use view::handle_view_command;
