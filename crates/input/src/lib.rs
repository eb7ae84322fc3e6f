//! Input collaborator.
//!
//! Maps `crossterm` key events into session commands and provides a DAS/ARR
//! repeat handler suitable for terminal environments, including terminals
//! without key-release events. The game core never sees key events; it only
//! receives [`blockfall_types::GameCommand`] values.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{command_for_key, should_quit};
