//! Rendering collaborator.
//!
//! A small game-oriented rendering layer for terminal play. The view is a
//! pure mapping from session snapshots into a styled-character framebuffer;
//! flushing to a real terminal is a separate crossterm-backed step. The
//! game core stays deterministic and I/O-free.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
