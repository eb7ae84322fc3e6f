//! Game core - pure, deterministic, and testable.
//!
//! All game rules and state live here, with zero dependencies on UI,
//! timing sources, or I/O:
//!
//! - **Deterministic**: a seeded generator replays identical piece sequences
//! - **Tick-driven**: the session consumes external timestamps, never a clock
//! - **Portable**: runs in a terminal, headless tests, or benches unchanged
//!
//! # Module structure
//!
//! - [`grid`]: 10x20 settled-block matrix with row clearing and compaction
//! - [`piece`]: shape catalog, matrix rotation, and the active piece
//! - [`collision`]: the single placement-legality predicate
//! - [`generator`]: seeded uniform piece source with one-piece lookahead
//! - [`session`]: lifecycle state machine, commands, gravity, and scoring
//! - [`snapshot`]: read-only view handed to the rendering collaborator
//!
//! # Rules
//!
//! Classic ruleset: uniform random pieces (no bag), in-place rotation with
//! no wall kicks, immediate lock on a rejected downward step, and
//! `lines * 100 * level` clear scoring with 10-lines-per-level progression.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{GameCommand, Status};
//!
//! let mut session = Session::new(12345);
//! session.start();
//!
//! session.apply(GameCommand::MoveLeft);
//! session.apply(GameCommand::Rotate);
//! session.apply(GameCommand::HardDrop);
//!
//! assert_eq!(session.status(), Status::Running);
//! assert!(session.score() > 0); // hard drop awards points
//! ```

pub mod collision;
pub mod generator;
pub mod grid;
pub mod piece;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience.
pub use collision::collides;
pub use generator::{PieceGenerator, SimpleRng};
pub use grid::Grid;
pub use piece::{template, Piece, Shape};
pub use session::Session;
pub use snapshot::{ActiveSnapshot, NextSnapshot, SessionSnapshot};
