//! blockfall (workspace facade crate).
//!
//! Re-exports the implementation crates under stable
//! `blockfall::{core,input,term,types}` module paths; the game logic lives
//! in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
