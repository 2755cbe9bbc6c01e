//! Application domain model.
//!
//! Pure Rust, no FFI: shared state, the mirror set and constants.

pub mod app_state;
pub mod constants;
pub mod mirror;

pub use app_state::SharedState;
pub use constants::*;
pub use mirror::{Mirror, UnknownMirror};
