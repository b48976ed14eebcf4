//! Kalah rules.
//!
//! Pure functions over [`Board`](crate::Board) and [`Game`](crate::Game).
//! Each rule is kept separate from the turn orchestration so it can be
//! tested on hand-built positions.

pub mod capture;
pub mod end;
pub mod sow;
pub mod validate;

pub use capture::{capture, opposite_pit};
pub use end::{is_finished, winner};
pub use sow::distribute;
pub use validate::{legal_slots, validate_move};
