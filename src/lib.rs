//! # muggins
//!
//! An exhaustive solver for the Fives ("Muggins") scoring variant of
//! dominoes. A play scores one chip per five points whenever the values
//! showing at the open ends sum to a multiple of five, and laying a double
//! sideways keeps the turn alive even without scoring; the solver finds
//! the highest-chip line of play for a rack against a given set of open
//! ends.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every search branch works on its own copy of
//!    the rack and the layout. Nothing is mutated in place across
//!    branches, so siblings never observe each other's state.
//!
//! 2. **Deterministic**: given the same rack order and end order, the
//!    search always returns the same line. Enumeration order (ends outer,
//!    tiles inner) plus the tie-break rule make the result a function of
//!    input order.
//!
//! 3. **Uninformed**: the search is exhaustive with no memoization or
//!    pruning. Racks are small, so correctness of the line is the
//!    contract, not search speed.
//!
//! ## Modules
//!
//! - `model`: tiles, the rack, open ends, plays and paths
//! - `engine`: move generation, end-state transition, chip scoring
//! - `solver`: the recursive search
//! - `parse`: text notation for racks and end lists

pub mod engine;
pub mod model;
pub mod parse;
pub mod solver;

// Re-export commonly used types
pub use crate::model::{End, EndKind, Hand, Layout, Move, Orientation, Path, Play, Tile};

pub use crate::engine::{apply, can_continue, legal_play, score, total_value};

pub use crate::parse::{parse_ends, parse_hand, ParseError};

pub use crate::solver::{best, Solution};
