//! Pure game rules: move generation, end-state transition, and scoring.
//!
//! Every function here is total - each input drawn from the data model has
//! a defined result - and none of them mutate their arguments. Transitions
//! return a fresh layout, so sibling search branches never observe each
//! other's state.

pub mod apply;
pub mod generate;
pub mod score;

pub use apply::apply;
pub use generate::legal_play;
pub use score::{can_continue, score, total_value};
