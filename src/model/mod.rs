//! Core data model: tiles, the rack, open ends, and plays.
//!
//! ## Key Types
//!
//! - `Tile`: an unordered pip pair, stored canonically high-first
//! - `Hand`: the player's rack, ordered, with remove-one semantics
//! - `End` / `EndKind`: one open connection point on the layout
//! - `Layout`: the ordered sequence of open ends
//! - `Play` / `Move` / `Path`: a placement, one step of a line, a full line
//!
//! Everything here is a plain value type. The rules that act on these live
//! in `engine`, and the search that drives the rules lives in `solver`.

pub mod end;
pub mod play;
pub mod tile;

pub use end::{End, EndKind, Layout};
pub use play::{Move, Orientation, Path, Play};
pub use tile::{Hand, Tile};
