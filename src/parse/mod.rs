//! Text notation for racks and end lists.

pub mod notation;

pub use notation::{parse_ends, parse_hand, ParseError};
