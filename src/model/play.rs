//! Plays, moves, and lines of play.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::end::End;
use super::tile::Tile;

/// Which way a played tile ends up facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// The high face is exposed; the low face made the match.
    Up,
    /// The low face is exposed; the high face made the match.
    Down,
    /// A double laid across the end, perpendicular to the line.
    Side,
}

/// A single legal placement: which end was consumed, what was played, and
/// how the tile ended up facing.
///
/// The consumed end is carried by value; the transition resolves it to the
/// first value-equal entry of the layout, so two ends with the same showing
/// and kind are never confused across a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    /// The end this placement consumes.
    pub end: End,
    /// The tile placed.
    pub tile: Tile,
    /// The resulting orientation.
    pub orientation: Orientation,
}

/// One step of a line of play.
///
/// A step is either a placement or a forced draw; there is no third state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// A legal placement.
    Play(Play),
    /// No legal placement exists; a tile must be drawn from the boneyard.
    Pull,
}

/// An ordered line of play from the current position to exhaustion.
///
/// Backed by a persistent vector: the search prepends the chosen move to a
/// recursed tail and keeps whole candidate lines alive across sibling
/// branches, so cheap structural sharing matters here.
pub type Path = Vector<Move>;

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(play) => write!(
                f,
                "Play {} on {} ({})",
                play.tile, play.end.showing, play.end.kind
            ),
            Move::Pull => write!(f, "PULL"),
        }
    }
}
