//! Legal-move generation.

use crate::model::{End, Orientation, Play, Tile};

/// Decide whether `tile` can legally be played on `end`.
///
/// Rules, in priority order:
/// 1. A double only matches its own value, and lies across the end.
/// 2. A high-face match plays the tile high-side-in, exposing the low face.
/// 3. A low-face match plays the tile low-side-in, exposing the high face.
///
/// At most one rule can fire for a given pair: a non-double tile has two
/// distinct faces, and the double case is handled first.
#[must_use]
pub fn legal_play(tile: Tile, end: End) -> Option<Play> {
    if tile.is_double() {
        if tile.high() == end.showing {
            Some(Play {
                end,
                tile,
                orientation: Orientation::Side,
            })
        } else {
            None
        }
    } else if tile.high() == end.showing {
        Some(Play {
            end,
            tile,
            orientation: Orientation::Down,
        })
    } else if tile.low() == end.showing {
        Some(Play {
            end,
            tile,
            orientation: Orientation::Up,
        })
    } else {
        None
    }
}
