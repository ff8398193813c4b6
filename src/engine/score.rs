//! Chip scoring and the continuation rule.

use crate::model::{Layout, Orientation, Play};

/// Sum of the values showing across all open ends.
#[must_use]
pub fn total_value(layout: &Layout) -> u32 {
    layout.iter().map(|end| end.value()).sum()
}

/// Chips awarded for the current board count.
///
/// One chip per five points when the count is a multiple of five,
/// otherwise nothing.
#[must_use]
pub fn score(layout: &Layout) -> u32 {
    let total = total_value(layout);
    if total % 5 == 0 {
        total / 5
    } else {
        0
    }
}

/// Whether the turn stays alive after `play` produced `layout`.
///
/// Scoring keeps the turn going, and so does laying a double sideways.
#[must_use]
pub fn can_continue(layout: &Layout, play: &Play) -> bool {
    score(layout) > 0 || play.orientation == Orientation::Side
}
