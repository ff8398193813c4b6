//! End-state transitions.

use crate::model::{End, EndKind, Layout, Orientation, Play};

/// The layout after `play` resolves.
///
/// Scans the ends in order and replaces the first one value-equal to the
/// consumed end; every other end passes through unchanged at its original
/// relative position. Consuming an unattached double additionally exposes
/// its two perpendicular stubs, appended right after the replacement, so
/// the end count grows by two in that case and stays flat otherwise.
#[must_use]
pub fn apply(layout: &Layout, play: &Play) -> Layout {
    let mut next = Layout::new();
    let mut consumed = false;

    for end in layout.iter() {
        if !consumed && end == play.end {
            next.push(exposed_end(play));
            if end.kind == EndKind::Double {
                next.push(End::new(end.showing, EndKind::Side));
                next.push(End::new(end.showing, EndKind::Side));
            }
            consumed = true;
        } else {
            next.push(end);
        }
    }

    next
}

/// The end a play leaves behind where the consumed end was.
fn exposed_end(play: &Play) -> End {
    match play.orientation {
        Orientation::Side => End::new(play.tile.high(), EndKind::Double),
        Orientation::Up => End::new(play.tile.high(), EndKind::Normal),
        Orientation::Down => End::new(play.tile.low(), EndKind::Normal),
    }
}
