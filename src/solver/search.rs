//! The recursive search over legal lines of play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::engine::{apply, can_continue, legal_play, score};
use crate::model::{Hand, Layout, Move, Path};

/// The best line found for a position: total chips and the moves that earn
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Chips accumulated along the line.
    pub score: u32,
    /// The moves, in play order. Ends with the line's last placement, or
    /// holds a single `Pull` when no placement exists.
    pub path: Path,
}

impl Solution {
    fn pull() -> Self {
        Self {
            score: 0,
            path: Vector::unit(Move::Pull),
        }
    }
}

/// Search every legal line of play from `hand` against `layout`.
///
/// Enumeration is ends-outer, tiles-inner, both in input order. A candidate
/// replaces the incumbent only on a strictly higher chip total, or on an
/// equal total with a strictly longer path; the first-found line wins full
/// ties. Together with the enumeration order this makes the result a
/// deterministic function of input order - several equally good lines may
/// exist, and which one comes back is an artifact of that order rather
/// than a guarantee of uniqueness.
///
/// A play that neither scores nor lays a double sideways ends its line on
/// the spot; tiles still in the rack past that point are only reachable
/// through sibling branches. An empty rack, or a position where nothing in
/// the rack fits any end, yields a single `Pull`.
///
/// Each branch recurses on its own reduced rack and freshly built layout,
/// so no state is shared across branches. The search is exhaustive and
/// unmemoized; with a rack of at most seven tiles the tree stays small.
#[must_use]
pub fn best(hand: &Hand, layout: &Layout) -> Solution {
    if hand.is_empty() {
        return Solution::pull();
    }

    let mut incumbent: Option<Solution> = None;

    for end in layout.iter() {
        for (index, tile) in hand.iter().enumerate() {
            if let Some(play) = legal_play(tile, end) {
                let next = apply(layout, &play);
                let gain = score(&next);

                let candidate = if can_continue(&next, &play) {
                    let tail = best(&hand.without(index), &next);
                    let mut path = tail.path;
                    path.push_front(Move::Play(play));
                    Solution {
                        score: gain + tail.score,
                        path,
                    }
                } else {
                    Solution {
                        score: gain,
                        path: Vector::unit(Move::Play(play)),
                    }
                };

                let wins = match &incumbent {
                    None => true,
                    Some(current) => {
                        candidate.score > current.score
                            || (candidate.score == current.score
                                && candidate.path.len() > current.path.len())
                    }
                };
                if wins {
                    incumbent = Some(candidate);
                }
            }
        }
    }

    incumbent.unwrap_or_else(Solution::pull)
}
