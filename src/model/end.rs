//! Open ends of the layout.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How an open end sits on the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndKind {
    /// An ordinary open end; counts its showing value.
    Normal,
    /// An unattached double lying across the line; counts twice its value.
    Double,
    /// A perpendicular stub beside a played double; counts nothing, since
    /// the double itself is already counted.
    Side,
}

impl std::fmt::Display for EndKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EndKind::Normal => "normal",
            EndKind::Double => "double",
            EndKind::Side => "side",
        };
        write!(f, "{name}")
    }
}

/// One currently playable connection point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct End {
    /// The face value visible at this connection point.
    pub showing: u8,
    /// How the end sits on the layout.
    pub kind: EndKind,
}

impl End {
    /// Create an end.
    #[must_use]
    pub const fn new(showing: u8, kind: EndKind) -> Self {
        Self { showing, kind }
    }

    /// Points this end contributes to the board count.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self.kind {
            EndKind::Normal => self.showing as u32,
            EndKind::Double => self.showing as u32 * 2,
            EndKind::Side => 0,
        }
    }
}

/// The ordered sequence of open ends.
///
/// Order carries no game meaning, but it is preserved through every
/// transition: the search's enumeration and tie-breaking depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    ends: SmallVec<[End; 8]>,
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ends: SmallVec::new(),
        }
    }

    /// Add an end after the existing ones.
    pub fn push(&mut self, end: End) {
        self.ends.push(end);
    }

    /// Number of open ends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Check whether there are no open ends.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Iterate over the ends in layout order.
    pub fn iter(&self) -> impl Iterator<Item = End> + '_ {
        self.ends.iter().copied()
    }
}

impl FromIterator<End> for Layout {
    fn from_iter<I: IntoIterator<Item = End>>(iter: I) -> Self {
        Self {
            ends: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_values() {
        assert_eq!(End::new(3, EndKind::Normal).value(), 3);
        assert_eq!(End::new(3, EndKind::Double).value(), 6);
        assert_eq!(End::new(3, EndKind::Side).value(), 0);
        assert_eq!(End::new(0, EndKind::Double).value(), 0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", EndKind::Normal), "normal");
        assert_eq!(format!("{}", EndKind::Double), "double");
        assert_eq!(format!("{}", EndKind::Side), "side");
    }

    #[test]
    fn test_layout_preserves_order() {
        let layout: Layout = [
            End::new(2, EndKind::Normal),
            End::new(4, EndKind::Side),
            End::new(4, EndKind::Side),
            End::new(1, EndKind::Normal),
        ]
        .into_iter()
        .collect();

        let showing: Vec<_> = layout.iter().map(|e| e.showing).collect();
        assert_eq!(showing, vec![2, 4, 4, 1]);
    }

    #[test]
    fn test_end_serialization() {
        let end = End::new(5, EndKind::Double);
        let json = serde_json::to_string(&end).unwrap();
        let deserialized: End = serde_json::from_str(&json).unwrap();

        assert_eq!(end, deserialized);
    }
}
