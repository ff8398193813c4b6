//! Parsing of the comma-separated rack and end notation.
//!
//! Rack tokens are exactly two digits (`62,01,40`); each tile is
//! canonicalized high-first. End tokens describe the open ends:
//!
//! - one digit: an ordinary open end (`2`)
//! - two equal digits: a crossed double with both stubs open (`44`)
//! - a digit and a dash: a crossed double with one stub open (`5-`)
//! - three equal digits: an unattached double (`333`)
//!
//! Anything else is rejected before the solver ever sees it.

use thiserror::Error;

use crate::model::{End, EndKind, Hand, Layout, Tile};

/// Rejection of a malformed rack or end token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A rack token was not exactly two characters.
    #[error("tile must be exactly two digits: {0:?}")]
    TileShape(String),
    /// An end token was empty or longer than three characters.
    #[error("end must be one to three digits: {0:?}")]
    EndShape(String),
    /// A character that had to be a digit was not.
    #[error("expected a digit in {0:?}")]
    NonDigit(String),
    /// The digits of a paired or tripled end token disagree.
    #[error("end digits must all match: {0:?}")]
    MismatchedDigits(String),
}

fn digit(c: char, token: &str) -> Result<u8, ParseError> {
    c.to_digit(10)
        .map(|d| d as u8)
        .ok_or_else(|| ParseError::NonDigit(token.to_string()))
}

/// Parse a comma-separated rack, e.g. `62,01,40,61,24`.
pub fn parse_hand(text: &str) -> Result<Hand, ParseError> {
    let mut hand = Hand::new();

    for token in text.split(',') {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::TileShape(token.to_string()));
        }
        let a = digit(chars[0], token)?;
        let b = digit(chars[1], token)?;
        hand.push(Tile::new(a, b));
    }

    Ok(hand)
}

/// Parse a comma-separated end list, e.g. `2,44,1` or `1,333,5-`.
pub fn parse_ends(text: &str) -> Result<Layout, ParseError> {
    let mut layout = Layout::new();

    for token in text.split(',') {
        let chars: Vec<char> = token.chars().collect();
        match chars.len() {
            1 => {
                let showing = digit(chars[0], token)?;
                layout.push(End::new(showing, EndKind::Normal));
            }
            2 => {
                let showing = digit(chars[0], token)?;
                if chars[1] == '-' {
                    layout.push(End::new(showing, EndKind::Side));
                } else {
                    let other = digit(chars[1], token)?;
                    if other != showing {
                        return Err(ParseError::MismatchedDigits(token.to_string()));
                    }
                    layout.push(End::new(showing, EndKind::Side));
                    layout.push(End::new(showing, EndKind::Side));
                }
            }
            3 => {
                let showing = digit(chars[0], token)?;
                let second = digit(chars[1], token)?;
                let third = digit(chars[2], token)?;
                if second != showing || third != showing {
                    return Err(ParseError::MismatchedDigits(token.to_string()));
                }
                layout.push(End::new(showing, EndKind::Double));
            }
            _ => return Err(ParseError::EndShape(token.to_string())),
        }
    }

    Ok(layout)
}
