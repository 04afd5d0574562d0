// Part of caissa, a chess rules engine. See LICENSE for license information.

//! Piece kinds, sides and board cells.
//!
//! These are plain tagged enumerations rather than a trait-object
//! hierarchy: per-kind behavior (direction tables, pawn special-casing,
//! which side owns a castle/en-passant right) is expressed as explicit
//! match arms in the modules that need it, not virtual dispatch.

use std::fmt;
use std::ops::Not;

/// A kind of chess piece, plus the explicit `Empty` marker for a vacant
/// cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Piece {
    /// No piece occupies the cell.
    Empty,
    /// A pawn.
    Pawn,
    /// A rook.
    Rook,
    /// A knight.
    Knight,
    /// A bishop.
    Bishop,
    /// A queen.
    Queen,
    /// A king.
    King,
}

/// One of the two players, plus the explicit `None` marker used for empty
/// cells and other "nobody" states.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// White.
    White,
    /// Black.
    Black,
    /// Neither side.
    None,
}

/// A single cell on the board: a piece kind and the side owning it.
///
/// Invariant: `piece == Piece::Empty` if and only if `side == Side::None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    /// The piece occupying this cell, or [`Piece::Empty`].
    pub piece: Piece,
    /// The side owning the piece, or [`Side::None`].
    pub side: Side,
}

impl Cell {
    /// A vacant cell.
    pub const EMPTY: Self = Self {
        piece: Piece::Empty,
        side: Side::None,
    };

    /// Creates an occupied cell. Debug-asserts the cell invariant.
    #[must_use]
    pub fn occupied(piece: Piece, side: Side) -> Self {
        debug_assert!(piece != Piece::Empty, "occupied() called with Piece::Empty");
        debug_assert!(side != Side::None, "occupied() called with Side::None");
        Self { piece, side }
    }

    /// Whether this cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.piece, Piece::Empty)
    }
}

impl Side {
    /// Convenience index for a 2-element, per-side array (`White` = 0,
    /// `Black` = 1).
    #[must_use]
    pub fn to_index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
            Self::None => unreachable!("Side::None has no array index"),
        }
    }
}

impl Not for Side {
    type Output = Self;

    /// Swaps White and Black; `!Side::None == Side::None`.
    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
            Self::None => Self::None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Empty => "empty",
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::White => "white",
            Self::Black => "black",
            Self::None => "none",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Piece, Side};

    #[test]
    fn side_negation_swaps_and_fixes_none() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!Side::None, Side::None);
    }

    #[test]
    fn empty_cell_upholds_the_invariant() {
        assert!(Cell::EMPTY.is_empty());
        assert_eq!(Cell::EMPTY.side, Side::None);
    }

    #[test]
    fn occupied_cell_is_not_empty() {
        let cell = Cell::occupied(Piece::Knight, Side::White);
        assert!(!cell.is_empty());
    }
}
