// Part of caissa, a chess rules engine. See LICENSE for license information.

//! The coverage analyzer: for every square, the set of records describing
//! how each side "sees" that square this turn.
//!
//! This is the substrate the king-ray analyzer and legal-move generator
//! both read. It is rebuilt from scratch every time (see
//! [`crate::board::Board::reevaluate`]) — coverage never persists across a
//! move.

use crate::geometry::{Direction, Square, BISHOP_DIRS, KING_DIRS, KNIGHT_DIRS, ROOK_DIRS};
use crate::piece::{Cell, Piece, Side};

/// How a coverage record's origin may move onto the target square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoverKind {
    /// A pawn could move here only if the square is empty.
    Push,
    /// A pawn could move here only by capturing an enemy.
    Capture,
    /// Any non-pawn move: legal whether or not the square is occupied by an
    /// enemy.
    PushOrCapture,
    /// A sliding piece's ray continues through the enemy king to this
    /// square; the king may not retreat here.
    RayBeyondKing,
}

/// One record of a piece seeing a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CoverageRecord {
    /// The square the covering piece stands on.
    pub origin: Square,
    /// The kind of piece covering the square.
    pub piece: Piece,
    /// The side owning the covering piece.
    pub side: Side,
    /// How the origin may move onto the target square.
    pub kind: CoverKind,
}

/// Coverage for all 64 squares, indexed by [`Square::to_index`].
///
/// A `Vec` per square, not a fixed-size buffer: `original_source`'s own
/// `std::vector<std::vector<SqrCover>>` makes no attempt to bound the
/// number of attackers on a square, and neither do we — a hand-built
/// position can legitimately stack far more pieces on one square's
/// approach than any "typical" game would.
pub struct Coverage {
    /// Coverage records, indexed by target square via [`Square::to_index`].
    records: [Vec<CoverageRecord>; 64],
}

impl Coverage {
    /// The coverage records landing on `square`.
    #[must_use]
    pub fn at(&self, square: Square) -> &[CoverageRecord] {
        &self.records[square.to_index()]
    }

    /// Whether any record on `square` is owned by `side` and has a kind
    /// that would let the owner capture onto (rather than merely push onto,
    /// or see past) that square.
    ///
    /// A [`CoverKind::Push`] alone does not count — a pawn's forward square
    /// is not "attacked" by it. [`CoverKind::RayBeyondKing`] does count: the
    /// whole point of that marking is to forbid the king retreating there.
    #[must_use]
    pub fn is_capture_covered_by(&self, square: Square, side: Side) -> bool {
        self.at(square).iter().any(|record| {
            record.side == side
                && matches!(
                    record.kind,
                    CoverKind::Capture | CoverKind::PushOrCapture | CoverKind::RayBeyondKing
                )
        })
    }
}

/// Computes coverage for the current contents of `cells`.
#[must_use]
pub fn compute_coverage(cells: &[Cell; 64], king_squares: [Square; 2]) -> Coverage {
    let mut records: [Vec<CoverageRecord>; 64] = std::array::from_fn(|_| Vec::new());

    for index in 0..64 {
        let cell = cells[index];
        if cell.is_empty() {
            continue;
        }
        let origin = Square::from_index(index);
        match cell.piece {
            Piece::Empty => unreachable!("non-empty cell reported Piece::Empty"),
            Piece::Pawn => cover_pawn(&mut records, cells, origin, cell.side),
            Piece::Knight => cover_stepper(&mut records, origin, cell, &KNIGHT_DIRS),
            Piece::King => cover_stepper(&mut records, origin, cell, &KING_DIRS),
            Piece::Rook => cover_slider(&mut records, cells, king_squares, origin, cell, &ROOK_DIRS),
            Piece::Bishop => {
                cover_slider(&mut records, cells, king_squares, origin, cell, &BISHOP_DIRS);
            }
            Piece::Queen => cover_slider(&mut records, cells, king_squares, origin, cell, &KING_DIRS),
        }
    }

    Coverage { records }
}

/// Pawn push/capture coverage. Pushes require the landing square to be
/// empty (checked here, not deferred to the generator); captures are
/// recorded unconditionally of the diagonal's occupant, since a pawn
/// "covers" its diagonals for attack purposes even when they are empty.
fn cover_pawn(records: &mut [Vec<CoverageRecord>; 64], cells: &[Cell; 64], origin: Square, side: Side) {
    let sign: i8 = if side == Side::White { 1 } else { -1 };
    let starting_rank: i8 = if side == Side::White { 1 } else { 6 };

    let one_ahead = origin + Direction { file: 0, rank: sign };
    if one_ahead.on_board() && cells[one_ahead.to_index()].is_empty() {
        push(records, one_ahead, origin, Piece::Pawn, side, CoverKind::Push);

        if origin.rank == starting_rank {
            let two_ahead = origin + Direction { file: 0, rank: sign * 2 };
            if two_ahead.on_board() && cells[two_ahead.to_index()].is_empty() {
                push(records, two_ahead, origin, Piece::Pawn, side, CoverKind::Push);
            }
        }
    }

    for file_delta in [-1, 1] {
        let diagonal = origin
            + Direction {
                file: file_delta,
                rank: sign,
            };
        if diagonal.on_board() {
            push(records, diagonal, origin, Piece::Pawn, side, CoverKind::Capture);
        }
    }
}

/// Knight/king coverage: one step per direction, unconditional of the
/// occupant (own-piece filtering happens in the generator).
fn cover_stepper(records: &mut [Vec<CoverageRecord>; 64], origin: Square, cell: Cell, dirs: &[Direction]) {
    for &dir in dirs {
        let target = origin + dir;
        if target.on_board() {
            push(records, target, origin, cell.piece, cell.side, CoverKind::PushOrCapture);
        }
    }
}

/// Sliding-piece coverage: walk each ray until the first occupied square,
/// continuing one extra square with [`CoverKind::RayBeyondKing`] if that
/// square is the enemy king.
fn cover_slider(
    records: &mut [Vec<CoverageRecord>; 64],
    cells: &[Cell; 64],
    king_squares: [Square; 2],
    origin: Square,
    cell: Cell,
    dirs: &[Direction],
) {
    let enemy_king = king_squares[(!cell.side).to_index()];

    for &dir in dirs {
        let mut beyond_king = false;
        for square in origin.ray(dir) {
            let kind = if beyond_king {
                CoverKind::RayBeyondKing
            } else {
                CoverKind::PushOrCapture
            };
            push(records, square, origin, cell.piece, cell.side, kind);

            let occupant = cells[square.to_index()];
            if occupant.is_empty() {
                if beyond_king {
                    break;
                }
            } else if square == enemy_king {
                beyond_king = true;
            } else {
                break;
            }
        }
    }
}

/// Appends a coverage record for `target`.
fn push(
    records: &mut [Vec<CoverageRecord>; 64],
    target: Square,
    origin: Square,
    piece: Piece,
    side: Side,
    kind: CoverKind,
) {
    records[target.to_index()].push(CoverageRecord {
        origin,
        piece,
        side,
        kind,
    });
}

#[cfg(test)]
mod tests {
    use super::{compute_coverage, CoverKind};
    use crate::board::Board;
    use crate::piece::Side;

    #[test]
    fn pawn_covers_empty_diagonal_for_attack() {
        let board = Board::new();
        let coverage = compute_coverage(board.cells(), board.king_squares());
        // e2's left diagonal (d3) is empty at setup but still "covered".
        let d3 = crate::geometry::Square::new(3, 2);
        let records = coverage.at(d3);
        assert!(records
            .iter()
            .any(|r| r.side == Side::White && r.kind == CoverKind::Capture));
    }

    #[test]
    fn knight_covers_regardless_of_occupant() {
        let board = Board::new();
        let coverage = compute_coverage(board.cells(), board.king_squares());
        // b1 knight covers a3, c3 and d2; d2 is occupied by a friendly pawn.
        let d2 = crate::geometry::Square::new(3, 1);
        assert!(!coverage.at(d2).is_empty());
    }
}
