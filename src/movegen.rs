// Part of caissa, a chess rules engine. See LICENSE for license information.

//! The legal-move generator: consumes coverage, king-rays, castling rights
//! and en-passant state to produce the definitive legal-move list, keyed by
//! origin square.

use arrayvec::ArrayVec;

use crate::coverage::{CoverKind, Coverage};
use crate::geometry::{Direction, Square, KING_DIRS};
use crate::piece::{Cell, Piece, Side};
use crate::rays::KingRays;

/// A single legal (or candidate) move: a start and end square.
///
/// Promotion is carried out-of-band via a separate argument on
/// [`crate::board::Board::request_move`]; a move's own shape is purely
/// coordinate-to-coordinate. Castling is a king move of exactly two files;
/// en passant is the pawn's diagonal capture move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// The square the piece starts on.
    pub start: Square,
    /// The square the piece ends on.
    pub end: Square,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

/// The legal-move cache: one list per origin square, rebuilt from scratch
/// every evaluation. Deliberately not incrementally updated — the state
/// space is small enough that a full rebuild is simpler, and just as fast,
/// as tracking dependencies.
pub struct LegalMoves {
    /// Legal moves, indexed by origin square via [`Square::to_index`].
    by_origin: [Vec<Move>; 64],
}

impl LegalMoves {
    /// The legal moves starting from `square`.
    #[must_use]
    pub fn from_square(&self, square: Square) -> &[Move] {
        &self.by_origin[square.to_index()]
    }

    /// The total number of legal moves across all origins.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.by_origin.iter().map(Vec::len).sum()
    }

    /// Whether `mv` is currently a legal move.
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.from_square(mv.start).contains(&mv)
    }

    fn push(&mut self, mv: Move) {
        self.by_origin[mv.start.to_index()].push(mv);
    }
}

impl Default for LegalMoves {
    fn default() -> Self {
        Self {
            by_origin: std::array::from_fn(|_| Vec::new()),
        }
    }
}

/// Inputs the generator needs beyond the raw cell array, gathered here so
/// [`generate`] doesn't take an unreadable pile of positional arguments.
pub struct GenerationContext<'a> {
    /// The board's cells.
    pub cells: &'a [Cell; 64],
    /// The side whose legal moves are being computed.
    pub side_to_move: Side,
    /// That side's king square.
    pub king_square: Square,
    /// Freshly computed coverage for the whole board.
    pub coverage: &'a Coverage,
    /// Freshly computed pin/check rays from `king_square`.
    pub king_rays: &'a KingRays,
    /// Currently offered en-passant moves (at most one per flanking pawn).
    pub en_passant: &'a [Move],
    /// Whether kingside castling is legal this turn.
    pub castle_kingside: bool,
    /// Whether queenside castling is legal this turn.
    pub castle_queenside: bool,
}

/// Generates the definitive legal-move list for `ctx.side_to_move`.
#[must_use]
pub fn generate(ctx: &GenerationContext<'_>) -> LegalMoves {
    let checkers: ArrayVec<Square, 16> = ctx
        .coverage
        .at(ctx.king_square)
        .iter()
        .filter(|record| record.side == !ctx.side_to_move)
        .map(|record| record.origin)
        .collect();

    if checkers.is_empty() {
        generate_not_in_check(ctx)
    } else {
        generate_in_check(ctx, &checkers)
    }
}

/// A target square is "capture-covered" by `side` if some record there is
/// owned by `side` and is a `Capture`, `PushOrCapture`, or `RayBeyondKing` —
/// any of the three kinds that would let that side capture (or, for
/// `RayBeyondKing`, still threaten) a king standing there.
fn capture_covered(coverage: &Coverage, square: Square, side: Side) -> bool {
    coverage.is_capture_covered_by(square, side)
}

/// Emits king moves common to both branches: on-board, not onto a friendly
/// piece, not capture-covered by the enemy.
fn king_moves(ctx: &GenerationContext<'_>, out: &mut LegalMoves) {
    let enemy = !ctx.side_to_move;
    for &dir in &KING_DIRS {
        let target = ctx.king_square + dir;
        if !target.on_board() {
            continue;
        }
        if ctx.cells[target.to_index()].side == ctx.side_to_move {
            continue;
        }
        if capture_covered(ctx.coverage, target, enemy) {
            continue;
        }
        out.push(Move::new(ctx.king_square, target));
    }
}

/// Whether `piece`'s move from a coverage record of `kind` onto `target` is
/// legal given `target`'s occupant — the pawn push/capture consistency
/// filter shared by every branch of the generator.
fn pawn_consistent(ctx: &GenerationContext<'_>, target: Square, kind: CoverKind) -> bool {
    let occupant = ctx.cells[target.to_index()];
    match kind {
        CoverKind::Push => occupant.is_empty(),
        CoverKind::Capture => occupant.side == !ctx.side_to_move,
        CoverKind::PushOrCapture | CoverKind::RayBeyondKing => false,
    }
}

fn generate_not_in_check(ctx: &GenerationContext<'_>) -> LegalMoves {
    let mut moves = LegalMoves::default();

    for index in 0..64 {
        let target = Square::from_index(index);
        if ctx.cells[index].side == ctx.side_to_move {
            continue;
        }
        for record in ctx.coverage.at(target) {
            if record.side != ctx.side_to_move || ctx.king_rays.is_pinned(record.origin) {
                continue;
            }
            if record.piece == Piece::King {
                continue;
            }
            if record.piece == Piece::Pawn {
                if pawn_consistent(ctx, target, record.kind) {
                    moves.push(Move::new(record.origin, target));
                }
            } else {
                moves.push(Move::new(record.origin, target));
            }
        }
    }

    king_moves(ctx, &mut moves);

    for ray in ctx.king_rays.pins() {
        for &square in &ray.squares {
            for record in ctx.coverage.at(square) {
                if record.origin != ray.target {
                    continue;
                }
                if record.piece == Piece::Pawn {
                    if pawn_consistent(ctx, square, record.kind) {
                        moves.push(Move::new(ray.target, square));
                    }
                } else {
                    moves.push(Move::new(ray.target, square));
                }
            }
        }
    }

    for &mv in ctx.en_passant {
        moves.push(mv);
    }

    if ctx.castle_kingside {
        moves.push(Move::new(ctx.king_square, ctx.king_square + Direction { file: 2, rank: 0 }));
    }
    if ctx.castle_queenside {
        moves.push(Move::new(ctx.king_square, ctx.king_square + Direction { file: -2, rank: 0 }));
    }

    moves
}

fn generate_in_check(ctx: &GenerationContext<'_>, checkers: &[Square]) -> LegalMoves {
    let mut moves = LegalMoves::default();

    king_moves(ctx, &mut moves);

    if checkers.len() == 1 {
        let checker = checkers[0];

        for record in ctx.coverage.at(checker) {
            if record.side != ctx.side_to_move {
                continue;
            }
            if ctx.king_rays.is_pinned(record.origin) {
                continue;
            }
            if record.piece == Piece::King {
                continue;
            }
            if matches!(record.kind, CoverKind::Capture | CoverKind::PushOrCapture) {
                moves.push(Move::new(record.origin, checker));
            }
        }

        let blocking_ray = ctx.king_rays.checks().find(|ray| ray.attacker == checker);
        if let Some(ray) = blocking_ray {
            for &square in &ray.squares {
                if square == checker {
                    continue;
                }
                for record in ctx.coverage.at(square) {
                    if record.side != ctx.side_to_move {
                        continue;
                    }
                    if record.origin == ctx.king_square || ctx.king_rays.is_pinned(record.origin) {
                        continue;
                    }
                    if matches!(record.kind, CoverKind::Push | CoverKind::PushOrCapture) {
                        moves.push(Move::new(record.origin, square));
                    }
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn setup_position_has_twenty_moves_per_side() {
        let board = Board::new();
        assert_eq!(board.total_legal_move_count(), 20);
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let mut cells = [Cell::EMPTY; 64];
        let king = Square::new(4, 0);
        let bishop = Square::new(4, 1);
        cells[king.to_index()] = Cell::occupied(Piece::King, Side::White);
        cells[bishop.to_index()] = Cell::occupied(Piece::Bishop, Side::White);
        cells[Square::new(4, 7).to_index()] = Cell::occupied(Piece::Rook, Side::Black);
        cells[Square::new(7, 7).to_index()] = Cell::occupied(Piece::King, Side::Black);

        let king_squares = [king, Square::new(7, 7)];
        let coverage = crate::coverage::compute_coverage(&cells, king_squares);
        let king_rays = crate::rays::compute_king_rays(&cells, king, Side::White);
        let ctx = GenerationContext {
            cells: &cells,
            side_to_move: Side::White,
            king_square: king,
            coverage: &coverage,
            king_rays: &king_rays,
            en_passant: &[],
            castle_kingside: false,
            castle_queenside: false,
        };
        let moves = generate(&ctx);
        for mv in moves.from_square(bishop) {
            assert_eq!(mv.end.file, 4, "bishop left the e-file while pinned: {mv:?}");
        }
    }
}
