// Part of caissa, a chess rules engine. See LICENSE for license information.

//! The board: the single authoritative state object, and the transaction
//! driver (`request_move`) that is the only way to mutate it.

use arrayvec::ArrayVec;

use crate::coverage::{self, Coverage};
use crate::geometry::{Direction, Square};
use crate::movegen::{self, GenerationContext, LegalMoves, Move};
use crate::piece::{Cell, Piece, Side};
use crate::rays::{self, KingRays};

/// Per-side castling-rights bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
struct CastlingFlags {
    /// Whether the king has ever moved.
    king_moved: bool,
    /// Whether the kingside (h-file) rook has ever moved.
    kingside_rook_moved: bool,
    /// Whether the queenside (a-file) rook has ever moved.
    queenside_rook_moved: bool,
}

/// The outcome of the game for the side to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// The game continues.
    InProgress,
    /// The side to move has no legal moves and is in check.
    Checkmate,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

/// The result of a [`Board::request_move`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestOutcome {
    /// The move was legal and has been applied; the board now reflects the
    /// fully re-evaluated post-move position.
    Success,
    /// The move was illegal, or the game was already over. The board is
    /// unchanged.
    Failure,
}

/// The chessboard: 64 cells plus every piece of derived state needed to
/// decide legality and termination.
pub struct Board {
    /// The 64 board cells, indexed by [`Square::to_index`].
    cells: [Cell; 64],
    /// The side whose turn it is.
    side_to_move: Side,
    /// The current king squares, `[White, Black]`.
    king_squares: [Square; 2],
    /// Per-side castling-rights bookkeeping, `[White, Black]`.
    castling: [CastlingFlags; 2],
    /// The en-passant moves offered this turn, at most one per flank.
    en_passant: ArrayVec<Move, 2>,
    /// Whether the side to move may currently castle kingside.
    castle_kingside_valid: bool,
    /// Whether the side to move may currently castle queenside.
    castle_queenside_valid: bool,
    /// The game's current status.
    status: Status,
    /// The winning side, meaningful only when `status` is `Checkmate`.
    winner: Side,
    /// Which side, if any, is currently in check.
    check: Side,
    /// Coverage for the current position, rebuilt every evaluation.
    coverage: Coverage,
    /// Pin/check rays from the side-to-move's king, rebuilt every
    /// evaluation.
    king_rays: KingRays,
    /// The cached legal-move set for the side to move.
    legal_moves: LegalMoves,
}

impl Board {
    /// Creates a board with the standard initial position, fully evaluated.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::EMPTY; 64],
            side_to_move: Side::White,
            king_squares: [Square::new(4, 0), Square::new(4, 7)],
            castling: [CastlingFlags::default(); 2],
            en_passant: ArrayVec::new(),
            castle_kingside_valid: false,
            castle_queenside_valid: false,
            status: Status::InProgress,
            winner: Side::None,
            check: Side::None,
            coverage: coverage::compute_coverage(&[Cell::EMPTY; 64], [Square::new(4, 0), Square::new(4, 7)]),
            king_rays: KingRays::default(),
            legal_moves: LegalMoves::default(),
        };
        board.setup();
        board
    }

    /// Installs the standard initial position, overwriting whatever was
    /// there before, and re-evaluates. `setup(); setup()` is idempotent.
    pub fn setup(&mut self) {
        self.cells = [Cell::EMPTY; 64];

        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        for (file, &piece) in BACK_RANK.iter().enumerate() {
            self.set_cell(Square::new(file as i8, 0), piece, Side::White);
            self.set_cell(Square::new(file as i8, 7), piece, Side::Black);
            self.set_cell(Square::new(file as i8, 1), Piece::Pawn, Side::White);
            self.set_cell(Square::new(file as i8, 6), Piece::Pawn, Side::Black);
        }

        self.side_to_move = Side::White;
        self.king_squares = [Square::new(4, 0), Square::new(4, 7)];
        self.castling = [CastlingFlags::default(); 2];
        self.en_passant.clear();
        self.status = Status::InProgress;
        self.winner = Side::None;
        self.check = Side::None;

        self.reevaluate();
    }

    // ---- queries (spec.md section 6) ----

    /// The piece kind at `sq`, or [`Piece::Empty`].
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.cell_or_empty(sq).piece
    }

    /// The side owning the piece at `sq`, or [`Side::None`].
    #[must_use]
    pub fn side_at(&self, sq: Square) -> Side {
        self.cell_or_empty(sq).side
    }

    /// Whether `sq` holds no piece. Off-board squares count as empty.
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell_or_empty(sq).is_empty()
    }

    /// Whether `sq`'s coordinates lie on the board.
    #[must_use]
    pub fn on_board(&self, sq: Square) -> bool {
        sq.on_board()
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Which side, if any, is currently in check.
    #[must_use]
    pub fn check(&self) -> Side {
        self.check
    }

    /// The game's current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The winning side. Only meaningful when [`Board::status`] is
    /// [`Status::Checkmate`].
    #[must_use]
    pub fn winner(&self) -> Side {
        self.winner
    }

    /// The legal moves starting from `sq`.
    #[must_use]
    pub fn legal_moves_from(&self, sq: Square) -> &[Move] {
        if sq.on_board() {
            self.legal_moves.from_square(sq)
        } else {
            &[]
        }
    }

    /// The total number of legal moves for the side to move.
    #[must_use]
    pub fn total_legal_move_count(&self) -> usize {
        self.legal_moves.total_count()
    }

    /// The raw cell array. Exposed crate-wide for analyzers and tests; not
    /// part of the public surface in `spec.md` section 6.
    pub(crate) fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    /// The current king squares, `[White, Black]`. Crate-internal, same
    /// rationale as [`Board::cells`].
    pub(crate) fn king_squares(&self) -> [Square; 2] {
        self.king_squares
    }

    /// The cell at `sq`, or [`Cell::EMPTY`] if `sq` is off the board.
    fn cell_or_empty(&self, sq: Square) -> Cell {
        if sq.on_board() {
            self.cells[sq.to_index()]
        } else {
            Cell::EMPTY
        }
    }

    // ---- mutation (spec.md section 6) ----

    /// The only way to change the board's state. Validates `mv` against the
    /// currently generated legal-move set (or the special-cased en passant
    /// / castling moves), applies it, and fully re-evaluates.
    ///
    /// On [`RequestOutcome::Failure`] the board is completely unchanged.
    pub fn request_move(&mut self, mv: Move, promotion: Option<Piece>) -> RequestOutcome {
        if self.status != Status::InProgress {
            return RequestOutcome::Failure;
        }

        let mover_side = self.side_at(mv.start);

        if self.en_passant.contains(&mv) && mover_side == self.side_to_move {
            self.update_en_passant_offers(mv);
            self.execute_en_passant(mv);
            self.finish_move(mv, promotion);
            return RequestOutcome::Success;
        }

        let king_square = self.king_squares[self.side_to_move.to_index()];
        if mv.start == king_square {
            let delta = mv.end.file - mv.start.file;
            if delta == 2 && self.castle_kingside_valid {
                self.update_en_passant_offers(mv);
                self.execute_castle(true);
                self.finish_move(mv, promotion);
                return RequestOutcome::Success;
            }
            if delta == -2 && self.castle_queenside_valid {
                self.update_en_passant_offers(mv);
                self.execute_castle(false);
                self.finish_move(mv, promotion);
                return RequestOutcome::Success;
            }
        }

        if !self.legal_moves.contains(mv) {
            return RequestOutcome::Failure;
        }

        self.update_en_passant_offers(mv);
        self.execute_normal_move(mv);
        self.finish_move(mv, promotion);
        RequestOutcome::Success
    }

    /// Shared tail of every successful `request_move` path: the `execute_*`
    /// call already applied the move and its king/rook-moved flags; here we
    /// just handle promotion, swap sides and re-evaluate.
    fn finish_move(&mut self, mv: Move, promotion: Option<Piece>) {
        self.maybe_promote(mv.end, promotion);
        self.side_to_move = !self.side_to_move;
        self.reevaluate();
    }

    /// Replaces a pawn that has just reached the opposite back rank with
    /// the requested promotion piece (defaulting to, and falling back to
    /// on an invalid choice, [`Piece::Queen`]).
    fn maybe_promote(&mut self, to: Square, promotion: Option<Piece>) {
        let cell = self.cells[to.to_index()];
        if cell.piece != Piece::Pawn {
            return;
        }
        let opposite_back_rank = if cell.side == Side::White { 7 } else { 0 };
        if to.rank != opposite_back_rank {
            return;
        }
        let chosen = match promotion {
            Some(piece @ (Piece::Rook | Piece::Knight | Piece::Bishop | Piece::Queen)) => piece,
            _ => Piece::Queen,
        };
        self.set_cell(to, chosen, cell.side);
    }

    /// Clears `sqr` then places `piece`/`side` there, and mirrors the
    /// king-square bookkeeping when the placed piece is a king.
    fn set_cell(&mut self, sqr: Square, piece: Piece, side: Side) {
        self.cells[sqr.to_index()] = Cell::occupied(piece, side);
        if piece == Piece::King {
            self.king_squares[side.to_index()] = sqr;
        }
    }

    /// Empties `sqr`.
    fn clear_cell(&mut self, sqr: Square) {
        self.cells[sqr.to_index()] = Cell::EMPTY;
    }

    /// Moves whatever is on `mv.start` to `mv.end`, overwriting any capture,
    /// and records king-has-moved / rook-has-moved flags before the pieces
    /// move off their origin squares.
    fn execute_normal_move(&mut self, mv: Move) {
        let cell = self.cells[mv.start.to_index()];
        self.mark_moved(mv.start, cell);
        self.clear_cell(mv.start);
        self.set_cell(mv.end, cell.piece, cell.side);
    }

    /// Executes a previously offered en-passant capture: clears the mover's
    /// origin and the captured pawn's square, and places the mover on the
    /// destination.
    fn execute_en_passant(&mut self, mv: Move) {
        let cell = self.cells[mv.start.to_index()];
        self.mark_moved(mv.start, cell);
        let captured_square = Square::new(mv.end.file, mv.start.rank);
        self.clear_cell(mv.start);
        self.clear_cell(captured_square);
        self.set_cell(mv.end, cell.piece, cell.side);
    }

    /// Executes castling: clears king and rook squares, places the king two
    /// files toward the corner, and the rook on the square the king
    /// crossed.
    fn execute_castle(&mut self, kingside: bool) {
        let side = self.side_to_move;
        let rank = if side == Side::White { 0 } else { 7 };
        let king_from = self.king_squares[side.to_index()];
        let (rook_from_file, king_to_file, rook_to_file) = if kingside { (7, 6, 5) } else { (0, 2, 3) };
        let rook_from = Square::new(rook_from_file, rank);
        let king_to = Square::new(king_to_file, rank);
        let rook_to = Square::new(rook_to_file, rank);

        self.castling[side.to_index()].king_moved = true;
        if kingside {
            self.castling[side.to_index()].kingside_rook_moved = true;
        } else {
            self.castling[side.to_index()].queenside_rook_moved = true;
        }

        self.clear_cell(king_from);
        self.clear_cell(rook_from);
        self.set_cell(king_to, Piece::King, side);
        self.set_cell(rook_to, Piece::Rook, side);
    }

    /// Records king-has-moved / rook-has-moved flags for a piece about to
    /// leave `from`.
    fn mark_moved(&mut self, from: Square, cell: Cell) {
        let side = cell.side;
        let back_rank = if side == Side::White { 0 } else { 7 };
        match cell.piece {
            Piece::King => self.castling[side.to_index()].king_moved = true,
            Piece::Rook if from == Square::new(7, back_rank) => {
                self.castling[side.to_index()].kingside_rook_moved = true;
            }
            Piece::Rook if from == Square::new(0, back_rank) => {
                self.castling[side.to_index()].queenside_rook_moved = true;
            }
            _ => {}
        }
    }

    /// Clears the en-passant list, then offers a fresh one if `mv` was a
    /// pawn double push with an adjacent enemy pawn. Must run before `mv`
    /// is applied to the board.
    fn update_en_passant_offers(&mut self, mv: Move) {
        self.en_passant.clear();

        let cell = self.cells[mv.start.to_index()];
        if cell.piece != Piece::Pawn {
            return;
        }
        let starting_rank = if cell.side == Side::White { 1 } else { 6 };
        let double_step: i8 = if cell.side == Side::White { 2 } else { -2 };
        if mv.start.rank != starting_rank || mv.end.rank != mv.start.rank + double_step {
            return;
        }

        let behind = Square::new(mv.end.file, mv.start.rank + double_step / 2);
        for file_delta in [-1, 1] {
            let flank = Square::new(mv.end.file + file_delta, mv.end.rank);
            if !flank.on_board() {
                continue;
            }
            let flank_cell = self.cells[flank.to_index()];
            if flank_cell.piece == Piece::Pawn && flank_cell.side == !cell.side {
                self.en_passant.push(Move::new(flank, behind));
            }
        }
    }

    /// Re-runs the full analyzer pipeline (coverage -> king rays -> castle
    /// flags -> legal moves) and derives status. Called once at setup and
    /// after every accepted move.
    fn reevaluate(&mut self) {
        self.coverage = coverage::compute_coverage(&self.cells, self.king_squares);
        self.assert_coverage_consistency();

        let king_square = self.king_squares[self.side_to_move.to_index()];
        debug_assert!(
            self.cells[king_square.to_index()].piece == Piece::King,
            "missing king for the side to move"
        );

        self.check = if coverage::Coverage::is_capture_covered_by(&self.coverage, king_square, !self.side_to_move) {
            self.side_to_move
        } else {
            Side::None
        };
        let other_king_square = self.king_squares[(!self.side_to_move).to_index()];
        debug_assert!(
            !coverage::Coverage::is_capture_covered_by(&self.coverage, other_king_square, self.side_to_move),
            "both kings are simultaneously in check: the side that just moved is in check"
        );

        self.king_rays = rays::compute_king_rays(&self.cells, king_square, self.side_to_move);

        self.update_castle_flags();

        let ctx = GenerationContext {
            cells: &self.cells,
            side_to_move: self.side_to_move,
            king_square,
            coverage: &self.coverage,
            king_rays: &self.king_rays,
            en_passant: &self.en_passant,
            castle_kingside: self.castle_kingside_valid,
            castle_queenside: self.castle_queenside_valid,
        };
        self.legal_moves = movegen::generate(&ctx);

        self.derive_status();
    }

    /// Recomputes `castle_kingside_valid` / `castle_queenside_valid` for
    /// the side to move, per `spec.md` section 4.8.
    fn update_castle_flags(&mut self) {
        let side = self.side_to_move;
        let flags = self.castling[side.to_index()];
        let rank = if side == Side::White { 0 } else { 7 };
        let enemy = !side;

        self.castle_kingside_valid = false;
        self.castle_queenside_valid = false;

        if flags.king_moved || self.check == side {
            return;
        }

        if !flags.kingside_rook_moved
            && self.is_empty(Square::new(5, rank))
            && self.is_empty(Square::new(6, rank))
            && !self.square_covered_by(Square::new(5, rank), enemy)
            && !self.square_covered_by(Square::new(6, rank), enemy)
        {
            self.castle_kingside_valid = true;
        }

        if !flags.queenside_rook_moved
            && self.is_empty(Square::new(1, rank))
            && self.is_empty(Square::new(2, rank))
            && self.is_empty(Square::new(3, rank))
            && !self.square_covered_by(Square::new(3, rank), enemy)
            && !self.square_covered_by(Square::new(2, rank), enemy)
        {
            self.castle_queenside_valid = true;
        }
    }

    /// Whether `side` could capture onto `sqr` this turn — the same test
    /// the legal-move generator applies to king moves, reused here for the
    /// "king's path is not attacked" castling requirement.
    fn square_covered_by(&self, sqr: Square, side: Side) -> bool {
        coverage::Coverage::is_capture_covered_by(&self.coverage, sqr, side)
    }

    /// Debug-only: every coverage record's origin square must still hold
    /// the piece and side it claims to cover from. A record surviving past
    /// the move that moved or captured its origin would be the stale-entry
    /// bug `spec.md` section 7 calls out.
    fn assert_coverage_consistency(&self) {
        for square in Square::all() {
            for record in self.coverage.at(square) {
                let origin_cell = self.cells[record.origin.to_index()];
                debug_assert!(
                    origin_cell.piece == record.piece && origin_cell.side == record.side,
                    "stale coverage entry on {square:?}: claims origin {:?} holds {:?}/{:?}, \
                     but that square now holds {:?}/{:?}",
                    record.origin,
                    record.piece,
                    record.side,
                    origin_cell.piece,
                    origin_cell.side
                );
            }
        }
    }

    /// Derives [`Status`], [`Board::winner`] from the freshly rebuilt legal
    /// move set and check flag.
    fn derive_status(&mut self) {
        if self.legal_moves.total_count() > 0 {
            self.status = Status::InProgress;
            self.winner = Side::None;
            return;
        }

        if self.check == self.side_to_move {
            self.status = Status::Checkmate;
            self.winner = !self.side_to_move;
        } else {
            debug_assert_eq!(self.check, Side::None, "stalemate with a nonempty check side");
            self.status = Status::Stalemate;
            self.winner = Side::None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank)
    }

    #[test]
    fn setup_is_idempotent() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.setup();
        b.setup();
        assert_eq!(a.total_legal_move_count(), b.total_legal_move_count());
        assert_eq!(a.side_to_move(), b.side_to_move());
        assert_eq!(a.status(), b.status());
    }

    #[test]
    fn setup_gives_twenty_moves_to_white() {
        let board = Board::new();
        assert_eq!(board.total_legal_move_count(), 20);
        assert_eq!(board.status(), Status::InProgress);
    }

    #[test]
    fn scholars_mate_ends_in_checkmate() {
        let mut board = Board::new();
        let moves = [
            (sq(4, 1), sq(4, 3)), // e2-e4
            (sq(4, 6), sq(4, 4)), // e7-e5
            (sq(5, 0), sq(2, 3)), // f1-c4
            (sq(1, 7), sq(2, 5)), // b8-c6
            (sq(3, 0), sq(7, 4)), // d1-h5
            (sq(6, 7), sq(5, 5)), // g8-f6
            (sq(7, 4), sq(5, 6)), // h5-f7
        ];
        for (start, end) in moves {
            let outcome = board.request_move(Move::new(start, end), None);
            assert_eq!(outcome, RequestOutcome::Success, "move {start:?}->{end:?} was rejected");
        }
        assert_eq!(board.status(), Status::Checkmate);
        assert_eq!(board.winner(), Side::White);
        assert_eq!(board.check(), Side::Black);
        assert_eq!(board.total_legal_move_count(), 0);
    }

    #[test]
    fn fools_mate_ends_in_checkmate_for_black() {
        let mut board = Board::new();
        let moves = [
            (sq(5, 1), sq(5, 2)), // f2-f3
            (sq(4, 6), sq(4, 4)), // e7-e5
            (sq(6, 1), sq(6, 3)), // g2-g4
            (sq(3, 7), sq(7, 3)), // d8-h4
        ];
        for (start, end) in moves {
            let outcome = board.request_move(Move::new(start, end), None);
            assert_eq!(outcome, RequestOutcome::Success, "move {start:?}->{end:?} was rejected");
        }
        assert_eq!(board.status(), Status::Checkmate);
        assert_eq!(board.winner(), Side::Black);
    }

    #[test]
    fn minimal_stalemate() {
        let mut board = Board::new();
        for sqr in Square::all() {
            board.cells[sqr.to_index()] = Cell::EMPTY;
        }
        board.set_cell(sq(0, 0), Piece::King, Side::White);
        board.set_cell(sq(2, 1), Piece::King, Side::Black);
        board.set_cell(sq(1, 2), Piece::Queen, Side::Black);
        board.side_to_move = Side::White;
        board.castling = [CastlingFlags::default(); 2];
        board.en_passant.clear();
        board.reevaluate();

        assert_eq!(board.total_legal_move_count(), 0);
        assert_eq!(board.status(), Status::Stalemate);
        assert_eq!(board.check(), Side::None);
        assert_eq!(board.winner(), Side::None);
    }

    #[test]
    fn en_passant_window_closes_after_a_reply() {
        let mut board = Board::new();
        let setup_moves = [
            (sq(4, 1), sq(4, 3)), // e2-e4
            (sq(0, 6), sq(0, 5)), // a7-a6
            (sq(4, 3), sq(4, 4)), // e4-e5
            (sq(3, 6), sq(3, 4)), // d7-d5
        ];
        for (start, end) in setup_moves {
            assert_eq!(board.request_move(Move::new(start, end), None), RequestOutcome::Success);
        }

        let ep_capture = Move::new(sq(4, 4), sq(3, 5));
        assert!(board.legal_moves_from(sq(4, 4)).contains(&ep_capture));

        // A quiet, non-capturing White reply should make the window close.
        assert_eq!(
            board.request_move(Move::new(sq(0, 1), sq(0, 2)), None),
            RequestOutcome::Success
        );
        assert_eq!(
            board.request_move(Move::new(sq(0, 5), sq(0, 4)), None),
            RequestOutcome::Success
        );
        assert!(!board.legal_moves_from(sq(4, 4)).contains(&ep_capture));
    }

    #[test]
    fn pin_prevents_off_file_bishop_move() {
        let mut board = Board::new();
        for sqr in Square::all() {
            board.cells[sqr.to_index()] = Cell::EMPTY;
        }
        board.set_cell(sq(4, 0), Piece::King, Side::White);
        board.set_cell(sq(4, 1), Piece::Bishop, Side::White);
        board.set_cell(sq(4, 7), Piece::Rook, Side::Black);
        board.set_cell(sq(7, 7), Piece::King, Side::Black);
        board.side_to_move = Side::White;
        board.castling = [CastlingFlags::default(); 2];
        board.en_passant.clear();
        board.reevaluate();

        for mv in board.legal_moves_from(sq(4, 1)) {
            assert_eq!(mv.end.file, 4, "bishop left the e-file while pinned: {mv:?}");
        }
    }

    #[test]
    fn castling_blocked_by_attacked_square() {
        let mut board = Board::new();
        for sqr in Square::all() {
            board.cells[sqr.to_index()] = Cell::EMPTY;
        }
        board.set_cell(sq(4, 0), Piece::King, Side::White);
        board.set_cell(sq(7, 0), Piece::Rook, Side::White);
        board.set_cell(sq(5, 7), Piece::Rook, Side::Black);
        board.set_cell(sq(4, 7), Piece::King, Side::Black);
        board.side_to_move = Side::White;
        board.castling = [CastlingFlags::default(); 2];
        board.en_passant.clear();
        board.reevaluate();

        let kingside_castle = Move::new(sq(4, 0), sq(6, 0));
        assert!(!board.legal_moves_from(sq(4, 0)).contains(&kingside_castle));
    }

    #[test]
    fn rejected_move_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.total_legal_move_count();
        let outcome = board.request_move(Move::new(sq(4, 1), sq(4, 5)), None);
        assert_eq!(outcome, RequestOutcome::Failure);
        assert_eq!(board.total_legal_move_count(), before);
        assert_eq!(board.side_to_move(), Side::White);
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut board = Board::new();
        for sqr in Square::all() {
            board.cells[sqr.to_index()] = Cell::EMPTY;
        }
        board.set_cell(sq(0, 0), Piece::King, Side::White);
        board.set_cell(sq(7, 7), Piece::King, Side::Black);
        board.set_cell(sq(0, 6), Piece::Pawn, Side::White);
        board.side_to_move = Side::White;
        board.castling = [CastlingFlags::default(); 2];
        board.en_passant.clear();
        board.reevaluate();

        let outcome = board.request_move(Move::new(sq(0, 6), sq(0, 7)), None);
        assert_eq!(outcome, RequestOutcome::Success);
        assert_eq!(board.piece_at(sq(0, 7)), Piece::Queen);
    }
}
