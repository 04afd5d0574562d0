// Part of caissa, a chess rules engine. See LICENSE for license information.

//! The king-ray analyzer: pins and checks seen from the king of the side to
//! move.
//!
//! Run twice per evaluation — once with rook directions, once with bishop
//! directions — against the freshly rebuilt [`crate::coverage::Coverage`].

use arrayvec::ArrayVec;

use crate::geometry::{Direction, Square, BISHOP_DIRS, ROOK_DIRS};
use crate::piece::{Cell, Piece, Side};

/// Whether a ray ends in a pin or a check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RayKind {
    /// Exactly one friendly piece stands between the king and the enemy
    /// slider; that piece may move only along `squares`.
    Pin,
    /// No friendly piece stands between the king and the enemy slider; the
    /// king is in check along this ray.
    Check,
}

/// A pin or check ray from the side-to-move's king.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RayRecord {
    /// Pin or check.
    pub kind: RayKind,
    /// For a pin: the square of the pinned friendly piece. For a check: the
    /// king's own square. (Kept for symmetry with `spec.md`'s "ray target"
    /// field; callers needing the pinned square for filtering use
    /// [`KingRays::pinned_square_of`].)
    pub target: Square,
    /// The square of the attacking enemy slider.
    pub attacker: Square,
    /// The squares from king+1 up to and including the attacker.
    pub squares: ArrayVec<Square, 7>,
}

/// At most 8 ray records can exist at once: 4 rook directions + 4 bishop
/// directions, one record per direction.
const MAX_RAYS: usize = 8;

/// All pin/check rays currently active for the side to move.
#[derive(Default)]
pub struct KingRays {
    /// The currently active pin/check rays, one per direction at most.
    rays: ArrayVec<RayRecord, MAX_RAYS>,
}

impl KingRays {
    /// All recorded rays, pins and checks alike.
    #[must_use]
    pub fn all(&self) -> &[RayRecord] {
        &self.rays
    }

    /// The check rays only.
    pub fn checks(&self) -> impl Iterator<Item = &RayRecord> {
        self.rays.iter().filter(|r| r.kind == RayKind::Check)
    }

    /// The pin rays only.
    pub fn pins(&self) -> impl Iterator<Item = &RayRecord> {
        self.rays.iter().filter(|r| r.kind == RayKind::Pin)
    }

    /// Whether `square` is the pinned friendly piece of some pin ray.
    #[must_use]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.pins().any(|ray| ray.target == square)
    }
}

/// Computes pin and check rays from `king_square` for `side`, against the
/// current board contents.
#[must_use]
pub fn compute_king_rays(cells: &[Cell; 64], king_square: Square, side: Side) -> KingRays {
    let mut rays = KingRays::default();
    scan_directions(cells, king_square, side, &ROOK_DIRS, Piece::Rook, &mut rays);
    scan_directions(cells, king_square, side, &BISHOP_DIRS, Piece::Bishop, &mut rays);
    rays
}

/// Casts rays in `dirs` from the king and records a pin or check ray for
/// any enemy slider of matching geometry (`matching_piece` or `Queen`)
/// found along the way.
fn scan_directions(
    cells: &[Cell; 64],
    king_square: Square,
    side: Side,
    dirs: &[Direction],
    matching_piece: Piece,
    out: &mut KingRays,
) {
    for &dir in dirs {
        let mut friend: Option<Square> = None;
        let mut trace: ArrayVec<Square, 7> = ArrayVec::new();

        for square in king_square.ray(dir) {
            let cell = cells[square.to_index()];
            if cell.is_empty() {
                trace.push(square);
                continue;
            }

            if cell.side == side {
                if friend.is_some() {
                    break;
                }
                friend = Some(square);
                trace.push(square);
                continue;
            }

            // An enemy piece. A matching slider (or queen) checks or pins;
            // anything else just blocks the ray.
            if cell.piece == matching_piece || cell.piece == Piece::Queen {
                trace.push(square);
                let record = match friend {
                    Some(pinned) => RayRecord {
                        kind: RayKind::Pin,
                        target: pinned,
                        attacker: square,
                        squares: trace,
                    },
                    None => RayRecord {
                        kind: RayKind::Check,
                        target: king_square,
                        attacker: square,
                        squares: trace,
                    },
                };
                // Capacity is bounded by MAX_RAYS (one record per
                // direction, 8 directions total across both invocations).
                out.rays.push(record);
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_king_rays, RayKind};
    use crate::board::Board;
    use crate::geometry::Square;
    use crate::piece::{Cell, Piece, Side};

    #[test]
    fn pin_is_detected_along_a_file() {
        let mut cells = [Cell::EMPTY; 64];
        let king = Square::new(4, 0); // e1
        cells[king.to_index()] = Cell::occupied(Piece::King, Side::White);
        cells[Square::new(4, 1).to_index()] = Cell::occupied(Piece::Bishop, Side::White); // e2
        cells[Square::new(4, 7).to_index()] = Cell::occupied(Piece::Rook, Side::Black); // e8

        let rays = compute_king_rays(&cells, king, Side::White);
        assert_eq!(rays.pins().count(), 1);
        assert!(rays.is_pinned(Square::new(4, 1)));
    }

    #[test]
    fn check_ray_has_no_pinned_piece() {
        let mut cells = [Cell::EMPTY; 64];
        let king = Square::new(4, 0);
        cells[king.to_index()] = Cell::occupied(Piece::King, Side::White);
        cells[Square::new(4, 7).to_index()] = Cell::occupied(Piece::Rook, Side::Black);

        let rays = compute_king_rays(&cells, king, Side::White);
        assert_eq!(rays.checks().count(), 1);
        assert_eq!(rays.pins().count(), 0);
    }

    #[test]
    fn setup_position_has_no_pins_or_checks() {
        let board = Board::new();
        let rays = compute_king_rays(board.cells(), board.king_squares()[Side::White.to_index()], Side::White);
        assert_eq!(rays.all().len(), 0);
    }
}
