// Part of caissa, a chess rules engine. See LICENSE for license information.

//! A thin line-oriented console driver over `caissa_core`.
//!
//! Reads moves as `<from> <to>[promotion]` (see
//! [`caissa_core::notation`]) from stdin, one per line, prints the board
//! after every accepted move, and reports check/checkmate/stalemate as
//! they arise. `quit` or end-of-input ends the session.

use std::io::{self, BufRead, Write};

use caissa_core::notation::parse_move;
use caissa_core::{Board, RequestOutcome, Side, Status};
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt::init();
    info!("caissa starting");

    let mut board = Board::new();
    print_board(&board);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        match parse_move(line) {
            Ok(parsed) => {
                let before = board.side_to_move();
                match board.request_move(parsed.mv, parsed.promotion) {
                    RequestOutcome::Success => {
                        info!(move = %parsed, side = %before, "move accepted");
                        print_board(&board);
                        report_status(&board);
                    }
                    RequestOutcome::Failure => {
                        println!("illegal move: {line}");
                    }
                }
            }
            Err(err) => {
                warn!(%err, input = line, "could not parse move");
                println!("could not parse move: {err}");
            }
        }

        if board.status() != Status::InProgress {
            break;
        }
    }

    let _ = io::stdout().flush();
}

/// Prints the board from White's perspective, rank 8 down to rank 1.
fn print_board(board: &Board) {
    for rank in (0..8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8 {
            let sq = caissa_core::Square::new(file, rank);
            let glyph = glyph_for(board, sq);
            print!("{glyph} ");
        }
        println!();
    }
    println!("  a b c d e f g h");
}

/// A one-character board glyph: uppercase for White, lowercase for Black,
/// `.` for empty.
fn glyph_for(board: &Board, sq: caissa_core::Square) -> char {
    let ch = match board.piece_at(sq) {
        caissa_core::Piece::Empty => return '.',
        caissa_core::Piece::Pawn => 'p',
        caissa_core::Piece::Knight => 'n',
        caissa_core::Piece::Bishop => 'b',
        caissa_core::Piece::Rook => 'r',
        caissa_core::Piece::Queen => 'q',
        caissa_core::Piece::King => 'k',
    };
    if board.side_at(sq) == Side::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

/// Prints a terminal message once the game has ended, or a check notice
/// while it continues.
fn report_status(board: &Board) {
    match board.status() {
        Status::Checkmate => println!("checkmate, {} wins", board.winner()),
        Status::Stalemate => println!("stalemate"),
        Status::InProgress => {
            if board.check() != Side::None {
                println!("{} is in check", board.check());
            }
        }
    }
}
