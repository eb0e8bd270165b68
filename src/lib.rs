//! Klotski Engine
//!
//! Board state and move validation for the classic 4x5 sliding-block
//! puzzle: rectangular pieces slide one cell at a time into blank space,
//! and the puzzle is solved when the single 2x2 king piece reaches the
//! goal cell at the bottom center.

pub mod board;
pub mod geometry;
pub mod pieces;

pub use board::{format_board, Board, BoardError, GOAL, HEIGHT, MAX_SOLDIER_PIECES, WIDTH};
pub use geometry::{Direction, Position};
pub use pieces::{Layout, Piece, PieceError, PieceSpec, CLASSIC, TRAINING};
