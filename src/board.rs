//! Board state, move validation, and the win check.
//!
//! The board owns every piece, keyed by the piece's current origin. A move
//! request resolves the piece covering the given cell, checks that the
//! shifted footprint lands only on blank cells (or cells the piece itself
//! is vacating), and commits by re-keying the piece under its new origin.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::geometry::{Direction, Position};
use crate::pieces::{Layout, Piece, PieceError};

/// Board width in columns.
pub const WIDTH: i32 = 4;
/// Board height in rows.
pub const HEIGHT: i32 = 5;
/// Upper bound on 1x2/2x1 pieces in a layout.
pub const MAX_SOLDIER_PIECES: usize = 5;
/// The cell the king's footprint must cover to win.
pub const GOAL: Position = Position::new(WIDTH / 2, HEIGHT - 2);

/// Board-level failures: layout invariant violations at construction time
/// and move requests that point at empty space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("layout has no 2x2 piece")]
    NoKing,
    #[error("layout has {count} 2x2 pieces, only one is allowed")]
    MultipleKings { count: usize },
    #[error("layout has {count} soldier pieces, maximum is 5")]
    TooManySoldiers { count: usize },
    #[error("({x}, {y}) points to a blank spot")]
    BlankSpot { x: i32, y: i32 },
    #[error(transparent)]
    Piece(#[from] PieceError),
}

/// The aggregate puzzle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Every piece, keyed by its current origin.
    pieces: FxHashMap<Position, Piece>,
}

impl Board {
    /// Builds a board from a piece list, enforcing the layout invariants:
    /// exactly one king, at most [`MAX_SOLDIER_PIECES`] soldiers.
    pub fn new(pieces: Vec<Piece>) -> Result<Board, BoardError> {
        match pieces.iter().filter(|p| p.is_king()).count() {
            0 => return Err(BoardError::NoKing),
            1 => {}
            count => return Err(BoardError::MultipleKings { count }),
        }
        let soldiers = pieces.iter().filter(|p| p.is_soldier()).count();
        if soldiers > MAX_SOLDIER_PIECES {
            return Err(BoardError::TooManySoldiers { count: soldiers });
        }
        Ok(Board {
            pieces: pieces.into_iter().map(|p| (p.origin(), p)).collect(),
        })
    }

    /// Builds a board from a layout's piece specs.
    pub fn from_layout(layout: &Layout) -> Result<Board, BoardError> {
        let pieces = layout
            .pieces
            .iter()
            .map(|&(x, y, width, height)| Piece::new(x, y, width, height))
            .collect::<Result<Vec<_>, _>>()?;
        Board::new(pieces)
    }

    /// Every piece currently on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// All grid cells not covered by any piece.
    pub fn blank_cells(&self) -> FxHashSet<Position> {
        let occupied: FxHashSet<Position> = self.pieces.values().flat_map(|p| p.cells()).collect();
        (0..WIDTH)
            .flat_map(|x| (0..HEIGHT).map(move |y| Position::new(x, y)))
            .filter(|cell| !occupied.contains(cell))
            .collect()
    }

    /// The piece covering `(x, y)`: an exact origin match when there is
    /// one, otherwise a scan of every footprint. `None` means the cell is
    /// blank (or outside the grid).
    pub fn piece_at(&self, x: i32, y: i32) -> Option<&Piece> {
        self.pieces
            .get(&Position::new(x, y))
            .or_else(|| self.pieces.values().find(|p| p.contains(x, y)))
    }

    /// Moves the piece covering `(x, y)` one cell in `dir`.
    ///
    /// Returns `Ok(true)` when the move was applied, `Ok(false)` when it
    /// was rejected (clamped at the board edge, or blocked by another
    /// piece), and `Err(BlankSpot)` when the coordinates resolve to no
    /// piece at all. A rejected move leaves every piece where it was.
    pub fn move_piece(&mut self, x: i32, y: i32, dir: Direction) -> Result<bool, BoardError> {
        let piece = *self.piece_at(x, y).ok_or(BoardError::BlankSpot { x, y })?;
        if !piece.would_move(dir) {
            return Ok(false);
        }
        let mut moved = piece;
        moved.advance(dir);
        let blank = self.blank_cells();
        // the moving piece's own cells count as available: it vacates them
        let fits = moved
            .cells()
            .all(|cell| blank.contains(&cell) || piece.contains(cell.x, cell.y));
        if !fits {
            return Ok(false);
        }
        self.pieces.remove(&piece.origin());
        self.pieces.insert(moved.origin(), moved);
        Ok(true)
    }

    /// Whether the king's footprint has reached the goal cell.
    pub fn won(&self) -> bool {
        self.piece_at(GOAL.x, GOAL.y).is_some_and(|p| p.is_king())
    }
}

/// Renders the board as a text grid, one row per line from the top.
///
/// Glyphs are per shape: `K` king, `-` horizontal soldier, `|` vertical
/// soldier, `o` pawn, `.` blank. Deriving the glyph from the shape keeps
/// the output independent of piece-map iteration order.
pub fn format_board(board: &Board) -> String {
    let mut output = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let glyph = match board.piece_at(x, y) {
                None => '.',
                Some(p) if p.is_king() => 'K',
                Some(p) if p.width() == 2 => '-',
                Some(p) if p.height() == 2 => '|',
                Some(_) => 'o',
            };
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}
