//! Piece definitions and shipped starting layouts.
//!
//! A piece is a rectangle of 1x1, 1x2, 2x1, or 2x2 cells anchored at its
//! top-left origin. Starting layouts are declared as const tables of
//! `(x, y, width, height)` specs and validated at compile time.

use thiserror::Error;

use crate::board::{HEIGHT, MAX_SOLDIER_PIECES, WIDTH};
use crate::geometry::{Direction, Position};

/// Largest piece extent along the x axis.
pub const MAX_WIDTH: i32 = 2;
/// Largest piece extent along the y axis.
pub const MAX_HEIGHT: i32 = 2;

/// Invalid piece data at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("piece at ({x}, {y}) with size {width}x{height} does not fit on the board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("piece dimensions {width}x{height} are not between 1 and 2")]
    BadDimensions { width: i32, height: i32 },
}

/// One rectangular occupant of the board.
///
/// The origin is the top-left cell; the footprint extends `width` cells
/// rightward and `height` cells downward. The origin changes only through
/// [`Piece::advance`], which the board calls after validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Piece {
    /// Creates a piece, rejecting dimensions outside `1..=2` and origins
    /// whose footprint would extend past the board edge.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Piece, PieceError> {
        if width < 1 || width > MAX_WIDTH || height < 1 || height > MAX_HEIGHT {
            return Err(PieceError::BadDimensions { width, height });
        }
        if x < 0 || x + width > WIDTH || y < 0 || y + height > HEIGHT {
            return Err(PieceError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Piece {
            x,
            y,
            width,
            height,
        })
    }

    /// The top-left anchor cell.
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The single 2x2 piece that has to reach the goal.
    pub fn is_king(&self) -> bool {
        self.width == 2 && self.height == 2
    }

    /// A 1x2 or 2x1 piece.
    pub fn is_soldier(&self) -> bool {
        (self.width == 1 && self.height == 2) || (self.width == 2 && self.height == 1)
    }

    /// Every cell of the footprint, anchored at the current origin.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Piece {
            x,
            y,
            width,
            height,
        } = *self;
        (0..width).flat_map(move |dx| (0..height).map(move |dy| Position::new(x + dx, y + dy)))
    }

    /// Whether `(cx, cy)` lies inside the footprint.
    pub fn contains(&self, cx: i32, cy: i32) -> bool {
        cx >= self.x && cx < self.x + self.width && cy >= self.y && cy < self.y + self.height
    }

    /// The origin one step in `dir`, clamped back to the current origin
    /// when the footprint would leave the board.
    pub fn target_origin(&self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        let (nx, ny) = (self.x + dx, self.y + dy);
        if nx < 0 || nx + self.width > WIDTH || ny < 0 || ny + self.height > HEIGHT {
            self.origin()
        } else {
            Position::new(nx, ny)
        }
    }

    /// Fast pre-check: does a step in `dir` change the origin at all?
    pub fn would_move(&self, dir: Direction) -> bool {
        self.target_origin(dir) != self.origin()
    }

    /// Commits a step in `dir`. Callers go through `Board::move_piece`,
    /// which checks occupancy first.
    pub(crate) fn advance(&mut self, dir: Direction) {
        let target = self.target_origin(dir);
        self.x = target.x;
        self.y = target.y;
    }
}

/// One piece of a layout: `(x, y, width, height)`.
pub type PieceSpec = (i32, i32, i32, i32);

/// A named starting position.
pub struct Layout {
    /// The pieces of this layout.
    pub pieces: &'static [PieceSpec],
}

impl Layout {
    /// Creates a layout definition with compile-time validation.
    pub const fn new(pieces: &'static [PieceSpec]) -> Self {
        let mut kings = 0;
        let mut soldiers: usize = 0;
        let mut i = 0;
        while i < pieces.len() {
            let (x, y, width, height) = pieces[i];
            assert!(
                width >= 1 && width <= MAX_WIDTH && height >= 1 && height <= MAX_HEIGHT,
                "piece dimensions must be 1 or 2"
            );
            assert!(
                x >= 0 && x + width <= WIDTH && y >= 0 && y + height <= HEIGHT,
                "piece does not fit on the board"
            );
            if width == 2 && height == 2 {
                kings += 1;
            } else if width != height {
                soldiers += 1;
            }
            i += 1;
        }
        assert!(kings == 1, "a layout needs exactly one 2x2 piece");
        assert!(soldiers <= MAX_SOLDIER_PIECES, "too many soldier pieces");
        Self { pieces }
    }
}

/// The canonical Klotski start.
///
/// Two blank cells sit at the bottom center; the king has to work its way
/// down through the pawns to reach the goal row.
pub const CLASSIC: Layout = Layout::new(&[
    // king (2x2)
    (1, 0, 2, 2),
    // vertical soldiers in the four corners
    (0, 0, 1, 2),
    (3, 0, 1, 2),
    (0, 2, 1, 2),
    (3, 2, 1, 2),
    // horizontal soldier across the center
    (1, 2, 2, 1),
    // pawns
    (1, 3, 1, 1),
    (2, 3, 1, 1),
    (0, 4, 1, 1),
    (3, 4, 1, 1),
]);

/// Reduced layout for new players: the king, one soldier, and plenty of
/// open space.
pub const TRAINING: Layout = Layout::new(&[
    // king (2x2)
    (1, 0, 2, 2),
    // horizontal soldier across the center
    (1, 2, 2, 1),
    // pawns
    (0, 0, 1, 1),
    (3, 0, 1, 1),
    (0, 4, 1, 1),
    (3, 4, 1, 1),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range_origins() {
        assert!(Piece::new(-1, 0, 1, 1).is_err());
        assert!(Piece::new(0, -1, 1, 1).is_err());
        assert!(Piece::new(WIDTH, 0, 1, 1).is_err());
        assert!(Piece::new(0, HEIGHT, 1, 1).is_err());
        // a 2-wide piece may not start on the last column
        assert_eq!(
            Piece::new(3, 0, 2, 1),
            Err(PieceError::OutOfBounds {
                x: 3,
                y: 0,
                width: 2,
                height: 1
            })
        );
        // nor a 2-tall piece on the last row
        assert!(Piece::new(0, 4, 1, 2).is_err());
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert_eq!(
            Piece::new(0, 0, 0, 1),
            Err(PieceError::BadDimensions {
                width: 0,
                height: 1
            })
        );
        assert!(Piece::new(0, 0, 1, 0).is_err());
        assert!(Piece::new(0, 0, 3, 1).is_err());
        assert!(Piece::new(0, 0, 1, 3).is_err());
    }

    #[test]
    fn test_cells_cover_the_footprint() {
        let king = Piece::new(1, 0, 2, 2).unwrap();
        let cells: Vec<Position> = king.cells().collect();
        assert_eq!(cells.len(), 4);
        for (x, y) in [(1, 0), (2, 0), (1, 1), (2, 1)] {
            assert!(cells.contains(&Position::new(x, y)));
        }
    }

    #[test]
    fn test_contains_excludes_the_far_edge() {
        let pawn = Piece::new(0, 0, 1, 1).unwrap();
        assert!(pawn.contains(0, 0));
        assert!(!pawn.contains(1, 0));
        assert!(!pawn.contains(0, 1));
        assert!(!pawn.contains(1, 1));

        let king = Piece::new(1, 1, 2, 2).unwrap();
        assert!(king.contains(2, 2));
        assert!(!king.contains(3, 1));
        assert!(!king.contains(1, 3));
    }

    #[test]
    fn test_target_origin_steps_one_cell() {
        let pawn = Piece::new(1, 1, 1, 1).unwrap();
        assert_eq!(pawn.target_origin(Direction::Up), Position::new(1, 0));
        assert_eq!(pawn.target_origin(Direction::Down), Position::new(1, 2));
        assert_eq!(pawn.target_origin(Direction::Left), Position::new(0, 1));
        assert_eq!(pawn.target_origin(Direction::Right), Position::new(2, 1));
    }

    #[test]
    fn test_target_origin_clamps_at_every_edge() {
        let top_left = Piece::new(0, 0, 2, 2).unwrap();
        assert_eq!(top_left.target_origin(Direction::Up), top_left.origin());
        assert_eq!(top_left.target_origin(Direction::Left), top_left.origin());

        let bottom_right = Piece::new(2, 3, 2, 2).unwrap();
        assert_eq!(
            bottom_right.target_origin(Direction::Down),
            bottom_right.origin()
        );
        assert_eq!(
            bottom_right.target_origin(Direction::Right),
            bottom_right.origin()
        );
    }

    #[test]
    fn test_target_origin_never_leaves_the_board() {
        // every shape at every legal origin, stepped in every direction
        for width in 1..=MAX_WIDTH {
            for height in 1..=MAX_HEIGHT {
                for x in 0..=(WIDTH - width) {
                    for y in 0..=(HEIGHT - height) {
                        let piece = Piece::new(x, y, width, height).unwrap();
                        for dir in [
                            Direction::Up,
                            Direction::Down,
                            Direction::Left,
                            Direction::Right,
                        ] {
                            let target = piece.target_origin(dir);
                            assert!(target.x >= 0 && target.x + width <= WIDTH);
                            assert!(target.y >= 0 && target.y + height <= HEIGHT);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_would_move_is_false_only_when_clamped() {
        let pawn = Piece::new(0, 0, 1, 1).unwrap();
        assert!(!pawn.would_move(Direction::Up));
        assert!(!pawn.would_move(Direction::Left));
        assert!(pawn.would_move(Direction::Down));
        assert!(pawn.would_move(Direction::Right));
    }

    #[test]
    fn test_shape_predicates() {
        assert!(Piece::new(0, 0, 2, 2).unwrap().is_king());
        assert!(!Piece::new(0, 0, 2, 2).unwrap().is_soldier());
        assert!(Piece::new(0, 0, 1, 2).unwrap().is_soldier());
        assert!(Piece::new(0, 0, 2, 1).unwrap().is_soldier());
        assert!(!Piece::new(0, 0, 1, 1).unwrap().is_king());
        assert!(!Piece::new(0, 0, 1, 1).unwrap().is_soldier());
    }
}
