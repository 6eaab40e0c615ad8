//! Polyomino packing on the square lattice.
//!
//! A [`Puzzle`] asks for all ways to place a list of [`Polyomino`] pieces on
//! a [`Board`] without overlaps. Every piece must be placed exactly once,
//! possibly rotated or reflected as allowed by the puzzle's [`Symmetry`].
//! When the pieces are too small to fill the board, the leftover cells form
//! a budget group whose slack is the difference in area, so the solver
//! decides which cells stay empty.
//!
//! ```
//! use slack_covers::tiling::{Board, Polyomino, Puzzle, Symmetry};
//! use slack_covers::{DlSolver, Solver};
//!
//! # fn main() -> Result<(), slack_covers::tiling::Error> {
//! let domino = Polyomino::parse(&["xx"])?;
//! let puzzle = Puzzle {
//!     board: Board::rectangle(2, 2)?,
//!     pieces: vec![domino.clone(), domino],
//!     symmetry: Symmetry::ALL,
//! };
//! // Two horizontal or two vertical dominoes, each in two orders.
//! assert_eq!(puzzle.solve(DlSolver::new())?.count(), 4);
//! # Ok(())
//! # }
//! ```

use crate::Solver;
use log::debug;
use smallvec::SmallVec;
use std::iter::FusedIterator;
use thiserror::Error;

/// The reasons why a puzzle cannot be set up.
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum Error {
    #[error("a polyomino needs at least one cell")]
    EmptyShape,
    /// A picture contains a character that is neither a cell nor a gap.
    /// Lines and columns are numbered from 1.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("pieces of total area {area} do not fit on a board with {cells} cells")]
    Overfull { area: usize, cells: usize },
    #[error("the board has no cells")]
    EmptyBoard,
}

/// A cell of the square lattice, addressed by row and column.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Reads a picture made of filled and empty characters. Returns the filled
/// positions in row-major order, and the width of the longest line.
fn parse_picture(lines: &[&str]) -> Result<(Vec<Cell>, usize), Error> {
    let mut cells = Vec::new();
    let mut width = 0;
    for (row, line) in lines.iter().enumerate() {
        let mut len = 0;
        for (column, found) in line.chars().enumerate() {
            match found {
                'x' | 'X' | '#' => cells.push(Cell::new(row, column)),
                '_' | '.' | ' ' => {}
                found => {
                    return Err(Error::InvalidCell {
                        line: row + 1,
                        column: column + 1,
                        found,
                    })
                }
            }
            len += 1;
        }
        width = width.max(len);
    }
    Ok((cells, width))
}

/// The rigid motions that may be applied to a piece before placing it.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Symmetry {
    /// Whether quarter turns are allowed.
    pub rotations: bool,
    /// Whether mirror images are allowed.
    pub reflections: bool,
}

impl Symmetry {
    /// Pieces may be turned over and rotated, like physical tiles.
    pub const ALL: Self = Self {
        rotations: true,
        reflections: true,
    };
    /// Pieces keep the orientation in which they were given.
    pub const NONE: Self = Self {
        rotations: false,
        reflections: false,
    };
}

impl Default for Symmetry {
    fn default() -> Self {
        Self::ALL
    }
}

/// A finite set of cells, translated so that its topmost row and leftmost
/// column are 0.
///
/// Two polyominoes compare equal if and only if one is a translate of the
/// other.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Polyomino {
    /// The cells in row-major order, without duplicates.
    cells: SmallVec<Cell, 8>,
}

impl Polyomino {
    /// Creates a polyomino from the signed coordinates of its cells.
    pub fn new<I>(cells: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut cells: Vec<_> = cells.into_iter().collect();
        let min_row = cells.iter().map(|&(row, _)| row).min();
        let min_column = cells.iter().map(|&(_, column)| column).min();
        let (Some(min_row), Some(min_column)) = (min_row, min_column) else {
            return Err(Error::EmptyShape);
        };
        cells.sort_unstable();
        cells.dedup();
        let cells = cells
            .into_iter()
            .map(|(row, column)| {
                // The differences are nonnegative by the choice of minima.
                Cell::new((row - min_row) as usize, (column - min_column) as usize)
            })
            .collect();
        Ok(Self { cells })
    }

    /// Reads a polyomino from a picture, one string per row, in which the
    /// characters `x`, `X` and `#` denote cells while `_`, `.` and spaces
    /// denote gaps.
    ///
    /// ```
    /// use slack_covers::tiling::{Cell, Polyomino};
    ///
    /// # fn main() -> Result<(), slack_covers::tiling::Error> {
    /// let l_tromino = Polyomino::parse(&["x_", "xx"])?;
    /// assert_eq!(l_tromino.len(), 3);
    /// assert_eq!(l_tromino.cells()[2], Cell::new(1, 1));
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(lines: &[&str]) -> Result<Self, Error> {
        let (cells, _) = parse_picture(lines)?;
        Self::new(
            cells
                .into_iter()
                .map(|cell| (cell.row as isize, cell.column as isize)),
        )
    }

    /// Returns the cells of the polyomino in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`, because a polyomino has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of rows spanned by the polyomino.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|cell| cell.row + 1).max().unwrap_or(0)
    }

    /// Returns the number of columns spanned by the polyomino.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|cell| cell.column + 1).max().unwrap_or(0)
    }

    /// Maps every cell through a motion of the plane and normalizes the image.
    fn map(&self, motion: impl Fn(isize, isize) -> (isize, isize)) -> Self {
        let image = self
            .cells
            .iter()
            .map(|cell| motion(cell.row as isize, cell.column as isize));
        Self::new(image).expect("a motion should preserve the cell count")
    }

    /// Returns the image of the polyomino under a clockwise quarter turn.
    pub fn rotate(&self) -> Self {
        self.map(|row, column| (column, -row))
    }

    /// Returns the mirror image of the polyomino across a vertical axis.
    pub fn flip(&self) -> Self {
        self.map(|row, column| (row, -column))
    }

    /// Returns the distinct images of the polyomino under the allowed
    /// motions, in the order in which they are discovered: first the
    /// polyomino itself and its successive rotations, then its mirror image
    /// and the rotations of the mirror image.
    ///
    /// ```
    /// use slack_covers::tiling::{Polyomino, Symmetry};
    ///
    /// # fn main() -> Result<(), slack_covers::tiling::Error> {
    /// let f_pentomino = Polyomino::parse(&["_xx", "xx_", "_x_"])?;
    /// assert_eq!(f_pentomino.orientations(Symmetry::ALL).len(), 8);
    /// let square = Polyomino::parse(&["xx", "xx"])?;
    /// assert_eq!(square.orientations(Symmetry::ALL).len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn orientations(&self, symmetry: Symmetry) -> Vec<Self> {
        let mut result = Vec::with_capacity(8);
        let visit = |shape: &Self, result: &mut Vec<Self>| {
            if result.contains(shape) {
                return;
            }
            result.push(shape.clone());
            if symmetry.rotations {
                let mut turned = shape.rotate();
                while !result.contains(&turned) {
                    let next = turned.rotate();
                    result.push(turned);
                    turned = next;
                }
            }
        };
        visit(self, &mut result);
        if symmetry.reflections {
            visit(&self.flip(), &mut result);
        }
        result
    }
}

/// A finite region of the square lattice, given as a rectangle in which some
/// cells may be blocked.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// The position of every open cell among the open cells in row-major
    /// order, or [`None`] for a blocked cell.
    slots: Vec<Option<usize>>,
    /// The number of open cells.
    cells: usize,
}

impl Board {
    /// Creates a board whose cells are all open.
    pub fn rectangle(rows: usize, columns: usize) -> Result<Self, Error> {
        Self::with_cells(rows, columns, |_| true)
    }

    /// Reads a board from a picture in the format accepted by
    /// [`Polyomino::parse`]: cells of the board are drawn as `x`, `X` or `#`,
    /// and every other position of the enclosing rectangle is blocked.
    ///
    /// Unlike a polyomino, the board keeps its position in the picture, so
    /// leading gaps are blocked cells too.
    pub fn parse(lines: &[&str]) -> Result<Self, Error> {
        let (cells, columns) = parse_picture(lines)?;
        Self::with_cells(lines.len(), columns, |cell| cells.binary_search(&cell).is_ok())
    }

    fn with_cells(rows: usize, columns: usize, is_open: impl Fn(Cell) -> bool) -> Result<Self, Error> {
        let mut slots = Vec::with_capacity(rows * columns);
        let mut cells = 0;
        for row in 0..rows {
            for column in 0..columns {
                if is_open(Cell::new(row, column)) {
                    slots.push(Some(cells));
                    cells += 1;
                } else {
                    slots.push(None);
                }
            }
        }
        if cells == 0 {
            return Err(Error::EmptyBoard);
        }
        Ok(Self {
            rows,
            columns,
            slots,
            cells,
        })
    }

    /// Returns the number of rows of the enclosing rectangle.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of the enclosing rectangle.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of open cells.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Returns whether a cell lies on the board and is not blocked.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.slot(cell).is_some()
    }

    /// Returns the position of an open cell among all open cells, in
    /// row-major order.
    fn slot(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.rows && cell.column < self.columns {
            self.slots[cell.row * self.columns + cell.column]
        } else {
            None
        }
    }

    /// Returns, for every position of the enclosing rectangle in row-major
    /// order, the index of the piece that covers it.
    ///
    /// # Panics
    ///
    /// This function panics if a placement does not fit on the board.
    pub fn piece_grid(&self, placements: &[Placement]) -> Vec<Option<usize>> {
        let mut grid = vec![None; self.rows * self.columns];
        for placement in placements {
            for cell in placement.cells() {
                assert!(self.is_open(cell), "{cell:?} is not an open cell of the board");
                grid[cell.row * self.columns + cell.column] = Some(placement.piece);
            }
        }
        grid
    }

    /// Returns the open cells that no placement covers, in row-major order.
    pub fn uncovered_cells(&self, placements: &[Placement]) -> Vec<Cell> {
        let grid = self.piece_grid(placements);
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |column| Cell::new(row, column)))
            .filter(|&cell| self.is_open(cell) && grid[cell.row * self.columns + cell.column].is_none())
            .collect()
    }

    /// Draws the outlines of the pieces with box-drawing characters. Each
    /// cell is three characters wide; empty and blocked cells merge into
    /// unlabeled regions.
    pub fn draw(&self, placements: &[Placement]) -> String {
        let grid = self.piece_grid(placements);
        let at = |row: usize, column: usize| grid[row * self.columns + column];
        let (rows, columns) = (self.rows, self.columns);
        let mut out = String::new();

        out.push('┌');
        for c in 0..columns {
            if c > 0 {
                out.push(if at(0, c - 1) == at(0, c) { '─' } else { '┬' });
            }
            out.push_str("───");
        }
        out.push_str("┐\n");
        for r in 0..rows {
            if r > 0 {
                out.push(if at(r - 1, 0) == at(r, 0) { '│' } else { '├' });
                for c in 0..columns {
                    let (top_right, bottom_right) = (at(r - 1, c), at(r, c));
                    if c > 0 {
                        let (top_left, bottom_left) = (at(r - 1, c - 1), at(r, c - 1));
                        out.push(junction(
                            top_left == top_right,
                            bottom_left == bottom_right,
                            top_left == bottom_left,
                            top_right == bottom_right,
                        ));
                    }
                    out.push_str(if top_right == bottom_right { "   " } else { "───" });
                }
                let same = at(r - 1, columns - 1) == at(r, columns - 1);
                out.push_str(if same { "│\n" } else { "┤\n" });
            }
            out.push('│');
            for c in 0..columns {
                if c > 0 {
                    out.push(if at(r, c - 1) == at(r, c) { ' ' } else { '│' });
                }
                match at(r, c) {
                    Some(piece) if piece < 26 => {
                        out.push(' ');
                        out.push((b'A' + piece as u8) as char);
                        out.push(' ');
                    }
                    Some(_) | None => out.push_str("   "),
                }
            }
            out.push_str("│\n");
        }
        out.push('└');
        for c in 0..columns {
            if c > 0 {
                let same = at(rows - 1, c - 1) == at(rows - 1, c);
                out.push(if same { '─' } else { '┴' });
            }
            out.push_str("───");
        }
        out.push_str("┘\n");
        out
    }
}

/// Chooses the character drawn where four cells meet, given which pairs of
/// adjacent cells belong to the same region. A wall is drawn between every
/// pair of cells that differ.
fn junction(top: bool, bottom: bool, left: bool, right: bool) -> char {
    match (top, bottom, left, right) {
        (true, true, true, _) => ' ',
        (true, true, false, _) => '─',
        (true, false, true, _) => '┌',
        (true, false, false, true) => '┐',
        (true, false, false, false) => '┬',
        (false, true, true, _) => '└',
        (false, true, false, true) => '┘',
        (false, true, false, false) => '┴',
        (false, false, true, true) => '│',
        (false, false, true, false) => '├',
        (false, false, false, true) => '┤',
        (false, false, false, false) => '┼',
    }
}

/// One piece put down on the board.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Placement {
    /// The index of the piece in [`Puzzle::pieces`].
    pub piece: usize,
    /// The orientation in which the piece was placed.
    pub shape: Polyomino,
    /// The board cell onto which the top-left corner of `shape`'s bounding
    /// box was translated.
    pub origin: Cell,
}

impl Placement {
    /// Returns the board cells covered by the piece.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.shape
            .cells()
            .iter()
            .map(|cell| Cell::new(self.origin.row + cell.row, self.origin.column + cell.column))
    }
}

/// A polyomino packing puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub board: Board,
    /// The pieces to place. Equal pieces are distinct copies, so solutions
    /// that only swap them are all reported.
    pub pieces: Vec<Polyomino>,
    pub symmetry: Symmetry,
}

impl Puzzle {
    /// Returns the total number of cells of the pieces.
    pub fn area(&self) -> usize {
        self.pieces.iter().map(Polyomino::len).sum()
    }

    /// Lists every placement of every piece that fits on the open cells of
    /// the board, grouped by piece.
    fn placements(&self) -> Vec<Vec<Placement>> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(piece, polyomino)| {
                let mut group = Vec::new();
                for shape in polyomino.orientations(self.symmetry) {
                    let (height, width) = (shape.height(), shape.width());
                    if height > self.board.rows || width > self.board.columns {
                        continue;
                    }
                    for row in 0..=self.board.rows - height {
                        for column in 0..=self.board.columns - width {
                            let placement = Placement {
                                piece,
                                shape: shape.clone(),
                                origin: Cell::new(row, column),
                            };
                            if placement.cells().all(|cell| self.board.is_open(cell)) {
                                group.push(placement);
                            }
                        }
                    }
                }
                group
            })
            .collect()
    }

    /// Builds the exact cover problem of the puzzle in the given solver, and
    /// returns an iterator over its tilings.
    ///
    /// Each piece contributes one row group, so it is placed exactly once.
    /// Each open cell of the board becomes a column. The cell columns are
    /// mandatory when the pieces fill the board exactly; otherwise they form
    /// a budget group whose slack is the number of cells left over.
    pub fn solve<S: Solver>(&self, mut solver: S) -> Result<Tilings<S::Solutions>, Error> {
        let (area, cells) = (self.area(), self.board.cell_count());
        if area > cells {
            return Err(Error::Overfull { area, cells });
        }

        let groups = self.placements();
        let mut cell_rows = vec![Vec::new(); cells];
        let mut placements = Vec::new();
        for group in groups {
            let rows = solver.add_rows(group.len());
            for (row, placement) in rows.zip(group) {
                for cell in placement.cells() {
                    let slot = self.board.slot(cell).expect("placements only cover open cells");
                    cell_rows[slot].push(row);
                }
                placements.push(placement);
            }
        }

        if area == cells {
            for rows in &cell_rows {
                solver.add_column(rows);
            }
        } else {
            let budget = solver.add_budget(cells - area);
            for rows in &cell_rows {
                solver.add_budgeted_column(rows, budget);
            }
        }
        debug!(
            "tiling {} cells with {} pieces of total area {area} ({} placements)",
            cells,
            self.pieces.len(),
            placements.len()
        );

        Ok(Tilings {
            solutions: solver.solve(),
            placements,
        })
    }
}

/// An iterator over the tilings of a [`Puzzle`].
///
/// Each tiling lists the placement of every piece, ordered by piece index.
pub struct Tilings<I> {
    solutions: I,
    /// The placement described by each row of the solver.
    placements: Vec<Placement>,
}

impl<I: Iterator<Item = Vec<usize>>> Iterator for Tilings<I> {
    type Item = Vec<Placement>;

    fn next(&mut self) -> Option<Self::Item> {
        // Rows are numbered piece by piece, so the chosen rows come out
        // sorted by piece.
        let rows = self.solutions.next()?;
        Some(rows.into_iter().map(|row| self.placements[row].clone()).collect())
    }
}

impl<I: FusedIterator<Item = Vec<usize>>> FusedIterator for Tilings<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DlSolver;

    #[test]
    fn parse_normalizes_and_rejects_garbage() {
        let shape = Polyomino::parse(&["__", "_x", "xx"]).unwrap();
        assert_eq!(
            shape.cells(),
            [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
        assert_eq!((shape.height(), shape.width()), (2, 2));

        assert_eq!(Polyomino::parse(&["__", ".."]), Err(Error::EmptyShape));
        assert_eq!(
            Polyomino::parse(&["xx", "xo"]),
            Err(Error::InvalidCell {
                line: 2,
                column: 2,
                found: 'o'
            })
        );
    }

    #[test]
    fn motions_preserve_the_shape() {
        let l_tetromino = Polyomino::parse(&["x_", "x_", "xx"]).unwrap();
        let turned = l_tetromino.rotate();
        assert_eq!((turned.height(), turned.width()), (2, 3));
        assert_eq!(turned.rotate().rotate().rotate(), l_tetromino);
        assert_eq!(l_tetromino.flip().flip(), l_tetromino);
        assert_ne!(l_tetromino.flip(), l_tetromino);
    }

    #[test]
    fn orientations_depend_on_the_symmetry() {
        let l_tetromino = Polyomino::parse(&["x_", "x_", "xx"]).unwrap();
        assert_eq!(l_tetromino.orientations(Symmetry::ALL).len(), 8);
        assert_eq!(
            l_tetromino.orientations(Symmetry {
                rotations: true,
                reflections: false
            })
            .len(),
            4
        );
        assert_eq!(
            l_tetromino.orientations(Symmetry {
                rotations: false,
                reflections: true
            })
            .len(),
            2
        );
        assert_eq!(l_tetromino.orientations(Symmetry::NONE), [l_tetromino.clone()]);

        let orientations = l_tetromino.orientations(Symmetry::ALL);
        assert_eq!(orientations[0], l_tetromino);
        assert_eq!(orientations[1], l_tetromino.rotate());
        assert_eq!(orientations[4], l_tetromino.flip());

        let i_tromino = Polyomino::parse(&["xxx"]).unwrap();
        assert_eq!(i_tromino.orientations(Symmetry::ALL).len(), 2);
    }

    #[test]
    fn boards_can_have_blocked_cells() {
        let board = Board::parse(&["xxx", "x_x", "x__"]).unwrap();
        assert_eq!((board.rows(), board.columns()), (3, 3));
        assert_eq!(board.cell_count(), 6);
        assert!(!board.is_open(Cell::new(2, 1)));
        assert!(board.is_open(Cell::new(0, 0)));
        assert!(!board.is_open(Cell::new(1, 1)));
        assert!(!board.is_open(Cell::new(2, 2)));
        assert!(!board.is_open(Cell::new(3, 0)));

        assert_eq!(Board::rectangle(0, 4), Err(Error::EmptyBoard));
        assert_eq!(Board::parse(&["..."]), Err(Error::EmptyBoard));
    }

    #[test]
    fn overfull_puzzles_are_rejected() {
        let puzzle = Puzzle {
            board: Board::rectangle(1, 2).unwrap(),
            pieces: vec![Polyomino::parse(&["xxx"]).unwrap()],
            symmetry: Symmetry::ALL,
        };
        assert_eq!(
            puzzle.solve(DlSolver::new()).err(),
            Some(Error::Overfull { area: 3, cells: 2 })
        );
    }

    #[test]
    fn dominoes_on_a_ring() {
        // A 3x3 board without its center has two tilings by four dominoes,
        // each counted once per ordering of the identical pieces.
        let domino = Polyomino::parse(&["xx"]).unwrap();
        let puzzle = Puzzle {
            board: Board::parse(&["xxx", "x.x", "xxx"]).unwrap(),
            pieces: vec![domino; 4],
            symmetry: Symmetry::ALL,
        };
        let tilings: Vec<_> = puzzle.solve(DlSolver::new()).unwrap().collect();
        assert_eq!(tilings.len(), 2 * 24);
        for tiling in &tilings {
            assert_eq!(tiling.len(), 4);
            assert!(tiling.iter().enumerate().all(|(ix, p)| p.piece == ix));
            assert!(puzzle.board.uncovered_cells(tiling).is_empty());
        }
    }

    #[test]
    fn leftover_cells_are_budgeted() {
        // One domino on a 1x3 strip leaves one of the end cells empty.
        let puzzle = Puzzle {
            board: Board::rectangle(1, 3).unwrap(),
            pieces: vec![Polyomino::parse(&["xx"]).unwrap()],
            symmetry: Symmetry::ALL,
        };
        let tilings: Vec<_> = puzzle.solve(DlSolver::new()).unwrap().collect();
        assert_eq!(tilings.len(), 2);
        assert_eq!(tilings[0][0].origin, Cell::new(0, 0));
        assert_eq!(puzzle.board.uncovered_cells(&tilings[0]), [Cell::new(0, 2)]);
        assert_eq!(tilings[1][0].origin, Cell::new(0, 1));
        assert_eq!(puzzle.board.uncovered_cells(&tilings[1]), [Cell::new(0, 0)]);
    }

    #[test]
    fn draw_outlines_the_pieces() {
        let puzzle = Puzzle {
            board: Board::rectangle(2, 2).unwrap(),
            pieces: vec![Polyomino::parse(&["xx"]).unwrap(), Polyomino::parse(&["x"]).unwrap()],
            symmetry: Symmetry::NONE,
        };
        let tiling = [
            Placement {
                piece: 0,
                shape: puzzle.pieces[0].clone(),
                origin: Cell::new(0, 0),
            },
            Placement {
                piece: 1,
                shape: puzzle.pieces[1].clone(),
                origin: Cell::new(1, 1),
            },
        ];
        let expected = "\
┌───────┐
│ A   A │
├───┬───┤
│   │ B │
└───┴───┘
";
        assert_eq!(puzzle.board.draw(&tiling), expected);
    }
}
