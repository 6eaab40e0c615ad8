//! This crate provides a dancing links solver for exact cover problems in
//! which some constraints may be left unsatisfied, up to a fixed budget.
//!
//! Suppose we're given a boolean matrix whose rows are candidate selections
//! and whose columns are constraints; the _exact cover_ problem is to choose
//! a set of rows such that every column is intersected by exactly one chosen
//! row. D. E. Knuth's Algorithm X finds all such sets by depth-first search,
//! and the _dancing links_ technique of his paper "Dancing Links",
//! [arXiv:cs/0011047][dl] [cs.DS] (2000), makes every step of that search
//! reversible in constant time. [For further information, see Section 7.2.2.1
//! of [_The Art of Computer Programming_ **4B** (2022)][taocp4b], Part 2, 65–70.]
//!
//! Packing puzzles motivate a variation. When $n$ pieces of total area $A$
//! are to be placed on a board with $N>A$ cells, exactly $N-A$ cells stay
//! empty, but we don't know in advance which ones. This crate lets such
//! cells join a _budget group_ of slack $H=N-A$: each column of the group
//! is covered at most once, and at most $H$ of them stay uncovered. The search
//! counts the columns that no remaining row can cover (the _holes_ of the
//! group), abandons a branch as soon as a group has more than $H$ holes, and
//! starts branching on the group's columns as soon as it has exactly $H$.
//!
//! The rows of a problem always come in groups: [`Solver::add_rows`] creates
//! a mandatory column that intersects every new row, so that exactly one row
//! of each group is chosen. In a packing puzzle, a group holds all placements
//! of one piece.
//!
//! The following structures are the most important pieces of the crate:
//! - [`Solver`] is the construction and search interface.
//! - [`DlSolver`] implements it by means of dancing links, and its
//!   [`Solutions`] iterator enumerates the solutions lazily.
//! - The `tiling` module (enabled by the `tiling` feature) translates boards
//!   and polyominoes into rows and columns.
//!
//! The `demos` directory contains programs that apply the solver to
//! pentomino packing, Langford pairings, and the $n$ queens problem.
//!
//! [dl]: https://arxiv.org/pdf/cs/0011047.pdf
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4

mod budget;
mod column;
mod dl;
mod indices;
mod matrix;
#[cfg(feature = "tiling")]
pub mod tiling;

pub use budget::BudgetId;
pub use dl::Solutions;
pub use dl::Solver as DlSolver;
use std::ops::Range;

/// Visits all solutions to an exact cover problem with budget groups.
///
/// A problem is built in two phases: first the rows are registered, group by
/// group, with [`add_rows`]; then the columns are added, each one listing the
/// rows it intersects. Row and column indices are assigned densely from zero
/// in creation order.
///
/// A solution is a set of rows such that
/// - every mandatory column, including the column of each row group, is
///   intersected by exactly one chosen row;
/// - every budgeted column is intersected by at most one chosen row, and the
///   number of columns of a budget group that no chosen row intersects does
///   not exceed the slack of the group;
/// - reserved columns impose nothing.
///
/// This trait is sealed, meaning that it cannot be implemented outside of the
/// `slack-covers` crate.
///
/// # Examples
///
/// Let's place a domino on a strip of three cells. The two placements of the
/// domino form one row group, and the cells are budgeted columns because one
/// of them must stay empty:
///
/// ```
/// use slack_covers::{DlSolver, Solver};
///
/// let mut solver = DlSolver::new();
/// let placements = solver.add_rows(2);
/// assert_eq!(placements, 0..2);
///
/// let empty_cells = solver.add_budget(1);
/// solver.add_budgeted_column([0], empty_cells);
/// solver.add_budgeted_column([0, 1], empty_cells);
/// solver.add_budgeted_column([1], empty_cells);
///
/// let solutions: Vec<_> = solver.solve().collect();
/// assert_eq!(solutions, [vec![0], vec![1]]);
/// ```
///
/// Mandatory columns give the classical exact cover problem. Here is
/// D. E. Knuth's toy problem from the beginning of Section 7.2.2.1 of
/// [_TAOCP_ **4B**][taocp4b], with options `c e`, `a d g`, `b c f`, `a d f`,
/// `b g` and `d e g`. The options that contain `a` form the first group,
/// those with `b` the second, and those with `e` the third:
///
/// ```
/// use slack_covers::{DlSolver, Solver};
///
/// let mut solver = DlSolver::new();
/// solver.add_rows(2); // 0: `a d g`, 1: `a d f`
/// solver.add_rows(2); // 2: `b c f`, 3: `b g`
/// solver.add_rows(2); // 4: `c e`,   5: `d e g`
/// solver.add_column([2, 4]); // c
/// solver.add_column([0, 1, 5]); // d
/// solver.add_column([1, 2]); // f
/// solver.add_column([0, 3, 5]); // g
///
/// let mut solutions = solver.solve();
/// assert_eq!(solutions.next(), Some(vec![1, 3, 4]));
/// assert_eq!(solutions.next(), None);
/// ```
///
/// [`add_rows`]: Self::add_rows
/// [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4
pub trait Solver: private::Sealed + Sized {
    /// The iterator returned by [`Self::solve`].
    type Solutions: Iterator<Item = Vec<usize>>;

    /// Creates a solver for a problem with no rows and no columns.
    fn new() -> Self;

    /// Frees the storage of the problem and leaves an empty solver behind.
    /// Calling this method more than once has no further effect.
    fn release(&mut self);

    /// Creates a budget group that tolerates up to `slack` uncovered columns.
    fn add_budget(&mut self, slack: usize) -> BudgetId;

    /// Registers `count` new rows, together with a new mandatory column that
    /// intersects all of them and nothing else. Returns the indices of the
    /// new rows.
    ///
    /// All rows must be registered before they are referenced by a column.
    fn add_rows(&mut self, count: usize) -> Range<usize>;

    /// Appends a mandatory column that intersects the given rows, and
    /// returns its index.
    ///
    /// # Panics
    ///
    /// This function panics if a row has not been registered.
    fn add_column<R: AsRef<[usize]>>(&mut self, rows: R) -> usize;

    /// Appends a column of the given budget group that intersects the given
    /// rows, and returns its index.
    ///
    /// # Panics
    ///
    /// This function panics if a row has not been registered, or if the
    /// budget group was not created by this solver.
    fn add_budgeted_column<R: AsRef<[usize]>>(&mut self, rows: R, budget: BudgetId) -> usize;

    /// Appends a reserved column that intersects the given rows, and returns
    /// its index. Reserved columns are never covered and never chosen for
    /// branching, so they do not constrain the solutions.
    ///
    /// # Panics
    ///
    /// This function panics if a row has not been registered.
    fn add_reserved_column<R: AsRef<[usize]>>(&mut self, rows: R) -> usize;

    /// Commits a row to every solution: covers the mandatory and budgeted
    /// columns it intersects and marks it as chosen.
    ///
    /// The row must not conflict with any row selected earlier.
    ///
    /// # Panics
    ///
    /// This function panics if the row has not been registered.
    fn select_row(&mut self, row: usize);

    /// Strips a row from the vertical lists of all the columns in which it is
    /// still present, so that no solution can choose it.
    ///
    /// This is not the inverse of [`Self::select_row`].
    ///
    /// # Panics
    ///
    /// This function panics if the row has not been registered.
    fn deselect_row(&mut self, row: usize);

    /// Returns an iterator over all solutions to the problem.
    ///
    /// Each solution lists the chosen rows in increasing order. The order of
    /// the solutions depends only on the order in which rows and columns
    /// were created.
    fn solve(self) -> Self::Solutions;
}

pub(crate) mod private {
    pub trait Sealed {}
}
