use crate::budget::{Budget, BudgetId};
use crate::column::{Column, ColumnKind, Row};
use crate::indices::{ColumnIndex, NodeIndex, RowIndex};
use crate::matrix::{Matrix, ROOT};
use log::{debug, trace};
use std::iter::FusedIterator;
use std::ops::Range;

/// Visits all solutions to an exact cover problem with budgeted columns by
/// means of dancing links.
///
/// More precisely, this structure embodies Algorithm X, as presented by
/// D. E. Knuth in Section 7.2.2.1 of [_TAOCP_ **4B**][taocp4b], part 2,
/// pages 65–70, extended with budget groups: a budget group of slack $H$
/// tolerates up to $H$ of its columns staying uncovered. Columns that no
/// remaining row can cover are counted as _holes_ while the search
/// descends, and a branch is abandoned as soon as some group has more holes
/// than its slack allows. Once a group has used up its slack exactly, its
/// remaining columns compete with the mandatory ones for branching, since
/// every one of them must now be covered.
///
/// See the [`Solver`](crate::Solver) trait for the construction interface.
///
/// [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Solver {
    /// The toroidal node storage. Node 0 is the root of the global header
    /// ring of mandatory columns.
    matrix: Matrix,
    /// The rows, in registration order.
    rows: Vec<Row>,
    /// The columns of all kinds, in creation order.
    columns: Vec<Column>,
    /// The budget groups, in creation order.
    budgets: Vec<Budget>,
}

impl Solver {
    // Problem setup routines.

    /// Creates an empty column of the given kind and links its head into the
    /// appropriate header ring.
    fn new_column(&mut self, kind: ColumnKind) -> ColumnIndex {
        let ix = ColumnIndex::new(self.columns.len());
        let head = self.matrix.push(None, Some(ix));
        match kind {
            ColumnKind::Mandatory => self.matrix.link_into_row(head, ROOT),
            ColumnKind::Budgeted(budget) => {
                let root = self.budget(budget).root;
                self.matrix.link_into_row(head, root);
            }
            ColumnKind::Reserved => {}
        }
        self.columns.push(Column::new(head, kind));
        ix
    }

    /// Appends a new node to the horizontal list of a row and to the vertical
    /// list of a column.
    fn append_node(&mut self, row: RowIndex, column: ColumnIndex) {
        let row_head = self.row(row).head;
        let column_head = self.column(column).head;
        let ix = self.matrix.push(Some(row), Some(column));
        self.matrix.link_into_row(ix, row_head);
        self.matrix.link_into_column(ix, column_head);
        self.column_mut(column).len += 1;
    }

    /// Creates a column of the given kind that intersects the given rows.
    fn add_column_of_kind(&mut self, rows: &[usize], kind: ColumnKind) -> usize {
        let ix = self.new_column(kind);
        for (pos, &row) in rows.iter().enumerate() {
            // Only check this invariant in debug mode, because it needs
            // $O(n)$ steps per row.
            debug_assert!(
                !rows[..pos].contains(&row),
                "row {row} can only appear once in the column"
            );
            let row = self.checked_row(row);
            self.append_node(row, ix);
        }
        // A budgeted column that no row can cover is a hole from the start.
        let column = self.column(ix);
        if let (0, Some(budget)) = (column.len, column.open_budget()) {
            self.budget_mut(budget).open_hole();
        }
        ix.get()
    }

    // Algorithm X routines.

    /// Deletes a node from the vertical list of its column. If the column
    /// is budgeted and this was its last node, the column becomes a hole.
    fn hide_node(&mut self, ix: NodeIndex) {
        self.matrix.splice_out_vertical(ix);
        let column = self.column_mut(self.column_of(ix));
        column.len -= 1;
        if let (0, Some(budget)) = (column.len, column.open_budget()) {
            self.budget_mut(budget).open_hole();
        }
    }

    /// Undoes the updates made by the last [hiding](`Self::hide_node`) of
    /// the given node.
    fn unhide_node(&mut self, ix: NodeIndex) {
        let column_ix = self.column_of(ix);
        let column = self.column(column_ix);
        if let (0, Some(budget)) = (column.len, column.open_budget()) {
            self.budget_mut(budget).close_hole();
        }
        self.column_mut(column_ix).len += 1;
        self.matrix.restore_vertical(ix);
    }

    /// Marks a column as covered by deleting it from its header ring, and
    /// by deleting all of the rows that intersect it from the vertical lists
    /// of their other columns.
    fn cover(&mut self, ix: ColumnIndex) {
        let column = self.column(ix);
        let head = column.head;
        // Covering an uncovered column closes its hole, if it had one.
        if let (0, Some(budget)) = (column.len, column.open_budget()) {
            self.budget_mut(budget).close_hole();
        }
        self.column_mut(ix).covered = true;
        self.matrix.splice_out_horizontal(head);

        // Hide all rows of the column, from top to bottom.
        let mut row_ix = self.matrix.down(head);
        while row_ix != head {
            let mut cur_ix = self.matrix.right(row_ix);
            while cur_ix != row_ix {
                if !self.matrix.node(cur_ix).is_row_head() {
                    self.hide_node(cur_ix);
                }
                cur_ix = self.matrix.right(cur_ix);
            }
            row_ix = self.matrix.down(row_ix);
        }
    }

    /// Undoes the updates made by the last [covering](`Self::cover`)
    /// operation, visiting the nodes in exactly the reverse order.
    fn uncover(&mut self, ix: ColumnIndex) {
        let head = self.column(ix).head;
        let mut row_ix = self.matrix.up(head);
        while row_ix != head {
            let mut cur_ix = self.matrix.left(row_ix);
            while cur_ix != row_ix {
                if !self.matrix.node(cur_ix).is_row_head() {
                    self.unhide_node(cur_ix);
                }
                cur_ix = self.matrix.left(cur_ix);
            }
            row_ix = self.matrix.up(row_ix);
        }

        self.matrix.restore_horizontal(head);
        self.column_mut(ix).covered = false;
        let column = self.column(ix);
        if let (0, Some(budget)) = (column.len, column.open_budget()) {
            self.budget_mut(budget).open_hole();
        }
    }

    /// Covers the columns of a row other than the column of node `ix`,
    /// cyclically from left to right. Reserved columns are skipped.
    fn commit_row(&mut self, ix: NodeIndex) {
        let mut cur_ix = self.matrix.right(ix);
        while cur_ix != ix {
            if let Some(column) = self.matrix.node(cur_ix).column {
                if self.column(column).is_coverable() {
                    self.cover(column);
                }
            }
            cur_ix = self.matrix.right(cur_ix);
        }
    }

    /// Undoes the updates made by the last [`Self::commit_row`] call on the
    /// same node, uncovering the columns cyclically from right to left.
    fn uncommit_row(&mut self, ix: NodeIndex) {
        let mut cur_ix = self.matrix.left(ix);
        while cur_ix != ix {
            if let Some(column) = self.matrix.node(cur_ix).column {
                if self.column(column).is_coverable() {
                    self.uncover(column);
                }
            }
            cur_ix = self.matrix.left(cur_ix);
        }
    }

    /// Finds an active column with the minimum number of rows, preferring
    /// the first one in header order in case of a tie.
    ///
    /// The mandatory columns come first. If one of them has no rows left,
    /// the current branch is hopeless and the function returns `None`. The
    /// columns of chaining budget groups are considered next; an empty one
    /// among them is a hole that has already been paid for, so it is skipped.
    fn choose_column(&self) -> Option<ColumnIndex> {
        let mut min: Option<(usize, ColumnIndex)> = None;
        let mut cur_ix = self.matrix.right(ROOT);
        while cur_ix != ROOT {
            let ix = self.column_of(cur_ix);
            match self.column(ix).len {
                0 => return None,
                // No column can do better than a forced move.
                1 => return Some(ix),
                len => {
                    if min.map_or(true, |(min_len, _)| len < min_len) {
                        min = Some((len, ix));
                    }
                }
            }
            cur_ix = self.matrix.right(cur_ix);
        }
        for budget in self.budgets.iter().filter(|budget| budget.chaining) {
            let mut cur_ix = self.matrix.right(budget.root);
            while cur_ix != budget.root {
                let ix = self.column_of(cur_ix);
                match self.column(ix).len {
                    0 => {}
                    1 => return Some(ix),
                    len => {
                        if min.map_or(true, |(min_len, _)| len < min_len) {
                            min = Some((len, ix));
                        }
                    }
                }
                cur_ix = self.matrix.right(cur_ix);
            }
        }
        min.map(|(_, ix)| ix)
    }

    // Search routines.

    /// Starts a new level of the search, which either fails immediately,
    /// finds a solution, or covers a column to branch on.
    fn enter_level(&mut self) -> Level {
        if let Some(ix) = self.budgets.iter().position(Budget::is_exceeded) {
            trace!("budget group {ix} exceeds its slack; backtracking");
            return Level::Failed;
        }
        if self.matrix.right(ROOT) == ROOT {
            return Level::Solved;
        }
        let mut chained = Vec::new();
        for (ix, budget) in self.budgets.iter_mut().enumerate() {
            if budget.should_chain() {
                trace!("budget group {ix} used up its slack of {}", budget.slack);
                budget.chaining = true;
                chained.push(BudgetId::new(ix));
            }
        }
        if let Some(column) = self.choose_column() {
            self.cover(column);
            Level::Branch(Frame {
                column,
                cursor: self.column(column).head,
                chained,
            })
        } else {
            self.unchain(&chained);
            Level::Failed
        }
    }

    /// Moves a frame to the next row of its column. The previous row, if any,
    /// is taken back first. Returns `false` after the last row, in which case
    /// the frame has been fully undone.
    fn advance(&mut self, frame: &mut Frame) -> bool {
        let head = self.column(frame.column).head;
        if frame.cursor != head {
            self.uncommit_row(frame.cursor);
            let row = self.row_of(frame.cursor);
            self.row_mut(row).chosen = false;
        }
        frame.cursor = self.matrix.down(frame.cursor);
        if frame.cursor == head {
            self.uncover(frame.column);
            self.unchain(&frame.chained);
            false
        } else {
            let row = self.row_of(frame.cursor);
            self.row_mut(row).chosen = true;
            self.commit_row(frame.cursor);
            true
        }
    }

    /// Undoes every update made on behalf of a frame that will not be
    /// [advanced](`Self::advance`) any further.
    fn unwind(&mut self, frame: &Frame) {
        if frame.cursor != self.column(frame.column).head {
            self.uncommit_row(frame.cursor);
            let row = self.row_of(frame.cursor);
            self.row_mut(row).chosen = false;
        }
        self.uncover(frame.column);
        self.unchain(&frame.chained);
    }

    fn unchain(&mut self, budgets: &[BudgetId]) {
        for &budget in budgets {
            trace!("budget group {} stops chaining", budget.get());
            self.budget_mut(budget).chaining = false;
        }
    }

    /// Returns the indices of the chosen rows, in increasing order.
    fn chosen_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.chosen)
            .map(|(ix, _)| ix)
            .collect()
    }

    // Manual row control.

    /// Undoes the updates made by the last [`select_row`] call on the given
    /// row, which must be the most recent selection that has not been undone.
    ///
    /// # Panics
    ///
    /// This function panics if the row index is out of bounds.
    ///
    /// [`select_row`]: crate::Solver::select_row
    pub fn undo_select_row(&mut self, row: usize) {
        let row = self.checked_row(row);
        self.row_mut(row).chosen = false;
        self.uncommit_row(self.row(row).head);
    }

    /// Returns the number of rows registered so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns of all kinds created so far, including
    /// the column created by each call to [`add_rows`].
    ///
    /// [`add_rows`]: crate::Solver::add_rows
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of budget groups created so far.
    pub fn budget_count(&self) -> usize {
        self.budgets.len()
    }

    // Accessor methods.

    /// Converts a caller-supplied row number into an index.
    ///
    /// # Panics
    ///
    /// This function panics if no row with the given number exists.
    fn checked_row(&self, row: usize) -> RowIndex {
        assert!(
            row < self.rows.len(),
            "row {row} is out of bounds ({} rows registered)",
            self.rows.len()
        );
        RowIndex::new(row)
    }

    fn row(&self, ix: RowIndex) -> &Row {
        &self.rows[ix.get()]
    }

    fn row_mut(&mut self, ix: RowIndex) -> &mut Row {
        &mut self.rows[ix.get()]
    }

    fn column(&self, ix: ColumnIndex) -> &Column {
        &self.columns[ix.get()]
    }

    fn column_mut(&mut self, ix: ColumnIndex) -> &mut Column {
        &mut self.columns[ix.get()]
    }

    /// Returns a mutable reference to a budget group.
    ///
    /// # Panics
    ///
    /// This function panics if the handle was not issued by this solver.
    fn budget_mut(&mut self, ix: BudgetId) -> &mut Budget {
        &mut self.budgets[ix.get()]
    }

    fn budget(&self, ix: BudgetId) -> &Budget {
        self.check_budget(ix);
        &self.budgets[ix.get()]
    }

    /// Asserts that a budget group handle was issued by this solver.
    ///
    /// # Panics
    ///
    /// This function panics if the group does not exist.
    fn check_budget(&self, ix: BudgetId) {
        assert!(
            ix.get() < self.budgets.len(),
            "budget group {ix:?} does not belong to this solver"
        );
    }

    /// Returns the column of a node that is neither a row head nor a root.
    fn column_of(&self, ix: NodeIndex) -> ColumnIndex {
        self.matrix
            .node(ix)
            .column
            .expect("node should belong to a column")
    }

    /// Returns the row of a node that is neither a column head nor a root.
    fn row_of(&self, ix: NodeIndex) -> RowIndex {
        self.matrix
            .node(ix)
            .row
            .expect("node should belong to a row")
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            matrix: Matrix::new(),
            rows: Vec::new(),
            columns: Vec::new(),
            budgets: Vec::new(),
        }
    }
}

impl crate::private::Sealed for Solver {}

impl crate::Solver for Solver {
    type Solutions = Solutions;

    fn new() -> Self {
        Self::default()
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    fn add_budget(&mut self, slack: usize) -> BudgetId {
        let ix = BudgetId::new(self.budgets.len());
        let root = self.matrix.push(None, None);
        self.budgets.push(Budget::new(root, slack));
        debug!("created budget group {} with slack {slack}", ix.get());
        ix
    }

    fn add_rows(&mut self, count: usize) -> Range<usize> {
        let column = self.new_column(ColumnKind::Mandatory);
        let first = self.rows.len();
        for row in first..first + count {
            let row = RowIndex::new(row);
            let head = self.matrix.push(Some(row), None);
            self.rows.push(Row::new(head));
            self.append_node(row, column);
        }
        first..first + count
    }

    fn add_column<R: AsRef<[usize]>>(&mut self, rows: R) -> usize {
        self.add_column_of_kind(rows.as_ref(), ColumnKind::Mandatory)
    }

    fn add_budgeted_column<R: AsRef<[usize]>>(&mut self, rows: R, budget: BudgetId) -> usize {
        // Fail before the column is created if the handle is foreign.
        self.check_budget(budget);
        self.add_column_of_kind(rows.as_ref(), ColumnKind::Budgeted(budget))
    }

    fn add_reserved_column<R: AsRef<[usize]>>(&mut self, rows: R) -> usize {
        self.add_column_of_kind(rows.as_ref(), ColumnKind::Reserved)
    }

    fn select_row(&mut self, row: usize) {
        let row = self.checked_row(row);
        self.commit_row(self.row(row).head);
        self.row_mut(row).chosen = true;
    }

    fn deselect_row(&mut self, row: usize) {
        let row = self.checked_row(row);
        self.row_mut(row).chosen = false;
        let head = self.row(row).head;
        let mut cur_ix = self.matrix.right(head);
        while cur_ix != head {
            if self.matrix.is_linked_vertically(cur_ix) {
                self.hide_node(cur_ix);
            }
            cur_ix = self.matrix.right(cur_ix);
        }
    }

    fn solve(self) -> Solutions {
        debug!(
            "searching {} rows, {} columns and {} budget groups ({} nodes)",
            self.rows.len(),
            self.columns.len(),
            self.budgets.len(),
            self.matrix.len()
        );
        Solutions {
            solver: self,
            frames: Vec::new(),
            descend: true,
            found: 0,
            finished: false,
        }
    }
}

/// One level of the backtracking search.
struct Frame {
    /// The column covered at this level.
    column: ColumnIndex,
    /// The node of the row that currently covers `column`, or the head of
    /// `column` before its first row has been tried.
    cursor: NodeIndex,
    /// The budget groups that started chaining at this level, and that must
    /// stop chaining when the level is left.
    chained: Vec<BudgetId>,
}

/// The outcome of [entering](`Solver::enter_level`) a search level.
enum Level {
    Failed,
    Solved,
    Branch(Frame),
}

/// An iterator over the solutions of a [`DlSolver`](crate::DlSolver).
///
/// Each solution is the list of chosen rows in increasing order, rows chosen
/// with [`select_row`](crate::Solver::select_row) included. The search runs
/// lazily: every call to [`Iterator::next`] resumes it where the previous
/// solution was found.
///
/// Dropping the iterator before it is exhausted discards the solver. Use
/// [`Solutions::into_solver`] to get the solver back instead.
pub struct Solutions {
    solver: Solver,
    /// The stack of open search levels.
    frames: Vec<Frame>,
    /// Whether the next step enters a new level, as opposed to advancing the
    /// topmost frame.
    descend: bool,
    /// The number of solutions produced so far.
    found: usize,
    finished: bool,
}

impl Solutions {
    /// Stops the search and returns the solver in the state it was in before
    /// [`solve`](crate::Solver::solve) was called.
    pub fn into_solver(mut self) -> Solver {
        while let Some(frame) = self.frames.pop() {
            self.solver.unwind(&frame);
        }
        self.solver
    }
}

impl Iterator for Solutions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.descend {
                self.descend = false;
                match self.solver.enter_level() {
                    Level::Failed => {}
                    Level::Solved => {
                        self.found += 1;
                        return Some(self.solver.chosen_rows());
                    }
                    Level::Branch(frame) => self.frames.push(frame),
                }
            }
            let Some(frame) = self.frames.last_mut() else {
                if !self.finished {
                    self.finished = true;
                    debug!("search finished after {} solutions", self.found);
                }
                return None;
            };
            if self.solver.advance(frame) {
                self.descend = true;
            } else {
                self.frames.pop();
            }
        }
    }
}

impl FusedIterator for Solutions {}
