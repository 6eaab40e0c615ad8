use crate::budget::BudgetId;
use crate::indices::NodeIndex;

/// The role a column plays in the search.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum ColumnKind {
    /// A constraint that every solution covers exactly once. The head of
    /// such a column is linked into the global header ring.
    Mandatory,
    /// A constraint that may stay uncovered, as long as the number of
    /// uncovered columns of its budget group never exceeds the group's slack.
    /// The head is linked into the private header ring of that group.
    Budgeted(BudgetId),
    /// A column that is tracked but never linked into any header ring, so
    /// it is never chosen for branching and never covered.
    Reserved,
}

/// A column of the matrix.
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct Column {
    /// The sentinel of the vertical ring.
    pub head: NodeIndex,
    /// The number of nodes currently linked into the vertical ring,
    /// not counting the head.
    ///
    /// This field corresponds to the `LEN` member in Knuth's data structure.
    pub len: usize,
    pub kind: ColumnKind,
    /// Whether the column has been covered, either by the search or by an
    /// explicit row selection. A covered column is absent from its header ring.
    pub covered: bool,
}

impl Column {
    pub fn new(head: NodeIndex, kind: ColumnKind) -> Self {
        Self {
            head,
            len: 0,
            kind,
            covered: false,
        }
    }

    /// Returns the budget group this column belongs to, if the column is
    /// still uncovered and budgeted. Only such columns can open or close
    /// a hole when their length changes.
    pub fn open_budget(&self) -> Option<BudgetId> {
        match self.kind {
            ColumnKind::Budgeted(budget) if !self.covered => Some(budget),
            ColumnKind::Budgeted(_) | ColumnKind::Mandatory | ColumnKind::Reserved => None,
        }
    }

    /// Returns whether covering this column is meaningful. Reserved columns
    /// are inert, so selecting a row leaves them alone.
    pub fn is_coverable(&self) -> bool {
        match self.kind {
            ColumnKind::Mandatory | ColumnKind::Budgeted(_) => true,
            ColumnKind::Reserved => false,
        }
    }
}

/// A row of the matrix, that is, one candidate selection.
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct Row {
    /// The sentinel of the horizontal ring.
    pub head: NodeIndex,
    /// Whether the row belongs to the partial solution under construction.
    pub chosen: bool,
}

impl Row {
    pub fn new(head: NodeIndex) -> Self {
        Self {
            head,
            chosen: false,
        }
    }
}
