use crate::indices::NodeIndex;

/// An opaque handle to a budget group of a [`Solver`], as returned by
/// [`Solver::add_budget`].
///
/// [`Solver`]: `crate::Solver`
/// [`Solver::add_budget`]: `crate::Solver::add_budget`
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct BudgetId(usize);

impl BudgetId {
    pub(crate) const fn new(ix: usize) -> Self {
        Self(ix)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// The state of a group of budgeted columns, at most `slack` of which may
/// remain uncovered in a solution.
///
/// A budgeted column is a _hole_ while it is uncovered and its vertical list
/// is empty: no remaining row can ever cover it. The solver keeps `holes`
/// equal to the number of such columns in the group at all times.
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct Budget {
    /// The root of the private header ring that links the uncovered columns
    /// of this group.
    pub root: NodeIndex,
    /// The number of holes this group tolerates.
    pub slack: usize,
    /// The current number of holes in this group.
    pub holes: usize,
    /// Whether the remaining columns of the group must be treated as if they
    /// were mandatory, because every tolerated hole has been used up.
    pub chaining: bool,
}

impl Budget {
    pub fn new(root: NodeIndex, slack: usize) -> Self {
        Self {
            root,
            slack,
            holes: 0,
            chaining: false,
        }
    }

    /// Returns whether the group has more holes than it tolerates. A search
    /// branch in this state cannot lead to a solution.
    pub fn is_exceeded(&self) -> bool {
        self.holes > self.slack
    }

    /// Returns whether the group has just used up its slack and is not yet
    /// chaining.
    pub fn should_chain(&self) -> bool {
        !self.chaining && self.holes == self.slack
    }

    pub fn open_hole(&mut self) {
        self.holes += 1;
    }

    pub fn close_hole(&mut self) {
        debug_assert!(self.holes > 0, "budget group has no hole to close");
        self.holes -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_bounds_the_number_of_holes() {
        let mut budget = Budget::new(NodeIndex::new(4), 1);
        assert!(!budget.is_exceeded());
        assert!(!budget.should_chain());

        budget.open_hole();
        assert!(!budget.is_exceeded());
        assert!(budget.should_chain());
        budget.chaining = true;
        assert!(!budget.should_chain());

        budget.open_hole();
        assert!(budget.is_exceeded());
        budget.close_hole();
        budget.close_hole();
        assert_eq!(budget.holes, 0);
    }

    #[test]
    fn zero_slack_chains_immediately() {
        let budget = Budget::new(NodeIndex::new(1), 0);
        assert!(budget.should_chain());
        assert!(!budget.is_exceeded());
    }
}
