use proptest::prelude::*;
use slack_covers::{DlSolver, Solver};
use std::collections::BTreeSet;

/// A small problem: row groups of the given sizes, budget groups of the
/// given slacks, and columns given by their incidence vectors. A column
/// of kind 0 is mandatory, and a column of kind $k>0$ belongs to budget
/// group $k-1$.
#[derive(Debug, Clone)]
struct Instance {
    groups: Vec<usize>,
    slacks: Vec<usize>,
    columns: Vec<(Vec<bool>, usize)>,
}

impl Instance {
    fn row_count(&self) -> usize {
        self.groups.iter().sum()
    }

    fn build(&self, columns: &[(Vec<bool>, usize)]) -> DlSolver {
        let mut solver = DlSolver::new();
        let budgets: Vec<_> = self
            .slacks
            .iter()
            .map(|&slack| solver.add_budget(slack))
            .collect();
        for &size in &self.groups {
            solver.add_rows(size);
        }
        for (incidence, kind) in columns {
            let rows: Vec<_> = (0..incidence.len()).filter(|&row| incidence[row]).collect();
            match kind {
                0 => solver.add_column(rows),
                &kind => solver.add_budgeted_column(rows, budgets[kind - 1]),
            };
        }
        solver
    }

    /// Enumerates the solutions of the problem with the search engine,
    /// asserting that none of them is reported twice.
    fn search(&self, solver: DlSolver) -> BTreeSet<Vec<usize>> {
        let solutions: Vec<_> = solver.solve().collect();
        let set: BTreeSet<_> = solutions.iter().cloned().collect();
        assert_eq!(set.len(), solutions.len(), "duplicate solutions");
        for solution in &solutions {
            assert!(solution.windows(2).all(|pair| pair[0] < pair[1]));
        }
        set
    }

    /// Checks every subset of the rows against the definition of a solution.
    fn brute_force(&self) -> BTreeSet<Vec<usize>> {
        let rows = self.row_count();
        let mut result = BTreeSet::new();
        for mask in 0u32..1 << rows {
            let chosen: Vec<_> = (0..rows).filter(|&row| mask & (1 << row) != 0).collect();
            let hits = |incidence: &[bool]| chosen.iter().filter(|&&row| incidence[row]).count();

            let mut first = 0;
            let groups_ok = self.groups.iter().all(|&size| {
                let group: Vec<_> = (0..rows).map(|row| (first..first + size).contains(&row)).collect();
                first += size;
                hits(&group) == 1
            });
            let mut uncovered = vec![0; self.slacks.len()];
            let columns_ok = self.columns.iter().all(|(incidence, kind)| match (hits(incidence), kind) {
                (1, _) => true,
                (0, &kind) if kind > 0 => {
                    uncovered[kind - 1] += 1;
                    true
                }
                _ => false,
            });
            let budgets_ok = uncovered.iter().zip(&self.slacks).all(|(count, slack)| count <= slack);
            if groups_ok && columns_ok && budgets_ok {
                result.insert(chosen);
            }
        }
        result
    }
}

impl Instance {
    /// Renumbers the rows: the row groups are created in the given order,
    /// and the rows of each group in reverse. Returns the renumbered problem
    /// and the original number of every new row.
    fn permute_rows(&self, order: &[usize]) -> (Self, Vec<usize>) {
        let firsts: Vec<usize> = self
            .groups
            .iter()
            .scan(0, |first, &size| {
                let group_first = *first;
                *first += size;
                Some(group_first)
            })
            .collect();
        let original: Vec<usize> = order
            .iter()
            .flat_map(|&group| (firsts[group]..firsts[group] + self.groups[group]).rev())
            .collect();
        let permuted = Self {
            groups: order.iter().map(|&group| self.groups[group]).collect(),
            slacks: self.slacks.clone(),
            columns: self
                .columns
                .iter()
                .map(|(incidence, kind)| (original.iter().map(|&row| incidence[row]).collect(), *kind))
                .collect(),
        };
        (permuted, original)
    }
}

fn instance() -> impl Strategy<Value = Instance> {
    (
        prop::collection::vec(1usize..=3, 1..=4),
        prop::collection::vec(0usize..=2, 0..=2),
    )
        .prop_flat_map(|(groups, slacks)| {
            let rows: usize = groups.iter().sum();
            let column = (prop::collection::vec(any::<bool>(), rows), 0..=slacks.len());
            (Just(groups), Just(slacks), prop::collection::vec(column, 0..=6))
        })
        .prop_map(|(groups, slacks, columns)| Instance {
            groups,
            slacks,
            columns,
        })
}

proptest! {
    #[test]
    fn search_agrees_with_brute_force(instance in instance()) {
        let solutions = instance.search(instance.build(&instance.columns));
        prop_assert_eq!(solutions, instance.brute_force());
    }

    #[test]
    fn column_order_does_not_matter(instance in instance()) {
        let mut reversed = instance.columns.clone();
        reversed.reverse();
        let forward = instance.search(instance.build(&instance.columns));
        let backward = instance.search(instance.build(&reversed));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn row_order_does_not_matter(
        (instance, order) in instance().prop_flat_map(|instance| {
            let order: Vec<usize> = (0..instance.groups.len()).collect();
            (Just(instance), Just(order).prop_shuffle())
        })
    ) {
        let (permuted, original) = instance.permute_rows(&order);
        let renumbered: BTreeSet<Vec<usize>> = permuted
            .search(permuted.build(&permuted.columns))
            .into_iter()
            .map(|solution| {
                let mut rows: Vec<_> = solution.into_iter().map(|row| original[row]).collect();
                rows.sort_unstable();
                rows
            })
            .collect();
        prop_assert_eq!(renumbered, instance.search(instance.build(&instance.columns)));
    }

    #[test]
    fn zero_slack_is_mandatory(mut instance in instance()) {
        instance.slacks.iter_mut().for_each(|slack| *slack = 0);
        let mandatory: Vec<_> = instance
            .columns
            .iter()
            .map(|(incidence, _)| (incidence.clone(), 0))
            .collect();
        let budgeted = instance.search(instance.build(&instance.columns));
        let strict = instance.search(instance.build(&mandatory));
        prop_assert_eq!(budgeted, strict);
    }

    #[test]
    fn selected_rows_are_forced(instance in instance(), pick in any::<prop::sample::Index>()) {
        let row = pick.index(instance.row_count());
        let mut solver = instance.build(&instance.columns);
        solver.select_row(row);
        let expected: BTreeSet<_> = instance
            .brute_force()
            .into_iter()
            .filter(|solution| solution.contains(&row))
            .collect();
        prop_assert_eq!(instance.search(solver), expected);
    }

    #[test]
    fn deselected_rows_are_excluded(instance in instance(), pick in any::<prop::sample::Index>()) {
        let row = pick.index(instance.row_count());
        let mut solver = instance.build(&instance.columns);
        solver.deselect_row(row);
        let expected: BTreeSet<_> = instance
            .brute_force()
            .into_iter()
            .filter(|solution| !solution.contains(&row))
            .collect();
        prop_assert_eq!(instance.search(solver), expected);
    }

    #[test]
    fn undo_select_restores_the_solver(instance in instance(), pick in any::<prop::sample::Index>()) {
        let row = pick.index(instance.row_count());
        let mut solver = instance.build(&instance.columns);
        let before = solver.clone();
        solver.select_row(row);
        solver.undo_select_row(row);
        prop_assert_eq!(solver, before);
    }
}

/// Returns the rows of [`queens`] whose square satisfies a predicate of its
/// rank and file.
fn rows_where(n: usize, on_line: impl Fn(usize, usize) -> bool) -> Vec<usize> {
    (0..n * n).filter(|&row| on_line(row / n, row % n)).collect()
}

/// Places a queen on every rank so that no two queens attack each other.
/// Files are mandatory columns; each direction of diagonals is a budget
/// group, since $n-1$ of its $2n-1$ lines stay empty.
fn queens(n: usize) -> DlSolver {
    let mut solver = DlSolver::new();
    for _ in 0..n {
        solver.add_rows(n);
    }
    for file in 0..n {
        solver.add_column(rows_where(n, |_, c| c == file));
    }
    let slack = n.saturating_sub(1);
    let (diagonals, anti_diagonals) = (solver.add_budget(slack), solver.add_budget(slack));
    for d in 0..(2 * n).saturating_sub(1) {
        solver.add_budgeted_column(rows_where(n, |r, c| r + n - 1 - c == d), diagonals);
        solver.add_budgeted_column(rows_where(n, |r, c| r + c == d), anti_diagonals);
    }
    solver
}

#[test]
fn eight_queens() {
    let mut count = 0;
    for solution in queens(8).solve() {
        assert_eq!(solution.len(), 8);
        let squares: Vec<_> = solution.iter().map(|row| (row / 8, row % 8)).collect();
        for (ix, &(r1, c1)) in squares.iter().enumerate() {
            for &(r2, c2) in &squares[ix + 1..] {
                assert_ne!(c1, c2);
                assert_ne!(r1 + c2, r2 + c1);
                assert_ne!(r1 + c1, r2 + c2);
            }
        }
        count += 1;
    }
    assert_eq!(count, 92);
}

#[test]
fn small_queens() {
    let counts: Vec<_> = (1..=6).map(|n| queens(n).solve().count()).collect();
    assert_eq!(counts, [1, 0, 0, 2, 10, 4]);
}
