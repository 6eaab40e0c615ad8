//! The following program counts the ways to place $n$ queens on an $n\times n$
//! chessboard so that no two of them attack each other.
//!
//! Every rank and every file must hold exactly one queen, but only $n$ of the
//! $2n-1$ diagonals in each direction can be occupied. In D. E. Knuth's
//! formulation [_The Art of Computer Programming_ 4B (2022), Part 2, page 71]
//! the diagonals are secondary items. Here they are budgeted columns instead:
//! each direction forms a budget group of slack $n-1$, because exactly $n-1$
//! of its diagonals stay empty in every solution. The search then knows that
//! once $n-1$ diagonals of a direction have been ruled out, all the others
//! must be used.

use slack_covers::{DlSolver, Solver};

/// The size $n$ of the board.
const N: usize = 8;

/// Returns the rows whose queen stands on a square that satisfies the
/// given predicate of its rank and file.
fn rows_where(on_line: impl Fn(usize, usize) -> bool) -> Vec<usize> {
    (0..N * N).filter(|row| on_line(row / N, row % N)).collect()
}

fn main() {
    env_logger::init();

    let mut solver = DlSolver::new();
    // The queen in row `r*N + c` stands on rank $r$ and file $c$. The
    // placements on each rank form a row group.
    for _ in 0..N {
        solver.add_rows(N);
    }

    for file in 0..N {
        solver.add_column(rows_where(|_, c| c == file));
    }
    let (diagonals, anti_diagonals) = (solver.add_budget(N - 1), solver.add_budget(N - 1));
    for d in 0..2 * N - 1 {
        solver.add_budgeted_column(rows_where(|r, c| r + N - 1 - c == d), diagonals);
        solver.add_budgeted_column(rows_where(|r, c| r + c == d), anti_diagonals);
    }

    let mut solutions = solver.solve();
    let first = solutions.next().expect("the board should admit a solution");
    for row in &first {
        let file = row % N;
        let line: String = (0..N).map(|c| if c == file { 'Q' } else { '.' }).collect();
        println!("{line}");
    }
    let count = 1 + solutions.count();
    println!("{count} solutions");
    assert_eq!(count, 92);
}
