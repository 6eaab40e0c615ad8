//! The following program finds all ways to put $2n$ numbers $\\{1,1,2,2,\dots,n,n\\}$
//! into $2n$ slots $s_1,\dots,s_{2n}$ so that there are exactly $i$ numbers
//! between the two appearances of $i$, for all $1\leq i\leq n$. This task is
//! known as _Langford's problem_, since it was first described by C. D. Langford
//! [[_The Mathematical Gazette_ 42 (October 1958), 228][mathgaz]]. Its encoding
//! as an exact cover problem is well explained in D. E. Knuth's book
//! [_The Art of Computer Programming_ 4B (2022)][taocp4b], Part 2, page 70.
//!
//! The legal placements of the number $i$ put it into slots $s_j$ and $s_k$,
//! where $1\leq j<k\leq 2n$ and $k=i+j+1$. All placements of the same number
//! form a row group, so every number is placed exactly once; and every slot
//! is a mandatory column, so it receives exactly one number.
//!
//! [mathgaz]: https://www.cambridge.org/core/journals/mathematical-gazette/article/abs/problem/557F7BBB739F5B3E0D152C270642B102
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4

use slack_covers::{DlSolver, Solver};

/// A Langford pair can exist only when $n$ is congruent to 0 or 3 modulo 4.
/// This is because the two entries of an odd number must either both go in
/// even or in odd positions, while the entries of an even number must fall
/// in positions of different parity. There are $\lfloor n/2\rfloor$ even
/// numbers in $\\{1,\dots,n\\}$, so $n-\lfloor n/2\rfloor=\lceil n/2\rceil$
/// positions of each parity remain available for the odd numbers. Since these
/// come in pairs that occupy positions of the same parity, $\lceil n/2\rceil$
/// must be an even number. This happens only if $n\equiv 0$ or $n\equiv 3$
/// (modulo 4).
const N: usize = 7;

fn main() {
    env_logger::init();

    let mut solver = DlSolver::new();
    // The slots $(j,k)$ occupied by each row.
    let mut placements = Vec::new();
    for i in 1..=N {
        // Optimization: half of the Langford pairs for a given value of $n$
        // are the reverses of the others. Reduce the search space by placing
        // the first 1 in position $1\leq s_j<n$.
        let first_slots = 1..if i == 1 { N } else { 2 * N - i };
        solver.add_rows(first_slots.len());
        placements.extend(first_slots.map(|j| (i, j, i + j + 1)));
    }
    for slot in 1..=2 * N {
        let rows: Vec<_> = placements
            .iter()
            .enumerate()
            .filter(|(_, &(_, j, k))| j == slot || k == slot)
            .map(|(row, _)| row)
            .collect();
        solver.add_column(rows);
    }

    let mut count = 0;
    for solution in solver.solve() {
        assert_eq!(solution.len(), N);
        // Convert the set of rows into the corresponding sequence.
        let mut sequence = [0usize; 2 * N];
        for row in solution {
            let (i, j, k) = placements[row];
            sequence[j - 1] = i;
            sequence[k - 1] = i;
        }
        // Print the found Langford sequence, and its reverse.
        println!("{sequence:?}");
        sequence.reverse();
        println!("{sequence:?}");
        count += 1;
    }
    assert_eq!(count, 26);
}
