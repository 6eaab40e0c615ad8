//! This program packs the twelve pentominoes into a $6\times10$ rectangle.
//! The pieces were named and popularized by S. W. Golomb in his book
//! _Polyominoes_ (Scribner, 1965); C. B. Haselgrove and J. Haselgrove first
//! showed that the rectangle has 2339 essentially different packings
//! [_Eureka_ **23** (1960), 16–18].
//!
//! Every packing is found four times, once for each of its images under the
//! symmetries of the rectangle. The first packing is drawn with box-drawing
//! characters, and the pieces are labeled from `A` to `L` in the order below.
//! Run with `RUST_LOG=debug` to see the size of the generated problem.

use slack_covers::tiling::{Board, Error, Polyomino, Puzzle, Symmetry};
use slack_covers::{DlSolver, Solver};

const PIECES: [&[&str]; 12] = [
    &["xxxxx"],
    &["x___", "xxxx"],
    &["_x__", "xxxx"],
    &["xx_", "xxx"],
    &["x_x", "xxx"],
    &["__xx", "xxx_"],
    &["x__", "x__", "xxx"],
    &["_x_", "_x_", "xxx"],
    &["_x_", "xxx", "_x_"],
    &["x__", "xxx", "_x_"],
    &["__x", "xxx", "x__"],
    &["x__", "xx_", "_xx"],
];

fn main() -> Result<(), Error> {
    env_logger::init();

    let puzzle = Puzzle {
        board: Board::rectangle(6, 10)?,
        pieces: PIECES
            .iter()
            .map(|lines| Polyomino::parse(lines))
            .collect::<Result<_, _>>()?,
        symmetry: Symmetry::ALL,
    };

    let mut count = 0;
    for tiling in puzzle.solve(DlSolver::new())? {
        if count == 0 {
            print!("{}", puzzle.board.draw(&tiling));
        }
        count += 1;
    }
    println!("{count} packings ({} up to symmetry)", count / 4);
    assert_eq!(count, 4 * 2339);
    Ok(())
}
