//! A backtracking n-queens solver driving a [`Sequence`] as a stack.
//!
//! Each placed queen is a column pushed at the front; the row is the
//! position in the stack. Conflict checks only need read-only front-to-back
//! traversal, and backtracking pops with `remove_current`.

use cursor_seq::Sequence;

const BOARD_SIZE: i32 = 8;

fn conflicts(placed: &Sequence<i32>, column: i32) -> bool {
    // the stack holds the most recent queen first, so the distance from the
    // front is the row distance
    placed
        .iter()
        .zip(1..)
        .any(|(&other, rows_apart)| other == column || (other - column).abs() == rows_apart)
}

fn solve(placed: &mut Sequence<i32>) -> bool {
    if placed.len() as i32 == BOARD_SIZE {
        return true;
    }

    for column in 0..BOARD_SIZE {
        if conflicts(placed, column) {
            continue;
        }

        placed.add_first(column);
        if solve(placed) {
            return true;
        }
        // backtrack: the pushed column is the current element
        placed.remove_current().unwrap();
    }

    false
}

#[cfg_attr(test, test)]
fn main() {
    let mut placed = Sequence::new();
    let solved = solve(&mut placed);
    assert!(solved);
    assert_eq!(placed.len() as i32, BOARD_SIZE);

    // the stack holds the columns from the last row up
    let columns: Vec<i32> = placed.iter().copied().collect();
    for (row, column) in columns.iter().rev().enumerate() {
        println!("row {row}: column {column}");
    }
}
