// finder.rs
// ──────────────────────────────────────────────────────────────────────────────
// Exhaustive backtracking search for a snaking word.  Every cell matching the
// word's first character is a candidate head; from each head the path is
// extended one character at a time through unvisited 4-neighbors.  The trace
// of visited cells models the snake's body: cells are marked before the
// recursive call and unmarked after it returns, so each candidate path sees
// exactly its own body.
//
// Worst case is exponential in word length; fine for puzzle-sized grids.
// ──────────────────────────────────────────────────────────────────────────────

use super::grid::Grid;

/// Returns true if `word` occurs in `grid` as a snaking path.
pub(super) fn find(grid: &Grid, word: &str) -> bool {
    let target: Vec<char> = word.chars().collect();
    if target.is_empty() {
        return true;
    }

    let mut trace = vec![false; grid.cell_count()];
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.at(row, col) != target[0] {
                continue;
            }
            trace[grid.index(row, col)] = true;
            let found = extend(grid, &target[1..], (row, col), &mut trace);
            trace[grid.index(row, col)] = false;
            if found {
                return true;
            }
        }
    }
    false
}

/// Tries to match `remaining` starting from the neighbors of `head`.
///
/// `trace` holds the cells already on the path, `head` included.  An empty
/// `remaining` means every character matched: the path is complete.
fn extend(grid: &Grid, remaining: &[char], head: (usize, usize), trace: &mut Vec<bool>) -> bool {
    let Some(&next_char) = remaining.first() else {
        return true;
    };

    for (row, col) in grid.neighbors(head.0, head.1) {
        let index = grid.index(row, col);
        if trace[index] || grid.at(row, col) != next_char {
            continue;
        }
        trace[index] = true;
        let found = extend(grid, &remaining[1..], (row, col), trace);
        trace[index] = false;
        if found {
            return true;
        }
    }
    false
}
