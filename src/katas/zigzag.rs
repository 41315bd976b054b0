//! JPEG-style zigzag traversal order.

/// Returns an `n` x `n` matrix whose entries are the visit order of the
/// JPEG zigzag path: start at the top-left corner, sweep anti-diagonals,
/// alternating direction on each.
///
/// `zigzag_matrix(0)` is the empty matrix.
pub fn zigzag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0usize; n]; n];
    let (mut row, mut col) = (0usize, 0usize);

    for step in 0..n * n {
        matrix[row][col] = step;
        if (row + col) % 2 == 0 {
            // Moving up-right along the anti-diagonal.
            if col + 1 < n {
                col += 1;
            } else {
                row += 2;
            }
            row = row.saturating_sub(1);
        } else {
            // Moving down-left.
            if row + 1 < n {
                row += 1;
            } else {
                col += 2;
            }
            col = col.saturating_sub(1);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_matrices_match_the_reference_path() {
        assert_eq!(zigzag_matrix(1), vec![vec![0]]);
        assert_eq!(zigzag_matrix(2), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(
            zigzag_matrix(3),
            vec![vec![0, 1, 5], vec![2, 4, 6], vec![3, 7, 8]]
        );
        assert_eq!(
            zigzag_matrix(4),
            vec![
                vec![0, 1, 5, 6],
                vec![2, 4, 7, 12],
                vec![3, 8, 11, 13],
                vec![9, 10, 14, 15],
            ]
        );
    }

    #[test]
    fn every_step_appears_exactly_once() {
        let n = 7;
        let matrix = zigzag_matrix(n);
        let mut seen = vec![false; n * n];
        for row in &matrix {
            for &value in row {
                assert!(!seen[value]);
                seen[value] = true;
            }
        }
    }

    #[test]
    fn zero_is_empty() {
        assert!(zigzag_matrix(0).is_empty());
    }
}
