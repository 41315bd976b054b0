//! Domino row chaining.

/// A domino tile. `(i, j)` may also be played as `(j, i)`.
pub type Domino = (u8, u8);

/// Returns true if every tile can be placed in a single row, adjacent halves
/// matching.
///
/// Greedy chain walk: seed the chain with the first tile, then repeatedly
/// sweep the remaining tiles, appending (flipped if needed) any tile whose
/// half matches the chain's open end, until a full sweep makes no progress.
/// The caller's slice is never modified; the walk works on its own copy of
/// the remaining tiles.
///
/// An empty set and a single tile both chain trivially.
pub fn can_chain(dominoes: &[Domino]) -> bool {
    let Some((&first, rest)) = dominoes.split_first() else {
        return true;
    };

    let mut remaining: Vec<Domino> = rest.to_vec();
    let mut tail = first;

    let mut progressed = true;
    while progressed && !remaining.is_empty() {
        progressed = false;
        let mut i = 0;
        while i < remaining.len() {
            let (x, y) = remaining[i];
            if tail.1 == x && tail.0 != y {
                tail = (x, y);
            } else if tail.1 == y && tail.0 != y {
                tail = (y, x);
            } else {
                i += 1;
                continue;
            }
            remaining.remove(i);
            progressed = true;
        }
    }

    remaining.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_examples() {
        assert!(can_chain(&[(0, 1), (1, 1)]));
        assert!(!can_chain(&[(1, 1), (2, 2), (1, 5), (5, 6), (6, 3)]));
        assert!(can_chain(&[(1, 3), (2, 3), (1, 4), (2, 4), (1, 5), (2, 5)]));
        assert!(!can_chain(&[
            (0, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ]));
    }

    #[test]
    fn tiles_may_be_flipped() {
        assert!(can_chain(&[(1, 2), (3, 2)]));
    }

    #[test]
    fn trivial_inputs_chain() {
        assert!(can_chain(&[]));
        assert!(can_chain(&[(4, 6)]));
    }

    #[test]
    fn caller_slice_is_untouched() {
        let tiles = vec![(0, 1), (1, 1)];
        let _ = can_chain(&tiles);
        assert_eq!(tiles, vec![(0, 1), (1, 1)]);
    }
}
