//! Permutation generation via Heap's algorithm.

/// Lazy iterator over all permutations of a string's characters.
///
/// Iterative form of Heap's algorithm: one swap per step, so each call to
/// `next` produces the following permutation in O(n) (the string rebuild)
/// without materializing the rest. Assumes the characters are distinct;
/// repeated characters yield repeated permutations.
pub struct Permutations {
    items: Vec<char>,
    counters: Vec<usize>,
    level: usize,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    /// Permutations of the characters of `chars`.
    ///
    /// The empty string has exactly one permutation: itself.
    pub fn of(chars: &str) -> Self {
        let items: Vec<char> = chars.chars().collect();
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            level: 1,
            started: false,
            exhausted: false,
        }
    }

    fn current(&self) -> String {
        self.items.iter().collect()
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        while self.level < self.items.len() {
            if self.counters[self.level] < self.level {
                if self.level % 2 == 0 {
                    self.items.swap(0, self.level);
                } else {
                    self.items.swap(self.counters[self.level], self.level);
                }
                self.counters[self.level] += 1;
                self.level = 1;
                return Some(self.current());
            }
            self.counters[self.level] = 0;
            self.level += 1;
        }

        self.exhausted = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn two_chars() {
        let all: HashSet<String> = Permutations::of("ab").collect();
        let expected: HashSet<String> = ["ab", "ba"].iter().map(|s| s.to_string()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn three_chars() {
        let all: HashSet<String> = Permutations::of("abc").collect();
        let expected: HashSet<String> = ["abc", "acb", "bac", "bca", "cab", "cba"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(Permutations::of("").count(), 1);
        assert_eq!(Permutations::of("x").count(), 1);
        assert_eq!(Permutations::of("abcd").count(), 24);
        assert_eq!(Permutations::of("abcde").count(), 120);
    }

    #[test]
    fn five_chars_are_all_distinct() {
        let all: HashSet<String> = Permutations::of("abcde").collect();
        assert_eq!(all.len(), 120);
    }
}
