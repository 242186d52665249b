/// Iterator over every permutation of `0..n`, using Heap's algorithm.
///
/// The identity permutation comes first, and each following one differs from
/// the previous by a single swap. Produces exactly `n!` items (one empty
/// permutation for `n == 0`). The order is fixed for a given `n`.
#[derive(Debug, Clone)]
pub struct HeapPermutations {
    indices: Vec<usize>,
    counters: Vec<usize>,
    level: usize,
    started: bool,
}
impl HeapPermutations {
    pub fn new(n: usize) -> Self {
        HeapPermutations{
            indices: (0..n).collect(),
            counters: vec![0; n],
            level: 1,
            started: false,
        }
    }
}
impl Iterator for HeapPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        while self.level < self.indices.len() {
            let level = self.level;
            if self.counters[level] < level {
                if level % 2 == 0 {
                    self.indices.swap(0, level);
                } else {
                    self.indices.swap(self.counters[level], level);
                }
                self.counters[level] += 1;
                self.level = 1;
                return Some(self.indices.clone());
            }
            self.counters[level] = 0;
            self.level += 1;
        }
        None
    }
}

/// Number of permutations of `n` items, saturating at `usize::MAX`.
pub fn permutation_count(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}
