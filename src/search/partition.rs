//! Lazy set-partition generator.
//!
//! Enumerates every way to split the index set `0..n` into non-empty,
//! disjoint groups, bounded by a maximum group count. Encoded as restricted
//! growth strings: a code `c` where `c[0] = 0` and
//! `c[i] <= max(c[..i]) + 1`, advanced in lexicographic order, so the
//! enumeration is deterministic and the fleet search can be bounded and
//! tested independently of the per-group route search.

/// Iterator over the partitions of `0..n` into at most `max_groups`
/// non-empty groups.
///
/// Each item lists the groups in order of first appearance; within a group,
/// indices ascend. The number of items is a sum of Stirling numbers of the
/// second kind, so keep `n` small.
///
/// # Examples
///
/// ```
/// use van_routing::search::Partitions;
///
/// let parts: Vec<_> = Partitions::new(3, 2).collect();
/// assert_eq!(parts, vec![
///     vec![vec![0, 1, 2]],
///     vec![vec![0, 1], vec![2]],
///     vec![vec![0, 2], vec![1]],
///     vec![vec![0], vec![1, 2]],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Partitions {
    n: usize,
    max_groups: usize,
    codes: Vec<usize>,
    /// `maxes[i]` is the largest code among `codes[..=i]`.
    maxes: Vec<usize>,
    done: bool,
}

impl Partitions {
    /// Creates the generator for `0..n` with at most `max_groups` groups.
    pub fn new(n: usize, max_groups: usize) -> Self {
        Self {
            n,
            max_groups,
            codes: vec![0; n],
            maxes: vec![0; n],
            done: n > 0 && max_groups == 0,
        }
    }

    fn emit(&self) -> Vec<Vec<usize>> {
        let group_count = if self.n == 0 { 0 } else { self.maxes[self.n - 1] + 1 };
        let mut groups = vec![Vec::new(); group_count];
        for (index, &code) in self.codes.iter().enumerate() {
            groups[code].push(index);
        }
        groups
    }

    fn advance(&mut self) {
        // Find the rightmost position whose code can grow without breaking
        // the growth rule or the group bound, reset everything after it.
        for i in (1..self.n).rev() {
            let ceiling = (self.maxes[i - 1] + 1).min(self.max_groups - 1);
            if self.codes[i] < ceiling {
                self.codes[i] += 1;
                self.maxes[i] = self.maxes[i - 1].max(self.codes[i]);
                for j in (i + 1)..self.n {
                    self.codes[j] = 0;
                    self.maxes[j] = self.maxes[j - 1];
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Partitions {
    type Item = Vec<Vec<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let groups = self.emit();
        if self.n == 0 {
            self.done = true;
        } else {
            self.advance();
        }
        Some(groups)
    }
}
