//! Exhaustive pair enumeration.
//!
//! Every unordered pair of input positions is produced exactly once, with the
//! first index held fixed while the second advances.

/// Number of unordered pairs over `n` items: n·(n−1)/2.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Produce every unordered pair of `items` in positional order.
///
/// For `[a, b, c]` this yields `(a, b), (a, c), (b, c)`. Empty and
/// single-element inputs yield nothing.
pub fn enumerate_pairs<T>(items: &[T]) -> Vec<(&T, &T)> {
    let mut pairs = Vec::with_capacity(pair_count(items.len()));
    for (i, first) in items.iter().enumerate() {
        for second in &items[i + 1..] {
            pairs.push((first, second));
        }
    }
    pairs
}
