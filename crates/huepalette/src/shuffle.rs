//! Shuffling colors so that every light changes.
//!
//! A plain shuffle may leave some lights with the color they already have,
//! which looks like nothing happened. Hence [`Shuffler`] produces
//! *derangements*, i.e., permutations without fixed points, where values are
//! compared by equality rather than position. If several lights share a color,
//! none of them may end up with that color again.
//!
//! The shuffler first tries rejection sampling: It shuffles uniformly and
//! accepts the first permutation without fixed points. For distinct values,
//! about 1/e of all permutations qualify, so this terminates quickly. With
//! repeated values, qualifying permutations can become rare, and if there are
//! none at all, rejection sampling would never terminate. The shuffler
//! therefore checks feasibility upfront and, once its attempts are exhausted,
//! falls back onto constructing a derangement.

use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::opt::{Options, DEFAULT_SHUFFLE_ATTEMPTS};

/// Determine whether the permuted values have no fixed points relative to the
/// original values.
///
/// This function returns `false` if the two slices differ in length.
pub fn is_derangement<T: PartialEq>(original: &[T], permuted: &[T]) -> bool {
    original.len() == permuted.len() && original.iter().zip(permuted).all(|(a, b)| a != b)
}

/// Group the indices of equal values, in order of first occurrence.
fn group_indices<T: PartialEq>(values: &[T]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if let Some(group) = groups.iter_mut().find(|g| values[g[0]] == *value) {
            group.push(index);
        } else {
            groups.push(vec![index]);
        }
    }
    groups
}

/// A shuffler producing derangements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shuffler {
    max_attempts: usize,
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_ATTEMPTS)
    }
}

impl Shuffler {
    /// Create a new shuffler that tries at most the given number of random
    /// permutations before constructing a derangement.
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Create a new shuffler with the options' number of attempts.
    pub fn with_options(options: &Options) -> Self {
        Self::new(options.max_shuffle_attempts())
    }

    /// Get the maximum number of random permutations tried.
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shuffle the values so that no position retains its value.
    ///
    /// The result is a permutation of the input. It is returned unchanged if
    /// there are fewer than two values, if all values are equal, or if one
    /// value occupies more than half the positions, since no derangement
    /// exists in these cases. Otherwise, no position of the result holds a
    /// value equal to the input's value at that position.
    ///
    /// ```
    /// # use huepalette::{is_derangement, Shuffler};
    /// # use rand::SeedableRng;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(665);
    /// let colors = ["red", "green", "blue", "red"];
    /// let shuffled = Shuffler::default().shuffle(&colors, &mut rng);
    /// assert!(is_derangement(&colors, &shuffled));
    /// ```
    pub fn shuffle<T, R>(&self, values: &[T], rng: &mut R) -> Vec<T>
    where
        T: Clone + PartialEq,
        R: Rng,
    {
        let length = values.len();
        if length <= 1 {
            return values.to_vec();
        }

        let mut groups = group_indices(values);
        if groups.len() == 1 {
            trace!("all {} values are equal, nothing to shuffle", length);
            return values.to_vec();
        }

        let multiplicity = groups.iter().map(Vec::len).max().unwrap_or(0);
        if length < 2 * multiplicity {
            warn!(
                "cannot derange {} values when one of them repeats {} times",
                length, multiplicity
            );
            return values.to_vec();
        }

        let mut candidate = values.to_vec();
        for attempt in 1..=self.max_attempts {
            candidate.shuffle(rng);
            if is_derangement(values, &candidate) {
                trace!("found derangement after {} attempt(s)", attempt);
                return candidate;
            }
        }

        debug!(
            "constructing derangement after {} failed attempts",
            self.max_attempts
        );

        // Lay out the groups back to back, then move each value forward by
        // the largest group's size. That never lands a value in its own
        // group as long as no group exceeds half the length.
        groups.shuffle(rng);
        for group in groups.iter_mut() {
            group.shuffle(rng);
        }
        let order = groups.concat();

        let mut result = values.to_vec();
        for (index, position) in order.iter().enumerate() {
            let source = order[(index + multiplicity) % length];
            result[*position] = values[source].clone();
        }
        result
    }
}

/// Shuffle the values so that no position retains its value, using the
/// default number of attempts.
///
/// See [`Shuffler::shuffle`] for details.
pub fn shuffle<T, R>(values: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng,
{
    Shuffler::default().shuffle(values, rng)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{group_indices, is_derangement, shuffle, Shuffler};

    fn is_permutation(original: &[u8], permuted: &[u8]) -> bool {
        let mut a = original.to_vec();
        let mut b = permuted.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn test_is_derangement() {
        assert!(is_derangement(&[1, 2, 3], &[2, 3, 1]));
        assert!(!is_derangement(&[1, 2, 3], &[2, 1, 3]));
        assert!(!is_derangement(&[1, 2, 3], &[2, 3]));
        assert!(is_derangement::<u8>(&[], &[]));
    }

    #[test]
    fn test_group_indices() {
        assert_eq!(
            group_indices(&['a', 'b', 'a', 'c', 'b']),
            vec![vec![0, 2], vec![1, 4], vec![3]]
        );
    }

    #[test]
    fn test_distinct() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = [1, 2, 3];
            let shuffled = shuffle(&values, &mut rng);
            assert!(is_permutation(&values, &shuffled), "{:?} is no permutation", shuffled);
            assert!(is_derangement(&values, &shuffled), "{:?} has fixed points", shuffled);
        }
    }

    #[test]
    fn test_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffle::<u8, _>(&[], &mut rng), Vec::<u8>::new());
        assert_eq!(shuffle(&[7], &mut rng), [7]);
        assert_eq!(shuffle(&[4, 4, 4, 4], &mut rng), [4, 4, 4, 4]);

        // No derangement exists.
        assert_eq!(shuffle(&['A', 'A', 'B'], &mut rng), ['A', 'A', 'B']);
        assert_eq!(shuffle(&[1, 2, 1, 1, 3, 1], &mut rng), [1, 2, 1, 1, 3, 1]);
    }

    #[test]
    fn test_repeated_values() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let values = [1, 1, 2, 2, 3, 3, 3];
            let shuffled = shuffle(&values, &mut rng);
            assert!(is_permutation(&values, &shuffled), "{:?} is no permutation", shuffled);
            assert!(is_derangement(&values, &shuffled), "{:?} has fixed points", shuffled);
        }
    }

    #[test]
    fn test_constructed() {
        let shuffler = Shuffler::new(0);
        for values in [
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 1, 2, 2],
            vec![5, 5, 5, 6, 7, 8],
            vec![1, 2, 1, 3, 1, 4, 2, 5],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        ] {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let shuffled = shuffler.shuffle(&values, &mut rng);
                assert!(is_permutation(&values, &shuffled), "{:?} is no permutation", shuffled);
                assert!(is_derangement(&values, &shuffled), "{:?} has fixed points", shuffled);
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let values = [10, 20, 30, 40, 50];
        let first = shuffle(&values, &mut StdRng::seed_from_u64(99));
        let second = shuffle(&values, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
