//! Seedable user sampling.
//!
//! Sampling is deterministic for a fixed seed so runs can be reproduced and
//! tests can pin their expectations.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Sample up to `count` users without replacement.
///
/// The same `(users, count, seed)` triple always yields the same sample in
/// the same order. Asking for more users than exist yields all of them.
///
/// # Examples
/// ```
/// use bookscout_data::sample_users;
///
/// let users = [1, 2, 3, 4, 5];
/// let first = sample_users(&users, 2, 7);
/// let second = sample_users(&users, 2, 7);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn sample_users(users: &[u64], count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    users.choose_multiple(&mut rng, count).copied().collect()
}
