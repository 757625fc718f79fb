// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Randomly shuffles samples and splits them into two sets:
//   - Training set:   used to update model weights
//   - Validation set: used to measure performance on unseen data
//
// Why shuffle before splitting?
//   TSV files are often ordered (e.g. by query template).
//   Without shuffling, the validation set would only contain
//   the templates at the end of the file. Shuffling ensures
//   both sets have a representative mix.
//
// Split ratio: first floor(fraction * n) samples go to
// training, the remainder to validation. The floor matters:
// a 10-example domain at 0.8 must give exactly 8/2.
//
// The RNG is passed in explicitly instead of seeding global
// state — the caller seeds one StdRng per run, so the same
// seed always reproduces the same split.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// the standard unbiased shuffle algorithm.
//
// Reference: rand crate documentation
//            Rust Book §8 (Vectors)

use rand::{seq::SliceRandom, Rng};

/// Shuffle `samples` with the given RNG and split into
/// (train, validation) at floor(train_fraction * n).
///
/// # Example
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(666);
/// let (train, val) = split_train_val(examples, 0.8, &mut rng);
/// ```
pub fn split_train_val<T, R: Rng>(
    mut samples:    Vec<T>,
    train_fraction: f64,
    rng:            &mut R,
) -> (Vec<T>, Vec<T>) {
    // Fisher-Yates shuffle — every permutation is equally likely
    samples.shuffle(rng);

    // floor(n * fraction): the `as usize` cast truncates,
    // which is floor for non-negative values
    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction) as usize;

    // Clamp to valid range to avoid panics on odd fractions
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] and returns them
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len(),
    );

    (samples, val)
}
