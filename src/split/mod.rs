//! Deterministic train/val/test partitioning.
//!
//! The partitioner performs a two-stage seeded split: the test share is
//! withheld from the full set first, then the validation share is taken
//! from the remainder with a normalized fraction so that the *absolute*
//! validation share of the original set equals `val_fraction`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::SplitError;

/// A disjoint train/val/test partition of sample identifiers.
///
/// The three sequences are pairwise disjoint and their union equals the
/// input sample set; every sample lands in exactly one split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub train: Vec<String>,
    pub val: Vec<String>,
    pub test: Vec<String>,
}

impl Partition {
    /// Total number of samples across all three splits.
    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    /// The splits paired with their directory names, in copy order.
    pub fn splits(&self) -> [(&'static str, &[String]); 3] {
        [
            ("train", self.train.as_slice()),
            ("val", self.val.as_slice()),
            ("test", self.test.as_slice()),
        ]
    }
}

/// Validate split fractions before running.
///
/// Both fractions must lie in the open interval (0, 1) and sum to strictly
/// less than 1. Zero is rejected: a split that can never receive samples is
/// a configuration mistake, not a degenerate request.
pub fn validate_fractions(val_fraction: f64, test_fraction: f64) -> Result<(), SplitError> {
    for (name, value) in [("val_size", val_fraction), ("test_size", test_fraction)] {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(SplitError::InvalidFraction { name, value });
        }
    }

    if val_fraction + test_fraction >= 1.0 {
        return Err(SplitError::InvalidFraction {
            name: "val_size + test_size",
            value: val_fraction + test_fraction,
        });
    }

    Ok(())
}

/// Partition sample identifiers into train/val/test sets.
///
/// Identical samples, fractions and seed always yield the identical
/// partition (order and membership), independent of input ordering: the
/// pool is sorted before the seeded shuffle so the outcome depends only on
/// set membership.
pub fn partition(
    samples: &[String],
    val_fraction: f64,
    test_fraction: f64,
    seed: u64,
) -> Result<Partition, SplitError> {
    validate_fractions(val_fraction, test_fraction)?;

    if samples.is_empty() {
        return Err(SplitError::EmptyInput);
    }

    let mut pool: Vec<String> = samples.to_vec();
    pool.sort();

    let mut rng = StdRng::seed_from_u64(seed);
    pool.shuffle(&mut rng);

    let n = pool.len();
    let test_count = ((n as f64) * test_fraction).ceil() as usize;
    let test_count = test_count.min(n);

    let remaining = n - test_count;
    // Normalize against the already-reduced pool so the absolute val share
    // of the original set equals val_fraction.
    let val_share = val_fraction / (1.0 - test_fraction);
    let val_count = ((remaining as f64) * val_share).ceil() as usize;
    let val_count = val_count.min(remaining);

    let test: Vec<String> = pool.drain(..test_count).collect();
    let val: Vec<String> = pool.drain(..val_count).collect();

    Ok(Partition {
        train: pool,
        val,
        test,
    })
}
