//! Sampling algorithms for display-scale working sets
//!
//! Charts that cannot draw the whole population work on a bounded subset.
//! Two modes exist: a uniform random sample without replacement, and a
//! plain prefix of the dataset where only speed matters. Neither mode
//! stratifies by age or outcome.

use std::fmt;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::models::HealthRecord;

/// How to pick the records of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Uniform draw of N records without replacement
    Random,
    /// Take the first N records in dataset order
    Prefix,
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

/// Views that draw a sample rather than the full population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayView {
    /// Age-clustered star map
    Constellation,
    /// General-purpose representative subset
    Representative,
    /// Risk score by age scatter plot
    Scatter,
}

/// Per-view sample caps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCaps {
    /// Cap for the constellation view
    pub constellation: usize,
    /// Cap for representative samples
    pub representative: usize,
    /// Cap for the scatter plot
    pub scatter: usize,
}

impl Default for SampleCaps {
    fn default() -> Self {
        Self {
            constellation: 500,
            representative: 3000,
            scatter: 5000,
        }
    }
}

impl SampleCaps {
    /// Sample size and mode for a view
    #[must_use]
    pub const fn plan(&self, view: DisplayView) -> (usize, SampleMode) {
        match view {
            DisplayView::Constellation => (self.constellation, SampleMode::Random),
            DisplayView::Representative => (self.representative, SampleMode::Random),
            DisplayView::Scatter => (self.scatter, SampleMode::Prefix),
        }
    }
}

/// Draw up to `sample_count` records
///
/// If `sample_count` is at least the population size every record is
/// returned: a permutation in random mode, the original order in prefix
/// mode. Records are returned by value so callers can reposition them for
/// rendering without touching the shared dataset.
pub fn sample_records<R: Rng + ?Sized>(
    records: &[HealthRecord],
    sample_count: usize,
    mode: SampleMode,
    rng: &mut R,
) -> Vec<HealthRecord> {
    if records.is_empty() {
        log::warn!("No data available for sampling");
        return Vec::new();
    }

    let take = sample_count.min(records.len());
    let sample = match mode {
        SampleMode::Prefix => records[..take].to_vec(),
        SampleMode::Random if take == records.len() => {
            let mut shuffled = records.to_vec();
            shuffled.shuffle(rng);
            shuffled
        }
        SampleMode::Random => records.choose_multiple(rng, take).copied().collect(),
    };

    log::debug!(
        "Created {mode} sample of {} from {} records",
        sample.len(),
        records.len()
    );
    sample
}

/// Stateful sampler owning its random number generator
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler, seeded for reproducibility when `seed` is given
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed_value) => StdRng::seed_from_u64(seed_value),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Draw a fresh sample; every call re-samples
    pub fn sample(
        &mut self,
        records: &[HealthRecord],
        sample_count: usize,
        mode: SampleMode,
    ) -> Vec<HealthRecord> {
        sample_records(records, sample_count, mode, &mut self.rng)
    }
}
