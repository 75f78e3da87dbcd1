//! Engine configuration
//!
//! Plain structs with defaults and builder-style overrides. The binary maps
//! its command line flags onto these.

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::sampling::SampleCaps;
use crate::algorithm::similarity::SimilarityCriteria;
use crate::survey::SyntheticConfig;

/// File name of the survey extract
pub const SURVEY_FILE_NAME: &str = "diabetes_012_health_indicators_BRFSS2015.csv";

/// Candidate locations of the survey file, tried in order
#[must_use]
pub fn default_candidate_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(SURVEY_FILE_NAME),
        PathBuf::from(format!("./{SURVEY_FILE_NAME}")),
        PathBuf::from("data").join(SURVEY_FILE_NAME),
        PathBuf::from("..").join(SURVEY_FILE_NAME),
    ]
}

/// Configuration for the dataset loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Paths tried in order; the first yielding any record wins
    pub candidate_paths: Vec<PathBuf>,
    /// Show a progress bar while normalizing
    pub show_progress: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            candidate_paths: default_candidate_paths(),
            show_progress: false,
        }
    }
}

impl LoaderConfig {
    /// Replace the candidate paths
    #[must_use]
    pub fn with_candidate_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidate_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Try `path` before every other candidate
    #[must_use]
    pub fn with_preferred_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidate_paths.insert(0, path.into());
        self
    }

    /// Enable or disable the normalization progress bar
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl fmt::Display for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} candidate paths", self.candidate_paths.len())?;
        for path in &self.candidate_paths {
            write!(f, "\n  - {}", path.display())?;
        }
        Ok(())
    }
}

/// Top-level configuration for a dashboard session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    /// Dataset loading
    pub loader: LoaderConfig,
    /// Fallback generator
    pub synthetic: SyntheticConfig,
    /// Similar-profile windows
    pub similarity: SimilarityCriteria,
    /// Per-view sample caps
    pub sample_caps: SampleCaps,
    /// Seed for the session sampler; OS entropy when `None`
    pub sample_seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration with every default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loader configuration
    #[must_use]
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    /// Set the synthetic generator configuration
    #[must_use]
    pub fn with_synthetic(mut self, synthetic: SyntheticConfig) -> Self {
        self.synthetic = synthetic;
        self
    }

    /// Set the similarity windows
    #[must_use]
    pub fn with_similarity(mut self, similarity: SimilarityCriteria) -> Self {
        self.similarity = similarity;
        self
    }

    /// Set the sample caps
    #[must_use]
    pub fn with_sample_caps(mut self, sample_caps: SampleCaps) -> Self {
        self.sample_caps = sample_caps;
        self
    }

    /// Seed both the sampler and the synthetic generator
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sample_seed = Some(seed);
        self.synthetic = self.synthetic.with_seed(seed);
        self
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loader: {}", self.loader)?;
        writeln!(f, "Fallback: {}", self.synthetic)?;
        writeln!(f, "Similarity: {}", self.similarity)?;
        write!(
            f,
            "Sample caps: constellation {}, representative {}, scatter {}",
            self.sample_caps.constellation,
            self.sample_caps.representative,
            self.sample_caps.scatter
        )
    }
}
