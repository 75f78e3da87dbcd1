//! Synthetic survey population
//!
//! Generates a demonstration dataset with the same record shape as the
//! survey when no data file can be loaded. Condition probabilities rise
//! with age, and the diabetes probability rises with the number of risk
//! factors, so the charts and the similarity query stay meaningful.

use std::fmt;

use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::models::{
    DiabetesStatus, Gender, HealthRecord, RecordAttributes, RecordId, age_for_bracket,
};

/// Configuration for synthetic data generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Number of records to generate
    pub record_count: usize,
    /// Seed for reproducible output; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            record_count: 10_000,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    /// Set the number of generated records
    #[must_use]
    pub const fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    /// Fix the generator seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl fmt::Display for SyntheticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} synthetic records", self.record_count)?;
        if let Some(seed) = self.seed {
            write!(f, " (seed {seed})")?;
        }
        Ok(())
    }
}

fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

fn synthetic_attributes<R: Rng + ?Sized>(rng: &mut R) -> RecordAttributes {
    let age_bracket: i32 = rng.random_range(1..=13);
    let age_factor = f64::from(age_for_bracket(age_bracket)) / 100.0;
    let bmi = 18.0 + rng.random::<f64>() * 27.0;

    let high_blood_pressure = chance(rng, 0.2 + age_factor * 0.3);
    let high_cholesterol = chance(rng, 0.2 + age_factor * 0.2);
    let smoker = chance(rng, 0.15);
    let no_exercise = chance(rng, 0.3 + age_factor * 0.2);
    let heart_disease = chance(rng, 0.05 + age_factor * 0.15);
    let stroke = chance(rng, 0.02 + age_factor * 0.08);

    let risk_count = [
        high_blood_pressure,
        high_cholesterol,
        smoker,
        no_exercise,
        heart_disease,
        stroke,
        bmi > 30.0,
    ]
    .into_iter()
    .filter(|present| *present)
    .count();
    let diabetes_probability = 0.05 + risk_count as f64 * 0.08 + age_factor * 0.1;
    let diabetes_status = if chance(rng, diabetes_probability) {
        if chance(rng, 0.7) {
            DiabetesStatus::Diabetes
        } else {
            DiabetesStatus::Prediabetes
        }
    } else {
        DiabetesStatus::None
    };

    RecordAttributes {
        diabetes_status,
        age_bracket,
        bmi,
        gender: if chance(rng, 0.5) { Gender::Male } else { Gender::Female },
        high_blood_pressure,
        high_cholesterol,
        smoker,
        no_exercise,
        heart_disease,
        stroke,
        general_health: rng.random_range(1..=5),
        mental_health_days: rng.random_range(0..=30),
        physical_health_days: rng.random_range(0..=30),
        difficulty_walking: chance(rng, 0.1 + age_factor * 0.2),
        eats_fruit: chance(rng, 0.6),
        eats_veggies: chance(rng, 0.7),
        heavy_alcohol: chance(rng, 0.05),
    }
}

/// Generate a synthetic, fully scored population
#[must_use]
pub fn generate_synthetic(config: &SyntheticConfig) -> Vec<HealthRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("Generating {config} for demonstration");
    (0..config.record_count)
        .map(|i| {
            let id = RecordId(u32::try_from(i).unwrap_or(u32::MAX));
            HealthRecord::new(id, synthetic_attributes(&mut rng))
        })
        .collect()
}
