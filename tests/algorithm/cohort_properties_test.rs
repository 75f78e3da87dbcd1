use diabetes_risk::algorithm::cohort::{
    age_outcome_breakdown, condition_prevalence, max_risk_score, risk_histogram,
    summary_statistics,
};
use diabetes_risk::{DiabetesStatus, Gender, HealthRecord, SampleMode, Sampler};
use proptest::prelude::*;

use crate::utils::record;

fn records_strategy() -> impl Strategy<Value = Vec<HealthRecord>> {
    prop::collection::vec((0..15i32, 15.0..50.0f64, any::<bool>(), 0..3u8), 0..200).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (bracket, bmi, male, status))| {
                    let gender = if male { Gender::Male } else { Gender::Female };
                    let status = match status {
                        0 => DiabetesStatus::None,
                        1 => DiabetesStatus::Prediabetes,
                        _ => DiabetesStatus::Diabetes,
                    };
                    record(i as u32, bracket, bmi, gender, status)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn summary_rates_are_bounded(records in records_strategy()) {
        let summary = summary_statistics(&records);
        prop_assert_eq!(summary.total, records.len());
        for pct in [summary.diabetes_pct, summary.prediabetes_pct, summary.high_risk_pct] {
            prop_assert!((0.0..=100.0).contains(&pct));
        }
        prop_assert!(summary.diabetes_pct + summary.prediabetes_pct <= 100.0 + 1e-9);
        let diabetic = records
            .iter()
            .filter(|r| r.diabetes_status() == DiabetesStatus::Diabetes)
            .count();
        prop_assert_eq!(summary.diabetes_count, diabetic);
    }

    #[test]
    fn histogram_covers_every_record(records in records_strategy()) {
        let bins = risk_histogram(&records);
        prop_assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), records.len());
        prop_assert!(bins.windows(2).all(|w| w[0].bucket < w[1].bucket));
        prop_assert!(bins.iter().all(|b| b.count > 0));
    }

    #[test]
    fn breakdown_totals_match(records in records_strategy()) {
        let rows = age_outcome_breakdown(&records);
        prop_assert_eq!(rows.iter().map(|r| r.total).sum::<usize>(), records.len());
        for row in &rows {
            prop_assert_eq!(row.none + row.pre + row.diabetes, row.total);
        }
        prop_assert!(rows.windows(2).all(|w| w[0].age_bracket < w[1].age_bracket));
    }

    #[test]
    fn prevalence_is_bounded(records in records_strategy()) {
        for entry in condition_prevalence(&records) {
            prop_assert!((0.0..=100.0).contains(&entry.pct));
        }
        let max = max_risk_score(&records);
        prop_assert!(records.iter().all(|r| r.risk_score() <= max));
    }

    #[test]
    fn samples_are_bounded_and_distinct(
        records in records_strategy(),
        size in 0..300usize,
        seed in any::<u64>(),
    ) {
        let mut sampler = Sampler::new(Some(seed));
        for mode in [SampleMode::Random, SampleMode::Prefix] {
            let sample = sampler.sample(&records, size, mode);
            prop_assert_eq!(sample.len(), size.min(records.len()));
            let mut ids: Vec<u32> = sample.iter().map(|r| r.id().0).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), sample.len());
        }
    }
}
