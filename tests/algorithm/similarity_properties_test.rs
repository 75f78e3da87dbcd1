use diabetes_risk::{
    CohortQuery, DiabetesStatus, Gender, HealthRecord, LinearScan, SimilarityCriteria,
    UserProfile, score,
};
use proptest::prelude::*;

use crate::utils::record;

fn population() -> Vec<HealthRecord> {
    let statuses = [
        DiabetesStatus::None,
        DiabetesStatus::Prediabetes,
        DiabetesStatus::Diabetes,
    ];
    (0..300u32)
        .map(|i| {
            let bracket = (i % 13) as i32 + 1;
            let bmi = 18.0 + f64::from(i % 27);
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            record(i, bracket, bmi, gender, statuses[(i % 3) as usize])
        })
        .collect()
}

proptest! {
    #[test]
    fn members_fall_inside_every_window(age in 18.0..90.0f64, bmi in 15.0..50.0f64) {
        let records = population();
        let profile = UserProfile { age, bmi, ..UserProfile::default() };
        let criteria = SimilarityCriteria::default();
        let cohort = LinearScan::new(criteria).find_similar(&records, &profile);
        let target = score(&profile);

        for member in &cohort.members {
            prop_assert!((member.risk_score() - target).abs() < criteria.score_window);
            prop_assert!((f64::from(member.age()) - age).abs() < criteria.age_window);
            prop_assert!((member.bmi() - bmi).abs() < criteria.bmi_window);
        }
        let outside = records
            .iter()
            .filter(|r| !criteria.is_match(r, target, age, bmi))
            .count();
        prop_assert_eq!(cohort.members.len() + outside, records.len());
        prop_assert!((0.0..=100.0).contains(&cohort.diabetes_rate_pct));
    }

    #[test]
    fn widening_windows_never_shrinks_cohort(age in 18.0..90.0f64, bmi in 15.0..50.0f64) {
        let records = population();
        let profile = UserProfile { age, bmi, ..UserProfile::default() };
        let narrow = LinearScan::default().find_similar(&records, &profile);
        let wide = LinearScan::new(
            SimilarityCriteria::new()
                .with_score_window(1.0)
                .with_age_window(20.0)
                .with_bmi_window(6.0),
        )
        .find_similar(&records, &profile);
        prop_assert!(wide.members.len() >= narrow.members.len());
    }
}
