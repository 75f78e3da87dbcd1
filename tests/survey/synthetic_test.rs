use diabetes_risk::algorithm::cohort::summary_statistics;
use diabetes_risk::survey::generate_synthetic;
use diabetes_risk::{DiabetesStatus, SyntheticConfig};

#[test]
fn test_default_population_size() {
    let records = generate_synthetic(&SyntheticConfig::default().with_seed(2024));
    assert_eq!(records.len(), 10_000);
}

#[test]
fn test_same_seed_same_population() {
    let config = SyntheticConfig::default().with_record_count(1_000).with_seed(99);
    let a = generate_synthetic(&config);
    let b = generate_synthetic(&config);
    assert_eq!(a, b);

    let other = generate_synthetic(&config.with_seed(100));
    assert_ne!(a, other);
}

#[test]
fn test_outcomes_are_plausible() {
    let config = SyntheticConfig::default().with_record_count(5_000).with_seed(5);
    let records = generate_synthetic(&config);
    let summary = summary_statistics(&records);

    // Diabetes probability is at least 5% and rises with risk factors
    assert!(summary.diabetes_pct > 5.0);
    assert!(summary.diabetes_pct < 60.0);
    assert!(summary.prediabetes_pct > 0.0);

    let heavy: Vec<_> = records.iter().filter(|r| r.risk_factor_count() >= 4).collect();
    let light: Vec<_> = records.iter().filter(|r| r.risk_factor_count() <= 1).collect();
    let rate = |group: &[&diabetes_risk::HealthRecord]| {
        group
            .iter()
            .filter(|r| r.diabetes_status() != DiabetesStatus::None)
            .count() as f64
            / group.len().max(1) as f64
    };
    assert!(rate(&heavy) > rate(&light));
}
