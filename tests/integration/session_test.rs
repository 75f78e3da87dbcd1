use std::sync::{Arc, Mutex};

use diabetes_risk::{
    ConditionKind, DashboardSession, DiabetesStatus, DisplayView, EngineConfig, Gender,
    HealthDataset, LoaderConfig, RiskAssessment, RiskLevel, SampleMode, UserProfile,
};
use tempfile::TempDir;

use crate::utils::{VALID_ROW_A, VALID_ROW_B, record, write_survey_csv};

fn cohort() -> HealthDataset {
    vec![
        // Age 52, BMI 27: score 1.36 + 1.2 = 2.6 (female)
        record(0, 7, 27.0, Gender::Female, DiabetesStatus::Diabetes),
        record(1, 7, 28.0, Gender::Female, DiabetesStatus::None),
        record(2, 8, 26.0, Gender::Female, DiabetesStatus::Prediabetes),
        // Far from any default-ish profile
        record(3, 13, 40.0, Gender::Male, DiabetesStatus::Diabetes),
        record(4, 1, 19.0, Gender::Male, DiabetesStatus::None),
    ]
    .into()
}

#[test]
fn test_profile_walkthrough() {
    let mut session = DashboardSession::new(cohort(), &EngineConfig::new().with_seed(3));

    let assessment = session.set_age(55.0);
    // (55 - 18) / 25 = 1.48
    assert!((assessment.score - 1.5).abs() < 1e-9);
    assert_eq!(assessment.level, RiskLevel::Low);

    let assessment = session.set_bmi(27.0);
    // 1.48 + 1.2 = 2.68
    assert!((assessment.score - 2.7).abs() < 1e-9);
    assert_eq!(assessment.level, RiskLevel::Moderate);
    // Records 0, 1 and 2 score 2.6, 2.6 and 2.8; one of three has diabetes
    assert_eq!(assessment.similar.count, 3);
    assert!((assessment.similar.diabetes_rate_pct - 100.0 / 3.0).abs() < 1e-9);

    let assessment = session
        .set_condition(ConditionKind::HeartDisease, true)
        .unwrap();
    assert!((assessment.score - 4.7).abs() < 1e-9);
    assert_eq!(assessment.level, RiskLevel::High);
    assert_eq!(assessment.similar.count, 0);
    assert_eq!(assessment.similar.diabetes_rate_pct, 0.0);

    let assessment = session.reset_profile();
    assert!((assessment.score - 1.3).abs() < 1e-9);
    assert_eq!(*session.profile(), UserProfile::default());
}

#[test]
fn test_set_profile_matches_individual_setters() {
    let profile = UserProfile {
        age: 64.0,
        bmi: 33.0,
        ..UserProfile::default()
    }
    .with_condition(ConditionKind::Smoker)
    .with_condition(ConditionKind::Stroke);

    let mut whole = DashboardSession::new(cohort(), &EngineConfig::new());
    let mut stepwise = DashboardSession::new(cohort(), &EngineConfig::new());
    stepwise.set_age(64.0);
    stepwise.set_bmi(33.0);
    stepwise.set_condition(ConditionKind::Smoker, true).unwrap();
    let last = stepwise
        .set_condition(ConditionKind::Stroke, true)
        .unwrap();

    assert_eq!(whole.set_profile(profile), last);
}

#[test]
fn test_observer_sees_every_mutation() {
    let log: Arc<Mutex<Vec<(f64, RiskAssessment)>>> = Arc::default();
    let sink = Arc::clone(&log);
    let mut session = DashboardSession::new(cohort(), &EngineConfig::new()).with_observer(
        move |profile: &UserProfile, assessment: &RiskAssessment| {
            sink.lock().unwrap().push((profile.age, *assessment));
        },
    );

    session.set_age(30.0);
    session.set_age(70.0);
    assert!(session.set_condition(ConditionKind::HeavyAlcohol, true).is_err());

    let seen = log.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, 30.0);
    assert_eq!(seen[1].0, 70.0);
    assert!(seen[1].1.score > seen[0].1.score);
}

#[test]
fn test_aggregates_and_samples() {
    let mut session = DashboardSession::new(cohort(), &EngineConfig::new().with_seed(11));

    let summary = session.summary_statistics();
    assert_eq!(summary.total, 5);
    assert_eq!(summary.diabetes_count, 2);
    assert!((summary.diabetes_pct - 40.0).abs() < 1e-9);
    assert!((summary.prediabetes_pct - 20.0).abs() < 1e-9);

    let histogram_total: usize = session.risk_histogram().iter().map(|b| b.count).sum();
    assert_eq!(histogram_total, 5);
    assert_eq!(session.condition_prevalence().len(), ConditionKind::PRIMARY.len());

    let breakdown = session.age_outcome_breakdown();
    let brackets: Vec<i32> = breakdown.iter().map(|row| row.age_bracket).collect();
    assert_eq!(brackets, vec![1, 7, 8, 13]);

    assert_eq!(session.sample(3, SampleMode::Random).len(), 3);
    assert_eq!(session.sample(10, SampleMode::Random).len(), 5);
    let scatter = session.sample_for(DisplayView::Scatter);
    assert_eq!(scatter.len(), 5);
    assert_eq!(scatter[0].id(), session.dataset()[0].id());

    let target = session.dataset()[0];
    let neighbors = session.risk_factor_neighbors(&target);
    assert_eq!(neighbors.len(), 4);
    assert!(neighbors.iter().all(|r| r.id() != target.id()));
}

#[tokio::test]
async fn test_load_from_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_survey_csv(dir.path(), "survey.csv", &[VALID_ROW_A, VALID_ROW_B]);
    let config =
        EngineConfig::new().with_loader(LoaderConfig::default().with_candidate_paths([path]));

    let (session, report) = DashboardSession::load(&config).await;
    assert!(!report.is_fallback());
    assert_eq!(session.dataset().len(), 2);
    assert_eq!(session.summary_statistics().diabetes_count, 1);
    assert!((session.cohort_report().max_risk_score - 6.3).abs() < 1e-9);
}
