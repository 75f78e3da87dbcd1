use std::path::PathBuf;

use diabetes_risk::async_io::FALLBACK_WARNING;
use diabetes_risk::{
    DataSource, DiabetesStatus, Gender, LoaderConfig, RiskLevel, SyntheticConfig, load_dataset,
};
use tempfile::TempDir;

use crate::utils::{MALFORMED_ROW, VALID_ROW_A, VALID_ROW_B, write_survey_csv, write_survey_parquet};

fn small_synthetic() -> SyntheticConfig {
    SyntheticConfig::default().with_record_count(50).with_seed(7)
}

#[tokio::test]
async fn test_csv_with_malformed_row() {
    let dir = TempDir::new().unwrap();
    let path = write_survey_csv(
        dir.path(),
        "survey.csv",
        &[VALID_ROW_A, MALFORMED_ROW, VALID_ROW_B],
    );

    let config = LoaderConfig::default().with_candidate_paths([path.clone()]);
    let outcome = load_dataset(&config, &small_synthetic()).await;

    assert_eq!(outcome.report.source, DataSource::File(path));
    assert_eq!(outcome.report.rows_read, 3);
    assert_eq!(outcome.report.rows_skipped, 1);
    assert!(outcome.report.warning.is_none());

    let dataset = outcome.dataset;
    assert_eq!(dataset.len(), 2);
    let ids: Vec<u32> = dataset.iter().map(|r| r.id().0).collect();
    assert_eq!(ids, vec![0, 2]);

    let first = &dataset[0];
    assert_eq!(first.diabetes_status(), DiabetesStatus::Diabetes);
    assert_eq!(first.gender(), Gender::Male);
    assert_eq!(first.age(), 62);
    assert_eq!(first.health_burden_days(), 15);
    assert_eq!(first.risk_factor_count(), 1);
    assert!((first.risk_score() - 6.3).abs() < 1e-9);
    assert_eq!(first.risk_level(), RiskLevel::Severe);

    let second = &dataset[1];
    assert_eq!(second.gender(), Gender::Female);
    assert!((second.risk_score() - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn test_late_malformed_row_keeps_survey() {
    let dir = TempDir::new().unwrap();
    let mut rows = vec![VALID_ROW_B; 1500];
    rows.push(MALFORMED_ROW);
    let path = write_survey_csv(dir.path(), "survey.csv", &rows);

    let config = LoaderConfig::default().with_candidate_paths([path.clone()]);
    let outcome = load_dataset(&config, &small_synthetic()).await;

    assert_eq!(outcome.report.source, DataSource::File(path));
    assert!(outcome.report.warning.is_none());
    assert_eq!(outcome.report.rows_read, 1501);
    assert_eq!(outcome.report.rows_skipped, 1);
    assert_eq!(outcome.dataset.len(), 1500);
}

#[tokio::test]
async fn test_late_fractional_cell_keeps_survey() {
    let dir = TempDir::new().unwrap();
    let integral = VALID_ROW_B.replace(".0", "");
    let mut rows = vec![integral.clone(); 1200];
    rows.push(integral.replacen(",22,", ",22.5,", 1));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let path = write_survey_csv(dir.path(), "survey.csv", &rows);

    let config = LoaderConfig::default().with_candidate_paths([path]);
    let outcome = load_dataset(&config, &small_synthetic()).await;

    assert!(!outcome.report.is_fallback());
    assert_eq!(outcome.report.rows_skipped, 0);
    assert_eq!(outcome.dataset.len(), 1201);
    assert!((outcome.dataset[1200].bmi() - 22.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_candidates_fall_back() {
    let dir = TempDir::new().unwrap();
    let config = LoaderConfig::default()
        .with_candidate_paths([dir.path().join("absent.csv"), dir.path().join("gone.csv")]);
    let outcome = load_dataset(&config, &small_synthetic()).await;

    assert_eq!(outcome.report.source, DataSource::Synthetic);
    assert!(outcome.report.is_fallback());
    assert_eq!(outcome.report.warning.as_deref(), Some(FALLBACK_WARNING));
    assert_eq!(outcome.dataset.len(), 50);
}

#[tokio::test]
async fn test_no_candidates_fall_back() {
    let config = LoaderConfig::default().with_candidate_paths(Vec::<PathBuf>::new());
    let outcome = load_dataset(&config, &small_synthetic()).await;
    assert!(outcome.report.is_fallback());
}

#[tokio::test]
async fn test_later_candidate_used_after_failures() {
    let dir = TempDir::new().unwrap();
    let unsupported = dir.path().join("survey.txt");
    std::fs::write(&unsupported, "not a survey").unwrap();
    let only_malformed = write_survey_csv(dir.path(), "bad.csv", &[MALFORMED_ROW]);
    let good = write_survey_csv(dir.path(), "good.csv", &[VALID_ROW_B]);

    let config = LoaderConfig::default().with_candidate_paths([
        dir.path().join("absent.csv"),
        unsupported,
        only_malformed,
        good.clone(),
    ]);
    let outcome = load_dataset(&config, &small_synthetic()).await;

    assert_eq!(outcome.report.source, DataSource::File(good));
    assert_eq!(outcome.dataset.len(), 1);
}

#[tokio::test]
async fn test_parquet_survey() {
    let dir = TempDir::new().unwrap();
    // Columns follow SurveyField::ALL order
    let rows = [
        [0.0, 1.0, 1.0, 28.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 3.0, 2.0, 5.0, 0.0, 2.0, 7.0],
        [1.0, 0.0, 0.0, 35.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 5.0, 30.0, 1.0, 1.0, 1.0, 13.0],
    ];
    let path = write_survey_parquet(dir.path(), "survey.parquet", &rows);

    let config = LoaderConfig::default().with_candidate_paths([path]);
    let outcome = load_dataset(&config, &small_synthetic()).await;
    assert_eq!(outcome.report.rows_skipped, 0);
    assert_eq!(outcome.dataset.len(), 2);

    let first = &outcome.dataset[0];
    // HighBP, HighChol, Smoker and no exercise
    assert_eq!(first.risk_factor_count(), 4);
    assert!(first.is_multi_morbid());

    let second = &outcome.dataset[1];
    assert_eq!(second.diabetes_status(), DiabetesStatus::Prediabetes);
    assert_eq!(second.age(), 82);
    assert_eq!(second.health_burden_days(), 30);
    assert!(second.has_high_health_burden());
}
