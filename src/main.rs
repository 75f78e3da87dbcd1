use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use diabetes_risk::algorithm::risk::risk_gauge_pct;
use diabetes_risk::{
    ConditionKind, DashboardSession, DisplayView, EngineConfig, LoaderConfig, SimilarityCriteria,
    SyntheticConfig, UserProfile,
};
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Condition flags accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConditionArg {
    HighBloodPressure,
    HighCholesterol,
    Smoker,
    NoExercise,
    HeartDisease,
    Stroke,
}

impl From<ConditionArg> for ConditionKind {
    fn from(arg: ConditionArg) -> Self {
        match arg {
            ConditionArg::HighBloodPressure => Self::HighBloodPressure,
            ConditionArg::HighCholesterol => Self::HighCholesterol,
            ConditionArg::Smoker => Self::Smoker,
            ConditionArg::NoExercise => Self::NoExercise,
            ConditionArg::HeartDisease => Self::HeartDisease,
            ConditionArg::Stroke => Self::Stroke,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Constellation,
    Representative,
    Scatter,
}

impl From<ViewArg> for DisplayView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Constellation => Self::Constellation,
            ViewArg::Representative => Self::Representative,
            ViewArg::Scatter => Self::Scatter,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "diabetes-risk",
    version,
    about = "Score a diabetes risk profile against the BRFSS 2015 health indicators survey"
)]
struct Cli {
    /// Survey file (.csv or .parquet) tried before the default locations
    #[arg(long, value_name = "PATH")]
    data: Vec<PathBuf>,

    /// Only try the paths given with --data
    #[arg(long)]
    no_default_paths: bool,

    /// Seed for sampling and for the generated fallback data
    #[arg(long)]
    seed: Option<u64>,

    /// Records generated when no survey file can be loaded
    #[arg(long, default_value_t = 10_000)]
    synthetic_records: usize,

    /// Profile age in years
    #[arg(long, default_value_t = 50.0)]
    age: f64,

    /// Profile body-mass index
    #[arg(long, default_value_t = 25.0)]
    bmi: f64,

    /// Conditions present on the profile
    #[arg(long = "condition", value_enum)]
    conditions: Vec<ConditionArg>,

    /// Maximum risk score difference for similar profiles
    #[arg(long, default_value_t = 0.5)]
    score_window: f64,

    /// Maximum age difference for similar profiles
    #[arg(long, default_value_t = 10.0)]
    age_window: f64,

    /// Maximum BMI difference for similar profiles
    #[arg(long, default_value_t = 3.0)]
    bmi_window: f64,

    /// Draw the working set for a display view and report its size
    #[arg(long, value_enum)]
    sample: Option<ViewArg>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Hide the normalization progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let mut loader = if self.no_default_paths {
            LoaderConfig::default().with_candidate_paths(Vec::<PathBuf>::new())
        } else {
            LoaderConfig::default()
        };
        for path in self.data.iter().rev() {
            loader = loader.with_preferred_path(path.clone());
        }

        let mut config = EngineConfig::new()
            .with_loader(loader.with_progress(!self.no_progress))
            .with_synthetic(SyntheticConfig::default().with_record_count(self.synthetic_records))
            .with_similarity(
                SimilarityCriteria::new()
                    .with_score_window(self.score_window)
                    .with_age_window(self.age_window)
                    .with_bmi_window(self.bmi_window),
            );
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn profile(&self) -> anyhow::Result<UserProfile> {
        let mut profile = UserProfile {
            age: self.age,
            bmi: self.bmi,
            ..UserProfile::default()
        };
        for &condition in &self.conditions {
            profile
                .set_condition(condition.into(), true)
                .context("Invalid profile condition")?;
        }
        Ok(profile)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.engine_config();
    info!("Starting with configuration:\n{config}");

    let (mut session, report) = DashboardSession::load(&config).await;
    info!("{report}");

    let assessment = session.set_profile(cli.profile()?);
    let sample_size = cli
        .sample
        .map(|view| session.sample_for(view.into()).len());

    if cli.json {
        let output = serde_json::json!({
            "load": report,
            "cohort": session.cohort_report(),
            "profile": session.profile(),
            "assessment": assessment,
            "sample_size": sample_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize results")?
        );
    } else {
        if let Some(warning) = &report.warning {
            println!("Note: {warning}\n");
        }
        println!("{}", session.cohort_report());
        println!();
        println!("{assessment}");
        println!("Risk gauge: {:.0}%", risk_gauge_pct(assessment.score));
        if let (Some(view), Some(size)) = (cli.sample, sample_size) {
            println!("{view:?} sample: {size} records");
        }
    }

    Ok(())
}
