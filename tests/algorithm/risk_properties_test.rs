use diabetes_risk::algorithm::risk::round_half_up;
use diabetes_risk::{
    ConditionKind, DiabetesStatus, Gender, HealthRecord, RecordAttributes, RecordId, RiskLevel,
    UserProfile, score, score_profile,
};
use proptest::prelude::*;

fn profile_strategy() -> impl Strategy<Value = UserProfile> {
    (0.0..120.0f64, 10.0..80.0f64, prop::array::uniform6(any::<bool>())).prop_map(
        |(age, bmi, flags)| UserProfile {
            age,
            bmi,
            high_blood_pressure: flags[0],
            high_cholesterol: flags[1],
            smoker: flags[2],
            no_exercise: flags[3],
            heart_disease: flags[4],
            stroke: flags[5],
        },
    )
}

fn attributes_strategy() -> impl Strategy<Value = RecordAttributes> {
    (
        0..16i32,
        12.0..100.0f64,
        any::<bool>(),
        prop::array::uniform10(any::<bool>()),
        0..3u8,
    )
        .prop_map(|(age_bracket, bmi, male, flags, status)| RecordAttributes {
            diabetes_status: match status {
                0 => DiabetesStatus::None,
                1 => DiabetesStatus::Prediabetes,
                _ => DiabetesStatus::Diabetes,
            },
            age_bracket,
            bmi,
            gender: if male { Gender::Male } else { Gender::Female },
            high_blood_pressure: flags[0],
            high_cholesterol: flags[1],
            smoker: flags[2],
            no_exercise: flags[3],
            heart_disease: flags[4],
            stroke: flags[5],
            heavy_alcohol: flags[6],
            difficulty_walking: flags[7],
            eats_fruit: flags[8],
            eats_veggies: flags[9],
            ..RecordAttributes::default()
        })
}

proptest! {
    #[test]
    fn score_is_deterministic(profile in profile_strategy()) {
        prop_assert_eq!(score(&profile), score(&profile));
    }

    #[test]
    fn score_has_one_decimal(profile in profile_strategy()) {
        let value = score(&profile);
        prop_assert!((value * 10.0 - (value * 10.0).round()).abs() < 1e-6);
        prop_assert_eq!(round_half_up(value), value);
    }

    #[test]
    fn levels_partition_scores(value in -5.0..20.0f64) {
        let expected = if value < 2.0 {
            RiskLevel::Low
        } else if value < 4.0 {
            RiskLevel::Moderate
        } else if value < 6.0 {
            RiskLevel::High
        } else {
            RiskLevel::Severe
        };
        prop_assert_eq!(RiskLevel::from_score(value), expected);
    }

    #[test]
    fn adding_a_condition_never_lowers_the_score(
        profile in profile_strategy(),
        index in 0..6usize,
    ) {
        let condition = ConditionKind::PRIMARY[index];
        let without = {
            let mut p = profile;
            p.set_condition(condition, false).unwrap();
            score_profile(&p)
        };
        let with = score_profile(&profile.with_condition(condition));
        prop_assert!(with.score >= without.score);
        prop_assert!(with.level >= without.level);
    }

    #[test]
    fn record_derivations_hold(attributes in attributes_strategy()) {
        let record = HealthRecord::new(RecordId(0), attributes);
        let flags = [
            attributes.high_blood_pressure,
            attributes.high_cholesterol,
            attributes.smoker,
            attributes.stroke,
            attributes.heart_disease,
            attributes.heavy_alcohol,
            attributes.no_exercise,
        ];
        let expected = flags.iter().filter(|f| **f).count();
        prop_assert_eq!(record.risk_factor_count() as usize, expected);
        prop_assert_eq!(record.risk_score(), score(&attributes));
        prop_assert_eq!(
            record.health_burden_days(),
            attributes.mental_health_days.max(attributes.physical_health_days)
        );
        if !(1..=13).contains(&attributes.age_bracket) {
            prop_assert_eq!(record.age(), 50);
            prop_assert_eq!(record.age_bracket_label(), "Unknown");
        }
    }
}
