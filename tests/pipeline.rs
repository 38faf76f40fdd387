//! End-to-end pipeline tests: collect, predict, format.

mod common;

use pre_surgery_analyzer::config::DisplayConfig;
use pre_surgery_analyzer::types::{MortalityRisk, Suitability, FIELDS};
use pre_surgery_analyzer::{Analyzer, InputCollector, PatientInput};
use proptest::prelude::*;

fn plain_display() -> DisplayConfig {
    DisplayConfig {
        emoji: false,
        ..DisplayConfig::default()
    }
}

#[test]
fn test_default_input_baseline() {
    let analyzer = Analyzer::new(common::registry(), &plain_display());

    let report = analyzer.analyze(&PatientInput::default()).unwrap();

    assert_eq!(report.input, PatientInput::default());
    assert_eq!(report.predictions.suitability, 1);
    assert_eq!(report.predictions.mortality, 0);
    assert_eq!(report.display.suitability_text, "Suitable");
    assert_eq!(report.display.mortality_text, "Low Risk");
    assert_eq!(report.display.recovery_text, "14 days");
    assert_eq!(report.display.stay_text, "4 days");
    assert_eq!(report.display.survival_likelihood, 1.0);
}

#[test]
fn test_minimum_bounds_run() {
    let analyzer = Analyzer::new(common::registry(), &plain_display());

    let report = analyzer.analyze(&PatientInput::minimum()).unwrap();

    assert_eq!(report.input.age, 18);
    assert_eq!(report.input.bmi, 18.5);
    assert_eq!(report.display.suitability, Suitability::Suitable);
    assert_eq!(report.display.mortality, MortalityRisk::Low);
    assert_eq!(report.display.recovery_days, 7);
    assert_eq!(report.display.stay_days, 2);
}

#[test]
fn test_maximum_bounds_run() {
    let analyzer = Analyzer::new(common::registry(), &plain_display());

    let report = analyzer.analyze(&PatientInput::maximum()).unwrap();

    assert_eq!(report.input.age, 90);
    assert_eq!(report.input.smoking, 1);
    assert_eq!(report.input.alcohol_use, 1);
    assert_eq!(report.display.suitability, Suitability::NotSuitable);
    assert_eq!(report.display.mortality, MortalityRisk::High);
    assert_eq!(report.display.recovery_days, 31);
    assert_eq!(report.display.survival_likelihood, 0.0);
}

#[test]
fn test_repeated_prediction_is_deterministic() {
    let analyzer = Analyzer::new(common::registry(), &plain_display());
    let input = PatientInput {
        age: 67,
        prior_conditions: 3,
        smoking: 1,
        ..PatientInput::default()
    };

    let first = analyzer.analyze(&input).unwrap();
    for _ in 0..10 {
        let next = analyzer.analyze(&input).unwrap();
        assert_eq!(next.predictions, first.predictions);
        assert_eq!(next.display, first.display);
        assert_ne!(next.submission_id, first.submission_id);
    }
}

#[test]
fn test_failure_yields_no_partial_result() {
    let analyzer = Analyzer::new(common::broken_registry(), &plain_display());

    let err = analyzer.analyze(&PatientInput::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("13 features"));

    let snapshot = analyzer.metrics().snapshot();
    assert_eq!(snapshot.failures, 1);
    assert_eq!(snapshot.submissions, 0);
}

#[test]
fn test_metrics_track_submissions() {
    let analyzer = Analyzer::new(common::registry(), &plain_display());

    analyzer.analyze(&PatientInput::default()).unwrap();
    analyzer.analyze(&PatientInput::maximum()).unwrap();

    let snapshot = analyzer.metrics().snapshot();
    assert_eq!(snapshot.submissions, 2);
    assert_eq!(snapshot.suitable, 1);
    assert_eq!(snapshot.high_risk, 1);
}

fn any_input() -> impl Strategy<Value = PatientInput> {
    (
        (any::<i32>(), any::<i32>(), any::<i32>(), -1e4f64..1e4),
        (-1e4f64..1e4, -1e4f64..1e4, -1e4f64..1e4, any::<i32>()),
        (-1e4f64..1e4, any::<i32>(), any::<u8>(), any::<u8>()),
    )
        .prop_map(|((a, bp, hr, o2), (hb, wbc, plt, sugar), (bmi, cond, smoke, alc))| {
            PatientInput {
                age: a,
                blood_pressure: bp,
                heart_rate: hr,
                oxygen_saturation: o2,
                hemoglobin: hb,
                wbc,
                platelet_count: plt,
                blood_sugar: sugar,
                bmi,
                prior_conditions: cond,
                smoking: smoke,
                alcohol_use: alc,
            }
        })
}

proptest! {
    #[test]
    fn prop_vector_is_bounded(input in any_input()) {
        let features = InputCollector::new().collect(&input);

        prop_assert_eq!(features.len(), 12);
        for (value, spec) in features.as_slice().iter().zip(FIELDS.iter()) {
            let value = *value as f64;
            prop_assert!(value >= spec.min as f32 as f64 && value <= spec.max as f32 as f64,
                "{} = {} outside [{}, {}]", spec.name, value, spec.min, spec.max);
        }
    }

    #[test]
    fn prop_binary_fields_are_zero_or_one(input in any_input()) {
        let features = InputCollector::new().collect(&input);

        for value in &features.as_slice()[10..] {
            prop_assert!(*value == 0.0 || *value == 1.0);
        }
    }

    #[test]
    fn prop_in_bounds_input_is_unchanged(
        age in 18i32..=90,
        sugar in 70i32..=200,
        o2 in 85.0f64..=100.0,
        smoking in 0u8..=1,
    ) {
        let input = PatientInput {
            age,
            blood_sugar: sugar,
            oxygen_saturation: o2,
            smoking,
            ..PatientInput::default()
        };

        prop_assert_eq!(input.clamped(), input.clone());

        let features = InputCollector::new().collect(&input);
        prop_assert_eq!(features.as_slice()[0], age as f32);
        prop_assert_eq!(features.as_slice()[3], o2 as f32);
        prop_assert_eq!(features.as_slice()[7], sugar as f32);
        prop_assert_eq!(features.as_slice()[10], smoking as f32);
    }

    #[test]
    fn prop_survival_likelihood_is_zero_or_one(input in any_input()) {
        let analyzer = Analyzer::new(common::registry(), &plain_display());
        let report = analyzer.analyze(&input).unwrap();

        let survival = report.display.survival_likelihood;
        prop_assert!(survival == 0.0 || survival == 1.0);
    }
}
