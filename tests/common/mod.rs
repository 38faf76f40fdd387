//! Deterministic stand-in predictors for integration tests.

#![allow(dead_code)]

use anyhow::Result;
use pre_surgery_analyzer::{FeatureVector, ModelRegistry, Predictor};

/// Linear score over the feature vector, optionally thresholded into a class label.
pub struct LinearModel {
    name: &'static str,
    weights: [f64; 12],
    bias: f64,
    threshold: Option<f64>,
}

impl Predictor for LinearModel {
    fn name(&self) -> &str {
        self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let score = features
            .as_slice()
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| x as f64 * w)
            .sum::<f64>()
            + self.bias;

        Ok(match self.threshold {
            Some(t) => (score >= t) as i64 as f64,
            None => score,
        })
    }
}

/// Predictor that rejects every vector
pub struct BrokenModel;

impl Predictor for BrokenModel {
    fn name(&self) -> &str {
        "broken"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<f64> {
        anyhow::bail!("model expects 13 features, got 12")
    }
}

fn suitability() -> LinearModel {
    // Younger, well-oxygenated patients with few conditions score higher
    let mut weights = [0.0; 12];
    weights[0] = -0.05;
    weights[3] = 0.1;
    weights[9] = -0.8;
    weights[10] = -0.5;
    LinearModel { name: "suitability", weights, bias: -4.0, threshold: Some(0.0) }
}

fn mortality() -> LinearModel {
    let mut weights = [0.0; 12];
    weights[0] = 0.04;
    weights[9] = 0.9;
    weights[10] = 0.6;
    weights[11] = 0.4;
    LinearModel { name: "mortality", weights, bias: -5.0, threshold: Some(0.0) }
}

fn recovery() -> LinearModel {
    let mut weights = [0.0; 12];
    weights[0] = 0.2;
    weights[8] = 0.1;
    weights[9] = 2.0;
    LinearModel { name: "recovery", weights, bias: 1.5, threshold: None }
}

fn stay() -> LinearModel {
    let mut weights = [0.0; 12];
    weights[0] = 0.05;
    weights[9] = 1.0;
    LinearModel { name: "stay", weights, bias: 1.0, threshold: None }
}

/// Registry of the four linear stand-ins
pub fn registry() -> ModelRegistry {
    ModelRegistry::new(
        Box::new(suitability()),
        Box::new(mortality()),
        Box::new(recovery()),
        Box::new(stay()),
    )
}

/// Registry whose stay model always fails
pub fn broken_registry() -> ModelRegistry {
    ModelRegistry::new(
        Box::new(suitability()),
        Box::new(mortality()),
        Box::new(recovery()),
        Box::new(BrokenModel),
    )
}
