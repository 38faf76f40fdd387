//! Input collection for surgery model inference.
//!
//! Turns submitted patient details into the feature vector consumed by
//! every model artifact.

use crate::types::patient::{FeatureVector, PatientInput, FEATURE_COUNT, FIELDS};

/// Collector that transforms patient input into model features.
///
/// Each field is clamped to its own control bounds, the same way a bounded
/// slider never yields an out-of-range value. Features come out in the exact
/// order expected by the ONNX models.
pub struct InputCollector;

impl InputCollector {
    /// Create a new input collector.
    pub fn new() -> Self {
        Self
    }

    /// Collect features from patient input.
    pub fn collect(&self, input: &PatientInput) -> FeatureVector {
        let values = input.clamped().values();
        FeatureVector::new(values.map(|v| v as f32))
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in model order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        FIELDS.iter().map(|f| f.name).collect()
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
