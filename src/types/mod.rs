//! Type definitions for the pre-surgery analyzer

pub mod patient;
pub mod prediction;

pub use patient::{FeatureVector, FieldKind, FieldSpec, PatientInput, FEATURE_COUNT, FIELDS};
pub use prediction::{MortalityRisk, PredictionDisplay, PredictionReport, Predictions, Suitability};
