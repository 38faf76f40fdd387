//! ML model inference components

pub mod loader;
pub mod registry;

use crate::types::patient::FeatureVector;
use anyhow::Result;

pub use loader::{ModelLoader, OnnxModel, OutputKind};
pub use registry::{load_models, ModelRegistry};

/// A pre-trained model mapping one feature vector to one scalar.
pub trait Predictor: Send + Sync {
    /// Model name used in logs
    fn name(&self) -> &str;

    /// Predict a single scalar for the feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}
