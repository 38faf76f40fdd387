//! Registry of the four surgery models

use crate::config::ModelsConfig;
use crate::models::loader::{ModelLoader, OutputKind};
use crate::models::Predictor;
use crate::types::patient::FeatureVector;
use crate::types::prediction::Predictions;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// The four predictors, loaded once and never mutated.
pub struct ModelRegistry {
    suitability: Box<dyn Predictor>,
    mortality: Box<dyn Predictor>,
    recovery: Box<dyn Predictor>,
    stay: Box<dyn Predictor>,
}

impl ModelRegistry {
    /// Build a registry from already-loaded predictors
    pub fn new(
        suitability: Box<dyn Predictor>,
        mortality: Box<dyn Predictor>,
        recovery: Box<dyn Predictor>,
        stay: Box<dyn Predictor>,
    ) -> Self {
        Self {
            suitability,
            mortality,
            recovery,
            stay,
        }
    }

    /// Get the number of loaded models
    pub fn model_count(&self) -> usize {
        4
    }

    /// Get loaded model names
    pub fn model_names(&self) -> Vec<String> {
        [&self.suitability, &self.mortality, &self.recovery, &self.stay]
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    /// Run all four predictors on the same feature vector.
    ///
    /// Each call is independent; any failure fails the whole prediction.
    pub fn predict_all(&self, features: &FeatureVector) -> Result<Predictions> {
        let suitability = run(self.suitability.as_ref(), features)?;
        let mortality = run(self.mortality.as_ref(), features)?;
        let recovery_days = run(self.recovery.as_ref(), features)?;
        let stay_days = run(self.stay.as_ref(), features)?;

        let predictions = Predictions {
            suitability: suitability.round() as i64,
            mortality: mortality.round() as i64,
            recovery_days,
            stay_days,
        };

        debug!(
            suitability = predictions.suitability,
            mortality = predictions.mortality,
            recovery_days = predictions.recovery_days,
            stay_days = predictions.stay_days,
            "All predictions complete"
        );

        Ok(predictions)
    }
}

fn run(model: &dyn Predictor, features: &FeatureVector) -> Result<f64> {
    model
        .predict(features)
        .with_context(|| format!("Prediction failed for model {}", model.name()))
}

/// Load the four model artifacts.
///
/// Every artifact is required. Missing files are all reported at once,
/// before any artifact is parsed.
pub fn load_models(config: &ModelsConfig) -> Result<ModelRegistry> {
    let paths = config.artifact_paths();

    let missing: Vec<String> = paths
        .iter()
        .filter(|(_, path)| !path.is_file())
        .map(|(_, path)| path.display().to_string())
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Model artifacts not found: {}", missing.join(", "));
    }

    let loader = ModelLoader::with_threads(config.onnx_threads);
    let mut models: Vec<Box<dyn Predictor>> = Vec::with_capacity(paths.len());

    // Stop at the first artifact that fails to parse
    for (name, path) in &paths {
        let kind = match *name {
            "suitability" | "mortality" => OutputKind::Label,
            _ => OutputKind::Value,
        };
        let model = loader
            .load_model(path, name, kind)
            .with_context(|| format!("Failed to load {} model from {}", name, path.display()))?;
        models.push(Box::new(model));
    }

    let [suitability, mortality, recovery, stay]: [Box<dyn Predictor>; 4] = models
        .try_into()
        .map_err(|_| anyhow::anyhow!("Expected exactly four models"))?;

    let registry = ModelRegistry::new(suitability, mortality, recovery, stay);

    info!(
        count = registry.model_count(),
        "Loaded {} models from {}",
        registry.model_count(),
        config.models_dir
    );

    Ok(registry)
}
