//! ONNX model loader

use crate::models::Predictor;
use crate::types::patient::FeatureVector;
use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session, SessionOutputs};
use ort::value::{DynValue, Tensor};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// What a model's scalar output represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Classifier: read the predicted class label
    Label,
    /// Regressor: read the predicted value
    Value,
}

/// Loaded ONNX model with metadata
pub struct OnnxModel {
    /// Model name
    name: String,
    kind: OutputKind,
    /// ONNX Runtime session; running it needs exclusive access
    session: Mutex<Session>,
    /// Input name for the model
    input_name: String,
    /// Output holding the scalar prediction
    output_name: String,
}

impl Predictor for OnnxModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.as_slice().to_vec()))
            .context("Failed to create input tensor")?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_tensor])
            .with_context(|| format!("Inference failed for model {}", self.name))?;

        let value = extract_scalar(&outputs, &self.output_name)
            .with_context(|| format!("Unreadable output from model {}", self.name))?;

        debug!(
            model = %self.name,
            kind = ?self.kind,
            output = %self.output_name,
            value = value,
            "Model prediction"
        );

        Ok(value)
    }
}

/// Read the first element of the named output as a scalar.
///
/// Handles int64 label tensors (classifiers) and float tensors (regressors).
fn extract_scalar(outputs: &SessionOutputs, output_name: &str) -> Result<f64> {
    let output = outputs
        .get(output_name)
        .with_context(|| format!("Output {} missing from session results", output_name))?;

    scalar_from_value(output)
}

fn scalar_from_value(value: &DynValue) -> Result<f64> {
    if let Ok((_, data)) = value.try_extract_tensor::<i64>() {
        return data.first().map(|&v| v as f64).context("Empty label tensor");
    }

    if let Ok((_, data)) = value.try_extract_tensor::<f32>() {
        return data.first().map(|&v| v as f64).context("Empty float tensor");
    }

    if let Ok((_, data)) = value.try_extract_tensor::<f64>() {
        return data.first().copied().context("Empty double tensor");
    }

    anyhow::bail!("Output is not a numeric tensor")
}

/// Pick the output carrying the prediction for this kind of model.
///
/// Classifier exports carry a `label` output next to the probabilities;
/// regressor exports have a single value output.
fn select_output_name(names: &[String], kind: OutputKind) -> Option<String> {
    let preferred = match kind {
        OutputKind::Label => names.iter().find(|n| n.contains("label")),
        OutputKind::Value => names
            .iter()
            .find(|n| n.contains("variable") || n.contains("output") || n.contains("predict")),
    };

    preferred.or_else(|| names.first()).cloned()
}

/// Loader for ONNX models
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    /// Load a single ONNX model from file
    pub fn load_model<P: AsRef<Path>>(
        &self,
        path: P,
        name: &str,
        kind: OutputKind,
    ) -> Result<OnnxModel> {
        let path = path.as_ref();

        info!(model = %name, path = %path.display(), threads = self.onnx_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(self.onnx_threads)?
            .commit_from_file(path)
            .with_context(|| format!("Failed to load model from {:?}", path))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .with_context(|| format!("Model {} declares no inputs", name))?;

        let output_names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        let output_name = select_output_name(&output_names, kind)
            .with_context(|| format!("Model {} declares no outputs", name))?;

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            kind = ?kind,
            "Model loaded successfully"
        );

        Ok(OnnxModel {
            name: name.to_string(),
            kind,
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
