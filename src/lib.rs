//! Pre-Surgery Analyzer Library
//!
//! Collects twelve patient vital-sign and history inputs, runs four
//! pre-trained ONNX models on them, and formats the predicted surgery
//! suitability, mortality risk, recovery time and hospital stay.

pub mod analyzer;
pub mod collector;
pub mod config;
pub mod formatter;
pub mod metrics;
pub mod models;
pub mod types;
pub mod web;

pub use analyzer::Analyzer;
pub use collector::InputCollector;
pub use config::AppConfig;
pub use formatter::OutputFormatter;
pub use models::{load_models, ModelRegistry, Predictor};
pub use types::{FeatureVector, PatientInput, PredictionDisplay, PredictionReport, Predictions};
