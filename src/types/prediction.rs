//! Prediction outputs and report structures

use crate::types::patient::PatientInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Surgery suitability class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitability {
    Suitable,
    NotSuitable,
}

impl Suitability {
    /// Only label 1 means suitable.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Suitability::Suitable
        } else {
            Suitability::NotSuitable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Suitable => "Suitable",
            Self::NotSuitable => "Not Suitable",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Suitable => "🟢",
            Self::NotSuitable => "🔴",
        }
    }
}

/// Mortality risk class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MortalityRisk {
    High,
    Low,
}

impl MortalityRisk {
    /// Only label 1 means high risk.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            MortalityRisk::High
        } else {
            MortalityRisk::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Low => "Low Risk",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::High => "⚠️",
            Self::Low => "✅",
        }
    }
}

/// Raw outputs of the four predictors for one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    /// Suitability class label (0 or 1)
    pub suitability: i64,
    /// Mortality class label (0 or 1)
    pub mortality: i64,
    /// Estimated recovery time in days
    pub recovery_days: f64,
    /// Estimated hospital stay in days
    pub stay_days: f64,
}

/// Human-readable rendering of [`Predictions`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDisplay {
    pub suitability: Suitability,
    pub mortality: MortalityRisk,
    /// Suitability line, e.g. "🟢 Suitable"
    pub suitability_text: String,
    /// Mortality line, e.g. "✅ Low Risk"
    pub mortality_text: String,
    /// Recovery line, e.g. "⏱️ 12 days"
    pub recovery_text: String,
    /// Hospital stay line, e.g. "🏥 5 days"
    pub stay_text: String,
    pub recovery_days: i64,
    pub stay_days: i64,
    /// `1 - mortality` clamped to [0, 1]
    pub survival_likelihood: f64,
}

/// Full result of one submission, returned by the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Submission identifier (also attached to log spans)
    pub submission_id: String,
    /// Input after clamping to control bounds
    pub input: PatientInput,
    pub predictions: Predictions,
    pub display: PredictionDisplay,
    pub generated_at: DateTime<Utc>,
}

impl PredictionReport {
    pub fn new(
        submission_id: String,
        input: PatientInput,
        predictions: Predictions,
        display: PredictionDisplay,
    ) -> Self {
        Self {
            submission_id,
            input,
            predictions,
            display,
            generated_at: Utc::now(),
        }
    }
}
