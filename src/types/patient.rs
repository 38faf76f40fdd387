//! Patient input and feature vector definitions

use serde::{Deserialize, Serialize};

/// Number of features every model artifact consumes.
pub const FEATURE_COUNT: usize = 12;

/// How a field is presented and stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole-number slider
    Integer,
    /// Decimal slider
    Float,
    /// No/Yes choice stored as 0/1
    Binary,
}

/// Bounds and presentation for one input control
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Form field name
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub emoji: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldSpec {
    /// Clamp a raw value into this field's range.
    ///
    /// Non-finite values fall back to the field default. Integer and binary
    /// fields are rounded to whole numbers first.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let value = match self.kind {
            FieldKind::Float => value,
            FieldKind::Integer | FieldKind::Binary => value.round(),
        };
        value.clamp(self.min, self.max)
    }
}

const fn integer(
    name: &'static str,
    label: &'static str,
    emoji: &'static str,
    min: f64,
    max: f64,
    default: f64,
) -> FieldSpec {
    FieldSpec { name, label, emoji, kind: FieldKind::Integer, min, max, step: 1.0, default }
}

const fn float(
    name: &'static str,
    label: &'static str,
    emoji: &'static str,
    min: f64,
    max: f64,
    default: f64,
) -> FieldSpec {
    FieldSpec { name, label, emoji, kind: FieldKind::Float, min, max, step: 0.01, default }
}

const fn binary(name: &'static str, label: &'static str, emoji: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        emoji,
        kind: FieldKind::Binary,
        min: 0.0,
        max: 1.0,
        step: 1.0,
        default: 0.0,
    }
}

/// Input controls in model feature order.
///
/// The artifacts carry no schema, so this order is the contract with them.
pub const FIELDS: [FieldSpec; FEATURE_COUNT] = [
    integer("age", "Age", "🎂", 18.0, 90.0, 40.0),
    integer("blood_pressure", "Blood Pressure (mmHg)", "🩸", 90.0, 180.0, 120.0),
    integer("heart_rate", "Heart Rate (bpm)", "❤️", 60.0, 120.0, 80.0),
    float("oxygen_saturation", "Oxygen Saturation (%)", "🌬️", 85.0, 100.0, 95.0),
    float("hemoglobin", "Hemoglobin (g/dL)", "🧪", 10.0, 18.0, 14.0),
    float("wbc", "WBC Count (×10⁹/L)", "🧫", 4.0, 11.0, 6.0),
    float("platelet_count", "Platelet Count (×10⁹/L)", "🩻", 150.0, 450.0, 250.0),
    integer("blood_sugar", "Blood Sugar (mg/dL)", "🍬", 70.0, 200.0, 100.0),
    float("bmi", "BMI", "⚖️", 18.5, 35.0, 25.0),
    integer("prior_conditions", "Prior Conditions", "📋", 0.0, 4.0, 1.0),
    binary("smoking", "Smoking", "🚬"),
    binary("alcohol_use", "Alcohol Use", "🍷"),
];

/// Patient details as submitted by the form or API.
///
/// Fields that are absent take their control's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInput {
    pub age: i32,
    pub blood_pressure: i32,
    pub heart_rate: i32,
    pub oxygen_saturation: f64,
    pub hemoglobin: f64,
    pub wbc: f64,
    #[serde(alias = "platelet")]
    pub platelet_count: f64,
    #[serde(alias = "sugar")]
    pub blood_sugar: i32,
    pub bmi: f64,
    #[serde(alias = "conditions")]
    pub prior_conditions: i32,
    pub smoking: u8,
    #[serde(alias = "alcohol")]
    pub alcohol_use: u8,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self::from_values(FIELDS.map(|f| f.default))
    }
}

impl PatientInput {
    /// Field values in feature order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            self.blood_pressure as f64,
            self.heart_rate as f64,
            self.oxygen_saturation,
            self.hemoglobin,
            self.wbc,
            self.platelet_count,
            self.blood_sugar as f64,
            self.bmi,
            self.prior_conditions as f64,
            self.smoking as f64,
            self.alcohol_use as f64,
        ]
    }

    /// Build an input from values in feature order.
    ///
    /// Integer and binary fields are truncated; callers clamp first.
    pub fn from_values(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            age: v[0] as i32,
            blood_pressure: v[1] as i32,
            heart_rate: v[2] as i32,
            oxygen_saturation: v[3],
            hemoglobin: v[4],
            wbc: v[5],
            platelet_count: v[6],
            blood_sugar: v[7] as i32,
            bmi: v[8],
            prior_conditions: v[9] as i32,
            smoking: v[10] as u8,
            alcohol_use: v[11] as u8,
        }
    }

    /// Every field clamped to its control's bounds.
    pub fn clamped(&self) -> Self {
        let values = self.values();
        let mut clamped = [0.0; FEATURE_COUNT];
        for (i, spec) in FIELDS.iter().enumerate() {
            clamped[i] = spec.clamp(values[i]);
        }
        Self::from_values(clamped)
    }

    /// An input with every field at its lower bound.
    pub fn minimum() -> Self {
        Self::from_values(FIELDS.map(|f| f.min))
    }

    /// An input with every field at its upper bound.
    pub fn maximum() -> Self {
        Self::from_values(FIELDS.map(|f| f.max))
    }
}

/// Fixed-order model input for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
