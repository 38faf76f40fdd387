//! Formatting of raw predictions for display

use crate::config::DisplayConfig;
use crate::types::prediction::{MortalityRisk, PredictionDisplay, Predictions, Suitability};

/// Round a duration to whole days, ties to even.
pub fn round_days(days: f64) -> i64 {
    days.round_ties_even() as i64
}

/// Survival likelihood shown next to the mortality risk.
///
/// Mortality is a class label rather than a probability, so this is always
/// exactly 0.0 or 1.0 for a binary classifier.
pub fn survival_likelihood(mortality: i64) -> f64 {
    (1.0 - mortality as f64).clamp(0.0, 1.0)
}

/// Maps raw model outputs to labels and day counts.
pub struct OutputFormatter {
    emoji: bool,
}

impl OutputFormatter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            emoji: display.emoji,
        }
    }

    /// Formatter producing plain labels without emoji
    pub fn plain() -> Self {
        Self { emoji: false }
    }

    pub fn format(&self, predictions: &Predictions) -> PredictionDisplay {
        let suitability = Suitability::from_label(predictions.suitability);
        let mortality = MortalityRisk::from_label(predictions.mortality);
        let recovery_days = round_days(predictions.recovery_days);
        let stay_days = round_days(predictions.stay_days);

        PredictionDisplay {
            suitability,
            mortality,
            suitability_text: self.decorate(suitability.emoji(), suitability.label()),
            mortality_text: self.decorate(mortality.emoji(), mortality.label()),
            recovery_text: self.decorate("⏱️", &format!("{} days", recovery_days)),
            stay_text: self.decorate("🏥", &format!("{} days", stay_days)),
            recovery_days,
            stay_days,
            survival_likelihood: survival_likelihood(predictions.mortality),
        }
    }

    fn decorate(&self, emoji: &str, text: &str) -> String {
        if self.emoji {
            format!("{} {}", emoji, text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions(suitability: i64, mortality: i64, recovery: f64, stay: f64) -> Predictions {
        Predictions {
            suitability,
            mortality,
            recovery_days: recovery,
            stay_days: stay,
        }
    }

    #[test]
    fn test_round_days() {
        assert_eq!(round_days(3.5), 4);
        assert_eq!(round_days(3.4), 3);
        assert_eq!(round_days(2.5), 2);
        assert_eq!(round_days(12.51), 13);
        assert_eq!(round_days(-0.4), 0);
    }

    #[test]
    fn test_plain_labels() {
        let display = OutputFormatter::plain().format(&predictions(1, 0, 10.5, 3.5));

        assert_eq!(display.suitability_text, "Suitable");
        assert_eq!(display.mortality_text, "Low Risk");
        assert_eq!(display.recovery_text, "10 days");
        assert_eq!(display.stay_text, "4 days");
        assert_eq!(display.recovery_days, 10);
        assert_eq!(display.stay_days, 4);
    }

    #[test]
    fn test_emoji_labels() {
        let formatter = OutputFormatter::new(&DisplayConfig::default());
        let display = formatter.format(&predictions(0, 1, 21.2, 7.0));

        assert_eq!(display.suitability, Suitability::NotSuitable);
        assert_eq!(display.suitability_text, "🔴 Not Suitable");
        assert_eq!(display.mortality_text, "⚠️ High Risk");
        assert_eq!(display.recovery_text, "⏱️ 21 days");
        assert_eq!(display.stay_text, "🏥 7 days");
    }

    #[test]
    fn test_survival_likelihood_is_degenerate() {
        assert_eq!(survival_likelihood(0), 1.0);
        assert_eq!(survival_likelihood(1), 0.0);
        assert_eq!(survival_likelihood(5), 0.0);
        assert_eq!(survival_likelihood(-3), 1.0);
    }
}
