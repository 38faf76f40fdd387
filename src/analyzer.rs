//! Submission pipeline: collect, predict, format.

use crate::collector::InputCollector;
use crate::config::DisplayConfig;
use crate::formatter::OutputFormatter;
use crate::metrics::AnalyzerMetrics;
use crate::models::ModelRegistry;
use crate::types::patient::PatientInput;
use crate::types::prediction::PredictionReport;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, info_span};

/// Runs one submission end to end.
///
/// Processing is synchronous; a submission finishes before the caller can
/// start the next one.
pub struct Analyzer {
    collector: InputCollector,
    registry: ModelRegistry,
    formatter: OutputFormatter,
    metrics: Arc<AnalyzerMetrics>,
}

impl Analyzer {
    pub fn new(registry: ModelRegistry, display: &DisplayConfig) -> Self {
        Self::with_metrics(registry, display, Arc::new(AnalyzerMetrics::new()))
    }

    pub fn with_metrics(
        registry: ModelRegistry,
        display: &DisplayConfig,
        metrics: Arc<AnalyzerMetrics>,
    ) -> Self {
        Self {
            collector: InputCollector::new(),
            registry,
            formatter: OutputFormatter::new(display),
            metrics,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &Arc<AnalyzerMetrics> {
        &self.metrics
    }

    /// Collect the input, run all four models and format the results.
    pub fn analyze(&self, input: &PatientInput) -> Result<PredictionReport> {
        let submission_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("submission", id = %submission_id);
        let _guard = span.enter();

        let start_time = Instant::now();
        let features = self.collector.collect(input);

        let predictions = match self.registry.predict_all(&features) {
            Ok(predictions) => predictions,
            Err(e) => {
                self.metrics.record_failure();
                error!(error = %format!("{:#}", e), "Prediction failed");
                return Err(e);
            }
        };

        let formatted = self.formatter.format(&predictions);
        let processing_time = start_time.elapsed();
        self.metrics.record_submission(processing_time, &predictions);

        info!(
            suitability = %formatted.suitability_text,
            mortality = %formatted.mortality_text,
            recovery_days = formatted.recovery_days,
            stay_days = formatted.stay_days,
            processing_time_us = processing_time.as_micros(),
            "Submission processed"
        );

        Ok(PredictionReport::new(
            submission_id,
            input.clamped(),
            predictions,
            formatted,
        ))
    }
}
