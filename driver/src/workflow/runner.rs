use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use chancore::telemetry::{MetricsRecorder, MetricsSnapshot};
use chancore::{ChannelError, ChannelRecord, Point, ProcessOutput};
use log::{info, warn};
use std::sync::Arc;

pub struct WorkflowResult {
    pub output: ProcessOutput,
    pub dropped_anchors: Vec<Point>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn execute(&self, record: &ChannelRecord) -> anyhow::Result<WorkflowResult> {
        let mut record = record.clone();
        if let Some(k) = self.config.conversion_constant {
            record.k = k;
        }

        let mut dropped_anchors = Vec::new();
        let output = match record.process() {
            Err(ChannelError::InvalidAnchors(invalid)) if self.config.drop_invalid_anchors => {
                warn!(
                    "channel {}: dropping {} anchor(s) that match no sample",
                    record.name,
                    invalid.len()
                );
                record.anchors.retain(|anchor| !invalid.contains(anchor));
                self.metrics.record_dropped_anchors(invalid.len());
                dropped_anchors = invalid;
                record.process()
            }
            other => other,
        };

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                self.metrics.record_failure();
                return Err(err).with_context(|| format!("processing channel {}", record.name));
            }
        };

        self.metrics.record_processed(output.results.len());
        for result in &output.results {
            info!(
                "channel {}: {} [{}, {}] area {:.6e}",
                record.name, result.label, result.start, result.end, result.area
            );
        }

        Ok(WorkflowResult {
            output,
            dropped_anchors,
        })
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{build_channel_record, GeneratorConfig};

    #[test]
    fn runner_executes_generated_channel() {
        let generator = GeneratorConfig::default();
        let record = build_channel_record(&generator).unwrap();
        let runner = Runner::new(WorkflowConfig::default());
        let result = runner.execute(&record).unwrap();
        assert_eq!(result.output.results.len(), generator.peaks.len());
        assert!(result.output.results.iter().all(|r| r.area > 0.0));
        assert_eq!(runner.metrics().processed, 1);
    }

    #[test]
    fn conversion_constant_override_scales_area() {
        let record = build_channel_record(&GeneratorConfig::default()).unwrap();
        let base = Runner::new(WorkflowConfig::from_args(Some(1.0), false, false))
            .execute(&record)
            .unwrap();
        let scaled = Runner::new(WorkflowConfig::from_args(Some(4.0), false, false))
            .execute(&record)
            .unwrap();
        let ratio = base.output.results[0].area / scaled.output.results[0].area;
        assert!((ratio - 4.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_anchors_fail_unless_dropped() {
        let mut record = build_channel_record(&GeneratorConfig::default()).unwrap();
        let stray = Point::new(record.times[1], record.values[1] + 1.0);
        record.anchors.push(stray);

        let strict = Runner::new(WorkflowConfig::default());
        assert!(strict.execute(&record).is_err());
        assert_eq!(strict.metrics().failures, 1);

        let lenient = Runner::new(WorkflowConfig::from_args(None, true, false));
        let result = lenient.execute(&record).unwrap();
        assert_eq!(result.dropped_anchors, vec![stray]);
        assert_eq!(lenient.metrics().dropped_anchors, 1);
    }
}
