//! Pipeline builder
//!
//! Collects the stage list and filter placement, checks the list against the
//! canonical order and compiles every stage. Stages are added in the order
//! they should run, like appending transformations to a chain; the builder
//! refuses to produce a pipeline whose order differs from
//! [`StageKind::CANONICAL_ORDER`].

use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::pipeline::filter::{FilterPlacement, ShortRecordFilter};
use crate::pipeline::kind::StageKind;
use crate::pipeline::Pipeline;
use crate::stages::build_stage;

#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    stages: Vec<StageKind>,
    placement: FilterPlacement,
    filter: ShortRecordFilter,
}

impl PipelineBuilder {
    /// Start with no stages and the short-record filter disabled
    pub fn new() -> Self {
        PipelineBuilder {
            stages: Vec::new(),
            placement: FilterPlacement::Disabled,
            filter: ShortRecordFilter::default(),
        }
    }

    /// Start with every stage that runs by default
    pub fn canonical() -> Self {
        Self::new().stages(
            StageKind::CANONICAL_ORDER
                .into_iter()
                .filter(|kind| kind.enabled_by_default()),
        )
    }

    /// Append a stage
    pub fn stage(mut self, kind: StageKind) -> Self {
        self.stages.push(kind);
        self
    }

    /// Append several stages
    pub fn stages(mut self, kinds: impl IntoIterator<Item = StageKind>) -> Self {
        self.stages.extend(kinds);
        self
    }

    /// Remove a stage wherever it appears
    pub fn without(mut self, kind: StageKind) -> Self {
        self.stages.retain(|k| *k != kind);
        self
    }

    /// Enable the short-record filter at `placement`
    pub fn short_record_filter(mut self, placement: FilterPlacement, min_length: usize) -> Self {
        self.placement = placement;
        self.filter = ShortRecordFilter::new(min_length);
        self
    }

    pub fn kinds(&self) -> &[StageKind] {
        &self.stages
    }

    /// Check the stage list against the canonical order
    pub fn validate(&self) -> Result<(), CleanError> {
        for pair in self.stages.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if current == next {
                return Err(CleanError::DuplicateStage(current));
            }
            if current > next {
                return Err(CleanError::StageOrder {
                    earlier: next,
                    later: current,
                });
            }
        }
        Ok(())
    }

    /// Validate and compile the pipeline
    pub fn build(self, config: &CleanConfig) -> Result<Pipeline, CleanError> {
        self.validate()?;
        let stages = self
            .stages
            .iter()
            .map(|kind| build_stage(*kind, config))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            stages = ?self.stages,
            filter = %self.placement,
            "built cleaning pipeline"
        );
        Ok(Pipeline::new(stages, self.placement, self.filter))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
