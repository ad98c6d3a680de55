//! Pipeline composition
//!
//! A [`Pipeline`] is an ordered, immutable list of compiled stages plus an
//! optional short-record filter. It is built once, either from configuration
//! ([`Pipeline::from_config`]) or through [`PipelineBuilder`], and then run
//! over as many batches as needed.
//!
//! # Running
//!
//! - [`Pipeline::clean`]: one record through every stage
//! - [`Pipeline::run`]: a batch of possibly missing records, sequentially
//! - [`Pipeline::run_parallel`]: the same batch spread over the rayon pool
//! - [`Pipeline::clean_batch`]: a batch of plain strings
//!
//! Every stage is a per-record pure function, so records can be cleaned in
//! any order or in parallel; results always come back in input order. Only
//! the short-record filter may shrink a batch.

pub mod builder;
pub mod filter;
pub mod kind;

pub use builder::PipelineBuilder;
pub use filter::{FilterPlacement, ShortRecordFilter};
pub use kind::StageKind;

use crate::config::{self, CleanConfig};
use crate::error::CleanError;
use crate::stages::Stage;
use rayon::prelude::*;
use std::borrow::Cow;
use std::fmt;

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    placement: FilterPlacement,
    filter: ShortRecordFilter,
}

impl Pipeline {
    pub(crate) fn new(
        stages: Vec<Box<dyn Stage>>,
        placement: FilterPlacement,
        filter: ShortRecordFilter,
    ) -> Self {
        Pipeline {
            stages,
            placement,
            filter,
        }
    }

    /// Start building a pipeline stage by stage
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Build the pipeline a configuration describes
    pub fn from_config(config: &CleanConfig) -> Result<Self, CleanError> {
        PipelineBuilder::new()
            .stages(config.pipeline.enabled_stages())
            .short_record_filter(
                config.pipeline.short_record_filter,
                config.pipeline.min_record_length,
            )
            .build(config)
    }

    /// Build the pipeline described by the embedded defaults
    pub fn standard() -> Result<Self, CleanError> {
        Self::from_config(&config::load_defaults()?)
    }

    /// Stage kinds in execution order
    pub fn kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(|stage| stage.kind()).collect()
    }

    pub fn filter_placement(&self) -> FilterPlacement {
        self.placement
    }

    /// Run one record through every stage
    pub fn clean(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in &self.stages {
            // a borrowed result is a subslice; full length means untouched
            let next = match stage.apply(&current) {
                Cow::Borrowed(slice) if slice.len() == current.len() => None,
                rewritten => Some(rewritten.into_owned()),
            };
            if let Some(next) = next {
                current = next;
            }
        }
        current
    }

    /// Clean a batch sequentially.
    ///
    /// Missing records are dropped by a filter placed first; anywhere else
    /// they fail with [`CleanError::InvalidInput`] naming the first missing index.
    pub fn run(&self, records: Vec<Option<String>>) -> Result<Vec<String>, CleanError> {
        tracing::debug!(records = records.len(), "running pipeline");
        let records = self.present(self.filter_first(records))?;
        let cleaned = records.iter().map(|record| self.clean(record)).collect();
        Ok(self.filter_last(cleaned))
    }

    /// Clean a batch on the rayon thread pool.
    ///
    /// Output order and the reported missing index both match [`Pipeline::run`].
    pub fn run_parallel(&self, records: Vec<Option<String>>) -> Result<Vec<String>, CleanError> {
        tracing::debug!(records = records.len(), "running pipeline in parallel");
        let records = self.present(self.filter_first(records))?;
        let cleaned = records.par_iter().map(|record| self.clean(record)).collect();
        Ok(self.filter_last(cleaned))
    }

    /// Clean a batch of present records
    pub fn clean_batch<S: AsRef<str>>(&self, records: &[S]) -> Vec<String> {
        let records: Vec<Option<&str>> = records.iter().map(|r| Some(r.as_ref())).collect();
        let cleaned = self
            .filter_first(records)
            .into_iter()
            .flatten()
            .map(|record| self.clean(record))
            .collect();
        self.filter_last(cleaned)
    }

    /// Unwrap every record, failing on the first missing one
    fn present(&self, records: Vec<Option<String>>) -> Result<Vec<String>, CleanError> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.ok_or_else(|| CleanError::InvalidInput {
                    stage: self
                        .stages
                        .first()
                        .map(|stage| stage.kind().name())
                        .unwrap_or("pipeline"),
                    index,
                })
            })
            .collect()
    }

    fn filter_first<S: AsRef<str>>(&self, records: Vec<Option<S>>) -> Vec<Option<S>> {
        match self.placement {
            FilterPlacement::First => self.filter.filter(records).into_iter().map(Some).collect(),
            _ => records,
        }
    }

    fn filter_last(&self, records: Vec<String>) -> Vec<String> {
        match self.placement {
            FilterPlacement::Last => self.filter.filter(records.into_iter().map(Some)),
            _ => records,
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.kinds())
            .field("placement", &self.placement)
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Loader;

    fn records(texts: &[&str]) -> Vec<Option<String>> {
        texts.iter().map(|t| Some(t.to_string())).collect()
    }

    #[test]
    fn test_standard_pipeline_is_canonical() {
        let pipeline = Pipeline::standard().unwrap();
        let expected: Vec<_> = StageKind::CANONICAL_ORDER
            .into_iter()
            .filter(|kind| *kind != StageKind::MentionRemover)
            .collect();
        assert_eq!(pipeline.kinds(), expected);
        assert_eq!(pipeline.filter_placement(), FilterPlacement::Disabled);
    }

    #[test]
    fn test_clean_single_record() {
        let pipeline = Pipeline::standard().unwrap();
        assert_eq!(pipeline.clean("  Слава   Україні!  "), "слава україні");
    }

    #[test]
    fn test_run_preserves_order() {
        let pipeline = Pipeline::standard().unwrap();
        let out = pipeline
            .run(records(&["Перший запис", "ДРУГИЙ запис", ""]))
            .unwrap();
        assert_eq!(out, vec!["перший запис", "другий запис", ""]);
    }

    #[test]
    fn test_run_rejects_missing_record() {
        let pipeline = Pipeline::standard().unwrap();
        let err = pipeline
            .run(vec![Some("текст".to_string()), None])
            .unwrap_err();
        assert!(matches!(
            err,
            CleanError::InvalidInput {
                stage: "digit-letter-separator",
                index: 1
            }
        ));
    }

    #[test]
    fn test_parallel_reports_first_missing_record() {
        let pipeline = Pipeline::standard().unwrap();
        let mut input = records(&["запис номер один"; 64]);
        input[5] = None;
        input[40] = None;
        input[63] = None;
        for result in [pipeline.run(input.clone()), pipeline.run_parallel(input)] {
            assert!(matches!(
                result.unwrap_err(),
                CleanError::InvalidInput { index: 5, .. }
            ));
        }
    }

    #[test]
    fn test_clean_trims_leftover_spaces() {
        let pipeline = Pipeline::standard().unwrap();
        assert_eq!(pipeline.clean("Привіт світ 😀"), "привіт світ");
        assert_eq!(pipeline.clean("Новини дня #київ"), "новини дня");
        assert_eq!(pipeline.clean("Деталі тут https://example.com"), "деталі тут");
    }

    #[test]
    fn test_borrowed_subslice_is_applied() {
        let pipeline = Pipeline::builder()
            .stage(StageKind::FlankingSpaceStripper)
            .build(&config::load_defaults().unwrap())
            .unwrap();
        assert_eq!(pipeline.clean("  текст \t"), "текст");
        assert_eq!(pipeline.clean("текст"), "текст");
    }

    #[test]
    fn test_filter_first_drops_missing_records() {
        let config = Loader::new()
            .set_override("pipeline.short_record_filter", "first")
            .unwrap()
            .build()
            .unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        let out = pipeline
            .run(vec![
                None,
                Some("коротко".to_string()),
                Some("Досить довгий запис".to_string()),
            ])
            .unwrap();
        assert_eq!(out, vec!["досить довгий запис"]);
    }

    #[test]
    fn test_filter_last_sees_cleaned_text() {
        let config = Loader::new()
            .set_override("pipeline.short_record_filter", "last")
            .unwrap()
            .build()
            .unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        // long enough raw, empty once the link and the short leftover are gone
        let out = pipeline
            .run(records(&["ok https://x.y", "Довгий чистий запис"]))
            .unwrap();
        assert_eq!(out, vec!["довгий чистий запис"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pipeline = Pipeline::standard().unwrap();
        let input = records(&[
            "Підпишись на наш канал! Новина дня.",
            "Картка 5375 4141 0000 1234",
            "😀 Привіт, світ!",
            "#новини Київ",
        ]);
        assert_eq!(
            pipeline.run_parallel(input.clone()).unwrap(),
            pipeline.run(input).unwrap()
        );
    }

    #[test]
    fn test_clean_batch() {
        let pipeline = Pipeline::standard().unwrap();
        assert_eq!(
            pipeline.clean_batch(&["Перший", "Другий"]),
            vec!["перший".to_string(), "другий".to_string()]
        );
    }

    #[test]
    fn test_debug_lists_stages() {
        let pipeline = Pipeline::builder()
            .stage(StageKind::LowerCaser)
            .build(&config::load_defaults().unwrap())
            .unwrap();
        assert!(format!("{:?}", pipeline).contains("LowerCaser"));
    }
}
