//! # postclean
//!
//! A text normalization pipeline for scraped channel posts.
//!
//! Raw posts go through a fixed sequence of small rewrite stages (links,
//! contact details, hashtags, emoji, punctuation, casing) and a header
//! cleaner that drops promotional sentences: subscription calls, channel
//! signatures, outlet brands and donation details. The output is one cleaned,
//! lower-cased string per input record, in input order.
//!
//! ## Example
//!
//! ```ignore
//! use postclean::Pipeline;
//!
//! let pipeline = Pipeline::standard()?;
//! let cleaned = pipeline.clean(
//!     "Підпишись на наш канал! Сьогодні сталася подія. https://example.com",
//! );
//! assert_eq!(cleaned, "сьогодні сталася подія");
//! ```
//!
//! ## Modules
//!
//! - [`patterns`]: the compiled pattern library
//! - [`segmenter`]: sentence and line segmentation
//! - [`classifier`]: the promotional-unit classifier
//! - [`stages`]: one implementation per pipeline stage
//! - [`pipeline`]: stage order, builder, batch runners, short-record filter
//! - [`config`]: layered TOML configuration

pub mod classifier;
pub mod config;
pub mod error;
pub mod patterns;
pub mod pipeline;
pub mod segmenter;
pub mod stages;

pub use classifier::{HeaderClassifier, Verdict};
pub use config::{load_defaults, CleanConfig, Loader};
pub use error::CleanError;
pub use pipeline::{FilterPlacement, Pipeline, PipelineBuilder, ShortRecordFilter, StageKind};
pub use stages::{EmojiMode, Stage};
