//! Individual rewrite stages
//!
//! Each stage implements [`Stage`]: a pure `&str -> String` rewrite of one
//! record. Most stages are a single [`Pattern`](crate::patterns::Pattern)
//! substitution and share [`PatternStage`]; the rest carry their own logic.
//! [`build_stage`] maps a [`StageKind`] to its implementation.

pub mod casing;
pub mod emoji;
pub mod header;
pub mod punctuation;
pub mod rewrite;
pub mod sentence_ending;

pub use casing::{FlankingSpaceStripper, LowerCaser};
pub use emoji::{EmojiMode, EmojiRemover};
pub use header::HeaderCleaner;
pub use punctuation::PunctuationRemover;
pub use rewrite::PatternStage;
pub use sentence_ending::SentenceEndingNormalizer;

use crate::classifier::HeaderClassifier;
use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::patterns;
use crate::pipeline::StageKind;
use std::borrow::Cow;

/// A single per-record rewrite
pub trait Stage: Send + Sync {
    /// Which slot of the canonical order this stage fills
    fn kind(&self) -> StageKind;

    /// Rewrite one record.
    ///
    /// A `Cow::Borrowed` result must be a subslice of `text`, such as a
    /// trimmed view. Borrowing the whole of `text` means the record is
    /// unchanged; any rewrite that is not a subslice returns `Cow::Owned`.
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Rewrite a whole collection, preserving order and length.
    ///
    /// A missing record is an input-contract violation and fails with
    /// [`CleanError::InvalidInput`].
    fn transform(&self, records: &[Option<String>]) -> Result<Vec<String>, CleanError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| match record {
                Some(text) => Ok(self.apply(text).into_owned()),
                None => Err(CleanError::InvalidInput {
                    stage: self.kind().name(),
                    index,
                }),
            })
            .collect()
    }
}

/// Build the implementation of `kind` using `config`
pub fn build_stage(kind: StageKind, config: &CleanConfig) -> Result<Box<dyn Stage>, CleanError> {
    let stage: Box<dyn Stage> = match kind {
        StageKind::DigitLetterSeparator => Box::new(PatternStage::new(kind, &patterns::DIGIT_LETTER)),
        StageKind::TelegramLinkRemover => Box::new(PatternStage::new(kind, &patterns::TELEGRAM_LINK)),
        StageKind::UrlRemover => Box::new(PatternStage::new(kind, &patterns::URL)),
        StageKind::SentenceSeparator => Box::new(PatternStage::new(kind, &patterns::PARAGRAPH_BREAK)),
        StageKind::HeaderCleaner => Box::new(HeaderCleaner::new(HeaderClassifier::from_config(
            &config.header,
        )?)),
        StageKind::WhitespaceCharRemover => {
            Box::new(PatternStage::new(kind, &patterns::WHITESPACE_RUN))
        }
        StageKind::EmailRemover => Box::new(PatternStage::new(kind, &patterns::EMAIL)),
        StageKind::CardNumberRemover => Box::new(PatternStage::new(kind, &patterns::CARD_NUMBER)),
        StageKind::PhoneNumberRemover => Box::new(PatternStage::new(kind, &patterns::PHONE_NUMBER)),
        StageKind::HashtagRemover => Box::new(PatternStage::new(kind, &patterns::HASHTAG)),
        StageKind::MentionRemover => Box::new(PatternStage::new(kind, &patterns::MENTION)),
        StageKind::EmojiRemover => Box::new(EmojiRemover::new(config.pipeline.emoji)),
        StageKind::SentenceEndingNormalizer => Box::new(SentenceEndingNormalizer),
        StageKind::PunctuationRemover => Box::new(PunctuationRemover),
        StageKind::MultiWhitespaceCollapser => {
            Box::new(PatternStage::new(kind, &patterns::MULTI_SPACE))
        }
        StageKind::FlankingSpaceStripper => Box::new(FlankingSpaceStripper),
        StageKind::LowerCaser => Box::new(LowerCaser),
    };
    Ok(stage)
}
