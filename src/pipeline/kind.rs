//! Stage identities and their canonical order
//!
//! The declaration order of [`StageKind`] is the execution order. Several
//! stages only produce correct output relative to each other: links must be
//! gone before header cleaning looks at a post, card numbers must be consumed
//! before the phone pattern can match a slice of them, and the emoji scan is
//! kept behind the header cleaner so it never walks text that gets dropped.
//! Deriving `Ord` from the declaration keeps that contract in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every stage the pipeline knows about, in canonical execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    DigitLetterSeparator,
    TelegramLinkRemover,
    UrlRemover,
    SentenceSeparator,
    HeaderCleaner,
    WhitespaceCharRemover,
    EmailRemover,
    CardNumberRemover,
    PhoneNumberRemover,
    HashtagRemover,
    MentionRemover,
    EmojiRemover,
    SentenceEndingNormalizer,
    PunctuationRemover,
    MultiWhitespaceCollapser,
    FlankingSpaceStripper,
    LowerCaser,
}

impl StageKind {
    /// All stages in execution order
    pub const CANONICAL_ORDER: [StageKind; 17] = [
        StageKind::DigitLetterSeparator,
        StageKind::TelegramLinkRemover,
        StageKind::UrlRemover,
        StageKind::SentenceSeparator,
        StageKind::HeaderCleaner,
        StageKind::WhitespaceCharRemover,
        StageKind::EmailRemover,
        StageKind::CardNumberRemover,
        StageKind::PhoneNumberRemover,
        StageKind::HashtagRemover,
        StageKind::MentionRemover,
        StageKind::EmojiRemover,
        StageKind::SentenceEndingNormalizer,
        StageKind::PunctuationRemover,
        StageKind::MultiWhitespaceCollapser,
        StageKind::FlankingSpaceStripper,
        StageKind::LowerCaser,
    ];

    /// Stable kebab-case name, matching the configuration spelling
    pub fn name(self) -> &'static str {
        match self {
            StageKind::DigitLetterSeparator => "digit-letter-separator",
            StageKind::TelegramLinkRemover => "telegram-link-remover",
            StageKind::UrlRemover => "url-remover",
            StageKind::SentenceSeparator => "sentence-separator",
            StageKind::HeaderCleaner => "header-cleaner",
            StageKind::WhitespaceCharRemover => "whitespace-char-remover",
            StageKind::EmailRemover => "email-remover",
            StageKind::CardNumberRemover => "card-number-remover",
            StageKind::PhoneNumberRemover => "phone-number-remover",
            StageKind::HashtagRemover => "hashtag-remover",
            StageKind::MentionRemover => "mention-remover",
            StageKind::EmojiRemover => "emoji-remover",
            StageKind::SentenceEndingNormalizer => "sentence-ending-normalizer",
            StageKind::PunctuationRemover => "punctuation-remover",
            StageKind::MultiWhitespaceCollapser => "multi-whitespace-collapser",
            StageKind::FlankingSpaceStripper => "flanking-space-stripper",
            StageKind::LowerCaser => "lower-caser",
        }
    }

    /// One-line description used by `--list-stages`
    pub fn description(self) -> &'static str {
        match self {
            StageKind::DigitLetterSeparator => "Insert a space between digits and Cyrillic letters",
            StageKind::TelegramLinkRemover => "Replace t.me links with a space",
            StageKind::UrlRemover => "Replace http(s) and www links with a space",
            StageKind::SentenceSeparator => "Turn blank-line paragraph breaks into '. '",
            StageKind::HeaderCleaner => "Drop promotional, subscription and donation sentences",
            StageKind::WhitespaceCharRemover => "Replace whitespace runs with a single space",
            StageKind::EmailRemover => "Replace email addresses with a space",
            StageKind::CardNumberRemover => "Replace card and IBAN numbers with a space",
            StageKind::PhoneNumberRemover => "Replace phone numbers with a space",
            StageKind::HashtagRemover => "Replace hashtags with a space",
            StageKind::MentionRemover => "Replace @mentions with a space (off by default)",
            StageKind::EmojiRemover => "Delete emoji and pictographs",
            StageKind::SentenceEndingNormalizer => "Normalize detached and repeated sentence endings",
            StageKind::PunctuationRemover => "Delete ASCII and typographic punctuation",
            StageKind::MultiWhitespaceCollapser => "Collapse repeated spaces",
            StageKind::FlankingSpaceStripper => "Trim leading and trailing whitespace",
            StageKind::LowerCaser => "Lower-case the whole record",
        }
    }

    /// Whether the stage belongs to the default pipeline
    pub fn enabled_by_default(self) -> bool {
        !matches!(self, StageKind::MentionRemover)
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
