//! Emoji removal
//!
//! Two strategies share the slot. `Full` matches by Unicode emoji properties
//! and understands multi-code-point sequences, so nothing pictographic
//! survives. `Fast` is the older fixed range list: cheaper, but it misses
//! newer emoji blocks and its widest range also swallows CJK text.

use crate::patterns::{Pattern, EMOJI, EMOJI_RANGES};
use crate::pipeline::StageKind;
use crate::stages::Stage;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which emoji matcher to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiMode {
    #[default]
    Full,
    Fast,
}

impl fmt::Display for EmojiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmojiMode::Full => f.write_str("full"),
            EmojiMode::Fast => f.write_str("fast"),
        }
    }
}

pub struct EmojiRemover {
    mode: EmojiMode,
}

impl EmojiRemover {
    pub fn new(mode: EmojiMode) -> Self {
        EmojiRemover { mode }
    }

    pub fn mode(&self) -> EmojiMode {
        self.mode
    }

    fn pattern(&self) -> &'static Pattern {
        match self.mode {
            EmojiMode::Full => &EMOJI,
            EmojiMode::Fast => &EMOJI_RANGES,
        }
    }
}

impl Default for EmojiRemover {
    fn default() -> Self {
        Self::new(EmojiMode::Full)
    }
}

impl Stage for EmojiRemover {
    fn kind(&self) -> StageKind {
        StageKind::EmojiRemover
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern().apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("😀")]
    #[case("🔥🔥🔥")]
    #[case("🇺🇦")]
    #[case("👍🏿")]
    #[case("❤️")]
    #[case("#️⃣")]
    #[case("👩‍💻")]
    #[case("🏴󠁧󠁢󠁳󠁣󠁴󠁿")]
    #[case("⚡️💥🚀")]
    fn test_full_mode_removes_emoji_only_strings(#[case] input: &str) {
        assert_eq!(EmojiRemover::default().apply(input), "");
    }

    #[test]
    fn test_full_mode_keeps_text() {
        let remover = EmojiRemover::new(EmojiMode::Full);
        assert_eq!(remover.apply("⚡️Вибухи у Києві 💥"), "Вибухи у Києві ");
        assert_eq!(remover.apply("10 из 10, #1"), "10 из 10, #1");
    }

    #[test]
    fn test_fast_mode_uses_ranges() {
        let remover = EmojiRemover::new(EmojiMode::Fast);
        assert_eq!(remover.apply("Новина 😀🚀"), "Новина ");
        assert_eq!(remover.mode(), EmojiMode::Fast);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(EmojiMode::Full.to_string(), "full");
        assert_eq!(EmojiMode::Fast.to_string(), "fast");
    }
}
