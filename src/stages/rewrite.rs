//! Single-pattern substitution stage

use crate::patterns::Pattern;
use crate::pipeline::StageKind;
use crate::stages::Stage;
use std::borrow::Cow;

/// A stage that is exactly one pattern substitution
pub struct PatternStage {
    kind: StageKind,
    pattern: &'static Pattern,
}

impl PatternStage {
    pub fn new(kind: StageKind, pattern: &'static Pattern) -> Self {
        PatternStage { kind, pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        self.pattern
    }
}

impl Stage for PatternStage {
    fn kind(&self) -> StageKind {
        self.kind
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn test_whitespace_chars_become_single_space() {
        let stage = PatternStage::new(StageKind::WhitespaceCharRemover, &patterns::WHITESPACE_RUN);
        assert_eq!(stage.apply("а\t\tб\r\n\nв  г"), "а б в г");
    }

    #[test]
    fn test_multi_whitespace_collapser_leaves_other_whitespace() {
        let stage = PatternStage::new(StageKind::MultiWhitespaceCollapser, &patterns::MULTI_SPACE);
        assert_eq!(stage.apply("а    б\tв"), "а б\tв");
    }

    #[test]
    fn test_card_before_phone_leaves_nothing_behind() {
        let card = PatternStage::new(StageKind::CardNumberRemover, &patterns::CARD_NUMBER);
        let phone = PatternStage::new(StageKind::PhoneNumberRemover, &patterns::PHONE_NUMBER);
        let text = "Картка 5375 4141 0000 1234 дякуємо";

        let card_first = phone.apply(&card.apply(text)).into_owned();
        assert_eq!(card_first, "Картка  дякуємо");

        // the reverse order leaves a digit fragment of the card behind
        let phone_first = card.apply(&phone.apply(text)).into_owned();
        assert!(phone_first.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pattern_accessor() {
        let stage = PatternStage::new(StageKind::UrlRemover, &patterns::URL);
        assert_eq!(stage.pattern().name(), "url");
    }
}
