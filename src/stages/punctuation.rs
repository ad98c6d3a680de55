//! Punctuation removal

use crate::patterns::is_punctuation;
use crate::pipeline::StageKind;
use crate::stages::Stage;
use std::borrow::Cow;

/// Deletes every character of [`PUNCTUATION`](crate::patterns::PUNCTUATION)
pub struct PunctuationRemover;

impl Stage for PunctuationRemover {
    fn kind(&self) -> StageKind {
        StageKind::PunctuationRemover
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().any(is_punctuation) {
            Cow::Owned(text.chars().filter(|&c| !is_punctuation(c)).collect())
        } else {
            Cow::Borrowed(text)
        }
    }
}
