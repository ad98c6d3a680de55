//! Terminal stages: trimming and lower-casing

use crate::pipeline::StageKind;
use crate::stages::Stage;
use std::borrow::Cow;

pub struct FlankingSpaceStripper;

impl Stage for FlankingSpaceStripper {
    fn kind(&self) -> StageKind {
        StageKind::FlankingSpaceStripper
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text.trim())
    }
}

pub struct LowerCaser;

impl Stage for LowerCaser {
    fn kind(&self) -> StageKind {
        StageKind::LowerCaser
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(text.to_lowercase())
    }
}
