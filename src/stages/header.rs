//! Header cleaning stage, a thin wrapper over [`HeaderClassifier`]

use crate::classifier::HeaderClassifier;
use crate::pipeline::StageKind;
use crate::stages::Stage;
use std::borrow::Cow;

pub struct HeaderCleaner {
    classifier: HeaderClassifier,
}

impl HeaderCleaner {
    pub fn new(classifier: HeaderClassifier) -> Self {
        HeaderCleaner { classifier }
    }

    pub fn classifier(&self) -> &HeaderClassifier {
        &self.classifier
    }
}

impl Stage for HeaderCleaner {
    fn kind(&self) -> StageKind {
        StageKind::HeaderCleaner
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(self.classifier.clean(text))
    }
}
