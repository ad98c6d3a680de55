//! Sentence-ending normalization
//!
//! Two passes:
//! 1. a detached ` . ` or ` : ` becomes `". "`
//! 2. one or two `.`/space characters directly after `!`, `?`, `.`, `:` or a
//!    space collapse into a single space
//!
//! The second pass looks one character back, which `regex` cannot express,
//! so it is a small scanner. The look-back always reads the input text, not
//! the rewritten output, so a long run like `"...."` keeps collapsing chunk
//! by chunk.

use crate::patterns::DETACHED_STOP;
use crate::pipeline::StageKind;
use crate::stages::Stage;
use std::borrow::Cow;

pub struct SentenceEndingNormalizer;

impl Stage for SentenceEndingNormalizer {
    fn kind(&self) -> StageKind {
        StageKind::SentenceEndingNormalizer
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match DETACHED_STOP.apply(text) {
            Cow::Borrowed(text) => collapse_trailing_stops(text),
            Cow::Owned(text) => Cow::Owned(collapse_trailing_stops(&text).into_owned()),
        }
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '!' | '?' | '.' | ':' | ' ')
}

fn is_stop(c: char) -> bool {
    matches!(c, '.' | ' ')
}

/// Second pass of the normalizer
pub fn collapse_trailing_stops(text: &str) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        if i > 0 && is_terminal(chars[i - 1]) && is_stop(chars[i]) {
            let run = if i + 1 < chars.len() && is_stop(chars[i + 1]) { 2 } else { 1 };
            if !(run == 1 && chars[i] == ' ') {
                changed = true;
            }
            out.push(' ');
            i += run;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}
