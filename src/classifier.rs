//! Ad and header classifier
//!
//! Channel posts routinely carry boilerplate around the actual news: calls to
//! subscribe, "our channel"/"link to" footers, `@channel` signatures, named
//! outlet brands and donation blocks with card or wallet details. The
//! classifier decides, one unit at a time, whether a sentence or line is such
//! boilerplate. It is a plain pattern filter with no scoring: a unit is kept
//! only when it is long enough and matches none of the three pattern groups.
//!
//! All pattern groups are compiled case-insensitively from [`HeaderConfig`]
//! when the classifier is built.

use crate::config::HeaderConfig;
use crate::error::CleanError;
use crate::patterns::compile_regex;
use crate::segmenter;
use regex::Regex;

/// Why a unit was kept or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Too few characters to carry content
    TooShort,
    /// Call to subscribe
    Subscribe,
    /// Channel self-reference, mention, link-to or a named outlet
    Channel,
    /// Currency, bank or wallet term followed by a colon
    Payment,
}

impl Verdict {
    pub fn is_kept(self) -> bool {
        self == Verdict::Keep
    }
}

/// Compiled header patterns
#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    max_noise_length: usize,
    subscribe: Option<Regex>,
    channel: Option<Regex>,
    payment: Option<Regex>,
}

impl HeaderClassifier {
    /// Compile the classifier from configuration.
    ///
    /// An empty pattern group never disqualifies anything.
    pub fn from_config(config: &HeaderConfig) -> Result<Self, CleanError> {
        let subscribe = alternation("header.subscribe_patterns", &config.subscribe_patterns)?
            .map(|alt| compile_regex("header.subscribe_patterns", &format!("(?i){}", alt)))
            .transpose()?;

        let channel_fragments: Vec<&str> = config
            .channel_markers
            .iter()
            .map(String::as_str)
            .chain(config.active_outlets())
            .collect();
        let channel = alternation("header.channel_markers", &channel_fragments)?
            .map(|alt| compile_regex("header.channel_markers", &format!("(?i){}", alt)))
            .transpose()?;

        let payment = alternation("header.payment_terms", &config.payment_terms)?
            .map(|alt| {
                compile_regex(
                    "header.payment_terms",
                    &format!("(?i)(?:{}).{{0,{}}}:", alt, config.payment_window),
                )
            })
            .transpose()?;

        Ok(HeaderClassifier {
            max_noise_length: config.max_noise_length,
            subscribe,
            channel,
            payment,
        })
    }

    /// Classify a single unit
    pub fn classify(&self, unit: &str) -> Verdict {
        if unit.chars().count() <= self.max_noise_length {
            return Verdict::TooShort;
        }
        if matches(&self.subscribe, unit) {
            return Verdict::Subscribe;
        }
        if matches(&self.channel, unit) {
            return Verdict::Channel;
        }
        if matches(&self.payment, unit) {
            return Verdict::Payment;
        }
        Verdict::Keep
    }

    /// Segment `text`, drop disqualified units and join the survivors with `". "`
    pub fn clean(&self, text: &str) -> String {
        segmenter::segment(text)
            .into_iter()
            .filter(|unit| self.classify(unit).is_kept())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

fn matches(regex: &Option<Regex>, unit: &str) -> bool {
    regex.as_ref().is_some_and(|regex| regex.is_match(unit))
}

/// Join fragments into one `(?:a)|(?:b)` alternation, checking each fragment
/// on its own first so a bad entry is reported by its text.
fn alternation<S: AsRef<str>>(group: &str, fragments: &[S]) -> Result<Option<String>, CleanError> {
    if fragments.is_empty() {
        return Ok(None);
    }
    let mut parts = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let fragment = fragment.as_ref();
        compile_regex(&format!("{}: {}", group, fragment), fragment)?;
        parts.push(format!("(?:{})", fragment));
    }
    Ok(Some(parts.join("|")))
}
