//! Pattern library
//!
//! Every rewrite stage is backed by one [`Pattern`]: a named regex plus the
//! policy for what a match is replaced with. The fixed patterns are compiled
//! lazily into statics on first use. Fragments that come from configuration
//! go through [`compile_regex`] when the pipeline is built, so a bad entry
//! surfaces as [`CleanError::Pattern`] instead of a panic.
//!
//! Rust's `regex` has no look-around, so the two rules that need it (sentence
//! segmentation and the sentence-ending pass) are hand-written scanners in
//! their own modules rather than entries here.

use crate::error::CleanError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// What a pattern match is replaced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Remove the match
    Delete,
    /// Replace the match with a single space
    Space,
    /// Replace the match with `". "`
    Period,
    /// Expand a `regex` replacement template (`${1}` style)
    Template(&'static str),
}

impl Replacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Replacement::Delete => "",
            Replacement::Space => " ",
            Replacement::Period => ". ",
            Replacement::Template(template) => template,
        }
    }
}

/// A named, compiled match rule with its replacement policy
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
    replacement: Replacement,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every match. Borrows the input when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

/// Compile a configured regex, naming it in the error on failure
pub fn compile_regex(name: &str, source: &str) -> Result<Regex, CleanError> {
    Regex::new(source).map_err(|source| CleanError::Pattern {
        name: name.to_string(),
        source,
    })
}

fn fixed(name: &'static str, source: &str, replacement: Replacement) -> Pattern {
    Pattern {
        name,
        regex: Regex::new(source).unwrap(),
        replacement,
    }
}

/// Digits glued to a Cyrillic word: `5травня` → `5 травня`
pub static DIGIT_LETTER: Lazy<Pattern> = Lazy::new(|| {
    fixed(
        "digit-letter",
        r"(\d+)(\p{Cyrillic}+)",
        Replacement::Template("${1} ${2}"),
    )
});

/// A `t.me/...` token preceded by whitespace
pub static TELEGRAM_LINK: Lazy<Pattern> =
    Lazy::new(|| fixed("telegram-link", r"\st\.me/\S*", Replacement::Space));

pub static URL: Lazy<Pattern> =
    Lazy::new(|| fixed("url", r"https?://\S+|www\.\S+", Replacement::Space));

/// A blank-line paragraph break, with an optional period or space before it
pub static PARAGRAPH_BREAK: Lazy<Pattern> = Lazy::new(|| {
    fixed(
        "paragraph-break",
        r"(?:\. ?| )?\r?\n\s*\n",
        Replacement::Period,
    )
});

pub static WHITESPACE_RUN: Lazy<Pattern> =
    Lazy::new(|| fixed("whitespace-run", r"\s+", Replacement::Space));

pub static EMAIL: Lazy<Pattern> =
    Lazy::new(|| fixed("email", r"[\w.-]+@[\w.-]+", Replacement::Space));

/// Card numbers and `UA..` IBANs: two leading digits then 14+ digits or spaces
pub static CARD_NUMBER: Lazy<Pattern> =
    Lazy::new(|| fixed("card-number", r"U?A?\d{2} ?[\d ]{14,}", Replacement::Space));

/// Ukrainian phone numbers with optional `+38` prefix and grouped digits.
/// Also matches the tail of a card number, so it has to run after [`CARD_NUMBER`].
pub static PHONE_NUMBER: Lazy<Pattern> = Lazy::new(|| {
    fixed(
        "phone-number",
        r"\+?3?8? ?\(?\d{3}\)?[ -]*\d{3,4}[ -]*\d{2,4}[ -]*\d{2,4}?",
        Replacement::Space,
    )
});

pub static HASHTAG: Lazy<Pattern> =
    Lazy::new(|| fixed("hashtag", r"#\w+", Replacement::Space));

pub static MENTION: Lazy<Pattern> =
    Lazy::new(|| fixed("mention", r"@\w+", Replacement::Space));

/// Emoji with full Unicode coverage: keycaps, flags, pictographs, modifiers,
/// variation selectors, tag sequences and ZWJ chains.
pub static EMOJI: Lazy<Pattern> = Lazy::new(|| {
    fixed(
        "emoji",
        concat!(
            r"[0-9#*]\x{FE0F}?\x{20E3}",
            r"|[\p{Extended_Pictographic}\p{Emoji_Presentation}\p{Emoji_Modifier}\p{Regional_Indicator}]",
            r"[\x{FE0E}\x{FE0F}\x{20E3}\x{E0020}-\x{E007F}\p{Emoji_Modifier}]*",
            r"(?:\x{200D}[\p{Extended_Pictographic}\p{Emoji_Presentation}][\x{FE0E}\x{FE0F}\p{Emoji_Modifier}]*)*",
            r"|[\x{FE0F}\x{20E3}]",
        ),
        Replacement::Delete,
    )
});

/// Emoji by fixed code point ranges. Cheaper than [`EMOJI`] but misses
/// newer blocks and, through its widest range, also deletes CJK text.
pub static EMOJI_RANGES: Lazy<Pattern> = Lazy::new(|| {
    fixed(
        "emoji-ranges",
        concat!(
            "[",
            r"\x{1F600}-\x{1F64F}",
            r"\x{1F300}-\x{1F5FF}",
            r"\x{1F680}-\x{1F6FF}",
            r"\x{1F1E0}-\x{1F1FF}",
            r"\x{2702}-\x{27B0}",
            r"\x{24C2}-\x{1F251}",
            r"\x{1F926}-\x{1F937}",
            r"\x{200D}",
            r"\x{2640}-\x{2642}",
            "]+",
        ),
        Replacement::Delete,
    )
});

/// A lone `.` or `:` with spaces on both sides
pub static DETACHED_STOP: Lazy<Pattern> =
    Lazy::new(|| fixed("detached-stop", r" [.:] ", Replacement::Period));

pub static MULTI_SPACE: Lazy<Pattern> =
    Lazy::new(|| fixed("multi-space", r" {2,}", Replacement::Space));

/// ASCII punctuation plus the typographic dashes, quotes and bullets common in posts
pub const PUNCTUATION: &str = concat!(
    r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
    "—«»–“”―‼…‒",
    "№•°¯−→⁃",
);

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_letter_split() {
        assert_eq!(DIGIT_LETTER.apply("5травня о 10годині"), "5 травня о 10 годині");
        assert_eq!(DIGIT_LETTER.apply("iPhone15 pro"), "iPhone15 pro");
    }

    #[test]
    fn test_telegram_link_needs_leading_whitespace() {
        assert_eq!(TELEGRAM_LINK.apply("Джерело t.me/channel_x далі"), "Джерело  далі");
        assert_eq!(TELEGRAM_LINK.apply("t.me/channel_x"), "t.me/channel_x");
    }

    #[test]
    fn test_url_forms() {
        assert_eq!(URL.apply("see https://a.b/c?d=1 now"), "see   now");
        assert_eq!(URL.apply("see www.example.org"), "see  ");
        assert!(!URL.is_match("example.org"));
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(PARAGRAPH_BREAK.apply("Перше.\n\nДруге"), "Перше. Друге");
        assert_eq!(PARAGRAPH_BREAK.apply("Перше\n  \n\nДруге"), "Перше. Друге");
        assert_eq!(PARAGRAPH_BREAK.apply("Перше\nДруге"), "Перше\nДруге");
    }

    #[test]
    fn test_email() {
        assert_eq!(EMAIL.apply("пишіть на news.desk@mail.com"), "пишіть на  ");
    }

    #[test]
    fn test_card_number_consumes_whole_number() {
        assert_eq!(CARD_NUMBER.apply("Карта 4441 1144 5555 6666"), "Карта  ");
        assert_eq!(
            CARD_NUMBER.apply("IBAN UA213223130000026007233566001"),
            "IBAN  "
        );
    }

    #[test]
    fn test_phone_number_forms() {
        assert_eq!(PHONE_NUMBER.apply("тел +38 (067) 123-45-67"), "тел  ");
        // the optional separator lets the match start at the preceding space
        assert_eq!(PHONE_NUMBER.apply("тел 0671234567"), "тел ");
        assert_eq!(PHONE_NUMBER.apply("о 12:30"), "о 12:30");
    }

    #[test]
    fn test_hashtag_and_mention() {
        assert_eq!(HASHTAG.apply("#новини_дня текст"), "  текст");
        assert_eq!(MENTION.apply("@канал текст"), "  текст");
    }

    #[test]
    fn test_emoji_full_coverage() {
        assert_eq!(EMOJI.apply("😀🇺🇦👍🏽❤️1️⃣👨‍👩‍👧🥲"), "");
        assert_eq!(EMOJI.apply("Слава 🇺🇦 Україні"), "Слава  Україні");
        assert_eq!(EMOJI.apply("рахунок 2:1 #3"), "рахунок 2:1 #3");
    }

    #[test]
    fn test_emoji_ranges_are_incomplete() {
        assert_eq!(EMOJI_RANGES.apply("😀 текст"), " текст");
        // U+1F972 sits outside every range
        assert_eq!(EMOJI_RANGES.apply("🥲"), "🥲");
    }

    #[test]
    fn test_detached_stop() {
        assert_eq!(DETACHED_STOP.apply("кінець . початок"), "кінець. початок");
        assert_eq!(DETACHED_STOP.apply("увага : текст"), "увага. текст");
    }

    #[test]
    fn test_punctuation_set() {
        for c in "!?.,;:«»—–…№•→\"'".chars() {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        assert!(!is_punctuation('ї'));
        assert!(!is_punctuation(' '));
    }

    #[test]
    fn test_compile_reports_name() {
        let err = compile_regex("header.channel_markers", "(unclosed").unwrap_err();
        assert!(err.to_string().starts_with("invalid pattern 'header.channel_markers'"));
        assert!(compile_regex("ok", "(?i)канал").is_ok());
    }

    #[test]
    fn test_apply_borrows_when_unchanged() {
        assert!(matches!(URL.apply("no links here"), Cow::Borrowed(_)));
    }
}
