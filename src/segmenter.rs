//! Sentence and line segmentation
//!
//! A post is cut into units in two passes:
//! 1. sentence boundaries: right after `.`, `!` or `?` when whitespace follows
//!    (the whitespace itself is dropped)
//! 2. line breaks inside each sentence: `\r\n`, `\r` or `\n`, each break kept
//!    as a unit of its own
//!
//! Units borrow from the input. Empty units are skipped since no classifier
//! threshold can keep them.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split text into sentence and line units, in order
pub fn segment(text: &str) -> Vec<&str> {
    sentences(text).into_iter().flat_map(lines).collect()
}

/// Sentence pieces. The terminal punctuation stays with its sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(text) {
        // punctuation is one ASCII byte
        pieces.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    pieces.push(&text[start..]);
    pieces
}

/// Lines of a piece, with every line break yielded as its own unit
pub fn lines(piece: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    for brk in LINE_BREAK.find_iter(piece) {
        if brk.start() > start {
            units.push(&piece[start..brk.start()]);
        }
        units.push(brk.as_str());
        start = brk.end();
    }
    if start < piece.len() {
        units.push(&piece[start..]);
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_after_terminal_punctuation() {
        let pieces = sentences("Перше речення. Друге! Третє? Кінець");
        assert_eq!(pieces, vec!["Перше речення.", "Друге!", "Третє?", "Кінець"]);
    }

    #[test]
    fn test_sentences_need_trailing_whitespace() {
        let pieces = sentences("версія 2.0 вийшла");
        assert_eq!(pieces, vec!["версія 2.0 вийшла"]);
    }

    #[test]
    fn test_sentences_keep_repeated_punctuation() {
        let pieces = sentences("Що?! Так...  Далі");
        assert_eq!(pieces, vec!["Що?!", "Так...", "Далі"]);
    }

    #[test]
    fn test_sentences_trailing_boundary_leaves_empty_tail() {
        let pieces = sentences("Кінець. ");
        assert_eq!(pieces, vec!["Кінець.", ""]);
    }

    #[test]
    fn test_lines_keep_breaks_as_units() {
        let units = lines("рядок1\r\nрядок2\nрядок3\rрядок4");
        assert_eq!(
            units,
            vec!["рядок1", "\r\n", "рядок2", "\n", "рядок3", "\r", "рядок4"]
        );
    }

    #[test]
    fn test_lines_consecutive_breaks() {
        let units = lines("а\n\nб");
        assert_eq!(units, vec!["а", "\n", "\n", "б"]);
    }

    #[test]
    fn test_segment_combines_both_passes() {
        let units = segment("Заголовок\nПерше речення. Друге речення");
        assert_eq!(
            units,
            vec!["Заголовок", "\n", "Перше речення.", "Друге речення"]
        );
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("").is_empty());
    }
}
