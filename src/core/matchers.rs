//! Longest-match probes used by the encoder at each scan position.
//!
//! Each probe looks only at the text starting at `start` and either reports
//! the ID and byte length of the longest entry of its class found there, or
//! nothing. The encoder tries them in priority order: special phrase, then
//! word, then single character.

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};

use super::vocab::Vocab;

/// A successful probe: token ID and number of input bytes consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub id: u32,
    pub len: usize,
}

/// Anchored, ASCII-case-insensitive automaton over the special phrases.
///
/// Leftmost-longest semantics with an anchored start give the same result as
/// trying every length from the longest phrase down to two characters and
/// keeping the first hit.
#[derive(Debug, Clone)]
pub struct SpecialMatcher {
    automaton: Option<AhoCorasick>,
    ids: Vec<u32>,
}

impl SpecialMatcher {
    /// Build the automaton for a vocabulary's special phrases.
    pub fn new(vocab: &Vocab) -> Result<Self, aho_corasick::BuildError> {
        let phrases = vocab.special_phrases();
        let ids = phrases.iter().map(|&(_, id)| id).collect();

        let automaton = if phrases.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .match_kind(MatchKind::LeftmostLongest)
                    .start_kind(StartKind::Anchored)
                    .build(phrases.iter().map(|(phrase, _)| phrase.as_str()))?,
            )
        };

        Ok(Self { automaton, ids })
    }

    /// Longest special phrase starting exactly at `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Match> {
        let automaton = self.automaton.as_ref()?;
        if start >= text.len() {
            return None;
        }

        let input = Input::new(text).range(start..).anchored(Anchored::Yes);
        let m = automaton.find(input)?;
        Some(Match {
            id: self.ids[m.pattern().as_usize()],
            len: m.len(),
        })
    }
}

/// Special-phrase probe (case-insensitive).
pub fn match_special(matcher: &SpecialMatcher, text: &str, start: usize) -> Option<Match> {
    matcher.find_at(text, start)
}

/// Word probe: longest dictionary word starting at `start`, compared
/// case-sensitively, at least two bytes long.
pub fn match_word(vocab: &Vocab, text: &str, start: usize) -> Option<Match> {
    let max_len = vocab.max_word_len().min(text.len().saturating_sub(start));

    (2..=max_len).rev().find_map(|len| {
        // Lengths that split a multi-byte character are not candidates.
        let candidate = text.get(start..start + len)?;
        vocab.word_id(candidate).map(|id| Match { id, len })
    })
}

/// Character probe: the single character at `start`, if it is in the
/// character set.
pub fn match_char(vocab: &Vocab, text: &str, start: usize) -> Option<Match> {
    let ch = text.get(start..)?.chars().next()?;
    vocab.char_id(ch).map(|id| Match {
        id,
        len: ch.len_utf8(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocab::VocabSources;

    fn make_vocab() -> Vocab {
        let sources = VocabSources::empty()
            .with_special_phrases([("ab cd", 1), ("ab cd ef", 2)])
            .with_chars("abcdef ")
            .with_base_words(["ab", "abc", "cd"]);
        Vocab::build(&sources).unwrap()
    }

    #[test]
    fn test_special_prefers_longest() {
        let vocab = make_vocab();
        let matcher = SpecialMatcher::new(&vocab).unwrap();
        assert_eq!(
            match_special(&matcher, "ab cd ef!", 0),
            Some(Match { id: 2, len: 8 })
        );
        assert_eq!(
            match_special(&matcher, "ab cd e", 0),
            Some(Match { id: 1, len: 5 })
        );
    }

    #[test]
    fn test_special_ignores_ascii_case() {
        let vocab = make_vocab();
        let matcher = SpecialMatcher::new(&vocab).unwrap();
        assert_eq!(
            match_special(&matcher, "xAB CD", 1),
            Some(Match { id: 1, len: 5 })
        );
    }

    #[test]
    fn test_special_is_anchored() {
        let vocab = make_vocab();
        let matcher = SpecialMatcher::new(&vocab).unwrap();
        assert_eq!(match_special(&matcher, "xab cd", 0), None);
        assert_eq!(match_special(&matcher, "ab cd", 5), None);
    }

    #[test]
    fn test_special_without_phrases() {
        let vocab = Vocab::build(&VocabSources::empty().with_chars("a")).unwrap();
        let matcher = SpecialMatcher::new(&vocab).unwrap();
        assert_eq!(match_special(&matcher, "aa", 0), None);
    }

    #[test]
    fn test_word_prefers_longest() {
        let vocab = make_vocab();
        let abc = vocab.id("abc").unwrap();
        assert_eq!(match_word(&vocab, "abcd", 0), Some(Match { id: abc, len: 3 }));
        let cd = vocab.id("cd").unwrap();
        assert_eq!(match_word(&vocab, "abcd", 2), Some(Match { id: cd, len: 2 }));
    }

    #[test]
    fn test_word_is_case_sensitive() {
        let vocab = make_vocab();
        let cap = vocab.id("Abc").unwrap();
        assert_ne!(Some(cap), vocab.id("abc"));
        assert_eq!(match_word(&vocab, "Abc", 0), Some(Match { id: cap, len: 3 }));
        assert_eq!(match_word(&vocab, "aBc", 0), None);
    }

    #[test]
    fn test_word_skips_non_boundary_lengths() {
        let vocab = make_vocab();
        assert_eq!(match_word(&vocab, "é", 0), None);
        assert_eq!(match_word(&vocab, "a", 0), None);
    }

    #[test]
    fn test_char_match() {
        let vocab = make_vocab();
        let f = vocab.id("f").unwrap();
        assert_eq!(match_char(&vocab, "xf", 1), Some(Match { id: f, len: 1 }));
        assert_eq!(match_char(&vocab, "€", 0), None);
        assert_eq!(match_char(&vocab, "a", 1), None);
    }
}
