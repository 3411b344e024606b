use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use super::matchers::{match_char, match_special, match_word, Match, SpecialMatcher};
use super::vocab::{TokenKind, Vocab, VocabError, VocabSources};

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Unknown token at position {position}: {character:?}")]
    UnknownToken { position: usize, character: char },
    #[error("Vocabulary error: {0}")]
    VocabError(#[from] VocabError),
    #[error("Aho-Corasick build error: {0}")]
    AhoCorasickError(#[from] aho_corasick::BuildError),
}

/// How the encoder treats input that no matcher recognises.
///
/// By default unknown characters are dropped. `strict` turns them into an
/// error; otherwise `unknown_id` (when set) emits a placeholder span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub strict: bool,
    pub unknown_id: Option<u32>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`TokenizerError::UnknownToken`] on the first unmatched
    /// character. Takes precedence over [`unknown_id`](Self::unknown_id).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Emit a placeholder span with this ID for each unmatched character.
    pub fn unknown_id(mut self, id: u32) -> Self {
        self.unknown_id = Some(id);
        self
    }
}

/// One matched unit of input.
///
/// `start` and `end` are byte offsets into the encoded string, so
/// `&input[start..end] == original_text`. `text` is the vocabulary spelling
/// of the token, which differs from `original_text` when a special phrase was
/// matched in a different case. Placeholder spans have an empty `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedSpan {
    pub id: u32,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub original_text: String,
    pub kind: TokenKind,
}

/// Greedy longest-match tokenizer over a fixed vocabulary.
///
/// At every position the special-phrase matcher runs first, then the word
/// matcher, then the character matcher; the first class that matches wins
/// even if a later class could have consumed more input.
///
/// The tokenizer holds no mutable state, so a single instance can be shared
/// freely across threads. Batch methods parallelize across inputs with Rayon.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab: Vocab,
    special_matcher: SpecialMatcher,
}

impl Tokenizer {
    /// Build a vocabulary from `sources` and wrap it in a tokenizer.
    pub fn new(sources: &VocabSources) -> Result<Self, TokenizerError> {
        let vocab = Vocab::build(sources)?;
        Self::from_vocab(vocab)
    }

    /// Create a tokenizer around an already-built vocabulary.
    pub fn from_vocab(vocab: Vocab) -> Result<Self, TokenizerError> {
        let special_matcher = SpecialMatcher::new(&vocab)?;
        Ok(Self {
            vocab,
            special_matcher,
        })
    }

    /// Run the matchers in priority order at `start`.
    fn match_at(&self, text: &str, start: usize) -> Option<(Match, TokenKind)> {
        match_special(&self.special_matcher, text, start)
            .map(|m| (m, TokenKind::Special))
            .or_else(|| match_word(&self.vocab, text, start).map(|m| (m, TokenKind::Word)))
            .or_else(|| match_char(&self.vocab, text, start).map(|m| (m, TokenKind::Character)))
    }

    /// Encode text into spans (ID, token text, byte offsets, consumed input).
    ///
    /// # Errors
    /// Only with `options.strict`: returns [`TokenizerError::UnknownToken`]
    /// for the first character no matcher recognises.
    pub fn encode_with_spans(
        &self,
        text: &str,
        options: EncodeOptions,
    ) -> Result<Vec<EncodedSpan>, TokenizerError> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            if let Some((m, kind)) = self.match_at(text, pos) {
                let end = pos + m.len;
                let original = &text[pos..end];
                let token = self.vocab.token(m.id).unwrap_or(original);
                spans.push(EncodedSpan {
                    id: m.id,
                    text: token.to_string(),
                    start: pos,
                    end,
                    original_text: original.to_string(),
                    kind,
                });
                pos = end;
                continue;
            }

            // `pos` always sits on a char boundary: every match ends on one.
            let Some(ch) = text[pos..].chars().next() else {
                break;
            };

            if options.strict {
                debug!(position = pos, character = ?ch, "unknown token in strict mode");
                return Err(TokenizerError::UnknownToken {
                    position: pos,
                    character: ch,
                });
            }

            let end = pos + ch.len_utf8();
            if let Some(id) = options.unknown_id {
                spans.push(EncodedSpan {
                    id,
                    text: String::new(),
                    start: pos,
                    end,
                    original_text: ch.to_string(),
                    kind: TokenKind::Unknown,
                });
            } else {
                trace!(position = pos, character = ?ch, "dropping unknown character");
            }
            pos = end;
        }

        Ok(spans)
    }

    /// Encode text to token IDs.
    ///
    /// # Errors
    /// Same as [`encode_with_spans`](Self::encode_with_spans).
    pub fn encode_letters(
        &self,
        text: &str,
        options: EncodeOptions,
    ) -> Result<Vec<u32>, TokenizerError> {
        let spans = self.encode_with_spans(text, options)?;
        Ok(spans.into_iter().map(|s| s.id).collect())
    }

    /// Encode text to token IDs with default options.
    ///
    /// Unknown characters are dropped, so this never fails.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.encode_letters(text, EncodeOptions::default())
            .unwrap_or_default()
    }

    /// Decode token IDs to a string.
    ///
    /// IDs missing from the vocabulary are skipped; decoding never fails.
    pub fn decode_letters(&self, ids: &[u32]) -> String {
        let mut result = String::with_capacity(ids.len());
        for &id in ids {
            match self.vocab.token(id) {
                Some(token) => result.push_str(token),
                None => trace!(id, "skipping unknown id"),
            }
        }
        result
    }

    /// Batch encode multiple texts to spans in parallel.
    pub fn encode_batch(
        &self,
        texts: &[String],
        options: EncodeOptions,
    ) -> Result<Vec<Vec<EncodedSpan>>, TokenizerError> {
        texts
            .par_iter()
            .map(|text| self.encode_with_spans(text, options))
            .collect()
    }

    /// Batch encode multiple texts to token IDs in parallel.
    pub fn encode_letters_batch(
        &self,
        texts: &[String],
        options: EncodeOptions,
    ) -> Result<Vec<Vec<u32>>, TokenizerError> {
        texts
            .par_iter()
            .map(|text| self.encode_letters(text, options))
            .collect()
    }

    /// Batch decode multiple ID lists in parallel.
    pub fn decode_batch(&self, id_lists: &[Vec<u32>]) -> Vec<String> {
        id_lists
            .par_iter()
            .map(|ids| self.decode_letters(ids))
            .collect()
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Number of vocabulary entries.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get the forward map (token text -> ID).
    pub fn token_to_id(&self) -> &FxHashMap<String, u32> {
        self.vocab.token_to_id()
    }

    /// Get the inverse map (ID -> token text).
    pub fn id_to_token(&self) -> &FxHashMap<u32, String> {
        self.vocab.id_to_token()
    }

    /// Get the set of IDs reserved by special phrases.
    pub fn special_ids(&self) -> &FxHashSet<u32> {
        self.vocab.special_ids()
    }

    pub fn max_word_len(&self) -> usize {
        self.vocab.max_word_len()
    }

    pub fn max_special_len(&self) -> usize {
        self.vocab.max_special_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_tokenizer() -> Tokenizer {
        let sources = VocabSources::empty()
            .with_special_phrases([("Hello World", 1)])
            .with_chars("abcdefghijklmnopqrstuvwxyzHW ")
            .with_base_words(["hello", "world", "he", "low"]);
        Tokenizer::new(&sources).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let tokenizer = make_test_tokenizer();
        let text = "hello there";
        let tokens = tokenizer.encode(text);
        assert_eq!(tokenizer.decode_letters(&tokens), text);
    }

    #[test]
    fn test_special_beats_words() {
        let tokenizer = make_test_tokenizer();
        assert_eq!(tokenizer.encode("hello world"), vec![1]);
        assert_eq!(tokenizer.decode_letters(&[1]), "Hello World");
    }

    #[test]
    fn test_longest_word_wins() {
        let tokenizer = make_test_tokenizer();
        let vocab = tokenizer.vocab();
        let hello = vocab.id("hello").unwrap();
        let w = vocab.id("w").unwrap();
        assert_eq!(tokenizer.encode("hellow"), vec![hello, w]);
        assert_eq!(tokenizer.encode("low"), vec![vocab.id("low").unwrap()]);
    }

    #[test]
    fn test_spans_offsets() {
        let tokenizer = make_test_tokenizer();
        let text = "HELLO WORLD he";
        let spans = tokenizer.encode_with_spans(text, EncodeOptions::new()).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].id, 1);
        assert_eq!(spans[0].text, "Hello World");
        assert_eq!(spans[0].original_text, "HELLO WORLD");
        assert_eq!(spans[0].kind, TokenKind::Special);
        assert_eq!((spans[0].start, spans[0].end), (0, 11));
        assert_eq!(spans[1].kind, TokenKind::Character);
        assert_eq!((spans[2].start, spans[2].end), (12, 14));
        for span in &spans {
            assert_eq!(&text[span.start..span.end], span.original_text);
        }
    }

    #[test]
    fn test_unknown_dropped_by_default() {
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.encode("a€b");
        assert_eq!(tokenizer.decode_letters(&tokens), "ab");
    }

    #[test]
    fn test_unknown_placeholder() {
        let tokenizer = make_test_tokenizer();
        let spans = tokenizer
            .encode_with_spans("a€b", EncodeOptions::new().unknown_id(0))
            .unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].id, 0);
        assert_eq!(spans[1].text, "");
        assert_eq!(spans[1].original_text, "€");
        assert_eq!(spans[1].kind, TokenKind::Unknown);
        assert_eq!((spans[1].start, spans[1].end), (1, 4));
        assert_eq!(spans[2].start, 4);
    }

    #[test]
    fn test_strict_fails_on_unknown() {
        let tokenizer = make_test_tokenizer();
        let result = tokenizer.encode_with_spans("a€b", EncodeOptions::new().strict(true));
        assert!(matches!(
            result,
            Err(TokenizerError::UnknownToken {
                position: 1,
                character: '€'
            })
        ));
    }

    #[test]
    fn test_strict_beats_unknown_id() {
        let tokenizer = make_test_tokenizer();
        let options = EncodeOptions::new().strict(true).unknown_id(0);
        assert!(tokenizer.encode_letters("?", options).is_err());
    }

    #[test]
    fn test_decode_skips_unknown_ids() {
        let tokenizer = make_test_tokenizer();
        let a = tokenizer.vocab().id("a").unwrap();
        assert_eq!(tokenizer.decode_letters(&[a, 9999, a]), "aa");
        assert_eq!(tokenizer.decode_letters(&[]), "");
    }

    #[test]
    fn test_batch_matches_single() {
        let tokenizer = make_test_tokenizer();
        let texts = vec!["hello".to_string(), "Hello World".to_string(), "zz".to_string()];
        let batch = tokenizer
            .encode_letters_batch(&texts, EncodeOptions::default())
            .unwrap();
        assert_eq!(batch.len(), 3);
        for (text, ids) in texts.iter().zip(&batch) {
            assert_eq!(ids, &tokenizer.encode(text));
        }
        assert_eq!(tokenizer.decode_batch(&batch), vec!["hello", "Hello World", "zz"]);
    }

    #[test]
    fn test_batch_strict_propagates_error() {
        let tokenizer = make_test_tokenizer();
        let texts = vec!["hello".to_string(), "he!".to_string()];
        assert!(tokenizer
            .encode_batch(&texts, EncodeOptions::new().strict(true))
            .is_err());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = make_test_tokenizer();
        assert!(tokenizer.encode("").is_empty());
        assert!(tokenizer
            .encode_with_spans("", EncodeOptions::new().strict(true))
            .unwrap()
            .is_empty());
    }
}
