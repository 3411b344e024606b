//! Vocabulary construction.
//!
//! A [`Vocab`] is built once from three ordered sources and never changes
//! afterwards:
//!
//! 1. Special phrases keep the IDs they were declared with.
//! 2. Characters are numbered sequentially from the letter offset, in
//!    character-set order.
//! 3. Words (base words of at least two characters, then their capitalized
//!    variants, deduplicated in first-seen order) are numbered from the end of
//!    the character block. Any ID reserved by a special phrase is skipped, which
//!    shifts every later word by one.
//!
//! Every entry gets a distinct ID and every ID maps back to exactly one entry.
//! Anything that would break this is rejected with a [`VocabError`] instead of
//! silently overwriting an earlier entry.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::constants::{BASE_WORDS, CHAR_VALUES, LETTER_ID_OFFSET, SPECIAL_PHRASES};

/// Errors that can occur while building a vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("Special phrase {0:?} is shorter than 2 characters")]
    PhraseTooShort(String),
    #[error("ID {id} is claimed by both {existing:?} and {incoming:?}")]
    IdCollision {
        id: u32,
        existing: String,
        incoming: String,
    },
    #[error("Token {token:?} is assigned both ID {existing} and ID {incoming}")]
    DuplicateToken {
        token: String,
        existing: u32,
        incoming: u32,
    },
    #[error("No ID left for token {0:?}: the ID space ends at u32::MAX")]
    IdOverflow(String),
}

/// Which source a vocabulary entry (or encoded span) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Special,
    Character,
    Word,
    /// Placeholder for input that matched nothing. Never stored in a vocabulary.
    Unknown,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Special => "special",
            TokenKind::Character => "character",
            TokenKind::Word => "word",
            TokenKind::Unknown => "unknown",
        }
    }
}

/// One token with its assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub token: String,
    pub id: u32,
    pub kind: TokenKind,
}

/// The static source lists a vocabulary is built from.
///
/// `VocabSources::default()` yields the built-in lists from
/// [`constants`](super::constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabSources {
    pub special_phrases: Vec<(String, u32)>,
    pub chars: Vec<char>,
    pub base_words: Vec<String>,
    pub letter_id_offset: u32,
}

impl Default for VocabSources {
    fn default() -> Self {
        Self {
            special_phrases: SPECIAL_PHRASES
                .iter()
                .map(|&(phrase, id)| (phrase.to_string(), id))
                .collect(),
            chars: CHAR_VALUES.chars().collect(),
            base_words: BASE_WORDS.iter().map(|w| w.to_string()).collect(),
            letter_id_offset: LETTER_ID_OFFSET,
        }
    }
}

impl VocabSources {
    /// Sources with no entries at all. Useful as a starting point for custom
    /// vocabularies.
    pub fn empty() -> Self {
        Self {
            special_phrases: Vec::new(),
            chars: Vec::new(),
            base_words: Vec::new(),
            letter_id_offset: LETTER_ID_OFFSET,
        }
    }

    pub fn with_special_phrases<S: Into<String>>(
        mut self,
        phrases: impl IntoIterator<Item = (S, u32)>,
    ) -> Self {
        self.special_phrases = phrases.into_iter().map(|(p, id)| (p.into(), id)).collect();
        self
    }

    pub fn with_chars(mut self, chars: &str) -> Self {
        self.chars = chars.chars().collect();
        self
    }

    pub fn with_base_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.base_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_letter_id_offset(mut self, offset: u32) -> Self {
        self.letter_id_offset = offset;
        self
    }

    /// The word list in ID-assignment order: base words of two or more
    /// characters, then their capitalized variants, first occurrence wins.
    pub fn word_list(&self) -> Vec<String> {
        let base = self
            .base_words
            .iter()
            .filter(|w| w.chars().count() >= 2)
            .cloned()
            .collect::<Vec<_>>();
        let capitalized = base.iter().map(|w| capitalize(w)).collect::<Vec<_>>();

        let mut seen = FxHashSet::default();
        base.into_iter()
            .chain(capitalized)
            .filter(|w| seen.insert(w.clone()))
            .collect()
    }
}

/// Uppercases the first character (ASCII only) and keeps the rest as is.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Immutable bidirectional token/ID mapping.
#[derive(Debug, Clone)]
pub struct Vocab {
    entries: Vec<VocabEntry>,
    token_to_id: FxHashMap<String, u32>,
    id_to_token: FxHashMap<u32, String>,
    kinds: FxHashMap<u32, TokenKind>,
    special_phrases: Vec<(String, u32)>,
    special_ids: FxHashSet<u32>,
    chars: FxHashMap<char, u32>,
    words: FxHashMap<String, u32>,
    max_word_len: usize,
    max_special_len: usize,
}

impl Vocab {
    /// Build a vocabulary from the given sources.
    ///
    /// # Errors
    /// Returns an error if a special phrase is too short to ever match, if two
    /// entries would share an ID, if the same token text would get two IDs, or
    /// if numbering runs past `u32::MAX`.
    pub fn build(sources: &VocabSources) -> Result<Self, VocabError> {
        let mut vocab = Self {
            entries: Vec::new(),
            token_to_id: FxHashMap::default(),
            id_to_token: FxHashMap::default(),
            kinds: FxHashMap::default(),
            special_phrases: Vec::with_capacity(sources.special_phrases.len()),
            special_ids: FxHashSet::default(),
            chars: FxHashMap::default(),
            words: FxHashMap::default(),
            max_word_len: 0,
            max_special_len: 0,
        };

        // Special phrases: literal reserved IDs. Matching folds ASCII case, so
        // two phrases differing only in case would be ambiguous.
        let mut folded: FxHashMap<String, u32> = FxHashMap::default();
        for (phrase, id) in &sources.special_phrases {
            if phrase.chars().count() < 2 {
                return Err(VocabError::PhraseTooShort(phrase.clone()));
            }
            if let Some(&existing) = folded.get(&phrase.to_ascii_lowercase()) {
                return Err(VocabError::DuplicateToken {
                    token: phrase.clone(),
                    existing,
                    incoming: *id,
                });
            }
            vocab.insert(phrase.clone(), *id, TokenKind::Special)?;
            folded.insert(phrase.to_ascii_lowercase(), *id);
            vocab.special_ids.insert(*id);
            vocab.special_phrases.push((phrase.clone(), *id));
            vocab.max_special_len = vocab.max_special_len.max(phrase.len());
        }

        // Characters: sequential from the offset. `None` once the ID space
        // is exhausted; only an entry that actually needs an ID fails.
        let mut next_id = Some(sources.letter_id_offset);
        for &ch in &sources.chars {
            let id = next_id.ok_or_else(|| VocabError::IdOverflow(ch.to_string()))?;
            vocab.insert(ch.to_string(), id, TokenKind::Character)?;
            vocab.chars.insert(ch, id);
            next_id = id.checked_add(1);
        }

        // Words: sequential after the character block, stepping over reserved IDs.
        let word_start = next_id;
        let mut skipped = 0usize;
        for word in sources.word_list() {
            let mut id = next_id.ok_or_else(|| VocabError::IdOverflow(word.clone()))?;
            while vocab.special_ids.contains(&id) {
                id = id
                    .checked_add(1)
                    .ok_or_else(|| VocabError::IdOverflow(word.clone()))?;
                skipped += 1;
            }
            vocab.max_word_len = vocab.max_word_len.max(word.len());
            vocab.words.insert(word.clone(), id);
            vocab.insert(word, id, TokenKind::Word)?;
            next_id = id.checked_add(1);
        }

        debug!(
            specials = vocab.special_ids.len(),
            chars = vocab.chars.len(),
            words = vocab.words.len(),
            word_start = ?word_start,
            skipped_reserved = skipped,
            "built vocabulary"
        );

        Ok(vocab)
    }

    fn insert(&mut self, token: String, id: u32, kind: TokenKind) -> Result<(), VocabError> {
        if let Some(existing) = self.id_to_token.get(&id) {
            return Err(VocabError::IdCollision {
                id,
                existing: existing.clone(),
                incoming: token,
            });
        }
        if let Some(&existing) = self.token_to_id.get(&token) {
            return Err(VocabError::DuplicateToken {
                token,
                existing,
                incoming: id,
            });
        }
        self.token_to_id.insert(token.clone(), id);
        self.id_to_token.insert(id, token.clone());
        self.kinds.insert(id, kind);
        self.entries.push(VocabEntry { token, id, kind });
        Ok(())
    }

    /// Number of entries (special phrases, characters and words).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in assignment order: specials, characters, words.
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Forward mapping (token text -> ID).
    pub fn token_to_id(&self) -> &FxHashMap<String, u32> {
        &self.token_to_id
    }

    /// Inverse mapping (ID -> token text).
    pub fn id_to_token(&self) -> &FxHashMap<u32, String> {
        &self.id_to_token
    }

    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    pub fn kind(&self, id: u32) -> Option<TokenKind> {
        self.kinds.get(&id).copied()
    }

    /// Special phrases with their reserved IDs, in declaration order.
    pub fn special_phrases(&self) -> &[(String, u32)] {
        &self.special_phrases
    }

    pub fn special_ids(&self) -> &FxHashSet<u32> {
        &self.special_ids
    }

    pub fn is_special_id(&self, id: u32) -> bool {
        self.special_ids.contains(&id)
    }

    /// ID of a single-character token.
    pub fn char_id(&self, ch: char) -> Option<u32> {
        self.chars.get(&ch).copied()
    }

    /// ID of a dictionary word (case-sensitive, words only).
    pub fn word_id(&self, word: &str) -> Option<u32> {
        self.words.get(word).copied()
    }

    /// Byte length of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Byte length of the longest special phrase.
    pub fn max_special_len(&self) -> usize {
        self.max_special_len
    }
}
