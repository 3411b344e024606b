//! Core tokenization engine for lettertok.
//!
//! Text is split by a single left-to-right greedy scan over a fixed
//! vocabulary of special phrases, dictionary words and single characters.
//!
//! # Architecture
//!
//! - [`constants`]: the static source lists and reserved IDs
//! - [`vocab`]: builds the immutable token/ID mapping from those lists
//! - [`matchers`]: the three longest-match probes (special, word, character)
//! - [`Tokenizer`]: encode/decode API, spans, batch operations
//! - [`builtin`]: the shared tokenizer over the built-in lists
//! - [`display`]: helpers for front-ends rendering the output

pub mod builtin;
pub mod constants;
pub mod display;
pub mod matchers;
mod tokenizer;
pub mod vocab;

pub use builtin::{
    builtin, decode_letters, encode_letters, encode_with_spans, id_to_letter, letter_to_id,
    special_id_set,
};
pub use constants::{special_ids, SpecialPhrase, LETTER_ID_OFFSET};
pub use tokenizer::{EncodeOptions, EncodedSpan, Tokenizer, TokenizerError};
pub use vocab::{TokenKind, Vocab, VocabEntry, VocabError, VocabSources};
