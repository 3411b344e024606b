//! lettertok - greedy longest-match tokenizer over a small fixed vocabulary.
//!
//! Text is mapped to integer IDs by scanning left to right and, at each
//! position, taking the longest special phrase (case-insensitive), else the
//! longest dictionary word, else the single character. Decoding concatenates
//! the token text of each known ID.
//!
//! ```rust
//! use lettertok::{encode_letters, special_ids, EncodeOptions};
//!
//! let ids = encode_letters("piyush has girlfriend", EncodeOptions::default()).unwrap();
//! assert_eq!(ids, vec![special_ids::PIYUSH_HAS_GIRLFRIEND]);
//! ```

pub mod core;
#[cfg(feature = "python")]
mod python;

pub use crate::core::{
    builtin, decode_letters, encode_letters, encode_with_spans, id_to_letter, letter_to_id,
    special_id_set, special_ids, EncodeOptions, EncodedSpan, SpecialPhrase, TokenKind, Tokenizer,
    TokenizerError, Vocab, VocabEntry, VocabError, VocabSources, LETTER_ID_OFFSET,
};
