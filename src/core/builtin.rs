//! The process-wide tokenizer built from the static source lists.
//!
//! The vocabulary is assembled on first use and is read-only afterwards, so
//! the free functions here can be called from any thread without locking.
//!
//! # Example
//!
//! ```rust
//! use lettertok::{decode_letters, encode_letters, EncodeOptions};
//!
//! let ids = encode_letters("how are you", EncodeOptions::default()).unwrap();
//! assert_eq!(decode_letters(&ids), "how are you");
//! ```

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use super::tokenizer::{EncodeOptions, EncodedSpan, Tokenizer, TokenizerError};
use super::vocab::VocabSources;

static BUILTIN: LazyLock<Tokenizer> = LazyLock::new(|| {
    Tokenizer::new(&VocabSources::default())
        .expect("built-in vocabulary sources must be collision-free")
});

/// The shared tokenizer over the built-in vocabulary.
pub fn builtin() -> &'static Tokenizer {
    &BUILTIN
}

/// Encode with the built-in vocabulary, returning spans.
pub fn encode_with_spans(
    text: &str,
    options: EncodeOptions,
) -> Result<Vec<EncodedSpan>, TokenizerError> {
    BUILTIN.encode_with_spans(text, options)
}

/// Encode with the built-in vocabulary, returning IDs.
pub fn encode_letters(text: &str, options: EncodeOptions) -> Result<Vec<u32>, TokenizerError> {
    BUILTIN.encode_letters(text, options)
}

/// Decode with the built-in vocabulary. Unknown IDs are skipped.
pub fn decode_letters(ids: &[u32]) -> String {
    BUILTIN.decode_letters(ids)
}

/// Built-in forward map (token text -> ID).
pub fn letter_to_id() -> &'static FxHashMap<String, u32> {
    BUILTIN.token_to_id()
}

/// Built-in inverse map (ID -> token text).
pub fn id_to_letter() -> &'static FxHashMap<u32, String> {
    BUILTIN.id_to_token()
}

/// IDs reserved by the built-in special phrases.
pub fn special_id_set() -> &'static FxHashSet<u32> {
    BUILTIN.special_ids()
}
