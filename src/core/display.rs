//! Helpers for front-ends that render encoded text.
//!
//! A display panel typically re-encodes on every keystroke and decodes a
//! free-form "1, 2 - 3" style ID string typed by the user. Nothing here
//! affects how text is tokenized.

use super::constants::SpecialPhrase;
use super::tokenizer::Tokenizer;

/// Parse a free-form list of IDs separated by commas, hyphens or whitespace.
///
/// Parts that are not non-negative decimal integers fitting in `u32` are
/// ignored.
pub fn parse_id_list(input: &str) -> Vec<u32> {
    input
        .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<u32>().ok())
        .collect()
}

/// Label shown for an ID in a decode panel.
///
/// The two built-in phrases answer their own question ("Yes" / "No"); other
/// known IDs show their token text and unknown IDs show `?`.
pub fn decode_display_label(tokenizer: &Tokenizer, id: u32) -> &str {
    match SpecialPhrase::from_id(id) {
        Some(SpecialPhrase::PiyushIsCutie) => "Yes",
        Some(SpecialPhrase::PiyushHasGirlfriend) => "No",
        None => tokenizer.vocab().token(id).unwrap_or("?"),
    }
}

/// Token text for each ID, with an empty string for unknown IDs.
pub fn display_tokens<'a>(tokenizer: &'a Tokenizer, ids: &[u32]) -> Vec<&'a str> {
    ids.iter()
        .map(|&id| tokenizer.vocab().token(id).unwrap_or(""))
        .collect()
}

/// Whether any ID belongs to a special phrase of this tokenizer.
pub fn contains_special(tokenizer: &Tokenizer, ids: &[u32]) -> bool {
    ids.iter().any(|&id| tokenizer.vocab().is_special_id(id))
}

pub fn contains_phrase(ids: &[u32], phrase: SpecialPhrase) -> bool {
    ids.contains(&phrase.id())
}
