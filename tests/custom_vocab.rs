//! Integration tests for tokenizers built from custom source lists.

use lettertok::{EncodeOptions, Tokenizer, TokenizerError, VocabError, VocabSources};

fn create_tokenizer(phrases: &[(&str, u32)], chars: &str, words: &[&str]) -> Tokenizer {
    let sources = VocabSources::empty()
        .with_special_phrases(phrases.iter().copied())
        .with_chars(chars)
        .with_base_words(words.iter().copied());
    Tokenizer::new(&sources).unwrap()
}

/// Several reserved IDs inside the word range shift later words past each.
#[test]
fn test_multiple_reserved_ids_in_word_range() {
    // chars: a=101, b=102; words start at 103.
    let tokenizer = create_tokenizer(&[("zz top", 104), ("yy", 105)], "ab", &["ab", "ba", "aa"]);
    let vocab = tokenizer.vocab();
    assert_eq!(vocab.id("ab"), Some(103));
    assert_eq!(vocab.id("ba"), Some(106));
    assert_eq!(vocab.id("aa"), Some(107));
    assert_eq!(vocab.id("Ab"), Some(108));
    assert_eq!(vocab.id("Ba"), Some(109));
    assert_eq!(vocab.id("Aa"), Some(110));
    assert_eq!(tokenizer.vocab_size(), 10);
}

/// Special phrases are matched even when built only from punctuation.
#[test]
fn test_custom_special_phrase() {
    let tokenizer = create_tokenizer(&[("<3", 7)], "<3ab", &["ab"]);
    let ab = tokenizer.vocab().id("ab").unwrap();
    assert_eq!(tokenizer.encode("ab<3ab"), vec![ab, 7, ab]);
    assert_eq!(tokenizer.decode_letters(&[7]), "<3");
}

/// A character set without letters still tokenizes and round-trips.
#[test]
fn test_symbols_only_tokenizer() {
    let tokenizer = create_tokenizer(&[], "0123456789,", &[]);
    let text = "3,14,15";
    let ids = tokenizer
        .encode_letters(text, EncodeOptions::new().strict(true))
        .unwrap();
    assert_eq!(ids.len(), text.len());
    assert_eq!(tokenizer.decode_letters(&ids), text);
    assert_eq!(tokenizer.max_special_len(), 0);
    assert_eq!(tokenizer.max_word_len(), 0);
}

/// Invalid sources are rejected when the tokenizer is built.
#[test]
fn test_invalid_sources_rejected() {
    let sources = VocabSources::empty()
        .with_special_phrases([("hello there", 101)])
        .with_chars("ab");
    let err = Tokenizer::new(&sources).unwrap_err();
    assert!(matches!(
        err,
        TokenizerError::VocabError(VocabError::IdCollision { id: 101, .. })
    ));
    assert!(err.to_string().contains("101"));
}

/// The default sources build successfully and match the built-in tokenizer.
#[test]
fn test_default_sources_build() {
    let tokenizer = Tokenizer::new(&VocabSources::default()).unwrap();
    assert_eq!(tokenizer.vocab_size(), lettertok::builtin().vocab_size());
    assert_eq!(tokenizer.encode("Piyush is Cutie"), vec![1]);
}

/// A matching special phrase wins over a longer word at the same position.
#[test]
fn test_special_wins_over_longer_word() {
    let tokenizer = create_tokenizer(&[("ab", 9)], "abcd", &["abcd"]);
    let vocab = tokenizer.vocab();
    let (c, d) = (vocab.id("c").unwrap(), vocab.id("d").unwrap());
    assert!(vocab.id("abcd").is_some());
    assert_eq!(tokenizer.encode("abcd"), vec![9, c, d]);
    assert_eq!(tokenizer.encode("xabcd"), vec![9, c, d]);
}

/// A letter offset that runs past the end of the ID space is an error, not a panic.
#[test]
fn test_id_space_overflow_rejected() {
    let sources = VocabSources::empty()
        .with_chars("ab")
        .with_base_words(["ab"])
        .with_letter_id_offset(u32::MAX);
    assert!(matches!(
        Tokenizer::new(&sources),
        Err(TokenizerError::VocabError(VocabError::IdOverflow(_)))
    ));
}
