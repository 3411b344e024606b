//! Python bindings for the lettertok tokenizer.
//!
//! Thin PyO3 wrappers around [`Tokenizer`]. Display front-ends written in
//! Python call `encode_with_spans` on every input change and `decode` on every
//! change of the ID box.
//!
//! # Example
//!
//! The extension module is named `_core`.
//!
//! ```python
//! from _core import Tokenizer, SpecialIds
//!
//! tokenizer = Tokenizer()
//! ids = tokenizer.encode("Piyush has Girlfriend")
//! assert ids == [SpecialIds.PIYUSH_HAS_GIRLFRIEND]
//!
//! for span in tokenizer.encode_with_spans("how are you"):
//!     print(span.id, span.text, span.start, span.end)
//!
//! text = tokenizer.decode(Tokenizer.parse_id_list("196, 163 - 241"))
//! ```

use std::collections::{HashMap, HashSet};

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::display::{decode_display_label, parse_id_list};
use crate::core::{
    builtin, special_ids, EncodeOptions, EncodedSpan, Tokenizer, TokenizerError, VocabSources,
};

create_exception!(lettertok, UnknownTokenError, PyValueError);

fn to_py_err(err: TokenizerError) -> PyErr {
    match &err {
        TokenizerError::UnknownToken { .. } => UnknownTokenError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn make_options(strict: bool, unknown_id: Option<u32>) -> EncodeOptions {
    EncodeOptions {
        strict,
        unknown_id,
    }
}

/// Python wrapper for one encoded span.
#[pyclass(name = "Span", frozen)]
pub struct PySpan {
    #[pyo3(get)]
    id: u32,
    #[pyo3(get)]
    text: String,
    #[pyo3(get)]
    start: usize,
    #[pyo3(get)]
    end: usize,
    #[pyo3(get)]
    original_text: String,
    #[pyo3(get)]
    kind: String,
}

impl From<EncodedSpan> for PySpan {
    fn from(span: EncodedSpan) -> Self {
        Self {
            id: span.id,
            text: span.text,
            start: span.start,
            end: span.end,
            original_text: span.original_text,
            kind: span.kind.as_str().to_string(),
        }
    }
}

#[pymethods]
impl PySpan {
    fn __repr__(&self) -> String {
        format!(
            "Span(id={}, text={:?}, start={}, end={}, kind={:?})",
            self.id, self.text, self.start, self.end, self.kind
        )
    }
}

/// Reserved IDs of the built-in special phrases.
#[pyclass(name = "SpecialIds")]
pub struct PySpecialIds;

#[pymethods]
impl PySpecialIds {
    #[classattr]
    const PIYUSH_IS_CUTIE: u32 = special_ids::PIYUSH_IS_CUTIE;
    #[classattr]
    const PIYUSH_HAS_GIRLFRIEND: u32 = special_ids::PIYUSH_HAS_GIRLFRIEND;
}

/// Python wrapper for the Rust Tokenizer.
#[pyclass(name = "Tokenizer", frozen)]
pub struct PyTokenizer {
    inner: Tokenizer,
}

#[pymethods]
impl PyTokenizer {
    /// Create a tokenizer.
    ///
    /// With no arguments the built-in vocabulary is used. Any argument given
    /// replaces the corresponding built-in source list.
    ///
    /// Args:
    ///     special_phrases: Optional list of (phrase, reserved_id) pairs
    ///     chars: Optional string of single-character tokens, in ID order
    ///     base_words: Optional list of lowercase dictionary words
    ///     letter_id_offset: Optional first character ID
    ///
    /// Raises:
    ///     ValueError: If the sources produce colliding IDs or tokens
    #[new]
    #[pyo3(signature = (special_phrases=None, chars=None, base_words=None, letter_id_offset=None))]
    fn new(
        special_phrases: Option<Vec<(String, u32)>>,
        chars: Option<String>,
        base_words: Option<Vec<String>>,
        letter_id_offset: Option<u32>,
    ) -> PyResult<Self> {
        if special_phrases.is_none()
            && chars.is_none()
            && base_words.is_none()
            && letter_id_offset.is_none()
        {
            return Ok(Self {
                inner: builtin().clone(),
            });
        }

        let mut sources = VocabSources::default();
        if let Some(phrases) = special_phrases {
            sources = sources.with_special_phrases(phrases);
        }
        if let Some(chars) = chars {
            sources = sources.with_chars(&chars);
        }
        if let Some(words) = base_words {
            sources = sources.with_base_words(words);
        }
        if let Some(offset) = letter_id_offset {
            sources = sources.with_letter_id_offset(offset);
        }

        let inner = Tokenizer::new(&sources).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Encode text to token IDs.
    ///
    /// Args:
    ///     text: Input text to encode
    ///     strict: Raise UnknownTokenError on unmatched characters
    ///     unknown_id: Emit this ID for unmatched characters instead of dropping them
    ///
    /// Returns:
    ///     List of token IDs
    #[pyo3(signature = (text, strict=false, unknown_id=None))]
    fn encode(&self, text: &str, strict: bool, unknown_id: Option<u32>) -> PyResult<Vec<u32>> {
        self.inner
            .encode_letters(text, make_options(strict, unknown_id))
            .map_err(to_py_err)
    }

    /// Encode text to spans carrying IDs, token text and offsets.
    ///
    /// Offsets are UTF-8 byte offsets into `text`.
    #[pyo3(signature = (text, strict=false, unknown_id=None))]
    fn encode_with_spans(
        &self,
        text: &str,
        strict: bool,
        unknown_id: Option<u32>,
    ) -> PyResult<Vec<PySpan>> {
        let spans = self
            .inner
            .encode_with_spans(text, make_options(strict, unknown_id))
            .map_err(to_py_err)?;
        Ok(spans.into_iter().map(PySpan::from).collect())
    }

    /// Decode token IDs to a string. Unknown IDs are skipped.
    fn decode(&self, ids: Vec<u32>) -> String {
        self.inner.decode_letters(&ids)
    }

    /// Batch encode multiple texts in parallel.
    #[pyo3(signature = (texts, strict=false, unknown_id=None))]
    fn encode_batch(
        &self,
        texts: Vec<String>,
        strict: bool,
        unknown_id: Option<u32>,
    ) -> PyResult<Vec<Vec<u32>>> {
        self.inner
            .encode_letters_batch(&texts, make_options(strict, unknown_id))
            .map_err(to_py_err)
    }

    /// Batch decode multiple ID lists in parallel.
    fn decode_batch(&self, id_lists: Vec<Vec<u32>>) -> Vec<String> {
        self.inner.decode_batch(&id_lists)
    }

    /// Label for an ID in a decode panel ("Yes"/"No" for the built-in
    /// phrases, "?" for unknown IDs).
    fn decode_label(&self, id: u32) -> String {
        decode_display_label(&self.inner, id).to_string()
    }

    /// Parse a comma/space/hyphen separated list of IDs.
    #[staticmethod]
    fn parse_id_list(input: &str) -> Vec<u32> {
        parse_id_list(input)
    }

    /// Forward mapping (token text -> ID).
    #[getter]
    fn letter_to_id(&self) -> HashMap<String, u32> {
        self.inner
            .token_to_id()
            .iter()
            .map(|(token, &id)| (token.clone(), id))
            .collect()
    }

    /// Inverse mapping (ID -> token text).
    #[getter]
    fn id_to_letter(&self) -> HashMap<u32, String> {
        self.inner
            .id_to_token()
            .iter()
            .map(|(&id, token)| (id, token.clone()))
            .collect()
    }

    /// IDs reserved by special phrases.
    #[getter]
    fn special_ids(&self) -> HashSet<u32> {
        self.inner.special_ids().iter().copied().collect()
    }

    #[getter]
    fn vocab_size(&self) -> usize {
        self.inner.vocab_size()
    }

    fn __repr__(&self) -> String {
        format!("Tokenizer(vocab_size={})", self.inner.vocab_size())
    }
}
