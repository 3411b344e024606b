mod bindings;

use crate::core::special_ids;
pub use bindings::{PySpan, PySpecialIds, PyTokenizer, UnknownTokenError};

use pyo3::prelude::*;

/// lettertok - greedy longest-match tokenizer with Python bindings
///
/// - Special phrases with reserved IDs, matched case-insensitively
/// - Dictionary words with capitalized variants
/// - Single-character fallback over a fixed character set
/// - Rayon parallelism for batch encoding
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTokenizer>()?;
    m.add_class::<PySpan>()?;
    m.add_class::<PySpecialIds>()?;
    m.add("UnknownTokenError", m.py().get_type::<UnknownTokenError>())?;
    m.add("LETTER_ID_OFFSET", crate::core::LETTER_ID_OFFSET)?;
    m.add("PIYUSH_IS_CUTIE", special_ids::PIYUSH_IS_CUTIE)?;
    m.add("PIYUSH_HAS_GIRLFRIEND", special_ids::PIYUSH_HAS_GIRLFRIEND)?;
    Ok(())
}
