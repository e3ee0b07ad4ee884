//! Response decoder for the nested-array body of `translate_a/single`.
//!
//! The endpoint answers with a JSON array mixing strings, numbers, nulls and
//! further arrays, where positions carry implicit meaning. Nobody documents
//! this contract and it can change upstream without notice, so every index
//! and type expectation here is checked explicitly: any miss turns into a
//! single [`Error::MalformedResponse`] carrying the raw body, never a panic.
//!
//! Decoding is pure and stateless; the same body always yields the same
//! result.
//!
//! Index map (observed, `dt=t&dt=rm&dt=at`):
//!
//! ```text
//! root[0][i][0]       translated fragment for sentence chunk i
//! root[0][last][2,3]  transliterations, when chunk[0] is null
//! root[2]             detected source language code
//! root[5][i][2][j][0] alternative translation candidates
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::languages;

/// Decoded result of one translate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Translated text, sentence fragments joined in source order.
    pub text: String,

    /// Detected source language code, or the caller-supplied code when the
    /// source was not auto-detected.
    pub source_lang: String,

    /// Transliteration of the translated text, when the endpoint sent one.
    pub pronunciation: Option<String>,

    /// Transliteration of the input text, when the endpoint sent one.
    pub source_pronunciation: Option<String>,

    /// Alternative translation candidates, best-effort.
    pub alternatives: Vec<String>,
}

fn malformed(body: &str) -> Error {
    Error::MalformedResponse {
        body: body.to_string(),
    }
}

/// Decode a translate response body.
///
/// `requested_source` is the source code the caller asked for; it is echoed
/// into the result when the body carries no detected language and the caller
/// did not request auto-detection.
pub fn decode_translate(body: &str, requested_source: &str) -> Result<Translation> {
    let root: Value = serde_json::from_str(body).map_err(|_| malformed(body))?;
    let root = root.as_array().ok_or_else(|| malformed(body))?;

    let chunks = root
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(body))?;

    let mut fragments: Vec<&str> = Vec::with_capacity(chunks.len());
    let mut pronunciation = None;
    let mut source_pronunciation = None;

    for chunk in chunks {
        let chunk = chunk.as_array().ok_or_else(|| malformed(body))?;
        match chunk.first() {
            Some(Value::String(fragment)) => fragments.push(fragment.trim()),
            // A null leading slot marks the transliteration chunk
            Some(Value::Null) | None => {
                pronunciation = chunk.get(2).and_then(Value::as_str).map(str::to_string);
                source_pronunciation =
                    chunk.get(3).and_then(Value::as_str).map(str::to_string);
            }
            Some(_) => return Err(malformed(body)),
        }
    }

    let text = fragments.join(" ");

    let detected = root.get(2).and_then(Value::as_str);
    let source_lang = match detected {
        Some(code) => code.to_lowercase(),
        None if requested_source != languages::AUTO => requested_source.to_string(),
        None => return Err(malformed(body)),
    };

    Ok(Translation {
        text,
        source_lang,
        pronunciation,
        source_pronunciation,
        alternatives: decode_alternatives(root),
    })
}

/// Alternative candidates from `root[5]`; the slot is frequently absent and
/// its absence is not an error.
fn decode_alternatives(root: &[Value]) -> Vec<String> {
    let mut out = Vec::new();
    let Some(entries) = root.get(5).and_then(Value::as_array) else {
        return out;
    };
    for entry in entries {
        let Some(candidates) = entry.get(2).and_then(Value::as_array) else {
            continue;
        };
        for candidate in candidates {
            if let Some(alt) = candidate.get(0).and_then(Value::as_str) {
                out.push(alt.to_string());
            }
        }
    }
    out
}

/// Decode a detect response body into a `{code: name}` single-entry map.
///
/// The detected code sits at the same top-level index a translate call
/// reads for auto-detection. A code the language table does not know is
/// treated as a shape violation.
pub fn decode_detect(body: &str) -> Result<HashMap<String, String>> {
    let root: Value = serde_json::from_str(body).map_err(|_| malformed(body))?;
    let code = root
        .get(2)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(body))?
        .to_lowercase();

    let name = languages::name_of(&code).ok_or_else(|| malformed(body))?;

    let mut detected = HashMap::with_capacity(1);
    detected.insert(code, name.to_string());
    Ok(detected)
}
