//! Request builder: validated query construction for `translate_a/single`.
//!
//! Pure module — nothing here touches the network. Validation failures
//! (`EmptyInput`, `InvalidLanguageCode`) are raised before a URL is ever
//! formed, so a bad call never reaches the wire.

use reqwest::Url;
use tracing::warn;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::languages;

/// The endpoint silently truncates inputs past this length.
const MAX_TEXT_LEN: usize = 5000;

/// Validate the input text, returning the trimmed slice.
pub fn validate_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    if trimmed.chars().count() >= MAX_TEXT_LEN {
        warn!(
            len = trimmed.chars().count(),
            "input exceeds {} characters; the endpoint may truncate it", MAX_TEXT_LEN
        );
    }
    Ok(trimmed)
}

/// Validate a source language code: the auto sentinel or a table entry.
pub fn validate_source_lang(code: &str) -> Result<&str> {
    if code == languages::AUTO || languages::is_supported(code) {
        Ok(code)
    } else {
        Err(Error::InvalidLanguageCode(code.to_string()))
    }
}

/// Validate a target language code: must be a concrete table entry.
pub fn validate_target_lang(code: &str) -> Result<&str> {
    if languages::is_supported(code) {
        Ok(code)
    } else {
        Err(Error::InvalidLanguageCode(code.to_string()))
    }
}

/// Build the GET URL for a translate call.
///
/// `dt=t` requests the translation chunks, `dt=rm` the transliteration,
/// `dt=at` alternative candidates.
pub fn translate_url(config: &Config, text: &str, source: &str, target: &str) -> Result<Url> {
    let text = validate_text(text)?;
    let source = validate_source_lang(source)?;
    let target = validate_target_lang(target)?;

    build_url(config, text, source, target)
}

/// Build the GET URL for a detect call.
///
/// Detection is a translate request with an auto source; only the detected
/// language index of the response is read.
pub fn detect_url(config: &Config, text: &str) -> Result<Url> {
    let text = validate_text(text)?;

    build_url(config, text, languages::AUTO, "en")
}

fn build_url(config: &Config, text: &str, source: &str, target: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        &config.endpoint_url(),
        &[
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("hl", "en"),
            ("dt", "t"),
            ("dt", "rm"),
            ("dt", "at"),
            ("ie", "UTF-8"),
            ("oe", "UTF-8"),
            ("q", text),
        ],
    )
    .map_err(|_| Error::MalformedResponse {
        // Unreachable with a well-formed endpoint URL; kept so a bad
        // override fails cleanly instead of panicking.
        body: config.endpoint_url(),
    })?;
    Ok(url)
}
