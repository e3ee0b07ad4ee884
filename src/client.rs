use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;
use crate::decode::{self, Translation};
use crate::error::Result;
use crate::languages;
use crate::request;

/// Client for the Google Translate web endpoint.
///
/// Holds one [`reqwest::Client`] configured from [`Config`] and reuses it
/// across calls. The client owns no mutable state, so a single instance can
/// be shared freely between tasks; each call is one atomic request/response
/// exchange with no internal retries.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    http: reqwest::Client,
    config: Config,
}

impl GoogleTranslate {
    /// Build a client from configuration.
    ///
    /// Fails if the underlying HTTP client rejects the configuration (e.g.
    /// an unparseable proxy URL).
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone());
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Translate `text` into `target_lang`.
    ///
    /// `source_lang` is a concrete language code or [`languages::AUTO`] to
    /// let the endpoint detect it; the detected (or echoed) code is returned
    /// in [`Translation::source_lang`].
    ///
    /// Validation happens before any network activity: blank text fails with
    /// [`Error::EmptyInput`], unknown codes with
    /// [`Error::InvalidLanguageCode`].
    ///
    /// [`Error::EmptyInput`]: crate::Error::EmptyInput
    /// [`Error::InvalidLanguageCode`]: crate::Error::InvalidLanguageCode
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> Result<Translation> {
        let url = request::translate_url(&self.config, text, source_lang, target_lang)?;
        debug!(%target_lang, %source_lang, "issuing translate request");

        let body = self.fetch(url).await?;
        decode::decode_translate(&body, source_lang)
    }

    /// Translate with source-language auto-detection.
    pub async fn translate_auto(&self, text: &str, target_lang: &str) -> Result<Translation> {
        self.translate(text, target_lang, languages::AUTO).await
    }

    /// Detect the language of `text`.
    ///
    /// Returns a single-entry map from the detected code to its
    /// human-readable name, e.g. `{"zh-cn": "chinese (simplified)"}`.
    pub async fn detect(&self, text: &str) -> Result<HashMap<String, String>> {
        let url = request::detect_url(&self.config, text)?;
        debug!("issuing detect request");

        let body = self.fetch(url).await?;
        decode::decode_detect(&body)
    }

    async fn fetch(&self, url: reqwest::Url) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
