//! Client for the unofficial Google Translate web endpoint.
//!
//! The remote API (`translate_a/single`) is undocumented and answers with a
//! deeply nested, heterogeneous JSON array whose positions carry implicit
//! meaning. This crate wraps the two useful operations behind a typed
//! surface:
//!
//! - [`GoogleTranslate::translate`] — translate text into a target language,
//!   optionally auto-detecting the source language.
//! - [`GoogleTranslate::detect`] — detect the language of a piece of text.
//!
//! The static language table in [`languages`] is importable on its own,
//! without constructing a network client.
//!
//! # Example
//!
//! ```rust,ignore
//! use gtrans::{Config, GoogleTranslate};
//!
//! let client = GoogleTranslate::new(Config::default())?;
//! let result = client.translate("Talk is cheap.", "ja", "auto").await?;
//! println!("{} (detected: {})", result.text, result.source_lang);
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod languages;
pub mod request;

pub use client::GoogleTranslate;
pub use config::Config;
pub use decode::Translation;
pub use error::{Error, Result};
