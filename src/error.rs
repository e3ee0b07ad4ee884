use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a translate or detect call.
///
/// Validation errors (`EmptyInput`, `InvalidLanguageCode`) are raised before
/// any network activity. `Network` is surfaced from reqwest unchanged.
/// `MalformedResponse` keeps the raw body so a shape change upstream can be
/// diagnosed from the error alone.
#[derive(Debug, Error)]
pub enum Error {
    #[error("nothing to translate: input text is empty")]
    EmptyInput,

    #[error("unsupported language code '{0}'")]
    InvalidLanguageCode(String),

    #[error("request to translation endpoint failed")]
    Network(#[from] reqwest::Error),

    #[error("response body did not match the expected nested-array shape")]
    MalformedResponse {
        /// The raw response body, kept verbatim for diagnosis.
        body: String,
    },
}

impl Error {
    /// Raw response body, if this error carries one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::MalformedResponse { body } => Some(body),
            _ => None,
        }
    }
}
