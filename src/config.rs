use std::time::Duration;

/// Default endpoint host suffix (`translate.google.com`).
pub const DEFAULT_URL_SUFFIX: &str = "com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_2_1) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// Client configuration.
///
/// All knobs are passed through to the underlying HTTP client; none of them
/// change the decoding logic.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint host suffix: `"com"` gives `translate.google.com`, `"cn"`
    /// gives `translate.google.cn`. Routes around regional availability.
    pub url_suffix: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Proxy URL (e.g. `http://127.0.0.1:8080`), if any.
    pub proxy: Option<String>,

    /// User-Agent header value.
    pub user_agent: String,

    /// Full endpoint URL override. When set it replaces the URL derived
    /// from `url_suffix`; used by tests and self-hosted mirrors.
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_suffix: DEFAULT_URL_SUFFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoint: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `GTRANS_URL_SUFFIX`, `GTRANS_TIMEOUT_SECS`,
    /// `GTRANS_PROXY`, `GTRANS_USER_AGENT`.
    pub fn from_env() -> Self {
        Self {
            url_suffix: std::env::var("GTRANS_URL_SUFFIX")
                .unwrap_or_else(|_| DEFAULT_URL_SUFFIX.to_string()),
            timeout: std::env::var("GTRANS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            proxy: std::env::var("GTRANS_PROXY").ok(),
            user_agent: std::env::var("GTRANS_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            endpoint: None,
        }
    }

    /// The endpoint URL requests are issued against.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(url) => url.clone(),
            None => format!(
                "https://translate.google.{}/translate_a/single",
                self.url_suffix
            ),
        }
    }
}
