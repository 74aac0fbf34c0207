//! Client configuration

/// Response format requested when none is configured
pub const DEFAULT_FORMAT: &str = "JSON";

/// Connection settings for a Piwik reporting endpoint.
///
/// Holds the base URL, the `token_auth` credential and the response format
/// sent with every request. None of the fields are validated; the remote
/// endpoint is the authority on what it accepts. The base URL is used
/// verbatim when building request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    token_auth: String,
    format: String,
}

impl Config {
    /// Create a configuration with an empty token and the `"JSON"` format
    pub fn new<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            token_auth: String::new(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    /// Set the `token_auth` credential, builder style
    pub fn with_token_auth<S: Into<String>>(mut self, token_auth: S) -> Self {
        self.token_auth = token_auth.into();
        self
    }

    /// Set the response format, builder style
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = format.into();
        self
    }

    /// Base URL of the reporting endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the base URL
    pub fn set_base_url<S: Into<String>>(&mut self, base_url: S) {
        self.base_url = base_url.into();
    }

    /// The `token_auth` credential sent with every request
    pub fn token_auth(&self) -> &str {
        &self.token_auth
    }

    /// Replace the `token_auth` credential
    pub fn set_token_auth<S: Into<String>>(&mut self, token_auth: S) {
        self.token_auth = token_auth.into();
    }

    /// Response format sent as the `format` parameter
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Replace the response format
    pub fn set_format<S: Into<String>>(&mut self, format: S) {
        self.format = format.into();
    }
}
