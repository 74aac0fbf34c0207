//! Endpoint request construction

use url::form_urlencoded;

use crate::config::Config;

/// Value of the `module` parameter on every request
pub const MODULE: &str = "API";

/// Parameter names injected by the client; a caller-supplied parameter with
/// one of these names is overridden.
const INJECTED: [&str; 4] = ["module", "method", "format", "token_auth"];

/// A single API invocation: the remote method plus its query parameters.
///
/// Parameters keep their insertion order in the rendered URL; the injected
/// `module`, `method`, `format` and `token_auth` keys always come last, in
/// that order.
#[derive(Debug, Clone)]
pub struct EndpointRequest {
    method: String,
    params: Vec<(String, String)>,
}

impl EndpointRequest {
    /// Create a request for a remote method in `Module.method` form
    pub fn new<S: Into<String>>(method: S) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn param<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params.push((name.into(), value.into()));
        self
    }

    /// The remote method this request addresses
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Render the full request URL against a configuration snapshot.
    ///
    /// Caller parameters come first in insertion order, then `module`,
    /// `method`, `format` and `token_auth`. Every value is percent-encoded
    /// with the `x-www-form-urlencoded` scheme. A caller parameter that
    /// collides with an injected key is dropped, so each key appears exactly
    /// once and the injected value wins. The base URL is appended to
    /// verbatim, after a single `?`.
    pub fn to_url(&self, config: &Config) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            if INJECTED.contains(&name.as_str()) {
                continue;
            }
            query.append_pair(name, value);
        }
        query.append_pair("module", MODULE);
        query.append_pair("method", &self.method);
        query.append_pair("format", config.format());
        query.append_pair("token_auth", config.token_auth());

        format!("{}?{}", config.base_url(), query.finish())
    }
}

/// Translate a wrapper-style endpoint name into the remote `Module.method`
/// form by replacing every underscore with a dot.
///
/// `UsersManager_getUser` becomes `UsersManager.getUser`. This is a direct
/// character substitution, nothing deeper.
pub fn translate_method(name: &str) -> String {
    name.replace('_', ".")
}
