//! Piwik API client

use md5::{Digest, Md5};
use serde::Deserialize;

use crate::config::{Config, DEFAULT_FORMAT};
use crate::error::{Error, Result};
use crate::request::{translate_method, EndpointRequest};

/// Remote method names, module `UsersManager`
const USERS_MANAGER_ADD_USER: &str = "UsersManager.addUser";
const USERS_MANAGER_GET_USER: &str = "UsersManager.getUser";
const USERS_MANAGER_UPDATE_USER: &str = "UsersManager.updateUser";
const USERS_MANAGER_DELETE_USER: &str = "UsersManager.deleteUser";
const USERS_MANAGER_GET_TOKEN_AUTH: &str = "UsersManager.getTokenAuth";

/// Blocking client for the Piwik HTTP reporting API.
///
/// Every invocation is one synchronous GET against the configured base URL,
/// with the `module`, `method`, `format` and `token_auth` parameters
/// injected, and returns the raw response body. The client never retries
/// and does not parse the body, except in
/// [`set_token_auth_from_credentials`](PiwikClient::set_token_auth_from_credentials).
#[derive(Debug, Clone)]
pub struct PiwikClient {
    config: Config,
    http: reqwest::blocking::Client,
}

/// Body of a `UsersManager.getTokenAuth` response in JSON format
#[derive(Debug, Deserialize)]
struct TokenAuthResponse {
    value: Option<String>,
}

impl PiwikClient {
    /// Create a client for a configured endpoint
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Invoke a remote method addressed by its wrapper-style name.
    ///
    /// Underscores in `endpoint_method` are translated to dots
    /// (`UsersManager_getUser` addresses `UsersManager.getUser`), the
    /// request is issued against the current configuration and the raw
    /// response body is returned.
    pub fn call(&self, endpoint_method: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut request = EndpointRequest::new(translate_method(endpoint_method));
        for (name, value) in params {
            request = request.param(*name, *value);
        }
        self.dispatch(&request, &self.config)
    }

    /// Issue one GET for `request` against a configuration snapshot.
    ///
    /// A non-success status becomes [`Error::Status`] carrying the body
    /// text; transport failures map through [`Error::from`]. No retries.
    fn dispatch(&self, request: &EndpointRequest, config: &Config) -> Result<String> {
        tracing::debug!("GET {}", request.method());

        let response = self.http.get(request.to_url(config)).send()?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.text().map_err(Error::from)
    }

    // === Module UsersManager ===

    /// `UsersManager.addUser`; pass `""` as `alias` to leave it unset
    pub fn add_user(
        &self,
        user_login: &str,
        password: &str,
        email: &str,
        alias: &str,
    ) -> Result<String> {
        let request = EndpointRequest::new(USERS_MANAGER_ADD_USER)
            .param("userLogin", user_login)
            .param("password", password)
            .param("email", email)
            .param("alias", alias);
        self.dispatch(&request, &self.config)
    }

    /// `UsersManager.getUser`
    pub fn get_user(&self, user_login: &str) -> Result<String> {
        let request =
            EndpointRequest::new(USERS_MANAGER_GET_USER).param("userLogin", user_login);
        self.dispatch(&request, &self.config)
    }

    /// `UsersManager.updateUser`; `""` leaves a field unchanged remotely
    pub fn update_user(
        &self,
        user_login: &str,
        password: &str,
        email: &str,
        alias: &str,
    ) -> Result<String> {
        let request = EndpointRequest::new(USERS_MANAGER_UPDATE_USER)
            .param("userLogin", user_login)
            .param("password", password)
            .param("email", email)
            .param("alias", alias);
        self.dispatch(&request, &self.config)
    }

    /// `UsersManager.deleteUser`
    pub fn delete_user(&self, user_login: &str) -> Result<String> {
        let request =
            EndpointRequest::new(USERS_MANAGER_DELETE_USER).param("userLogin", user_login);
        self.dispatch(&request, &self.config)
    }

    /// `UsersManager.getTokenAuth`; the password must already be MD5-hashed
    pub fn get_token_auth(&self, user_login: &str, md5_password: &str) -> Result<String> {
        let request = EndpointRequest::new(USERS_MANAGER_GET_TOKEN_AUTH)
            .param("userLogin", user_login)
            .param("md5Password", md5_password);
        self.dispatch(&request, &self.config)
    }

    /// Fetch a `token_auth` from credentials and store it on this client.
    ///
    /// The token request goes out with `format=JSON` regardless of the
    /// configured format, so the body stays machine-parseable; the active
    /// configuration is not touched for the request itself. When
    /// `password_is_clear` is true the password is MD5-hashed before it is
    /// sent; otherwise it is passed through as an already-hashed value.
    ///
    /// A body that is not valid JSON, or that carries no `value` field,
    /// leaves the token unchanged and still returns `Ok` — only a warning
    /// is logged. Callers that need to detect that case must compare the
    /// token before and after. Transport and status errors propagate.
    pub fn set_token_auth_from_credentials(
        &mut self,
        user_login: &str,
        password: &str,
        password_is_clear: bool,
    ) -> Result<()> {
        let hashed;
        let md5_password = if password_is_clear {
            hashed = md5_hex(password);
            hashed.as_str()
        } else {
            password
        };

        let snapshot = self.config.clone().with_format(DEFAULT_FORMAT);
        let request = EndpointRequest::new(USERS_MANAGER_GET_TOKEN_AUTH)
            .param("userLogin", user_login)
            .param("md5Password", md5_password);
        let body = self.dispatch(&request, &snapshot)?;

        match serde_json::from_str::<TokenAuthResponse>(&body) {
            Ok(TokenAuthResponse { value: Some(token) }) => {
                self.config.set_token_auth(token);
            }
            Ok(TokenAuthResponse { value: None }) => {
                tracing::warn!("token auth response carried no value field");
            }
            Err(err) => {
                tracing::warn!("token auth response was not valid JSON: {}", err);
            }
        }

        Ok(())
    }
}

/// Lowercase hex MD5 digest, as the remote expects for `md5Password`
fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
