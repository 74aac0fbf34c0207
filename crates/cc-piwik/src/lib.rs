//! Thin client for the Piwik HTTP reporting API
//!
//! This crate translates method calls into URL-encoded GET requests against
//! a configured Piwik endpoint, injects the `module`, `method`, `format` and
//! `token_auth` parameters, and returns the raw response body. It performs
//! no retries, no caching and no response parsing, apart from one
//! convenience path that decodes a JSON body to bootstrap the auth token.
//!
//! # Example
//!
//! ```no_run
//! use cc_piwik::{Config, PiwikClient};
//!
//! fn example() -> cc_piwik::Result<()> {
//!     let mut client = PiwikClient::new(
//!         Config::new("https://stats.example.org/piwik/index.php"),
//!     );
//!     client.set_token_auth_from_credentials("admin", "secret", true)?;
//!     let body = client.get_user("bob")?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;

pub use client::PiwikClient;
pub use config::{Config, DEFAULT_FORMAT};
pub use error::{Error, Result};
pub use request::{translate_method, EndpointRequest, MODULE};
