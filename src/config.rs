#[allow(unused_imports)]
use log::{debug, trace, warn};
use serde::Deserialize;

use crate::{
  messages::{
    credentials::CredentialSource,
    protocol_version::{self, DEFAULT_VERSION},
    request_header::{RequestHeader, DEFAULT_APP_ID},
  },
  result::Result,
};

/// Client-side settings used to build outgoing request headers.
///
/// Missing keys in a config file fall back to the protocol defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
  pub app_id: String,
  pub version: String,
  pub credentials: Option<String>,
}

impl Default for HeaderConfig {
  fn default() -> Self {
    HeaderConfig {
      app_id: DEFAULT_APP_ID.to_string(),
      version: DEFAULT_VERSION.to_string(),
      credentials: None,
    }
  }
}

impl HeaderConfig {
  pub fn builder() -> HeaderConfigBuilder {
    HeaderConfigBuilder::new()
  }

  pub fn from_json(json: &str) -> Result<HeaderConfig> {
    let config: HeaderConfig = serde_json::from_str(json)?;
    if !protocol_version::is_supported(&config.version) {
      warn!("Configured protocol version {:?} is not a known version", config.version);
    }
    Ok(config)
  }

  /// Authorized header for the session-establishment command.
  pub fn session_request(&self, transaction_id: impl Into<String>) -> RequestHeader {
    RequestHeader::session_establishment(transaction_id).authorize(self)
  }

  /// Authorized header for a command inside `session_id`, speaking the
  /// configured version.
  pub fn request(
    &self,
    transaction_id: impl Into<String>,
    session_id: impl Into<String>,
  ) -> RequestHeader {
    RequestHeader::new(transaction_id, session_id, self.version.as_str()).authorize(self)
  }
}

impl CredentialSource for HeaderConfig {
  fn app_id(&self) -> &str {
    &self.app_id
  }

  fn credentials(&self) -> Option<String> {
    self.credentials.clone()
  }
}

/// Utility for building [HeaderConfig]
#[derive(Default)]
pub struct HeaderConfigBuilder {
  app_id: Option<String>,
  version: Option<String>,
  credentials: Option<String>,
}

impl HeaderConfigBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
    self.app_id = Some(app_id.into());
    self
  }

  #[must_use]
  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }

  #[must_use]
  pub fn credentials(mut self, credentials: impl Into<String>) -> Self {
    self.credentials = Some(credentials.into());
    self
  }

  pub fn build(self) -> HeaderConfig {
    let defaults = HeaderConfig::default();
    HeaderConfig {
      app_id: self.app_id.unwrap_or(defaults.app_id),
      version: self.version.unwrap_or(defaults.version),
      credentials: self.credentials,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::messages::header::Header;

  #[test]
  fn defaults() {
    let config = HeaderConfig::default();
    assert_eq!(config.app_id, DEFAULT_APP_ID);
    assert_eq!(config.version, DEFAULT_VERSION);
    assert_eq!(config.credentials, None);
    assert_eq!(HeaderConfig::builder().build(), config);
  }

  #[test]
  fn from_json_overrides() {
    let config = HeaderConfig::from_json(r#"{"app_id": "demo", "credentials": "abc"}"#).unwrap();
    assert_eq!(config.app_id, "demo");
    assert_eq!(config.version, DEFAULT_VERSION);
    assert_eq!(config.credentials.as_deref(), Some("abc"));
  }

  #[test]
  fn from_json_rejects_garbage() {
    assert!(HeaderConfig::from_json("[1, 2]").is_err());
  }

  #[test]
  fn builds_authorized_headers() {
    let config = HeaderConfig::builder()
      .app_id("demo")
      .credentials("abc")
      .build();

    let hello = config.session_request("t0");
    assert!(hello.is_session_establishment());
    assert_eq!(hello.app_id(), "demo");
    assert_eq!(hello.credentials(), None);

    let cmd = config.request("t1", "s1");
    assert_eq!(cmd.transaction_id(), "t1");
    assert_eq!(cmd.session_id(), Some("s1"));
    assert_eq!(cmd.app_id(), "demo");
    assert_eq!(cmd.credentials(), Some("abc"));
    assert_eq!(cmd.version(), DEFAULT_VERSION);
  }
}
