use serde::Deserialize;

use crate::messages::request_header::DEFAULT_APP_ID;

/// Supplies the application identity and authentication token that go into
/// outgoing request headers.
///
/// Credential issuance and storage live elsewhere; implementors only hand
/// out what they already hold.
pub trait CredentialSource {
  fn app_id(&self) -> &str;

  fn credentials(&self) -> Option<String>;
}

/// Fixed application id and token, e.g. read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaticCredentials {
  #[serde(default = "StaticCredentials::default_app_id")]
  app_id: String,
  #[serde(default)]
  credentials: Option<String>,
}

impl StaticCredentials {
  pub fn new(app_id: impl Into<String>, credentials: Option<String>) -> StaticCredentials {
    StaticCredentials {
      app_id: app_id.into(),
      credentials,
    }
  }

  fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
  }
}

impl Default for StaticCredentials {
  fn default() -> Self {
    StaticCredentials::new(DEFAULT_APP_ID, None)
  }
}

impl CredentialSource for StaticCredentials {
  fn app_id(&self) -> &str {
    &self.app_id
  }

  fn credentials(&self) -> Option<String> {
    self.credentials.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_with_defaults() {
    let creds: StaticCredentials = serde_json::from_str("{}").unwrap();
    assert_eq!(creds, StaticCredentials::default());
    assert_eq!(creds.app_id(), DEFAULT_APP_ID);
    assert_eq!(creds.credentials(), None);
  }

  #[test]
  fn deserialize_token() {
    let creds: StaticCredentials =
      serde_json::from_str(r#"{"app_id": "demo", "credentials": "abc"}"#).unwrap();
    assert_eq!(creds.app_id(), "demo");
    assert_eq!(creds.credentials(), Some("abc".to_string()));
  }
}
