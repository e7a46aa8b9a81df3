#[allow(unused_imports)]
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};

use crate::messages::{
  credentials::CredentialSource,
  header::Header,
  protocol_version::{self, DEFAULT_VERSION},
  validity_trait::Validity,
};

/// AppID sent by clients that have not configured their own.
pub const DEFAULT_APP_ID: &str = "ImmaLittleTeapot";

fn default_app_id() -> String {
  DEFAULT_APP_ID.to_string()
}

fn default_version() -> String {
  DEFAULT_VERSION.to_string()
}

/// Header attached to every command sent from a client to the robot.
///
/// Values are immutable once built. The only way to fill in `AppID` and
/// `Credentials` after construction is [`RequestHeader::authorize`], which
/// consumes the header and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Readable, Writable)]
pub struct RequestHeader {
  #[serde(rename = "TransactionID")]
  transaction_id: String,
  #[serde(rename = "SessionID", default, skip_serializing_if = "Option::is_none")]
  session_id: Option<String>,
  #[serde(rename = "AppID", default = "default_app_id")]
  app_id: String,
  #[serde(rename = "Credentials", default, skip_serializing_if = "Option::is_none")]
  credentials: Option<String>,
  #[serde(rename = "Version", default = "default_version")]
  version: String,
}

impl RequestHeader {
  /// Header for the command that opens a session. The robot answers with
  /// the session id to use for every following command.
  pub fn session_establishment(transaction_id: impl Into<String>) -> RequestHeader {
    RequestHeader {
      transaction_id: transaction_id.into(),
      session_id: None,
      app_id: default_app_id(),
      credentials: None,
      version: default_version(),
    }
  }

  /// Header for a command inside an established session.
  ///
  /// `transaction_id` must be unique within the session. `session_id` is the
  /// one received in reply to the session-establishment command; reuse it to
  /// resume a session after a disconnect. A `version` the robot does not
  /// speak gets the whole command rejected.
  pub fn new(
    transaction_id: impl Into<String>,
    session_id: impl Into<String>,
    version: impl Into<String>,
  ) -> RequestHeader {
    RequestHeader {
      transaction_id: transaction_id.into(),
      session_id: Some(session_id.into()),
      app_id: default_app_id(),
      credentials: None,
      version: version.into(),
    }
  }

  #[doc(hidden)]
  pub fn resolved(
    transaction_id: impl Into<String>,
    session_id: Option<String>,
    app_id: impl Into<String>,
    credentials: Option<String>,
    version: impl Into<String>,
  ) -> RequestHeader {
    RequestHeader {
      transaction_id: transaction_id.into(),
      session_id,
      app_id: app_id.into(),
      credentials,
      version: version.into(),
    }
  }

  /// Fill in application id and credentials from `source`.
  ///
  /// The session-establishment command is sent without credentials.
  #[doc(hidden)]
  pub fn authorize<C: CredentialSource + ?Sized>(self, source: &C) -> RequestHeader {
    let credentials = if self.is_session_establishment() {
      None
    } else {
      source.credentials()
    };
    if credentials.is_none() && !self.is_session_establishment() {
      debug!(
        "No credentials available for transaction {}",
        self.transaction_id
      );
    }
    RequestHeader {
      app_id: source.app_id().to_string(),
      credentials,
      ..self
    }
  }

  pub fn transaction_id(&self) -> &str {
    &self.transaction_id
  }

  pub fn session_id(&self) -> Option<&str> {
    self.session_id.as_deref()
  }

  #[doc(hidden)]
  pub fn app_id(&self) -> &str {
    &self.app_id
  }

  #[doc(hidden)]
  pub fn credentials(&self) -> Option<&str> {
    self.credentials.as_deref()
  }

  /// Protocol version this command speaks.
  pub fn version(&self) -> &str {
    &self.version
  }
}

impl Header for RequestHeader {
  fn session_id(&self) -> Option<&str> {
    self.session_id.as_deref()
  }

  fn transaction_id(&self) -> Option<&str> {
    Some(&self.transaction_id)
  }
}

impl Validity for RequestHeader {
  fn valid(&self) -> bool {
    !self.transaction_id.is_empty()
      && protocol_version::is_supported(&self.version)
      && (self.is_session_establishment() || self.credentials.is_some())
  }
}
