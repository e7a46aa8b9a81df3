use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};

use crate::messages::{header::Header, validity_trait::Validity};

/// Header attached to every message the robot sends back to a client.
///
/// `RobotID` is filled in by the robot. Clients only ever see it through
/// deserialization, so treat it as optional.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Readable, Writable,
)]
pub struct ResponseHeader {
  #[serde(rename = "TransactionID", default, skip_serializing_if = "Option::is_none")]
  transaction_id: Option<String>,
  #[serde(rename = "SessionID", default, skip_serializing_if = "Option::is_none")]
  session_id: Option<String>,
  #[serde(rename = "RobotID", default, skip_serializing_if = "Option::is_none")]
  robot_id: Option<String>,
}

impl ResponseHeader {
  /// All fields absent. Only an intermediate or error state, never a
  /// well-formed reply.
  #[doc(hidden)]
  pub fn empty() -> ResponseHeader {
    ResponseHeader::default()
  }

  #[doc(hidden)]
  pub fn for_transaction(transaction_id: impl Into<String>) -> ResponseHeader {
    ResponseHeader {
      transaction_id: Some(transaction_id.into()),
      ..ResponseHeader::default()
    }
  }

  /// Reply header for a command of transaction `transaction_id` inside
  /// session `session_id`.
  pub fn new(transaction_id: impl Into<String>, session_id: impl Into<String>) -> ResponseHeader {
    ResponseHeader {
      transaction_id: Some(transaction_id.into()),
      session_id: Some(session_id.into()),
      robot_id: None,
    }
  }

  /// Device side: stamp the robot's four-word serial name onto the reply.
  #[doc(hidden)]
  pub fn with_robot_id(self, robot_id: impl Into<String>) -> ResponseHeader {
    ResponseHeader {
      robot_id: Some(robot_id.into()),
      ..self
    }
  }

  pub fn transaction_id(&self) -> Option<&str> {
    self.transaction_id.as_deref()
  }

  pub fn session_id(&self) -> Option<&str> {
    self.session_id.as_deref()
  }

  /// Name of the robot this message came from, the `Four-Word-Serial-Name`
  /// found on the robot's base.
  pub fn robot_id(&self) -> Option<&str> {
    self.robot_id.as_deref()
  }
}

impl Header for ResponseHeader {
  fn session_id(&self) -> Option<&str> {
    self.session_id.as_deref()
  }

  fn transaction_id(&self) -> Option<&str> {
    self.transaction_id.as_deref()
  }
}

impl Validity for ResponseHeader {
  fn valid(&self) -> bool {
    self.transaction_id.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_has_nothing() {
    let header = ResponseHeader::empty();
    assert_eq!(header.transaction_id(), None);
    assert_eq!(header.session_id(), None);
    assert_eq!(header.robot_id(), None);
    assert!(!header.valid());
  }

  #[test]
  fn transaction_only() {
    let header = ResponseHeader::for_transaction("t1");
    assert_eq!(header.transaction_id(), Some("t1"));
    assert_eq!(header.session_id(), None);
    assert_eq!(header.robot_id(), None);
    assert!(header.valid());
  }

  #[test]
  fn transaction_and_session() {
    let header = ResponseHeader::new("t1", "s1");
    assert_eq!(header.transaction_id(), Some("t1"));
    assert_eq!(header.session_id(), Some("s1"));
    assert_eq!(header.robot_id(), None);
  }

  #[test]
  fn robot_id_from_device_side() {
    let header = ResponseHeader::new("t1", "s1").with_robot_id("Alpha-Bravo-Charlie-Delta");
    assert_eq!(header.robot_id(), Some("Alpha-Bravo-Charlie-Delta"));
    assert_eq!(header.transaction_id(), Some("t1"));
    assert_eq!(header.session_id(), Some("s1"));
  }

  #[test]
  fn accessors_are_stable() {
    let header = ResponseHeader::new("t1", "s1").with_robot_id("a-b-c-d");
    let read = |h: &ResponseHeader| {
      (
        h.transaction_id().map(String::from),
        h.session_id().map(String::from),
        h.robot_id().map(String::from),
      )
    };
    assert_eq!(read(&header), read(&header));
  }
}
