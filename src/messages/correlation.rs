#[allow(unused_imports)]
use log::{debug, trace, warn};

use crate::{
  messages::{request_header::RequestHeader, response_header::ResponseHeader},
  result::{Error, Result},
};

impl ResponseHeader {
  /// Reply header for `request` inside its session.
  pub fn answering(request: &RequestHeader) -> ResponseHeader {
    match request.session_id() {
      Some(session_id) => ResponseHeader::new(request.transaction_id(), session_id),
      None => ResponseHeader::for_transaction(request.transaction_id()),
    }
  }

  /// Reply to the session-establishment command, carrying the session id the
  /// robot just issued.
  pub fn establishing(request: &RequestHeader, session_id: impl Into<String>) -> ResponseHeader {
    ResponseHeader::new(request.transaction_id(), session_id)
  }

  /// Whether this header answers `request`.
  ///
  /// The transaction ids must be equal. After the handshake the session ids
  /// must be equal too; the handshake reply may carry any session id.
  pub fn correlates_with(&self, request: &RequestHeader) -> bool {
    check_correlation(request, self).is_ok()
  }
}

/// Match a response against the request it is supposed to answer.
pub fn check_correlation(request: &RequestHeader, response: &ResponseHeader) -> Result<()> {
  if response.transaction_id() != Some(request.transaction_id()) {
    warn!(
      "Response transaction {:?} does not answer request {}",
      response.transaction_id(),
      request.transaction_id()
    );
    return Err(Error::TransactionMismatch {
      expected: request.transaction_id().to_string(),
      found: response.transaction_id().map(String::from),
    });
  }
  match request.session_id() {
    None => {
      trace!(
        "Handshake reply for transaction {} assigns session {:?}",
        request.transaction_id(),
        response.session_id()
      );
      Ok(())
    }
    Some(session_id) if response.session_id() == Some(session_id) => Ok(()),
    Some(session_id) => {
      warn!(
        "Response session {:?} differs from request session {}",
        response.session_id(),
        session_id
      );
      Err(Error::SessionMismatch {
        expected: Some(session_id.to_string()),
        found: response.session_id().map(String::from),
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn answering_echoes_ids() {
    let request = RequestHeader::new("t7", "s1", "1.0");
    let response = ResponseHeader::answering(&request);
    assert_eq!(response.transaction_id(), Some(request.transaction_id()));
    assert_eq!(response.session_id(), request.session_id());
    assert!(response.correlates_with(&request));
  }

  #[test]
  fn handshake_reply_assigns_session() {
    let request = RequestHeader::session_establishment("t0");
    let response = ResponseHeader::establishing(&request, "s-new");
    assert_eq!(response.transaction_id(), Some("t0"));
    assert_eq!(response.session_id(), Some("s-new"));
    assert!(check_correlation(&request, &response).is_ok());
  }

  #[test]
  fn transaction_mismatch() {
    let request = RequestHeader::new("t1", "s1", "1.0");
    let response = ResponseHeader::new("t2", "s1");
    match check_correlation(&request, &response) {
      Err(Error::TransactionMismatch { expected, found }) => {
        assert_eq!(expected, "t1");
        assert_eq!(found.as_deref(), Some("t2"));
      }
      other => panic!("unexpected {:?}", other),
    }
    assert!(!ResponseHeader::empty().correlates_with(&request));
  }

  #[test]
  fn session_mismatch() {
    let request = RequestHeader::new("t1", "s1", "1.0");
    let response = ResponseHeader::for_transaction("t1");
    match check_correlation(&request, &response) {
      Err(Error::SessionMismatch { expected, found }) => {
        assert_eq!(expected.as_deref(), Some("s1"));
        assert_eq!(found, None);
      }
      other => panic!("unexpected {:?}", other),
    }
  }
}
