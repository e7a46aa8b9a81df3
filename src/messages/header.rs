/// Identity fields shared by every message of a transaction.
///
/// Implemented by [`RequestHeader`](super::request_header::RequestHeader) and
/// [`ResponseHeader`](super::response_header::ResponseHeader). There is no
/// standalone header value: callers always hold one of the two.
pub trait Header {
  /// Session this message belongs to. `None` until the robot has answered
  /// the session-establishment command.
  fn session_id(&self) -> Option<&str>;

  /// Transaction this message is part of. A request and its response share
  /// the same transaction id.
  fn transaction_id(&self) -> Option<&str>;

  fn is_session_establishment(&self) -> bool {
    self.session_id().is_none()
  }
}
