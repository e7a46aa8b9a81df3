//! Header model for the robot command protocol.
//!
//! Every command a client sends to a robot carries a [`RequestHeader`], and
//! every reply carries a [`ResponseHeader`]. Both expose the identity fields
//! of the [`Header`] trait: the session the message belongs to and the
//! transaction that pairs a request with its response.
//!
//! ```
//! use robot_protocol::{Header, RequestHeader, ResponseHeader};
//!
//! let hello = RequestHeader::session_establishment("t0");
//! assert!(hello.is_session_establishment());
//!
//! let reply = ResponseHeader::establishing(&hello, "s1");
//! let next = RequestHeader::new("t1", reply.session_id().unwrap(), "1.0");
//! assert_eq!(next.session_id(), Some("s1"));
//! ```
//!
//! Headers are plain immutable values. Transport, payloads, credential
//! storage and transaction id generation are left to the caller.


pub mod config;
pub mod messages;
pub mod result;
pub mod serialization;

use static_assertions::assert_impl_all;

pub use config::{HeaderConfig, HeaderConfigBuilder};
pub use messages::{
  correlation::check_correlation,
  credentials::{CredentialSource, StaticCredentials},
  header::Header,
  protocol_version::{DEFAULT_VERSION, VERSION_1},
  request_header::{RequestHeader, DEFAULT_APP_ID},
  response_header::ResponseHeader,
  validity_trait::Validity,
};
pub use result::{Error, Result};

// One header per in-flight transaction, moved freely between threads.
assert_impl_all!(RequestHeader: Send, Sync, Clone);
assert_impl_all!(ResponseHeader: Send, Sync, Clone);
