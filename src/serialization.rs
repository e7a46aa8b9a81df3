//! Wire forms of the request and response headers.
//!
//! The robot expects the exact keys `SessionID`, `TransactionID`, `AppID`,
//! `Credentials`, `Version` and `RobotID`. Absent optional fields are left
//! out rather than sent as empty strings.

pub mod binary;
pub mod json;

pub use speedy::Endianness;
