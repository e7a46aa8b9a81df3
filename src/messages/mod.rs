// shared header contract
pub mod header;

// concrete headers
pub mod request_header;
pub mod response_header;

pub mod correlation;
pub mod credentials;
pub mod protocol_version;
pub mod validity_trait;
