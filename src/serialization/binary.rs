use bytes::Bytes;
#[allow(unused_imports)]
use log::{debug, trace, warn};
use speedy::{Endianness, Readable, Writable};

use crate::{
  messages::header::Header,
  result::{Error, Result},
};

// Compact form for transports that do not speak JSON. Fields go in
// declaration order: transaction id, session id, then the role-specific ones.
// Strings are u32 length + UTF-8 bytes, optional fields a u8 presence flag.

pub fn to_bytes<H>(header: &H, endianness: Endianness) -> Result<Bytes>
where
  H: Header + Writable<Endianness>,
{
  let buffer = header.write_to_vec_with_ctx(endianness)?;
  trace!(
    "Encoded header for transaction {:?} into {} bytes",
    header.transaction_id(),
    buffer.len()
  );
  Ok(Bytes::from(buffer))
}

pub fn from_bytes<'a, H>(buffer: &'a [u8], endianness: Endianness) -> Result<H>
where
  H: Header + Readable<'a, Endianness>,
{
  let (header, consumed) = H::read_with_length_from_buffer_with_ctx(endianness, buffer);
  let header = header.map_err(|e| {
    warn!("Cannot decode header from {} bytes: {}", buffer.len(), e);
    Error::from(e)
  })?;
  if consumed < buffer.len() {
    warn!(
      "Header ends at byte {} of {}, rejecting the rest",
      consumed,
      buffer.len()
    );
    return Err(Error::TrailingBytes(buffer.len() - consumed));
  }
  Ok(header)
}
