#[allow(unused_imports)]
use log::{debug, trace, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{messages::header::Header, result::Result};

pub fn to_json<H: Header + Serialize>(header: &H) -> Result<String> {
  let json = serde_json::to_string(header)?;
  trace!(
    "Encoded header for transaction {:?}: {}",
    header.transaction_id(),
    json
  );
  Ok(json)
}

pub fn to_json_value<H: Header + Serialize>(header: &H) -> Result<Value> {
  Ok(serde_json::to_value(header)?)
}

pub fn from_json<H: Header + DeserializeOwned>(json: &str) -> Result<H> {
  match serde_json::from_str::<H>(json) {
    Ok(header) => {
      trace!("Decoded header for transaction {:?}", header.transaction_id());
      Ok(header)
    }
    Err(e) => {
      warn!("Cannot decode header from {:?}: {}", json, e);
      Err(e.into())
    }
  }
}

pub fn from_json_value<H: Header + DeserializeOwned>(value: Value) -> Result<H> {
  serde_json::from_value(value).map_err(|e| {
    warn!("Cannot decode header: {}", e);
    e.into()
  })
}
