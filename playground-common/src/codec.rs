//! Share link payload encoding
//!
//! A state record travels as base64 (standard alphabet, padded) over its UTF-8
//! JSON. Links written by the browser build used `btoa` over the same bytes,
//! so both produce identical payloads. Decoding accepts missing padding,
//! matching what `atob` tolerates.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use thiserror::Error;
use tracing::debug;

use crate::state::{State, StatePatch};

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("invalid field in payload: {0}")]
    InvalidField(String),
    #[error("payload is missing field `{0}`")]
    MissingField(&'static str),
}

pub fn serialize(state: &State) -> String {
    let json = serde_json::to_vec(state).expect("State is always serializable");
    let encoded = STANDARD.encode(&json);
    debug!(json_len = json.len(), encoded_len = encoded.len(), "Encoded state");
    encoded
}

/// Decode a complete state record. Every field must be present.
pub fn deserialize(s: &str) -> Result<State, CodecError> {
    decode_patch(s)?
        .into_state()
        .map_err(CodecError::MissingField)
}

/// Decode whatever fields the payload carries.
///
/// Fails unless the payload is base64 over UTF-8 text holding a JSON object.
/// Known keys must have the right type; unknown keys are dropped.
pub fn decode_patch(s: &str) -> Result<StatePatch, CodecError> {
    let bytes = LENIENT_STANDARD
        .decode(s.trim())
        .map_err(|_| CodecError::InvalidBase64)?;
    let text = std::str::from_utf8(&bytes).map_err(|_| CodecError::InvalidUtf8)?;
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CodecError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(CodecError::NotAnObject);
    }
    let patch: StatePatch =
        serde_json::from_value(value).map_err(|e| CodecError::InvalidField(e.to_string()))?;
    debug!(payload_len = bytes.len(), "Decoded state payload");
    Ok(patch)
}
