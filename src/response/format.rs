//! Response decode strategies.

use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Strategy for decoding a response body into the endpoint's declared type.
///
/// The per-endpoint layer only tags the expected type; decoding happens once,
/// in the shared dispatch, through an implementation of this trait.
pub trait ResponseFormat {
    type Output;

    fn parse(body: Bytes) -> Result<Self::Output, ValidationError>;
}

/// JSON decoding into `T`. Every documented endpoint responds with JSON.
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned> ResponseFormat for JsonFormat<T> {
    type Output = T;

    fn parse(body: Bytes) -> Result<T, ValidationError> {
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Undecoded body bytes: the opt-out for callers that want the raw content.
pub struct RawFormat;

impl ResponseFormat for RawFormat {
    type Output = Bytes;

    fn parse(body: Bytes) -> Result<Bytes, ValidationError> {
        Ok(body)
    }
}
