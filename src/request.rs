//! The contract every endpoint type implements.
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{params::Params, path, Client, Error};

/// Encoded body of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Params),
    /// Sent as `application/json`.
    Json(serde_json::Value),
}

/// A single Canvas API endpoint.
///
/// Implementors describe the method, path, query and body of one call;
/// [`Client`] takes care of sending it and decoding [`Request::Output`].
#[async_trait]
pub trait Request: Sync {
    /// Type the response body deserializes into.
    type Output: DeserializeOwned + Send;

    fn method(&self) -> Method;

    /// Path relative to `/api/v1`, with path parameters substituted.
    fn url_path(&self) -> String;

    fn query(&self) -> Params {
        Params::new()
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        Ok(None)
    }

    /// Checks required fields before anything is sent.
    fn has_errors(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Validates, sends and decodes this request.
    async fn send(&self, client: &Client) -> Result<Self::Output, Error> {
        client.send(self).await
    }
}

/// Collects every validation problem of a request.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.push(format!("'{}' is required", field));
        }
        self
    }

    /// Requires a non-empty path parameter that stays inside its own segment.
    pub(crate) fn require_segment(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.push(format!("'{}' is required", field));
        } else if path::is_dot_segment(value) {
            self.errors
                .push(format!("'{}' must not be a dot segment", field));
        }
        self
    }

    pub(crate) fn require_some<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.errors.push(format!("'{}' is required", field));
        }
        self
    }

    pub(crate) fn require_non_empty<T>(&mut self, field: &str, values: &[T]) -> &mut Self {
        if values.is_empty() {
            self.errors
                .push(format!("'{}' requires at least one value", field));
        }
        self
    }

    pub(crate) fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.errors.push(message.into());
        }
        self
    }

    pub(crate) fn finish(&mut self) -> Result<(), Error> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidRequest(std::mem::take(&mut self.errors)))
        }
    }
}
