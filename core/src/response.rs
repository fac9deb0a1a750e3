// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// ResponseDescriptor records the outcome of one transport invocation.
///
/// Exactly one of [`body`](Self::body) and [`error_message`](Self::error_message)
/// is set. A failed call keeps the status code and metadata the server sent,
/// if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    status: Option<StatusCode>,
    headers: HeaderMap,
    url: Option<String>,
    outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Body(Bytes),
    Error(String),
}

impl ResponseDescriptor {
    /// Capture a successful call.
    pub fn success(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status: Some(status),
            headers,
            url: None,
            outcome: Outcome::Body(body),
        }
    }

    /// Capture a failed call.
    ///
    /// `status` is `None` when no response was received at all.
    pub fn failure(status: Option<StatusCode>, headers: HeaderMap, error: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            url: None,
            outcome: Outcome::Error(error.into()),
        }
    }

    /// Capture the result returned by an [`HttpSend`](crate::HttpSend).
    ///
    /// - `Err(e)` has no status, the error text becomes the error message.
    /// - Non-2xx responses keep status and headers; the body text is used as
    ///   error message, or `The requested URL returned error: <code>` when empty.
    /// - 2xx responses are successes.
    pub fn from_transport(url: impl Into<String>, result: Result<http::Response<Bytes>>) -> Self {
        let resp = match result {
            Ok(resp) => resp,
            Err(err) => {
                log::debug!("transport failed without response: {err}");
                return Self::failure(None, HeaderMap::new(), err.to_string()).with_url(url);
            }
        };

        let (parts, body) = resp.into_parts();
        if parts.status.is_success() {
            return Self::success(parts.status, parts.headers, body).with_url(url);
        }

        let message = if body.is_empty() {
            format!("The requested URL returned error: {}", parts.status.as_u16())
        } else {
            String::from_utf8_lossy(&body).to_string()
        };
        log::debug!("server answered with {}: {message}", parts.status);
        Self::failure(Some(parts.status), parts.headers, message).with_url(url)
    }

    /// Record the url the call was sent to.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Status code returned by the server, `None` if none was received.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
    }

    /// Whether the call completed with a body.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Body(_))
    }

    /// Whether the call failed.
    pub fn has_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    /// Response metadata.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Content type announced by the server.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Url the call was sent to.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Body of a successful call.
    pub fn body(&self) -> Option<&Bytes> {
        match &self.outcome {
            Outcome::Body(bs) => Some(bs),
            Outcome::Error(_) => None,
        }
    }

    /// Error message of a failed call.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Body(_) => None,
            Outcome::Error(msg) => Some(msg),
        }
    }

    /// Deserialize the body of a successful call as json.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.outcome {
            Outcome::Body(bs) => Ok(serde_json::from_slice(bs)?),
            Outcome::Error(msg) => Err(Error::unexpected(format!(
                "response has no body to decode: {msg}"
            ))),
        }
    }
}
