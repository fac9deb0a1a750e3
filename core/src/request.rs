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

use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use http::HeaderMap;
use http::Method;

use crate::utils::Redact;

/// RequestDescriptor records exactly what was handed to the transport.
///
/// It is built right before dispatch and never modified afterwards.
#[derive(Clone)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestDescriptor {
    /// Capture a request.
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderMap, body: Option<Bytes>) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    /// Capture a request from the parts that are about to be sent.
    pub fn from_parts(parts: &http::request::Parts, body: Option<Bytes>) -> Self {
        Self::new(
            parts.method.clone(),
            parts.uri.to_string(),
            parts.headers.clone(),
            body,
        )
    }

    /// HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target url of the request.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers sent with the request, authentication headers included.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body sent with the request, `None` for reads.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Body as utf-8 text, lossy.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).to_string())
    }
}

impl Debug for RequestDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<_> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let value = v.to_str().unwrap_or_default();
                if v.is_sensitive() {
                    (k.as_str(), format!("{:?}", Redact::from(value)))
                } else {
                    (k.as_str(), value.to_string())
                }
            })
            .collect();

        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body.as_ref().map(|b| b.len()))
            .finish()
    }
}
