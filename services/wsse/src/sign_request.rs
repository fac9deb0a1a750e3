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

//! WSSE UsernameToken authentication.
//!
//! Every request carries three headers:
//!
//! ```text
//! Content-Type: application/json
//! Authorization: WSSE profile="UsernameToken"
//! X-WSSE: UsernameToken Username="<user>", PasswordDigest="<digest>", Nonce="<nonce>", Created="<created>"
//! ```
//!
//! with `digest = base64(sha1(base64_decode(nonce) + created + api_key))`.

use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;
use marello_core::hash::{base64_decode, base64_encode, base64_sha1, md5};
use marello_core::time::{format_iso8601, now, DateTime};
use marello_core::{Context, Error, Result, SignRequest, SigningCredential};

use crate::constants::*;
use crate::credential::Credential;

/// RequestSigner implements the WSSE UsernameToken header scheme of the marello API.
#[derive(Debug, Default)]
pub struct RequestSigner {
    nonce_prefix: Option<String>,
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host identifier mixed into every nonce.
    ///
    /// When unset, [`SignRequest::sign_request`] falls back to
    /// [`Context::hostname`] and [`compute_headers`](Self::compute_headers)
    /// to an empty prefix.
    pub fn with_nonce_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nonce_prefix = Some(prefix.into());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Nonces must never be reused. Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Compute a fresh authentication header set.
    ///
    /// Fails if `username` or `api_key` is empty.
    pub fn compute_headers(&self, username: &str, api_key: &str) -> Result<AuthHeaderSet> {
        self.build(self.nonce_prefix.as_deref().unwrap_or_default(), username, api_key)
    }

    fn build(&self, prefix: &str, username: &str, api_key: &str) -> Result<AuthHeaderSet> {
        if username.is_empty() || api_key.is_empty() {
            return Err(Error::credential_invalid("No Username or Apikey specified"));
        }

        let created = format_iso8601(self.time.unwrap_or_else(now));
        let nonce = match &self.nonce {
            Some(nonce) => nonce.clone(),
            None => generate_nonce(prefix),
        };
        let password_digest = password_digest(&nonce, &created, api_key)?;

        let token = UsernameToken {
            username: username.to_string(),
            password_digest,
            nonce,
            created,
        };
        debug!(
            "computed wsse token for {} with nonce {} created at {}",
            token.username, token.nonce, token.created
        );

        Ok(AuthHeaderSet { token })
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let prefix = match &self.nonce_prefix {
            Some(prefix) => prefix.clone(),
            None => ctx.hostname(),
        };

        self.build(&prefix, &cred.username, &cred.api_key)?
            .apply(&mut parts.headers)
    }
}

/// Generate a single use nonce.
///
/// The nonce is the base64 encoded md5 digest of `<prefix>_<uuid v4>`.
pub fn generate_nonce(prefix: &str) -> String {
    let seed = format!("{prefix}_{}", uuid::Uuid::new_v4().simple());
    base64_encode(&md5(seed.as_bytes()))
}

/// Compute the password digest for a nonce, a created timestamp and an api key.
pub fn password_digest(nonce: &str, created: &str, api_key: &str) -> Result<String> {
    let mut raw = base64_decode(nonce)?;
    raw.extend_from_slice(created.as_bytes());
    raw.extend_from_slice(api_key.as_bytes());

    let salted = merge_password_and_salt(raw, "")?;
    Ok(base64_sha1(&salted))
}

/// Append `{salt}` to the password.
///
/// An empty salt returns the password as is. Salts containing `{` or `}`
/// are rejected.
pub fn merge_password_and_salt(mut password: Vec<u8>, salt: &str) -> Result<Vec<u8>> {
    if salt.is_empty() {
        return Ok(password);
    }

    if salt.contains('{') || salt.contains('}') {
        return Err(Error::request_invalid("Cannot use { or } in salt."));
    }

    password.push(b'{');
    password.extend_from_slice(salt.as_bytes());
    password.push(b'}');
    Ok(password)
}

/// The fields carried by the `X-WSSE` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameToken {
    /// Account name.
    pub username: String,
    /// `base64(sha1(nonce_bytes + created + api_key))`.
    pub password_digest: String,
    /// Base64 encoded nonce.
    pub nonce: String,
    /// ISO 8601 creation time.
    pub created: String,
}

impl UsernameToken {
    /// Parse the value of an `X-WSSE` header.
    pub fn parse(value: &str) -> Result<Self> {
        let rest = value
            .strip_prefix("UsernameToken ")
            .ok_or_else(|| Error::request_invalid("X-WSSE value must start with UsernameToken"))?;

        let field = |name: &str| -> Result<String> {
            let start = format!("{name}=\"");
            let (_, after) = rest
                .split_once(&start)
                .ok_or_else(|| Error::request_invalid(format!("X-WSSE value misses {name}")))?;
            let (v, _) = after
                .split_once('"')
                .ok_or_else(|| Error::request_invalid(format!("X-WSSE {name} is not quoted")))?;
            Ok(v.to_string())
        };

        Ok(Self {
            username: field("Username")?,
            password_digest: field("PasswordDigest")?,
            nonce: field("Nonce")?,
            created: field("Created")?,
        })
    }

    /// Check the digest against an api key.
    pub fn verify(&self, api_key: &str) -> Result<bool> {
        Ok(password_digest(&self.nonce, &self.created, api_key)? == self.password_digest)
    }
}

impl Display for UsernameToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UsernameToken Username=\"{}\", PasswordDigest=\"{}\", Nonce=\"{}\", Created=\"{}\"",
            self.username, self.password_digest, self.nonce, self.created
        )
    }
}

/// The three authentication headers sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaderSet {
    token: UsernameToken,
}

impl AuthHeaderSet {
    /// The UsernameToken carried in `X-WSSE`.
    pub fn token(&self) -> &UsernameToken {
        &self.token
    }

    /// The headers as `Name: value` lines, in wire order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Content-Type: {CONTENT_TYPE_JSON}"),
            format!("Authorization: {WSSE_AUTHORIZATION}"),
            format!("X-WSSE: {}", self.token),
        ]
    }

    /// The headers as typed pairs, in wire order.
    ///
    /// The `X-WSSE` value is marked sensitive.
    pub fn to_headers(&self) -> Result<[(HeaderName, HeaderValue); 3]> {
        let mut wsse: HeaderValue = self.token.to_string().parse()?;
        wsse.set_sensitive(true);

        Ok([
            (CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON)),
            (AUTHORIZATION, HeaderValue::from_static(WSSE_AUTHORIZATION)),
            (HeaderName::from_static(X_WSSE), wsse),
        ])
    }

    /// Insert the headers into a header map, replacing existing values.
    pub fn apply(self, headers: &mut HeaderMap) -> Result<()> {
        for (k, v) in self.to_headers()? {
            headers.insert(k, v);
        }
        Ok(())
    }
}
