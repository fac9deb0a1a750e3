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

use marello_core::{utils::Redact, Error, Result, SigningCredential};

/// Key of the account name in a credential mapping.
pub const USERNAME_KEY: &str = "username";
/// Key of the secret key in a credential mapping.
pub const API_KEY_KEY: &str = "api_key";

/// Credential for the marello API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Account name of the API user.
    pub username: String,
    /// Secret API key of the user.
    pub api_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a credential from a `username` / `api_key` mapping.
    ///
    /// Other keys are ignored. Fails if either key is missing or empty.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut username = None;
        let mut api_key = None;
        for (k, v) in pairs {
            match k.as_ref() {
                USERNAME_KEY => username = Some(v.into()),
                API_KEY_KEY => api_key = Some(v.into()),
                _ => {}
            }
        }

        match (username, api_key) {
            (Some(username), Some(api_key)) if !username.is_empty() && !api_key.is_empty() => {
                Ok(Self { username, api_key })
            }
            _ => Err(Error::credential_invalid(
                "Username or Apikey not specified.",
            )),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &Redact::from(&self.username))
            .field("api_key", &Redact::from(&self.api_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.api_key.is_empty()
    }
}
