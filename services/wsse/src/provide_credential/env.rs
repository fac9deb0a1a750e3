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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use marello_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads marello credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `MARELLO_USERNAME`: The API user name
/// - `MARELLO_API_KEY`: The API key of that user
///
/// Empty values are treated as absent.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let username = ctx.env_var(MARELLO_USERNAME).filter(|v| !v.is_empty());
        let api_key = ctx.env_var(MARELLO_API_KEY).filter(|v| !v.is_empty());

        match (username, api_key) {
            (Some(username), Some(api_key)) => Ok(Some(Credential { username, api_key })),
            _ => Ok(None),
        }
    }
}
