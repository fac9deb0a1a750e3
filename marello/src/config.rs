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

use marello_core::Context;

use crate::constants::*;

/// Config carries all the configuration of a [`Client`](crate::Client).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// `api_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MARELLO_API_URL`]
    ///
    /// The url is used verbatim: `http://demo.marello.com/` yields
    /// `http://demo.marello.com/api/rest/<version>`.
    pub api_url: Option<String>,
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MARELLO_API_VERSION`]
    /// - [`DEFAULT_VERSION`]
    pub version: Option<String>,
    /// Read parameter sent as a trailing path segment, [`DEFAULT_ID_PARAM`] if unset.
    pub id_param: Option<String>,
    /// Path requested by `ping_instance`, [`HEALTH_CHECK_PATH`] if unset.
    pub health_check_path: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_url
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set id_param
    pub fn with_id_param(mut self, id_param: impl Into<String>) -> Self {
        self.id_param = Some(id_param.into());
        self
    }

    /// Set health_check_path
    pub fn with_health_check_path(mut self, path: impl Into<String>) -> Self {
        self.health_check_path = Some(path.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MARELLO_API_URL) {
            self.api_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MARELLO_API_VERSION) {
            self.version.get_or_insert(v);
        }

        self
    }

    /// The configured version or [`DEFAULT_VERSION`].
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// The configured id parameter or [`DEFAULT_ID_PARAM`].
    pub fn id_param(&self) -> &str {
        self.id_param.as_deref().unwrap_or(DEFAULT_ID_PARAM)
    }

    /// The configured health check path or [`HEALTH_CHECK_PATH`].
    pub fn health_check_path(&self) -> &str {
        self.health_check_path
            .as_deref()
            .unwrap_or(HEALTH_CHECK_PATH)
    }
}
