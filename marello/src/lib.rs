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

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use marello_core::*;

/// WSSE authentication.
pub mod wsse {
    pub use marello_wsse::*;
}

mod constants;
pub use constants::{
    CALL_PATH_REST_API, DEFAULT_ID_PARAM, DEFAULT_VERSION, HEALTH_CHECK_PATH, HTTP_CODE_OK,
    MARELLO_API_URL, MARELLO_API_VERSION,
};

mod config;
pub use config::Config;

pub mod uri;

mod client;
pub use client::Client;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{context_with_client, default_context};
