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

//! Core components for the marello API client.
//!
//! This crate provides the foundational types and traits shared by the
//! authenticator and the REST client.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Descriptors**: [`RequestDescriptor`] and [`ResponseDescriptor`] capture what was sent and what came back
//!
//! ## Example
//!
//! ```no_run
//! use marello_core::{Context, HttpSend, ResponseDescriptor, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct AlwaysOk;
//!
//! #[async_trait]
//! impl HttpSend for AlwaysOk {
//!     async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(Bytes::from_static(b"{}")))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(AlwaysOk);
//! let req = http::Request::get("http://localhost/").body(Bytes::new())?;
//! let resp = ResponseDescriptor::from_transport("http://localhost/", ctx.http_send(req).await);
//! assert!(resp.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Hashing and base64 utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;

mod request;
pub use request::RequestDescriptor;
mod response;
pub use response::ResponseDescriptor;
