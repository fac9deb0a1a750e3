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

//! WSSE UsernameToken authentication for the marello API.
//!
//! ```
//! use marello_wsse::RequestSigner;
//!
//! let headers = RequestSigner::new().compute_headers("admin", "api_key")?;
//! for line in headers.lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), marello_core::Error>(())
//! ```

mod constants;
pub use constants::{MARELLO_API_KEY, MARELLO_USERNAME};

mod credential;
pub use credential::{Credential, API_KEY_KEY, USERNAME_KEY};

mod sign_request;
pub use sign_request::{
    generate_nonce, merge_password_and_salt, password_digest, AuthHeaderSet, RequestSigner,
    UsernameToken,
};

mod provide_credential;
pub use provide_credential::*;
