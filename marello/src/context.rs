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

use marello_core::{Context, OsEnv};
use marello_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Context sending requests through a default [`reqwest::Client`] and reading the OS env.
pub fn default_context() -> Context {
    context_with_client(Client::new())
}

/// Context sending requests through the given [`reqwest::Client`] and reading the OS env.
pub fn context_with_client(client: Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
