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

use http::StatusCode;

/// Path between the api url and the version.
pub const CALL_PATH_REST_API: &str = "api/rest/";
/// Version used when none is configured.
pub const DEFAULT_VERSION: &str = "latest";
/// Parameter that is sent as a path segment instead of a query string.
pub const DEFAULT_ID_PARAM: &str = "id";
/// Path used by `Client::ping_instance`.
pub const HEALTH_CHECK_PATH: &str = "/users";
/// Status code a healthy instance answers the health check with.
pub const HTTP_CODE_OK: StatusCode = StatusCode::OK;

// Env values used by the client config.
pub const MARELLO_API_URL: &str = "MARELLO_API_URL";
pub const MARELLO_API_VERSION: &str = "MARELLO_API_VERSION";
