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

// Env values used by marello services.
pub const MARELLO_USERNAME: &str = "MARELLO_USERNAME";
pub const MARELLO_API_KEY: &str = "MARELLO_API_KEY";

// Headers used by the WSSE UsernameToken profile.
pub const X_WSSE: &str = "x-wsse";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const WSSE_AUTHORIZATION: &str = "WSSE profile=\"UsernameToken\"";
