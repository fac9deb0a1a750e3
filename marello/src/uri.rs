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

//! URI composition for REST calls.

use log::debug;

use crate::constants::CALL_PATH_REST_API;

/// Compose the base url of all REST calls: `<api_url>api/rest/<version>`.
pub fn base_url(api_url: &str, version: &str) -> String {
    format!("{api_url}{CALL_PATH_REST_API}{version}")
}

/// Append `path` to `base`.
///
/// A `/` is inserted only if `path` does not start with one and `base` does
/// not end with one. Empty inputs are valid.
pub fn build_uri(path: &str, base: &str) -> String {
    if !path.is_empty() && !base.is_empty() && !path.starts_with('/') && !base.ends_with('/') {
        format!("{base}/{path}")
    } else {
        format!("{base}{path}")
    }
}

/// Append read parameters to `url`.
///
/// - No params: `url` unchanged.
/// - `id_param` present: its value becomes a path segment, all other
///   params are dropped.
/// - Otherwise: params are form encoded into a query string, in order.
///
/// The id value is inserted verbatim, without percent-encoding. An id
/// containing `/` adds path segments, and one containing a space or other
/// characters invalid in a uri makes the request fail to build with
/// [`ErrorKind::RequestInvalid`](marello_core::ErrorKind::RequestInvalid).
/// Callers must pass ids that are valid path segments.
pub fn append_params<K, V>(url: &str, params: &[(K, V)], id_param: &str) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return url.to_string();
    }

    if let Some((_, id)) = params.iter().find(|(k, _)| k.as_ref() == id_param) {
        if params.len() > 1 {
            debug!("{id_param} present, other read params are not sent");
        }
        return build_uri(id.as_ref(), url);
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();
    build_uri(&format!("?{query}"), url)
}
