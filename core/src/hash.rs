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

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use md5::Md5;
use sha1::Digest;
use sha1::Sha1;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// Raw MD5 digest, always 16 bytes.
pub fn md5(content: &[u8]) -> [u8; 16] {
    Md5::digest(content).into()
}

/// Raw SHA1 digest, always 20 bytes.
pub fn sha1(content: &[u8]) -> [u8; 20] {
    Sha1::digest(content).into()
}

/// Base64 encoded SHA1 hash.
///
/// Use this function instead of `base64_encode(&sha1(content))` can reduce
/// extra copy.
pub fn base64_sha1(content: &[u8]) -> String {
    base64_encode(Sha1::digest(content).as_slice())
}
