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

//! Print the authentication headers for the credentials found in the environment.

use log::info;
use marello_core::{Context, Error, OsEnv, ProvideCredential, Result};
use marello_wsse::{DefaultCredentialProvider, RequestSigner};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);
    let cred = DefaultCredentialProvider::new()
        .provide_credential(&ctx)
        .await?
        .ok_or_else(|| Error::credential_invalid("MARELLO_USERNAME and MARELLO_API_KEY must be set"))?;
    info!("loaded credential {cred:?}");

    let headers = RequestSigner::new()
        .with_nonce_prefix(ctx.hostname())
        .compute_headers(&cred.username, &cred.api_key)?;
    for line in headers.lines() {
        println!("{line}");
    }

    Ok(())
}
