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

use marello::wsse::DefaultCredentialProvider;
use marello::{default_context, Client, Config};

/// Ping the instance configured through `MARELLO_API_URL`, `MARELLO_USERNAME`
/// and `MARELLO_API_KEY`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    let mut client = Client::with_config(ctx, config)?;
    client.load_auth(&DefaultCredentialProvider::new()).await?;

    if client.ping_instance().await? {
        println!("{} is reachable", client.api_url());
    } else {
        let resp = client.last_response();
        println!(
            "ping failed with {:?}: {:?}",
            resp.and_then(|r| r.status_code()),
            resp.and_then(|r| r.error_message())
        );
    }

    Ok(())
}
