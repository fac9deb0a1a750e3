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

use std::time::Duration;

use bytes::Bytes;
use marello_core::{Context, ResponseDescriptor, Result};
use marello_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("marello-example/1.0")
        .build()
        .map_err(|e| marello_core::Error::config_invalid("failed to build client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = "https://httpbin.org/status/404";
    println!("GET {url}");

    let req = http::Request::get(url).body(Bytes::new())?;
    let resp = ResponseDescriptor::from_transport(url, ctx.http_send(req).await);

    println!("status: {:?}", resp.status_code());
    match resp.error_message() {
        Some(err) => println!("error: {err}"),
        None => println!("body: {:?}", resp.body()),
    }

    Ok(())
}
