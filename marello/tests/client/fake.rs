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

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use marello::{Error, HttpSend, Result};

/// What the fake transport answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A response with status, content type and body.
    Response(u16, &'static str, &'static [u8]),
    /// No response received at all.
    Failure(&'static str),
}

#[derive(Debug, Default)]
struct State {
    reply: Option<Reply>,
    calls: Vec<http::Request<Bytes>>,
}

/// HttpSend that records requests and answers with a canned reply.
#[derive(Debug, Clone, Default)]
pub struct FakeHttpSend {
    state: Arc<Mutex<State>>,
}

impl FakeHttpSend {
    pub fn new() -> Self {
        let fake = Self::default();
        fake.reply(Reply::Response(
            200,
            "application/json",
            b"{\"response\":\"is OK!\"}",
        ));
        fake
    }

    pub fn reply(&self, reply: Reply) {
        self.state.lock().unwrap().reply = Some(reply);
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn last_call(&self) -> Option<(http::Method, String, http::HeaderMap, Bytes)> {
        let state = self.state.lock().unwrap();
        state.calls.last().map(|req| {
            (
                req.method().clone(),
                req.uri().to_string(),
                req.headers().clone(),
                req.body().clone(),
            )
        })
    }
}

#[async_trait]
impl HttpSend for FakeHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(req);

        match state.reply.clone() {
            Some(Reply::Response(status, content_type, body)) => Ok(http::Response::builder()
                .status(status)
                .header(CONTENT_TYPE, content_type)
                .body(Bytes::from_static(body))?),
            Some(Reply::Failure(msg)) => Err(Error::unexpected(msg)),
            None => Err(Error::unexpected("no reply configured")),
        }
    }
}
