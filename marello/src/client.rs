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

use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use marello_core::{
    Context, Error, ProvideCredential, RequestDescriptor, ResponseDescriptor, Result, SignRequest,
    SigningCredential,
};
use marello_wsse::{Credential, RequestSigner};
use serde::Serialize;

use crate::config::Config;
use crate::constants::HTTP_CODE_OK;
use crate::uri::{append_params, base_url, build_uri};

const NO_CREDENTIALS: &str =
    "No credentials provided. Please call Client::set_auth() before making requests.";

/// Client for the marello REST API.
///
/// Every call performs exactly one round-trip through the [`HttpSend`](marello_core::HttpSend)
/// of its [`Context`] and returns a [`ResponseDescriptor`]. Failures of the
/// remote call are data: they are returned inside the descriptor, never as
/// `Err`. `Err` is reserved for local mistakes such as missing credentials or
/// an empty body.
///
/// The client remembers the last request and response it handled. Calls take
/// `&mut self`, so one client serves one caller at a time; wrap it in a mutex
/// to share it.
///
/// ```no_run
/// use marello::{Client, Context};
///
/// # async fn example(ctx: Context) -> marello::Result<()> {
/// let mut client = Client::new(ctx, "http://demo.marello.com/")?;
/// client.set_auth([("username", "admin"), ("api_key", "api_key")])?;
///
/// let resp = client.get("/orders", &[("page", "1"), ("limit", "25")]).await?;
/// match resp.error_message() {
///     Some(err) => eprintln!("call failed with {:?}: {err}", resp.status_code()),
///     None => println!("{:?}", resp.body()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    config: Config,
    api_url: String,
    signer: RequestSigner,
    credential: Option<Credential>,
    last_request: Option<RequestDescriptor>,
    last_response: Option<ResponseDescriptor>,
}

impl Client {
    /// Create a client for the instance at `api_url`.
    pub fn new(ctx: Context, api_url: &str) -> Result<Self> {
        Self::with_config(ctx, Config::new().with_api_url(api_url))
    }

    /// Create a client from a config.
    ///
    /// Fails if the config has no api url, or the url is not an absolute
    /// `scheme://host/` url.
    pub fn with_config(ctx: Context, config: Config) -> Result<Self> {
        let api_url = match config.api_url.as_deref() {
            Some(url) if !url.is_empty() => base_url(url, config.version()),
            _ => return Err(Error::config_invalid("No api url provided")),
        };
        let uri = api_url.parse::<http::Uri>().map_err(|e| {
            Error::config_invalid(format!("Invalid api url provided: {api_url}")).with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "Invalid api url provided: {api_url}"
            )));
        }
        debug!("marello client created for {api_url}");

        let signer = RequestSigner::new().with_nonce_prefix(ctx.hostname());
        Ok(Self {
            ctx,
            config,
            api_url,
            signer,
            credential: None,
            last_request: None,
            last_response: None,
        })
    }

    /// Attach credentials from a `username` / `api_key` mapping.
    ///
    /// ```
    /// # use marello::{Client, Context};
    /// let mut client = Client::new(Context::new(), "http://demo.marello.com/")?;
    /// assert!(client.set_auth([("username", "admin")]).is_err());
    /// client.set_auth([("username", "admin"), ("api_key", "api_key")])?;
    /// # Ok::<(), marello::Error>(())
    /// ```
    pub fn set_auth<I, K, V>(&mut self, credentials: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.credential = Some(Credential::from_pairs(credentials)?);
        Ok(())
    }

    /// Attach a credential.
    pub fn set_credential(&mut self, credential: Credential) -> Result<()> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid("Username or Apikey not specified."));
        }
        self.credential = Some(credential);
        Ok(())
    }

    /// Resolve and attach credentials through a provider.
    ///
    /// Fails if the provider has none.
    pub async fn load_auth(
        &mut self,
        provider: &impl ProvideCredential<Credential = Credential>,
    ) -> Result<()> {
        let credential = provider
            .provide_credential(&self.ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no credential found by provider"))?;
        self.set_credential(credential)
    }

    /// The base url all paths are resolved against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// REST GET call.
    ///
    /// If `params` contains the configured id parameter it is appended as a
    /// path segment, otherwise all params are sent as a query string.
    pub async fn get<K, V>(&mut self, path: &str, params: &[(K, V)]) -> Result<ResponseDescriptor>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_uri(path, &self.api_url);
        let url = append_params(&url, params, self.config.id_param());

        self.call(Method::GET, url, None).await
    }

    /// REST POST call. `body` is sent json encoded and must not be empty.
    pub async fn post<T: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<ResponseDescriptor> {
        let body = encode_body(&Method::POST, body)?;
        let url = build_uri(path, &self.api_url);

        self.call(Method::POST, url, Some(body)).await
    }

    /// REST PUT call. `body` is sent json encoded and must not be empty.
    pub async fn put<T: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<ResponseDescriptor> {
        let body = encode_body(&Method::PUT, body)?;
        let url = build_uri(path, &self.api_url);

        self.call(Method::PUT, url, Some(body)).await
    }

    /// REST DELETE call. `body` is sent json encoded and must not be empty.
    pub async fn delete<T: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<ResponseDescriptor> {
        let body = encode_body(&Method::DELETE, body)?;
        let url = build_uri(path, &self.api_url);

        self.call(Method::DELETE, url, Some(body)).await
    }

    /// Check connection and authorization against the instance.
    ///
    /// Returns `true` only if the health check path answers with 200.
    pub async fn ping_instance(&mut self) -> Result<bool> {
        let path = self.config.health_check_path().to_string();
        let params: &[(&str, &str)] = &[];
        let resp = self.get(&path, params).await?;

        Ok(resp.status_code() == Some(HTTP_CODE_OK))
    }

    /// Check connection and authorization against the instance.
    #[deprecated(note = "use ping_instance() instead")]
    pub async fn ping_users(&mut self) -> Result<bool> {
        self.ping_instance().await
    }

    /// Status code of the last response.
    pub fn response_code(&self) -> Option<StatusCode> {
        self.last_response.as_ref().and_then(|r| r.status_code())
    }

    /// Whether the last response carries an error.
    pub fn has_error(&self) -> bool {
        self.last_response
            .as_ref()
            .map(|r| r.has_error())
            .unwrap_or(false)
    }

    /// The last request handed to the transport.
    pub fn last_request(&self) -> Option<&RequestDescriptor> {
        self.last_request.as_ref()
    }

    /// The last response returned by the transport.
    pub fn last_response(&self) -> Option<&ResponseDescriptor> {
        self.last_response.as_ref()
    }

    async fn call(
        &mut self,
        method: Method,
        url: String,
        body: Option<Bytes>,
    ) -> Result<ResponseDescriptor> {
        let credential = self
            .credential
            .as_ref()
            .ok_or_else(|| Error::credential_invalid(NO_CREDENTIALS))?;

        let req = http::Request::builder()
            .method(method)
            .uri(&url)
            .body(body.clone().unwrap_or_default())?;
        let (mut parts, payload) = req.into_parts();
        self.signer
            .sign_request(&self.ctx, &mut parts, Some(credential))
            .await?;

        let request = RequestDescriptor::from_parts(&parts, body);
        debug!("dispatching {request:?}");
        self.last_request = Some(request);

        let result = self
            .ctx
            .http_send(http::Request::from_parts(parts, payload))
            .await;
        let resp = ResponseDescriptor::from_transport(url, result);
        if let Some(err) = resp.error_message() {
            debug!("call failed with status {:?}: {err}", resp.status_code());
        }

        self.last_response = Some(resp.clone());
        Ok(resp)
    }
}

/// Encode a mutating body as json, rejecting empty payloads.
fn encode_body<T: Serialize + ?Sized>(method: &Method, body: &T) -> Result<Bytes> {
    let value = serde_json::to_value(body)?;
    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(m) => m.is_empty(),
        serde_json::Value::Array(v) => v.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    };
    if empty {
        return Err(Error::request_invalid(format!(
            "Query cannot be empty when a {method} call is made."
        )));
    }

    Ok(Bytes::from(serde_json::to_vec(body)?))
}
