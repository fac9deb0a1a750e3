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

use std::collections::HashMap;

use http::{Method, StatusCode};
use marello::wsse::{StaticCredentialProvider, UsernameToken};
use marello::{Client, Config, Context, ErrorKind, OsEnv, ResponseDescriptor, StaticEnv};
use pretty_assertions::assert_eq;
use serde_json::json;

mod fake;
use fake::{FakeHttpSend, Reply};

const TEST_URL: &str = "http://demo.marello.com/";
const USERNAME: &str = "admin";
const PASSWORD: &str = "d07009855780a53f025f0cfea3eb081ba124c0c8";

fn init_client() -> (Client, FakeHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let fake = FakeHttpSend::new();
    let ctx = Context::new().with_http_send(fake.clone());
    let mut client = Client::new(ctx, TEST_URL).expect("client must be created");
    client
        .set_auth([("username", USERNAME), ("api_key", PASSWORD)])
        .expect("credentials must be accepted");

    (client, fake)
}

fn assert_last_call(client: &Client, result: &ResponseDescriptor) {
    assert_eq!(client.last_response(), Some(result));
    let req = client.last_request().expect("last request must be set");
    assert!(req.url().starts_with(TEST_URL));
    assert_eq!(result.url(), Some(req.url()));
}

#[tokio::test]
async fn test_client_failed_to_setup_url() {
    let err = Client::new(Context::new(), "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), "No api url provided");

    let fake = FakeHttpSend::new();
    let err = Client::new(Context::new().with_http_send(fake.clone()), "not a url").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn test_client_failed_to_setup_auth() {
    let fake = FakeHttpSend::new();
    let mut client = Client::new(Context::new().with_http_send(fake.clone()), TEST_URL).unwrap();

    let err = client.ping_instance().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(
        err.to_string(),
        "No credentials provided. Please call Client::set_auth() before making requests."
    );
    assert_eq!(fake.call_count(), 0);
    assert!(client.last_request().is_none());
    assert!(client.last_response().is_none());
}

#[tokio::test]
async fn test_set_auth_rejects_incomplete_credentials() {
    let (mut client, _) = init_client();

    let err = client
        .set_auth(HashMap::from([("username", "admin")]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(err.to_string(), "Username or Apikey not specified.");

    let err = client
        .set_auth([("username", ""), ("api_key", "")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_client_successful_ping_instance() {
    let (mut client, fake) = init_client();

    assert!(client.ping_instance().await.unwrap());
    assert_eq!(client.response_code(), Some(StatusCode::OK));
    assert!(client.last_response().is_some());

    let (method, url, _, _) = fake.last_call().unwrap();
    assert_eq!(method, Method::GET);
    assert_eq!(url, "http://demo.marello.com/api/rest/latest/users");
}

#[tokio::test]
async fn test_client_failed_ping_instance() {
    let (mut client, fake) = init_client();

    for status in [401, 403, 404, 500] {
        fake.reply(Reply::Response(status, "application/json", b""));
        assert!(!client.ping_instance().await.unwrap(), "status: {status}");
        assert_eq!(client.response_code().map(|s| s.as_u16()), Some(status));
    }

    // only 200 counts
    fake.reply(Reply::Response(204, "application/json", b""));
    assert!(!client.ping_instance().await.unwrap());

    fake.reply(Reply::Failure("connection refused"));
    assert!(!client.ping_instance().await.unwrap());
    assert_eq!(client.response_code(), None);
}

#[tokio::test]
#[allow(deprecated)]
async fn test_ping_users() {
    let (mut client, _) = init_client();
    assert!(client.ping_users().await.unwrap());
}

#[tokio::test]
async fn test_rest_get_call_without_query() {
    let (mut client, fake) = init_client();

    let params: &[(&str, &str)] = &[];
    let result = client.get("/users", params).await.unwrap();
    assert_last_call(&client, &result);

    assert!(result.is_success());
    assert_eq!(result.content_type(), Some("application/json"));
    let body: serde_json::Value = result.json().unwrap();
    assert_eq!(body, json!({"response": "is OK!"}));

    let (_, url, _, body) = fake.last_call().unwrap();
    assert_eq!(url, "http://demo.marello.com/api/rest/latest/users");
    assert!(body.is_empty());
    assert!(client.last_request().unwrap().body().is_none());
}

#[tokio::test]
async fn test_rest_get_call_with_query() {
    let (mut client, _) = init_client();

    let result = client
        .get("/test", &[("page", "2"), ("limit", "200")])
        .await
        .unwrap();
    assert_last_call(&client, &result);
    assert!(result.url().unwrap().contains("page=2&limit=200"));
    assert_eq!(
        client.last_request().unwrap().url(),
        "http://demo.marello.com/api/rest/latest/test/?page=2&limit=200"
    );
}

#[tokio::test]
async fn test_rest_get_call_with_id() {
    let (mut client, _) = init_client();

    let result = client.get("orders", &[("id", "5")]).await.unwrap();
    assert_last_call(&client, &result);
    assert!(result.url().unwrap().ends_with("/orders/5"));
    assert!(!result.url().unwrap().contains('?'));
}

#[tokio::test]
async fn test_rest_get_call_with_custom_id_param() {
    let fake = FakeHttpSend::new();
    let mut client = Client::with_config(
        Context::new().with_http_send(fake.clone()),
        Config::new()
            .with_api_url(TEST_URL)
            .with_version("v1")
            .with_id_param("sku"),
    )
    .unwrap();
    client
        .set_auth([("username", USERNAME), ("api_key", PASSWORD)])
        .unwrap();

    client
        .get("/products", &[("sku", "MAR-001"), ("id", "5")])
        .await
        .unwrap();
    let (_, url, _, _) = fake.last_call().unwrap();
    assert_eq!(url, "http://demo.marello.com/api/rest/v1/products/MAR-001");
}

#[tokio::test]
async fn test_requests_carry_wsse_headers() {
    let (mut client, fake) = init_client();

    client.get("/users", &[("page", "1")]).await.unwrap();

    let (_, _, headers, _) = fake.last_call().unwrap();
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["authorization"], "WSSE profile=\"UsernameToken\"");

    let token = UsernameToken::parse(headers["x-wsse"].to_str().unwrap()).unwrap();
    assert_eq!(token.username, USERNAME);
    assert!(token.verify(PASSWORD).unwrap());

    // the recorded request matches what was sent
    assert_eq!(client.last_request().unwrap().headers(), &headers);

    // every call gets a fresh nonce
    client.get("/users", &[("page", "1")]).await.unwrap();
    let (_, _, next, _) = fake.last_call().unwrap();
    let next = UsernameToken::parse(next["x-wsse"].to_str().unwrap()).unwrap();
    assert_ne!(token.nonce, next.nonce);
}

#[tokio::test]
async fn test_rest_fail_post_call() {
    let (mut client, fake) = init_client();

    let err = client.post("/test", &json!({})).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(
        err.to_string(),
        "Query cannot be empty when a POST call is made."
    );
    assert_eq!(fake.call_count(), 0);
    assert!(client.last_response().is_none());
}

#[tokio::test]
async fn test_rest_post_call() {
    let (mut client, fake) = init_client();
    let payload = json!({"customer": 2, "name": "john"});

    let result = client.post("/test", &payload).await.unwrap();
    assert_last_call(&client, &result);

    let req = client.last_request().unwrap();
    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.body_text().as_deref(),
        Some("{\"customer\":2,\"name\":\"john\"}")
    );

    let (method, _, _, body) = fake.last_call().unwrap();
    assert_eq!(method, Method::POST);
    assert_eq!(body, serde_json::to_vec(&payload).unwrap());
}

#[tokio::test]
async fn test_rest_fail_put_call() {
    let (mut client, fake) = init_client();

    let err = client.put("/test", &json!([])).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(
        err.to_string(),
        "Query cannot be empty when a PUT call is made."
    );
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn test_rest_put_call() {
    let (mut client, fake) = init_client();

    #[derive(serde::Serialize)]
    struct Order {
        order: u32,
        #[serde(rename = "lastName")]
        last_name: &'static str,
    }

    let result = client
        .put(
            "/test",
            &Order {
                order: 2,
                last_name: "Doe",
            },
        )
        .await
        .unwrap();
    assert_last_call(&client, &result);
    assert_eq!(
        client.last_request().unwrap().body_text().as_deref(),
        Some("{\"order\":2,\"lastName\":\"Doe\"}")
    );
    assert_eq!(fake.last_call().unwrap().0, Method::PUT);
}

#[tokio::test]
async fn test_rest_fail_delete_call() {
    let (mut client, fake) = init_client();

    let err = client
        .delete("/test", &HashMap::<String, String>::new())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Query cannot be empty when a DELETE call is made."
    );
    assert_eq!(fake.call_count(), 0);
}

#[tokio::test]
async fn test_rest_delete_call() {
    let (mut client, fake) = init_client();

    let result = client.delete("/test", &json!({"address": 2})).await.unwrap();
    assert_last_call(&client, &result);
    assert_eq!(
        client.last_request().unwrap().body_text().as_deref(),
        Some("{\"address\":2}")
    );
    assert_eq!(fake.last_call().unwrap().0, Method::DELETE);
}

#[tokio::test]
async fn test_call_with_error_response() {
    let (mut client, fake) = init_client();
    fake.reply(Reply::Response(404, "application/json", b"boom"));

    let params: &[(&str, &str)] = &[];
    let result = client.get("/darn", params).await.unwrap();
    assert_last_call(&client, &result);

    assert_eq!(client.response_code(), Some(StatusCode::NOT_FOUND));
    assert!(client.has_error());
    assert_eq!(result.error_message(), Some("boom"));
    assert!(result.body().is_none());
    assert_eq!(result.status_code(), Some(StatusCode::NOT_FOUND));
    assert_eq!(result.content_type(), Some("application/json"));
}

#[tokio::test]
async fn test_call_with_transport_failure() {
    let (mut client, fake) = init_client();
    fake.reply(Reply::Failure("Well this ain't good..."));

    let result = client.post("/test", &json!({"a": 1})).await.unwrap();
    assert_last_call(&client, &result);

    assert!(client.has_error());
    assert_eq!(client.response_code(), None);
    assert_eq!(result.error_message(), Some("Well this ain't good..."));
    assert!(result.body().is_none());
}

#[tokio::test]
async fn test_last_call_is_overwritten() {
    let (mut client, fake) = init_client();

    fake.reply(Reply::Response(500, "text/plain", b""));
    let failed = client.get("/first", &[("page", "1")]).await.unwrap();
    assert!(client.has_error());

    fake.reply(Reply::Response(200, "application/json", b"[]"));
    let ok = client.get("/second", &[("page", "1")]).await.unwrap();

    assert!(!client.has_error());
    assert_ne!(client.last_response(), Some(&failed));
    assert_eq!(client.last_response(), Some(&ok));
    assert!(client.last_request().unwrap().url().contains("/second"));
    assert_eq!(fake.call_count(), 2);
}

#[tokio::test]
async fn test_failed_local_call_keeps_previous_slots() {
    let (mut client, _) = init_client();

    let ok = client.get("/users", &[("page", "1")]).await.unwrap();
    let url = client.last_request().unwrap().url().to_string();

    assert!(client.post("/test", &json!(null)).await.is_err());
    assert_eq!(client.last_response(), Some(&ok));
    assert_eq!(client.last_request().unwrap().url(), url);
}

#[tokio::test]
async fn test_load_auth_from_provider() {
    let fake = FakeHttpSend::new();
    let mut client = Client::new(Context::new().with_http_send(fake.clone()), TEST_URL).unwrap();

    client
        .load_auth(&StaticCredentialProvider::new("provider_admin", "provider_key"))
        .await
        .unwrap();
    client.get("/users", &[("page", "1")]).await.unwrap();

    let (_, _, headers, _) = fake.last_call().unwrap();
    let token = UsernameToken::parse(headers["x-wsse"].to_str().unwrap()).unwrap();
    assert_eq!(token.username, "provider_admin");
    assert!(token.verify("provider_key").unwrap());
}

#[tokio::test]
async fn test_load_auth_from_env() {
    let fake = FakeHttpSend::new();
    let ctx = Context::new()
        .with_http_send(fake.clone())
        .with_env(StaticEnv::default());
    let mut client = Client::new(ctx, TEST_URL).unwrap();

    let err = client
        .load_auth(&marello::wsse::DefaultCredentialProvider::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);

    let ctx = Context::new()
        .with_http_send(fake.clone())
        .with_env(StaticEnv {
            envs: HashMap::from([
                (marello::MARELLO_API_URL.to_string(), TEST_URL.to_string()),
                (
                    marello::wsse::MARELLO_USERNAME.to_string(),
                    "env_admin".to_string(),
                ),
                (
                    marello::wsse::MARELLO_API_KEY.to_string(),
                    "env_key".to_string(),
                ),
            ]),
        });
    let config = Config::new().from_env(&ctx);
    let mut client = Client::with_config(ctx, config).unwrap();
    client
        .load_auth(&marello::wsse::DefaultCredentialProvider::new())
        .await
        .unwrap();

    assert!(client.ping_instance().await.unwrap());
    let (_, url, _, _) = fake.last_call().unwrap();
    assert_eq!(url, "http://demo.marello.com/api/rest/latest/users");
}

#[tokio::test]
async fn test_unconfigured_transport_is_captured() {
    let mut client = Client::new(Context::new(), TEST_URL).unwrap();
    client
        .set_auth([("username", USERNAME), ("api_key", PASSWORD)])
        .unwrap();

    let result = client.get("/users", &[("page", "1")]).await.unwrap();
    assert!(result.has_error());
    assert!(result
        .error_message()
        .unwrap()
        .contains("no HTTP client configured"));
    assert!(!client.ping_instance().await.unwrap());
}

#[test]
fn test_config_from_os_env() {
    temp_env::with_vars(
        vec![
            (marello::MARELLO_API_URL, Some("http://os.marello.com/")),
            (marello::MARELLO_API_VERSION, Some("v2")),
        ],
        || {
            let ctx = Context::new().with_env(OsEnv);
            let client = Client::with_config(ctx.clone(), Config::new().from_env(&ctx)).unwrap();
            assert_eq!(client.api_url(), "http://os.marello.com/api/rest/v2");
        },
    );

    temp_env::with_vars_unset(
        vec![marello::MARELLO_API_URL, marello::MARELLO_API_VERSION],
        || {
            let ctx = Context::new().with_env(OsEnv);
            let err = Client::with_config(ctx.clone(), Config::new().from_env(&ctx)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        },
    );
}
