#![allow(dead_code)]

use fmp_client::{Config, FmpClient};
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test_key";

/// Start a mock server and a client pointed at it
pub async fn setup() -> (MockServer, FmpClient) {
  let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();

  let server = MockServer::start().await;
  let config = Config::default_with_key(API_KEY.to_string()).with_base_url(server.uri());
  let client = FmpClient::new(config).expect("Failed to create client");
  (server, client)
}

/// Answer exactly one authenticated GET on `route` with `body`
pub async fn mount_json(server: &MockServer, route: &str, body: &str) {
  Mock::given(method("GET"))
    .and(path(route))
    .and(query_param("apikey", API_KEY))
    .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
    .expect(1)
    .mount(server)
    .await;
}

/// Query string of the last request the server saw
pub async fn last_query(server: &MockServer) -> HashMap<String, String> {
  let requests = server.received_requests().await.expect("request recording is enabled");
  let request = requests.last().expect("no request received");
  request.url.query_pairs().into_owned().collect()
}
