use percolate::{Client, Method, Params};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{blocking, config, API_KEY};

#[tokio::test]
async fn get_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/42"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "name": "Ada"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let user = blocking(move || {
        let client = Client::with_config(API_KEY, config)?;
        client.get_user(42)
    })
    .await
    .unwrap();

    assert_eq!(user, json!({"id": 42, "name": "Ada"}));
}

#[tokio::test]
async fn get_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/posts/7"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let post = blocking(move || Client::with_config(API_KEY, config)?.get_post(7))
        .await
        .unwrap();

    assert_eq!(post["id"], 7);
}

#[tokio::test]
async fn get_user_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/42/posts"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let posts = blocking(move || Client::with_config(API_KEY, config)?.get_user_posts(42, 5))
        .await
        .unwrap();

    assert_eq!(posts.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn caller_api_key_is_replaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/1/posts"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    blocking(move || {
        let params = Params::new().with("api_key", "forged").with("limit", 1);
        Client::with_config(API_KEY, config)?.execute_method("users/1/posts", params, Method::GET)
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn query_values_are_escaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/search"))
        .and(query_param("q", "tom & jerry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    blocking(move || {
        let params = Params::new().with("q", "tom & jerry");
        Client::with_config(API_KEY, config)?.execute_method("search", params, Method::GET)
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn post_sends_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/posts"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("api_key=secret-key"))
        .and(body_string_contains("title=Hello"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let created = blocking(move || {
        let params = Params::new().with("title", "Hello");
        Client::with_config(API_KEY, config)?.execute_method("posts", params, Method::POST)
    })
    .await
    .unwrap();

    assert_eq!(created, json!({"id": 3}));
}

#[tokio::test]
async fn sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/1"))
        .and(header("user-agent", "percolate-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server).user_agent("percolate-test");
    blocking(move || Client::with_config(API_KEY, config)?.get_user(1))
        .await
        .unwrap();
}
