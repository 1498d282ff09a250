use std::net::TcpListener;
use std::time::Duration;

use percolate::{Client, Config, ErrorKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{blocking, config, API_KEY};

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind temp port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

#[tokio::test]
async fn server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let config = config(&server);
    let err = blocking(move || Client::with_config(API_KEY, config)?.get_user(1))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Status(500));
    assert_eq!(err.code(), 22);
    assert!(!err.message().is_empty());
    assert_eq!(err.url(), format!("{}/api/v3/users/1", server.uri()));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn unknown_route_is_an_error() {
    let server = MockServer::start().await;

    let config = config(&server);
    let err = blocking(move || Client::with_config(API_KEY, config)?.get_post(99))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.url(), format!("{}/api/v3/posts/99", server.uri()));
}

#[tokio::test]
async fn malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let config = config(&server);
    let err = blocking(move || Client::with_config(API_KEY, config)?.get_user(1))
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.code(), 0);
}

#[tokio::test]
async fn timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = config(&server).timeout(Duration::from_millis(200));
    let err = blocking(move || Client::with_config(API_KEY, config)?.get_user(1))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.code(), 28);
    assert_eq!(err.url(), format!("{}/api/v3/users/1", server.uri()));
    assert!(!err.to_string().contains(API_KEY));
}

#[test]
fn connection_refused() {
    let _ = env_logger::builder().is_test(true).try_init();
    let base_url = format!("http://127.0.0.1:{}/api/v3/", free_port());
    let client = Client::with_config(API_KEY, Config::new().base_url(&*base_url)).unwrap();

    for (result, path) in vec![
        (client.get_user(1), "users/1"),
        (client.get_post(2), "posts/2"),
        (client.get_user_posts(3, 4), "users/3/posts"),
    ] {
        let err = result.unwrap_err();
        assert!(err.is_connect(), "{:?}", err);
        assert_eq!(err.code(), 7);
        assert!(!err.message().is_empty());
        assert_eq!(err.url(), format!("{}{}", base_url, path));
        assert!(!err.to_string().contains(API_KEY));
    }
}
