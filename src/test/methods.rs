use std::rc::Rc;
use std::sync::Arc;

use serde_json::{json, Value};

use super::{client, MockTransport, BASE_URL};
use crate::methods::{GetPost, GetUser, GetUserPosts, MethodCall};
use crate::prelude::*;
use crate::{Client, Config, Error, Method, Params};

#[test]
fn paths_and_params() {
    let user = GetUser::new(42);
    assert_eq!(user.verb(), Method::GET);
    assert_eq!(user.path(), "users/42");
    assert!(user.params().is_empty());

    let post = GetPost::new("p-1");
    assert_eq!(post.path(), "posts/p-1");
    assert!(post.params().is_empty());

    let posts = GetUserPosts::new(42, 20);
    assert_eq!(posts.path(), "users/42/posts");
    assert_eq!(posts.params(), Params::new().with("limit", 20));
    assert_eq!(posts.user_id, "42");
    assert_eq!(posts.limit, "20");
}

#[test]
fn send_through_client() {
    let client = client(MockTransport::replying(200, r#"{"id": 42, "name": "Ada"}"#));
    let req = GetUser::new(42);

    assert_eq!(req.send(&client).unwrap(), json!({"id": 42, "name": "Ada"}));
    assert_eq!(client.transport().last().url, format!("{}users/42", BASE_URL));
}

#[test]
fn send_through_pointers() {
    let client = client(MockTransport::replying(200, "[]"));
    let req = GetUserPosts::new(1, 3);

    (&req).send(&client).unwrap();
    Box::new(req.clone()).send(&client).unwrap();
    Rc::new(req.clone()).send(&client).unwrap();
    Arc::new(req).send(&client).unwrap();
    assert_eq!(client.transport().called(), 4);
}

#[test]
fn boxed_requests_of_mixed_types() {
    type DynRequest<'a> = dyn Request<&'a Client<MockTransport>, Ok = Value, Error = Error>;

    let client = client(MockTransport::replying(200, "{}"));
    let reqs: Vec<Box<DynRequest<'_>>> = vec![
        Box::new(GetUser::new(1)),
        Box::new(GetPost::new(2)),
        Box::new(GetUserPosts::new(3, 4)),
    ];

    for req in &reqs {
        req.send(&client).unwrap();
    }
    assert_eq!(client.transport().called(), 3);
}

#[test]
fn method_call() {
    let client = client(MockTransport::replying(200, r#"{"deleted": true}"#));
    let req = MethodCall::new("posts/9")
        .with_verb(Method::DELETE)
        .with_param("reason", "spam")
        .with_params(Params::new().with("notify", false));

    assert_eq!(req.send(&client).unwrap(), json!({"deleted": true}));
    let sent = client.transport().last();
    assert_eq!(sent.method, Method::DELETE);
    assert_eq!(sent.url, format!("{}posts/9", BASE_URL));
    assert!(sent.params_in_query);
    assert_eq!(
        sent.pairs(),
        vec![
            ("api_key".to_owned(), "abc".to_owned()),
            ("notify".to_owned(), "false".to_owned()),
            ("reason".to_owned(), "spam".to_owned()),
        ]
    );
}

#[test]
fn transport_through_arc() {
    let transport = Arc::new(MockTransport::replying(200, "{}"));
    let client = Client::with_transport(
        "abc",
        Config::new().base_url(BASE_URL),
        Arc::clone(&transport),
    );
    client.get_post(1).unwrap();
    client.get_post(2).unwrap();

    assert_eq!(transport.called(), 2);
}
