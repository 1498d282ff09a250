use crate::params::{ParamEncoding, Params};

#[test]
fn last_write_wins() {
    let mut params = Params::new();
    assert_eq!(params.insert("limit", 5), None);
    assert_eq!(params.insert("limit", 10), Some("5".to_owned()));
    assert_eq!(params.get("limit"), Some("10"));
    assert_eq!(params.len(), 1);
}

#[test]
fn form_encoding() {
    let params = Params::new().with("limit", 5).with("api_key", "abc");
    let encoded = params.encode(ParamEncoding::Form);

    assert!(encoded.contains("limit=5"));
    assert!(encoded.contains("api_key=abc"));
    assert!(encoded.contains('&'));
    assert!(!encoded.ends_with('&'));
}

#[test]
fn form_encoding_escapes() {
    let params = Params::new().with("q", "tom & jerry=friends").with("name", "Zoë");
    assert_eq!(
        params.encode(ParamEncoding::Form),
        "name=Zo%C3%AB&q=tom+%26+jerry%3Dfriends"
    );
}

#[test]
fn raw_encoding() {
    let params = Params::new().with("limit", 5).with("api_key", "abc");
    let encoded = params.encode(ParamEncoding::Raw);

    assert!(encoded.contains("limit=5&"));
    assert!(encoded.contains("api_key=abc&"));
    assert!(encoded.ends_with('&'));
}

#[test]
fn raw_encoding_does_not_escape() {
    let params = Params::new().with("q", "a&b");
    assert_eq!(params.encode(ParamEncoding::Raw), "q=a&b&");
}

#[test]
fn empty() {
    let params = Params::new();
    assert!(params.is_empty());
    assert_eq!(params.encode(ParamEncoding::Form), "");
    assert_eq!(params.encode(ParamEncoding::Raw), "");
}

#[test]
fn collect_and_extend() {
    let mut params: Params = vec![("a", 1), ("b", 2)].into_iter().collect();
    params.extend(vec![("b", 3), ("c", 4)]);

    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "3"), ("c", "4")]);
    assert!(params.contains_key("c"));
    assert_eq!(params.remove("c"), Some("4".to_owned()));
    assert!(!params.contains_key("c"));
}
