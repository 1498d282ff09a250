//! Request parameters and their wire encodings.
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Display;
use std::iter::FromIterator;

use url::form_urlencoded;

/// How [`Params`] are serialized onto the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamEncoding {
    /// `application/x-www-form-urlencoded`; keys and values are escaped.
    Form,
    /// Unescaped `key=value&` pairs, each followed by `&`.
    ///
    /// Values containing `&`, `=` or non-ASCII characters corrupt the request.
    /// Only use this for servers that depend on the legacy format.
    Raw,
}

impl Default for ParamEncoding {
    fn default() -> Self {
        ParamEncoding::Form
    }
}

/// Named scalar parameters of an API call.
///
/// Setting a name which is already present replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> Option<String> {
        self.inner.insert(key.into(), value.to_string())
    }

    /// Builder-style variant of [`insert`](Params::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Serializes all pairs with the given encoding.
    pub fn encode(&self, encoding: ParamEncoding) -> String {
        match encoding {
            ParamEncoding::Form => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.iter())
                .finish(),
            ParamEncoding::Raw => self.iter().fold(String::new(), |mut out, (key, value)| {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('&');
                out
            }),
        }
    }
}

/// Iterator over the pairs of [`Params`], ordered by name.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
