//! Requests of the Percolate API methods.
//!
//! Every request here can be sent through a [`Client`] with
//! [`Request::send`], and decodes to a raw JSON [`Value`].
//!
//! ```no_run
//! use percolate::prelude::*;
//! use percolate::{methods::GetUserPosts, Client};
//!
//! let client = Client::new("my-api-key")?;
//! let req = GetUserPosts::new(42, 10);
//! let posts = req.send(&client)?;
//! println!("{}", posts);
//! # Ok::<_, percolate::Error>(())
//! ```
use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::params::Params;
use crate::request::{BaseRequest, Request};
use crate::transport::Transport;

/// An API method, as a verb, a path relative to the base URL, and parameters.
pub trait ApiMethod {
    fn verb(&self) -> Method;

    /// Path of the method. Not escaped.
    fn path(&self) -> String;

    /// Parameters of the method, without the API key.
    fn params(&self) -> Params;
}

macro_rules! impl_request {
    ($name:ident) => {
        impl BaseRequest for $name {
            type Ok = Value;
            type Error = Error;
        }

        impl<T> Request<&Client<T>> for $name
        where
            T: Transport,
        {
            fn send(&self, client: &Client<T>) -> Result<Value, Error> {
                client.execute_method(&self.path(), self.params(), self.verb())
            }
        }
    };
}

macro_rules! api_methods {
    {
        $(
            $(#[$attr:meta])*
            $verb:ident $path:literal => $name:ident { $($field:ident),* $(; $($param:ident),*)? }
        )*
    } => {
        $(
            $(#[$attr])*
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct $name {
                $(pub $field: String,)*
                $($(pub $param: String,)*)?
            }

            impl $name {
                pub fn new($($field: impl Display,)* $($($param: impl Display,)*)?) -> Self {
                    $name {
                        $($field: $field.to_string(),)*
                        $($($param: $param.to_string(),)*)?
                    }
                }
            }

            impl ApiMethod for $name {
                fn verb(&self) -> Method {
                    Method::$verb
                }

                fn path(&self) -> String {
                    format!($path, $($field = self.$field),*)
                }

                fn params(&self) -> Params {
                    #[allow(unused_mut)]
                    let mut params = Params::new();
                    $($(params.insert(stringify!($param), &self.$param);)*)?
                    params
                }
            }

            impl_request!($name);
        )*
    };
}

api_methods! {
    /// `GET users/{user_id}`
    GET "users/{user_id}" => GetUser { user_id }

    /// `GET posts/{post_id}`
    GET "posts/{post_id}" => GetPost { post_id }

    /// `GET users/{user_id}/posts`, with at most `limit` posts.
    ///
    /// `limit` is passed through as given.
    GET "users/{user_id}/posts" => GetUserPosts { user_id; limit }
}

/// An arbitrary API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodCall {
    path: String,
    params: Params,
    verb: Method,
}

impl MethodCall {
    /// A `GET` call of `path` without parameters.
    pub fn new(path: impl Into<String>) -> Self {
        MethodCall {
            path: path.into(),
            params: Params::new(),
            verb: Method::GET,
        }
    }

    pub fn with_verb(mut self, verb: Method) -> Self {
        self.verb = verb;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params.extend(&params);
        self
    }
}

impl ApiMethod for MethodCall {
    fn verb(&self) -> Method {
        self.verb.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn params(&self) -> Params {
        self.params.clone()
    }
}

impl_request!(MethodCall);
