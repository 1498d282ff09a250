//! A client of the [Percolate] v3 REST API.
//!
//! Every API method is a request value (see [`methods`]) which is sent
//! through a [`Client`]. The client adds the API key, performs one blocking
//! HTTP exchange, and decodes the JSON body into a [`serde_json::Value`].
//! Any failure, including a non-2xx status, is reported as an [`Error`].
//!
//! [Percolate]: https://percolate.com/
//!
//! # Examples
//!
//! ```no_run
//! use percolate::Client;
//!
//! let client = Client::new("my-api-key")?;
//! let user = client.get_user(42)?;
//! println!("{}", user["name"]);
//!
//! let posts = client.get_user_posts(42, 5)?;
//! for post in posts.as_array().into_iter().flatten() {
//!     println!("{}", post["id"]);
//! }
//! # Ok::<_, percolate::Error>(())
//! ```
#![deny(rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod methods;
pub mod params;
pub mod prelude;
pub mod request;
pub mod transport;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use crate::{
    client::{Client, Config},
    error::{Error, ErrorKind},
    params::{ParamEncoding, Params},
    request::{BaseRequest, Request},
    transport::{HttpTransport, Transport},
};

pub use reqwest::Method;
