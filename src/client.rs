use std::fmt::Display;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::methods::{GetPost, GetUser, GetUserPosts};
use crate::params::{ParamEncoding, Params};
use crate::request::Request;
use crate::transport::{HttpRequest, HttpTransport, Transport};

/// Endpoint of the Percolate v3 API.
pub const DEFAULT_BASE_URL: &str = "http://percolate.com/api/v3/";

/// How long a single call may take, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_PARAM: &str = "api_key";

/// Settings of a [`Client`].
#[derive(Clone, Debug)]
pub struct Config {
    base_url: String,
    timeout: Duration,
    encoding: ParamEncoding,
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            encoding: ParamEncoding::default(),
            user_agent: concat!("percolate/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Method paths are appended to this URL as they are, so a missing
    /// trailing `/` is added.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn encoding(mut self, encoding: ParamEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_encoding(&self) -> ParamEncoding {
        self.encoding
    }

    pub fn get_user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// A client of the Percolate API, authenticated by an API key.
///
/// Every call blocks until the response has been received and decoded.
/// The client holds no mutable state, so it can be shared between threads
/// as long as its transport can.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
    api_key: String,
    config: Config,
    transport: T,
}

impl Client {
    /// Creates a client talking to the default endpoint.
    ///
    /// No network activity happens here.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Client::with_config(api_key, Config::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Client::with_transport(api_key, config, transport))
    }
}

impl<T> Client<T>
where
    T: Transport,
{
    pub fn with_transport(api_key: impl Into<String>, config: Config, transport: T) -> Self {
        Client {
            api_key: api_key.into(),
            config,
            transport,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the user `user_id`.
    pub fn get_user(&self, user_id: impl Display) -> Result<Value, Error> {
        GetUser::new(user_id).send(self)
    }

    /// Fetches the post `post_id`.
    pub fn get_post(&self, post_id: impl Display) -> Result<Value, Error> {
        GetPost::new(post_id).send(self)
    }

    /// Fetches up to `limit` posts of the user `user_id`.
    pub fn get_user_posts(
        &self,
        user_id: impl Display,
        limit: impl Display,
    ) -> Result<Value, Error> {
        GetUserPosts::new(user_id, limit).send(self)
    }

    /// Calls the API method at `path`, relative to the base URL, and decodes
    /// the JSON response.
    ///
    /// The API key is added to `params`, replacing any `api_key` given by the
    /// caller. `path` is not escaped. Non-2xx statuses are errors.
    /// An empty body decodes to [`Value::Null`].
    pub fn execute_method(
        &self,
        path: &str,
        mut params: Params,
        method: Method,
    ) -> Result<Value, Error> {
        params.insert(API_KEY_PARAM, &self.api_key);
        let url = format!("{}{}", self.config.base_url, path);
        let encoded = params.encode(self.config.encoding);
        let request = HttpRequest {
            method: &method,
            url: &url,
            params: &encoded,
            params_in_query: sends_params_in_query(&method),
            timeout: self.config.timeout,
        };

        debug!("{} {}", method, url);
        let response = self.transport.send(&request).map_err(|err| {
            warn!("{} {} failed ({}): {}", method, url, err.kind(), err.message());
            err
        })?;
        if !response.is_success() {
            warn!("{} {} returned {}", method, url, response.status);
            return Err(Error::from_status(response.status, url));
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|err| {
            warn!("{} {} returned malformed JSON: {}", method, url, err);
            Error::decode(err, url)
        })
    }

    /// Same as [`execute_method`](Client::execute_method), but decodes the
    /// response into `D`.
    pub fn execute_as<D>(&self, path: &str, params: Params, method: Method) -> Result<D, Error>
    where
        D: DeserializeOwned,
    {
        let value = self.execute_method(path, params, method)?;
        serde_json::from_value(value)
            .map_err(|err| Error::decode(err, format!("{}{}", self.config.base_url, path)))
    }
}

fn sends_params_in_query(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD || *method == Method::DELETE
}
