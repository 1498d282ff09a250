//! The HTTP layer underneath [`Client`](crate::Client).
use std::sync::Arc;
use std::time::Duration;

use log::trace;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::error::{Error, ErrorKind};

/// A fully prepared HTTP exchange, handed to a [`Transport`].
#[derive(Clone, Debug)]
pub struct HttpRequest<'a> {
    pub method: &'a Method,
    /// Request URL, without the query string.
    pub url: &'a str,
    /// Encoded parameters, including the API key.
    pub params: &'a str,
    /// Whether `params` travel as the query string or as a form body.
    pub params_in_query: bool,
    pub timeout: Duration,
}

impl HttpRequest<'_> {
    /// The URL including the query string, if parameters travel there.
    pub fn full_url(&self) -> String {
        if self.params_in_query && !self.params.is_empty() {
            format!("{}?{}", self.url, self.params)
        } else {
            self.url.to_owned()
        }
    }
}

/// Status and body of a completed HTTP exchange, whatever the status was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP exchanges on behalf of the client.
///
/// Implementations report only failures to complete the exchange; the client
/// itself turns non-2xx statuses into errors.
pub trait Transport {
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error> {
        (**self).send(request)
    }
}

impl<T> Transport for Box<T>
where
    T: Transport + ?Sized,
{
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error> {
        (**self).send(request)
    }
}

impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error> {
        (**self).send(request)
    }
}

/// [`Transport`] over a blocking [`reqwest`] client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|err| {
                Error::new(ErrorKind::Request, err.to_string(), String::new()).with_source(err)
            })?;
        Ok(HttpTransport { inner })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error> {
        let mut builder = self
            .inner
            .request(request.method.clone(), request.full_url())
            .timeout(request.timeout);
        if !request.params_in_query {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.params.to_owned());
        }

        let response = builder
            .send()
            .map_err(|err| Error::from_reqwest(err, request.url))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| Error::from_reqwest(err, request.url))?;
        trace!("{} {}: {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
