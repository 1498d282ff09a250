mod methods;
mod params;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::Error;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{Client, Config, Method};

/// An owned copy of what the client has handed to the transport.
#[derive(Clone, Debug)]
pub(crate) struct Sent {
    pub method: Method,
    pub url: String,
    pub params: String,
    pub params_in_query: bool,
    pub timeout: Duration,
}

impl Sent {
    /// Decoded parameter pairs, whatever their order on the wire.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = url::form_urlencoded::parse(self.params.as_bytes())
            .into_owned()
            .collect();
        pairs.sort();
        pairs
    }
}

pub(crate) struct MockTransport {
    called: AtomicUsize,
    sent: Mutex<Vec<Sent>>,
    respond: Box<dyn Fn(&HttpRequest<'_>) -> Result<HttpResponse, Error> + Send + Sync>,
}

impl MockTransport {
    pub fn new(
        respond: impl Fn(&HttpRequest<'_>) -> Result<HttpResponse, Error> + Send + Sync + 'static,
    ) -> Self {
        MockTransport {
            called: Default::default(),
            sent: Default::default(),
            respond: Box::new(respond),
        }
    }

    /// Answers every request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Self {
        let body = body.to_owned();
        MockTransport::new(move |_| {
            Ok(HttpResponse {
                status,
                body: body.clone(),
            })
        })
    }

    pub fn called(&self) -> usize {
        self.called.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Sent {
        self.sent.lock().unwrap().last().cloned().expect("nothing sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, Error> {
        self.called.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(Sent {
            method: request.method.clone(),
            url: request.url.to_owned(),
            params: request.params.to_owned(),
            params_in_query: request.params_in_query,
            timeout: request.timeout,
        });
        (self.respond)(request)
    }
}

pub(crate) const BASE_URL: &str = "http://percolate.test/api/v3/";

pub(crate) fn client(transport: MockTransport) -> Client<MockTransport> {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::with_transport("abc", Config::new().base_url(BASE_URL), transport)
}
