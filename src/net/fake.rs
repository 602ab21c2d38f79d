//! Scripted transport for unit tests: queued responses in, recorded
//! requests out.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::client::{ApiError, ApiRequest, ApiResponse, HttpClient};

#[derive(Default)]
struct Inner {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

/// Fake [`HttpClient`] with a FIFO script. Clones share the same script and
/// request log, so tests keep a handle after moving a clone into a client.
#[derive(Clone, Default)]
pub struct FakeHttp {
    inner: Rc<Inner>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: &str) {
        self.inner
            .responses
            .borrow_mut()
            .push_back(Ok(ApiResponse {
                status,
                body: body.to_owned(),
            }));
    }

    /// Queue a transport failure.
    pub fn push_network_error(&self, message: &str) {
        self.inner
            .responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_owned())));
    }

    /// All requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.requests.borrow().clone()
    }

    /// The single request a one-call test expects.
    pub fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("request")
    }
}

impl HttpClient for FakeHttp {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.inner.requests.borrow_mut().push(request);
        self.inner
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}
