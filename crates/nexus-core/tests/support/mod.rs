//! Shared test transport: records every request and replays canned responses.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use nexus_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub struct RecordingHttpClient {
    calls: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
}

impl RecordingHttpClient {
    pub fn with_responses(
        responses: impl IntoIterator<Item = Result<HttpResponse, HttpError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().collect()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.calls.lock().unwrap().push(request.url.clone());
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            next.unwrap_or_else(|| {
                Err(HttpError::new("recording client ran out of canned responses"))
            })
        })
    }
}
