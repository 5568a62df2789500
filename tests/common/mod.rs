//! Shared test fixtures for the barcode SDK integration tests.
//!
//! Provides [`MockApi`], a scripted stand-in for the lookup service: each
//! incoming request pops the next canned response off the script, and every
//! received query string is recorded for assertions. The server runs on an
//! OS-assigned port on a background thread with its own current-thread
//! runtime, so the SDK's blocking client can talk to it from the test thread.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use barcode_lookup_sdk::BarcodeLookupSdk;

// ---------------------------------------------------------------------------
// Scripted responses
// ---------------------------------------------------------------------------

/// One canned response in a [`MockApi`] script.
#[derive(Clone)]
pub struct Scripted {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Scripted {
    /// A 200 response with a JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type", "application/json".to_string())],
            body: body.to_string(),
        }
    }

    /// A 200 response with an XML body.
    pub fn xml(body: &str) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type", "text/xml".to_string())],
            body: body.to_string(),
        }
    }

    /// A response with an arbitrary status and raw body.
    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    /// Attach a response header.
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

// ---------------------------------------------------------------------------
// MockApi
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct ApiState {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// A scripted mock lookup service listening on a local port.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    /// Start a mock service on an OS-assigned port serving the given script.
    ///
    /// The listener is bound before this returns, so requests issued
    /// immediately afterwards queue in the accept backlog rather than racing
    /// the server thread.
    pub fn start(script: Vec<Scripted>) -> Self {
        let state = ApiState {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        listener.set_nonblocking(true).unwrap();

        let app = Router::new().route("/api", get(serve)).with_state(state);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            requests,
        }
    }

    /// Query strings of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(State(state): State<ApiState>, RawQuery(query): RawQuery) -> Response {
    state.requests.lock().unwrap().push(query.unwrap_or_default());

    let scripted = state
        .script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Scripted::error(500, "mock script exhausted"));

    let mut builder = Response::builder().status(StatusCode::from_u16(scripted.status).unwrap());
    for (name, value) in &scripted.headers {
        builder = builder.header(*name, value);
    }
    builder.body(scripted.body.into()).unwrap()
}

// ---------------------------------------------------------------------------
// SDK fixture
// ---------------------------------------------------------------------------

/// Build an SDK pointed at the mock service with a short timeout.
pub fn sdk_for(api: &MockApi) -> BarcodeLookupSdk {
    BarcodeLookupSdk::builder("test-token")
        .base_url(api.base_url.as_str())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
