use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::Router;
use serde_json::{json, Value};

/// One request as seen by the mock exchange.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn body_utf8(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone)]
enum CannedBody {
    Json(Value),
    Raw(Vec<u8>),
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, CannedBody)>>>,
}

/// Handle to a running mock exchange server
///
/// Records every inbound request and answers with queued canned
/// responses, so client tests can assert on the exact bytes that went
/// over the wire. Responses carry a configurable HTTP status and either
/// a JSON payload or arbitrary raw bytes; when the queue is empty the
/// server answers `200 {}`.
pub struct MockExchange {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, CannedBody)>>>,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl MockExchange {
    /// Start a mock exchange on a random available port.
    ///
    /// The server runs in the background and will shutdown when dropped.
    pub async fn start() -> anyhow::Result<Self> {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind mock exchange: {}", e))?;
        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock exchange failed to start");
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            requests: state.requests,
            responses: state.responses,
            _shutdown_tx: shutdown_tx,
        })
    }

    /// Queue the next response. Responses are served in FIFO order.
    pub fn enqueue_response(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).expect("invalid status code");
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push_back((status, CannedBody::Json(body)));
    }

    /// Queue a response with arbitrary body bytes, for exercising
    /// clients against payloads that are not valid JSON.
    pub fn enqueue_raw(&self, status: u16, body: impl Into<Vec<u8>>) {
        let status = StatusCode::from_u16(status).expect("invalid status code");
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push_back((status, CannedBody::Raw(body.into())));
    }

    /// Everything received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }
}

async fn record_and_respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_ascii_lowercase(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: body.to_vec(),
    };
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(recorded);

    let (status, payload) = state
        .responses
        .lock()
        .expect("responses lock poisoned")
        .pop_front()
        .unwrap_or((StatusCode::OK, CannedBody::Json(json!({}))));

    match payload {
        CannedBody::Json(value) => (status, Json(value)).into_response(),
        CannedBody::Raw(bytes) => (status, bytes).into_response(),
    }
}
