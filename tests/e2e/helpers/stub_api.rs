use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the stub returns for the next synthesis call.
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// Success envelope carrying this base64 payload as inline audio data.
    Audio(String),
    /// Gemini error envelope with this HTTP status and message.
    Error(u16, String),
    /// A 200 whose candidate carries no audio part.
    Empty,
}

/// One request the stub saw, decoded for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub uri: String,
    pub api_key: Option<String>,
    pub body: Value,
}

/// In-process HTTP server speaking the Gemini generateContent wire format,
/// so the real reqwest-based repository can be exercised against localhost.
pub struct StubSpeechApi {
    addr: SocketAddr,
    state: Arc<Mutex<StubState>>,
    server: JoinHandle<()>,
}

struct StubState {
    response: StubResponse,
    requests: Vec<RecordedRequest>,
}

impl StubSpeechApi {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Failed to get stub addr");

        let state = Arc::new(Mutex::new(StubState {
            response: StubResponse::Audio(super::fixtures::pcm_payload(2400)),
            requests: Vec::new(),
        }));

        let accept_state = state.clone();
        let server = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let connection_state = accept_state.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |request| {
                        handle_request(request, connection_state.clone())
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            addr,
            state,
            server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond_with(&self, response: StubResponse) {
        self.state.lock().unwrap().response = response;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Drop for StubSpeechApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_request(
    request: Request<Incoming>,
    state: Arc<Mutex<StubState>>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let uri = request.uri().to_string();
    let api_key = request
        .headers()
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let bytes = request.into_body().collect().await?.to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    let scripted = {
        let mut state = state.lock().unwrap();
        state.requests.push(RecordedRequest { uri, api_key, body });
        state.response.clone()
    };

    let (status, payload) = match scripted {
        StubResponse::Audio(data) => (
            StatusCode::OK,
            json!({
                "candidates": [{
                    "content": {
                        "parts": [{
                            "inlineData": {
                                "mimeType": "audio/L16;codec=pcm;rate=24000",
                                "data": data,
                            }
                        }]
                    }
                }]
            }),
        ),
        StubResponse::Error(code, message) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            json!({
                "error": { "code": code, "message": message, "status": "INTERNAL" }
            }),
        ),
        StubResponse::Empty => (
            StatusCode::OK,
            json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
        ),
    };

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(payload.to_string())))
        .expect("Failed to build stub response");
    Ok(response)
}
