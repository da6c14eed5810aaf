//! Shared fixtures: a deterministic PDF engine and a mock
//! summarization service.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use ratatui_image::picker::Picker;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use sumview::config::ServiceConfig;
use sumview::document::{DecodeError, PageRaster, PageSource, PdfEngine};
use sumview::summarize::SummarizeClient;
use sumview::ui::app::App;
use sumview::ui::events::AppEvent;

// ---- fake PDF engine --------------------------------------------------

/// Engine with a fixed page count; rasters are solid buffers sized by
/// the requested scale.
pub struct FakePdfEngine {
    pub page_count: u16,
    pub fail_open: bool,
}

impl FakePdfEngine {
    pub fn with_pages(page_count: u16) -> Self {
        Self {
            page_count,
            fail_open: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            page_count: 0,
            fail_open: true,
        }
    }
}

impl PdfEngine for FakePdfEngine {
    fn open(&self, _bytes: &[u8]) -> Result<Box<dyn PageSource>, DecodeError> {
        if self.fail_open {
            return Err(DecodeError::Open("not a PDF".to_string()));
        }
        Ok(Box::new(FakeSource {
            page_count: self.page_count,
        }))
    }
}

struct FakeSource {
    page_count: u16,
}

impl PageSource for FakeSource {
    fn page_count(&self) -> u16 {
        self.page_count
    }

    fn rasterize(&self, page: u16, scale: f32) -> Result<PageRaster, DecodeError> {
        if page == 0 || page > self.page_count {
            return Err(DecodeError::Render {
                page,
                message: "page out of range".to_string(),
            });
        }
        let width = (40.0 * scale) as u32;
        let height = (60.0 * scale) as u32;
        Ok(PageRaster {
            width,
            height,
            pixels: vec![0xff; (width * height * 4) as usize],
        })
    }
}

// ---- session harness --------------------------------------------------

/// An app wired to a fake engine and a manual event channel. Tests
/// drive it by pumping the receiver through `handle_event`.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub sender: Sender<AppEvent>,
    pub runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new(engine: Arc<dyn PdfEngine>, service: ServiceConfig) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        let client = SummarizeClient::new(service, runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();
        let app = App::new(engine, client, tx.clone(), Picker::from_fontsize((8, 16)));
        Self {
            app,
            events: rx,
            sender: tx,
            runtime,
        }
    }

    /// Like `new`, but also starts a mock summarization service on
    /// the harness runtime and points the client at it. Set the API
    /// key variable before calling.
    pub fn with_mock(engine: Arc<dyn PdfEngine>, api_key_env: &str) -> (Self, MockService) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        let mock = runtime.block_on(MockService::start());
        let client = SummarizeClient::new(mock.service_config(api_key_env), runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();
        let app = App::new(engine, client, tx.clone(), Picker::from_fontsize((8, 16)));
        (
            Self {
                app,
                events: rx,
                sender: tx,
                runtime,
            },
            mock,
        )
    }

    /// Receive one event (two-second deadline) and apply it.
    pub fn pump_one(&mut self) {
        let event = self
            .events
            .recv_timeout(Duration::from_secs(2))
            .expect("expected an event");
        self.app.handle_event(event);
    }

    /// Apply events until the channel stays quiet for `quiet`.
    pub fn pump_until_quiet(&mut self, quiet: Duration) {
        while let Ok(event) = self.events.recv_timeout(quiet) {
            self.app.handle_event(event);
        }
    }
}

// ---- mock summarization service ---------------------------------------

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn summary(text: &str) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "response": text }).to_string(),
            delay_ms: 0,
        }
    }

    pub fn empty_success() -> Self {
        Self {
            status: 200,
            body: "{}".to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, detail: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "detail": detail }).to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: String,
    pub api_key: Option<String>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockService {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockService {
    /// Start the service on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let router = Router::new()
            .route("/{*path}", any(handle))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Service settings pointing at this mock. The API key variable
    /// name is per-test so parallel tests do not clash on env state.
    pub fn service_config(&self, api_key_env: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: self.base_url(),
            api_key_env: api_key_env.to_string(),
            ..ServiceConfig::default()
        }
    }

    pub async fn push(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn hit_count(&self) -> usize {
        self.state.requests.lock().await.len()
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response {
    let captured = CapturedRequest {
        path: request.uri().path().to_string(),
        query: request.uri().query().unwrap_or("").to_string(),
        api_key: request
            .headers()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    state.requests.lock().await.push(captured);

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::summary("default"));

    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .expect("response")
}
