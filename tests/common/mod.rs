// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use interview_client::config::ClientConfig;
use interview_client::error::ClientError;
use interview_client::store::{keys, KeyValueStore, MemoryStore};
use interview_client::ui::{Navigator, Notifier};
use interview_client::InterviewClient;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const AMY_TOKEN: &str = "tok-amy";
pub const AMY_ID: &str = "u-amy";
pub const BOB_TOKEN: &str = "tok-bob";
pub const BOB_ID: &str = "u-bob";

// ─── Fake interview API ──────────────────────────────────────────────────────

/// Counters and switches shared with the fake backend's handlers.
#[derive(Default)]
pub struct BackendState {
    pub profile_hits: AtomicUsize,
    pub logout_hits: AtomicUsize,
    pub profile_delay_ms: AtomicU64,
    pub profile_fails: AtomicBool,
    /// Answer 200 with a profile body of the wrong shape
    pub profile_malformed: AtomicBool,
    pub logout_fails: AtomicBool,
    pub last_authorization: Mutex<Option<String>>,
}

impl BackendState {
    pub fn profile_hits(&self) -> usize {
        self.profile_hits.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }

    fn record_authorization(&self, headers: &HeaderMap) -> Option<String> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        *self.last_authorization.lock().unwrap() = auth.clone();
        auth
    }
}

/// A running fake backend.
pub struct FakeBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Start the fake API on an ephemeral local port.
#[allow(dead_code)]
pub async fn start_backend() -> FakeBackend {
    let state = Arc::new(BackendState::default());

    let app = Router::new()
        .route("/h5/user/register", post(register))
        .route("/h5/user/login", post(login))
        .route("/h5/user/currentUser", get(current_user))
        .route("/h5/user/logout", get(logout))
        .route("/h5/echo-auth", get(echo_auth))
        .route("/h5/error/401", get(unauthorized).post(unauthorized))
        .route(
            "/h5/error/500",
            get(|| async { error(StatusCode::INTERNAL_SERVER_ERROR, "服务器开小差了") }),
        )
        .route(
            "/h5/error/bare",
            get(|| async { (StatusCode::BAD_GATEWAY, "bad gateway").into_response() }),
        )
        .route("/h5/garbled", get(|| async { "this is not json" }))
        .route(
            "/h5/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({"code": 10000, "message": "ok", "data": null}))
            }),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeBackend {
        base_url: format!("http://{}/", addr),
        state,
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"code": status.as_u16(), "message": message}))).into_response()
}

async fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "token expired")
}

fn ok(data: Value) -> Response {
    Json(json!({"code": 10000, "message": "操作成功", "data": data})).into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return error(StatusCode::BAD_REQUEST, "用户名已存在");
    }
    ok(Value::Null)
}

async fn login(Json(body): Json<Value>) -> Response {
    let token = match (body["username"].as_str(), body["password"].as_str()) {
        (Some("amy"), Some("secret")) => AMY_TOKEN,
        (Some("bob"), Some("secret")) => BOB_TOKEN,
        _ => return error(StatusCode::BAD_REQUEST, "用户名或密码错误"),
    };
    ok(json!({
        "token": token,
        "currentAuthority": "user",
        "status": "ok",
        "type": "account",
    }))
}

async fn current_user(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.profile_hits.fetch_add(1, Ordering::SeqCst);
    let auth = state.record_authorization(&headers);

    let delay = state.profile_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if state.profile_fails.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "profile service unavailable");
    }
    if state.profile_malformed.load(Ordering::SeqCst) {
        return Json(json!({"code": 10000, "message": "ok", "data": {"id": 5}})).into_response();
    }

    let (id, username) = match auth.as_deref() {
        Some("Bearer tok-amy") => (AMY_ID, "amy"),
        Some("Bearer tok-bob") => (BOB_ID, "bob"),
        _ => return error(StatusCode::UNAUTHORIZED, "token invalid"),
    };
    ok(json!({
        "id": id,
        "username": username,
        "name": null,
        "avatar": "http://cdn.example.com/avatar.png",
        "createdAt": "2026-01-01T00:00:00.000Z",
        "updatedAt": "2026-01-01T00:00:00.000Z",
    }))
}

async fn logout(State(state): State<Arc<BackendState>>) -> Response {
    state.logout_hits.fetch_add(1, Ordering::SeqCst);
    if state.logout_fails.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "logout failed");
    }
    ok(Value::Null)
}

async fn echo_auth(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Json<Value> {
    let auth = state.record_authorization(&headers);
    Json(json!({ "authorization": auth }))
}

// ─── UI recorders ────────────────────────────────────────────────────────────

/// UI side effect observed by the recorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Navigation, with whether a token was still stored at that moment
    Navigate { route: String, token_present: bool },
    Notify(String),
}

/// Ordered log of UI side effects.
#[derive(Default)]
pub struct UiLog {
    events: Mutex<Vec<UiEvent>>,
}

impl UiLog {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::Notify(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct RecordingNavigator {
    log: Arc<UiLog>,
    store: Arc<dyn KeyValueStore>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        let token_present = self.store.get(keys::TOKEN).unwrap().is_some();
        self.log.push(UiEvent::Navigate {
            route: route.to_string(),
            token_present,
        });
    }
}

pub struct RecordingNotifier {
    log: Arc<UiLog>,
}

impl Notifier for RecordingNotifier {
    fn notify_failure(&self, message: &str) {
        self.log.push(UiEvent::Notify(message.to_string()));
    }
}

// ─── Stores ──────────────────────────────────────────────────────────────────

/// Memory store whose reads and writes can be made to fail.
#[allow(dead_code)]
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_writes: AtomicBool,
    /// Reads of keys starting with this prefix fail
    pub fail_reads_with_prefix: Mutex<Option<String>>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        if let Some(prefix) = self.fail_reads_with_prefix.lock().unwrap().as_deref() {
            if key.starts_with(prefix) {
                return Err(ClientError::Storage(format!("read of {} failed", key)));
            }
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClientError::Storage("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClientError::Storage("disk full".to_string()));
        }
        self.inner.remove(key)
    }
}

// ─── Client builders ─────────────────────────────────────────────────────────

/// Client wired to `store` with recording UI hooks.
#[allow(dead_code)]
pub fn client_with_store(
    config: ClientConfig,
    store: Arc<dyn KeyValueStore>,
) -> (InterviewClient, Arc<UiLog>) {
    let log = Arc::new(UiLog::default());
    let navigator = Arc::new(RecordingNavigator {
        log: log.clone(),
        store: store.clone(),
    });
    let notifier = Arc::new(RecordingNotifier { log: log.clone() });

    let client = InterviewClient::new(config, store, navigator, notifier)
        .expect("Failed to build client");
    (client, log)
}

/// Client with an in-memory store pointed at `base_url`.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> (InterviewClient, Arc<UiLog>) {
    client_with_store(
        ClientConfig::test_default(base_url),
        Arc::new(MemoryStore::new()),
    )
}
