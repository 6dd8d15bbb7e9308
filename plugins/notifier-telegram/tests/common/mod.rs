//! Local stand-in for the Bot API.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TOKEN: &str = "123456789:ABCdefGHIjklMNOpqrsTUVwxyz123456789";

/// A request received by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub body: Value,
}

/// How the fake server answers every request.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Hang,
}

impl Reply {
    pub fn ok() -> Self {
        Self::Json(StatusCode::OK, json!({"ok": true, "result": {"message_id": 1}}))
    }

    pub fn rejected(code: u16, description: &str) -> Self {
        Self::Json(
            StatusCode::from_u16(code).unwrap(),
            json!({"ok": false, "error_code": code, "description": description}),
        )
    }
}

#[derive(Clone)]
struct AppState {
    reply: Reply,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakeBotApi {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBotApi {
    pub async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = AppState {
            reply,
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match state.reply {
        Reply::Json(status, value) => (status, Json(value)).into_response(),
        Reply::Text(status, text) => (status, text).into_response(),
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            StatusCode::OK.into_response()
        }
    }
}

/// Returns an address nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
