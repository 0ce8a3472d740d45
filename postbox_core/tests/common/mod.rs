#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "test-token";

/// LPOP on this key answers with a number instead of a string or null
pub const ODD_REPLY_KEY: &str = "odd_reply";

type Lists = Arc<Mutex<HashMap<String, VecDeque<String>>>>;

/// Spawn an in-process server that speaks enough of the Upstash REST protocol for the tests
pub async fn spawn_fake_upstash() -> String {
    let lists: Lists = Arc::default();
    let app = Router::new().route("/", post(command)).with_state(lists);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake store");
    let addr = listener.local_addr().expect("Fake store has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake store crashed");
    });
    format!("http://{}", addr)
}

async fn command(
    State(lists): State<Lists>,
    headers: HeaderMap,
    Json(args): Json<Vec<String>>,
) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {}", TOKEN);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "WRONGPASS invalid or missing auth token"})),
        );
    }

    let mut lists = lists.lock().unwrap();
    let words: Vec<&str> = args.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["PING"] => (StatusCode::OK, Json(json!({"result": "PONG"}))),
        ["RPUSH", key, value] => {
            let list = lists.entry(key.to_string()).or_default();
            list.push_back(value.to_string());
            (StatusCode::OK, Json(json!({"result": list.len()})))
        }
        ["LPOP", ODD_REPLY_KEY] => (StatusCode::OK, Json(json!({"result": 7}))),
        ["LPOP", key] => {
            let entry = lists.get_mut(*key).and_then(|list| list.pop_front());
            (StatusCode::OK, Json(json!({"result": entry})))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("ERR unknown command '{}'", args.join(" "))})),
        ),
    }
}

/// Collects everything the fmt subscriber writes while installed on the current thread
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self, level: &str) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .filter(|line| line.contains(level))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
