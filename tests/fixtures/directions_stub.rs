//! Minimal HTTP stub for the directions endpoint.
//!
//! Accepts a single connection, captures the request head and replies with a
//! canned response. Enough for reqwest; not a general server.

use std::sync::Mutex;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use sail_route::RouteError;
use sail_route::traits::ErrorReporter;

pub struct DirectionsStub {
    pub base_url: String,
    request: JoinHandle<String>,
}

impl DirectionsStub {
    /// Serves one response with the given status line (e.g. `"200 OK"`).
    pub async fn respond(status: &'static str, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let head = read_head(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
            head
        });

        Self {
            base_url: format!("http://{}/maps/api", addr),
            request,
        }
    }

    /// Accepts a connection and never answers.
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let head = read_head(&mut socket).await;
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            head
        });

        Self {
            base_url: format!("http://{}/maps/api", addr),
            request,
        }
    }

    /// Returns the request line and headers the client sent.
    pub async fn request_head(self) -> String {
        self.request.await.expect("stub task")
    }
}

/// A base URL on a port nobody is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/maps/api", addr)
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Records every reported error as its display string.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().expect("reporter lock").clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &RouteError) {
        self.reports
            .lock()
            .expect("reporter lock")
            .push(error.to_string());
    }
}
