//! Common test utilities for cypherlink tests.
//!
//! # Stub HTTP server
//!
//! [`spawn_stub_server`] binds an ephemeral port on 127.0.0.1 and answers
//! each accepted connection with the next canned response, recording the raw
//! request. Used to drive the HTTP transport without a database.
//!
//! # Live server configuration
//!
//! Integration tests against a real Neo4j read the following variables:
//!
//! | Environment Variable | Default Value           |
//! |----------------------|-------------------------|
//! | `NEO4J_HTTP_URL`     | "http://localhost:7474" |
//! | `NEO4J_BOLT_URL`     | "bolt://localhost:7687" |
//! | `NEO4J_USER`         | "neo4j"                 |
//! | `NEO4J_PASSWORD`     | "password"              |
//!
//! ```bash
//! docker run -d --name neo4j-test -p 7474:7474 -p 7687:7687 \
//!   -e NEO4J_AUTH=neo4j/password neo4j:5
//! cargo test --test integration_tests -- --ignored
//! ```

#![allow(dead_code)]

use cypherlink::Credentials;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ============================================================================
// Stub HTTP server
// ============================================================================

/// Canned response returned by the stub server.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// Request as received by the stub server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    /// Header value, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Start a stub server answering one connection per response.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and a handle resolving
/// to the captured requests once every response has been served.
pub async fn spawn_stub_server(
    responses: Vec<StubResponse>,
) -> (String, JoinHandle<Vec<CapturedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let port = listener.local_addr().expect("No local address").port();

    let handle = tokio::spawn(async move {
        let mut captured = Vec::new();
        for response in responses {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let request = read_request(&mut socket).await;

            let reply = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                response.status,
                response.body.len(),
                response.body
            );
            socket
                .write_all(reply.as_bytes())
                .await
                .expect("Failed to write response");
            let _ = socket.shutdown().await;

            captured.push(request);
        }
        captured
    });

    (format!("http://127.0.0.1:{}", port), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = socket.read(&mut chunk).await.expect("Failed to read request");
        assert!(n > 0, "Connection closed before request head was complete");
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_head_end(&buffer) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = head_end + 4;
    while buffer.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.expect("Failed to read body");
        assert!(n > 0, "Connection closed before body was complete");
        buffer.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest {
        request_line,
        headers,
        body: String::from_utf8_lossy(&buffer[body_start..body_start + content_length])
            .into_owned(),
    }
}

fn find_head_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

/// A localhost URL on which nothing is listening.
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

// ============================================================================
// Live server configuration
// ============================================================================

pub const DEFAULT_HTTP_URL: &str = "http://localhost:7474";
pub const DEFAULT_BOLT_URL: &str = "bolt://localhost:7687";
pub const DEFAULT_USER: &str = "neo4j";
pub const DEFAULT_PASSWORD: &str = "password";

const ENV_HTTP_URL: &str = "NEO4J_HTTP_URL";
const ENV_BOLT_URL: &str = "NEO4J_BOLT_URL";
const ENV_USER: &str = "NEO4J_USER";
const ENV_PASSWORD: &str = "NEO4J_PASSWORD";

pub fn get_http_url() -> String {
    env::var(ENV_HTTP_URL).unwrap_or_else(|_| DEFAULT_HTTP_URL.to_string())
}

pub fn get_bolt_url() -> String {
    env::var(ENV_BOLT_URL).unwrap_or_else(|_| DEFAULT_BOLT_URL.to_string())
}

pub fn get_credentials() -> Credentials {
    Credentials::new(
        env::var(ENV_USER).unwrap_or_else(|_| DEFAULT_USER.to_string()),
        env::var(ENV_PASSWORD).unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
    )
}

/// Check whether something accepts TCP connections at the URL's host:port.
pub fn is_reachable(url: &str) -> bool {
    let authority = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or_default();

    let socket_addrs: Vec<_> = match authority.to_socket_addrs() {
        Ok(addrs) => addrs.collect(),
        Err(_) => return false,
    };

    socket_addrs
        .iter()
        .any(|addr| TcpStream::connect_timeout(addr, Duration::from_secs(2)).is_ok())
}

/// Skip a test if the server behind the URL is not reachable.
#[macro_export]
macro_rules! skip_if_unreachable {
    ($url:expr) => {
        if !$crate::common::is_reachable(&$url) {
            eprintln!("Skipping test: Neo4j not reachable at {}", $url);
            return;
        }
    };
}
