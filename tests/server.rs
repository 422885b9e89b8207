//! End-to-end tests against the real accept loop.
//!
//! Each test builds a throwaway asset root, binds an ephemeral port, and
//! speaks raw HTTP/1.1 over a TCP stream so the full request path is
//! exercised without mocking.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use spaserve::config::{AssetsConfig, Config, LoggingConfig, ServerConfig, ServerState};
use spaserve::server;

/// Throwaway directory under the system temp dir, removed on drop
struct TestRoot {
    dir: PathBuf,
}

impl TestRoot {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "spaserve-test-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create test root");
        Self { dir }
    }

    fn write(&self, relative: &str, bytes: &[u8]) {
        let path = self.dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(path, bytes).expect("write fixture");
    }

    fn path(&self) -> &Path {
        &self.dir
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

fn test_config(root: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        assets: AssetsConfig {
            root_dir: root.to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
            access_log_format: "common".to_string(),
            access_log_file: None,
            error_log_file: None,
        },
    }
}

/// Bind an ephemeral port and run the accept loop in the background
fn start_server(root: &Path) -> (SocketAddr, JoinHandle<()>) {
    let listener = server::create_listener("127.0.0.1:0".parse().unwrap()).expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let state = Arc::new(ServerState::new(test_config(root)));
    let handle = tokio::spawn(server::run(listener, state));
    (addr, handle)
}

struct RawResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Issue one request over a fresh connection and read the full response
async fn request(addr: SocketAddr, method: &str, path: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(req.as_bytes()).await.expect("send request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");

    parse_response(&raw)
}

fn parse_response(raw: &[u8]) -> RawResponse {
    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header/body separator");
    let head = std::str::from_utf8(&raw[..split]).expect("header utf8");
    let body = raw[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().expect("status line");
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .expect("status code")
        .parse()
        .expect("numeric status");

    let headers = lines
        .filter_map(|line| {
            line.split_once(':')
                .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        })
        .collect();

    RawResponse {
        status,
        headers,
        body,
    }
}

#[tokio::test]
async fn serves_existing_asset_with_exact_bytes() {
    let root = TestRoot::new("exact-bytes");
    root.write("index.html", b"<html>shell</html>");
    root.write("assets/app.js", b"console.log('hi');");
    root.write("assets/style.css", b"body { margin: 0 }");
    let (addr, handle) = start_server(root.path());

    let resp = request(addr, "GET", "/assets/app.js").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("application/javascript"));
    assert_eq!(resp.body, b"console.log('hi');");

    let resp = request(addr, "GET", "/assets/style.css").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("text/css"));
    assert_eq!(resp.body, b"body { margin: 0 }");

    handle.abort();
}

#[tokio::test]
async fn root_serves_entry_document() {
    let root = TestRoot::new("root-entry");
    root.write("index.html", b"<html>shell</html>");
    let (addr, handle) = start_server(root.path());

    let via_root = request(addr, "GET", "/").await;
    assert_eq!(via_root.status, 200);
    assert_eq!(via_root.header("content-type"), Some("text/html"));
    assert_eq!(via_root.body, b"<html>shell</html>");

    // Explicit path is equivalent
    let explicit = request(addr, "GET", "/index.html").await;
    assert_eq!(explicit.status, 200);
    assert_eq!(explicit.body, via_root.body);

    handle.abort();
}

#[tokio::test]
async fn unresolved_path_gets_spa_fallback() {
    let root = TestRoot::new("spa-fallback");
    root.write("index.html", b"<html>shell</html>");
    let (addr, handle) = start_server(root.path());

    // A client-side route resolves to no file, so the shell is served
    let resp = request(addr, "GET", "/settings/profile").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("text/html"));
    assert_eq!(resp.body, b"<html>shell</html>");

    handle.abort();
}

#[tokio::test]
async fn missing_entry_document_yields_404() {
    let root = TestRoot::new("no-entry");
    root.write("assets/app.js", b"console.log('hi');");
    let (addr, handle) = start_server(root.path());

    let resp = request(addr, "GET", "/does/not/exist").await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, b"File not found");

    // Existing assets are still served
    let resp = request(addr, "GET", "/assets/app.js").await;
    assert_eq!(resp.status, 200);

    handle.abort();
}

#[tokio::test]
async fn unknown_extension_served_as_octet_stream() {
    let root = TestRoot::new("octet-stream");
    root.write("index.html", b"<html>shell</html>");
    let binary = [0u8, 97, 115, 109, 255, 1, 2, 3];
    root.write("module.wasm", &binary);
    let (addr, handle) = start_server(root.path());

    let resp = request(addr, "GET", "/module.wasm").await;
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.header("content-type"),
        Some("application/octet-stream")
    );
    assert_eq!(resp.body, binary);

    handle.abort();
}

#[tokio::test]
async fn method_is_not_inspected() {
    let root = TestRoot::new("any-method");
    root.write("index.html", b"<html>shell</html>");
    root.write("data.json", b"{\"ok\":true}");
    let (addr, handle) = start_server(root.path());

    let resp = request(addr, "POST", "/data.json").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("application/json"));

    let resp = request(addr, "DELETE", "/client/route").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("text/html"));

    handle.abort();
}

#[tokio::test]
async fn traversal_path_falls_back_to_entry_document() {
    let root = TestRoot::new("traversal");
    root.write("index.html", b"<html>shell</html>");
    let (addr, handle) = start_server(root.path());

    let resp = request(addr, "GET", "/../../etc/passwd").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("text/html"));
    assert_eq!(resp.body, b"<html>shell</html>");

    handle.abort();
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let root = TestRoot::new("concurrent");
    root.write("index.html", b"<html>shell</html>");
    root.write("a.js", b"export const a = 1;");
    root.write("b.css", b".b { color: red }");
    let (addr, handle) = start_server(root.path());

    let (a, b) = tokio::join!(
        request(addr, "GET", "/a.js"),
        request(addr, "GET", "/b.css")
    );

    assert_eq!(a.status, 200);
    assert_eq!(a.header("content-type"), Some("application/javascript"));
    assert_eq!(a.body, b"export const a = 1;");

    assert_eq!(b.status, 200);
    assert_eq!(b.header("content-type"), Some("text/css"));
    assert_eq!(b.body, b".b { color: red }");

    handle.abort();
}
