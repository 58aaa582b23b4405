//! End-to-end tests driving the server over a real TCP connection.
//!
//! Each test binds port 0 so runs never collide.

use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use secure_static_server::server::config::ServerConfig;
use secure_static_server::server::error::ServerError;
use secure_static_server::server::{HttpServer, manifest};
use secure_static_server::static_files;

const SECURITY_HEADER_LINES: [&str; 5] = [
    "X-Content-Type-Options: nosniff",
    "X-Frame-Options: DENY",
    "X-XSS-Protection: 1; mode=block",
    "Referrer-Policy: strict-origin-when-cross-origin",
    "Content-Security-Policy: default-src 'self';",
];

fn test_config(port: u16, root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
        root: Some(root.to_path_buf()),
        threads: 2,
        init: false,
    }
}

fn start_server(root: &Path) -> (SocketAddr, Arc<AtomicBool>, JoinHandle<std::io::Result<()>>) {
    let config = test_config(0, root);
    let server = HttpServer::new(&config, root).expect("Failed to bind server");
    let addr = server.local_addr().expect("Failed to get local addr");
    let stop = server.stop_handle();
    let handle = thread::spawn(move || server.run());
    (addr, stop, handle)
}

fn send_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("Failed to connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(request.as_bytes()).unwrap();
    stream.flush().unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

fn assert_security_headers(response: &str) {
    for line in SECURITY_HEADER_LINES {
        assert!(
            response.contains(line),
            "response missing header line {line:?}, got:\n{response}"
        );
    }
}

fn demo_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    static_files::write_demo_site(dir.path()).unwrap();
    dir
}

#[test]
fn serves_existing_file_with_exact_bytes() {
    let root = demo_root();
    let content = "<html><body>hello from the test suite</body></html>\n";
    fs::write(root.path().join("index.html"), content).unwrap();

    let (addr, stop, _handle) = start_server(root.path());
    let response = send_request(addr, "GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Content-Type: text/html"));
    assert_eq!(extract_body(&response), content);
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn root_path_serves_the_index_file() {
    let root = demo_root();
    let (addr, stop, _handle) = start_server(root.path());

    let response = send_request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(extract_body(&response), static_files::html_content::get_html());

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn missing_path_is_404_with_security_headers() {
    let root = demo_root();
    let (addr, stop, _handle) = start_server(root.path());

    let response = send_request(addr, "GET /does-not-exist HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 404 Not Found"));
    assert!(extract_body(&response).contains("404"));
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn post_gets_an_error_with_security_headers() {
    let root = demo_root();
    let (addr, stop, _handle) = start_server(root.path());

    let response = send_request(
        addr,
        "POST / HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n",
    );
    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"));
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn head_sends_headers_only() {
    let root = demo_root();
    let css_len = fs::metadata(root.path().join("styles.css")).unwrap().len();
    let (addr, stop, _handle) = start_server(root.path());

    let response = send_request(addr, "HEAD /styles.css HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Content-Type: text/css"));
    assert!(response.contains(&format!("Content-Length: {css_len}")));
    assert_eq!(extract_body(&response), "");
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn traversal_attempt_is_forbidden() {
    let root = demo_root();
    let (addr, stop, _handle) = start_server(root.path());

    let response = send_request(
        addr,
        "GET /../../etc/passwd HTTP/1.1\r\nHost: localhost\r\n\r\n",
    );
    assert!(response.starts_with("HTTP/1.1 403 Forbidden"));
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn directory_without_index_gets_a_listing() {
    let root = demo_root();
    fs::create_dir(root.path().join("assets")).unwrap();
    fs::write(root.path().join("assets/app.txt"), b"data").unwrap();

    let (addr, stop, _handle) = start_server(root.path());
    let response = send_request(addr, "GET /assets/ HTTP/1.1\r\nHost: localhost\r\n\r\n");

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(extract_body(&response).contains("app.txt"));
    assert_security_headers(&response);

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn second_bind_on_same_port_reports_port_in_use() {
    let root = demo_root();
    let (addr, stop, _handle) = start_server(root.path());

    let config = test_config(addr.port(), root.path());
    match HttpServer::new(&config, root.path()) {
        Err(ServerError::PortInUse(port)) => assert_eq!(port, addr.port()),
        other => panic!("expected PortInUse, got {:?}", other.map(|_| "server")),
    }

    // the first instance keeps serving
    let response = send_request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK"));

    stop.store(true, Ordering::SeqCst);
}

#[test]
fn manifest_failure_reports_missing_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), b"x").unwrap();

    match manifest::check(dir.path()) {
        Err(ServerError::MissingFiles(missing)) => {
            assert_eq!(missing, vec!["styles.css", "script.js"]);
        }
        other => panic!("expected MissingFiles, got {other:?}"),
    }
}

#[test]
fn stop_flag_ends_the_accept_loop() {
    let root = demo_root();
    let (addr, stop, handle) = start_server(root.path());

    // server is live before the stop
    let response = send_request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK"));

    stop.store(true, Ordering::SeqCst);
    let result = handle.join().expect("server thread panicked");
    assert!(result.is_ok());

    // listener is gone, new connections are refused
    assert!(TcpStream::connect(addr).is_err());
}
