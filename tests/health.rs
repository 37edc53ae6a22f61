//! Tests for the HTTP health endpoint.
//! Spins up the REST server on a random port and sends a GET /health request.

use std::sync::Arc;
use taskd::{config::TaskdConfig, rest, AppContext};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Find a free local port by binding to port 0.
fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn spawn_server() -> u16 {
    let port = find_free_port();
    let config = TaskdConfig::new(
        Some(port),
        None,
        Some("error".to_string()),
        Some(std::path::PathBuf::from("/nonexistent/taskd.toml")),
    );
    let ctx = Arc::new(AppContext::new(config));

    tokio::spawn(async move {
        let _ = rest::start_rest_server(ctx).await;
    });

    // Give the server a moment to start
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    port
}

#[tokio::test]
async fn health_endpoint_response_fields() {
    let port = spawn_server().await;

    let mut stream = TcpStream::connect(format!("127.0.0.1:{port}"))
        .await
        .unwrap();
    let request = "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    let response = String::from_utf8_lossy(&buf);

    let first_line = response.lines().next().unwrap_or("");
    assert!(
        first_line.contains("200"),
        "expected HTTP 200, got: {first_line}"
    );

    let body_start = response
        .find("\r\n\r\n")
        .map(|i| i + 4)
        .expect("no body in response");
    let json: serde_json::Value =
        serde_json::from_str(&response[body_start..]).expect("body is not valid JSON");

    assert_eq!(json["status"], "ok", "status should be 'ok'");
    assert!(json["uptime_secs"].is_number(), "uptime_secs should be a number");
    assert_eq!(
        json["version"].as_str().unwrap(),
        env!("CARGO_PKG_VERSION"),
        "version should match CARGO_PKG_VERSION"
    );
}
