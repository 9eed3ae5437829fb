//! Native Transport Integration Tests
//!
//! Runs `TodoClient` over `ReqwestTransport` against a local one-shot HTTP
//! listener.

#![cfg(not(target_arch = "wasm32"))]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use todo_client::transport::ReqwestTransport;
use todo_client::{ClientConfig, TodoClient};

/// Serve one canned response per connection, in order.
/// Returns the base URL and a handle yielding the request heads it saw.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, tokio::task::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let mut heads = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.expect("accept");

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.expect("read");
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            heads.push(String::from_utf8_lossy(&buf).to_string());

            let reply = format!(
                "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
        }
        heads
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn test_fetch_all_over_http() {
    let (base, server) = serve(vec![(
        200,
        r#"{"data":{"items":[{"_id":"1","title":"Over the wire","priority":"low"}]}}"#,
    )])
    .await;
    let client = TodoClient::new(ReqwestTransport::new(), ClientConfig::new(base));

    client.fetch_all().await;

    let state = client.state().snapshot();
    assert_eq!(state.last_error, "");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Over the wire");

    let heads = server.await.expect("server");
    assert!(heads[0].starts_with("GET /v1/todos HTTP/1.1"));
}

#[tokio::test]
async fn test_server_error_status_is_failure() {
    let (base, server) = serve(vec![(500, r#"{"error":"internal"}"#)]).await;
    let client = TodoClient::new(ReqwestTransport::new(), ClientConfig::new(base));

    assert_eq!(client.fetch_one("abc").await, None);
    assert_eq!(client.state().last_error(), "Failed to fetch TODO");

    let heads = server.await.expect("server");
    assert!(heads[0].starts_with("GET /v1/todos/abc HTTP/1.1"));
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = TodoClient::new(ReqwestTransport::new(), ClientConfig::new(format!("http://{}", addr)));
    client.fetch_all().await;

    assert_eq!(client.state().last_error(), "Failed to fetch TODOs");
    assert!(client.state().items().is_empty());
}
