//! HttpTransport against a one-shot local HTTP server.

use library_core::{Client, HttpTransport, LibraryError, Transport};
use std::rc::Rc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one request with `status` / `body`, returning the raw request text
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/graphql", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&raw).to_string()
    });

    (endpoint, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..split]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + content_length
}

#[tokio::test]
async fn posts_graphql_body_with_bearer() {
    let (endpoint, server) = serve_once("200 OK", r#"{"data":{"myBooks":[]}}"#).await;
    let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new());
    let client = Client::authenticated(endpoint, "secret-token", transport);

    let items = client.list_items(Some("rust")).await.unwrap();
    assert!(items.is_empty());

    let raw = server.await.unwrap();
    let lower = raw.to_lowercase();
    assert!(raw.starts_with("POST /graphql"));
    assert!(lower.contains("authorization: bearer secret-token"));
    assert!(lower.contains("content-type: application/json"));
    assert!(raw.contains(r#""operationName":"MyBooks""#));
    assert!(raw.contains(r#""variables":{"keyword":"rust"}"#));
}

#[tokio::test]
async fn anonymous_request_has_no_authorization_header() {
    let (endpoint, server) = serve_once("200 OK", r#"{"data":{"myBooks":[]}}"#).await;
    let client = Client::anonymous(endpoint, Rc::new(HttpTransport::new()));

    client.list_items(None).await.unwrap();

    let raw = server.await.unwrap();
    assert!(!raw.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn server_error_status_is_network_failure() {
    let (endpoint, server) = serve_once("503 Service Unavailable", "unavailable").await;
    let client = Client::anonymous(endpoint, Rc::new(HttpTransport::new()));

    let err = client.list_items(None).await.unwrap_err();
    assert!(matches!(err, LibraryError::NetworkFailure(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/graphql", listener.local_addr().unwrap());
    drop(listener);
    let client = Client::anonymous(endpoint, Rc::new(HttpTransport::new()));

    let err = client.list_items(None).await.unwrap_err();
    assert!(matches!(err, LibraryError::NetworkFailure(_)));
    assert!(err.is_user_visible());
}
