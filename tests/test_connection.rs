//! Drives a single connection handler over an in-memory duplex pipe.

use std::time::Duration;

use hello_listener::http::connection::{Connection, ConnectionError};
use hello_listener::http::parser::ParseError;
use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};
use tokio::time::timeout;

/// Sends `request`, half-closes, and collects whatever comes back.
async fn exchange(request: &[u8]) -> (Result<(), ConnectionError>, Vec<u8>) {
    let (mut client, server) = duplex(8192);
    let handle = tokio::spawn(Connection::new(server).run());

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();

    (handle.await.unwrap(), received)
}

#[tokio::test]
async fn test_get_root() {
    let (result, received) = exchange(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").await;

    assert!(result.is_ok());
    assert_eq!(
        received,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 13\r\nConnection: close\r\n\r\nHello, World!"
            .to_vec()
    );
}

#[tokio::test]
async fn test_get_health() {
    let (result, received) = exchange(b"GET /health HTTP/1.1\r\nAccept: */*\r\n\r\n").await;
    let text = String::from_utf8(received).unwrap();

    assert!(result.is_ok());
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: application/json\r\n"));
    assert!(text.contains("Content-Length: 21\r\n"));
    assert!(text.ends_with("\r\n\r\n{\"status\": \"healthy\"}"));
}

#[tokio::test]
async fn test_get_unknown_path() {
    let (result, received) = exchange(b"GET /missing HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(received).unwrap();

    assert!(result.is_ok());
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.ends_with("<html><body><h1>404 Not Found</h1></body></html>"));
}

#[tokio::test]
async fn test_non_get_methods_get_405() {
    for method in ["POST", "PUT", "DELETE", "HEAD", "get", "BREW"] {
        let request = format!("{method} /health HTTP/1.1\r\n\r\n");
        let (result, received) = exchange(request.as_bytes()).await;
        let text = String::from_utf8(received).unwrap();

        assert!(result.is_ok(), "{method}");
        assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"), "{method}");
        assert!(text.ends_with("<html><body><h1>405 Method Not Allowed</h1></body></html>"));
    }
}

#[tokio::test]
async fn test_405_is_sent_before_headers_are_read() {
    let (mut client, server) = duplex(8192);
    let handle = tokio::spawn(Connection::new(server).run());

    // No header terminator, and the write side stays open.
    client
        .write_all(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n")
        .await
        .unwrap();

    let mut received = Vec::new();
    timeout(Duration::from_secs(5), client.read_to_end(&mut received))
        .await
        .expect("405 should not wait for the header block")
        .unwrap();

    assert!(received.starts_with(b"HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_bare_lf_line_endings() {
    let (result, received) = exchange(b"GET / HTTP/1.1\nHost: x\n\n").await;

    assert!(result.is_ok());
    assert!(received.ends_with(b"Hello, World!"));
}

#[tokio::test]
async fn test_whitespace_only_line_ends_headers() {
    let (result, received) = exchange(b"GET /health HTTP/1.1\r\nHost: x\r\n  \r\n").await;

    assert!(result.is_ok());
    assert!(received.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn test_malformed_request_line_gets_no_response() {
    let (result, received) = exchange(b"GET /\r\n\r\n").await;

    assert!(matches!(
        result,
        Err(ConnectionError::Malformed(ParseError::MalformedRequestLine(_)))
    ));
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_empty_request_line_gets_no_response() {
    let (result, received) = exchange(b"\r\n").await;

    assert!(matches!(result, Err(ConnectionError::Malformed(_))));
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_immediate_close_is_read_error() {
    let (result, received) = exchange(b"").await;

    assert!(matches!(result, Err(ConnectionError::Read(_))));
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_unterminated_request_line_is_read_error() {
    let (result, received) = exchange(b"GET / HTTP/1.1").await;

    assert!(matches!(result, Err(ConnectionError::Read(_))));
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_missing_blank_line_gets_no_response() {
    let (result, received) = exchange(b"GET / HTTP/1.1\r\nHost: x\r\n").await;

    match result {
        Err(ConnectionError::Read(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("expected read error, got {other:?}"),
    }
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_stalled_headers_block_until_peer_leaves() {
    let (mut client, server) = duplex(8192);
    let handle = tokio::spawn(Connection::new(server).run());

    client
        .write_all(b"GET / HTTP/1.1\r\nHost: x\r\n")
        .await
        .unwrap();

    let mut byte = [0u8; 1];
    let waited = timeout(Duration::from_millis(200), client.read(&mut byte)).await;
    assert!(waited.is_err(), "no response may be sent before the blank line");
    assert!(!handle.is_finished());

    drop(client);

    let result = timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    assert!(matches!(result, Err(ConnectionError::Read(_))));
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let (mut client, server) = duplex(8192);

    client
        .write_all(b"GET / HTTP/1.1\r\n\r\n")
        .await
        .unwrap();
    // The request stays buffered, but nobody is left to read the answer.
    drop(client);

    let result = Connection::new(server).run().await;

    assert!(matches!(result, Err(ConnectionError::Write(_))));
}
