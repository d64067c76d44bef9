//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes:
//! - `/photo/<anything>`: 200 with the configured body
//! - `/empty`: 200 with an empty body
//! - `/redirect`: 302 to `/photo/redirected.jpg`
//! - `/error/<code>`: that status with a short HTML body
//! - anything else: 404

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread serving `body` for photo paths.
/// Returns the base URL without trailing slash (e.g. "http://127.0.0.1:12345").
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);

    let (status, extra, payload): (String, String, &[u8]) = if path.starts_with("/photo/") {
        ("200 OK".to_string(), String::new(), body)
    } else if path == "/empty" {
        ("200 OK".to_string(), String::new(), &[])
    } else if path == "/redirect" {
        (
            "302 Found".to_string(),
            "Location: /photo/redirected.jpg\r\n".to_string(),
            &[],
        )
    } else if let Some(code) = path.strip_prefix("/error/") {
        (format!("{} Error", code), String::new(), b"<html>error</html>")
    } else {
        ("404 Not Found".to_string(), String::new(), b"<html>not found</html>")
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: image/jpeg\r\nConnection: close\r\n{}\r\n",
        status,
        payload.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(payload);
}

fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
}
