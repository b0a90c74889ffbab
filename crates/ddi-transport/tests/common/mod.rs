//! Minimal canned-response HTTP listener for transport tests.
//!
//! Each server handles exactly one connection: it captures the request it
//! received, writes a pre-built response, and closes. Tests join the
//! server to inspect what the transport actually sent.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// The raw request a [`OneShotServer`] captured.
pub struct CapturedRequest {
    /// Request line and headers, up to the blank line.
    pub head: String,
    /// Request body, if any.
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Whether the request head contains the given substring,
    /// case-insensitively (header names arrive in client casing).
    pub fn head_contains(&self, needle: &str) -> bool {
        self.head.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Serves a single connection with a canned response.
pub struct OneShotServer {
    addr: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    /// Bind an ephemeral port and serve `response` to the first connection.
    pub fn spawn(response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(&response).unwrap();
            stream.flush().unwrap();
            let _ = stream.shutdown(Shutdown::Write);
            request
        });

        Self { addr, handle }
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:34567`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Wait for the connection to be served and return the captured request.
    pub fn finish(self) -> CapturedRequest {
        self.handle.join().unwrap()
    }
}

/// Build a full HTTP/1.1 response with `Content-Length` and
/// `Connection: close` added.
pub fn http_response(status_line: &str, headers: &[(&str, &str)], body: &[u8]) -> Vec<u8> {
    let mut response = Vec::new();
    response.extend_from_slice(status_line.as_bytes());
    response.extend_from_slice(b"\r\n");
    for (name, value) in headers {
        response.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
    }
    response.extend_from_slice(format!("Content-Length: {}\r\n", body.len()).as_bytes());
    response.extend_from_slice(b"Connection: close\r\n\r\n");
    response.extend_from_slice(body);
    response
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before request head was complete");
        raw.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_blank_line(&raw) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&raw[..head_end]).into_owned();
    let mut body: Vec<u8> = raw[head_end + 4..].to_vec();

    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    while body.len() < content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before request body was complete");
        body.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest { head, body }
}

fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}
