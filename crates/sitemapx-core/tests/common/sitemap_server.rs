//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses by path and records every request target it sees.
//! Requests sent through it as a proxy (absolute-form targets such as
//! `http://host/sitemap.xml`) are routed by their path as well.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Sleep this long before answering (simulates a hung server).
    pub delay: Option<Duration>,
}

impl Response {
    pub fn xml(body: &str) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/xml".to_string())],
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 301,
            headers: vec![("Location".to_string(), location.to_string())],
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct SitemapServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SitemapServer {
    /// Request targets received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Unknown paths get 404. The server
/// runs until the process exits.
pub fn start(routes: Vec<(&str, Response)>) -> SitemapServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<Vec<(String, Response)>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, resp)| (path.to_string(), resp))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, &routes, &requests));
        }
    });
    SitemapServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &[(String, Response)], requests: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let target = match request.lines().next().and_then(|l| l.split_whitespace().nth(1)) {
        Some(t) => t.to_string(),
        None => return,
    };
    requests.lock().unwrap().push(target.clone());

    let path = path_of(&target);
    let response = routes
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, r)| r.clone())
        .unwrap_or_else(|| Response::status(404));

    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }

    let mut head = format!("HTTP/1.1 {} {}\r\n", response.status, reason(response.status));
    for (name, value) in &response.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        response.body.len()
    ));
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
    let _ = stream.flush();
}

/// "/sitemap.xml" for both "/sitemap.xml" and "http://host:80/sitemap.xml".
fn path_of(target: &str) -> &str {
    match target.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => target,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
