//! Minimal HTTP responder for exercising the real fetcher.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// Serves the same canned response to every connection on a local port.
///
/// The accept loop runs on a detached thread for the rest of the process.
#[derive(Debug, Clone)]
pub struct StaticHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticHttpServer {
    /// Start serving `body` with the given status code.
    pub fn start(status: u16, body: impl Into<String>) -> io::Result<Self> {
        Self::start_delayed(status, body, Duration::ZERO)
    }

    /// Like [`start`](Self::start), but wait `delay` before answering.
    pub fn start_delayed(
        status: u16,
        body: impl Into<String>,
        delay: Duration,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let body = body.into();

        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                if let Ok(request) = read_request(&mut stream) {
                    seen.lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(request);
                }
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let _ = write_response(&mut stream, status, &body);
            }
        });

        Ok(Self { addr, requests })
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Raw request heads received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn read_request(stream: &mut TcpStream) -> io::Result<String> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    Ok(String::from_utf8_lossy(&request).into_owned())
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) -> io::Result<()> {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };

    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )?;
    stream.flush()
}
