//! Shared fixtures: a minimal HTTP server and generated images.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::io::{Cursor, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

use image::{ImageFormat, RgbImage};

/// A canned response for one path.
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(path: &'static str, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

/// Serve `routes` on an ephemeral local port until the test process exits.
/// Unknown paths get a 404.
pub fn serve(routes: Vec<Route>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &routes);
        }
    });

    addr
}

fn handle(mut stream: TcpStream, routes: &[Route]) {
    let mut request = Vec::new();
    let mut buf = [0_u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let fallback = Route::status("", 404);
    let route = routes.iter().find(|r| r.path == path).unwrap_or(&fallback);

    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Status",
    }
}

/// PNG bytes of a blank `width` × `height` image.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    listener.local_addr().expect("listener address").port()
}
