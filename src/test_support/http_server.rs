use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> HashMap<String, String> {
        let raw = self.target.split_once('?').map(|(_, q)| q).unwrap_or_default();
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn form(&self) -> HashMap<String, String> {
        url::form_urlencoded::parse(&self.body).into_owned().collect()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Overrides the advertised `Content-Length`.
    pub content_length: Option<usize>,
}

impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string().into_bytes(),
            content_length: None,
        }
    }

    /// Advertise `len` bytes but close the connection after the real body.
    pub fn truncated(mut self, len: usize) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

pub struct TestServer {
    pub base_url: String,
    pub shutdown: oneshot::Sender<()>,
    pub hits: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    /// Assert the most recent request used `method` on `path`.
    pub fn assert_call(&self, method: &str, path: &str) {
        let req = self.last_request();
        assert_eq!(req.method, method, "unexpected method for {}", req.target);
        assert_eq!(req.path(), path, "unexpected path");
    }
}

pub async fn start_server<F>(handler: F) -> TestServer
where
    F: Fn(&RecordedRequest) -> MockResponse + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_task = hits.clone();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_task = requests.clone();

    let (tx, mut rx) = oneshot::channel::<()>();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = &mut rx => return,
                res = listener.accept() => {
                    let (mut sock, _) = match res {
                        Ok(v) => v,
                        Err(_) => continue,
                    };
                    let Some(req) = read_request(&mut sock).await else {
                        continue;
                    };

                    hits_task.fetch_add(1, Ordering::SeqCst);
                    let resp = handler(&req);
                    requests_task.lock().unwrap().push(req);

                    let reason = match resp.status {
                        200 => "OK",
                        400 => "Bad Request",
                        401 => "Unauthorized",
                        404 => "Not Found",
                        420 => "Enhance Your Calm",
                        429 => "Too Many Requests",
                        500 => "Internal Server Error",
                        _ => "OK",
                    };

                    let mut out = Vec::new();
                    out.extend_from_slice(format!("HTTP/1.1 {} {}\r\n", resp.status, reason).as_bytes());
                    out.extend_from_slice(b"Connection: close\r\n");
                    for (k, v) in &resp.headers {
                        out.extend_from_slice(format!("{}: {}\r\n", k, v).as_bytes());
                    }
                    out.extend_from_slice(format!(
                        "Content-Length: {}\r\n\r\n",
                        resp.content_length.unwrap_or(resp.body.len())
                    ).as_bytes());
                    out.extend_from_slice(&resp.body);
                    let _ = sock.write_all(&out).await;
                    let _ = sock.shutdown().await;
                }
            }
        }
    });

    TestServer {
        base_url,
        shutdown: tx,
        hits,
        requests,
    }
}

/// Read one request: head up to the blank line, then `Content-Length` bytes.
async fn read_request(sock: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    let head_end = loop {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.lines();
    let first = lines.next().unwrap_or_default();
    let mut parts = first.split_whitespace();
    let method = parts.next().unwrap_or("GET").to_string();
    let target = parts.next().unwrap_or("/").to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[head_end + 4..].to_vec();
    while body.len() < content_length {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}
