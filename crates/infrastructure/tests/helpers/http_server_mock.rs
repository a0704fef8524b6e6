#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Canned reply returned for one request.
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: code,
            body: String::new(),
            delay: None,
        }
    }

    /// Stall before replying, to provoke client-side timeouts.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Minimal HTTP server for downloader tests. Serves predefined responses
/// per request index and counts how many requests arrived.
pub struct MockHttpServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    /// Start on an ephemeral local port. `respond` maps the zero-based
    /// request index to the reply for that request.
    pub async fn start<F>(respond: F) -> std::io::Result<Self>
    where
        F: Fn(usize) -> MockResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        let hits = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let hit_counter = Arc::clone(&hits);
        let respond = Arc::new(respond);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut socket, _)) = accepted else { break };
                        let request_index = hit_counter.fetch_add(1, Ordering::SeqCst);
                        let respond = Arc::clone(&respond);

                        tokio::spawn(async move {
                            // Drain the request head; the content is irrelevant.
                            let mut buf = [0u8; 1024];
                            let _ = socket.read(&mut buf).await;

                            let reply = respond(request_index);
                            if let Some(delay) = reply.delay {
                                tokio::time::sleep(delay).await;
                            }

                            let head = format!(
                                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                                reply.status,
                                reason_phrase(reply.status),
                                reply.body.len()
                            );
                            let _ = socket.write_all(head.as_bytes()).await;
                            let _ = socket.write_all(reply.body.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests the server has accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Response",
    }
}
