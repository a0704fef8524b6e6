use futures::StreamExt;
use palisade_dns_domain::DownloaderConfig;
use palisade_dns_infrastructure::events::{DownloadFailedEvent, ListEventEmitter};
use palisade_dns_infrastructure::lists::{DownloadError, FileDownloader, FileStream, HttpDownloader};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::http_server_mock::{MockHttpServer, MockResponse};

fn config(attempts: u32, timeout: Duration, cooldown: Duration) -> DownloaderConfig {
    DownloaderConfig {
        attempts,
        timeout_ms: timeout.as_millis() as u64,
        cooldown_ms: cooldown.as_millis() as u64,
        proxy: None,
    }
}

fn downloader(cfg: DownloaderConfig) -> (HttpDownloader, UnboundedReceiver<DownloadFailedEvent>) {
    let (events, rx) = ListEventEmitter::new_enabled();
    let downloader = HttpDownloader::new(cfg, events).expect("client builds");
    (downloader, rx)
}

async fn read_to_string(mut stream: FileStream) -> String {
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        buf.extend_from_slice(&chunk.expect("body chunk"));
    }
    String::from_utf8(buf).expect("utf-8 body")
}

fn drain(rx: &mut UnboundedReceiver<DownloadFailedEvent>) -> Vec<String> {
    let mut urls = Vec::new();
    while let Ok(event) = rx.try_recv() {
        urls.push(event.url.to_string());
    }
    urls
}

// ============================================================================
// Success paths
// ============================================================================

#[tokio::test]
async fn test_download_streams_full_body() {
    let server = MockHttpServer::start(|_| MockResponse::ok("line.one\nline.two"))
        .await
        .unwrap();
    let (sut, mut rx) = downloader(DownloaderConfig::default());

    let stream = sut.download_file(&server.url()).await.expect("download succeeds");

    assert_eq!(read_to_string(stream).await, "line.one\nline.two");
    assert!(drain(&mut rx).is_empty(), "no failure events on success");
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_injected_client_is_used() {
    let server = MockHttpServer::start(|_| MockResponse::ok("payload")).await.unwrap();
    let (events, mut rx) = ListEventEmitter::new_enabled();

    let client = reqwest::Client::new();
    let sut = HttpDownloader::with_client(DownloaderConfig::default(), client, events);

    let stream = sut.download_file(&server.url()).await.unwrap();
    assert_eq!(read_to_string(stream).await, "payload");
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_concurrent_downloads_of_independent_urls() {
    let server_a = MockHttpServer::start(|_| MockResponse::ok("aaa")).await.unwrap();
    let server_b = MockHttpServer::start(|_| MockResponse::ok("bbb")).await.unwrap();
    let (sut, _rx) = downloader(DownloaderConfig::default());

    let url_a = server_a.url();
    let url_b = server_b.url();
    let (a, b) = tokio::join!(sut.download_file(&url_a), sut.download_file(&url_b));

    assert_eq!(read_to_string(a.unwrap()).await, "aaa");
    assert_eq!(read_to_string(b.unwrap()).await, "bbb");
}

// ============================================================================
// Status failures
// ============================================================================

#[tokio::test]
async fn test_persistent_404_exhausts_attempts() {
    let server = MockHttpServer::start(|_| MockResponse::status(404)).await.unwrap();
    let url = server.url();
    let (sut, mut rx) = downloader(config(
        3,
        Duration::from_millis(500),
        Duration::from_millis(1),
    ));

    let err = sut.download_file(&url).await.map(|_| ()).expect_err("must fail");

    assert_eq!(err.to_string(), "got status code 404");
    assert!(!err.is_transient());
    assert_eq!(server.hits(), 3, "one request per attempt");

    let events = drain(&mut rx);
    assert_eq!(events.len(), 3, "one failure event per failed attempt");
    assert!(events.iter().all(|event_url| *event_url == url));
}

// ============================================================================
// Transient failures and retries
// ============================================================================

#[tokio::test]
async fn test_retry_after_initial_timeout_returns_content() {
    let server = MockHttpServer::start(|request_index| {
        if request_index == 0 {
            // First attempt stalls past the client timeout.
            MockResponse::ok("blocked1.com").delayed(Duration::from_millis(500))
        } else {
            MockResponse::ok("blocked1.com")
        }
    })
    .await
    .unwrap();
    let url = server.url();
    let (sut, mut rx) = downloader(config(
        3,
        Duration::from_millis(100),
        Duration::from_millis(1),
    ));

    let stream = sut.download_file(&url).await.expect("second attempt succeeds");

    assert_eq!(read_to_string(stream).await, "blocked1.com");

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1, "only the timed-out attempt is reported");
    assert_eq!(events[0], url);
}

#[tokio::test]
async fn test_persistent_timeouts_return_transient_error() {
    let server = MockHttpServer::start(|_| {
        MockResponse::ok("late").delayed(Duration::from_millis(300))
    })
    .await
    .unwrap();
    let (sut, mut rx) = downloader(config(
        3,
        Duration::from_millis(50),
        Duration::from_millis(1),
    ));

    let err = sut.download_file(&server.url()).await.map(|_| ()).expect_err("must fail");

    assert!(err.is_transient());
    assert!(err.is_timeout());
    assert_eq!(drain(&mut rx).len(), 3);
}

#[tokio::test]
async fn test_unresolvable_host_is_transient() {
    let (sut, mut rx) = downloader(config(
        2,
        Duration::from_millis(1000),
        Duration::from_millis(1),
    ));

    let err = sut
        .download_file("http://palisade-lists.invalid/ads.txt")
        .await
        .map(|_| ())
        .expect_err("name resolution must fail");

    assert!(err.is_transient());
    assert_eq!(drain(&mut rx).len(), 2);
}

#[tokio::test]
async fn test_malformed_url_fails_after_single_attempt() {
    let (sut, mut rx) = downloader(config(
        1,
        Duration::from_millis(500),
        Duration::from_millis(1),
    ));

    let err = sut.download_file("somewrongurl").await.map(|_| ()).expect_err("must fail");

    assert!(err.is_transient());
    assert!(!err.is_timeout());
    assert_eq!(drain(&mut rx).len(), 1);
}

// ============================================================================
// Cooldown and cancellation
// ============================================================================

#[tokio::test]
async fn test_cooldown_separates_attempts() {
    let server = MockHttpServer::start(|_| MockResponse::status(404)).await.unwrap();
    let cooldown = Duration::from_millis(150);
    let (sut, _rx) = downloader(config(3, Duration::from_millis(500), cooldown));

    let start = Instant::now();
    let _ = sut.download_file(&server.url()).await;
    let elapsed = start.elapsed();

    // Two cooldowns between three attempts.
    assert!(
        elapsed >= cooldown * 2,
        "elapsed {elapsed:?} is shorter than two cooldowns"
    );
    assert_eq!(server.hits(), 3);
}

#[tokio::test]
async fn test_cancellation_aborts_cooldown_wait() {
    let server = MockHttpServer::start(|_| MockResponse::status(404)).await.unwrap();
    let token = CancellationToken::new();
    let (events, mut rx) = ListEventEmitter::new_enabled();
    let sut = HttpDownloader::new(
        config(5, Duration::from_millis(500), Duration::from_secs(30)),
        events,
    )
    .unwrap()
    .with_cancellation(token.clone());

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    let start = Instant::now();
    let err = sut.download_file(&server.url()).await.map(|_| ()).expect_err("cancelled");

    assert!(matches!(err, DownloadError::Cancelled));
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "cancellation must cut the 30s cooldown short"
    );

    // The one failed attempt before cancellation was reported; nothing after.
    assert_eq!(drain(&mut rx).len(), 1);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_pre_cancelled_token_stops_before_first_attempt() {
    let server = MockHttpServer::start(|_| MockResponse::ok("never served")).await.unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let (events, mut rx) = ListEventEmitter::new_enabled();
    let sut = HttpDownloader::new(DownloaderConfig::default(), events)
        .unwrap()
        .with_cancellation(token);

    let err = sut.download_file(&server.url()).await.map(|_| ()).expect_err("cancelled");

    assert!(matches!(err, DownloadError::Cancelled));
    assert!(drain(&mut rx).is_empty(), "no attempt, no notification");
}
