use futures::future::join_all;
use futures::StreamExt;
use palisade_dns_domain::Config;
use palisade_dns_infrastructure::events::ListEventEmitter;
use palisade_dns_infrastructure::lists::{FileDownloader, HttpDownloader};
use tracing::{info, warn};

/// Fetch every configured list source, streaming each body to completion.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    if config.lists.sources.is_empty() {
        info!("no list sources configured, nothing to refresh");
        return Ok(());
    }

    let (events, mut rx) = ListEventEmitter::new_enabled();
    let failed_attempts = tokio::spawn(async move {
        let mut count = 0usize;
        while let Some(event) = rx.recv().await {
            warn!(url = %event.url, "download attempt failed");
            count += 1;
        }
        count
    });

    let downloader = HttpDownloader::new(config.lists.downloader.clone(), events)?;

    let fetches = config.lists.sources.iter().map(|url| {
        let downloader = &downloader;
        async move {
            match downloader.download_file(url).await {
                Ok(mut stream) => {
                    let mut bytes = 0usize;
                    let mut lines = 0usize;
                    while let Some(chunk) = stream.next().await {
                        match chunk {
                            Ok(chunk) => {
                                bytes += chunk.len();
                                lines += chunk.iter().filter(|b| **b == b'\n').count();
                            }
                            Err(err) => {
                                warn!(url = %url, error = %err, "list body read failed");
                                return false;
                            }
                        }
                    }
                    info!(url = %url, bytes, lines, "list downloaded");
                    true
                }
                Err(err) => {
                    warn!(url = %url, error = %err, "list download failed");
                    false
                }
            }
        }
    });

    let results = join_all(fetches).await;

    // Dropping the downloader closes the emitter and ends the counter task.
    drop(downloader);
    let failed_attempts = failed_attempts.await.unwrap_or(0);

    let failed_sources = results.iter().filter(|ok| !**ok).count();
    if failed_sources > 0 {
        anyhow::bail!(
            "{failed_sources} of {} list sources failed ({failed_attempts} failed attempts)",
            results.len()
        );
    }

    info!(
        sources = results.len(),
        failed_attempts, "list refresh complete"
    );
    Ok(())
}
