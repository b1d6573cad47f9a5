//! Sitemap download.
//!
//! One GET, no retries, no timeout beyond the client defaults. The body is
//! streamed into the cache file, replacing whatever was there before.

use crate::config::Settings;
use crate::error::TransportError;
use crate::utils::truncate_for_log;
use futures::StreamExt;
use std::io::ErrorKind;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};

/// Download the sitemap into `settings.cache_path`.
///
/// A non-2xx response is still saved (decoding will reject it later) unless
/// `settings.fail_on_status` is set, in which case the cache is left alone.
/// An interrupted transfer leaves the partial file in place.
///
/// # Returns
///
/// The number of bytes written.
#[instrument(
    level = "info",
    skip_all,
    fields(url = %settings.sitemap_url, path = %settings.cache_path.display())
)]
pub async fn download_sitemap(settings: &Settings) -> Result<u64, TransportError> {
    let response = reqwest::get(settings.sitemap_url.as_str()).await?;
    let status = response.status();
    if !status.is_success() {
        if settings.fail_on_status {
            return Err(TransportError::Status {
                status,
                url: settings.sitemap_url.clone(),
            });
        }
        warn!(%status, "Sitemap request did not succeed; saving response body anyway");
    }

    let path = &settings.cache_path;
    let cache_err = |source| TransportError::Cache {
        path: path.clone(),
        source,
    };

    match fs::remove_file(path).await {
        Ok(()) => debug!("Removed previous sitemap copy"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "Could not remove previous sitemap copy"),
    }

    let mut file = fs::File::create(path).await.map_err(cache_err)?;
    let mut body = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if written == 0 && !status.is_success() {
            warn!(
                %status,
                body_preview = %truncate_for_log(&String::from_utf8_lossy(&chunk), 200),
                "Error response body"
            );
        }
        file.write_all(&chunk).await.map_err(cache_err)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(cache_err)?;

    println!("{} bytes downloaded.", written);
    info!(bytes = written, "Sitemap downloaded");
    Ok(written)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::path::Path;
    use std::thread;
    use tempfile::tempdir;

    /// Serve exactly one HTTP response, then close.
    pub(crate) fn spawn_one_shot_http(
        status_line: &'static str,
        payload: Vec<u8>,
    ) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request_buf = [0u8; 1024];
            let _ = stream.read(&mut request_buf);
            let headers = format!(
                concat!(
                    "HTTP/1.1 {}\r\n",
                    "Content-Type: application/json\r\n",
                    "Content-Length: {}\r\n",
                    "Connection: close\r\n\r\n",
                ),
                status_line,
                payload.len()
            );
            let mut response = headers.into_bytes();
            response.extend_from_slice(&payload);
            // The client may hang up early (strict status, unwritable cache).
            let _ = stream.write_all(&response);
            let _ = stream.flush();
        });
        (format!("http://{addr}/sitemap/"), handle)
    }

    fn settings_for(url: String, cache_path: &Path) -> Settings {
        Settings {
            sitemap_url: url,
            cache_path: cache_path.to_path_buf(),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_download_writes_body() {
        let body = br#"{"1":[{"type":"cat","name":"Billing","url":"billing"}]}"#.to_vec();
        let (url, handle) = spawn_one_shot_http("200 OK", body.clone());
        let dir = tempdir().unwrap();
        let cache = dir.path().join("sitemap.json");

        let written = download_sitemap(&settings_for(url, &cache)).await.unwrap();
        handle.join().unwrap();

        assert_eq!(written, body.len() as u64);
        assert_eq!(std::fs::read(&cache).unwrap(), body);
    }

    #[tokio::test]
    async fn test_download_replaces_previous_copy() {
        let (url, handle) = spawn_one_shot_http("200 OK", b"{}".to_vec());
        let dir = tempdir().unwrap();
        let cache = dir.path().join("sitemap.json");
        std::fs::write(&cache, "a much longer stale sitemap from the last run").unwrap();

        download_sitemap(&settings_for(url, &cache)).await.unwrap();
        handle.join().unwrap();

        assert_eq!(std::fs::read_to_string(&cache).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_error_status_body_is_saved_by_default() {
        let (url, handle) =
            spawn_one_shot_http("500 Internal Server Error", b"<h1>oops</h1>".to_vec());
        let dir = tempdir().unwrap();
        let cache = dir.path().join("sitemap.json");

        let written = download_sitemap(&settings_for(url, &cache)).await.unwrap();
        handle.join().unwrap();

        assert_eq!(written, 13);
        assert_eq!(std::fs::read_to_string(&cache).unwrap(), "<h1>oops</h1>");
    }

    #[tokio::test]
    async fn test_error_status_fails_when_strict() {
        let (url, handle) = spawn_one_shot_http("404 Not Found", b"missing".to_vec());
        let dir = tempdir().unwrap();
        let cache = dir.path().join("sitemap.json");
        std::fs::write(&cache, "previous").unwrap();

        let mut settings = settings_for(url, &cache);
        settings.fail_on_status = true;
        let err = download_sitemap(&settings).await.unwrap_err();
        handle.join().unwrap();

        assert!(matches!(
            err,
            TransportError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
        assert_eq!(std::fs::read_to_string(&cache).unwrap(), "previous");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let dir = tempdir().unwrap();
        let cache = dir.path().join("sitemap.json");

        let err = download_sitemap(&settings_for(format!("http://{addr}/"), &cache))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Request(_)));
        assert!(!cache.exists());
    }

    #[tokio::test]
    async fn test_unwritable_cache_path() {
        let (url, handle) = spawn_one_shot_http("200 OK", b"{}".to_vec());
        let dir = tempdir().unwrap();
        let cache = dir.path().join("missing-dir").join("sitemap.json");

        let err = download_sitemap(&settings_for(url, &cache)).await.unwrap_err();
        handle.join().unwrap();

        assert!(matches!(err, TransportError::Cache { ref path, .. } if *path == cache));
    }
}
