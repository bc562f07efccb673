//! Download request lifecycle.
//!
//! Posts the form contents to the download backend on a worker thread and
//! saves the returned bytes, publishing the attempt's phase through a
//! shared cell the draw loop reads every frame.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::thread;

use byeol_core::{DownloadFormat, DownloadPhase};
use serde::{Deserialize, Serialize};

/// Media responses routinely exceed the body reader's default limit.
const MAX_DOWNLOAD_BYTES: u64 = 4 * 1024 * 1024 * 1024;

/// Request payload sent to the backend.
#[derive(Debug, Serialize)]
struct DownloadPayload<'a> {
    url: &'a str,
    format: &'a str,
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Issues download requests and tracks the current attempt's phase.
#[derive(Debug)]
pub struct DownloadMonitor {
    /// Phase of the latest attempt, shared with the worker thread.
    phase: Arc<RwLock<DownloadPhase>>,
    /// Base URL of the backend.
    backend_url: String,
    /// Where saved files land.
    download_dir: PathBuf,
}

impl DownloadMonitor {
    /// Create a monitor talking to the given backend.
    pub fn new(backend_url: String, download_dir: PathBuf) -> Self {
        Self {
            phase: Arc::new(RwLock::new(DownloadPhase::Idle)),
            backend_url,
            download_dir,
        }
    }

    /// Phase of the latest attempt.
    pub fn phase(&self) -> DownloadPhase {
        self.phase
            .read()
            .map(|p| p.clone())
            .unwrap_or(DownloadPhase::Idle)
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.phase().is_busy()
    }

    /// Start a download attempt on a worker thread.
    ///
    /// Returns `false` without issuing a request while an attempt is
    /// already in flight, so at most one request is ever outstanding.
    pub fn submit(&self, url: String, format: DownloadFormat) -> bool {
        {
            let Ok(mut phase) = self.phase.write() else {
                return false;
            };
            if phase.is_busy() {
                return false;
            }
            *phase = DownloadPhase::Submitting;
        }

        let phase = self.phase.clone();
        let endpoint = format!("{}/api/download", self.backend_url.trim_end_matches('/'));
        let download_dir = self.download_dir.clone();

        thread::spawn(move || {
            let outcome = perform_download(&endpoint, &download_dir, &url, format);
            if let Ok(mut p) = phase.write() {
                *p = match outcome {
                    Ok(saved) => DownloadPhase::Succeeded(format!(
                        "Download completed successfully! Saved {saved}"
                    )),
                    Err(msg) => DownloadPhase::Failed(format!("Error: {msg}")),
                };
            }
        });

        true
    }
}

/// POST the request and save the response body under the derived filename.
/// Error values are the user-facing description without the `Error: `
/// prefix.
fn perform_download(
    endpoint: &str,
    download_dir: &Path,
    url: &str,
    format: DownloadFormat,
) -> Result<String, String> {
    // Non-2xx responses must come back as responses, not transport errors,
    // so their JSON error body can be read. No timeout is configured; a
    // hung backend keeps the attempt open.
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let payload = DownloadPayload {
        url,
        format: format.extension(),
    };

    let mut response = agent
        .post(endpoint)
        .send_json(&payload)
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        let body: ErrorBody = response.body_mut().read_json().map_err(|e| e.to_string())?;
        return Err(body.error);
    }

    let bytes = response
        .body_mut()
        .with_config()
        .limit(MAX_DOWNLOAD_BYTES)
        .read_to_vec()
        .map_err(|e| e.to_string())?;

    fs::create_dir_all(download_dir).map_err(|e| e.to_string())?;
    let path = download_dir.join(derive_filename(url, format));
    fs::write(&path, bytes).map_err(|e| e.to_string())?;

    Ok(path.display().to_string())
}

/// Derive the saved filename from the submitted URL.
///
/// The stem is the URL segment after the first `v=` marker, up to the next
/// occurrence if there is one; query parameters that follow ride along. A
/// URL without the marker (playlist links, arbitrary strings) gets the
/// literal stem `undefined`.
pub fn derive_filename(url: &str, format: DownloadFormat) -> String {
    let stem = url.split("v=").nth(1).unwrap_or("undefined");
    format!("{stem}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_derive_filename_from_watch_url() {
        assert_eq!(
            derive_filename(
                "https://www.youtube.com/watch?v=abc123",
                DownloadFormat::Mp4
            ),
            "abc123.mp4"
        );
    }

    #[test]
    fn test_derive_filename_keeps_trailing_params() {
        assert_eq!(
            derive_filename(
                "https://www.youtube.com/watch?v=abc123&t=42s",
                DownloadFormat::Mp3
            ),
            "abc123&t=42s.mp3"
        );
    }

    #[test]
    fn test_derive_filename_stops_at_second_marker() {
        assert_eq!(
            derive_filename("https://example.com/watch?v=abv=c", DownloadFormat::Mp4),
            "ab.mp4"
        );
    }

    #[test]
    fn test_derive_filename_without_marker_is_undefined() {
        // Playlist links carry no v= marker; the stem degrades to the
        // literal "undefined" rather than failing.
        assert_eq!(
            derive_filename(
                "https://www.youtube.com/playlist?list=PL123",
                DownloadFormat::Mp3
            ),
            "undefined.mp3"
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = DownloadPayload {
            url: "https://www.youtube.com/watch?v=abc123",
            format: "mp4",
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"url":"https://www.youtube.com/watch?v=abc123","format":"mp4"}"#
        );
    }

    #[test]
    fn test_error_body_parse() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Video unavailable"}"#).unwrap();
        assert_eq!(body.error, "Video unavailable");
    }

    #[test]
    fn test_monitor_starts_idle() {
        let monitor = DownloadMonitor::new("http://localhost:5000".into(), "downloads".into());
        assert_eq!(monitor.phase(), DownloadPhase::Idle);
        assert!(!monitor.is_busy());
    }

    #[test]
    fn test_submit_is_refused_while_in_flight() {
        let monitor = DownloadMonitor::new("http://localhost:5000".into(), "downloads".into());
        *monitor.phase.write().unwrap() = DownloadPhase::Submitting;

        assert!(!monitor.submit("https://www.youtube.com/watch?v=x".into(), DownloadFormat::Mp4));
        assert_eq!(monitor.phase(), DownloadPhase::Submitting);
    }

    #[test]
    fn test_unreachable_backend_fails_and_reenables() {
        // Nothing listens on port 1; the connection is refused quickly.
        let monitor = DownloadMonitor::new("http://127.0.0.1:1".into(), std::env::temp_dir());
        assert!(monitor.submit(
            "https://www.youtube.com/watch?v=abc123".into(),
            DownloadFormat::Mp4
        ));

        for _ in 0..250 {
            if !monitor.is_busy() {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        match monitor.phase() {
            DownloadPhase::Failed(msg) => assert!(msg.starts_with("Error:")),
            other => panic!("expected a failed phase, got {other:?}"),
        }
        // The control is usable again after a failure.
        assert!(!monitor.is_busy());
    }
}
