//! Single-file upload with byte progress

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Multipart field name the backend expects
pub const UPLOAD_FIELD: &str = "image";

/// Size of the chunks handed to the transport
const CHUNK_SIZE: usize = 64 * 1024;

/// Progress of the current upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadProgress {
    /// 0..=100
    pub percent: u8,
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload rejected with status {status}")]
    Status { status: u16, body: String },
    #[error("upload transport error: {0}")]
    Transport(String),
    #[error("upload cancelled")]
    Cancelled,
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid upload response: {0}")]
    Decode(String),
}

/// File contents staged for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a local file
    pub async fn from_path(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// Request body as a stream of chunks; progress advances as chunks are pulled
pub struct UploadBody {
    pub file_name: String,
    pub total: u64,
    pub chunks: BoxStream<'static, Result<Bytes, std::io::Error>>,
}

/// Carries one upload to `endpoint` and returns the stored path
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn send(&self, endpoint: &str, body: UploadBody) -> Result<String, UploadError>;
}

/// Runs uploads and publishes their progress.
///
/// One upload at a time: a second call before the first resolves replaces
/// the cancellation handle and shares the progress slot. Callers serialize.
#[derive(Clone)]
pub struct UploadHelper {
    transport: Arc<dyn UploadTransport>,
    progress: Arc<watch::Sender<UploadProgress>>,
    in_flight: Arc<Mutex<Option<CancellationToken>>>,
}

impl UploadHelper {
    pub fn new(transport: Arc<dyn UploadTransport>) -> Self {
        let (progress, _) = watch::channel(UploadProgress::default());
        Self {
            transport,
            progress: Arc::new(progress),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadProgress> {
        self.progress.subscribe()
    }

    pub fn progress(&self) -> UploadProgress {
        self.progress.borrow().clone()
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.lock().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Upload `file` to `endpoint`.
    ///
    /// Returns `Ok(None)` straight away when there is no file.
    pub async fn upload(
        &self,
        file: Option<UploadFile>,
        endpoint: &str,
    ) -> Result<Option<String>, UploadError> {
        let Some(file) = file else {
            return Ok(None);
        };

        let token = CancellationToken::new();
        if let Ok(mut slot) = self.in_flight.lock() {
            *slot = Some(token.clone());
        }
        self.progress.send_replace(UploadProgress::default());

        tracing::info!(file = %file.file_name, size = file.bytes.len(), endpoint, "starting upload");
        let body = progress_body(file, self.progress.clone());

        let result = tokio::select! {
            _ = token.cancelled() => Err(UploadError::Cancelled),
            res = self.transport.send(endpoint, body) => res,
        };

        if let Ok(mut slot) = self.in_flight.lock() {
            *slot = None;
        }

        match &result {
            Ok(path) => {
                tracing::info!(path = %path, "upload finished");
                self.progress.send_modify(|p| p.percent = 100);
            }
            // cancel() already reset the progress slot
            Err(UploadError::Cancelled) => tracing::info!("upload cancelled"),
            Err(err) => {
                tracing::warn!("upload failed: {err}");
                let message = err.to_string();
                self.progress.send_modify(|p| p.error = Some(message));
            }
        }

        result.map(Some)
    }

    /// Abort the in-flight upload, if any, and reset progress
    pub fn cancel(&self) {
        if let Ok(mut slot) = self.in_flight.lock() {
            if let Some(token) = slot.take() {
                token.cancel();
            }
        }
        self.progress.send_replace(UploadProgress::default());
    }
}

/// Percentage of `sent` over `total`, clamped to 100
pub fn percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    (sent.saturating_mul(100) / total).min(100) as u8
}

fn progress_body(file: UploadFile, progress: Arc<watch::Sender<UploadProgress>>) -> UploadBody {
    let total = file.bytes.len() as u64;
    let mut chunks = Vec::with_capacity(file.bytes.len() / CHUNK_SIZE + 1);
    let mut rest = file.bytes;
    while !rest.is_empty() {
        let take = rest.len().min(CHUNK_SIZE);
        chunks.push(rest.split_to(take));
    }

    let mut sent = 0u64;
    let chunks = stream::iter(chunks)
        .map(move |chunk| {
            sent += chunk.len() as u64;
            let pct = percent(sent, total);
            // Only ever moves forward
            progress.send_if_modified(|p| {
                if pct > p.percent {
                    p.percent = pct;
                    true
                } else {
                    false
                }
            });
            Ok::<_, std::io::Error>(chunk)
        })
        .boxed();

    UploadBody {
        file_name: file.file_name,
        total,
        chunks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    /// Transport that drains the body slowly and records the progress it sees
    struct SlowTransport {
        progress: watch::Receiver<UploadProgress>,
        seen: Mutex<Vec<u8>>,
        delay: Duration,
    }

    #[async_trait]
    impl UploadTransport for SlowTransport {
        async fn send(&self, _endpoint: &str, mut body: UploadBody) -> Result<String, UploadError> {
            self.seen.lock().unwrap().push(self.progress.borrow().percent);
            let mut received = 0u64;
            while let Some(chunk) = body.chunks.next().await {
                received += chunk.unwrap().len() as u64;
                self.seen.lock().unwrap().push(self.progress.borrow().percent);
                tokio::time::sleep(self.delay).await;
            }
            assert_eq!(received, body.total);
            Ok(format!("uploads/{}", body.file_name))
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl UploadTransport for FailingTransport {
        async fn send(&self, _endpoint: &str, _body: UploadBody) -> Result<String, UploadError> {
            Err(UploadError::Status {
                status: 413,
                body: "too large".to_string(),
            })
        }
    }

    /// Transport that never finishes on its own
    struct HangingTransport;

    #[async_trait]
    impl UploadTransport for HangingTransport {
        async fn send(&self, _endpoint: &str, _body: UploadBody) -> Result<String, UploadError> {
            std::future::pending().await
        }
    }

    fn slow_helper(delay: Duration) -> (UploadHelper, Arc<SlowTransport>) {
        // The receiver must observe the helper's own channel, so build the
        // helper around a placeholder and swap the transport in afterwards.
        let placeholder = UploadHelper::new(Arc::new(FailingTransport));
        let transport = Arc::new(SlowTransport {
            progress: placeholder.subscribe(),
            seen: Mutex::new(Vec::new()),
            delay,
        });
        let helper = UploadHelper {
            transport: transport.clone(),
            ..placeholder
        };
        (helper, transport)
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 200), 0);
        assert_eq!(percent(100, 200), 50);
        assert_eq!(percent(200, 200), 100);
        assert_eq!(percent(300, 200), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("eventdesk-missing-upload.png");
        let err = tokio_test::block_on(UploadFile::from_path(&path)).unwrap_err();
        assert!(matches!(err, UploadError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn test_from_path_uses_file_name() {
        let path = std::env::temp_dir().join("eventdesk-from-path.png");
        std::fs::write(&path, b"png").unwrap();
        let file = tokio_test::block_on(UploadFile::from_path(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(file.file_name, "eventdesk-from-path.png");
        assert_eq!(file.bytes.as_ref(), b"png");
    }

    #[tokio::test]
    async fn test_no_file_returns_none() {
        let helper = UploadHelper::new(Arc::new(FailingTransport));
        let result = helper.upload(None, "/admin/uploads/image").await.unwrap();
        assert!(result.is_none());
        assert_eq!(helper.progress(), UploadProgress::default());
    }

    #[tokio::test]
    async fn test_progress_is_non_decreasing_over_slow_channel() {
        let (helper, transport) = slow_helper(Duration::from_millis(1));
        let file = UploadFile::new("venue.jpg", vec![7u8; 10 * 1024 * 1024]);

        let path = helper
            .upload(Some(file), "/admin/uploads/image")
            .await
            .unwrap();

        assert_eq!(path.as_deref(), Some("uploads/venue.jpg"));
        let seen = transport.seen.lock().unwrap().clone();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress went backwards: {seen:?}");
        assert_eq!(helper.progress().percent, 100);
        assert!(!helper.is_uploading());
    }

    #[tokio::test]
    async fn test_non_2xx_sets_error() {
        let helper = UploadHelper::new(Arc::new(FailingTransport));
        let file = UploadFile::new("a.png", vec![1u8; 10]);
        let err = helper
            .upload(Some(file), "/admin/uploads/image")
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Status { status: 413, .. }));
        assert_eq!(
            helper.progress().error.as_deref(),
            Some("upload rejected with status 413")
        );
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_upload() {
        let helper = UploadHelper::new(Arc::new(HangingTransport));
        let runner = helper.clone();
        let task = tokio::spawn(async move {
            runner
                .upload(Some(UploadFile::new("a.png", vec![1u8; 10])), "/x")
                .await
        });

        while !helper.is_uploading() {
            tokio::task::yield_now().await;
        }
        helper.cancel();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(UploadError::Cancelled)));
        assert_eq!(helper.progress(), UploadProgress::default());
        assert!(!helper.is_uploading());
    }
}
