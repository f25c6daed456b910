//! Thumbnail loading
//!
//! Best effort only: a failed load leaves the thumbnail blank and is never
//! reported to the user.

use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Display surface for one row thumbnail, initially blank
#[derive(Debug, Clone, Default)]
pub struct Thumbnail {
    bytes: Arc<RwLock<Option<Vec<u8>>>>,
}

impl Thumbnail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.bytes.read().map(|b| b.is_some()).unwrap_or(false)
    }

    /// Size of the loaded image in bytes
    pub fn byte_len(&self) -> Option<usize> {
        self.bytes
            .read()
            .ok()
            .and_then(|b| b.as_ref().map(Vec::len))
    }

    pub fn set(&self, data: Vec<u8>) {
        if let Ok(mut slot) = self.bytes.write() {
            *slot = Some(data);
        }
    }
}

/// Image-loading collaborator
pub trait ImageLoader: Send + Sync {
    /// Start loading `url` into `surface`. Returns immediately.
    fn load_into(&self, url: &str, surface: &Thumbnail);
}

/// Loader that never loads anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImageLoader;

impl ImageLoader for NoopImageLoader {
    fn load_into(&self, _url: &str, _surface: &Thumbnail) {}
}

/// Downloads thumbnails over HTTP on the current tokio runtime
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn download(client: reqwest::Client, url: reqwest::Url) -> Result<Vec<u8>, String> {
        let response = client.get(url).send().await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        Ok(bytes.to_vec())
    }
}

impl ImageLoader for HttpImageLoader {
    fn load_into(&self, url: &str, surface: &Thumbnail) {
        let Ok(parsed) = reqwest::Url::parse(url) else {
            if !url.is_empty() {
                tracing::debug!(url = %url, "Skipping invalid image URL");
            }
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime available for image loading");
            return;
        };

        let client = self.client.clone();
        let surface = surface.clone();
        runtime.spawn(async move {
            match Self::download(client, parsed.clone()).await {
                Ok(bytes) => surface.set(bytes),
                Err(e) => tracing::debug!(url = %parsed, error = %e, "Image load failed"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_starts_blank() {
        let thumb = Thumbnail::new();
        assert!(!thumb.is_loaded());
        assert_eq!(thumb.byte_len(), None);

        let shared = thumb.clone();
        shared.set(vec![1, 2, 3]);
        assert!(thumb.is_loaded());
        assert_eq!(thumb.byte_len(), Some(3));
    }

    #[test]
    fn test_invalid_url_is_ignored() {
        let thumb = Thumbnail::new();
        HttpImageLoader::new(1).load_into("", &thumb);
        HttpImageLoader::new(1).load_into("not a url", &thumb);
        assert!(!thumb.is_loaded());
    }

    #[tokio::test]
    async fn test_unreachable_host_leaves_thumbnail_blank() {
        let thumb = Thumbnail::new();
        HttpImageLoader::new(1).load_into("http://127.0.0.1:9/missing.jpg", &thumb);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!thumb.is_loaded());
    }
}
