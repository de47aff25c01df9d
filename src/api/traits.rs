use crate::api::models::VideoMetadata;
use crate::utils::error::SaverError;
use async_trait::async_trait;

/// Core trait for the remote video backend
///
/// The session controller only talks to this trait, so the HTTP transport can
/// be swapped for a scripted one in tests.
#[async_trait]
pub trait VideoBackend: Send + Sync {
    /// Origin the backend is reached at, without trailing slash
    fn base_url(&self) -> &str;

    /// Liveness probe against the backend root; any 2xx counts as awake
    async fn ping(&self) -> Result<(), SaverError>;

    /// Resolve a page URL into metadata and quality options
    async fn fetch_info(&self, url: &str) -> Result<VideoMetadata, SaverError>;

    /// Address that streams the file for `url` in the given quality
    ///
    /// The quality token is passed through untouched. `urlencoding` also
    /// escapes `!'()*`, which the server decodes back to the same URL.
    fn download_url(&self, url: &str, quality: &str) -> String {
        format!(
            "{}/api/download?url={}&quality={}",
            self.base_url(),
            urlencoding::encode(url),
            quality
        )
    }
}
