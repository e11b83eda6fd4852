// Public-page cache invalidation collaborator.
//
// Admin mutations call this exactly once after the store operation
// succeeds, never before. Invalidation failure is logged and does not
// fail the request; the public site simply serves stale pages until the
// next successful refresh.

use std::sync::Arc;

use async_trait::async_trait;

pub type SharedCacheInvalidator = Arc<dyn CacheInvalidator>;

#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    async fn invalidate_public_pages(&self);
}

/// POSTs to the hosting platform's revalidate hook, if one is configured.
pub struct HttpCacheInvalidator {
    client: reqwest::Client,
}

impl HttpCacheInvalidator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpCacheInvalidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInvalidator for HttpCacheInvalidator {
    async fn invalidate_public_pages(&self) {
        let cache = &crate::config::config().cache;
        let Some(url) = cache.revalidate_url.as_deref() else {
            tracing::debug!("no revalidate hook configured, skipping cache invalidation");
            return;
        };

        let mut request = self.client.post(url);
        if let Some(secret) = cache.revalidate_secret.as_deref() {
            request = request.header("x-revalidate-secret", secret);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("public page cache invalidated");
            }
            Ok(response) => {
                tracing::warn!("cache invalidation hook returned {}", response.status());
            }
            Err(e) => {
                tracing::warn!("cache invalidation hook failed: {}", e);
            }
        }
    }
}

/// Does nothing. Backs tests and deployments without a revalidate hook.
pub struct NoopCacheInvalidator;

#[async_trait]
impl CacheInvalidator for NoopCacheInvalidator {
    async fn invalidate_public_pages(&self) {}
}
