//! CatalogProvider implementations: remote sheet, local file, built-in list,
//! and a TTL cache in front of any of them.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::domain::{CatalogProvider, DomainError};
use crate::import::parse_catalog_csv;
use crate::infrastructure::seed::default_catalog;
use crate::models::BookRecord;

/// Published spreadsheet exported as CSV over HTTP
pub struct SheetProvider {
    url: String,
    client: reqwest::Client,
}

impl SheetProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::DataUnavailable(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CatalogProvider for SheetProvider {
    async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::DataUnavailable(format!("Request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::DataUnavailable(format!(
                "Feed returned status {}",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| DomainError::DataUnavailable(format!("Failed to read feed: {}", e)))?;

        let books = parse_catalog_csv(&body)?;
        tracing::info!("Fetched {} books from catalog feed", books.len());
        Ok(books)
    }
}

/// CSV file on local disk
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for FileProvider {
    async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError> {
        let content = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::DataUnavailable(format!("Failed to read {:?}: {}", self.path, e))
        })?;
        parse_catalog_csv(&content)
    }
}

/// Fixed in-memory list
pub struct StaticProvider {
    records: Vec<BookRecord>,
}

impl StaticProvider {
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

#[async_trait]
impl CatalogProvider for StaticProvider {
    async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError> {
        Ok(self.records.clone())
    }
}

/// Serves the last successful fetch for `ttl`, then refetches.
/// Failed fetches are not cached. A zero `ttl` disables caching.
pub struct CachedProvider {
    inner: Arc<dyn CatalogProvider>,
    ttl: Duration,
    cache: Mutex<Option<(Instant, Vec<BookRecord>)>>,
}

impl CachedProvider {
    pub fn new(inner: Arc<dyn CatalogProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: Mutex::new(None),
        }
    }
}

#[async_trait]
impl CatalogProvider for CachedProvider {
    async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError> {
        // Held across the fetch so concurrent misses trigger a single request
        let mut cache = self.cache.lock().await;

        if let Some((fetched_at, books)) = cache.as_ref()
            && fetched_at.elapsed() < self.ttl
        {
            return Ok(books.clone());
        }

        let books = self.inner.fetch().await?;
        *cache = Some((Instant::now(), books.clone()));
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CatalogProvider for CountingProvider {
        async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::DataUnavailable("down".to_string()));
            }
            Ok(vec![BookRecord::new("Cosmos", "Carl Sagan", "", "Curious")])
        }
    }

    fn counting(fail: bool) -> Arc<CountingProvider> {
        Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[tokio::test]
    async fn test_cache_serves_within_ttl() {
        let inner = counting(false);
        let cached = CachedProvider::new(inner.clone(), Duration::from_secs(60));

        cached.fetch().await.unwrap();
        let books = cached.fetch().await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refetches() {
        let inner = counting(false);
        let cached = CachedProvider::new(inner.clone(), Duration::ZERO);

        cached.fetch().await.unwrap();
        cached.fetch().await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let inner = counting(true);
        let cached = CachedProvider::new(inner.clone(), Duration::from_secs(60));

        assert!(cached.fetch().await.is_err());
        assert!(cached.fetch().await.is_err());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_file_provider_reads_csv() {
        let path =
            std::env::temp_dir().join(format!("moodshelf-{}.csv", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "title,author,note,category\nHatchet,Gary Paulsen,,Adventurous\n")
            .await
            .unwrap();

        let books = FileProvider::new(&path).fetch().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].category, "Adventurous");
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let provider = FileProvider::new("/nonexistent/moodshelf/catalog.csv");
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_static_provider_defaults_to_seed() {
        let books = StaticProvider::default().fetch().await.unwrap();
        assert!(!books.is_empty());
    }
}
