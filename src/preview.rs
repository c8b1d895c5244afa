//! Link previews for project cards.
//!
//! A [`PreviewResolver`] turns a URL into a [`PreviewRecord`] the card can
//! render. Records are memoized per exact URL string for the lifetime of the
//! resolver. When the card's image fails to load, the view walks the
//! [`FallbackSequence`] through [`PreviewResolver::next_fallback_image`]
//! until it runs out, then shows [`NO_PREVIEW_IMAGE`].

use std::{future::Future, sync::Arc, time::Duration};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Shown once every fallback provider has failed.
pub const NO_PREVIEW_IMAGE: &str =
    "https://via.placeholder.com/160x160/1e293b/f8fafc?text=No+Preview";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreviewError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRecord {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub domain: String,
    pub favicon: Option<String>,
}

impl PreviewRecord {
    fn derive(url: &str, parsed: &Url, config: &PreviewConfig) -> Self {
        let domain = parsed.host_str().unwrap_or_default().to_string();
        let image = format!(
            "https://image.thum.io/get/width/{}/crop/{}/maxAge/{}/{}",
            config.width,
            config.height,
            config.max_age_hours,
            urlencoding::encode(url)
        );
        // no host, nothing to ask the favicon service for
        let favicon = (!domain.is_empty()).then(|| {
            format!(
                "https://www.google.com/s2/favicons?domain={}&sz={}",
                domain, config.favicon_size
            )
        });
        Self {
            url: url.to_string(),
            title: domain.clone(),
            description: format!("Visit {domain} to learn more about this project"),
            image,
            domain,
            favicon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
    pub max_age_hours: u32,
    pub favicon_size: u32,
    /// Simulated round trip before a fresh record is handed out.
    pub latency: Duration,
    pub urlbox_key: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            max_age_hours: 24,
            favicon_size: 64,
            latency: Duration::from_millis(300),
            urlbox_key: option_env!("URLBOX_API_KEY").unwrap_or("demo").to_string(),
        }
    }
}

/// Suspends a resolution while its record is "fetched".
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// Records keyed by the exact URL string they were resolved from.
#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    entries: Arc<DashMap<String, PreviewRecord>>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<PreviewRecord> {
        self.entries.get(url).map(|r| r.clone())
    }

    pub fn insert(&self, url: &str, record: PreviewRecord) {
        self.entries.insert(url.to_string(), record);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackProvider {
    /// WordPress mShots screenshot service
    MShots { width: u32, height: u32 },
    Urlbox {
        api_key: String,
        width: u32,
        height: u32,
    },
    /// Solid placeholder image with the site's domain as text
    Placeholder {
        width: u32,
        height: u32,
        background: &'static str,
        foreground: &'static str,
    },
}

impl FallbackProvider {
    pub fn image_for(&self, url: &str) -> String {
        match self {
            Self::MShots { width, height } => format!(
                "https://s.wordpress.com/mshots/v1/{}?w={}&h={}",
                urlencoding::encode(url),
                width,
                height
            ),
            Self::Urlbox {
                api_key,
                width,
                height,
            } => format!(
                "https://api.urlbox.io/v1/{}/png?url={}&width={}&height={}",
                api_key,
                urlencoding::encode(url),
                width,
                height
            ),
            Self::Placeholder {
                width,
                height,
                background,
                foreground,
            } => {
                let text = Url::parse(url)
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_string))
                    .unwrap_or_else(|| url.to_string());
                format!(
                    "https://via.placeholder.com/{}x{}/{}/{}?text={}",
                    width,
                    height,
                    background,
                    foreground,
                    urlencoding::encode(&text)
                )
            }
        }
    }
}

/// Image providers tried, in order, after the primary screenshot fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackSequence {
    providers: Arc<Vec<FallbackProvider>>,
}

impl FallbackSequence {
    pub fn new(providers: Vec<FallbackProvider>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    pub fn from_config(config: &PreviewConfig) -> Self {
        let (width, height) = (config.width, config.height);
        Self::new(vec![
            FallbackProvider::MShots { width, height },
            FallbackProvider::Urlbox {
                api_key: config.urlbox_key.clone(),
                width,
                height,
            },
            FallbackProvider::Placeholder {
                width,
                height,
                background: "3b82f6",
                foreground: "ffffff",
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// `None` once `attempt` runs past the last provider.
    pub fn image_for(&self, url: &str, attempt: usize) -> Option<String> {
        self.providers.get(attempt).map(|p| p.image_for(url))
    }
}

#[derive(Debug, Clone)]
pub struct PreviewResolver<D> {
    cache: PreviewCache,
    config: Arc<PreviewConfig>,
    fallbacks: FallbackSequence,
    delay: D,
}

impl<D: Delay> PreviewResolver<D> {
    pub fn new(delay: D, config: PreviewConfig) -> Self {
        let fallbacks = FallbackSequence::from_config(&config);
        Self::with_fallbacks(delay, config, fallbacks)
    }

    pub fn with_fallbacks(delay: D, config: PreviewConfig, fallbacks: FallbackSequence) -> Self {
        Self {
            cache: PreviewCache::new(),
            config: Arc::new(config),
            fallbacks,
            delay,
        }
    }

    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    pub fn fallbacks(&self) -> &FallbackSequence {
        &self.fallbacks
    }

    /// Returns the cached record for `url`, deriving and caching it on a miss.
    ///
    /// Overlapping misses for the same URL each derive; the last insert wins.
    pub async fn resolve(&self, url: &str) -> Result<PreviewRecord, PreviewError> {
        let parsed = Url::parse(url).map_err(|source| PreviewError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        if let Some(record) = self.cache.get(url) {
            return Ok(record);
        }

        log::debug!("preview cache miss for {url}");
        self.delay.wait(self.config.latency).await;
        let record = PreviewRecord::derive(url, &parsed, &self.config);
        self.cache.insert(url, record.clone());
        Ok(record)
    }

    /// `attempt` is the number of images that already failed for this display.
    pub fn next_fallback_image(&self, url: &str, attempt: usize) -> Option<String> {
        self.fallbacks.image_for(url, attempt)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;

    use super::*;

    // Counts waits, one per derivation
    #[derive(Debug, Clone, Default)]
    struct CountingDelay {
        waits: Arc<AtomicUsize>,
    }

    impl CountingDelay {
        fn count(&self) -> usize {
            self.waits.load(Ordering::SeqCst)
        }
    }

    impl Delay for CountingDelay {
        async fn wait(&self, _duration: Duration) {
            self.waits.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn resolver() -> PreviewResolver<NoDelay> {
        PreviewResolver::new(NoDelay, PreviewConfig::default())
    }

    #[test]
    fn test_domain_is_hostname() {
        let resolver = resolver();
        for (url, host) in [
            ("https://example.com", "example.com"),
            ("http://sub.example.org:8080/path?q=1", "sub.example.org"),
            (
                "http://ec2-65-0-183-137.ap-south-1.compute.amazonaws.com/",
                "ec2-65-0-183-137.ap-south-1.compute.amazonaws.com",
            ),
        ] {
            let record = block_on(resolver.resolve(url)).unwrap();
            assert_eq!(record.domain, host);
            assert_eq!(record.title, host);
            assert_eq!(record.url, url);
        }
    }

    #[test]
    fn test_second_resolve_hits_cache() {
        let delay = CountingDelay::default();
        let resolver = PreviewResolver::new(delay.clone(), PreviewConfig::default());

        let first = block_on(resolver.resolve("https://example.com")).unwrap();
        let second = block_on(resolver.resolve("https://example.com")).unwrap();

        assert_eq!(first, second);
        assert_eq!(delay.count(), 1);
        assert_eq!(resolver.cache().len(), 1);
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let delay = CountingDelay::default();
        let resolver = PreviewResolver::new(delay.clone(), PreviewConfig::default());

        block_on(resolver.resolve("https://example.com")).unwrap();
        block_on(resolver.resolve("https://example.com/")).unwrap();

        assert_eq!(delay.count(), 2);
        assert!(resolver.cache().contains("https://example.com"));
        assert!(resolver.cache().contains("https://example.com/"));
    }

    #[test]
    fn test_invalid_url_is_not_cached() {
        let resolver = resolver();
        block_on(resolver.resolve("https://example.com")).unwrap();
        let before = resolver.cache().len();

        let err = block_on(resolver.resolve("not a url")).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidUrl { ref url, .. } if url == "not a url"));
        assert_eq!(resolver.cache().len(), before);

        // a bare host is relative, not absolute
        assert!(block_on(resolver.resolve("example.com")).is_err());
        assert_eq!(resolver.cache().len(), before);
    }

    #[test]
    fn test_seabirds_record() {
        let resolver = resolver();
        let record = block_on(resolver.resolve("https://seabirdspictures.com/")).unwrap();

        assert_eq!(record.domain, "seabirdspictures.com");
        assert_eq!(
            record.description,
            "Visit seabirdspictures.com to learn more about this project"
        );
        assert!(!record.image.is_empty());
        assert!(record.image.contains("https%3A%2F%2Fseabirdspictures.com%2F"));
        assert_eq!(
            record.favicon.as_deref(),
            Some("https://www.google.com/s2/favicons?domain=seabirdspictures.com&sz=64")
        );
    }

    #[test]
    fn test_hostless_url_has_no_favicon() {
        let resolver = resolver();
        let record = block_on(resolver.resolve("mailto:someone@example.com")).unwrap();
        assert_eq!(record.domain, "");
        assert_eq!(record.favicon, None);
    }

    #[test]
    fn test_fallbacks_in_order_then_exhausted() {
        let resolver = resolver();
        let url = "https://seabirdspictures.com/";
        assert_eq!(resolver.fallbacks().len(), 3);

        let first = resolver.next_fallback_image(url, 0).unwrap();
        let second = resolver.next_fallback_image(url, 1).unwrap();
        let third = resolver.next_fallback_image(url, 2).unwrap();
        assert!(first.starts_with("https://s.wordpress.com/mshots/v1/"));
        assert!(second.starts_with("https://api.urlbox.io/v1/"));
        assert!(third.starts_with("https://via.placeholder.com/1200x630/"));
        assert!(third.ends_with("text=seabirdspictures.com"));

        assert_eq!(resolver.next_fallback_image(url, 3), None);
        assert_eq!(resolver.next_fallback_image(url, 100), None);
    }

    #[test]
    fn test_fallback_is_pure() {
        let resolver = resolver();
        for i in 0..4 {
            assert_eq!(
                resolver.next_fallback_image("https://example.com", i),
                resolver.next_fallback_image("https://example.com", i)
            );
        }
        // does not touch the cache
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_simulated_image_failures() {
        let resolver = resolver();
        let url = "https://example.com/app";
        let record = block_on(resolver.resolve(url)).unwrap();

        // the view swaps images as each one fails to load
        let mut shown = record.image.clone();
        let mut attempt = 0;
        while let Some(next) = resolver.next_fallback_image(url, attempt) {
            assert_ne!(next, shown);
            shown = next;
            attempt += 1;
        }
        assert_eq!(attempt, 3);

        // cached record keeps the primary image
        assert_eq!(resolver.cache().get(url).unwrap().image, record.image);
    }

    #[test]
    fn test_placeholder_with_unparseable_url() {
        let placeholder = FallbackProvider::Placeholder {
            width: 10,
            height: 10,
            background: "000000",
            foreground: "ffffff",
        };
        assert_eq!(
            placeholder.image_for("not a url"),
            "https://via.placeholder.com/10x10/000000/ffffff?text=not%20a%20url"
        );
    }

    #[test]
    fn test_empty_sequence() {
        let resolver =
            PreviewResolver::with_fallbacks(NoDelay, PreviewConfig::default(), FallbackSequence::new(vec![]));
        assert!(resolver.fallbacks().is_empty());
        assert_eq!(resolver.next_fallback_image("https://example.com", 0), None);
    }

    #[test]
    fn test_clones_share_cache() {
        let resolver = resolver();
        let other = resolver.clone();
        block_on(resolver.resolve("https://example.com")).unwrap();
        assert!(other.cache().contains("https://example.com"));
    }
}
