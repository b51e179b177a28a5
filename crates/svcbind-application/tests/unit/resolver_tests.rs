//! Tests for the single-flight catalog resolver

use svcbind_providers as _;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use svcbind_application::catalog::MalformedPolicy;
use svcbind_application::resolver::CatalogResolver;
use svcbind_domain::error::{Error, Result};
use svcbind_domain::ports::infrastructure::{BindingSource, RawBinding};

fn binding(id: &str, scheme: &str, uri: &str) -> RawBinding {
    RawBinding {
        id: id.to_string(),
        scheme: scheme.to_string(),
        uri: uri.to_string(),
        kind: None,
    }
}

/// Mock source that counts fetches and serves scripted per-call results
struct CountingSource {
    calls: AtomicUsize,
    script: Vec<Option<Vec<RawBinding>>>,
}

impl CountingSource {
    fn serving(bindings: Vec<RawBinding>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script: vec![Some(bindings)],
        }
    }

    /// One script entry per expected call; `None` fails that call. The
    /// last entry repeats for any further calls.
    fn scripted(script: Vec<Option<Vec<RawBinding>>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BindingSource for CountingSource {
    async fn fetch_raw_bindings(&self) -> Result<Vec<RawBinding>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.get(call).unwrap_or_else(|| {
            self.script.last().expect("script must not be empty")
        });
        match step {
            Some(bindings) => Ok(bindings.clone()),
            None => Err(Error::source_unavailable("scripted outage")),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_first_access_fetches_exactly_once() {
    let source = Arc::new(CountingSource::serving(vec![binding(
        "redis-1",
        "redis",
        "redis://cachehost:6379",
    )]));
    let resolver = Arc::new(CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    ));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let resolver = Arc::clone(&resolver);
        tasks.push(tokio::spawn(async move { resolver.resolve().await }));
    }

    let mut catalogs = Vec::new();
    for task in tasks {
        catalogs.push(task.await.unwrap().unwrap());
    }

    assert_eq!(source.call_count(), 1);
    // Every caller observes the same completed catalog
    for catalog in &catalogs {
        assert!(Arc::ptr_eq(catalog, &catalogs[0]));
    }
}

#[tokio::test]
async fn source_failure_surfaces_as_catalog_unavailable_and_is_not_cached() {
    let source = Arc::new(CountingSource::scripted(vec![
        None,
        Some(vec![binding("redis-1", "redis", "redis://cachehost:6379")]),
    ]));
    let resolver = CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    );

    let err = resolver.resolve().await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable { .. }));

    // The failure was not cached: the next call retries and succeeds
    let catalog = resolver.resolve().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn successful_resolve_is_cached() {
    let source = Arc::new(CountingSource::serving(vec![binding(
        "redis-1",
        "redis",
        "redis://cachehost:6379",
    )]));
    let resolver = CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    );

    let first = resolver.resolve().await.unwrap();
    let second = resolver.resolve().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_serving_the_previous_catalog() {
    let source = Arc::new(CountingSource::scripted(vec![
        Some(vec![binding("redis-1", "redis", "redis://cachehost:6379")]),
        None,
    ]));
    let resolver = CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    );

    let original = resolver.resolve().await.unwrap();

    let err = resolver.refresh().await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable { .. }));

    let still_served = resolver.resolve().await.unwrap();
    assert!(Arc::ptr_eq(&original, &still_served));
}

#[tokio::test]
async fn successful_refresh_swaps_in_the_new_catalog() {
    let source = Arc::new(CountingSource::scripted(vec![
        Some(vec![binding("redis-1", "redis", "redis://cachehost:6379")]),
        Some(vec![
            binding("redis-1", "redis", "redis://cachehost:6379"),
            binding("redis-2", "redis", "redis://otherhost:6380"),
        ]),
    ]));
    let resolver = CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    );

    assert_eq!(resolver.resolve().await.unwrap().len(), 1);

    let refreshed = resolver.refresh().await.unwrap();
    assert_eq!(refreshed.len(), 2);

    let served = resolver.resolve().await.unwrap();
    assert!(Arc::ptr_eq(&refreshed, &served));
}

#[tokio::test]
async fn malformed_entry_aborts_resolution_by_default() {
    let source = Arc::new(CountingSource::serving(vec![binding(
        "bad-1",
        "oracle",
        "oracle://dbhost:notaport/orcl",
    )]));
    let resolver = CatalogResolver::new(
        Arc::clone(&source) as Arc<dyn BindingSource>,
        MalformedPolicy::Abort,
    );

    let err = resolver.resolve().await.unwrap_err();
    assert!(matches!(err, Error::MalformedCredential { .. }));
}
