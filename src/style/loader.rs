//! Style-document fetching and endpoint publication.
//!
//! Fetches run on detached threads and report back over an `mpsc` channel.
//! Every request carries a generation number; `poll` publishes only results
//! matching the latest request, so overlapping fetches resolve
//! last-write-wins. No cancellation, no retry, no backpressure.

use crate::{
    core::constants::{API_KEY_HEADER, STYLE_CACHE_CAPACITY},
    style::{
        document::StyleDocument,
        resolver::{resolve_tile_endpoint, ResolverOptions},
    },
    tiles::source::TileEndpoint,
    Result,
};
use lru::LruCache;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use std::num::NonZeroUsize;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

/// Shared blocking HTTP client with a custom User-Agent so that public style
/// servers don't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every fetch.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("tileshade/0.1 (+https://github.com/example/tileshade)")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// Loader configuration.
#[derive(Debug, Clone, Default)]
pub struct StyleLoaderOptions {
    /// API key injected as `x-api-key` on every style request.
    pub api_key: Option<String>,
    /// URL-rewrite knobs handed to the resolver.
    pub resolver: ResolverOptions,
}

/// Fetches style documents and publishes the derived tile endpoint.
///
/// The endpoint is always a pure function of the latest `(style URL,
/// from_cache)` pair; a superseding request simply lets the newest
/// resolution win.
pub struct StyleLoader {
    options: StyleLoaderOptions,
    tx: Sender<(u64, Option<StyleDocument>)>,
    rx: Receiver<(u64, Option<StyleDocument>)>,
    generation: u64,
    inflight: bool,
    latest_url: Option<String>,
    from_cache: bool,
    cache: LruCache<String, StyleDocument>,
    endpoint: Option<TileEndpoint>,
}

impl StyleLoader {
    pub fn new(options: StyleLoaderOptions) -> Self {
        let (tx, rx) = channel();
        let capacity =
            NonZeroUsize::new(STYLE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::new(1).unwrap());

        Self {
            options,
            tx,
            rx,
            generation: 0,
            inflight: false,
            latest_url: None,
            from_cache: false,
            cache: LruCache::new(capacity),
            endpoint: None,
        }
    }

    /// Request resolution for a style URL and cache flag. Triggered whenever
    /// either input changes.
    ///
    /// A cached document resolves synchronously (a cache-flag toggle does not
    /// re-fetch); otherwise a fetch thread is spawned and the result lands on
    /// the next `poll`.
    pub fn request(&mut self, style_url: &str, from_cache: bool) {
        self.generation += 1;
        self.from_cache = from_cache;
        self.latest_url = Some(style_url.to_string());

        if let Some(doc) = self.cache.get(style_url) {
            log::debug!("style {:?} served from cache", style_url);
            self.endpoint = resolve_tile_endpoint(doc, &self.options.resolver, from_cache);
            self.inflight = false;
            return;
        }

        self.inflight = true;
        let url = style_url.to_string();
        let generation = self.generation;
        let api_key = self.options.api_key.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            log::debug!("fetching style {:?} (generation {})", url, generation);
            let result: Result<StyleDocument> = (|| {
                let mut request = HTTP_CLIENT.get(&url);
                if let Some(key) = &api_key {
                    request = request.header(API_KEY_HEADER, key);
                }
                let response = request.send()?.error_for_status()?;
                Ok(response.json::<StyleDocument>()?)
            })();

            match result {
                Ok(doc) => {
                    log::info!("style {:?} fetched ({} sources)", url, doc.sources.len());
                    let _ = tx.send((generation, Some(doc)));
                }
                Err(e) => {
                    log::warn!("style fetch {:?} failed: {}", url, e);
                    let _ = tx.send((generation, None));
                }
            }
        });
    }

    /// Drain completed fetches and publish the current endpoint. Results
    /// from superseded requests are discarded.
    pub fn poll(&mut self) -> Option<&TileEndpoint> {
        loop {
            match self.rx.try_recv() {
                Ok((generation, doc)) => {
                    if generation != self.generation {
                        log::debug!("discarding superseded style fetch (generation {})", generation);
                        continue;
                    }
                    self.inflight = false;
                    match doc {
                        Some(doc) => {
                            self.endpoint =
                                resolve_tile_endpoint(&doc, &self.options.resolver, self.from_cache);
                            if let Some(url) = &self.latest_url {
                                self.cache.put(url.clone(), doc);
                            }
                        }
                        // Failed fetch: empty resolution, overlay disabled
                        None => self.endpoint = None,
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        self.endpoint.as_ref()
    }

    /// Latest published endpoint, if any.
    pub fn endpoint(&self) -> Option<&TileEndpoint> {
        self.endpoint.as_ref()
    }

    /// True while a fetch for the latest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.inflight
    }

    /// Headers to send with tile requests against the resolved endpoint.
    pub fn request_headers(&self) -> std::collections::HashMap<String, String> {
        let mut headers = std::collections::HashMap::new();
        if let Some(key) = &self.options.api_key {
            headers.insert(API_KEY_HEADER.to_string(), key.clone());
        }
        headers
    }
}
