//! The design document client.

use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use indexmap::IndexMap;
use rayon::prelude::*;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    ClientError,
    cache::{CacheKey, ResponseCache},
    model::{FileNodesResponse, ImagesResponse},
    transport::{HttpTransport, Transport},
};

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
/// Upper bound on ids per image-export request accepted by the service.
pub const DEFAULT_BATCH_SIZE: usize = 80;

/// Raster or vector format for exported assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    #[default]
    Png,
    Svg,
    Jpg,
}

impl AssetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetFormat::Png => "png",
            AssetFormat::Svg => "svg",
            AssetFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(AssetFormat::Png),
            "svg" => Ok(AssetFormat::Svg),
            "jpg" | "jpeg" => Ok(AssetFormat::Jpg),
            _ => Err(format!(
                "unknown asset format '{}', expected 'png', 'svg' or 'jpg'",
                s
            )),
        }
    }
}

/// Connection settings for [`DocumentClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
    pub cache_ttl: Duration,
    pub batch_size: usize,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

/// Fetches design subtrees and exports assets.
///
/// Subtree responses are cached in memory for [`ClientConfig::cache_ttl`].
/// The client is `Sync`; asset batches are issued from the rayon pool.
pub struct DocumentClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    cache: ResponseCache<FileNodesResponse>,
}

impl DocumentClient {
    /// Client using the blocking HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        let cache = ResponseCache::new(config.cache_ttl);
        Self {
            config,
            transport: Box::new(transport),
            cache,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the subtrees rooted at `node_ids`.
    ///
    /// Every requested id must be present in the response; a missing or
    /// `null` entry is reported as [`ClientError::NotFound`].
    #[instrument(skip(self), fields(ids = node_ids.len()))]
    pub fn fetch_subtree(
        &self,
        file_key: &str,
        node_ids: &[String],
    ) -> Result<Arc<FileNodesResponse>, ClientError> {
        validate_file_key(file_key)?;
        if node_ids.is_empty() || node_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(ClientError::InvalidRequest(
                "at least one non-empty node id is required".into(),
            ));
        }

        let key = CacheKey::new(file_key, node_ids);
        if let Some(cached) = self.cache.get(&key) {
            debug!("subtree cache hit");
            return Ok(cached);
        }

        let url = self.url(
            &format!("files/{file_key}/nodes"),
            &[("ids", node_ids.join(","))],
        )?;
        info!(%file_key, "fetching design subtree");
        let response = self.transport.get(url.as_str(), &self.config.access_token)?;
        if !response.is_success() {
            return Err(ClientError::from_status(
                response.status,
                &response.body,
                file_key,
                node_ids,
            ));
        }

        let document: FileNodesResponse = serde_json::from_str(&response.body)?;
        for id in node_ids {
            if document.node(id).is_none() {
                return Err(ClientError::NotFound {
                    file_key: file_key.to_string(),
                    ids: vec![id.clone()],
                });
            }
        }

        let document = Arc::new(document);
        self.cache.insert(key, Arc::clone(&document));
        Ok(document)
    }

    /// Request rendered-asset URLs for `node_ids`.
    ///
    /// The result has one entry per requested id, in request order; ids the
    /// service could not render map to `None`. A failed batch degrades to
    /// `None` for its ids, except credential errors, which are returned.
    #[instrument(skip(self, node_ids), fields(ids = node_ids.len()))]
    pub fn export_assets(
        &self,
        file_key: &str,
        node_ids: &[String],
        format: AssetFormat,
        scale: f64,
    ) -> Result<IndexMap<String, Option<String>>, ClientError> {
        validate_file_key(file_key)?;
        if !(scale > 0.0 && scale <= 4.0) {
            return Err(ClientError::InvalidRequest(format!(
                "asset scale must be in (0, 4], got {scale}"
            )));
        }

        let mut urls: IndexMap<String, Option<String>> =
            node_ids.iter().map(|id| (id.clone(), None)).collect();
        if node_ids.is_empty() {
            return Ok(urls);
        }

        let batches: Vec<&[String]> = node_ids.chunks(self.config.batch_size.max(1)).collect();
        debug!(batches = batches.len(), "exporting assets");
        let results: Vec<_> = batches
            .par_iter()
            .map(|batch| (*batch, self.export_batch(file_key, batch, format, scale)))
            .collect();

        for (batch, result) in results {
            match result {
                Ok(images) => {
                    for id in batch {
                        if let Some(Some(url)) = images.images.get(id)
                            && !url.is_empty()
                        {
                            urls.insert(id.clone(), Some(url.clone()));
                        }
                    }
                }
                Err(err) if err.is_credential() => return Err(err),
                Err(err) => {
                    warn!(error = %err, ids = batch.len(), "asset batch failed");
                }
            }
        }

        Ok(urls)
    }

    fn export_batch(
        &self,
        file_key: &str,
        batch: &[String],
        format: AssetFormat,
        scale: f64,
    ) -> Result<ImagesResponse, ClientError> {
        let url = self.url(
            &format!("images/{file_key}"),
            &[
                ("ids", batch.join(",")),
                ("format", format.to_string()),
                ("scale", scale.to_string()),
            ],
        )?;
        let response = self.transport.get(url.as_str(), &self.config.access_token)?;
        if !response.is_success() {
            return Err(ClientError::from_status(
                response.status,
                &response.body,
                file_key,
                batch,
            ));
        }

        let images: ImagesResponse = serde_json::from_str(&response.body)?;
        match images.err {
            Some(err) => Err(ClientError::Export(err)),
            None => Ok(images),
        }
    }

    /// Drop every cached subtree.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{base}/{path}"), query)
            .map_err(|e| ClientError::InvalidRequest(format!("bad request url: {e}")))
    }
}

fn validate_file_key(file_key: &str) -> Result<(), ClientError> {
    if file_key.is_empty() || !file_key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ClientError::InvalidRequest(format!(
            "file key '{file_key}' must be a non-empty alphanumeric string"
        )));
    }
    Ok(())
}
