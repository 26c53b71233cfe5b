//! Asset lookup by scanned identifier.
//!
//! A route parameter is percent-decoded, classified as a numeric id or an
//! opaque barcode, then resolved against the inventory API. Numeric ids try
//! the id endpoint first and fall back once to the barcode endpoint with the
//! same string, matching the label printers that reuse ids as barcodes.

use async_trait::async_trait;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::error::{AppError, AppResult};
use crate::models::AssetModel;

static RE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Classified lookup key derived from a scan payload or URL path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentifier {
    Id(u64),
    Barcode(String),
}

impl ResolvedIdentifier {
    /// Classify an already percent-decoded identifier.
    ///
    /// Digit strings too large for a numeric id are treated as barcodes.
    pub fn classify(decoded: &str) -> AppResult<Self> {
        if decoded.is_empty() {
            return Err(AppError::MalformedAssetId(String::new()));
        }
        if RE_NUMERIC.is_match(decoded) {
            if let Ok(id) = decoded.parse::<u64>() {
                return Ok(ResolvedIdentifier::Id(id));
            }
        }
        Ok(ResolvedIdentifier::Barcode(decoded.to_string()))
    }
}

/// Read-only asset lookups offered by the backend.
#[async_trait]
pub trait AssetLookup: Send + Sync {
    async fn asset_by_id(&self, id: u64) -> AppResult<AssetModel>;
    async fn asset_by_barcode(&self, barcode: &str) -> AppResult<AssetModel>;
}

pub struct Resolver<L: AssetLookup> {
    lookup: L,
}

impl<L: AssetLookup> Resolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve a raw route parameter to an asset.
    ///
    /// Idempotent and side-effect free; safe to retry. The returned
    /// [`AppError::NotFound`] embeds the attempted identifier.
    pub async fn resolve(&self, raw_param: &str) -> AppResult<AssetModel> {
        let decoded = percent_decode(raw_param);

        match ResolvedIdentifier::classify(&decoded)? {
            ResolvedIdentifier::Id(id) => match self.lookup.asset_by_id(id).await {
                Ok(asset) => Ok(asset),
                // Any id-lookup failure falls through to the barcode
                // endpoint with the same string, not only a 404.
                Err(first_err) => {
                    tracing::debug!(id, %first_err, "id lookup failed, trying barcode");
                    self.lookup.asset_by_barcode(&decoded).await
                }
            },
            ResolvedIdentifier::Barcode(code) => self.lookup.asset_by_barcode(&code).await,
        }
    }
}

fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
