//! IP geolocation.
//!
//! The lookup is the only external call in a request. It is bounded by a
//! timeout, never retried, and every failure degrades to the default
//! [`Location`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::location::Location;

/// Lookup endpoint; `{ip}` is replaced by the client address.
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/{ip}/json/";

/// Address looked up when the request carries no forwarding header.
pub const DEFAULT_CLIENT_IP: &str = "8.8.8.8";

pub const DEFAULT_GEO_TIMEOUT: Duration = Duration::from_millis(3000);

/// Geolocation failures. None of these abort a computation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geolocation timed out after {0:?}")]
    Timeout(Duration),
    #[error("geolocation service returned HTTP {0}")]
    Status(u16),
    #[error("malformed geolocation record: {0}")]
    Malformed(String),
}

/// Raw lookup record as returned by the service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeoRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub timezone: Option<String>,
    /// Set by the service on rate limiting or reserved addresses.
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
}

impl GeoRecord {
    /// Merge into a full location.
    ///
    /// Coordinates are required: a record without them is rejected as a
    /// whole. Missing or blank text fields fall back one by one.
    pub fn into_location(self, defaults: &Location) -> Result<Location, GeoError> {
        if self.error {
            return Err(GeoError::Malformed(
                self.reason.unwrap_or_else(|| "service reported an error".into()),
            ));
        }
        let (Some(lat), Some(lon)) = (self.latitude, self.longitude) else {
            return Err(GeoError::Malformed("missing coordinates".into()));
        };
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::Malformed("non-finite coordinates".into()));
        }
        let or = |v: Option<String>, d: &str| {
            v.filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| d.to_string())
        };
        Ok(Location {
            city: or(self.city, &defaults.city),
            region: or(self.region, &defaults.region),
            country: or(self.country_name, &defaults.country),
            lat,
            lon,
            time_zone: or(self.timezone, &defaults.time_zone),
        })
    }
}

/// Maps a client IP to a location record.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, ip: &str) -> Result<GeoRecord, GeoError>;
}

/// Resolver backed by an ipapi.co-compatible JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiResolver {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl IpApiResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rashifal/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Use a preconfigured client (proxy, TLS roots, ...). `timeout` still
    /// bounds each lookup as a whole.
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url_for(&self, ip: &str) -> String {
        self.endpoint.replace("{ip}", ip)
    }

    async fn fetch(&self, url: &str) -> Result<GeoRecord, GeoError> {
        let resp = self.client.get(url).send().await.map_err(|e| self.classify(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }
        let body = resp.text().await.map_err(|e| self.classify(e))?;
        serde_json::from_str(&body).map_err(|e| GeoError::Malformed(e.to_string()))
    }

    fn classify(&self, e: reqwest::Error) -> GeoError {
        if e.is_timeout() {
            GeoError::Timeout(self.timeout)
        } else {
            GeoError::Http(e)
        }
    }
}

impl Default for IpApiResolver {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            timeout: DEFAULT_GEO_TIMEOUT,
        }
    }
}

#[async_trait]
impl GeoResolver for IpApiResolver {
    async fn resolve(&self, ip: &str) -> Result<GeoRecord, GeoError> {
        let url = self.url_for(ip);
        debug!(%url, "geolocation lookup");
        // The client timeout covers each request phase; this bounds the total.
        tokio::time::timeout(self.timeout, self.fetch(&url))
            .await
            .map_err(|_| GeoError::Timeout(self.timeout))?
    }
}

/// First address of an `X-Forwarded-For` value, trimmed.
///
/// `None` for a missing header or an empty first entry.
pub fn first_forwarded_ip(header: Option<&str>) -> Option<String> {
    let first = header?.split(',').next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}

/// Client address for a request: the first forwarded entry or [`DEFAULT_CLIENT_IP`].
pub fn client_ip_from_forwarded(header: Option<&str>) -> String {
    first_forwarded_ip(header).unwrap_or_else(|| DEFAULT_CLIENT_IP.to_string())
}

/// Resolve `ip` to a location, falling back to `defaults` on any failure.
pub async fn resolve_location<R: GeoResolver + ?Sized>(
    resolver: &R,
    ip: &str,
    defaults: &Location,
) -> Location {
    match resolver.resolve(ip).await.and_then(|r| r.into_location(defaults)) {
        Ok(location) => location,
        Err(error) => {
            warn!(%error, ip, "geolocation failed, using default location");
            defaults.clone()
        }
    }
}
