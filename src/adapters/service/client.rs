//! HTTP client for the Count and Page services
//!
//! Issues `GET` requests against the AJAX endpoint with the anti-forgery
//! token and decodes the JSON envelope into domain responses.

use super::models::{decode_envelope, CountData, PageData, RequestType, ACTION};
use super::traits::UrlService;
use crate::config::ServiceConfig;
use crate::domain::{
    CountResponse, ExportRequest, ExporterError, PageResponse, Result, ServiceError,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// reqwest-backed [`UrlService`]
///
/// # Example
///
/// ```no_run
/// use url_exporter::adapters::service::{HttpUrlService, UrlService};
/// use url_exporter::config::ServiceConfig;
/// use url_exporter::domain::ExportRequest;
///
/// # async fn example() -> url_exporter::domain::Result<()> {
/// let service = HttpUrlService::new(&ServiceConfig::default())?;
/// let request = ExportRequest::parse("category", 12)?;
/// let count = service.fetch_count(&request).await?;
/// println!("{} items in {}", count.total_count, count.term_label);
/// # Ok(())
/// # }
/// ```
pub struct HttpUrlService {
    endpoint: Url,
    client: Client,
    config: ServiceConfig,
}

impl HttpUrlService {
    /// Create a new client from the service configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            ExporterError::Configuration(format!(
                "Invalid service.endpoint '{}': {e}",
                config.endpoint
            ))
        })?;

        let mut client_builder = ClientBuilder::new().connect_timeout(Duration::from_secs(
            config.count_timeout_seconds.min(30),
        ));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for the export service");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ExporterError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            endpoint,
            client,
            config: config.clone(),
        })
    }

    /// Common query parameters shared by both request types
    fn base_query(
        &self,
        request_type: RequestType,
        request: &ExportRequest,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("action", ACTION.to_string()),
            ("request_type", request_type.as_str().to_string()),
            ("taxonomy", request.taxonomy.as_str().to_string()),
            ("ID", request.term_id.to_string()),
        ];

        if let Some(nonce) = &self.config.nonce {
            query.push(("nonce", nonce.expose_secret().as_str().to_string()));
        }

        query
    }

    async fn get<T: DeserializeOwned>(
        &self,
        query: &[(&'static str, String)],
    ) -> std::result::Result<T, ServiceError> {
        let mut request = self.client.get(self.endpoint.clone()).query(query);

        if let Some(api_key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, api_key.expose_secret().as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        match decode_envelope::<T>(&body) {
            Ok(data) => Ok(data),
            // Non-2xx responses that aren't an envelope are transport-level failures
            Err(ServiceError::InvalidResponse(_)) if !status.is_success() => Err(
                ServiceError::Transport(format!("HTTP {status} from export service")),
            ),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl UrlService for HttpUrlService {
    async fn fetch_count(
        &self,
        request: &ExportRequest,
    ) -> std::result::Result<CountResponse, ServiceError> {
        let query = self.base_query(RequestType::Count, request);
        let data: CountData = self.get(&query).await?;
        Ok(data.into())
    }

    async fn fetch_page(
        &self,
        request: &ExportRequest,
        page: u32,
        per_page: u32,
    ) -> std::result::Result<PageResponse, ServiceError> {
        let mut query = self.base_query(RequestType::Data, request);
        query.push(("page", page.to_string()));
        query.push(("per_page", per_page.to_string()));

        let data: PageData = self.get(&query).await?;
        Ok(data.into())
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
