//! Typed pass-through client for the waste-management backend API

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::domain::{
    DomainError, DumpingReport, PickupRequest, PurchaseRequest, TokenProvider,
};

/// Pass-through JSON client for the backend API.
///
/// Attaches the session's bearer token when one exists. Non-2xx responses
/// become `DomainError::Api` with the status code and text; nothing is retried.
pub struct WasteApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for WasteApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WasteApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WasteApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `/api/reports/illegal-dumping` as multipart form data
    pub async fn report_illegal_dumping(&self, report: DumpingReport) -> Result<Value, DomainError> {
        let mut form = Form::new()
            .text("location", report.location)
            .text("description", report.description);

        if let Some(image) = report.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| DomainError::validation(format!("Invalid image type: {}", e)))?;
            form = form.part("image", part);
        }

        let request = self
            .request(Method::POST, "/api/reports/illegal-dumping")
            .multipart(form);
        self.send(request).await
    }

    /// Tracking for one vehicle, or for the vehicle serving the current user
    pub async fn get_vehicle_tracking(&self, vehicle_id: Option<&str>) -> Result<Value, DomainError> {
        let endpoint = match vehicle_id {
            Some(id) => format!("/api/vehicles/{}/tracking", id),
            None => "/api/vehicles/my-tracking".to_string(),
        };
        self.get(&endpoint).await
    }

    pub async fn get_facilities(
        &self,
        facility_type: Option<&str>,
        location: Option<&str>,
    ) -> Result<Value, DomainError> {
        let mut params = Vec::new();
        if let Some(t) = facility_type {
            params.push(("type", t));
        }
        if let Some(l) = location {
            params.push(("location", l));
        }

        let mut request = self.json_request(Method::GET, "/api/facilities");
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send(request).await
    }

    pub async fn get_user_stats(&self) -> Result<Value, DomainError> {
        self.get("/api/users/stats").await
    }

    pub async fn get_community_stats(&self) -> Result<Value, DomainError> {
        self.get("/api/community/stats").await
    }

    pub async fn get_eco_products(&self) -> Result<Value, DomainError> {
        self.get("/api/products/eco-friendly").await
    }

    pub async fn purchase_product(&self, purchase: &PurchaseRequest) -> Result<Value, DomainError> {
        let request = self
            .json_request(Method::POST, "/api/products/purchase")
            .json(purchase);
        self.send(request).await
    }

    pub async fn schedule_pickup(&self, pickup: &PickupRequest) -> Result<Value, DomainError> {
        let request = self
            .json_request(Method::POST, "/api/pickups/schedule")
            .json(pickup);
        self.send(request).await
    }

    async fn get(&self, endpoint: &str) -> Result<Value, DomainError> {
        let request = self.json_request(Method::GET, endpoint);
        self.send(request).await
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, endpoint))
    }

    fn json_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.request(method, endpoint)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, mut request: RequestBuilder) -> Result<Value, DomainError> {
        if let Some(token) = self.tokens.auth_token().await {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "API request error");
            DomainError::transport(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "API responded");

        if !status.is_success() {
            let error = DomainError::api(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            );
            warn!(error = %error, "API request error");
            return Err(error);
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::serialization(format!("Failed to parse response: {}", e)))
    }
}
