// src/api/client.rs
//! Pure HTTP client wrapper for the content backends.
//!
//! This module provides a thin wrapper around reqwest for making HTTP
//! requests to the typed and legacy content APIs. It handles authentication
//! and basic request/response operations without parsing or business logic.

use crate::error::AppError;
use crate::model::{LegacyContentRecord, TypedContentRecord};
use crate::types::{ApiKey, RecordId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;

/// A thin wrapper around reqwest Client for content API requests.
#[derive(Clone)]
pub struct HeroHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl HeroHttpClient {
    /// Creates a new HTTP client authenticated against the admin API.
    pub fn new(base_url: ValidatedUrl, api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for content API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API key format: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint
        )
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PUT request with JSON body to the specified endpoint.
    pub async fn put<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("PUT {}", url);
        Ok(self.client.put(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::ContentReader for HeroHttpClient {
    async fn fetch_homepage(&self) -> Result<super::HomepagePayload, AppError> {
        let response = self.get("v1/content/homepage").await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response(result)
    }

    async fn fetch_public_content(&self) -> Result<Vec<Value>, AppError> {
        let response = self.get("public/content").await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response(result)
    }
}

#[async_trait::async_trait]
impl super::AdminWriter for HeroHttpClient {
    async fn create_record(
        &self,
        payload: &TypedContentRecord,
    ) -> Result<TypedContentRecord, AppError> {
        let response = self.post("admin/page-content", payload).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response(result)
    }

    async fn update_record(
        &self,
        id: RecordId,
        payload: &TypedContentRecord,
    ) -> Result<TypedContentRecord, AppError> {
        let endpoint = format!("admin/page-content/{}", id);
        let response = self.put(&endpoint, payload).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response(result)
    }

    async fn write_legacy(
        &self,
        payload: &LegacyContentRecord,
    ) -> Result<LegacyContentRecord, AppError> {
        let response = self.post("admin/content", payload).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_api_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
