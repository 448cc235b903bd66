// src/api/mod.rs
//! Content backend interaction — the ability to read and write content
//! across the two backend APIs.
//!
//! This module provides a data-oriented interface to the content backends,
//! with clear separation between I/O operations, parsing, and business
//! logic. Business logic depends on the two capability traits, never on
//! HTTP details.

pub mod client;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{LegacyContentRecord, TypedContentRecord};
use crate::types::RecordId;
use serde_json::Value;

pub use responses::HomepagePayload;

/// The ability to read published content from the backend.
///
/// Two endpoints of different vintages serve overlapping data: the aggregate
/// homepage payload (typed records grouped per section) and the flat public
/// list, whose element shape is only known at runtime — hence raw
/// `Value`s that the classifier decodes.
#[async_trait::async_trait]
pub trait ContentReader: Send + Sync {
    /// `GET /v1/content/homepage` — the primary aggregate payload.
    async fn fetch_homepage(&self) -> Result<HomepagePayload, AppError>;

    /// `GET /public/content` — the secondary flat list. Elements may be
    /// typed or legacy shaped.
    async fn fetch_public_content(&self) -> Result<Vec<Value>, AppError>;
}

/// The ability to create and update content records through the admin APIs.
///
/// Writes exist in two parallel dialects: the typed page-content API and the
/// legacy key-value API. The persistence orchestrator decides when each is
/// used; this trait only provides the calls.
#[async_trait::async_trait]
pub trait AdminWriter: Send + Sync {
    /// `POST /admin/page-content` — create a typed record. The returned
    /// record carries the server-assigned id.
    async fn create_record(
        &self,
        payload: &TypedContentRecord,
    ) -> Result<TypedContentRecord, AppError>;

    /// `PUT /admin/page-content/{id}` — update a typed record in place.
    async fn update_record(
        &self,
        id: RecordId,
        payload: &TypedContentRecord,
    ) -> Result<TypedContentRecord, AppError>;

    /// `POST /admin/content` — write a legacy key-value record. The legacy
    /// backend upserts on `contentKey`, so the orchestrator never needs
    /// legacy record ids.
    async fn write_legacy(
        &self,
        payload: &LegacyContentRecord,
    ) -> Result<LegacyContentRecord, AppError>;
}

// Re-export the public interface
pub use client::HeroHttpClient;
