// src/lib.rs
//! herosync library — reconciles hero-section content across a typed admin
//! API, a legacy key-value API, and an in-memory fallback.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`, `WriteFailure`
//! - **Configuration** — `StoreConfig`
//! - **Domain model** — `HeroContent`, `TypedContentRecord`, `LegacyContentRecord`
//! - **Domain types** — `ApiKey`, `RecordId`, `SectionId`, `LanguageCode`
//! - **Reconciliation** — `classify_records`, `map_legacy_records`, `records_to_content`
//! - **API client** — `ContentReader`, `AdminWriter`, `HeroHttpClient`
//! - **Persistence** — `DualWriter`, `DualWriteReport`, `plan_upserts`
//! - **Store** — `HeroStore`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod fetch;
mod model;
mod persist;
mod reconcile;
mod store;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, BackendErrorCode, WriteFailure};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, StoreConfig};

// --- Domain Model ---
pub use crate::model::{
    Announcement, ContentType, CtaButton, CtaVariant, HeroContent, LegacyContentRecord,
    TypedContentRecord,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, LanguageCode, RecordId, SectionId, ValidatedUrl};

// --- Reconciliation ---
pub use crate::reconcile::{
    classify_records, content_type_for_key, is_legacy_batch, is_typed_batch, legacy_key_for,
    map_legacy_records, records_to_content, RecordBatch,
};

// --- API Client ---
pub use crate::api::{AdminWriter, ContentReader, HeroHttpClient, HomepagePayload};
pub use crate::fetch::fetch_hero_records;

// --- Persistence ---
pub use crate::persist::{
    plan_legacy_writes, plan_upserts, DualWriteReport, DualWriter, RecordUpsert, WriteOutcome,
};

// --- Store ---
pub use crate::store::HeroStore;
