// src/api/responses.rs
//! Wire envelopes for backend responses.

use crate::model::TypedContentRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The aggregate homepage payload from `GET /v1/content/homepage`.
///
/// Only the hero section is reconciled; the other sections ride along as
/// raw JSON so decoding never breaks when the marketing site grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepagePayload {
    #[serde(default)]
    pub hero_content: Vec<TypedContentRecord>,
    #[serde(flatten)]
    pub other_sections: IndexMap<String, serde_json::Value>,
}

/// Error body the content backends return on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}
