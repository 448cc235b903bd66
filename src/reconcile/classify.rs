// src/reconcile/classify.rs
//! Classification of unknown-shaped content responses.
//!
//! The flat public endpoint serves either typed records or legacy key-value
//! records depending on the backend's vintage. Rather than duck-typing our
//! way through the payload downstream, the boundary decodes the whole batch
//! into a discriminated [`RecordBatch`] — malformed responses fail here with
//! a typed error instead of silently falling through.

use crate::error::AppError;
use crate::model::{LegacyContentRecord, TypedContentRecord};
use serde_json::Value;

/// A batch of records decoded from the flat content endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBatch {
    Typed(Vec<TypedContentRecord>),
    Legacy(Vec<LegacyContentRecord>),
}

impl RecordBatch {
    pub fn len(&self) -> usize {
        match self {
            Self::Typed(records) => records.len(),
            Self::Legacy(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns true iff every element is a non-null object carrying a
/// `contentType` key.
///
/// Vacuously true on an empty slice; [`classify_records`] resolves that
/// ambiguity explicitly, so callers should prefer it over the raw predicate.
pub fn is_typed_batch(values: &[Value]) -> bool {
    values
        .iter()
        .all(|v| v.as_object().is_some_and(|o| o.contains_key("contentType")))
}

/// Returns true iff every element is a non-null object carrying a
/// `contentKey` key. Same empty-slice caveat as [`is_typed_batch`].
pub fn is_legacy_batch(values: &[Value]) -> bool {
    values
        .iter()
        .all(|v| v.as_object().is_some_and(|o| o.contains_key("contentKey")))
}

/// Decodes a raw response batch into typed or legacy records.
///
/// An empty batch classifies as `Typed(vec![])` — there is nothing to
/// reinterpret, and downstream treats an empty record set as "use fallback
/// content" either way. A batch matching neither shape, or one that matches
/// a shape but fails to decode, is a malformed response.
pub fn classify_records(values: Vec<Value>) -> Result<RecordBatch, AppError> {
    if values.is_empty() {
        return Ok(RecordBatch::Typed(Vec::new()));
    }

    if is_typed_batch(&values) {
        let records = values
            .into_iter()
            .map(serde_json::from_value::<TypedContentRecord>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::MalformedResponse(format!("typed record batch: {}", e)))?;
        return Ok(RecordBatch::Typed(records));
    }

    if is_legacy_batch(&values) {
        let records = values
            .into_iter()
            .map(serde_json::from_value::<LegacyContentRecord>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::MalformedResponse(format!("legacy record batch: {}", e)))?;
        return Ok(RecordBatch::Legacy(records));
    }

    Err(AppError::MalformedResponse(
        "response matches neither the typed nor the legacy record shape".to_string(),
    ))
}
