// src/reconcile/mod.rs
//! Content reconciliation — normalizing heterogeneous backend
//! representations into the canonical hero content shape.
//!
//! Three stages, each a pure function over decoded data:
//! classification of unknown-shaped responses, legacy key-value mapping,
//! and the fold from typed records into [`HeroContent`](crate::model::HeroContent).

mod classify;
mod legacy_map;
mod transform;

pub use classify::{classify_records, is_legacy_batch, is_typed_batch, RecordBatch};
pub use legacy_map::{content_type_for_key, legacy_key_for, map_legacy_records};
pub use transform::records_to_content;
