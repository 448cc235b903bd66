// src/fetch.rs
//! Tiered content fetch orchestrator.
//!
//! Tries the aggregate homepage endpoint, falls back to the flat public
//! endpoint, classifies whatever comes back, and normalizes it to typed
//! records. Every failure along the way is logged and demoted to "try the
//! next tier" — the orchestrator itself never errors, and total failure
//! yields an empty record set, which downstream renders as fallback content.

use crate::api::ContentReader;
use crate::model::TypedContentRecord;
use crate::reconcile::{classify_records, map_legacy_records, RecordBatch};
use crate::types::SectionId;

/// Fetches the hero section's typed records, or an empty vector when no
/// tier produced usable data.
pub async fn fetch_hero_records(
    reader: &dyn ContentReader,
    section: &SectionId,
) -> Vec<TypedContentRecord> {
    // Tier 1: aggregate homepage payload
    match reader.fetch_homepage().await {
        Ok(payload) if !payload.hero_content.is_empty() => {
            log::debug!(
                "Homepage payload delivered {} hero records",
                payload.hero_content.len()
            );
            return filter_hero_records(payload.hero_content, section);
        }
        Ok(_) => {
            log::info!("Homepage payload had no hero records, trying public content endpoint");
        }
        Err(e) => {
            log::warn!("Homepage fetch failed, trying public content endpoint: {}", e);
        }
    }

    // Tier 2: flat public list, classified at runtime
    match reader.fetch_public_content().await {
        Ok(values) => match classify_records(values) {
            Ok(RecordBatch::Typed(records)) => filter_hero_records(records, section),
            Ok(RecordBatch::Legacy(records)) => {
                log::debug!("Public content is legacy-shaped; mapping {} records", records.len());
                map_legacy_records(&records)
            }
            Err(e) => {
                log::warn!("Public content response unusable: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("Public content fetch failed: {}", e);
            Vec::new()
        }
    }
}

/// Keeps records belonging to the hero section: hero-typed records plus any
/// record explicitly tagged with the hero section identifier.
fn filter_hero_records(
    records: Vec<TypedContentRecord>,
    section: &SectionId,
) -> Vec<TypedContentRecord> {
    records
        .into_iter()
        .filter(|r| r.content_type.is_hero() || &r.section_identifier == section)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HomepagePayload;
    use crate::error::AppError;
    use crate::model::ContentType;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    /// Scripted reader: each endpoint either fails or returns a canned body.
    struct ScriptedReader {
        homepage: Result<HomepagePayload, ()>,
        public: Result<Vec<Value>, ()>,
    }

    impl ScriptedReader {
        fn failing_homepage(public: Result<Vec<Value>, ()>) -> Self {
            Self {
                homepage: Err(()),
                public,
            }
        }
    }

    #[async_trait]
    impl ContentReader for ScriptedReader {
        async fn fetch_homepage(&self) -> Result<HomepagePayload, AppError> {
            match &self.homepage {
                Ok(payload) => Ok(payload.clone()),
                Err(()) => Err(AppError::MalformedResponse("homepage down".to_string())),
            }
        }

        async fn fetch_public_content(&self) -> Result<Vec<Value>, AppError> {
            match &self.public {
                Ok(values) => Ok(values.clone()),
                Err(()) => Err(AppError::MalformedResponse("public down".to_string())),
            }
        }
    }

    fn hero_section() -> SectionId {
        SectionId::new(crate::constants::HERO_SECTION_ID).unwrap()
    }

    #[tokio::test]
    async fn primary_tier_filters_to_hero_records() {
        let payload: HomepagePayload = serde_json::from_value(json!({
            "heroContent": [
                {"contentType": "HERO_HEADING", "title": "Hello"},
                {"contentType": "FEATURE_CARD", "title": "Card", "sectionIdentifier": "features"},
                {"contentType": "ANNOUNCEMENT", "title": "News"}
            ]
        }))
        .unwrap();
        let reader = ScriptedReader {
            homepage: Ok(payload),
            public: Err(()),
        };

        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.content_type.is_hero()));
    }

    #[tokio::test]
    async fn falls_back_to_typed_public_content() {
        let reader = ScriptedReader::failing_homepage(Ok(vec![json!(
            {"contentType": "HERO_HEADING", "title": "Hello"}
        )]));

        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_type, ContentType::HeroHeading);
    }

    #[tokio::test]
    async fn falls_back_to_legacy_public_content() {
        let reader = ScriptedReader::failing_homepage(Ok(vec![json!(
            {"contentKey": "hero.title", "contentValue": "Foo"}
        )]));

        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_type, ContentType::HeroHeading);
        assert_eq!(records[0].title, "Foo");
    }

    #[tokio::test]
    async fn empty_homepage_escalates_to_public_tier() {
        let payload: HomepagePayload = serde_json::from_value(json!({"heroContent": []})).unwrap();
        let reader = ScriptedReader {
            homepage: Ok(payload),
            public: Ok(vec![json!({"contentKey": "hero.title", "contentValue": "Foo"})]),
        };

        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn total_failure_yields_empty_set() {
        let reader = ScriptedReader::failing_homepage(Err(()));
        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unclassifiable_public_content_yields_empty_set() {
        let reader = ScriptedReader::failing_homepage(Ok(vec![json!({"unrelated": true})]));
        let records = fetch_hero_records(&reader, &hero_section()).await;
        assert!(records.is_empty());
    }
}
