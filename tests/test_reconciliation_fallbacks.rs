//! Test to verify record reconciliation with graceful fallbacks
//!
//! This test ensures the classification and mapping pipeline handles raw
//! backend payloads end to end, including legacy-shaped batches, unknown
//! content keys, and unpublished records.

use herosync::{
    classify_records, is_legacy_batch, is_typed_batch, map_legacy_records, records_to_content,
    CtaVariant, HeroContent, RecordBatch,
};
use serde_json::json;

#[test]
fn test_legacy_batch_reconciles_to_canonical_content() {
    let batch = vec![
        json!({
            "contentKey": "hero.title",
            "contentValue": "Ship faster",
            "displayOrder": 2
        }),
        json!({
            "contentKey": "hero.subtitle",
            "contentValue": "With fewer regressions",
            "displayOrder": 3
        }),
        json!({
            "contentKey": "hero.cta.primary",
            "ctaText": "Get started",
            "ctaHref": "/signup",
            "displayOrder": 6
        }),
        json!({
            "contentKey": "site.footer.copyright",
            "contentValue": "ignored, not a hero key"
        }),
    ];

    let classified = classify_records(batch).unwrap();
    let legacy = match classified {
        RecordBatch::Legacy(records) => records,
        RecordBatch::Typed(_) => panic!("batch with contentKey must classify as legacy"),
    };

    let typed = map_legacy_records(&legacy);
    // The unrecognized footer key is dropped during mapping.
    assert_eq!(typed.len(), 3);

    let content = records_to_content(&typed);
    assert_eq!(content.heading, "Ship faster");
    assert_eq!(content.subheading, "With fewer regressions");
    assert_eq!(content.cta.len(), 1);
    assert_eq!(content.cta[0].text, "Get started");
    assert_eq!(content.cta[0].href, "/signup");
    assert_eq!(content.cta[0].variant, CtaVariant::Primary);
}

#[test]
fn test_typed_batch_with_unpublished_records() {
    let batch = vec![
        json!({
            "contentType": "HERO_HEADING",
            "title": "Live heading",
            "displayOrder": 2
        }),
        json!({
            "contentType": "HERO_SUBHEADING",
            "title": "Draft subheading",
            "isPublished": false,
            "displayOrder": 3
        }),
    ];

    let classified = classify_records(batch).unwrap();
    let typed = match classified {
        RecordBatch::Typed(records) => records,
        RecordBatch::Legacy(_) => panic!("batch with contentType must classify as typed"),
    };

    let content = records_to_content(&typed);
    let fallback = HeroContent::fallback();
    assert_eq!(content.heading, "Live heading");
    // Unpublished records never reach the canonical content.
    assert_eq!(content.subheading, fallback.subheading);
}

#[test]
fn test_empty_batch_yields_fallback_content() {
    let classified = classify_records(Vec::new()).unwrap();
    let typed = match classified {
        RecordBatch::Typed(records) => records,
        RecordBatch::Legacy(_) => panic!("empty batch classifies as typed"),
    };
    assert!(typed.is_empty());

    let content = records_to_content(&typed);
    assert_eq!(content, HeroContent::fallback());
}

#[test]
fn test_shape_predicates_are_mutually_exclusive() {
    let typed = vec![json!({"contentType": "HERO_HEADING", "title": "typed"})];
    let legacy = vec![json!({"contentKey": "hero.title", "contentValue": "legacy"})];

    assert!(is_typed_batch(&typed));
    assert!(!is_legacy_batch(&typed));
    assert!(is_legacy_batch(&legacy));
    assert!(!is_typed_batch(&legacy));
}

#[test]
fn test_mixed_shape_batch_is_rejected() {
    let batch = vec![
        json!({"contentType": "HERO_HEADING", "title": "typed"}),
        json!({"contentKey": "hero.title", "contentValue": "legacy"}),
    ];

    assert!(classify_records(batch).is_err());
}
