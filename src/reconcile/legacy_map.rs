// src/reconcile/legacy_map.rs
//! Mapping legacy flat key-value records into the typed record shape.
//!
//! The legacy API knows nothing of content types; a fixed dictionary
//! reinterprets its dotted content keys. The mapping is lossy: records whose
//! key is not in the dictionary are dropped. That mirrors the observed
//! behavior of the system being reconciled — the drop is logged at `warn` so
//! the loss is at least visible.

use crate::model::{ContentType, LegacyContentRecord, TypedContentRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed dictionary from legacy content keys to typed content types.
///
/// Aliases exist because the legacy content table accumulated key spellings
/// over several site redesigns.
static CONTENT_KEY_DICTIONARY: Lazy<HashMap<&'static str, ContentType>> = Lazy::new(|| {
    HashMap::from([
        ("hero.announcement", ContentType::Announcement),
        ("hero.title", ContentType::HeroHeading),
        ("hero.heading", ContentType::HeroHeading),
        ("hero.subtitle", ContentType::HeroSubheading),
        ("hero.subheading", ContentType::HeroSubheading),
        ("hero.banner", ContentType::HeroBanner),
        ("hero.tagline", ContentType::HeroBanner),
        ("hero.video", ContentType::HeroVideo),
        ("hero.cta.primary", ContentType::HeroCta),
        ("hero.cta.secondary", ContentType::HeroCta),
    ])
});

/// Looks up the typed content type for a legacy content key.
pub fn content_type_for_key(content_key: &str) -> Option<ContentType> {
    CONTENT_KEY_DICTIONARY.get(content_key).cloned()
}

/// The canonical legacy key for a content type, used when writing the legacy
/// fallback. CTA records need the variant to pick between the primary and
/// secondary key.
pub fn legacy_key_for(content_type: &ContentType, cta_primary: Option<bool>) -> Option<&'static str> {
    match content_type {
        ContentType::Announcement => Some("hero.announcement"),
        ContentType::HeroHeading => Some("hero.title"),
        ContentType::HeroSubheading => Some("hero.subtitle"),
        ContentType::HeroBanner => Some("hero.banner"),
        ContentType::HeroVideo => Some("hero.video"),
        ContentType::HeroCta => match cta_primary {
            Some(false) => Some("hero.cta.secondary"),
            _ => Some("hero.cta.primary"),
        },
        _ => None,
    }
}

/// Converts legacy records into typed records, sorted by display order.
///
/// Records with no dictionary entry are discarded. Derivation rules for the
/// kept records:
/// - `title`: content value, else description, else a type-specific label
/// - `display_order`: the record's own order, else the type's default
/// - `cta_primary` (CTA only): the record's own flag, else inferred from
///   whether the key mentions "primary" or "secondary"
/// - `is_published`: `is_published`, else `is_active`, else published
/// - language and section default to the fixed hero constants
pub fn map_legacy_records(records: &[LegacyContentRecord]) -> Vec<TypedContentRecord> {
    let mut mapped: Vec<TypedContentRecord> = records
        .iter()
        .filter_map(|record| {
            let Some(content_type) = content_type_for_key(&record.content_key) else {
                log::warn!(
                    "Dropping legacy record with unrecognized key '{}' (id: {:?})",
                    record.content_key,
                    record.id
                );
                return None;
            };
            Some(map_one(record, content_type))
        })
        .collect();

    mapped.sort_by_key(|r| r.display_order);
    mapped
}

fn map_one(record: &LegacyContentRecord, content_type: ContentType) -> TypedContentRecord {
    let title = record
        .content_value
        .clone()
        .or_else(|| record.description.clone())
        .unwrap_or_else(|| content_type.default_label().to_string());

    let display_order = record
        .display_order
        .unwrap_or_else(|| content_type.default_display_order());

    let cta_primary = if content_type == ContentType::HeroCta {
        record.cta_primary.or_else(|| {
            if record.content_key.contains("primary") {
                Some(true)
            } else if record.content_key.contains("secondary") {
                Some(false)
            } else {
                None
            }
        })
    } else {
        None
    };

    let is_published = record.is_published.or(record.is_active).unwrap_or(true);

    let mut typed = TypedContentRecord::new(content_type, title);
    // Legacy ids identify rows in the legacy table, not the typed API;
    // carrying them over would make the next save PUT against ids the typed
    // API never issued. Mapped records therefore start without an id.
    typed.content = record.content_value.clone();
    typed.image_url = record.image_url.clone();
    typed.video_url = record.video_url.clone();
    typed.cta_text = record.cta_text.clone();
    typed.cta_href = record.cta_href.clone();
    typed.cta_primary = cta_primary;
    typed.display_order = display_order;
    typed.is_published = is_published;
    if let Some(language) = &record.language_code {
        typed.language_code = language.clone();
    }
    if let Some(section) = &record.section_identifier {
        typed.section_identifier = section.clone();
    }
    typed
}
