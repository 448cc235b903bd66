// src/persist.rs
//! Content persistence orchestrator: upsert planning plus the two-phase
//! dual writer.
//!
//! The backend has two parallel content APIs of different vintages. The
//! typed page-content API is the primary target; the legacy key-value API
//! is a best-effort durability net, written after the primary regardless of
//! how the primary fared. Consistency contract:
//!
//! - the fallback write is always attempted;
//! - the overall operation never fails solely because a remote write failed;
//! - callers can query per-backend outcomes from the returned report.

use crate::api::AdminWriter;
use crate::constants::DEFAULT_ORDER_CTA;
use crate::error::{classify_write_failure, AppError, WriteFailure};
use crate::model::{
    ContentType, CtaVariant, HeroContent, LegacyContentRecord, TypedContentRecord,
};
use crate::reconcile::legacy_key_for;
use crate::types::{LanguageCode, SectionId};
use futures::future::join_all;
use std::sync::Arc;

/// One planned write against the typed API. A payload with an id becomes an
/// update; one without becomes a create.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpsert {
    /// Which canonical field this write persists, e.g. `heading` or
    /// `cta[1]`. Used in reports and logs.
    pub field: String,
    pub payload: TypedContentRecord,
}

impl RecordUpsert {
    pub fn is_update(&self) -> bool {
        self.payload.id.is_some()
    }
}

/// Outcome of a single remote write.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub field: String,
    pub result: Result<(), WriteFailure>,
}

impl WriteOutcome {
    fn ok(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            result: Ok(()),
        }
    }

    fn failed(field: impl Into<String>, error: &AppError) -> Self {
        Self {
            field: field.into(),
            result: Err(classify_write_failure(error)),
        }
    }
}

/// Per-backend outcomes of one save cycle.
#[derive(Debug, Clone, Default)]
pub struct DualWriteReport {
    pub primary: Vec<WriteOutcome>,
    pub fallback: Vec<WriteOutcome>,
}

impl DualWriteReport {
    /// Whether every typed-API write succeeded.
    pub fn primary_succeeded(&self) -> bool {
        self.primary.iter().all(|o| o.result.is_ok())
    }

    /// Whether every legacy write succeeded.
    pub fn fallback_succeeded(&self) -> bool {
        self.fallback.iter().all(|o| o.result.is_ok())
    }

    /// Fields that failed on either backend, for error display.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &WriteFailure)> {
        self.primary
            .iter()
            .chain(self.fallback.iter())
            .filter_map(|o| match &o.result {
                Err(failure) => Some((o.field.as_str(), failure)),
                Ok(()) => None,
            })
    }
}

/// Computes the per-field typed-API writes that persist `content`.
///
/// Each canonical field is matched against the cached records from the last
/// fetch: a cached record of the right type (for CTAs, the right positional
/// index within the CTA sublist) makes the write an update carrying that
/// record's id and presentation extras forward; otherwise the write is a
/// create. Cached CTA records beyond the new CTA count are soft-removed by
/// planning an unpublish update, never a delete.
pub fn plan_upserts(
    content: &HeroContent,
    cached: &[TypedContentRecord],
    section: &SectionId,
    language: &LanguageCode,
    publish: bool,
) -> Vec<RecordUpsert> {
    let mut plan = Vec::new();

    let base = |content_type: ContentType| -> TypedContentRecord {
        let existing = cached
            .iter()
            .find(|r| r.content_type == content_type && r.content_type != ContentType::HeroCta);
        let mut record = existing
            .cloned()
            .unwrap_or_else(|| TypedContentRecord::new(content_type, ""));
        record.section_identifier = section.clone();
        record.language_code = language.clone();
        record.is_published = publish;
        record
    };

    // Announcement strip
    let mut announcement = base(ContentType::Announcement);
    announcement.title = content.announcement.text.clone();
    announcement.cta_href = Some(content.announcement.href.clone());
    plan.push(RecordUpsert {
        field: "announcement".to_string(),
        payload: announcement,
    });

    // Heading
    let mut heading = base(ContentType::HeroHeading);
    heading.title = content.heading.clone();
    plan.push(RecordUpsert {
        field: "heading".to_string(),
        payload: heading,
    });

    // Subheading
    let mut subheading = base(ContentType::HeroSubheading);
    subheading.title = content.subheading.clone();
    subheading.content = Some(content.subheading.clone());
    plan.push(RecordUpsert {
        field: "subheading".to_string(),
        payload: subheading,
    });

    // Banner: tagline plus background image
    let mut banner = base(ContentType::HeroBanner);
    banner.title = content.tagline.clone();
    banner.content = Some(content.tagline.clone());
    banner.image_url = content.background_image.clone();
    plan.push(RecordUpsert {
        field: "banner".to_string(),
        payload: banner,
    });

    // Video, only when the content carries one
    if let Some(video_url) = &content.background_video {
        let mut video = base(ContentType::HeroVideo);
        video.video_url = Some(video_url.clone());
        plan.push(RecordUpsert {
            field: "video".to_string(),
            payload: video,
        });
    }

    // CTAs, matched by positional index within the cached CTA sublist
    let mut cached_ctas: Vec<&TypedContentRecord> = cached
        .iter()
        .filter(|r| r.content_type == ContentType::HeroCta)
        .collect();
    cached_ctas.sort_by_key(|r| r.display_order);

    for (index, button) in content.cta.iter().enumerate() {
        let mut record = cached_ctas
            .get(index)
            .map(|r| (*r).clone())
            .unwrap_or_else(|| TypedContentRecord::new(ContentType::HeroCta, ""));
        record.title = button.text.clone();
        record.cta_text = Some(button.text.clone());
        record.cta_href = Some(button.href.clone());
        record.cta_primary = Some(button.variant == CtaVariant::Primary);
        record.section_identifier = section.clone();
        record.language_code = language.clone();
        record.is_published = publish;
        if cached_ctas.get(index).is_none() {
            record.display_order = DEFAULT_ORDER_CTA + index as i32;
        }
        plan.push(RecordUpsert {
            field: format!("cta[{}]", index),
            payload: record,
        });
    }

    // Surplus cached CTAs are unpublished, not deleted
    for (index, surplus) in cached_ctas.iter().enumerate().skip(content.cta.len()) {
        if surplus.id.is_none() {
            continue;
        }
        let mut record = (*surplus).clone();
        record.is_published = false;
        plan.push(RecordUpsert {
            field: format!("cta[{}] (unpublish)", index),
            payload: record,
        });
    }

    plan
}

/// Computes the legacy key-value payloads equivalent to `content`.
///
/// The legacy backend upserts on `contentKey`, so every write is a plain
/// create. A hero section with more than one CTA per variant folds onto the
/// same key — a limitation of the flat model, not of this writer.
pub fn plan_legacy_writes(
    content: &HeroContent,
    section: &SectionId,
    language: &LanguageCode,
    publish: bool,
) -> Vec<(String, LegacyContentRecord)> {
    let make = |key: &str, value: &str| -> LegacyContentRecord {
        let mut record = LegacyContentRecord::new(key);
        record.content_value = Some(value.to_string());
        record.is_active = Some(publish);
        record.is_published = Some(publish);
        record.language_code = Some(language.clone());
        record.section_identifier = Some(section.clone());
        record
    };

    let mut writes = Vec::new();

    if let Some(key) = legacy_key_for(&ContentType::Announcement, None) {
        let mut announcement = make(key, &content.announcement.text);
        announcement.cta_href = Some(content.announcement.href.clone());
        writes.push(("announcement".to_string(), announcement));
    }

    if let Some(key) = legacy_key_for(&ContentType::HeroHeading, None) {
        writes.push(("heading".to_string(), make(key, &content.heading)));
    }

    if let Some(key) = legacy_key_for(&ContentType::HeroSubheading, None) {
        writes.push(("subheading".to_string(), make(key, &content.subheading)));
    }

    if let Some(key) = legacy_key_for(&ContentType::HeroBanner, None) {
        let mut banner = make(key, &content.tagline);
        banner.image_url = content.background_image.clone();
        writes.push(("banner".to_string(), banner));
    }

    if let Some(video_url) = &content.background_video {
        if let Some(key) = legacy_key_for(&ContentType::HeroVideo, None) {
            let mut video = make(key, video_url);
            video.video_url = Some(video_url.clone());
            writes.push(("video".to_string(), video));
        }
    }

    for (index, button) in content.cta.iter().enumerate() {
        let primary = button.variant == CtaVariant::Primary;
        if let Some(key) = legacy_key_for(&ContentType::HeroCta, Some(primary)) {
            let mut record = make(key, &button.text);
            record.cta_text = Some(button.text.clone());
            record.cta_href = Some(button.href.clone());
            record.cta_primary = Some(primary);
            record.display_order = Some(DEFAULT_ORDER_CTA + index as i32);
            writes.push((format!("cta[{}]", index), record));
        }
    }

    writes
}

/// Two-phase writer over the two admin APIs.
#[derive(Clone)]
pub struct DualWriter {
    writer: Arc<dyn AdminWriter>,
}

impl DualWriter {
    pub fn new(writer: Arc<dyn AdminWriter>) -> Self {
        Self { writer }
    }

    /// Persists `content` against both backends.
    ///
    /// Phase one issues all typed-API upserts concurrently and waits for
    /// every one of them, success or failure. Phase two then issues the
    /// legacy payloads sequentially, each individually guarded. Remote
    /// failures land in the report; they never abort the cycle.
    pub async fn save(
        &self,
        content: &HeroContent,
        cached: &[TypedContentRecord],
        section: &SectionId,
        language: &LanguageCode,
        publish: bool,
    ) -> Result<DualWriteReport, AppError> {
        let plan = plan_upserts(content, cached, section, language, publish);
        log::info!(
            "Persisting hero content: {} typed upserts ({} updates)",
            plan.len(),
            plan.iter().filter(|u| u.is_update()).count()
        );

        let primary = join_all(plan.into_iter().map(|upsert| {
            let writer = Arc::clone(&self.writer);
            async move {
                let result = match upsert.payload.id {
                    Some(id) => writer.update_record(id, &upsert.payload).await,
                    None => writer.create_record(&upsert.payload).await,
                };
                match result {
                    Ok(_) => WriteOutcome::ok(upsert.field),
                    Err(e) => {
                        log::warn!("Typed write for '{}' failed: {}", upsert.field, e);
                        WriteOutcome::failed(upsert.field, &e)
                    }
                }
            }
        }))
        .await;

        // Phase two runs regardless of phase one's outcome.
        let mut fallback = Vec::new();
        for (field, payload) in plan_legacy_writes(content, section, language, publish) {
            match self.writer.write_legacy(&payload).await {
                Ok(_) => fallback.push(WriteOutcome::ok(field)),
                Err(e) => {
                    log::warn!("Legacy write for '{}' failed: {}", field, e);
                    fallback.push(WriteOutcome::failed(field, &e));
                }
            }
        }

        let report = DualWriteReport { primary, fallback };
        if !report.primary_succeeded() {
            log::warn!(
                "Typed API rejected {} of {} writes; legacy fallback {}",
                report.primary.iter().filter(|o| o.result.is_err()).count(),
                report.primary.len(),
                if report.fallback_succeeded() {
                    "succeeded"
                } else {
                    "also had failures"
                }
            );
        }
        Ok(report)
    }
}
