// src/model/records.rs
//! Backend record shapes: the typed admin representation and the legacy
//! flat key-value representation.
//!
//! Both are wire DTOs (camelCase on the wire) and both can describe the same
//! hero section. The reconciliation layer normalizes either into
//! [`HeroContent`](crate::model::HeroContent).

use crate::constants;
use crate::types::{LanguageCode, RecordId, SectionId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type enumeration carried by typed records.
///
/// The backend sends SCREAMING_SNAKE codes (`HERO_HEADING`). Codes this
/// client doesn't know are preserved in `Other` rather than rejected, so a
/// backend that grows new section types doesn't break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Announcement,
    HeroHeading,
    HeroSubheading,
    HeroBanner,
    HeroVideo,
    HeroCta,
    FeatureCard,
    Testimonial,
    Other(String),
}

impl ContentType {
    /// The wire code for this type.
    pub fn as_code(&self) -> &str {
        match self {
            Self::Announcement => "ANNOUNCEMENT",
            Self::HeroHeading => "HERO_HEADING",
            Self::HeroSubheading => "HERO_SUBHEADING",
            Self::HeroBanner => "HERO_BANNER",
            Self::HeroVideo => "HERO_VIDEO",
            Self::HeroCta => "HERO_CTA",
            Self::FeatureCard => "FEATURE_CARD",
            Self::Testimonial => "TESTIMONIAL",
            Self::Other(code) => code,
        }
    }

    /// Whether records of this type belong to the hero section: any
    /// `HERO_*` type plus the announcement strip.
    pub fn is_hero(&self) -> bool {
        self.as_code().starts_with("HERO") || matches!(self, Self::Announcement)
    }

    /// Presentation order assigned when a record carries none of its own.
    pub fn default_display_order(&self) -> i32 {
        match self {
            Self::Announcement => constants::DEFAULT_ORDER_ANNOUNCEMENT,
            Self::HeroHeading => constants::DEFAULT_ORDER_HEADING,
            Self::HeroSubheading => constants::DEFAULT_ORDER_SUBHEADING,
            Self::HeroBanner => constants::DEFAULT_ORDER_BANNER,
            Self::HeroVideo => constants::DEFAULT_ORDER_VIDEO,
            Self::HeroCta => constants::DEFAULT_ORDER_CTA,
            _ => i32::MAX,
        }
    }

    /// Human-readable label used when a legacy record carries no title.
    pub fn default_label(&self) -> &str {
        match self {
            Self::Announcement => "Announcement",
            Self::HeroHeading => "Hero heading",
            Self::HeroSubheading => "Hero subheading",
            Self::HeroBanner => "Hero banner",
            Self::HeroVideo => "Hero video",
            Self::HeroCta => "Hero CTA",
            Self::FeatureCard => "Feature card",
            Self::Testimonial => "Testimonial",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ContentType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "ANNOUNCEMENT" => Self::Announcement,
            "HERO_HEADING" => Self::HeroHeading,
            "HERO_SUBHEADING" => Self::HeroSubheading,
            "HERO_BANNER" => Self::HeroBanner,
            "HERO_VIDEO" => Self::HeroVideo,
            "HERO_CTA" => Self::HeroCta,
            "FEATURE_CARD" => Self::FeatureCard,
            "TESTIMONIAL" => Self::Testimonial,
            _ => Self::Other(code),
        }
    }
}

impl From<ContentType> for String {
    fn from(ty: ContentType) -> Self {
        ty.as_code().to_string()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

fn default_language() -> LanguageCode {
    LanguageCode::new(constants::DEFAULT_LANGUAGE).expect("default language constant is valid")
}

fn default_section() -> SectionId {
    SectionId::new(constants::HERO_SECTION_ID).expect("hero section constant is valid")
}

fn default_published() -> bool {
    true
}

/// A content record from the typed admin API.
///
/// At most one record of each type is meaningful per section+language,
/// except `HERO_CTA`, whose records form an ordered list by `display_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedContentRecord {
    /// Absent on records built locally and not yet created on the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub content_type: ContentType,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_primary: Option<bool>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default = "default_language")]
    pub language_code: LanguageCode,
    #[serde(default = "default_section")]
    pub section_identifier: SectionId,
    /// Presentation extras the reconciliation layer never interprets but
    /// must carry forward on writes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TypedContentRecord {
    /// A minimal record of the given type, useful as a building block.
    pub fn new(content_type: ContentType, title: impl Into<String>) -> Self {
        let display_order = content_type.default_display_order();
        Self {
            id: None,
            content_type,
            title: title.into(),
            content: None,
            image_url: None,
            video_url: None,
            cta_text: None,
            cta_href: None,
            cta_primary: None,
            display_order,
            is_published: true,
            language_code: default_language(),
            section_identifier: default_section(),
            css_class: None,
            icon_class: None,
            metadata: None,
            updated_at: None,
        }
    }
}

/// A content record from the legacy flat key-value API.
///
/// Identified by a dotted-path `content_key` (e.g. `hero.cta.primary`)
/// rather than a type enumeration. Nearly every field is optional; the
/// legacy mapper supplies defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub content_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    /// The legacy API's older publish flag; `is_published` wins when both
    /// are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_identifier: Option<SectionId>,
}

impl LegacyContentRecord {
    /// A minimal record for the given key, useful as a building block.
    pub fn new(content_key: impl Into<String>) -> Self {
        Self {
            id: None,
            content_key: content_key.into(),
            content_value: None,
            description: None,
            image_url: None,
            video_url: None,
            cta_text: None,
            cta_href: None,
            cta_primary: None,
            display_order: None,
            is_active: None,
            is_published: None,
            language_code: None,
            section_identifier: None,
        }
    }
}
