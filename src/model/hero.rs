// src/model/hero.rs
//! The canonical hero content shape — the single representation the UI
//! renders, independent of which backend the data came from.
//!
//! Invariant: a `HeroContent` is always fully populated. Consumers never
//! handle partial or missing content; anything the backends fail to supply
//! is filled from [`HeroContent::fallback`].

use serde::{Deserialize, Serialize};

/// The announcement strip shown above the hero heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub text: String,
    pub href: String,
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
}

/// A single call-to-action button in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    pub variant: CtaVariant,
}

impl CtaButton {
    pub fn primary(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            variant: CtaVariant::Primary,
        }
    }

    pub fn secondary(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            variant: CtaVariant::Secondary,
        }
    }
}

/// Canonical hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub announcement: Announcement,
    pub heading: String,
    pub subheading: String,
    pub tagline: String,
    pub cta: Vec<CtaButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_video: Option<String>,
}

impl HeroContent {
    /// The hard-coded canonical content used when no backend data is
    /// available. Every field carries a renderable value.
    pub fn fallback() -> Self {
        Self {
            announcement: Announcement {
                text: "New: Atlas 2.0 is now generally available".to_string(),
                href: "/blog/atlas-2-0".to_string(),
            },
            heading: "Ship enterprise software faster".to_string(),
            subheading: "Atlas gives your team one platform to plan, build, and \
                         deliver — without the integration sprawl."
                .to_string(),
            tagline: "Trusted by 400+ B2B engineering teams".to_string(),
            cta: vec![
                CtaButton::primary("Get started", "/signup"),
                CtaButton::secondary("Talk to sales", "/contact"),
            ],
            background_image: None,
            background_video: None,
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self::fallback()
    }
}
