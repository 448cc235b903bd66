// src/reconcile/transform.rs
//! Folding an ordered list of typed records into canonical hero content.
//!
//! The fold starts from the fallback content (with the CTA list cleared) so
//! the result is always fully populated: a record can overwrite a field, but
//! a missing record leaves the fallback value in place.

use crate::model::{ContentType, CtaButton, CtaVariant, HeroContent, TypedContentRecord};

/// Transforms typed records into a canonical `HeroContent`.
///
/// Deterministic for any permutation of the same input: records are sorted
/// by a total key (display order, then type code, then title, then CTA text)
/// before folding, so tie-breaking never depends on arrival order.
/// Unpublished records are skipped — the fold renders published content
/// only. If no CTA record survives, the fallback CTA list is restored so the
/// hero never renders without buttons.
pub fn records_to_content(records: &[TypedContentRecord]) -> HeroContent {
    let fallback = HeroContent::fallback();
    let mut content = fallback.clone();
    content.cta.clear();

    let mut ordered: Vec<&TypedContentRecord> =
        records.iter().filter(|r| r.is_published).collect();
    ordered.sort_by(|a, b| {
        (a.display_order, a.content_type.as_code(), &a.title, &a.cta_text).cmp(&(
            b.display_order,
            b.content_type.as_code(),
            &b.title,
            &b.cta_text,
        ))
    });

    for record in ordered {
        apply_record(&mut content, record);
    }

    if content.cta.is_empty() {
        content.cta = fallback.cta;
    }

    content
}

fn apply_record(content: &mut HeroContent, record: &TypedContentRecord) {
    match record.content_type {
        ContentType::Announcement => {
            content.announcement.text = first_non_empty(&record.title, record.content.as_deref())
                .unwrap_or_else(|| content.announcement.text.clone());
            if let Some(href) = record
                .cta_href
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| record.content.as_deref().filter(|s| !s.is_empty()))
            {
                content.announcement.href = href.to_string();
            }
        }
        ContentType::HeroHeading => {
            if let Some(heading) = first_non_empty(&record.title, record.content.as_deref()) {
                content.heading = heading;
            }
        }
        ContentType::HeroSubheading => {
            if let Some(subheading) = first_non_empty_opt(record.content.as_deref(), &record.title)
            {
                content.subheading = subheading;
            }
        }
        ContentType::HeroBanner => {
            if let Some(tagline) = first_non_empty_opt(record.content.as_deref(), &record.title) {
                content.tagline = tagline;
            }
            if let Some(image) = record.image_url.as_deref().filter(|s| !s.is_empty()) {
                content.background_image = Some(image.to_string());
            }
        }
        ContentType::HeroVideo => {
            if let Some(video) = record
                .video_url
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| record.content.as_deref().filter(|s| !s.is_empty()))
            {
                content.background_video = Some(video.to_string());
            }
        }
        ContentType::HeroCta => {
            let text = record
                .cta_text
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| {
                    if record.title.is_empty() {
                        "CTA"
                    } else {
                        &record.title
                    }
                });
            let href = record
                .cta_href
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("#");
            let variant = if record.cta_primary.unwrap_or(false) {
                CtaVariant::Primary
            } else {
                CtaVariant::Secondary
            };
            content.cta.push(CtaButton {
                text: text.to_string(),
                href: href.to_string(),
                variant,
            });
        }
        // Non-hero types have no home in the canonical shape.
        _ => {}
    }
}

/// Title if non-empty, else content if non-empty.
fn first_non_empty(title: &str, content: Option<&str>) -> Option<String> {
    if !title.is_empty() {
        Some(title.to_string())
    } else {
        content.filter(|s| !s.is_empty()).map(str::to_string)
    }
}

/// Content if non-empty, else title if non-empty.
fn first_non_empty_opt(content: Option<&str>, title: &str) -> Option<String> {
    content
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| {
            if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(ty: ContentType, title: &str, order: i32) -> TypedContentRecord {
        let mut r = TypedContentRecord::new(ty, title);
        r.display_order = order;
        r
    }

    fn cta(text: &str, href: &str, primary: bool, order: i32) -> TypedContentRecord {
        let mut r = TypedContentRecord::new(ContentType::HeroCta, text);
        r.cta_text = Some(text.to_string());
        r.cta_href = Some(href.to_string());
        r.cta_primary = Some(primary);
        r.display_order = order;
        r
    }

    #[test]
    fn heading_and_cta_scenario() {
        let records = vec![
            record(ContentType::HeroHeading, "Hello", 1),
            cta("Go", "/go", true, 2),
        ];
        let content = records_to_content(&records);
        assert_eq!(content.heading, "Hello");
        assert_eq!(
            content.cta,
            vec![CtaButton::primary("Go", "/go")]
        );
    }

    #[test]
    fn deterministic_for_any_permutation() {
        let records = vec![
            record(ContentType::HeroHeading, "Hello", 2),
            record(ContentType::Announcement, "News", 1),
            cta("Go", "/go", true, 3),
            cta("Docs", "/docs", false, 4),
        ];
        let baseline = records_to_content(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(records_to_content(&reversed), baseline);

        let mut rotated = records;
        rotated.rotate_left(2);
        assert_eq!(records_to_content(&rotated), baseline);
    }

    #[test]
    fn deterministic_when_display_orders_tie() {
        let a = cta("Alpha", "/a", true, 5);
        let b = cta("Beta", "/b", false, 5);
        let forward = records_to_content(&[a.clone(), b.clone()]);
        let backward = records_to_content(&[b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let records = vec![record(ContentType::HeroHeading, "Hello", 1)];
        let content = records_to_content(&records);
        let fallback = HeroContent::fallback();
        assert_eq!(content.heading, "Hello");
        assert_eq!(content.subheading, fallback.subheading);
        assert_eq!(content.tagline, fallback.tagline);
        assert_eq!(content.announcement, fallback.announcement);
    }

    #[test]
    fn cta_fallback_restores_default_buttons() {
        let records = vec![record(ContentType::HeroHeading, "Hello", 1)];
        let content = records_to_content(&records);
        assert_eq!(content.cta, HeroContent::fallback().cta);
        assert!(!content.cta.is_empty());
    }

    #[test]
    fn unpublished_records_are_skipped() {
        let mut hidden = record(ContentType::HeroHeading, "Draft", 1);
        hidden.is_published = false;
        let content = records_to_content(&[hidden]);
        assert_eq!(content.heading, HeroContent::fallback().heading);
    }

    #[test]
    fn banner_sets_tagline_and_background() {
        let mut banner = record(ContentType::HeroBanner, "", 4);
        banner.content = Some("Spring launch".to_string());
        banner.image_url = Some("https://cdn.example.com/hero.webp".to_string());
        let content = records_to_content(&[banner]);
        assert_eq!(content.tagline, "Spring launch");
        assert_eq!(
            content.background_image.as_deref(),
            Some("https://cdn.example.com/hero.webp")
        );
    }

    #[test]
    fn video_prefers_video_url_over_content() {
        let mut video = record(ContentType::HeroVideo, "", 5);
        video.video_url = Some("https://cdn.example.com/loop.mp4".to_string());
        video.content = Some("https://cdn.example.com/other.mp4".to_string());
        let content = records_to_content(&[video]);
        assert_eq!(
            content.background_video.as_deref(),
            Some("https://cdn.example.com/loop.mp4")
        );
    }

    #[test]
    fn cta_without_text_or_href_gets_placeholders() {
        let mut bare = TypedContentRecord::new(ContentType::HeroCta, "");
        bare.display_order = 6;
        let content = records_to_content(&[bare]);
        assert_eq!(content.cta.len(), 1);
        assert_eq!(content.cta[0].text, "CTA");
        assert_eq!(content.cta[0].href, "#");
        assert_eq!(content.cta[0].variant, CtaVariant::Secondary);
    }

    #[test]
    fn ctas_preserve_display_order() {
        let records = vec![
            cta("Second", "/2", false, 7),
            cta("First", "/1", true, 6),
        ];
        let content = records_to_content(&records);
        assert_eq!(content.cta[0].text, "First");
        assert_eq!(content.cta[1].text, "Second");
    }

    #[test]
    fn non_hero_types_are_ignored() {
        let records = vec![record(ContentType::FeatureCard, "Card", 1)];
        let content = records_to_content(&records);
        assert_eq!(content, {
            // Only the CTA fallback post-condition applies.
            HeroContent::fallback()
        });
    }
}
