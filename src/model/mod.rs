mod hero;
mod records;

pub use hero::{Announcement, CtaButton, CtaVariant, HeroContent};
pub use records::{ContentType, LegacyContentRecord, TypedContentRecord};
