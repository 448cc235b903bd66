// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of how
//! the reconciliation layer operates: which section it owns, which language
//! it writes by default, how long it waits before autosaving.

// ---------------------------------------------------------------------------
// Content identity defaults
// ---------------------------------------------------------------------------

/// The section identifier of the hero banner — the one section this core
/// fully reconciles. Records without an explicit section default to it.
pub const HERO_SECTION_ID: &str = "home-hero";

/// Default language code for records that carry none.
pub const DEFAULT_LANGUAGE: &str = "ko";

// ---------------------------------------------------------------------------
// Autosave timing
// ---------------------------------------------------------------------------

/// How long the store waits after a content edit before autosaving.
///
/// Long enough to coalesce a burst of keystrokes into one save cycle,
/// short enough that an edit is rarely lost to a closed session.
pub const CONTENT_AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

/// How long the store waits after a visibility toggle before autosaving.
///
/// Toggles are discrete actions, so a shorter window than content edits.
pub const VISIBILITY_AUTOSAVE_DEBOUNCE_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Default presentation order
// ---------------------------------------------------------------------------

/// Display order assigned to legacy records whose key maps to a type but
/// which carry no explicit order of their own. Mirrors the top-to-bottom
/// reading order of the hero section.
pub const DEFAULT_ORDER_ANNOUNCEMENT: i32 = 1;
pub const DEFAULT_ORDER_HEADING: i32 = 2;
pub const DEFAULT_ORDER_SUBHEADING: i32 = 3;
pub const DEFAULT_ORDER_BANNER: i32 = 4;
pub const DEFAULT_ORDER_VIDEO: i32 = 5;
pub const DEFAULT_ORDER_CTA: i32 = 6;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
