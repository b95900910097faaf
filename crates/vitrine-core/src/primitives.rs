//! # Innate Primitives
//!
//! Hardcoded runtime constants for the Vitrine catalog engine.
//!
//! The catalog ships with zero data but fixed limits. These primitives are
//! compiled into the binary and are immutable at runtime.

// =============================================================================
// CATALOG LIMITS
// =============================================================================

/// Smallest valid record identifier. Identifiers are positive.
pub const MIN_RECORD_ID: u32 = 1;

/// Largest valid record identifier — the fixed catalog size upper bound.
///
/// The collection is a curated "100 masterpieces" set; identifiers are
/// dense-ish within this range but not required to be contiguous.
pub const MAX_RECORD_ID: u32 = 100;

/// Maximum number of records a catalog may hold.
pub const MAX_CATALOG_SIZE: usize = MAX_RECORD_ID as usize;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length, in characters, of a sanitized search input.
///
/// Longer inputs are truncated, not rejected.
pub const MAX_SEARCH_INPUT_LENGTH: usize = 100;

/// Maximum length, in characters, of a sanitized URL parameter value.
pub const MAX_PARAM_VALUE_LENGTH: usize = 200;

// =============================================================================
// DESIGNATION MARKERS
// =============================================================================

/// Substring marking a national-treasure designation in the free-text
/// cultural-property field. Takes precedence over [`TREASURE_MARKER`].
pub const NATIONAL_TREASURE_MARKER: &str = "국보";

/// Substring marking a treasure designation in the free-text
/// cultural-property field.
pub const TREASURE_MARKER: &str = "보물";

// =============================================================================
// PREFERENCE STORE KEYS
// =============================================================================

/// Preference-store key for the persisted favorites set.
///
/// The value is a JSON-encoded array of positive record identifiers.
/// Malformed or non-array content reads as "no favorites".
pub const FAVORITES_STORAGE_KEY: &str = "museum-favorites";

/// Preference-store key for the persisted language preference.
///
/// The value is one of the supported language codes. An unrecognized
/// stored value is ignored in favor of the configured default.
pub const LANGUAGE_STORAGE_KEY: &str = "museum-language";

// =============================================================================
// CONSUMER-FACING INTERVALS
// =============================================================================

/// Debounce interval for live search input, in milliseconds.
///
/// Debouncing itself is a presentation concern; consumers of the filter
/// engine that reimplement it should keep this interval and its
/// cancel-on-new-keystroke semantics.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

// =============================================================================
// SNAPSHOT FORMAT
// =============================================================================

/// Magic bytes for the catalog snapshot format header.
///
/// File Header = Magic Bytes ("VTRN") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"VTRN";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the snapshot format.
pub const FORMAT_VERSION: u8 = 1;
