//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Responses carry a `success` flag plus constructor helpers so handlers
//! never build error bodies by hand. Records cross the wire as a localized
//! projection: one display string per field, resolved for the requested
//! language.

use serde::{Deserialize, Serialize};
use vitrine_core::{DesignationStats, Hall, Language, Record, Session};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Catalog status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub record_count: usize,
    pub featured_count: usize,
    pub favorites_count: usize,
    pub language: String,
    pub national_treasures: usize,
    pub treasures: usize,
}

// =============================================================================
// HALLS RESPONSE
// =============================================================================

/// Per-hall stats entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallStatsJson {
    pub hall: String,
    pub total: usize,
    pub national_treasures: usize,
    pub treasures: usize,
}

impl HallStatsJson {
    pub fn new(hall: Hall, stats: &DesignationStats) -> Self {
        Self {
            hall: hall.key().to_string(),
            total: stats.total,
            national_treasures: stats.national_treasures,
            treasures: stats.treasures,
        }
    }
}

/// Hall breakdown response. Every one of the five halls is present, with
/// zero counts rather than omissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallsResponse {
    pub halls: Vec<HallStatsJson>,
}

// =============================================================================
// RECORD PROJECTION
// =============================================================================

/// One record, localized for a single language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordJson {
    pub id: u32,
    pub name: String,
    pub period: String,
    pub category: String,
    pub description: String,
    pub detailed_info: String,
    pub hall: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub cultural_property: Option<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub exhibition_room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub artifact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub image: Option<String>,
    pub favorite: bool,
}

impl RecordJson {
    /// Project a record into one language.
    ///
    /// Returns `None` when a required field has no translation for the
    /// requested language; such records are skipped, matching the filter
    /// engine's policy for data outside the validated set.
    pub fn project(record: &Record, language: Language, favorite: bool) -> Option<Self> {
        Some(Self {
            id: record.id.value(),
            name: record.name.get(language)?.to_string(),
            period: record.period.get(language)?.to_string(),
            category: record.category.clone(),
            description: record.description.get(language)?.to_string(),
            detailed_info: record.detailed_info.get(language)?.to_string(),
            hall: record.hall.key().to_string(),
            designation: record.designation.to_string(),
            cultural_property: record.cultural_property.clone(),
            featured: record.featured,
            exhibition_room: record.exhibition_room.clone(),
            artifact_number: record.artifact_number.clone(),
            material: record
                .material
                .as_ref()
                .and_then(|m| m.get(language))
                .map(String::from),
            dimensions: record.dimensions.clone(),
            location: record
                .location
                .as_ref()
                .and_then(|l| l.get(language))
                .map(String::from),
            image: record.image.clone(),
            favorite,
        })
    }

    /// Project with favorite membership resolved from the session.
    pub fn from_session(record: &Record, session: &Session) -> Option<Self> {
        Self::project(record, session.language(), session.is_favorite(record.id))
    }
}

// =============================================================================
// RECORD LISTING RESPONSES
// =============================================================================

/// Paginated listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub success: bool,
    pub records: Vec<RecordJson>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_more: bool,
    pub error: Option<String>,
}

impl RecordsResponse {
    pub fn success(
        records: Vec<RecordJson>,
        total: usize,
        page: usize,
        limit: usize,
        has_more: bool,
    ) -> Self {
        Self {
            success: true,
            records,
            total,
            page,
            limit,
            has_more,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            records: vec![],
            total: 0,
            page: 0,
            limit: 0,
            has_more: false,
            error: Some(msg.into()),
        }
    }
}

/// Single-record response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    pub record: Option<RecordJson>,
    pub error: Option<String>,
}

impl RecordResponse {
    pub fn success(record: RecordJson) -> Self {
        Self {
            success: true,
            record: Some(record),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            record: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// SEARCH REQUEST/RESPONSE
// =============================================================================

/// Search request.
///
/// `category` omitted means "no category filter"; `language` omitted means
/// the session's active language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub term: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub records: Vec<RecordJson>,
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn success(records: Vec<RecordJson>) -> Self {
        Self {
            success: true,
            count: records.len(),
            records,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            count: 0,
            records: vec![],
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// FAVORITES REQUEST/RESPONSE
// =============================================================================

/// Add/toggle favorite request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub id: u32,
}

/// Favorites listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub success: bool,
    pub favorites: Vec<u32>,
    pub count: usize,
    pub error: Option<String>,
}

impl FavoritesResponse {
    pub fn success(favorites: Vec<u32>) -> Self {
        Self {
            success: true,
            count: favorites.len(),
            favorites,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            favorites: vec![],
            count: 0,
            error: Some(msg.into()),
        }
    }
}

/// Favorite mutation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub id: u32,
    pub favorite: bool,
    pub error: Option<String>,
}

impl ToggleResponse {
    pub fn success(id: u32, favorite: bool) -> Self {
        Self {
            success: true,
            id,
            favorite,
            error: None,
        }
    }

    pub fn error(id: u32, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            id,
            favorite: false,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// LANGUAGE REQUEST/RESPONSE
// =============================================================================

/// Language preference change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

/// Language preference response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub success: bool,
    pub language: String,
    pub supported: Vec<String>,
    pub error: Option<String>,
}

impl LanguageResponse {
    pub fn success(session: &Session) -> Self {
        Self {
            success: true,
            language: session.language().code().to_string(),
            supported: session
                .catalog()
                .config()
                .supported()
                .iter()
                .map(|lang| lang.code().to_string())
                .collect(),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            language: String::new(),
            supported: vec![],
            error: Some(msg.into()),
        }
    }
}
