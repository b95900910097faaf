//! # Snapshot Format
//!
//! Binary serialization for catalogs.
//!
//! Format: Header (5 bytes) + postcard-serialized catalog data.
//! - 4 bytes: Magic ("VTRN")
//! - 1 byte: Version
//!
//! ## Security
//!
//! Pre-deserialization validation guards against corrupted or hostile
//! snapshot files:
//! - Maximum payload size limit (`MAX_SNAPSHOT_PAYLOAD_SIZE`)
//! - Header validation before payload parsing
//! - Full catalog re-validation after decode, so an imported snapshot
//!   satisfies the same invariants as freshly ingested data

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::primitives;
use crate::types::{CatalogError, Record};
use serde::{Deserialize, Serialize};

// =============================================================================
// SIZE LIMITS
// =============================================================================

/// Maximum allowed payload size for the snapshot format.
///
/// A catalog holds at most 100 records with short translated strings;
/// 16 MB is a generous upper bound that still prevents allocation-based
/// DoS from corrupted headers.
pub const MAX_SNAPSHOT_PAYLOAD_SIZE: usize = 16 * 1024 * 1024; // 16 MB

/// Minimum valid file size (header only).
const MIN_FILE_SIZE: usize = 5;

// =============================================================================
// FILE HEADER
// =============================================================================

/// The snapshot header precedes all catalog data.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl SnapshotHeader {
    /// Create a new header with current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    /// Validate the header.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(CatalogError::SerializationError(
                "Invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(CatalogError::SerializationError(format!(
                "Unsupported version: {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    /// Write header to bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 5] {
        let mut bytes = [0u8; 5];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes
    }

    /// Read header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        if bytes.len() < 5 {
            return Err(CatalogError::SerializationError(
                "Header too short".to_string(),
            ));
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        Ok(Self {
            magic,
            version: bytes[4],
        })
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PAYLOAD SHAPE
// =============================================================================

/// The postcard payload: configuration plus records, nothing derived.
///
/// The identifier index is rebuilt (and the invariants re-checked) on
/// import via `Catalog::from_records`.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotPayload {
    config: CatalogConfig,
    records: Vec<Record>,
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize a catalog to bytes (header + payload).
///
/// This is a pure transformation - no file I/O.
pub fn catalog_to_bytes(catalog: &Catalog) -> Result<Vec<u8>, CatalogError> {
    let header = SnapshotHeader::new();
    let payload = SnapshotPayload {
        config: catalog.config().clone(),
        records: catalog.records().to_vec(),
    };

    let encoded = postcard::to_stdvec(&payload)
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(5 + encoded.len());
    result.extend_from_slice(&header.to_bytes());
    result.extend_from_slice(&encoded);

    Ok(result)
}

/// Deserialize a catalog from bytes.
///
/// This is a pure transformation - no file I/O. Validates, in order:
/// minimum size, maximum payload size, header magic and version, payload
/// decode, and finally the full catalog invariants.
pub fn catalog_from_bytes(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    if bytes.len() < MIN_FILE_SIZE {
        return Err(CatalogError::SerializationError(
            "Data too short: minimum 5 bytes required".to_string(),
        ));
    }

    if bytes.len() > MAX_SNAPSHOT_PAYLOAD_SIZE {
        return Err(CatalogError::SerializationError(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_PAYLOAD_SIZE
        )));
    }

    let header = SnapshotHeader::from_bytes(bytes)?;
    header.validate()?;

    let payload: SnapshotPayload = postcard::from_bytes(&bytes[5..]).map_err(|e| {
        CatalogError::SerializationError(format!("Failed to deserialize catalog data: {}", e))
    })?;

    Catalog::from_records(payload.records, payload.config)
}

// =============================================================================
// TESTS
// =============================================================================
