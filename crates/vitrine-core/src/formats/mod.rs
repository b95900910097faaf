//! # Serialization Formats
//!
//! Binary snapshot format for catalogs. File I/O lives in the app layer;
//! everything here is a pure bytes transformation.

mod persistence;

pub use persistence::{
    MAX_SNAPSHOT_PAYLOAD_SIZE, SnapshotHeader, catalog_from_bytes, catalog_to_bytes,
};
