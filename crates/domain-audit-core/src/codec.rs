//! Snapshot codec: JSON serialization followed by Snappy compression.
//!
//! Audit entries store full before/after snapshots. Domains with many
//! attribute scopes produce large, highly repetitive JSON, so snapshots are
//! compressed with the Snappy raw format before they reach storage. The
//! encoding tag [`ENCODING_JSON_SNAPPY`] is persisted next to the bytes.

use crate::errors::{AuditError, DecodeStage, Result};
use crate::model::DomainSnapshot;

/// Encoding tag for JSON serialization with Snappy compression
pub const ENCODING_JSON_SNAPPY: &str = "json-snappy";

/// Serialize a snapshot to JSON and compress it
///
/// # Errors
///
/// - `Encode` — the snapshot could not be serialized or compressed. Not
///   expected for snapshots built from the model types.
pub fn serialize_and_compress(snapshot: &DomainSnapshot) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(snapshot).map_err(|e| AuditError::Encode {
        message: e.to_string(),
    })?;

    snap::raw::Encoder::new()
        .compress_vec(&json)
        .map_err(|e| AuditError::Encode {
            message: e.to_string(),
        })
}

/// Reverse [`serialize_and_compress`]
///
/// # Errors
///
/// - `Decode` with [`DecodeStage::Decompress`] — the bytes are not valid Snappy output
/// - `Decode` with [`DecodeStage::Deserialize`] — the payload is not a valid snapshot
pub fn decompress_and_deserialize(compressed: &[u8]) -> Result<DomainSnapshot> {
    let json = snap::raw::Decoder::new()
        .decompress_vec(compressed)
        .map_err(|e| AuditError::Decode {
            stage: DecodeStage::Decompress,
            message: e.to_string(),
        })?;

    serde_json::from_slice(&json).map_err(|e| AuditError::Decode {
        stage: DecodeStage::Deserialize,
        message: e.to_string(),
    })
}
