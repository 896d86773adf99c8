//! Service account key files.

use serde::Deserialize;

use crate::error::Result;

/// The part of a service account key file this crate looks at.
///
/// Every other field of the key (private key material included) is skipped
/// during deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceAccountKey {
    /// Project the service account belongs to.
    pub project_id: Option<String>,
}

impl ServiceAccountKey {
    /// Parses a key from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
