//! Mandate import model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MandateImportStatus, Scheme};
use super::primitives::MandateImportId;
use super::resource::Resource;

/// A batch of mandates being moved onto GoCardless from another provider.
///
/// Imports are created empty, filled with entries, then submitted for
/// processing or cancelled. Only `id` is required when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandateImport {
    /// Unique identifier, beginning with `IM`
    pub id: MandateImportId,
    /// When the import was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Scheme every mandate in the import runs on
    #[serde(default)]
    pub scheme: Scheme,
    /// Current lifecycle state
    #[serde(default)]
    pub status: MandateImportStatus,
}

impl Resource for MandateImport {
    const PATH: &'static str = "/mandate_imports";
    const KEY: &'static str = "mandate_imports";
}
