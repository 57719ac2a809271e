//! Mandate PDF model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// A generated mandate PDF, downloadable for a limited time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatePdf {
    /// Temporary download URL
    pub url: String,
    /// When `url` stops working
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Resource for MandatePdf {
    const PATH: &'static str = "/mandate_pdfs";
    const KEY: &'static str = "mandate_pdfs";
}
