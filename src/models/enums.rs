//! Enumeration types for the GoCardless API.

use serde::{Deserialize, Serialize};

/// Direct debit scheme a mandate runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// US ACH
    Ach,
    /// Swedish Autogiro
    Autogiro,
    /// UK Bacs
    Bacs,
    /// Australian BECS
    Becs,
    /// New Zealand BECS
    BecsNz,
    /// Danish Betalingsservice
    Betalingsservice,
    /// UK Faster Payments
    FasterPayments,
    /// Canadian PAD
    Pad,
    /// Australian PayTo
    PayTo,
    /// SEPA Core direct debit
    SepaCore,
    /// A scheme this client does not know about, or none was sent
    #[default]
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a mandate import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateImportStatus {
    /// Created; entries may still be added
    Created,
    /// Submitted for review by GoCardless
    Submitted,
    /// Cancelled before processing
    Cancelled,
    /// Being processed
    Processing,
    /// Processing finished; mandates have been set up
    Processed,
    /// A status this client does not know about, or none was sent
    #[default]
    #[serde(other)]
    Unknown,
}

impl MandateImportStatus {
    /// Returns `true` if entries can still be added to the import.
    pub fn is_open(&self) -> bool {
        matches!(self, MandateImportStatus::Created)
    }

    /// Returns `true` if the import can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MandateImportStatus::Cancelled | MandateImportStatus::Processed
        )
    }
}
