//! Data models for the GoCardless API.
//!
//! - [`primitives`] - Identifiers, API version and environment
//! - [`enums`] - Schemes and statuses
//! - [`resource`] - The [`Resource`] descriptor and paginated list results
//! - [`currency_exchange_rate`], [`mandate_import`], [`mandate_pdf`] - Resource records

pub mod primitives;
pub mod enums;
pub mod resource;
pub mod currency_exchange_rate;
pub mod mandate_import;
pub mod mandate_pdf;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use resource::*;
pub use currency_exchange_rate::*;
pub use mandate_import::*;
pub use mandate_pdf::*;
