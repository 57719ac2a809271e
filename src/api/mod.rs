//! API service modules for GoCardless endpoints.
//!
//! Each service provides methods for one API resource. Every method accepts
//! a slice of [`RequestOption`](crate::RequestOption)s.

mod currency_exchange_rates;
mod mandate_imports;
mod mandate_pdfs;

pub use currency_exchange_rates::{
    CreatedAtFilter, CurrencyExchangeRateListParams, CurrencyExchangeRatesService,
};
pub use mandate_imports::{MandateImportCreateParams, MandateImportsService};
pub use mandate_pdfs::{MandatePdfCreateParams, MandatePdfLinks, MandatePdfsService};
