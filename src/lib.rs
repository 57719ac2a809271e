//! # gocardless-rs
//!
//! A Rust client for the GoCardless Pro API.
//!
//! Each API resource is exposed as a service on [`GoCardlessClient`]. All
//! calls share one request protocol:
//!
//! - **Request options**: per-call [`RequestOption`]s applied in order, for
//!   retries, idempotency keys, extra headers and deadlines
//! - **Retries**: a failed attempt is retried immediately, 3 times by default
//! - **Idempotency**: mutating calls carry an `Idempotency-Key`, generated
//!   once per call and reused by its retries
//! - **Envelopes**: responses are decoded into the payload or the API's
//!   structured [`ApiError`]
//! - **Pagination**: list endpoints can be walked page by page with a
//!   [`ListPagingIterator`], or item by item as a stream
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gocardless_rs::{ClientConfig, Environment, GoCardlessClient, RequestOption};
//! use gocardless_rs::api::CurrencyExchangeRateListParams;
//!
//! #[tokio::main]
//! async fn main() -> gocardless_rs::Result<()> {
//!     let client = GoCardlessClient::new(
//!         std::env::var("GOCARDLESS_ACCESS_TOKEN").unwrap_or_default(),
//!         ClientConfig::default().with_environment(Environment::Sandbox),
//!     )?;
//!
//!     let params = CurrencyExchangeRateListParams {
//!         source: Some("GBP".into()),
//!         ..Default::default()
//!     };
//!     let mut pages = client
//!         .currency_exchange_rates()
//!         .all(params, &[RequestOption::retries(5)]);
//!
//!     while pages.has_next() {
//!         let page = pages.advance().await?;
//!         println!("{} rates", page.items.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Mandate Imports
//!
//! ```rust,no_run
//! use gocardless_rs::{GoCardlessClient, RequestOption};
//! use gocardless_rs::api::MandateImportCreateParams;
//! use gocardless_rs::models::Scheme;
//!
//! # async fn example(client: GoCardlessClient) -> gocardless_rs::Result<()> {
//! let import = client
//!     .mandate_imports()
//!     .create(
//!         &MandateImportCreateParams { scheme: Scheme::SepaCore },
//!         &[RequestOption::idempotency_key("import-2024-03")],
//!     )
//!     .await?;
//!
//! match client.mandate_imports().submit(&import.id, &[]).await {
//!     Ok(submitted) => println!("Submitted: {:?}", submitted.status),
//!     Err(err) if err.api_error().is_some() => println!("Rejected: {}", err),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{
    ClientConfig, GoCardlessClient, ListPagingIterator, RequestOption, RequestOptions, RetryConfig,
};
pub use error::{ApiError, ApiErrorType, Error, Result};
pub use models::{ApiVersion, Environment, ListResult, MandateImportId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use gocardless_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CreatedAtFilter, CurrencyExchangeRateListParams, MandateImportCreateParams,
        MandatePdfCreateParams, MandatePdfLinks,
    };
    pub use crate::client::{
        ClientConfig, GoCardlessClient, ListPagingIterator, PaginatedStream, RequestOption,
        RetryConfig,
    };
    pub use crate::error::{ApiError, ApiErrorType, Error, Result};
    pub use crate::models::{
        ApiVersion, CurrencyExchangeRate, Environment, ListResult, MandateImport,
        MandateImportId, MandateImportStatus, MandatePdf, Scheme,
    };
}
