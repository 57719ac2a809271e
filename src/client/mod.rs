//! HTTP client and request execution for the GoCardless API.
//!
//! This module provides the main entry point [`GoCardlessClient`] along with
//! the machinery every call shares: request option resolution, the retry
//! executor, envelope decoding and cursor pagination.
//!
//! # Example
//!
//! ```no_run
//! use gocardless_rs::GoCardlessClient;
//! use gocardless_rs::api::CurrencyExchangeRateListParams;
//!
//! # async fn example() -> gocardless_rs::Result<()> {
//! let client = GoCardlessClient::sandbox("sandbox_token")?;
//!
//! let page = client
//!     .currency_exchange_rates()
//!     .list(&CurrencyExchangeRateListParams::default(), &[])
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod envelope;
mod http;
mod options;
pub mod paginated;
pub mod query;
pub mod retry;

pub use config::{default_user_agent, ClientConfig, RetryConfig, CLIENT_LIBRARY, CLIENT_VERSION};
pub use envelope::Envelope;
pub use http::{GoCardlessClient, ACCESS_TOKEN_VAR, ENVIRONMENT_VAR};
pub use options::{new_idempotency_key, RequestOption, RequestOptions};
pub use paginated::{CursorParams, ListPagingIterator, PaginatedStream};
pub use retry::RetryPolicy;
pub(crate) use http::ClientInner;
