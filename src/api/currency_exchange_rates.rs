//! Currency exchange rates service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{ClientInner, CursorParams, ListPagingIterator, RequestOption};
use crate::models::{CurrencyExchangeRate, ListResult};
use crate::Result;

/// Service for currency exchange rates.
///
/// # Example
///
/// ```no_run
/// use gocardless_rs::api::CurrencyExchangeRateListParams;
///
/// # async fn example(client: gocardless_rs::GoCardlessClient) -> gocardless_rs::Result<()> {
/// let params = CurrencyExchangeRateListParams {
///     source: Some("GBP".into()),
///     target: Some("EUR".into()),
///     ..Default::default()
/// };
/// let page = client.currency_exchange_rates().list(&params, &[]).await?;
/// for rate in page.items {
///     println!("{} -> {}: {}", rate.source, rate.target, rate.rate);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CurrencyExchangeRatesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing exchange rates.
///
/// Every field is optional; unset fields are not sent.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CurrencyExchangeRateListParams {
    /// Return records after this cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Return records before this cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Bounds on the publication time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<CreatedAtFilter>,
    /// Records per page (API maximum 500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Source currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Target currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CursorParams for CurrencyExchangeRateListParams {
    fn set_after(&mut self, after: Option<String>) {
        self.after = after;
    }
}

/// Date-range bounds, sent as `created_at[gt]` and friends.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CreatedAtFilter {
    /// Strictly after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<DateTime<Utc>>,
    /// At or after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<DateTime<Utc>>,
    /// Strictly before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<DateTime<Utc>>,
    /// At or before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<DateTime<Utc>>,
}

impl CurrencyExchangeRatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of exchange rates.
    pub async fn list(
        &self,
        params: &CurrencyExchangeRateListParams,
        opts: &[RequestOption],
    ) -> Result<ListResult<CurrencyExchangeRate>> {
        self.inner.list(params, opts).await
    }

    /// Walk every page of exchange rates matching `params`.
    ///
    /// No request is sent until the iterator is advanced. `params.after` is
    /// managed by the iterator and ignored.
    pub fn all(
        &self,
        params: CurrencyExchangeRateListParams,
        opts: &[RequestOption],
    ) -> ListPagingIterator<CurrencyExchangeRate, CurrencyExchangeRateListParams> {
        ListPagingIterator::new(self.inner.clone(), params, opts)
    }
}
