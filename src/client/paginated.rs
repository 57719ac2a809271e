//! Cursor pagination over list endpoints.
//!
//! [`ListPagingIterator`] walks a listing page by page, feeding each page's
//! `after` cursor into the next request. [`PaginatedStream`] flattens the same
//! walk into a `Stream` of individual records.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::Serialize;

use super::options::RequestOption;
use super::ClientInner;
use crate::models::{ListResult, Resource};
use crate::{Error, Result};

/// List parameters that carry a forward cursor.
pub trait CursorParams: Serialize + Clone + Send + Sync + 'static {
    /// Replace the `after` cursor.
    fn set_after(&mut self, after: Option<String>);
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetch the page following `after`, with every other filter unchanged.
async fn fetch_page<T, P>(
    inner: &ClientInner,
    params: &P,
    after: Option<String>,
    options: &[RequestOption],
) -> Result<ListResult<T>>
where
    T: Resource,
    P: CursorParams,
{
    let mut params = params.clone();
    params.set_after(after);
    inner.list::<T, P>(&params, options).await
}

/// Walks a cursor-paginated listing one page at a time.
///
/// The iterator always fetches at least one page. After that it keeps going
/// while the latest page reported a non-empty `after` cursor. Once the
/// listing is exhausted, [`advance`](Self::advance) returns the last page
/// again without sending a request.
///
/// Each page is fetched with the same filters and request options, and each
/// fetch is retried on its own. A failed fetch leaves the iterator where it
/// was, so the same page can be requested again.
///
/// # Example
///
/// ```no_run
/// use gocardless_rs::api::CurrencyExchangeRateListParams;
///
/// # async fn example(client: gocardless_rs::GoCardlessClient) -> gocardless_rs::Result<()> {
/// let params = CurrencyExchangeRateListParams {
///     source: Some("GBP".into()),
///     ..Default::default()
/// };
/// let mut pages = client.currency_exchange_rates().all(params, &[]);
///
/// while pages.has_next() {
///     let page = pages.advance().await?;
///     for rate in &page.items {
///         println!("{} -> {}: {}", rate.source, rate.target, rate.rate);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListPagingIterator<T, P> {
    inner: Arc<ClientInner>,
    params: P,
    options: Vec<RequestOption>,
    cursor: Option<String>,
    response: Option<ListResult<T>>,
}

impl<T, P> ListPagingIterator<T, P>
where
    T: Resource + Send + 'static,
    P: CursorParams,
{
    pub(crate) fn new(inner: Arc<ClientInner>, params: P, options: &[RequestOption]) -> Self {
        Self {
            inner,
            params,
            options: options.to_vec(),
            cursor: None,
            response: None,
        }
    }

    /// Returns `true` while another page may exist.
    pub fn has_next(&self) -> bool {
        self.cursor.is_some() || self.response.is_none()
    }

    /// Fetch the next page, or return the last one if the listing is done.
    pub async fn advance(&mut self) -> Result<&ListResult<T>> {
        if !self.has_next() {
            return self.response.as_ref().ok_or(Error::MissingResult);
        }

        let page = fetch_page::<T, P>(
            &self.inner,
            &self.params,
            self.cursor.clone(),
            &self.options,
        )
        .await?;

        self.cursor = page.next_cursor().map(String::from);
        tracing::debug!(
            path = T::PATH,
            items = page.items.len(),
            next = self.cursor.as_deref().unwrap_or(""),
            "fetched page"
        );

        Ok(&*self.response.insert(page))
    }

    /// The most recently fetched page.
    pub fn last_response(&self) -> Option<&ListResult<T>> {
        self.response.as_ref()
    }

    /// The cursor the next fetch will use.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Yield the records of every page not fetched yet, one at a time.
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use gocardless_rs::api::CurrencyExchangeRateListParams;
    ///
    /// # async fn example(client: gocardless_rs::GoCardlessClient) -> gocardless_rs::Result<()> {
    /// let mut rates = client
    ///     .currency_exchange_rates()
    ///     .all(CurrencyExchangeRateListParams::default(), &[])
    ///     .into_stream();
    ///
    /// while let Some(rate) = rates.next().await {
    ///     println!("{:?}", rate?);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_stream(self) -> PaginatedStream<T> {
        let start = if self.has_next() {
            Some(self.cursor)
        } else {
            None
        };

        let inner = self.inner;
        let params = Arc::new(self.params);
        let options: Arc<[RequestOption]> = self.options.into();

        PaginatedStream::new(start, move |after| {
            let inner = inner.clone();
            let params = params.clone();
            let options = options.clone();

            Box::pin(async move { fetch_page::<T, P>(&inner, &params, after, &options).await })
        })
    }
}

/// A stream that lazily fetches pages from a cursor-paginated endpoint.
///
/// This stream yields individual items from each page, fetching the next
/// page when the current one is used up. It ends after the first error.
pub struct PaginatedStream<T> {
    /// Function to fetch the page after a cursor.
    fetch_page: Box<dyn Fn(Option<String>) -> BoxFuture<'static, Result<ListResult<T>>> + Send + Sync>,
    /// Current page of items being yielded.
    current_items: VecDeque<T>,
    /// Cursor of the next page to fetch, None if exhausted.
    next_page: Option<Option<String>>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<ListResult<T>>>>,
}

impl<T> PaginatedStream<T> {
    /// Create a stream starting at `start`.
    ///
    /// `Some(None)` begins at the first page, `Some(Some(cursor))` after
    /// `cursor`, and `None` yields nothing.
    pub fn new<F>(start: Option<Option<String>>, fetch_page: F) -> Self
    where
        F: Fn(Option<String>) -> BoxFuture<'static, Result<ListResult<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: start,
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.next_page = page.next_cursor().map(|c| Some(c.to_string()));
                        this.current_items = page.items.into();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match this.next_page.take() {
                Some(after) => {
                    this.pending_fetch = Some((this.fetch_page)(after));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}
