//! Mandate imports service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Map;

use crate::client::{ClientInner, RequestOption};
use crate::models::{MandateImport, MandateImportId, Resource, Scheme};
use crate::Result;

/// Service for mandate import operations.
///
/// An import is created, filled with entries, then submitted for processing
/// (or cancelled). Every mutating call sends an idempotency key, generated
/// unless one is supplied with [`RequestOption::idempotency_key`].
///
/// # Example
///
/// ```no_run
/// use gocardless_rs::api::MandateImportCreateParams;
/// use gocardless_rs::models::Scheme;
///
/// # async fn example(client: gocardless_rs::GoCardlessClient) -> gocardless_rs::Result<()> {
/// let imports = client.mandate_imports();
///
/// let import = imports
///     .create(&MandateImportCreateParams { scheme: Scheme::Bacs }, &[])
///     .await?;
///
/// // ... add entries ...
///
/// let submitted = imports.submit(&import.id, &[]).await?;
/// println!("{:?}", submitted.status);
/// # Ok(())
/// # }
/// ```
pub struct MandateImportsService {
    inner: Arc<ClientInner>,
}

/// Parameters for creating a mandate import.
#[derive(Debug, Clone, Serialize)]
pub struct MandateImportCreateParams {
    /// Scheme of every mandate in the import
    pub scheme: Scheme,
}

impl MandateImportsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Start a new import.
    pub async fn create(
        &self,
        params: &MandateImportCreateParams,
        opts: &[RequestOption],
    ) -> Result<MandateImport> {
        self.inner
            .post(&[], MandateImport::KEY, params, opts)
            .await
    }

    /// Get a single import.
    pub async fn get(&self, id: &MandateImportId, opts: &[RequestOption]) -> Result<MandateImport> {
        self.inner
            .get(&MandateImport::member_segments(id.as_str()), opts)
            .await
    }

    /// Submit the import for processing. No entries can be added afterwards.
    ///
    /// In the sandbox, submitted imports are processed automatically after a
    /// short delay.
    pub async fn submit(
        &self,
        id: &MandateImportId,
        opts: &[RequestOption],
    ) -> Result<MandateImport> {
        self.action(id, "submit", opts).await
    }

    /// Cancel the import. Only imports that have not been submitted can be
    /// cancelled.
    pub async fn cancel(
        &self,
        id: &MandateImportId,
        opts: &[RequestOption],
    ) -> Result<MandateImport> {
        self.action(id, "cancel", opts).await
    }

    async fn action(
        &self,
        id: &MandateImportId,
        action: &str,
        opts: &[RequestOption],
    ) -> Result<MandateImport> {
        self.inner
            .post(
                &MandateImport::action_segments(id.as_str(), action),
                "data",
                &Map::new(),
                opts,
            )
            .await
    }
}
