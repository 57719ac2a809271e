//! Mandate PDFs service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::{ClientInner, RequestOption};
use crate::models::{MandatePdf, Resource, Scheme};
use crate::Result;

/// Service for generating mandate PDFs.
///
/// Customer and bank details may be left blank for a blank mandate, filled
/// in directly, or taken from an existing mandate via `links.mandate`.
///
/// The PDF's language follows the `Accept-Language` header:
///
/// ```no_run
/// use gocardless_rs::RequestOption;
/// use gocardless_rs::api::{MandatePdfCreateParams, MandatePdfLinks};
///
/// # async fn example(client: gocardless_rs::GoCardlessClient) -> gocardless_rs::Result<()> {
/// let params = MandatePdfCreateParams {
///     links: Some(MandatePdfLinks { mandate: Some("MD123".into()) }),
///     ..Default::default()
/// };
/// let pdf = client
///     .mandate_pdfs()
///     .create(&params, &[RequestOption::header("Accept-Language", "fr")])
///     .await?;
/// if let Some(expires_at) = pdf.expires_at {
///     println!("Download before {}: {}", expires_at, pdf.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MandatePdfsService {
    inner: Arc<ClientInner>,
}

/// Parameters for generating a mandate PDF. All fields are optional.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MandatePdfCreateParams {
    /// Name of the account holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Bank account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// SWIFT BIC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// Branch code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// International Bank Account Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Existing resources to fill the mandate from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<MandatePdfLinks>,
    /// Reference printed on the mandate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference: Option<String>,
    /// Scheme; inferred from the bank details when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    /// Date the mandate was signed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<NaiveDate>,
    /// Personal or organisation number, Autogiro only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swedish_identity_number: Option<String>,
}

/// Links for [`MandatePdfCreateParams`].
#[derive(Debug, Default, Clone, Serialize)]
pub struct MandatePdfLinks {
    /// ID of an existing mandate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate: Option<String>,
}

impl MandatePdfsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Generate a mandate PDF and return its temporary URL.
    pub async fn create(
        &self,
        params: &MandatePdfCreateParams,
        opts: &[RequestOption],
    ) -> Result<MandatePdf> {
        self.inner
            .post(&[], MandatePdf::KEY, params, opts)
            .await
    }
}
