//! Report generation over a pluggable document source.

use std::collections::HashMap;

use lekha_shared::config::BusinessConfig;
use lekha_shared::types::{BusinessId, ProductId};
use lekha_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::{error, info};

use super::error::ReportError;
use super::service::ReportService;
use super::types::{
    GstSummary, PerformanceGrouping, ProfitAndLossReport, SalesPerformanceReport,
    StockValuationReport,
};
use crate::documents::{BusinessProfile, Product, PurchaseInvoice, ReturnNote, SalesInvoice};
use crate::fiscal::ReportingPeriod;

/// Source of billing documents, scoped to a business.
///
/// Implementations live with the embedding application (a hosted database
/// service, a file import, a test fixture). Documents are returned already
/// filtered to the given business; date filtering may happen here or be
/// left to the aggregation, which filters again by document date.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches sales invoices dated within the period.
    async fn sales_invoices(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
    ) -> AppResult<Vec<SalesInvoice>>;

    /// Fetches purchase invoices dated within the period.
    async fn purchase_invoices(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
    ) -> AppResult<Vec<PurchaseInvoice>>;

    /// Fetches return notes dated within the period.
    async fn return_notes(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
    ) -> AppResult<Vec<ReturnNote>>;

    /// Fetches the full product catalog for the business.
    async fn products(&self, business: BusinessId) -> AppResult<Vec<Product>>;

    /// Fetches the business profile.
    async fn business_profile(&self, business: BusinessId) -> AppResult<BusinessProfile>;
}

/// Fetches documents and delegates to the pure [`ReportService`].
pub struct ReportGenerator<S> {
    source: S,
    fallback_home_state: Option<String>,
    currency: String,
}

impl<S: DocumentSource> ReportGenerator<S> {
    /// Creates a generator with no configured fallbacks.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback_home_state: None,
            currency: "INR".to_string(),
        }
    }

    /// Creates a generator that applies business-level configuration
    /// defaults: the fallback home state and the report currency.
    #[must_use]
    pub fn from_config(source: S, config: &BusinessConfig) -> Self {
        Self {
            source,
            fallback_home_state: config.home_state.clone(),
            currency: config.currency.clone(),
        }
    }

    /// Generates the GST summary for a business and period.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` for an inverted period and
    /// `ReportError::Source` when the document source fails.
    pub async fn gst_summary(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
    ) -> Result<GstSummary, ReportError> {
        Self::validate(period)?;
        let home_state = self.home_state(business).await?;
        let sales = self
            .source
            .sales_invoices(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching sales invoices", e))?;
        let purchases = self
            .source
            .purchase_invoices(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching purchase invoices", e))?;
        let returns = self
            .source
            .return_notes(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching return notes", e))?;

        let mut report =
            ReportService::gst_summary(&sales, &purchases, &returns, home_state.as_deref(), period);
        report.currency.clone_from(&self.currency);
        info!(
            "generated gst summary for {business}: outward tax {}, net payable {}",
            report.outward.total_tax, report.net_tax_payable
        );
        Ok(report)
    }

    /// Generates the invoice-wise profit and loss report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` for an inverted period and
    /// `ReportError::Source` when the document source fails.
    pub async fn profit_and_loss(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
    ) -> Result<ProfitAndLossReport, ReportError> {
        Self::validate(period)?;
        let sales = self
            .source
            .sales_invoices(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching sales invoices", e))?;
        let returns = self
            .source
            .return_notes(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching return notes", e))?;
        let costs = self.cost_lookup(business).await?;

        let mut report =
            ReportService::profit_and_loss(&sales, &returns, period, |id| costs.get(&id).copied());
        report.currency.clone_from(&self.currency);
        info!(
            "generated profit and loss for {business}: {} invoices, net profit {}",
            report.invoices.len(),
            report.totals.net_profit
        );
        Ok(report)
    }

    /// Generates the sales performance ranking.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` for an inverted period and
    /// `ReportError::Source` when the document source fails.
    pub async fn sales_performance(
        &self,
        business: BusinessId,
        period: ReportingPeriod,
        grouping: PerformanceGrouping,
    ) -> Result<SalesPerformanceReport, ReportError> {
        Self::validate(period)?;
        let sales = self
            .source
            .sales_invoices(business, period)
            .await
            .map_err(|e| Self::source_failure("fetching sales invoices", e))?;
        let costs = self.cost_lookup(business).await?;

        let mut report = ReportService::sales_performance(&sales, period, grouping, |id| {
            costs.get(&id).copied()
        });
        report.currency.clone_from(&self.currency);
        info!(
            "generated sales performance for {business}: {} rows",
            report.rows.len()
        );
        Ok(report)
    }

    /// Generates the stock valuation snapshot. Not date-ranged: it values
    /// stock as it stands now.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Source` when the document source fails.
    pub async fn stock_valuation(
        &self,
        business: BusinessId,
    ) -> Result<StockValuationReport, ReportError> {
        let products = self
            .source
            .products(business)
            .await
            .map_err(|e| Self::source_failure("fetching products", e))?;

        let mut report = ReportService::stock_valuation(&products);
        report.currency.clone_from(&self.currency);
        info!(
            "valued closing stock for {business}: {} products, total {}",
            report.lines.len(),
            report.total_value
        );
        Ok(report)
    }

    /// Resolves the home state: the stored profile's, else the configured
    /// fallback.
    async fn home_state(&self, business: BusinessId) -> Result<Option<String>, ReportError> {
        let profile = self
            .source
            .business_profile(business)
            .await
            .map_err(|e| Self::source_failure("fetching business profile", e))?;
        Ok(profile
            .home_state
            .or_else(|| self.fallback_home_state.clone()))
    }

    /// Builds the product cost-basis lookup table.
    async fn cost_lookup(
        &self,
        business: BusinessId,
    ) -> Result<HashMap<ProductId, Decimal>, ReportError> {
        let products = self
            .source
            .products(business)
            .await
            .map_err(|e| Self::source_failure("fetching products", e))?;
        Ok(products
            .into_iter()
            .map(|product| (product.id, product.purchase_price))
            .collect())
    }

    fn validate(period: ReportingPeriod) -> Result<(), ReportError> {
        if period.is_valid() {
            Ok(())
        } else {
            Err(ReportError::InvalidDateRange {
                start: period.start,
                end: period.end,
            })
        }
    }

    fn source_failure(context: &str, error: AppError) -> ReportError {
        error!("{context}: {error}");
        ReportError::Source(error)
    }
}
