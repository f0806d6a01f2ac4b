//! Report data types.

use chrono::NaiveDate;
use lekha_shared::types::{InvoiceId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accumulated tax figures for one direction of trade.
///
/// Intra-state tax is split into equal central and state halves;
/// inter-state tax accrues to the integrated component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxBucket {
    /// Sum of taxable (tax-exclusive) values.
    pub taxable_value: Decimal,
    /// Integrated tax on inter-state supplies.
    pub integrated_tax: Decimal,
    /// Central half of intra-state tax.
    pub central_tax: Decimal,
    /// State half of intra-state tax.
    pub state_tax: Decimal,
    /// Total tax, equal to integrated + central + state.
    pub total_tax: Decimal,
    /// Sum of gross (tax-inclusive) document totals.
    pub total_gross: Decimal,
}

/// GST summary report: outward liability, input tax credit, net payable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstSummary {
    /// Report type identifier.
    pub report_type: String,
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Home state the intra/inter-state split was computed against.
    pub home_state: Option<String>,
    /// Outward supplies (sales), net of sales returns.
    pub outward: TaxBucket,
    /// Inward supplies (purchases), net of purchase returns.
    pub inward: TaxBucket,
    /// Net tax payable: outward total tax minus input tax credit.
    pub net_tax_payable: Decimal,
}

/// Profitability of a single invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceProfit {
    /// Invoice ID.
    pub invoice_id: InvoiceId,
    /// Invoice date.
    pub invoice_date: NaiveDate,
    /// Taxable value of the invoice.
    pub taxable_value: Decimal,
    /// Cost of goods sold on the invoice.
    pub cost_of_goods: Decimal,
    /// Taxable value minus cost of goods.
    pub gross_profit: Decimal,
    /// Profit as a percentage of taxable value; zero when the taxable
    /// value is zero.
    pub margin_percent: Decimal,
}

/// Profit and loss totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitAndLossTotals {
    /// Total taxable sales.
    pub sales: Decimal,
    /// Total cost of goods sold.
    pub cost_of_goods: Decimal,
    /// Sum of per-invoice gross profit.
    pub gross_profit: Decimal,
    /// Taxable value of sales returns in the period.
    pub sales_returns_taxable: Decimal,
    /// Gross profit minus sales returns.
    pub net_profit: Decimal,
}

/// Invoice-wise profit and loss report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAndLossReport {
    /// Report type identifier.
    pub report_type: String,
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Per-invoice profitability rows.
    pub invoices: Vec<InvoiceProfit>,
    /// Totals.
    pub totals: ProfitAndLossTotals,
}

/// How sales performance rows are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceGrouping {
    /// One row per product.
    Product,
    /// One row per HSN/SAC classification code.
    HsnCode,
}

/// One row of the sales performance ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRow {
    /// Product name or HSN code, depending on the grouping.
    pub label: String,
    /// Product ID when grouped by product.
    pub product_id: Option<ProductId>,
    /// Units sold.
    pub quantity: Decimal,
    /// Revenue (unit price times quantity, tax-exclusive).
    pub revenue: Decimal,
    /// Cost of goods (cost basis times quantity).
    pub cost: Decimal,
    /// Revenue minus cost.
    pub profit: Decimal,
    /// Profit as a percentage of revenue; zero when revenue is zero.
    pub margin_percent: Decimal,
}

/// Sales performance report, ranked by profit descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPerformanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Grouping the rows were aggregated under.
    pub grouping: PerformanceGrouping,
    /// Ranked rows.
    pub rows: Vec<PerformanceRow>,
}

/// One product's share of the stock valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Units in stock.
    pub quantity: Decimal,
    /// Cost basis per unit.
    pub unit_cost: Decimal,
    /// Quantity times unit cost.
    pub value: Decimal,
}

/// Closing stock valuation report.
///
/// Values stock as it stands now, not as of a report end date; the
/// `as_of` field makes the snapshot semantics visible to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockValuationReport {
    /// Report type identifier.
    pub report_type: String,
    /// Date the snapshot was taken.
    pub as_of: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Per-product valuation lines.
    pub lines: Vec<StockLine>,
    /// Total stock value.
    pub total_value: Decimal,
}
