//! Tax and profitability aggregation.

use std::collections::HashMap;

use lekha_shared::types::ProductId;
use rust_decimal::Decimal;

use super::types::{
    GstSummary, InvoiceProfit, PerformanceGrouping, PerformanceRow, ProfitAndLossReport,
    ProfitAndLossTotals, SalesPerformanceReport, StockLine, StockValuationReport, TaxBucket,
};
use crate::documents::{Product, PurchaseInvoice, ReturnKind, ReturnNote, SalesInvoice};
use crate::fiscal::ReportingPeriod;

/// Currency GST filings are denominated in.
const REPORT_CURRENCY: &str = "INR";

/// Service for generating billing reports.
///
/// Pure business logic: no I/O, no shared state. Missing numeric fields
/// count as zero and unresolved product references cost zero, so every
/// function is total over well-typed input. Results do not depend on
/// input order except where a ranking is explicitly sorted.
pub struct ReportService;

impl ReportService {
    /// Generates the GST summary for a period.
    ///
    /// Outward (sales) and inward (purchase) tax is split by jurisdiction:
    /// a document whose place of supply differs from the home state accrues
    /// integrated tax; otherwise the tax is halved into central and state
    /// components. Returns of the matching kind are aggregated the same way
    /// and subtracted, so both buckets are net figures.
    #[must_use]
    pub fn gst_summary(
        sales: &[SalesInvoice],
        purchases: &[PurchaseInvoice],
        returns: &[ReturnNote],
        home_state: Option<&str>,
        period: ReportingPeriod,
    ) -> GstSummary {
        let mut outward = TaxBucket::default();
        for invoice in sales {
            if !invoice.is_reportable() || !period.contains(invoice.invoice_date) {
                continue;
            }
            Self::accumulate(
                &mut outward,
                invoice.taxable_value(),
                invoice.tax_total,
                invoice.total_amount,
                Self::is_interstate(invoice.place_of_supply.as_deref(), home_state),
            );
        }

        let mut inward = TaxBucket::default();
        for purchase in purchases {
            if !purchase.is_reportable() || !period.contains(purchase.purchase_date) {
                continue;
            }
            Self::accumulate(
                &mut inward,
                purchase.taxable_value(),
                purchase.tax_total,
                purchase.total_amount,
                Self::is_interstate(purchase.place_of_supply.as_deref(), home_state),
            );
        }

        for note in returns {
            if !period.contains(note.return_date) {
                continue;
            }
            let bucket = match note.kind {
                ReturnKind::SalesReturn => &mut outward,
                ReturnKind::PurchaseReturn => &mut inward,
            };
            Self::accumulate(
                bucket,
                -note.taxable_value(),
                -note.tax_total(),
                -note.total_amount,
                Self::is_interstate(note.supply_place(), home_state),
            );
        }

        let net_tax_payable = outward.total_tax - inward.total_tax;

        GstSummary {
            report_type: "gst_summary".to_string(),
            period_start: period.start,
            period_end: period.end,
            currency: REPORT_CURRENCY.to_string(),
            home_state: home_state.map(str::to_string),
            outward,
            inward,
            net_tax_payable,
        }
    }

    /// Generates the invoice-wise profit and loss report for a period.
    ///
    /// `cost_basis` resolves a product to its per-unit cost; an unresolved
    /// product (deleted from the catalog) costs zero, which understates
    /// COGS rather than failing the report.
    #[must_use]
    pub fn profit_and_loss<F>(
        sales: &[SalesInvoice],
        returns: &[ReturnNote],
        period: ReportingPeriod,
        cost_basis: F,
    ) -> ProfitAndLossReport
    where
        F: Fn(ProductId) -> Option<Decimal>,
    {
        let mut invoices = Vec::new();
        let mut totals = ProfitAndLossTotals::default();

        for invoice in sales {
            if !invoice.is_reportable() || !period.contains(invoice.invoice_date) {
                continue;
            }
            let cost_of_goods: Decimal = invoice
                .line_items
                .iter()
                .map(|item| {
                    item.quantity * item.product_id.and_then(&cost_basis).unwrap_or(Decimal::ZERO)
                })
                .sum();
            let taxable_value = invoice.taxable_value();
            let gross_profit = taxable_value - cost_of_goods;

            totals.sales += taxable_value;
            totals.cost_of_goods += cost_of_goods;
            totals.gross_profit += gross_profit;

            invoices.push(InvoiceProfit {
                invoice_id: invoice.id,
                invoice_date: invoice.invoice_date,
                taxable_value,
                cost_of_goods,
                gross_profit,
                margin_percent: Self::margin_percent(gross_profit, taxable_value),
            });
        }

        // Sales returns reverse revenue at their tax-exclusive value.
        totals.sales_returns_taxable = returns
            .iter()
            .filter(|note| {
                note.kind == ReturnKind::SalesReturn && period.contains(note.return_date)
            })
            .map(ReturnNote::taxable_value)
            .sum();
        totals.net_profit = totals.gross_profit - totals.sales_returns_taxable;

        ProfitAndLossReport {
            report_type: "profit_and_loss".to_string(),
            period_start: period.start,
            period_end: period.end,
            currency: REPORT_CURRENCY.to_string(),
            invoices,
            totals,
        }
    }

    /// Ranks sales performance by product or HSN code for a period.
    ///
    /// Rows are sorted by profit descending; the sort is stable, so groups
    /// with equal profit keep their first-seen order.
    #[must_use]
    pub fn sales_performance<F>(
        sales: &[SalesInvoice],
        period: ReportingPeriod,
        grouping: PerformanceGrouping,
        cost_basis: F,
    ) -> SalesPerformanceReport
    where
        F: Fn(ProductId) -> Option<Decimal>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<PerformanceRow> = Vec::new();

        for invoice in sales {
            if !invoice.is_reportable() || !period.contains(invoice.invoice_date) {
                continue;
            }
            for item in &invoice.line_items {
                let (key, label, product_id) = match grouping {
                    PerformanceGrouping::Product => (
                        item.product_id
                            .map_or_else(|| format!("desc:{}", item.description), |id| id.to_string()),
                        item.description.clone(),
                        item.product_id,
                    ),
                    PerformanceGrouping::HsnCode => {
                        let code = item
                            .hsn_code
                            .clone()
                            .unwrap_or_else(|| "UNCLASSIFIED".to_string());
                        (code.clone(), code, None)
                    }
                };

                let row_index = *index.entry(key).or_insert_with(|| {
                    rows.push(PerformanceRow {
                        label,
                        product_id,
                        quantity: Decimal::ZERO,
                        revenue: Decimal::ZERO,
                        cost: Decimal::ZERO,
                        profit: Decimal::ZERO,
                        margin_percent: Decimal::ZERO,
                    });
                    rows.len() - 1
                });

                let row = &mut rows[row_index];
                row.quantity += item.quantity;
                row.revenue += item.unit_price * item.quantity;
                row.cost +=
                    item.product_id.and_then(&cost_basis).unwrap_or(Decimal::ZERO) * item.quantity;
            }
        }

        for row in &mut rows {
            row.profit = row.revenue - row.cost;
            row.margin_percent = Self::margin_percent(row.profit, row.revenue);
        }
        rows.sort_by(|a, b| b.profit.cmp(&a.profit));

        SalesPerformanceReport {
            report_type: "sales_performance".to_string(),
            period_start: period.start,
            period_end: period.end,
            currency: REPORT_CURRENCY.to_string(),
            grouping,
            rows,
        }
    }

    /// Values closing stock at cost.
    ///
    /// This is a point-in-time snapshot of current stock, not stock as of
    /// a report end date; the upstream tool never tracked historical
    /// quantities and this keeps its figures reproducible.
    #[must_use]
    pub fn stock_valuation(products: &[Product]) -> StockValuationReport {
        let mut lines = Vec::with_capacity(products.len());
        let mut total_value = Decimal::ZERO;

        for product in products {
            let value = product.stock_quantity * product.purchase_price;
            total_value += value;
            lines.push(StockLine {
                product_id: product.id,
                name: product.name.clone(),
                quantity: product.stock_quantity,
                unit_cost: product.purchase_price,
                value,
            });
        }

        StockValuationReport {
            report_type: "stock_valuation".to_string(),
            as_of: chrono::Utc::now().date_naive(),
            currency: REPORT_CURRENCY.to_string(),
            lines,
            total_value,
        }
    }

    /// Adds one document's figures to a bucket. Negative amounts subtract
    /// (returns).
    fn accumulate(
        bucket: &mut TaxBucket,
        taxable: Decimal,
        tax: Decimal,
        gross: Decimal,
        interstate: bool,
    ) {
        bucket.taxable_value += taxable;
        bucket.total_tax += tax;
        bucket.total_gross += gross;
        if interstate {
            bucket.integrated_tax += tax;
        } else {
            let half = tax / Decimal::TWO;
            bucket.central_tax += half;
            bucket.state_tax += half;
        }
    }

    /// A document is inter-state only when both sides of the comparison are
    /// present and differ case-insensitively; a missing place on either
    /// side is not comparable and defaults to intra-state.
    fn is_interstate(place: Option<&str>, home: Option<&str>) -> bool {
        match (place, home) {
            (Some(place), Some(home)) => !place.eq_ignore_ascii_case(home),
            _ => false,
        }
    }

    /// Profit as a percentage of the base; zero when the base is zero.
    fn margin_percent(profit: Decimal, base: Decimal) -> Decimal {
        if base.is_zero() {
            Decimal::ZERO
        } else {
            (profit / base) * Decimal::ONE_HUNDRED
        }
    }
}
