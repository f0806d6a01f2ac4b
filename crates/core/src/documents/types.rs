//! Billing document record types.

use chrono::NaiveDate;
use lekha_shared::types::{BusinessId, CustomerId, InvoiceId, ProductId, PurchaseId, ReturnId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a billing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Being drafted, not yet issued.
    Draft,
    /// Issued to the counterparty.
    Issued,
    /// Fully settled.
    Paid,
    /// Cancelled after issue.
    Void,
}

impl DocumentStatus {
    /// Returns true if documents in this status count toward aggregates.
    ///
    /// Draft and void documents are excluded from every revenue, tax, and
    /// profit figure.
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        !matches!(self, Self::Draft | Self::Void)
    }
}

/// One line of an invoice or return note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product this line refers to, if still resolvable.
    pub product_id: Option<ProductId>,
    /// Free-text description shown on the document.
    pub description: String,
    /// HSN/SAC classification code for tax filings.
    pub hsn_code: Option<String>,
    /// Quantity sold or returned.
    pub quantity: Decimal,
    /// Price per unit, tax-exclusive.
    pub unit_price: Decimal,
    /// Tax rate applied, in percent.
    pub tax_rate: Decimal,
    /// Tax charged on this line.
    pub tax_amount: Decimal,
    /// Line total including tax.
    pub total: Decimal,
}

/// An outward (sales) invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesInvoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Business this invoice belongs to.
    pub business_id: BusinessId,
    /// Customer billed, if recorded.
    pub customer_id: Option<CustomerId>,
    /// Invoice date.
    pub invoice_date: NaiveDate,
    /// Taxable value (tax-exclusive). Derived from `total_amount` and
    /// `tax_total` when absent.
    pub subtotal: Option<Decimal>,
    /// Total tax charged.
    pub tax_total: Decimal,
    /// Grand total including tax.
    pub total_amount: Decimal,
    /// State the supply was delivered to.
    pub place_of_supply: Option<String>,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Invoice lines.
    pub line_items: Vec<LineItem>,
}

impl SalesInvoice {
    /// Returns true if this invoice counts toward aggregates.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        self.status.is_reportable()
    }

    /// Taxable value: the recorded subtotal, or gross minus tax when the
    /// subtotal was never stored.
    #[must_use]
    pub fn taxable_value(&self) -> Decimal {
        self.subtotal.unwrap_or(self.total_amount - self.tax_total)
    }
}

/// An inward (purchase) invoice. Mirrors [`SalesInvoice`] for goods bought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseInvoice {
    /// Unique identifier.
    pub id: PurchaseId,
    /// Business this purchase belongs to.
    pub business_id: BusinessId,
    /// Supplier name as recorded on the bill.
    pub supplier_name: Option<String>,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Taxable value (tax-exclusive).
    pub subtotal: Option<Decimal>,
    /// Total tax paid.
    pub tax_total: Decimal,
    /// Grand total including tax.
    pub total_amount: Decimal,
    /// State the supply came from.
    pub place_of_supply: Option<String>,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Purchase lines.
    pub line_items: Vec<LineItem>,
}

impl PurchaseInvoice {
    /// Returns true if this purchase counts toward aggregates.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        self.status.is_reportable()
    }

    /// Taxable value: the recorded subtotal, or gross minus tax when the
    /// subtotal was never stored.
    #[must_use]
    pub fn taxable_value(&self) -> Decimal {
        self.subtotal.unwrap_or(self.total_amount - self.tax_total)
    }
}

/// Direction of a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    /// Goods returned by a customer; offsets sales.
    SalesReturn,
    /// Goods returned to a supplier; offsets purchases.
    PurchaseReturn,
}

/// A credit/debit note recording returned goods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnNote {
    /// Unique identifier.
    pub id: ReturnId,
    /// Business this note belongs to.
    pub business_id: BusinessId,
    /// Date the return was recorded.
    pub return_date: NaiveDate,
    /// Whether this offsets sales or purchases.
    pub kind: ReturnKind,
    /// Total amount returned, including tax.
    pub total_amount: Decimal,
    /// State of supply on the note itself.
    pub place_of_supply: Option<String>,
    /// Jurisdiction of the related party, used when the note carries none.
    pub party_place: Option<String>,
    /// Returned lines.
    pub line_items: Vec<LineItem>,
}

impl ReturnNote {
    /// Total tax on the returned lines.
    #[must_use]
    pub fn tax_total(&self) -> Decimal {
        self.line_items.iter().map(|item| item.tax_amount).sum()
    }

    /// Taxable value of the return: gross minus line-item tax.
    #[must_use]
    pub fn taxable_value(&self) -> Decimal {
        self.total_amount - self.tax_total()
    }

    /// Jurisdiction used for the intra/inter-state split: the note's own
    /// place of supply, falling back to the related party's state.
    #[must_use]
    pub fn supply_place(&self) -> Option<&str> {
        self.place_of_supply
            .as_deref()
            .or(self.party_place.as_deref())
    }
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// HSN/SAC classification code.
    pub hsn_code: Option<String>,
    /// Cost basis per unit.
    pub purchase_price: Decimal,
    /// Units currently in stock.
    pub stock_quantity: Decimal,
}

/// The business whose books are being reported on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Unique identifier.
    pub id: BusinessId,
    /// Registered business name.
    pub name: String,
    /// GST registration number.
    pub gstin: Option<String>,
    /// Home state, the reference for the intra/inter-state split.
    pub home_state: Option<String>,
}
