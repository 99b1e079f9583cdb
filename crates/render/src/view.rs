//! Display-ready view of a draft, shared by every renderer.
//!
//! All amounts, dates and labels are formatted here once, so the preview,
//! the printable template and the plain-text output can never disagree.

use serde::Serialize;

use apex_invoicing::InvoiceDraft;
use apex_invoicing::currency::{self, format_date, format_percent, format_quantity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub description: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub number: String,
    pub business_name: String,
    pub business_email: String,
    pub business_phone: Option<String>,
    pub business_address: Option<String>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub date: String,
    pub due_date: String,
    pub currency: String,
    pub items: Vec<ItemView>,
    pub subtotal: String,
    /// Already negated (`-$5.00`); `None` when nothing is discounted.
    pub discount: Option<String>,
    /// `Tax (10%):`
    pub tax_label: String,
    pub tax: String,
    pub total: String,
    pub notes: Option<String>,
}

impl InvoiceView {
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        let business = draft.business();
        let client = draft.client();
        let meta = draft.meta();
        let totals = draft.totals();
        let code = meta.currency.as_str();

        let items = draft
            .items()
            .iter()
            .map(|item| ItemView {
                description: item.description.clone(),
                quantity: format_quantity(item.quantity),
                price: currency::format(item.unit_price, code),
                total: currency::format(item.total(), code),
            })
            .collect();

        Self {
            number: meta.number.clone(),
            business_name: business.name.clone(),
            business_email: business.email.clone(),
            business_phone: business.phone.clone(),
            business_address: business.address.clone(),
            client_name: client.name.clone(),
            client_email: client.email.clone(),
            date: format_date(meta.date),
            due_date: format_date(meta.due_date),
            currency: code.to_string(),
            items,
            subtotal: currency::format(totals.subtotal, code),
            discount: totals
                .has_discount()
                .then(|| format!("-{}", currency::format(totals.discount, code))),
            tax_label: format!("Tax ({}%):", format_percent(meta.tax_rate_percent)),
            tax: currency::format(totals.tax, code),
            total: currency::format(totals.total, code),
            notes: meta.notes.clone(),
        }
    }
}
