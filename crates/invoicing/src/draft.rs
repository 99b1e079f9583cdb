use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use apex_core::{AggregateRoot, SessionId, ValueObject};

use crate::currency::CurrencyCode;
use crate::input::{BusinessInput, DetailsInput, ItemRowInput};
use crate::line_item::LineItem;
use crate::totals::{self, Totals};

/// The business issuing the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ValueObject for BusinessInfo {}

/// The customer being billed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub email: Option<String>,
}

impl ValueObject for ClientInfo {}

/// Invoice number, dates, currency and the flat tax/discount fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMeta {
    pub number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: CurrencyCode,
    pub tax_rate_percent: f64,
    pub discount_amount: f64,
    pub notes: Option<String>,
}

impl InvoiceMeta {
    /// Blank metadata with the session's default dates.
    pub fn starting(date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            number: String::new(),
            date,
            due_date,
            currency: CurrencyCode::default(),
            tax_rate_percent: 0.0,
            discount_amount: 0.0,
            notes: None,
        }
    }
}

/// The invoice under construction.
///
/// One draft lives for one wizard session. Its state only changes through
/// the two `commit_*` methods, each of which bumps the version; the wizard
/// calls them after the step's input has been validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    session_id: SessionId,
    business: BusinessInfo,
    client: ClientInfo,
    meta: InvoiceMeta,
    items: Vec<LineItem>,
    totals: Totals,
    version: u64,
}

impl InvoiceDraft {
    /// A fresh draft: empty parties, default dates, one blank line item.
    pub fn new(session_id: SessionId, date: NaiveDate, due_date: NaiveDate) -> Self {
        let items = vec![LineItem::create()];
        let meta = InvoiceMeta::starting(date, due_date);
        let totals = totals::compute(&items, meta.tax_rate_percent, meta.discount_amount);
        Self {
            session_id,
            business: BusinessInfo::default(),
            client: ClientInfo::default(),
            meta,
            items,
            totals,
            version: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn business(&self) -> &BusinessInfo {
        &self.business
    }

    pub fn client(&self) -> &ClientInfo {
        &self.client
    }

    pub fn meta(&self) -> &InvoiceMeta {
        &self.meta
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Totals as of the last commit.
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Copy step 1 into the draft.
    pub fn commit_business(&mut self, input: &BusinessInput) {
        self.business = BusinessInfo {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: optional(&input.phone),
            address: optional(&input.address),
        };
        self.version += 1;

        tracing::debug!(
            session_id = %self.session_id,
            version = self.version,
            "business details committed"
        );
    }

    /// Copy step 2 into the draft and recompute the totals.
    ///
    /// Unparsable numbers become 0 here; rejecting them is the validator's
    /// job, not the commit's.
    pub fn commit_details(&mut self, input: &DetailsInput, rows: &[ItemRowInput]) {
        self.client = ClientInfo {
            name: input.client_name.trim().to_string(),
            email: optional(&input.client_email),
        };

        let currency = input.currency.trim();
        self.meta = InvoiceMeta {
            number: input.number.trim().to_string(),
            date: input.date.unwrap_or(self.meta.date),
            due_date: input.due_date.unwrap_or(self.meta.due_date),
            currency: if currency.is_empty() {
                CurrencyCode::default()
            } else {
                CurrencyCode::new(currency)
            },
            tax_rate_percent: input.tax_rate_percent(),
            discount_amount: input.discount_amount(),
            notes: optional(&input.notes),
        };

        self.items = rows.iter().map(ItemRowInput::to_line_item).collect();

        self.recompute_totals();
        self.version += 1;

        tracing::debug!(
            session_id = %self.session_id,
            version = self.version,
            items = self.items.len(),
            total = self.totals.total,
            "invoice details committed"
        );
    }

    fn recompute_totals(&mut self) {
        self.totals = totals::compute(
            &self.items,
            self.meta.tax_rate_percent,
            self.meta.discount_amount,
        );
    }
}

impl AggregateRoot for InvoiceDraft {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.session_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fresh() -> InvoiceDraft {
        InvoiceDraft::new(SessionId::new(), date(2026, 1, 5), date(2026, 2, 4))
    }

    fn details() -> DetailsInput {
        DetailsInput {
            client_name: " Bob ".to_string(),
            number: "INV-1".to_string(),
            currency: "USD".to_string(),
            tax_rate: "10".to_string(),
            discount: "5".to_string(),
            ..DetailsInput::default()
        }
    }

    #[test]
    fn starts_with_one_blank_item_and_default_dates() {
        let draft = fresh();
        assert_eq!(draft.items(), &[LineItem::create()]);
        assert_eq!(draft.meta().date, date(2026, 1, 5));
        assert_eq!(draft.meta().due_date, date(2026, 2, 4));
        assert_eq!(draft.meta().currency.as_str(), "USD");
        assert_eq!(draft.totals(), &Totals::default());
        assert_eq!(draft.version(), 0);
    }

    #[test]
    fn business_commit_round_trips_trimmed() {
        let mut draft = fresh();
        draft.commit_business(&BusinessInput {
            name: "  Acme ".to_string(),
            email: "a@b.com  ".to_string(),
            ..BusinessInput::default()
        });

        assert_eq!(
            draft.business(),
            &BusinessInfo {
                name: "Acme".to_string(),
                email: "a@b.com".to_string(),
                phone: None,
                address: None,
            }
        );
        assert_eq!(draft.version(), 1);
    }

    #[test]
    fn details_commit_recomputes_totals() {
        let mut draft = fresh();
        draft.commit_details(&details(), &[ItemRowInput::new(" Widget ", "2", "10")]);

        assert_eq!(draft.client().name, "Bob");
        assert_eq!(draft.client().email, None);
        assert_eq!(draft.items(), &[LineItem::new("Widget", 2.0, 10.0)]);
        assert!((draft.totals().total - 16.5).abs() < 1e-9);
        assert_eq!(draft.version(), 1);
    }

    #[test]
    fn missing_dates_keep_session_defaults() {
        let mut draft = fresh();
        let mut input = details();
        input.due_date = Some(date(2026, 3, 1));
        draft.commit_details(&input, &[]);

        assert_eq!(draft.meta().date, date(2026, 1, 5));
        assert_eq!(draft.meta().due_date, date(2026, 3, 1));
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let mut draft = fresh();
        let mut input = details();
        input.tax_rate = "ten".to_string();
        input.discount = "-4".to_string();
        draft.commit_details(&input, &[ItemRowInput::new("Widget", "x", "10")]);

        assert_eq!(draft.meta().tax_rate_percent, 0.0);
        assert_eq!(draft.meta().discount_amount, 0.0);
        assert_eq!(draft.items()[0].quantity, 0.0);
        assert_eq!(draft.totals().total, 0.0);
    }

    #[test]
    fn unknown_currency_is_stored_verbatim() {
        let mut draft = fresh();
        let mut input = details();
        input.currency = "JPY".to_string();
        draft.commit_details(&input, &[]);
        assert_eq!(draft.meta().currency.as_str(), "JPY");

        input.currency = "  ".to_string();
        draft.commit_details(&input, &[]);
        assert_eq!(draft.meta().currency.as_str(), "USD");
    }

    #[test]
    fn item_order_is_preserved() {
        let mut draft = fresh();
        let rows = [
            ItemRowInput::new("first", "1", "1"),
            ItemRowInput::new("second", "1", "1"),
            ItemRowInput::new("third", "1", "1"),
        ];
        draft.commit_details(&details(), &rows);
        let names: Vec<&str> = draft.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
