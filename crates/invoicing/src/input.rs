//! Step input records.
//!
//! The form-capture layer hands the core one flat record per step, with the
//! values exactly as typed. Nothing here is trimmed or parsed eagerly: the
//! validator and the commit read the raw text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;

/// Step 1 form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Step 2 form fields other than the item rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailsInput {
    pub client_name: String,
    pub client_email: String,
    pub number: String,
    /// `None` keeps the session's default invoice date.
    pub date: Option<NaiveDate>,
    /// `None` keeps the session's default due date.
    pub due_date: Option<NaiveDate>,
    pub currency: String,
    pub tax_rate: String,
    pub discount: String,
    pub notes: String,
}

impl DetailsInput {
    /// Tax rate as committed: negative or unparsable text counts as 0.
    pub fn tax_rate_percent(&self) -> f64 {
        non_negative(&self.tax_rate)
    }

    /// Flat discount as committed: negative or unparsable text counts as 0.
    pub fn discount_amount(&self) -> f64 {
        non_negative(&self.discount)
    }
}

/// One item row as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRowInput {
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl ItemRowInput {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Live row total shown next to the inputs; unparsable fields count as 0.
    pub fn total(&self) -> f64 {
        let quantity = parse_number(&self.quantity).unwrap_or(0.0);
        let price = parse_number(&self.price).unwrap_or(0.0);
        quantity * price
    }

    /// The line item this row commits as: description trimmed, unparsable
    /// numbers as 0.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(
            self.description.trim(),
            parse_number(&self.quantity).unwrap_or(0.0),
            parse_number(&self.price).unwrap_or(0.0),
        )
    }
}

impl Default for ItemRowInput {
    /// A fresh row: quantity pre-filled with 1, everything else blank.
    fn default() -> Self {
        Self::new("", "1", "")
    }
}

/// The ordered item rows of the step 2 form.
///
/// Rows are addressed by position; removing one shifts the rest up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRows(Vec<ItemRowInput>);

impl ItemRows {
    /// No rows at all. A new session uses `ItemRows::default()` instead.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_rows(rows: Vec<ItemRowInput>) -> Self {
        Self(rows)
    }

    /// Append a blank row and return its index.
    pub fn add(&mut self) -> usize {
        self.push(ItemRowInput::default())
    }

    /// Append a row and return its index.
    pub fn push(&mut self, row: ItemRowInput) -> usize {
        self.0.push(row);
        self.0.len() - 1
    }

    /// Remove the row at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<ItemRowInput> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ItemRowInput> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ItemRowInput> {
        self.0.get_mut(index)
    }

    pub fn row_total(&self, index: usize) -> Option<f64> {
        self.get(index).map(ItemRowInput::total)
    }

    pub fn as_slice(&self) -> &[ItemRowInput] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ItemRows {
    /// One blank row, as the form starts out.
    fn default() -> Self {
        Self(vec![ItemRowInput::default()])
    }
}

/// The record handed over when leaving a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum StepInput {
    Business(BusinessInput),
    Details(DetailsInput),
    /// Leaving the preview step carries no data.
    None,
}

impl StepInput {
    /// Business fields, or an empty record if this is another step's input.
    pub fn business(&self) -> BusinessInput {
        match self {
            StepInput::Business(input) => input.clone(),
            _ => BusinessInput::default(),
        }
    }

    /// Details fields, or an empty record if this is another step's input.
    pub fn details(&self) -> DetailsInput {
        match self {
            StepInput::Details(input) => input.clone(),
            _ => DetailsInput::default(),
        }
    }
}

impl From<BusinessInput> for StepInput {
    fn from(value: BusinessInput) -> Self {
        StepInput::Business(value)
    }
}

impl From<DetailsInput> for StepInput {
    fn from(value: DetailsInput) -> Self {
        StepInput::Details(value)
    }
}

/// Parse a numeric form field: surrounding whitespace is ignored, anything
/// that is not a finite real number is `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_negative(text: &str) -> f64 {
    parse_number(text).filter(|v| *v >= 0.0).unwrap_or(0.0)
}
