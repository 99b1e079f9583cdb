//! Step validation.
//!
//! Each step has a gate that must pass before its input is committed. Checks
//! run in a fixed order and stop at the first failure, so the user sees one
//! message at a time.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use apex_core::DomainError;

use crate::input::{BusinessInput, DetailsInput, ItemRowInput, StepInput, parse_number};
use crate::line_item::LineItem;
use crate::step::Step;
use crate::totals;

/// Why a step was rejected. The `Display` text is shown to the user as is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter your business name")]
    MissingBusinessName,
    #[error("Please enter your business email")]
    MissingBusinessEmail,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("Please enter client name")]
    MissingClientName,
    #[error("Please enter invoice number")]
    MissingInvoiceNumber,
    #[error("Please add at least one item")]
    NoItems,
    /// Some row is incomplete; which one is not reported.
    #[error("Please fill in all item details with valid values")]
    InvalidItemDetails,
}

impl ValidationError {
    /// The step this error blocks.
    pub fn step(self) -> Step {
        match self {
            ValidationError::MissingBusinessName
            | ValidationError::MissingBusinessEmail
            | ValidationError::InvalidEmailFormat => Step::Business,
            _ => Step::Details,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(value: ValidationError) -> Self {
        DomainError::validation(value.to_string())
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// `local@domain.tld`-shaped: no whitespace, exactly one `@` per part, and a
/// dot somewhere after the `@`.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Gate for step 1.
pub fn validate_business(input: &BusinessInput) -> Result<(), ValidationError> {
    let email = input.email.trim();

    if input.name.trim().is_empty() {
        return Err(ValidationError::MissingBusinessName);
    }
    if email.is_empty() {
        return Err(ValidationError::MissingBusinessEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// Gate for step 2. Item checks are all-or-nothing.
pub fn validate_details(
    input: &DetailsInput,
    items: &[ItemRowInput],
) -> Result<(), ValidationError> {
    if input.client_name.trim().is_empty() {
        return Err(ValidationError::MissingClientName);
    }
    if input.number.trim().is_empty() {
        return Err(ValidationError::MissingInvoiceNumber);
    }
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    if !items.iter().all(is_complete_row) || !has_finite_total(input, items) {
        return Err(ValidationError::InvalidItemDetails);
    }
    Ok(())
}

fn is_complete_row(row: &ItemRowInput) -> bool {
    let positive = |text: &str| parse_number(text).is_some_and(|v| v > 0.0);
    !row.description.trim().is_empty()
        && positive(&row.quantity)
        && positive(&row.price)
        && row.total().is_finite()
}

/// Amounts too large for `f64` would reach the document as infinity.
fn has_finite_total(input: &DetailsInput, items: &[ItemRowInput]) -> bool {
    let items: Vec<LineItem> = items.iter().map(ItemRowInput::to_line_item).collect();
    totals::compute(&items, input.tax_rate_percent(), input.discount_amount())
        .total
        .is_finite()
}

/// Gate for whichever step the wizard is leaving.
///
/// Input of the wrong kind for `step` is read as an empty record, so it is
/// rejected rather than skipped.
pub fn validate_step(
    step: Step,
    input: &StepInput,
    items: &[ItemRowInput],
) -> Result<(), ValidationError> {
    match step {
        Step::Business => validate_business(&input.business()),
        Step::Details => validate_details(&input.details(), items),
        Step::Preview => Ok(()),
    }
}
