//! Invoicing domain module.
//!
//! Business rules for building one invoice: the data model, the totals
//! projection and the per-step validation gates. Deterministic domain logic
//! only (no IO, no rendering, no UI).

pub mod currency;
pub mod draft;
pub mod input;
pub mod line_item;
pub mod step;
pub mod totals;
pub mod validation;

pub use currency::{Currency, CurrencyCode};
pub use draft::{BusinessInfo, ClientInfo, InvoiceDraft, InvoiceMeta};
pub use input::{BusinessInput, DetailsInput, ItemRowInput, ItemRows, StepInput};
pub use line_item::LineItem;
pub use step::Step;
pub use totals::Totals;
pub use validation::ValidationError;
