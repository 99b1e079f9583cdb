//! `apex-render`: document rendering.
//!
//! Two targets from the same draft: the step 3 preview fragment and the
//! standalone printable document. Both are pure functions of an immutable
//! draft and read its values through one [`view::InvoiceView`]. HTML comes
//! from the askama templates under `templates/`; the preview is also
//! available as a [`document::Node`] tree for the plain-text writer.

pub mod document;
pub mod error;
pub mod preview;
pub mod printable;
pub mod text;
pub mod view;

pub use document::{Element, Node};
pub use error::RenderError;
pub use printable::{PrintableDocument, RenderOptions};
pub use view::{InvoiceView, ItemView};

#[cfg(test)]
pub(crate) mod test_support {
    use apex_core::SessionId;
    use apex_invoicing::{BusinessInput, DetailsInput, InvoiceDraft, ItemRowInput};
    use chrono::NaiveDate;

    fn acme_details() -> DetailsInput {
        DetailsInput {
            client_name: "Bob".to_string(),
            number: "INV-1".to_string(),
            currency: "USD".to_string(),
            tax_rate: "10".to_string(),
            discount: "5".to_string(),
            ..DetailsInput::default()
        }
    }

    /// Acme bills Bob for two widgets at 10, 10% tax, 5 off.
    pub fn acme_draft() -> InvoiceDraft {
        details_with(|_| {})
    }

    pub fn details_with(edit: impl FnOnce(&mut DetailsInput)) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new(
            SessionId::new(),
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
        );
        draft.commit_business(&BusinessInput {
            name: "Acme".to_string(),
            email: "a@b.co".to_string(),
            ..BusinessInput::default()
        });
        let mut details = acme_details();
        edit(&mut details);
        draft.commit_details(&details, &[ItemRowInput::new("Widget", "2", "10")]);
        draft
    }
}
