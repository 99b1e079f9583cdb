//! Standalone printable invoice document.

use askama::Template;
use serde::{Deserialize, Serialize};

use apex_invoicing::InvoiceDraft;

use crate::error::RenderError;
use crate::view::InvoiceView;

/// Branding printed on every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub brand_name: String,
    pub footer: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            brand_name: "Apex Invoice Solutions".to_string(),
            footer: "Generated with Apex Invoice Solutions - Professional invoices in 2 minutes"
                .to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "printable.html")]
struct PrintableTemplate<'a> {
    title: &'a str,
    brand_name: &'a str,
    footer: &'a str,
    invoice: &'a InvoiceView,
}

/// A complete HTML document, ready to be handed to a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableDocument {
    title: String,
    view: InvoiceView,
    html: String,
}

impl PrintableDocument {
    /// `Invoice <number>`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The formatted values the document was rendered from.
    pub fn view(&self) -> &InvoiceView {
        &self.view
    }

    /// Serialized document, doctype included.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Suggested file name, see [`file_name_for`].
    pub fn file_name(&self) -> String {
        file_name_for(&self.view.number)
    }
}

/// `invoice-<number>.html`, with anything but ASCII alphanumerics and `-`
/// replaced by `_`.
pub fn file_name_for(number: &str) -> String {
    let stem: String = number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "invoice.html".to_string()
    } else {
        format!("invoice-{stem}.html")
    }
}

/// Render the printable document. Pure: same draft and options, same bytes.
pub fn render(
    draft: &InvoiceDraft,
    options: &RenderOptions,
) -> Result<PrintableDocument, RenderError> {
    let view = InvoiceView::from_draft(draft);
    let title = format!("Invoice {}", view.number);

    let html = PrintableTemplate {
        title: &title,
        brand_name: &options.brand_name,
        footer: &options.footer,
        invoice: &view,
    }
    .render()
    .map_err(RenderError::template("printable"))?;

    tracing::debug!(
        session_id = %draft.session_id(),
        bytes = html.len(),
        "printable document rendered"
    );

    Ok(PrintableDocument { title, view, html })
}
