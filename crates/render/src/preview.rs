//! Step 3 preview fragment.
//!
//! [`render`] builds a [`Node`] tree for in-process consumers and the
//! plain-text writer; [`render_html`] produces the same fragment as markup.

use askama::Template;

use apex_invoicing::InvoiceDraft;

use crate::document::{Element, Node, el};
use crate::error::RenderError;
use crate::view::InvoiceView;

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate<'a> {
    invoice: &'a InvoiceView,
}

/// Render the preview fragment for a draft. Pure: same draft, same tree.
pub fn render(draft: &InvoiceDraft) -> Node {
    let view = InvoiceView::from_draft(draft);
    el("div")
        .class("invoice-preview")
        .child(business_section(&view))
        .child(client_section(&view))
        .child(summary_section(&view))
        .child(items_section(&view))
        .child(totals_card(&view))
        .into()
}

/// The preview fragment as HTML.
pub fn render_html(draft: &InvoiceDraft) -> Result<String, RenderError> {
    let view = InvoiceView::from_draft(draft);
    PreviewTemplate { invoice: &view }
        .render()
        .map_err(RenderError::template("preview"))
}

fn labelled(label: &str, value: impl Into<String>) -> Element {
    el("p")
        .child(el("strong").text(format!("{label}:")))
        .text(format!(" {}", value.into()))
}

fn section(title: &str, id: &'static str) -> Element {
    el("section")
        .class("preview-section")
        .attr("id", id)
        .child(el("h3").text(title))
}

fn business_section(view: &InvoiceView) -> Element {
    section("Business Details", "businessPreview")
        .child(labelled("Name", &view.business_name))
        .child(labelled("Email", &view.business_email))
        .child_opt(view.business_phone.as_deref().map(|p| labelled("Phone", p)))
        .child_opt(view.business_address.as_deref().map(|a| labelled("Address", a)))
}

fn client_section(view: &InvoiceView) -> Element {
    section("Client Details", "clientPreview")
        .child(labelled("Name", &view.client_name))
        .child_opt(view.client_email.as_deref().map(|e| labelled("Email", e)))
}

fn summary_section(view: &InvoiceView) -> Element {
    section("Invoice Summary", "summaryPreview")
        .child(labelled("Invoice Number", &view.number))
        .child(labelled("Invoice Date", &view.date))
        .child(labelled("Due Date", &view.due_date))
        .child(labelled("Currency", &view.currency))
        .child_opt(view.notes.as_deref().map(|n| labelled("Notes", n)))
}

fn items_section(view: &InvoiceView) -> Element {
    let header = el("tr").children(
        ["Description", "Qty", "Price", "Total"]
            .into_iter()
            .map(|h| el("th").text(h)),
    );
    let rows = view.items.iter().map(|item| {
        el("tr")
            .child(el("td").text(&item.description))
            .child(el("td").text(&item.quantity))
            .child(el("td").text(&item.price))
            .child(el("td").text(&item.total))
    });

    section("Items", "itemsPreview").child(
        el("table")
            .class("preview-items-table")
            .child(el("thead").child(header))
            .child(el("tbody").children(rows)),
    )
}

fn total_row(label: &str, amount: &str) -> Element {
    el("div")
        .class("total-row")
        .child(el("span").text(label))
        .child(el("span").text(amount))
}

fn totals_card(view: &InvoiceView) -> Element {
    let discount = view
        .discount
        .as_deref()
        .map(|amount| total_row("Discount:", amount).class("discount"));

    el("div")
        .class("total-card")
        .child(total_row("Subtotal:", &view.subtotal))
        .child_opt(discount)
        .child(total_row(&view.tax_label, &view.tax))
        .child(total_row("Total Amount:", &view.total).class("total-final"))
}
