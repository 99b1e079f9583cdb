//! Drives one wizard session from a loaded form.

use apex_core::DomainResult;
use apex_invoicing::{Step, StepInput};
use apex_render::RenderOptions;
use apex_wizard::{Notifier, SessionDefaults, WizardController};

use crate::form::InvoiceForm;

/// Walk the wizard from step 1 to the preview with `form`'s values.
///
/// Stops at the first rejected step; the notifier has already been told and
/// the rejection comes back as [`apex_core::DomainError::Validation`].
pub fn fill<N: Notifier>(
    form: &InvoiceForm,
    defaults: SessionDefaults,
    options: RenderOptions,
    notifier: N,
) -> DomainResult<WizardController<N>> {
    let mut wizard = WizardController::with_options(defaults, options, notifier);

    wizard.advance(Step::Details, &StepInput::from(form.business.clone()))?;
    wizard.set_items(form.item_rows());
    wizard.advance(Step::Preview, &StepInput::from(form.details.clone()))?;

    tracing::debug!(
        session_id = %wizard.session_id(),
        items = wizard.draft().items().len(),
        "form applied"
    );
    Ok(wizard)
}
