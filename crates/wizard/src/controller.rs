use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{debug, error, info, instrument, warn};

use apex_core::{AggregateRoot, SessionId};
use apex_invoicing::validation::{self, ValidationError};
use apex_invoicing::{InvoiceDraft, ItemRowInput, ItemRows, Step, StepInput};
use apex_render::printable::{self, PrintableDocument, RenderOptions};
use apex_render::{Node, preview};

use crate::generation::{self, GenerationTask, GenerationWatch};
use crate::notification::{Notification, Notifier};
use crate::printer::{PrintError, Printer};

/// Shown once the document has been handed to the printer.
pub const PRINT_READY_MESSAGE: &str =
    "Invoice ready! Use your browser's print dialog to save as PDF.";

/// Dates a new invoice starts with. The caller reads the clock, not the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDefaults {
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl SessionDefaults {
    pub const DEFAULT_DUE_IN_DAYS: u64 = 30;

    /// Invoice dated `today`, due `due_in_days` later.
    pub fn starting(today: NaiveDate, due_in_days: u64) -> Self {
        Self {
            invoice_date: today,
            due_date: today.checked_add_days(Days::new(due_in_days)).unwrap_or(today),
        }
    }
}

/// Drives one invoice through the three wizard steps.
///
/// The controller owns the draft for the whole session. Moving forward
/// validates the step being left, commits it, and renders the preview when
/// step 3 is reached; moving back does none of that. Item rows typed on
/// step 2 live in a form buffer here and reach the draft on the next commit
/// of step 2.
#[derive(Debug)]
pub struct WizardController<N: Notifier> {
    draft: InvoiceDraft,
    step: Step,
    rows: ItemRows,
    preview: Option<Node>,
    options: RenderOptions,
    notifier: N,
}

impl<N: Notifier> WizardController<N> {
    pub fn new(defaults: SessionDefaults, notifier: N) -> Self {
        Self::with_options(defaults, RenderOptions::default(), notifier)
    }

    pub fn with_options(defaults: SessionDefaults, options: RenderOptions, notifier: N) -> Self {
        let draft = fresh_draft(defaults);
        info!(session_id = %draft.session_id(), "invoice session started");
        Self {
            draft,
            step: Step::FIRST,
            rows: ItemRows::default(),
            preview: None,
            options,
            notifier,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.draft.session_id()
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    /// Preview built the last time step 3 was reached.
    pub fn preview(&self) -> Option<&Node> {
        self.preview.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Leave the current step for `target`.
    ///
    /// On rejection the user is notified, the error is returned, and neither
    /// the draft nor the current step change. Any target is accepted, not
    /// only the adjacent one.
    #[instrument(
        skip(self, input),
        fields(
            session_id = %self.session_id(),
            from = self.step.number(),
            to = target.number()
        )
    )]
    pub fn advance(&mut self, target: Step, input: &StepInput) -> Result<(), ValidationError> {
        let from = self.step;

        if let Err(err) = validation::validate_step(from, input, self.rows.as_slice()) {
            warn!(error = ?err, "step rejected");
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        self.commit(from, input);

        if target == Step::Preview {
            self.preview = Some(preview::render(&self.draft));
        }
        self.step = target;

        debug!(version = self.draft.version(), "advanced");
        Ok(())
    }

    /// Go to `target` without validating or committing anything.
    #[instrument(
        skip(self),
        fields(
            session_id = %self.session_id(),
            from = self.step.number(),
            to = target.number()
        )
    )]
    pub fn retreat(&mut self, target: Step) {
        debug!("retreated");
        self.step = target;
    }

    fn commit(&mut self, step: Step, input: &StepInput) {
        match step {
            Step::Business => self.draft.commit_business(&input.business()),
            Step::Details => self.draft.commit_details(&input.details(), self.rows.as_slice()),
            Step::Preview => {}
        }
    }

    pub fn item_rows(&self) -> &ItemRows {
        &self.rows
    }

    /// Append a blank item row; returns its index.
    pub fn add_item(&mut self) -> usize {
        self.rows.add()
    }

    /// Append a filled-in item row; returns its index.
    pub fn push_item(&mut self, row: ItemRowInput) -> usize {
        self.rows.push(row)
    }

    /// Remove the row at `index`; later rows move up by one.
    pub fn remove_item(&mut self, index: usize) -> Option<ItemRowInput> {
        self.rows.remove(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut ItemRowInput> {
        self.rows.get_mut(index)
    }

    /// Replace every row at once (e.g. a form loaded from a file).
    pub fn set_items(&mut self, rows: ItemRows) {
        self.rows = rows;
    }

    /// Frozen copy of the draft for final document generation.
    pub fn snapshot(&self) -> Arc<InvoiceDraft> {
        Arc::new(self.draft.clone())
    }

    /// Start the "generate invoice" signal for the current draft.
    pub fn start_generation(&self) -> (GenerationTask, GenerationWatch) {
        generation::start(self.snapshot(), self.options.clone())
    }

    /// Render the printable document from a snapshot of the draft and hand
    /// it to `printer`.
    #[instrument(skip(self, printer), fields(session_id = %self.session_id()))]
    pub fn print<P: Printer + ?Sized>(
        &self,
        printer: &mut P,
    ) -> Result<PrintableDocument, PrintError> {
        let snapshot = self.snapshot();

        let printed = printable::render(&snapshot, &self.options)
            .map_err(PrintError::from)
            .and_then(|document| printer.print(&document).map(|()| document));

        match printed {
            Ok(document) => {
                info!(title = document.title(), "document sent to printer");
                self.notifier.notify(Notification::success(PRINT_READY_MESSAGE));
                Ok(document)
            }
            Err(err) => {
                error!(error = %err, "printing failed");
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Discard this invoice and start another one.
    #[instrument(skip(self, defaults), fields(previous_session_id = %self.session_id()))]
    pub fn reset(&mut self, defaults: SessionDefaults) {
        self.draft = fresh_draft(defaults);
        self.step = Step::FIRST;
        self.rows = ItemRows::default();
        self.preview = None;

        info!(session_id = %self.session_id(), "invoice session reset");
    }
}

fn fresh_draft(defaults: SessionDefaults) -> InvoiceDraft {
    InvoiceDraft::new(SessionId::new(), defaults.invoice_date, defaults.due_date)
}
