//! Two-state "generate invoice" signal.
//!
//! Generation is `Started` until the task is completed, at which point the
//! rendered document is published to every watcher. When to complete (right
//! away, after a progress animation, after a user confirmation) is decided
//! by the caller, so nothing here waits on a clock.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use apex_invoicing::InvoiceDraft;
use apex_render::RenderError;
use apex_render::printable::{self, PrintableDocument, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Started,
    Completed(Arc<PrintableDocument>),
}

impl GenerationState {
    pub fn is_completed(&self) -> bool {
        matches!(self, GenerationState::Completed(_))
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The task was dropped without being completed.
    #[error("invoice generation was abandoned before completing")]
    Abandoned,

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The producing half: owns the frozen draft and finishes the generation.
#[derive(Debug)]
pub struct GenerationTask {
    snapshot: Arc<InvoiceDraft>,
    options: RenderOptions,
    tx: watch::Sender<GenerationState>,
}

impl GenerationTask {
    /// The draft being generated, frozen at `start`.
    pub fn snapshot(&self) -> &InvoiceDraft {
        &self.snapshot
    }

    /// Render the document and publish `Completed` to every watcher.
    ///
    /// If rendering fails the task is consumed without publishing, so
    /// watchers resolve with [`GenerationError::Abandoned`].
    pub fn complete(self) -> Result<Arc<PrintableDocument>, GenerationError> {
        let document = Arc::new(printable::render(&self.snapshot, &self.options)?);
        self.tx
            .send_replace(GenerationState::Completed(Arc::clone(&document)));

        tracing::info!(
            session_id = %self.snapshot.session_id(),
            number = %self.snapshot.meta().number,
            "invoice generation completed"
        );
        Ok(document)
    }
}

/// The observing half. Cheap to clone; every clone sees the same state.
#[derive(Debug, Clone)]
pub struct GenerationWatch {
    rx: watch::Receiver<GenerationState>,
}

impl GenerationWatch {
    pub fn state(&self) -> GenerationState {
        self.rx.borrow().clone()
    }

    /// Resolves once the task completes.
    pub async fn completed(&mut self) -> Result<Arc<PrintableDocument>, GenerationError> {
        loop {
            let current = self.rx.borrow_and_update().clone();
            if let GenerationState::Completed(document) = current {
                return Ok(document);
            }
            self.rx
                .changed()
                .await
                .map_err(|_| GenerationError::Abandoned)?;
        }
    }
}

/// Begin generating the document for `snapshot`.
pub fn start(
    snapshot: Arc<InvoiceDraft>,
    options: RenderOptions,
) -> (GenerationTask, GenerationWatch) {
    let (tx, rx) = watch::channel(GenerationState::Started);

    tracing::info!(
        session_id = %snapshot.session_id(),
        number = %snapshot.meta().number,
        "invoice generation started"
    );

    (
        GenerationTask {
            snapshot,
            options,
            tx,
        },
        GenerationWatch { rx },
    )
}
