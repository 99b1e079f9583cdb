//! Terminal and file side of the wizard's collaborator seams.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use apex_render::PrintableDocument;
use apex_wizard::{Notification, Notifier, PrintError, Printer, Severity};

/// Writes the document's HTML to a file, or to stdout without one.
#[derive(Debug, Clone, Default)]
pub struct FilePrinter {
    target: Option<PathBuf>,
}

impl FilePrinter {
    pub fn new(target: Option<PathBuf>) -> Self {
        Self { target }
    }
}

impl Printer for FilePrinter {
    fn print(&mut self, document: &PrintableDocument) -> Result<(), PrintError> {
        match &self.target {
            Some(path) => {
                fs::write(path, document.html())?;
                tracing::info!(
                    path = %path.display(),
                    title = document.title(),
                    "document written"
                );
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(document.html().as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Shows notifications on stderr, keeping stdout for documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn line(notification: &Notification) -> String {
        let marker = match notification.severity {
            Severity::Error => "error",
            Severity::Success => "ok",
        };
        format!("[{marker}] {}", notification.message)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::line(&notification));
    }
}
