//! Seam to whatever opens and prints the finished document.

use thiserror::Error;

use apex_render::{PrintableDocument, RenderError};

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("printer unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render document: {0}")]
    Render(#[from] RenderError),
}

/// Opens the printable document and triggers printing (a browser window, a
/// file on disk, a spooler).
pub trait Printer {
    fn print(&mut self, document: &PrintableDocument) -> Result<(), PrintError>;
}

impl<F> Printer for F
where
    F: FnMut(&PrintableDocument) -> Result<(), PrintError>,
{
    fn print(&mut self, document: &PrintableDocument) -> Result<(), PrintError> {
        self(document)
    }
}
