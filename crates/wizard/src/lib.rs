//! `apex-wizard`
//!
//! **Responsibility:** the three-step invoice wizard. Orchestrates the
//! validator, the draft commits, and the renderers, and reports to the
//! outside world through the [`Notifier`] and [`Printer`] seams.

pub mod controller;
pub mod generation;
pub mod notification;
pub mod printer;

pub use controller::{PRINT_READY_MESSAGE, SessionDefaults, WizardController};
pub use generation::{GenerationError, GenerationState, GenerationTask, GenerationWatch};
pub use notification::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use printer::{PrintError, Printer};
