//! # Presentation Capability
//!
//! The commands in this crate never touch audio hardware, dialog
//! boxes, or printers directly. They describe the effect they want
//! through this trait and the host shell decides how to realize it:
//! a desktop build plays a sound file and opens a modal, a kiosk
//! build drives a thermal printer, a test passes in a recorder.

use serde::Serialize;

use tally_core::cart::CartItem;

/// Short audio cue accompanying an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSound {
    /// Something was added or paid (button beep)
    Beep,
    /// Something was removed or reset
    Clear,
}

/// Everything the host needs to render one receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPreview {
    pub store_name: String,
    pub receipt_no: String,
    pub date: String,
    pub items: Vec<CartItem>,
    pub total_minor: i64,
    pub cash_minor: i64,
    pub change_minor: i64,
}

/// Host-side effects requested by commands.
pub trait Presentation: Send + Sync {
    /// Plays an audio cue. Only called when sounds are enabled.
    fn play(&self, sound: FeedbackSound);

    /// Shows a blocking message to the operator.
    fn alert(&self, message: &str);

    /// Opens the receipt confirmation view.
    fn show_receipt(&self, preview: &ReceiptPreview);

    /// Closes the receipt confirmation view.
    fn close_receipt(&self);

    /// Sends a receipt to the printer.
    fn print_receipt(&self, preview: &ReceiptPreview);
}

/// Presentation backend that writes everything to the log.
///
/// The default for headless runs; also what the binary uses until a
/// real windowing shell is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresentation;

impl Presentation for ConsolePresentation {
    fn play(&self, sound: FeedbackSound) {
        tracing::debug!(?sound, "Audio cue");
    }

    fn alert(&self, message: &str) {
        tracing::warn!(message, "Alert");
    }

    fn show_receipt(&self, preview: &ReceiptPreview) {
        tracing::info!(
            receipt_no = %preview.receipt_no,
            total = preview.total_minor,
            change = preview.change_minor,
            "Receipt shown"
        );
    }

    fn close_receipt(&self) {
        tracing::debug!("Receipt closed");
    }

    fn print_receipt(&self, preview: &ReceiptPreview) {
        tracing::info!(receipt_no = %preview.receipt_no, "Receipt printed");
    }
}

/// One observed presentation effect, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationEvent {
    Played(FeedbackSound),
    Alerted(String),
    ReceiptShown(String),
    ReceiptClosed,
    ReceiptPrinted(String),
}

/// Recording backend for tests: clone one handle into the app, keep
/// the other to assert on what was requested.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresentation {
    events: std::sync::Arc<std::sync::Mutex<Vec<PresentationEvent>>>,
}

impl RecordingPresentation {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self, event: PresentationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Presentation for RecordingPresentation {
    fn play(&self, sound: FeedbackSound) {
        self.record(PresentationEvent::Played(sound));
    }

    fn alert(&self, message: &str) {
        self.record(PresentationEvent::Alerted(message.to_string()));
    }

    fn show_receipt(&self, preview: &ReceiptPreview) {
        self.record(PresentationEvent::ReceiptShown(preview.receipt_no.clone()));
    }

    fn close_receipt(&self) {
        self.record(PresentationEvent::ReceiptClosed);
    }

    fn print_receipt(&self, preview: &ReceiptPreview) {
        self.record(PresentationEvent::ReceiptPrinted(preview.receipt_no.clone()));
    }
}
