use crate::dom::document::{BANNER_DISMISS_MS, BannerKind, Document};

/// Class marking a control as failing validation.
pub const INVALID_CLASS: &str = "is-invalid";
pub const VALID_CLASS: &str = "is-valid";

/// Class rendered on the submit control once a submission proceeds.
pub const SUBMIT_DISABLED_CLASS: &str = "disabled";

pub const PROCESSING_TEXT: &str = "Processando...";
pub const BLOCKED_BANNER_TEXT: &str = "Corrija os campos destacados antes de enviar.";
pub const SENDING_BANNER_TEXT: &str = "Enviando readequação, aguarde...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed: submission canceled, first invalid control
    /// scrolled into view, error banner prepended.
    Blocked {
        first_invalid: String,
        banner_id: u64,
    },
    /// Submission proceeds: submit control disabled and swapped to the
    /// processing indicator, info banner queued for auto-dismiss.
    Accepted { banner_id: u64 },
    /// The submit control is already disabled; nothing happens.
    AlreadySubmitted,
}

/// Gate a submit attempt against the current document state.
pub fn submit(doc: &mut Document, submit_id: &str, now_ms: u64) -> SubmitOutcome {
    if doc.has_class(submit_id, SUBMIT_DISABLED_CLASS) {
        return SubmitOutcome::AlreadySubmitted;
    }

    let invalid = doc.ids_with_class(INVALID_CLASS);
    if let Some(first) = invalid.first() {
        doc.scroll_into_view(first);
        let banner_id = doc.prepend_banner(BannerKind::Error, BLOCKED_BANNER_TEXT, None);
        return SubmitOutcome::Blocked {
            first_invalid: first.clone(),
            banner_id,
        };
    }

    doc.add_class(submit_id, SUBMIT_DISABLED_CLASS);
    doc.set_text(submit_id, PROCESSING_TEXT);
    let banner_id = doc.append_banner(
        BannerKind::Info,
        SENDING_BANNER_TEXT,
        Some(now_ms + BANNER_DISMISS_MS),
    );
    SubmitOutcome::Accepted { banner_id }
}
