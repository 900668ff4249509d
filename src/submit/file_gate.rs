use crate::dom::document::Document;
use crate::submit::guard::{INVALID_CLASS, VALID_CLASS};

/// Upload ceiling: 16 MiB. A selection of exactly this size is accepted.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Validate a file selection against the size ceiling.
///
/// Oversized selections mark the control invalid and clear the selection so
/// the oversized file can never travel with the form. Returns whether the
/// selection was accepted.
pub fn validate_upload(doc: &mut Document, control_id: &str, size_bytes: u64) -> bool {
    if size_bytes > MAX_UPLOAD_BYTES {
        doc.remove_class(control_id, VALID_CLASS);
        doc.add_class(control_id, INVALID_CLASS);
        doc.set_value(control_id, "");
        false
    } else {
        doc.remove_class(control_id, INVALID_CLASS);
        doc.add_class(control_id, VALID_CLASS);
        true
    }
}
