use crate::dom::document::Document;
use crate::registry::field_spec::FieldSpec;
use crate::session::state::FieldRuntimeState;
use crate::toggle::TOGGLE_DISABLED_CLASS;

/// Overlay text shown while a text field is marked for deletion.
pub const CANCEL_OVERLAY_TEXT: &str = "Destino será cancelado";

/// Flip the field between Active and Deleted.
///
/// Active→Deleted clears the input, attaches the section's hidden marker for
/// the server, and shows the overlay. Deleted→Active clears the input again
/// rather than restoring the prior value (the user must re-enter it) and
/// removes the marker. Fields without toggle wiring are left untouched.
pub fn toggle(doc: &mut Document, spec: &FieldSpec, state: &mut FieldRuntimeState) {
    if spec.toggle.is_none() {
        return;
    }
    if state.deleted {
        revert_to_active(doc, spec, state);
        // Reverting the delete does not restore the prior value; the user
        // must re-enter it.
        state.current_value.clear();
        doc.set_value(&spec.input_id, "");
    } else {
        enter_deleted(doc, spec, state);
    }
}

/// Transition Active→Deleted.
pub fn enter_deleted(doc: &mut Document, spec: &FieldSpec, state: &mut FieldRuntimeState) {
    let Some(toggle) = spec.toggle.as_ref() else {
        return;
    };

    state.deleted = true;
    state.current_value.clear();
    doc.set_value(&spec.input_id, "");

    if let Some(marker) = spec.marker_name() {
        doc.add_marker(&marker);
    }

    doc.set_text(&toggle.overlay_id, CANCEL_OVERLAY_TEXT);
    doc.show(&toggle.overlay_id);
    doc.add_class(&toggle.toggle_id, TOGGLE_DISABLED_CLASS);
}

/// Transition Deleted→Active. Also the auto-revert path taken when the
/// underlying value turns non-empty through direct manipulation.
pub fn revert_to_active(doc: &mut Document, spec: &FieldSpec, state: &mut FieldRuntimeState) {
    let Some(toggle) = spec.toggle.as_ref() else {
        return;
    };

    state.deleted = false;

    if let Some(marker) = spec.marker_name() {
        doc.remove_marker(&marker);
    }

    doc.hide(&toggle.overlay_id);
    doc.remove_class(&toggle.toggle_id, TOGGLE_DISABLED_CLASS);
}
