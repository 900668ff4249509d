use crate::dom::date_picker::DatePicker;
use crate::dom::document::Document;
use crate::registry::field_spec::FieldSpec;
use crate::session::state::FieldRuntimeState;
use crate::toggle::TOGGLE_DISABLED_CLASS;

/// Overlay text for a date field marked for deletion, e.g.
/// "Data AEREO será apagada".
pub fn overlay_text(label: &str) -> String {
    format!("Data {} será apagada", label)
}

/// Flip a date field between Active and Deleted, driving the picker through
/// its clear capability.
///
/// Both directions leave the control empty: the original page restored the
/// prior date when a delete was reverted, asymmetric with the text variant,
/// and the non-restoring policy is applied to both here.
pub fn toggle(
    doc: &mut Document,
    spec: &FieldSpec,
    state: &mut FieldRuntimeState,
    picker: &mut dyn DatePicker,
) {
    if spec.toggle.is_none() {
        return;
    }
    if state.deleted {
        revert_to_active(doc, spec, state, picker);
        picker.clear();
        state.current_value.clear();
        doc.set_value(&spec.input_id, "");
    } else {
        enter_deleted(doc, spec, state, picker);
    }
}

/// Transition Active→Deleted: clear the picker's selection, force the raw
/// value empty, attach the marker, show the labeled overlay.
pub fn enter_deleted(
    doc: &mut Document,
    spec: &FieldSpec,
    state: &mut FieldRuntimeState,
    picker: &mut dyn DatePicker,
) {
    let Some(toggle) = spec.toggle.as_ref() else {
        return;
    };

    state.deleted = true;
    state.current_value.clear();
    picker.clear();
    picker.set_raw_value("");
    doc.set_value(&spec.input_id, "");

    if let Some(marker) = spec.marker_name() {
        doc.add_marker(&marker);
    }

    doc.set_text(&toggle.overlay_id, &overlay_text(&toggle.label));
    doc.show(&toggle.overlay_id);
    doc.add_class(&toggle.toggle_id, TOGGLE_DISABLED_CLASS);
}

/// Transition Deleted→Active. Shared with the auto-revert taken when a
/// change reaches the control while Deleted; the caller re-registers its
/// change observer on the picker afterwards, since the widget's callback
/// list bypasses normal input events.
pub fn revert_to_active(
    doc: &mut Document,
    spec: &FieldSpec,
    state: &mut FieldRuntimeState,
    picker: &mut dyn DatePicker,
) {
    let Some(toggle) = spec.toggle.as_ref() else {
        return;
    };

    state.deleted = false;

    if let Some(marker) = spec.marker_name() {
        doc.remove_marker(&marker);
    }

    doc.hide(&toggle.overlay_id);
    doc.remove_class(&toggle.toggle_id, TOGGLE_DISABLED_CLASS);

    picker.add_change_observer(&spec.key);
}
