use std::collections::HashMap;

use readq::dom::date_picker::{DatePicker, SimDatePicker};
use readq::dom::document::Document;
use readq::registry::field_spec::{FieldKey, FieldKind, FieldSpec};
use readq::registry::registry::{FieldRegistry, date_field, text_field};
use readq::session::controller::seed_document;
use readq::session::state::FieldRuntimeState;
use readq::toggle::TOGGLE_DISABLED_CLASS;
use readq::toggle::date as date_toggle;
use readq::toggle::text as text_toggle;

fn text_fixture() -> (Document, FieldSpec, FieldRuntimeState) {
    let spec = text_field("texto16__1", "1B", "AEREO");
    let registry = FieldRegistry::from_specs(vec![spec.clone()]);
    let originals = HashMap::from([(FieldKey::new("texto16__1"), "Texto antigo".to_string())]);
    let doc = seed_document(&registry, &originals);
    let state = FieldRuntimeState::with_original("Texto antigo");
    (doc, spec, state)
}

fn date_fixture() -> (Document, FieldSpec, FieldRuntimeState, SimDatePicker) {
    let spec = date_field("data__1", "1A", "AEREO");
    let registry = FieldRegistry::from_specs(vec![spec.clone()]);
    let originals = HashMap::from([(FieldKey::new("data__1"), "10/05/2024".to_string())]);
    let mut doc = seed_document(&registry, &originals);
    doc.set_value("data__1", "10/05/2024");

    let mut picker = SimDatePicker::default();
    picker.add_change_observer(&spec.key);
    picker.set_raw_value("10/05/2024");

    let state = FieldRuntimeState {
        current_value: "10/05/2024".to_string(),
        original_value: "10/05/2024".to_string(),
        deleted: false,
    };
    (doc, spec, state, picker)
}

// =========================================================================
// Text variant
// =========================================================================

#[test]
fn text_active_to_deleted_side_effects() {
    let (mut doc, spec, mut state) = text_fixture();
    doc.set_value("texto16__1", "Texto antigo");
    state.current_value = "Texto antigo".to_string();

    text_toggle::toggle(&mut doc, &spec, &mut state);

    assert!(state.deleted);
    assert_eq!(doc.value("texto16__1"), Some(""), "Input cleared");
    assert_eq!(state.current_value, "");
    assert!(doc.has_marker("deleted_1B"), "Section marker attached");
    assert!(doc.is_visible("aviso_texto16__1"), "Overlay shown");
    assert_eq!(
        doc.text("aviso_texto16__1"),
        Some(text_toggle::CANCEL_OVERLAY_TEXT)
    );
    assert!(
        doc.has_class("del_texto16__1", TOGGLE_DISABLED_CLASS),
        "Toggle rendered disabled"
    );
}

#[test]
fn text_deleted_to_active_does_not_restore() {
    let (mut doc, spec, mut state) = text_fixture();

    text_toggle::toggle(&mut doc, &spec, &mut state);
    text_toggle::toggle(&mut doc, &spec, &mut state);

    assert!(!state.deleted);
    assert_eq!(
        doc.value("texto16__1"),
        Some(""),
        "Reverting the delete does not restore the prior value"
    );
    assert!(!doc.has_marker("deleted_1B"), "Marker removed");
    assert!(!doc.is_visible("aviso_texto16__1"), "Overlay hidden");
    assert!(!doc.has_class("del_texto16__1", TOGGLE_DISABLED_CLASS));
}

#[test]
fn text_marker_is_attached_exactly_once() {
    let (mut doc, spec, mut state) = text_fixture();

    text_toggle::enter_deleted(&mut doc, &spec, &mut state);
    text_toggle::enter_deleted(&mut doc, &spec, &mut state);

    let count = doc.markers().iter().filter(|m| *m == "deleted_1B").count();
    assert_eq!(count, 1, "Exactly one marker per section");
}

#[test]
fn text_toggle_without_wiring_is_a_noop() {
    let spec = FieldSpec {
        key: FieldKey::new("texto16__9"),
        kind: FieldKind::Text,
        input_id: "texto16__9".to_string(),
        summary_row_id: "li_texto16__9".to_string(),
        summary_value_id: "novo_texto16__9".to_string(),
        toggle: None,
    };
    let mut doc = Document::new();
    doc.insert_value_node("texto16__9", "algo");
    let mut state = FieldRuntimeState::default();

    text_toggle::toggle(&mut doc, &spec, &mut state);

    assert!(!state.deleted, "No toggle wiring, no transition");
    assert_eq!(doc.value("texto16__9"), Some("algo"), "Value untouched");
}

// =========================================================================
// Date variant
// =========================================================================

#[test]
fn date_active_to_deleted_clears_picker_and_labels_overlay() {
    let (mut doc, spec, mut state, mut picker) = date_fixture();

    date_toggle::toggle(&mut doc, &spec, &mut state, &mut picker);

    assert!(state.deleted);
    assert_eq!(picker.raw_value(), "", "Picker selection cleared");
    assert_eq!(doc.value("data__1"), Some(""), "Raw value forced empty");
    assert!(doc.has_marker("deleted_1A"));
    assert!(doc.is_visible("aviso_data__1"));
    assert_eq!(
        doc.text("aviso_data__1"),
        Some("Data AEREO será apagada"),
        "Overlay text carries the section label"
    );
}

#[test]
fn date_toggle_twice_leaves_control_empty() {
    let (mut doc, spec, mut state, mut picker) = date_fixture();

    date_toggle::toggle(&mut doc, &spec, &mut state, &mut picker);
    date_toggle::toggle(&mut doc, &spec, &mut state, &mut picker);

    assert!(!state.deleted);
    assert_eq!(
        doc.value("data__1"),
        Some(""),
        "Non-restoring policy: the original date does not come back"
    );
    assert_eq!(picker.raw_value(), "");
    assert!(!doc.has_marker("deleted_1A"));
    assert!(!doc.is_visible("aviso_data__1"));
}

#[test]
fn date_revert_reregisters_change_observer() {
    let (mut doc, spec, mut state, mut picker) = date_fixture();

    date_toggle::enter_deleted(&mut doc, &spec, &mut state, &mut picker);
    date_toggle::revert_to_active(&mut doc, &spec, &mut state, &mut picker);

    assert_eq!(
        picker.observers(),
        &[FieldKey::new("data__1")],
        "Observer re-registered, and only once"
    );

    // A second revert stays idempotent
    date_toggle::revert_to_active(&mut doc, &spec, &mut state, &mut picker);
    assert_eq!(picker.observers().len(), 1);
}
