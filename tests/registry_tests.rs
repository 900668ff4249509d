use readq::registry::field_spec::{FieldKey, FieldKind};
use readq::registry::registry::{FieldRegistry, date_field, default_registry, text_field};

#[test]
fn lookup_by_key() {
    let registry = FieldRegistry::from_specs(vec![
        date_field("data__1", "1A", "AEREO"),
        text_field("texto16__1", "1B", "AEREO"),
    ]);

    let spec = registry.get(&FieldKey::new("data__1")).expect("data__1 registered");
    assert_eq!(spec.kind, FieldKind::Date);
    assert_eq!(spec.input_id, "data__1");
    assert_eq!(spec.summary_row_id, "li_data__1");
    assert_eq!(spec.summary_value_id, "novo_data__1");

    assert!(registry.get(&FieldKey::new("data__9")).is_none(), "Unknown key");
}

#[test]
fn iteration_follows_insertion_order() {
    let registry = FieldRegistry::from_specs(vec![
        text_field("texto16__3", "3B", "TRANSFER"),
        date_field("data__1", "1A", "AEREO"),
        text_field("texto16__1", "1B", "AEREO"),
    ]);

    let keys: Vec<&str> = registry.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["texto16__3", "data__1", "texto16__1"],
        "Insertion order preserved"
    );
}

#[test]
fn duplicate_keys_keep_first_spec() {
    let registry = FieldRegistry::from_specs(vec![
        date_field("data__1", "1A", "AEREO"),
        date_field("data__1", "9Z", "DUPLICATE"),
    ]);

    assert_eq!(registry.len(), 1, "Duplicate dropped");
    let spec = registry.get(&FieldKey::new("data__1")).expect("registered");
    assert_eq!(
        spec.toggle.as_ref().map(|t| t.section.as_str()),
        Some("1A"),
        "First spec wins"
    );
}

#[test]
fn toggle_wiring_and_marker_names() {
    let spec = date_field("data__1", "1A", "AEREO");
    let toggle = spec.toggle.as_ref().expect("date fields carry a toggle");
    assert_eq!(toggle.toggle_id, "del_data__1");
    assert_eq!(toggle.overlay_id, "aviso_data__1");
    assert_eq!(toggle.section, "1A");
    assert_eq!(toggle.label, "AEREO");

    assert_eq!(spec.original_id(), "original_data__1");
    assert_eq!(spec.marker_name().as_deref(), Some("deleted_1A"));
}

#[test]
fn default_registry_covers_every_section() {
    let registry = default_registry();
    assert_eq!(registry.len(), 14, "Seven sections, two fields each");

    for n in 1..=7 {
        let date_key = FieldKey::new(format!("data__{}", n));
        let text_key = FieldKey::new(format!("texto16__{}", n));
        assert!(registry.contains(&date_key), "date field {} registered", n);
        assert!(registry.contains(&text_key), "text field {} registered", n);
    }

    let aereo = registry.get(&FieldKey::new("data__1")).expect("data__1");
    assert_eq!(
        aereo.toggle.as_ref().map(|t| t.label.as_str()),
        Some("AEREO")
    );
}

#[test]
fn empty_registry_is_usable() {
    let registry = FieldRegistry::empty();
    assert!(registry.is_empty());
    assert_eq!(registry.iter().count(), 0);
}
