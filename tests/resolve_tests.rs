use readq::dom::document::Document;
use readq::registry::field_spec::FieldKey;
use readq::registry::registry::text_field;
use readq::resolve::values::{is_empty, normalize_original, read_current_value, read_original_value};

// =========================================================================
// is_empty edge cases
// =========================================================================

#[test]
fn is_empty_covers_server_markers() {
    assert!(is_empty(""), "Empty string");
    assert!(is_empty("   "), "Whitespace only");
    assert!(is_empty("\t\n"), "Tabs and newlines");
    assert!(is_empty("None"), "Literal None marker");
    assert!(is_empty("  None  "), "None with surrounding whitespace");
    assert!(is_empty("\"\""), "Literal two-quote marker");
    assert!(is_empty("  \"\"  "), "Quote marker with surrounding whitespace");
}

#[test]
fn is_empty_rejects_real_values() {
    assert!(!is_empty("10/05/2024"), "Date value");
    assert!(!is_empty("Novo texto"), "Plain text");
    assert!(!is_empty("none"), "Lowercase none is a real value");
    assert!(!is_empty("0"), "Zero is a real value");
    assert!(!is_empty("\"x\""), "Quoted content is a real value");
}

// =========================================================================
// normalize_original
// =========================================================================

#[test]
fn normalize_original_collapses_markers() {
    assert_eq!(normalize_original("\"\""), "", "Quote marker collapses");
    assert_eq!(normalize_original("None"), "", "None marker collapses");
    assert_eq!(normalize_original("   "), "", "Whitespace collapses");
    assert_eq!(normalize_original(""), "", "Empty stays empty");
}

#[test]
fn normalize_original_trims_real_values() {
    assert_eq!(
        normalize_original("  10/05/2024  "),
        "10/05/2024",
        "Real values are trimmed, not dropped"
    );
    assert_eq!(normalize_original("Hotel Praia"), "Hotel Praia");
}

// =========================================================================
// Resolvers against the document
// =========================================================================

#[test]
fn read_current_value_returns_empty_for_absent_control() {
    let doc = Document::new();
    let spec = text_field("texto16__1", "1B", "AEREO");
    assert_eq!(
        read_current_value(&doc, &spec),
        "",
        "Absent control degrades to empty"
    );
}

#[test]
fn read_current_value_reads_live_control() {
    let mut doc = Document::new();
    doc.insert_value_node("texto16__1", "Novo texto");
    let spec = text_field("texto16__1", "1B", "AEREO");
    assert_eq!(read_current_value(&doc, &spec), "Novo texto");
}

#[test]
fn read_original_value_reads_companion_node() {
    let mut doc = Document::new();
    doc.insert_value_node("original_data__1", "01/01/2025");
    assert_eq!(
        read_original_value(&doc, &FieldKey::new("data__1")),
        "01/01/2025"
    );
}

#[test]
fn read_original_value_normalizes_markers() {
    let mut doc = Document::new();
    doc.insert_value_node("original_texto16__1", "\"\"");
    assert_eq!(
        read_original_value(&doc, &FieldKey::new("texto16__1")),
        "",
        "Literal quote marker resolves to empty"
    );

    doc.insert_value_node("original_texto16__2", "None");
    assert_eq!(
        read_original_value(&doc, &FieldKey::new("texto16__2")),
        "",
        "Literal None resolves to empty"
    );
}

#[test]
fn read_original_value_tolerates_absent_node() {
    let doc = Document::new();
    assert_eq!(read_original_value(&doc, &FieldKey::new("data__9")), "");
}
