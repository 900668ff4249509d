use std::collections::HashMap;

use crate::dom::document::Document;
use crate::registry::field_spec::FieldKey;
use crate::registry::registry::FieldRegistry;
use crate::resolve::values::{read_current_value, read_original_value};
use crate::session::state::FieldRuntimeState;
use crate::summary::decision::{DELETED_TEXT, DisplayDecision, decide};

/// Id of the placeholder shown while the summary panel has no rows.
pub const NO_CHANGES_ID: &str = "sem_alteracoes";

/// Recompute the whole summary panel.
///
/// Full pass over the registry, no debouncing: the field count is small
/// (bounded around fifteen). For each field the decision is derived from the
/// live control value, the normalized baseline, and the field's delete flag,
/// then written to the summary row and value nodes; absent nodes skip the
/// write. This engine is the only writer of summary nodes. Returns the
/// aggregate "has changes" flag, which also drives the placeholder's
/// visibility. Idempotent, and safe with an empty registry.
pub fn recompute_summary(
    doc: &mut Document,
    registry: &FieldRegistry,
    states: &HashMap<FieldKey, FieldRuntimeState>,
) -> bool {
    let mut has_changes = false;

    for spec in registry.iter() {
        let current = read_current_value(doc, spec);
        let original = read_original_value(doc, &spec.key);
        let deleted = states.get(&spec.key).map_or(false, |s| s.deleted);

        let decision = decide(&current, &original, deleted);
        has_changes |= !decision.is_hidden();

        match decision {
            DisplayDecision::Hidden => {
                doc.hide(&spec.summary_row_id);
                doc.set_text(&spec.summary_value_id, "");
            }
            DisplayDecision::ShowDeleted => {
                doc.show(&spec.summary_row_id);
                doc.set_text(&spec.summary_value_id, DELETED_TEXT);
            }
            DisplayDecision::ShowNewValue(value) => {
                doc.show(&spec.summary_row_id);
                doc.set_text(&spec.summary_value_id, &value);
            }
        }
    }

    if has_changes {
        doc.hide(NO_CHANGES_ID);
    } else {
        doc.show(NO_CHANGES_ID);
    }

    has_changes
}

/// Fingerprint of the rendered summary panel: row visibility, value text,
/// placeholder state, and attached markers. Two consecutive recomputes with
/// no intervening mutation must produce the same fingerprint.
pub fn summary_fingerprint(doc: &Document, registry: &FieldRegistry) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    for spec in registry.iter() {
        hasher.update(spec.key.as_str().as_bytes());
        hasher.update(if doc.is_visible(&spec.summary_row_id) {
            b"+"
        } else {
            b"-"
        });
        hasher.update(doc.text(&spec.summary_value_id).unwrap_or("").as_bytes());
        hasher.update(b"|");
    }
    hasher.update(if doc.is_visible(NO_CHANGES_ID) {
        b"nc+"
    } else {
        b"nc-"
    });
    for marker in doc.markers() {
        hasher.update(marker.as_bytes());
        hasher.update(b";");
    }
    format!("{:x}", hasher.finalize())
}
