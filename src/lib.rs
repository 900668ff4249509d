pub mod cli;
pub mod dom;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod scenario;
pub mod session;
pub mod submit;
pub mod summary;
pub mod toggle;
pub mod trace;

pub use crate::dom::date_picker::{DatePicker, PickerConfig, SimDatePicker};
pub use crate::dom::document::{Banner, BannerKind, Document};
pub use crate::registry::field_spec::{FieldKey, FieldKind, FieldSpec, ToggleSpec};
pub use crate::registry::registry::{FieldRegistry, default_registry};
pub use crate::session::controller::{FormEvent, FormSession, seed_document};
pub use crate::session::state::FieldRuntimeState;
pub use crate::submit::guard::SubmitOutcome;
pub use crate::summary::decision::DisplayDecision;

use std::collections::HashMap;

/// Spin up a session over the production registry with the given baseline
/// values, the way the readequação page does at load.
pub fn load_form(originals: &[(&str, &str)]) -> FormSession {
    let registry = default_registry();
    let originals: HashMap<FieldKey, String> = originals
        .iter()
        .map(|(k, v)| (FieldKey::new(*k), v.to_string()))
        .collect();
    let doc = seed_document(&registry, &originals);
    FormSession::new(registry, doc)
}
