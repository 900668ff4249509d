use std::collections::HashMap;

use crate::dom::date_picker::{DatePicker, PickerConfig, SimDatePicker};
use crate::dom::document::Document;
use crate::registry::field_spec::{FieldKey, FieldKind, FieldSpec};
use crate::registry::registry::FieldRegistry;
use crate::resolve::values::{is_empty, read_current_value, read_original_value};
use crate::session::state::FieldRuntimeState;
use crate::submit::file_gate::validate_upload;
use crate::submit::guard::{SubmitOutcome, submit};
use crate::summary::engine::{NO_CHANGES_ID, recompute_summary, summary_fingerprint};
use crate::toggle::{date as date_toggle, text as text_toggle};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Id of the guarded submit control.
pub const SUBMIT_ID: &str = "btn_enviar";
/// Id of the file upload control checked by the size gate.
pub const UPLOAD_ID: &str = "arquivo";

/// A discrete UI event. Handlers run to completion one at a time; every
/// field-level mutation ends in a full summary recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Input { field: FieldKey, value: String },
    Blur { field: FieldKey },
    ToggleClick { field: FieldKey },
    DatePick { field: FieldKey, value: String },
    FileSelected { size_bytes: u64 },
    Submit,
    DismissBanner { id: u64 },
    Advance { ms: u64 },
}

/// Session-scoped owner of everything the form tracks: the registry, one
/// runtime state per field, the document, the date pickers, and a logical
/// clock for banner expiry. Constructed once per form load and discarded on
/// navigation.
pub struct FormSession {
    registry: FieldRegistry,
    states: HashMap<FieldKey, FieldRuntimeState>,
    pickers: HashMap<FieldKey, Box<dyn DatePicker>>,
    doc: Document,
    now_ms: u64,
    last_has_changes: bool,
    tracer: TraceLogger,
}

impl FormSession {
    /// Bind a registry to a document. Runtime states are seeded from the
    /// document's companion nodes; each date field gets a picker with the
    /// session registered on its change list. The summary is computed once
    /// at load.
    pub fn new(registry: FieldRegistry, doc: Document) -> Self {
        let mut session = FormSession {
            registry,
            states: HashMap::new(),
            pickers: HashMap::new(),
            doc,
            now_ms: 0,
            last_has_changes: false,
            tracer: TraceLogger::disabled(),
        };

        for spec in session.registry.iter() {
            let state = FieldRuntimeState {
                current_value: read_current_value(&session.doc, spec),
                original_value: read_original_value(&session.doc, &spec.key),
                deleted: false,
            };
            session.states.insert(spec.key.clone(), state);

            if spec.kind == FieldKind::Date {
                let mut picker = SimDatePicker::new(PickerConfig::default());
                picker.add_change_observer(&spec.key);
                picker.set_raw_value(session.doc.value(&spec.input_id).unwrap_or(""));
                session.pickers.insert(spec.key.clone(), Box::new(picker));
            }
        }

        session.recompute();
        session
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    /// Route one event to its handler. Submit is the only event with an
    /// outcome the caller acts on.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Input { field, value } => {
                self.input(&field, &value);
                None
            }
            FormEvent::Blur { field } => {
                self.blur(&field);
                None
            }
            FormEvent::ToggleClick { field } => {
                self.toggle_click(&field);
                None
            }
            FormEvent::DatePick { field, value } => {
                self.pick_date(&field, &value);
                None
            }
            FormEvent::FileSelected { size_bytes } => {
                self.file_selected(size_bytes);
                None
            }
            FormEvent::Submit => Some(self.submit()),
            FormEvent::DismissBanner { id } => {
                self.doc.dismiss_banner(id);
                None
            }
            FormEvent::Advance { ms } => {
                self.advance(ms);
                None
            }
        }
    }

    /// User typed into a field's control.
    pub fn input(&mut self, field: &FieldKey, value: &str) {
        let Some(spec) = self.registry.get(field).cloned() else {
            return;
        };
        self.doc.set_value(&spec.input_id, value);
        self.apply_value_change(&spec, value);
        self.tracer
            .log(&TraceEvent::now("input").with_field(field).with_detail(value));
        self.recompute();
    }

    /// Focus left a field's control; re-reads the live value so direct
    /// manipulation is picked up.
    pub fn blur(&mut self, field: &FieldKey) {
        let Some(spec) = self.registry.get(field).cloned() else {
            return;
        };
        let value = read_current_value(&self.doc, &spec);
        self.apply_value_change(&spec, &value);
        self.recompute();
    }

    /// Delete-toggle clicked.
    pub fn toggle_click(&mut self, field: &FieldKey) {
        let Some(spec) = self.registry.get(field).cloned() else {
            return;
        };
        let Some(state) = self.states.get_mut(field) else {
            return;
        };

        match spec.kind {
            FieldKind::Text => text_toggle::toggle(&mut self.doc, &spec, state),
            FieldKind::Date => {
                if let Some(picker) = self.pickers.get_mut(field) {
                    date_toggle::toggle(&mut self.doc, &spec, state, picker.as_mut());
                }
            }
        }

        let detail = if state.deleted { "deleted" } else { "active" };
        self.tracer
            .log(&TraceEvent::now("toggle").with_field(field).with_detail(detail));
        self.recompute();
    }

    /// A date was selected through the picker widget. The widget notifies
    /// its own observer list, which bypasses normal input events.
    pub fn pick_date(&mut self, field: &FieldKey, value: &str) {
        let Some(picker) = self.pickers.get_mut(field) else {
            return;
        };
        let observers = picker.pick(value);

        for key in observers {
            let Some(spec) = self.registry.get(&key).cloned() else {
                continue;
            };
            self.doc.set_value(&spec.input_id, value);
            self.apply_value_change(&spec, value);
        }

        self.tracer
            .log(&TraceEvent::now("date_pick").with_field(field).with_detail(value));
        self.recompute();
    }

    /// A file was selected on the upload control.
    pub fn file_selected(&mut self, size_bytes: u64) {
        let accepted = validate_upload(&mut self.doc, UPLOAD_ID, size_bytes);
        self.tracer.log(
            &TraceEvent::now("file_selected")
                .with_detail(format!("{} bytes, accepted={}", size_bytes, accepted)),
        );
    }

    /// Gate a submit attempt.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = submit(&mut self.doc, SUBMIT_ID, self.now_ms);
        let detail = match &outcome {
            SubmitOutcome::Blocked { first_invalid, .. } => {
                format!("blocked, first invalid: {}", first_invalid)
            }
            SubmitOutcome::Accepted { .. } => "accepted".to_string(),
            SubmitOutcome::AlreadySubmitted => "already submitted".to_string(),
        };
        self.tracer.log(&TraceEvent::now("submit").with_detail(detail));
        outcome
    }

    /// Advance the logical clock, expiring any due banners. The only
    /// asynchrony in the whole system, and it is cosmetic.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        self.doc.expire_banners(self.now_ms);
    }

    /// Shared handling for a value change reaching a field: refresh runtime
    /// state and auto-revert a Deleted field whose value turned non-empty.
    fn apply_value_change(&mut self, spec: &FieldSpec, value: &str) {
        let Some(state) = self.states.get_mut(&spec.key) else {
            return;
        };
        state.current_value = value.to_string();

        if state.deleted && !is_empty(value) {
            match spec.kind {
                FieldKind::Text => text_toggle::revert_to_active(&mut self.doc, spec, state),
                FieldKind::Date => {
                    if let Some(picker) = self.pickers.get_mut(&spec.key) {
                        date_toggle::revert_to_active(&mut self.doc, spec, state, picker.as_mut());
                    }
                }
            }
        }
    }

    fn recompute(&mut self) {
        self.last_has_changes = recompute_summary(&mut self.doc, &self.registry, &self.states);
        self.tracer
            .log(&TraceEvent::now("summary_recomputed").with_has_changes(self.last_has_changes));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// Direct document access, for fixtures simulating out-of-band DOM
    /// manipulation. Route follow-up through `blur` so the controllers see
    /// the change.
    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn state(&self, field: &FieldKey) -> Option<&FieldRuntimeState> {
        self.states.get(field)
    }

    pub fn picker(&self, field: &FieldKey) -> Option<&dyn DatePicker> {
        self.pickers.get(field).map(|p| p.as_ref())
    }

    pub fn has_changes(&self) -> bool {
        self.last_has_changes
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn fingerprint(&self) -> String {
        summary_fingerprint(&self.doc, &self.registry)
    }

    /// Force a recompute without any state change; used to check
    /// idempotence.
    pub fn recompute_now(&mut self) -> bool {
        self.recompute();
        self.last_has_changes
    }
}

/// Build the document the readequação page would render for a registry:
/// one input per field with its companion original node, hidden summary row
/// and overlay, the toggle control, the "no changes" placeholder, the submit
/// control, and the upload control.
pub fn seed_document(registry: &FieldRegistry, originals: &HashMap<FieldKey, String>) -> Document {
    let mut doc = Document::new();

    for spec in registry.iter() {
        doc.insert_node(&spec.input_id);
        let original = originals.get(&spec.key).cloned().unwrap_or_default();
        doc.insert_value_node(&spec.original_id(), &original);
        doc.insert_hidden_node(&spec.summary_row_id);
        doc.insert_node(&spec.summary_value_id);
        if let Some(toggle) = spec.toggle.as_ref() {
            doc.insert_node(&toggle.toggle_id);
            doc.insert_hidden_node(&toggle.overlay_id);
        }
    }

    doc.insert_node(NO_CHANGES_ID);
    doc.set_text(NO_CHANGES_ID, "Nenhuma alteração");
    doc.insert_node(SUBMIT_ID);
    doc.set_text(SUBMIT_ID, "Enviar");
    doc.insert_node(UPLOAD_ID);

    doc
}
