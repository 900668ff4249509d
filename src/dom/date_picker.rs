use crate::registry::field_spec::FieldKey;

/// Picker configuration fixed at init time. Mirrors the widget setup used on
/// the readequação page: day/month/year display, no past dates, Portuguese
/// locale.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub date_format: String,
    pub min_date_today: bool,
    pub locale: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            date_format: "d/m/Y".to_string(),
            min_date_today: true,
            locale: "pt".to_string(),
        }
    }
}

/// Abstracted date control.
///
/// The widget owns its own change-notification list, which bypasses normal
/// input events; controllers register themselves on it and must re-register
/// after reverting a delete (the widget may have been cleared in between).
/// Registration is idempotent.
pub trait DatePicker {
    /// Clear the current selection and the backing raw value.
    fn clear(&mut self);

    fn raw_value(&self) -> &str;

    fn set_raw_value(&mut self, value: &str);

    /// Register a field on the widget's change-notification list.
    fn add_change_observer(&mut self, key: &FieldKey);

    fn observers(&self) -> &[FieldKey];

    /// Select a date, returning the observers to notify.
    fn pick(&mut self, value: &str) -> Vec<FieldKey>;
}

/// In-memory picker used by the session and the test harness.
#[derive(Debug, Clone)]
pub struct SimDatePicker {
    config: PickerConfig,
    value: String,
    observers: Vec<FieldKey>,
}

impl SimDatePicker {
    pub fn new(config: PickerConfig) -> Self {
        SimDatePicker {
            config,
            value: String::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }
}

impl Default for SimDatePicker {
    fn default() -> Self {
        SimDatePicker::new(PickerConfig::default())
    }
}

impl DatePicker for SimDatePicker {
    fn clear(&mut self) {
        self.value.clear();
    }

    fn raw_value(&self) -> &str {
        &self.value
    }

    fn set_raw_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn add_change_observer(&mut self, key: &FieldKey) {
        if !self.observers.contains(key) {
            self.observers.push(key.clone());
        }
    }

    fn observers(&self) -> &[FieldKey] {
        &self.observers
    }

    fn pick(&mut self, value: &str) -> Vec<FieldKey> {
        self.value = value.to_string();
        self.observers.clone()
    }
}
