//! Live preview of a numeric field while it is edited in the form builder.

use tracing::debug;

use crate::field::FieldSettings;
use crate::formatting::{self, scan_and_format, Currency, Format};

/// A format setting a user can edit on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    Decimals,
    DecimalSeparator,
    ThousandSeparator,
    SymbolLeft,
    SymbolRight,
}

/// What an edit in the builder touched. The caller works this out once, from
/// whichever input fired, and the preview dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    SliderValue,
    SliderMin,
    SliderMax,
    SliderStep,
    DefaultValue,
    FormatKind,
    UseGlobalCurrency,
    FormatSetting(FormatKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change<'a> {
    pub subject: Subject,
    pub value: &'a str,
}

/// New text for one of the display surfaces of a field preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The value label beside the slider.
    SliderLabel(String),
    /// The preview input showing the formatted default value.
    DefaultPreview(String),
}

type Listener = Box<dyn Fn(&Update)>;

/// Holds the settings of the field being edited and recomputes its
/// displayed values as changes come in. Whoever owns the display surfaces
/// registers with on_update() and writes the new text out.
pub struct Preview {
    settings: FieldSettings,
    currency: Currency,
    slider: String,
    listeners: Vec<Listener>,
}

impl Preview {
    pub fn new(settings: FieldSettings, currency: Currency) -> Preview {
        let slider = settings
            .range_state(&currency)
            .starting()
            .to_string();

        Preview {
            settings,
            currency,
            slider,
            listeners: Vec::new(),
        }
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Current raw value of the slider input.
    pub fn slider_value(&self) -> &str {
        &self.slider
    }

    pub fn on_update<F>(&mut self, listener: F)
    where
        F: Fn(&Update) + 'static,
    {
        self.listeners
            .push(Box::new(listener));
    }

    /// Apply an edit, notify listeners of every display that changed, and
    /// return those same updates.
    pub fn apply(&mut self, change: Change<'_>) -> Vec<Update> {
        debug!(subject = ?change.subject, value = change.value, "Applying change");

        let updates = match change.subject {
            Subject::SliderValue => {
                self.slider = if change
                    .value
                    .is_empty()
                {
                    self.midpoint()
                } else {
                    change
                        .value
                        .to_string()
                };
                vec![Update::SliderLabel(self.slider_label())]
            }
            Subject::SliderMin | Subject::SliderMax => {
                if change.subject == Subject::SliderMin {
                    self.settings.minnum = change
                        .value
                        .to_string();
                } else {
                    self.settings.maxnum = change
                        .value
                        .to_string();
                }
                if self
                    .settings
                    .default_value
                    .is_empty()
                {
                    self.slider = self.midpoint();
                }
                vec![Update::SliderLabel(self.slider_label())]
            }
            Subject::SliderStep => {
                self.settings.step = change
                    .value
                    .to_string();
                vec![]
            }
            Subject::DefaultValue => {
                self.settings.default_value = change
                    .value
                    .to_string();
                vec![Update::DefaultPreview(self.default_preview())]
            }
            Subject::FormatKind => {
                self.settings.format = Format::from(change.value);
                if self
                    .settings
                    .format_kind()
                    .is_currency()
                {
                    self.settings
                        .reset_format(&self.currency);
                }
                self.refresh_all()
            }
            Subject::UseGlobalCurrency => {
                if matches!(change.value, "" | "0" | "false") {
                    self.settings
                        .use_global_currency = false;
                } else {
                    self.settings
                        .reset_format(&self.currency);
                }
                self.refresh_all()
            }
            Subject::FormatSetting(key) => {
                let value = Some(
                    change
                        .value
                        .to_string(),
                );
                match key {
                    FormatKey::Decimals => self.settings.custom_decimals = value,
                    FormatKey::DecimalSeparator => self.settings.custom_decimal_separator = value,
                    FormatKey::ThousandSeparator => self.settings.custom_thousand_separator = value,
                    FormatKey::SymbolLeft => self.settings.custom_symbol_left = value,
                    FormatKey::SymbolRight => self.settings.custom_symbol_right = value,
                }
                self.settings
                    .use_global_currency = false;
                self.refresh_all()
            }
        };

        for update in &updates {
            for listener in &self.listeners {
                listener(update);
            }
        }

        updates
    }

    /// The slider's value as displayed in its label.
    pub fn slider_label(&self) -> String {
        let config = self
            .settings
            .format_config(&self.currency);

        formatting::format(&self.slider, &config, &self.settings.format_kind())
    }

    /// The default value with its numbers formatted; empty when there is no
    /// default.
    pub fn default_preview(&self) -> String {
        let config = self
            .settings
            .format_config(&self.currency);

        scan_and_format(
            &self
                .settings
                .default_value,
            &config,
            &self.settings.format_kind(),
        )
    }

    fn refresh_all(&self) -> Vec<Update> {
        vec![
            Update::SliderLabel(self.slider_label()),
            Update::DefaultPreview(self.default_preview()),
        ]
    }

    fn midpoint(&self) -> String {
        let config = self
            .settings
            .format_config(&self.currency);

        formatting::display_number(
            self.settings
                .bounds(&config)
                .midpoint(),
        )
    }
}
