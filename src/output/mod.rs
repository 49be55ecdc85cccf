//! Output generation for the figures CLI application

use figures::range::SliderDisplay;
use tinytemplate::TinyTemplate;
use tracing::debug;

static TEMPLATE: &'static str = r#"value:    {value}
position: {position} ({alignment})
{{ if min }}range:    {min} to {max}
{{ endif }}"#;

/// Summarize the labels of a slider, one per line.
pub fn slider(labels: &SliderDisplay) -> Result<String, tinytemplate::error::Error> {
    debug!(?labels);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("slider", TEMPLATE)?;

    tt.render("slider", labels)
}
