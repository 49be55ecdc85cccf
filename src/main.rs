use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, Level};

use figures::field::{self, Settings};
use figures::formatting::{self, Format};
use figures::range;

mod output;

fn format_args() -> Vec<Arg> {
    vec![
        Arg::new("settings")
            .long("settings")
            .value_name("FILE")
            .help("JSON document with the global currency and the field's settings."),
        Arg::new("format")
            .long("format")
            .help("Format of the field: currency, number, or anything else to leave values alone. Defaults to currency when no settings file is given."),
        Arg::new("decimals")
            .long("decimals")
            .help("Number of digits after the decimal separator."),
        Arg::new("decimal-separator")
            .long("decimal-separator")
            .help("Character between the whole and fractional parts."),
        Arg::new("thousand-separator")
            .long("thousand-separator")
            .help("Character grouping every three digits; empty to disable grouping."),
        Arg::new("symbol-left")
            .long("symbol-left")
            .help("Symbol placed before the number."),
        Arg::new("symbol-right")
            .long("symbol-right")
            .help("Symbol placed after the number."),
        Arg::new("padding")
            .long("padding")
            .help("Text between each symbol and the number."),
    ]
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("figures")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Currency and number display formatting for form fields.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the formatter is doing to standard error."),
        )
        .subcommand(
            Command::new("format")
                .about("Format a single number for display")
                .args(format_args())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("The raw number to format."),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Format every standalone number in a piece of text, leaving shortcodes alone")
                .args(format_args())
                .arg(
                    Arg::new("text")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("The text, typically a field's default value."),
                ),
        )
        .subcommand(
            Command::new("slider")
                .about("Show the labels a slider field would display")
                .args(format_args())
                .arg(
                    Arg::new("min")
                        .long("min")
                        .allow_hyphen_values(true)
                        .help("Lowest value of the slider."),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .allow_hyphen_values(true)
                        .help("Highest value of the slider."),
                )
                .arg(
                    Arg::new("step")
                        .long("step")
                        .help("Increment between slider values."),
                )
                .arg(
                    Arg::new("value")
                        .long("value")
                        .allow_hyphen_values(true)
                        .help("Currently selected value."),
                )
                .arg(
                    Arg::new("default")
                        .long("default")
                        .allow_hyphen_values(true)
                        .help("Default value of the field."),
                )
                .arg(
                    Arg::new("prepend")
                        .long("prepend")
                        .help("Unit shown before the value."),
                )
                .arg(
                    Arg::new("append")
                        .long("append")
                        .help("Unit shown after the value."),
                )
                .arg(
                    Arg::new("position")
                        .long("position")
                        .help("Where the value sits: top-left, bottom-center, and so on."),
                )
                .arg(
                    Arg::new("show-range")
                        .long("show-range")
                        .help("Whether to show min and max under the slider (1 or 0)."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            let settings = settings_from(submatches);
            let config = settings
                .field
                .format_config(&settings.currency);

            if let Some(value) = submatches.get_one::<String>("value") {
                let result =
                    formatting::format(value, &config, &settings.field.format_kind());
                println!("{}", result);
            }
        }
        Some(("scan", submatches)) => {
            let settings = settings_from(submatches);
            let config = settings
                .field
                .format_config(&settings.currency);

            if let Some(text) = submatches.get_one::<String>("text") {
                let result =
                    formatting::scan_and_format(text, &config, &settings.field.format_kind());
                println!("{}", result);
            }
        }
        Some(("slider", submatches)) => {
            let mut settings = settings_from(submatches);

            let slider = [
                ("min", &mut settings.field.minnum),
                ("max", &mut settings.field.maxnum),
                ("step", &mut settings.field.step),
                ("value", &mut settings.field.value),
                ("default", &mut settings.field.default_value),
                ("prepend", &mut settings.field.prepend),
                ("append", &mut settings.field.append),
                ("position", &mut settings.field.value_position),
                ("show-range", &mut settings.field.show_slider_range),
            ];
            for (name, setting) in slider {
                if let Some(value) = submatches.get_one::<String>(name) {
                    *setting = value.clone();
                }
            }

            let display = range::display(&settings.field, &settings.currency);

            match output::slider(&display) {
                Ok(text) => print!("{}", text),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: figures [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Assemble the settings for a command: the settings file if one was given,
/// with any format flags on the command line taking precedence.
fn settings_from(submatches: &ArgMatches) -> Settings {
    let mut settings = match submatches.get_one::<String>("settings") {
        Some(filename) => {
            let filename = Path::new(filename);
            debug!("Reading settings from {:?}", filename);

            let content = match field::load(filename) {
                Ok(content) => content,
                Err(error) => {
                    eprintln!("{}", error.full_details());
                    std::process::exit(1);
                }
            };

            match field::parse(filename, &content) {
                Ok(settings) => settings,
                Err(error) => {
                    eprintln!("{}", error.full_details());
                    std::process::exit(1);
                }
            }
        }
        None => {
            let mut settings = Settings::default();
            settings.field.format = Format::Currency;
            settings
        }
    };

    if let Some(format) = submatches.get_one::<String>("format") {
        settings.field.format = Format::from(format.as_str());
    }

    let overrides = [
        ("decimals", &mut settings.field.custom_decimals),
        ("decimal-separator", &mut settings.field.custom_decimal_separator),
        ("thousand-separator", &mut settings.field.custom_thousand_separator),
        ("symbol-left", &mut settings.field.custom_symbol_left),
        ("symbol-right", &mut settings.field.custom_symbol_right),
    ];
    let mut custom = false;
    for (name, setting) in overrides {
        if let Some(value) = submatches.get_one::<String>(name) {
            *setting = Some(value.clone());
            custom = true;
        }
    }
    if custom {
        settings
            .field
            .use_global_currency = false;
    }

    if let Some(padding) = submatches.get_one::<String>("padding") {
        settings
            .currency
            .symbol_padding = padding.clone();
    }

    settings
}
