#[cfg(test)]
mod verify {
    use std::path::Path;

    use figures::field::*;
    use figures::formatting::{Currency, Format};

    #[test]
    fn partial_document() {
        let content = r#"
{
    "currency": {
        "symbol_left": "",
        "symbol_right": "€",
        "decimal_separator": ",",
        "thousand_separator": "."
    },
    "field": {
        "format": "currency",
        "maxnum": "500"
    }
}
        "#;

        let settings = parse(Path::new("field.json"), content).unwrap();

        assert_eq!(settings.currency.symbol_right, "€");
        assert_eq!(settings.currency.decimals, 2);
        assert_eq!(settings.field.format, Format::Currency);
        assert_eq!(settings.field.minnum, "0");
        assert_eq!(settings.field.maxnum, "500");
        assert_eq!(settings.field.step, "1");
        assert_eq!(settings.field.custom_decimals, None);

        let config = settings
            .field
            .format_config(&settings.currency);
        assert_eq!(config.decimal_separator, ",");
        assert_eq!(config.symbol_right, "€");
    }

    #[test]
    fn empty_document() {
        let settings = parse(Path::new("field.json"), "{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn explicit_empty_override() {
        let content = r#"{ "field": { "format": "number", "custom_thousand_separator": "" } }"#;
        let settings = parse(Path::new("field.json"), content).unwrap();

        let config = settings
            .field
            .format_config(&settings.currency);
        assert_eq!(config.thousand_separator, "");
        assert_eq!(config.symbol_left, "");
    }

    #[test]
    fn currency_decimals_fall_back() {
        for content in [
            r#"{ "currency": { "decimals": "two" } }"#,
            r#"{ "currency": { "decimals": "" } }"#,
            r#"{ "currency": { "decimals": -1 } }"#,
            r#"{ "currency": { "decimals": null } }"#,
        ] {
            let settings = parse(Path::new("field.json"), content).unwrap();
            assert_eq!(settings.currency.decimals, 2);
        }

        let settings = parse(Path::new("field.json"), r#"{ "currency": { "decimals": "3" } }"#).unwrap();
        assert_eq!(settings.currency.decimals, 3);

        let settings = parse(Path::new("field.json"), r#"{ "currency": { "decimals": 0 } }"#).unwrap();
        assert_eq!(settings.currency.decimals, 0);
    }

    #[test]
    fn invalid_document() {
        let filename = Path::new("broken.json");
        let error = parse(filename, "{ \"field\": ").unwrap_err();

        assert_eq!(error.problem, "Invalid settings");
        assert_eq!(error.filename, filename);
        assert!(!error
            .details
            .is_empty());
    }

    #[test]
    fn missing_file() {
        let filename = Path::new("/nonexistent/figures/settings.json");
        let error = load(filename).unwrap_err();

        assert_eq!(error.problem, "File not found");
    }

    #[test]
    fn resetting_to_global_currency() {
        let currency = Currency::default();

        let mut settings = FieldSettings {
            format: Format::Number,
            custom_symbol_left: Some("€".to_string()),
            custom_decimals: Some("4".to_string()),
            ..FieldSettings::default()
        };
        settings.reset_format(&currency);

        assert_eq!(settings.custom_symbol_left, Some(String::new()));
        assert_eq!(settings.custom_decimals, Some("2".to_string()));
        assert!(settings.use_global_currency);

        let mut settings = FieldSettings {
            format: Format::Currency,
            ..FieldSettings::default()
        };
        settings.reset_format(&currency);
        assert_eq!(settings.custom_symbol_left, Some("$".to_string()));
    }
}
