#[cfg(test)]
mod verify {
    use std::cell::RefCell;
    use std::rc::Rc;

    use figures::builder::*;
    use figures::field::FieldSettings;
    use figures::formatting::Currency;

    fn change(subject: Subject, value: &str) -> Change<'_> {
        Change { subject, value }
    }

    fn currency_preview() -> Preview {
        let mut preview = Preview::new(FieldSettings::default(), Currency::default());
        preview.apply(change(Subject::FormatKind, "currency"));
        preview
    }

    #[test]
    fn starts_at_midpoint() {
        let preview = Preview::new(FieldSettings::default(), Currency::default());

        assert_eq!(preview.slider_value(), "50");
        assert_eq!(preview.slider_label(), "50");
        assert_eq!(preview.default_preview(), "");
    }

    #[test]
    fn listeners_see_every_update() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut preview = Preview::new(FieldSettings::default(), Currency::default());
        let sink = Rc::clone(&seen);
        preview.on_update(move |update| {
            sink.borrow_mut()
                .push(update.clone())
        });

        let updates = preview.apply(change(Subject::FormatKind, "currency"));

        assert_eq!(
            updates,
            vec![
                Update::SliderLabel("$50.00".to_string()),
                Update::DefaultPreview(String::new()),
            ]
        );
        assert_eq!(*seen.borrow(), updates);
    }

    #[test]
    fn slider_value_changes() {
        let mut preview = currency_preview();

        let updates = preview.apply(change(Subject::SliderValue, "1234"));
        assert_eq!(updates, vec![Update::SliderLabel("$1,234.00".to_string())]);

        // cleared falls back to the midpoint
        let updates = preview.apply(change(Subject::SliderValue, ""));
        assert_eq!(updates, vec![Update::SliderLabel("$50.00".to_string())]);
        assert_eq!(preview.slider_value(), "50");
    }

    #[test]
    fn bounds_move_midpoint_without_default() {
        let mut preview = Preview::new(FieldSettings::default(), Currency::default());

        let updates = preview.apply(change(Subject::SliderMax, "200"));
        assert_eq!(updates, vec![Update::SliderLabel("100".to_string())]);

        let updates = preview.apply(change(Subject::SliderMin, "100"));
        assert_eq!(updates, vec![Update::SliderLabel("150".to_string())]);
    }

    #[test]
    fn bounds_keep_value_with_default() {
        let mut preview = Preview::new(FieldSettings::default(), Currency::default());

        preview.apply(change(Subject::DefaultValue, "40"));
        preview.apply(change(Subject::SliderValue, "40"));

        let updates = preview.apply(change(Subject::SliderMax, "200"));
        assert_eq!(updates, vec![Update::SliderLabel("40".to_string())]);
    }

    #[test]
    fn step_changes_nothing_visible() {
        let mut preview = Preview::new(FieldSettings::default(), Currency::default());

        assert!(preview
            .apply(change(Subject::SliderStep, "5"))
            .is_empty());
        assert_eq!(
            preview
                .settings()
                .step,
            "5"
        );
    }

    #[test]
    fn default_value_preview() {
        let mut preview = currency_preview();

        let updates = preview.apply(change(Subject::DefaultValue, "Total [x 5] 10"));
        assert_eq!(
            updates,
            vec![Update::DefaultPreview("Total [x 5] $10.00".to_string())]
        );

        let updates = preview.apply(change(Subject::DefaultValue, ""));
        assert_eq!(updates, vec![Update::DefaultPreview(String::new())]);
    }

    #[test]
    fn format_settings_apply_to_both_displays() {
        let mut preview = currency_preview();
        preview.apply(change(Subject::SliderValue, "1234"));
        preview.apply(change(Subject::DefaultValue, "2500"));

        let updates = preview.apply(change(
            Subject::FormatSetting(FormatKey::ThousandSeparator),
            "",
        ));
        assert_eq!(
            updates,
            vec![
                Update::SliderLabel("$1234.00".to_string()),
                Update::DefaultPreview("$2500.00".to_string()),
            ]
        );

        let updates = preview.apply(change(Subject::FormatSetting(FormatKey::SymbolLeft), "€"));
        assert_eq!(updates[0], Update::SliderLabel("€1234.00".to_string()));

        let updates = preview.apply(change(Subject::FormatSetting(FormatKey::Decimals), "0"));
        assert_eq!(updates[1], Update::DefaultPreview("€2500".to_string()));
    }

    #[test]
    fn whole_currency_rounds_up_in_preview() {
        let mut preview = currency_preview();
        preview.apply(change(Subject::FormatSetting(FormatKey::Decimals), "0"));

        let updates = preview.apply(change(Subject::SliderValue, "12.2"));
        assert_eq!(updates, vec![Update::SliderLabel("$13".to_string())]);
    }

    #[test]
    fn number_format_drops_symbols() {
        let mut preview = currency_preview();
        preview.apply(change(Subject::SliderValue, "1234"));

        let updates = preview.apply(change(Subject::FormatKind, "number"));
        assert_eq!(updates[0], Update::SliderLabel("1,234.00".to_string()));
    }

    #[test]
    fn back_to_global_currency() {
        let mut preview = currency_preview();
        preview.apply(change(Subject::FormatSetting(FormatKey::SymbolLeft), "€"));
        assert_eq!(preview.slider_label(), "€50.00");

        preview.apply(change(Subject::UseGlobalCurrency, "1"));
        assert_eq!(preview.slider_label(), "$50.00");
        assert!(
            preview
                .settings()
                .use_global_currency
        );
    }

    #[test]
    fn plain_format_passes_through() {
        let mut preview = currency_preview();
        preview.apply(change(Subject::SliderValue, "1234"));

        let updates = preview.apply(change(Subject::FormatKind, ""));
        assert_eq!(
            updates,
            vec![
                Update::SliderLabel("1234".to_string()),
                Update::DefaultPreview(String::new()),
            ]
        );
    }
}
