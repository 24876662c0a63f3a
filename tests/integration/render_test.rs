use omnifetch::ui::{visible_width, Report, Style};

#[test]
fn test_rows_pad_short_logo() {
    let report = Report::new(vec!["AAAAA", "BBB"], vec!["one", "two", "three"], Style::plain());

    assert_eq!(report.logo_width(), 5);
    assert_eq!(
        report.rows(),
        vec![
            "  AAAAA   one".to_string(),
            "  BBB     two".to_string(),
            "          three".to_string(),
        ]
    );
}

#[test]
fn test_escape_sequences_do_not_count_toward_width() {
    let logo = vec!["\x1b[31mRED\x1b[0m", "12345"];
    let report = Report::new(logo, vec!["a", "b"], Style::plain());
    assert_eq!(report.logo_width(), 5);

    let rows = report.rows();
    assert_eq!(visible_width(&rows[0]), visible_width(&rows[1]));
}

#[test]
fn test_wide_characters_use_display_width() {
    let report = Report::new(vec!["日本", "ab"], vec!["x", "y"], Style::plain());
    assert_eq!(report.logo_width(), 4);
    assert_eq!(report.rows()[1], "  ab     y");
}

#[test]
fn test_output_surrounded_by_blank_lines() {
    let text = Report::new(vec!["/\\"], vec!["user@host"], Style::plain()).to_string();
    assert!(text.starts_with('\n'));
    assert!(text.ends_with("\n\n"));
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["", "  /\\   user@host", ""]);
}

#[test]
fn test_colored_rows_keep_layout() {
    let plain = Report::new(vec!["AAAAA", "BBB"], vec!["one", "two"], Style::plain());
    let colored = Report::new(vec!["AAAAA", "BBB"], vec!["one", "two"], Style::default());
    let widths = |r: &Report| r.rows().iter().map(|row| visible_width(row)).collect::<Vec<_>>();
    assert_eq!(widths(&plain), widths(&colored));
}
