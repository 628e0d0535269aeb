//! End-to-end style composition tests.

use html_label_style::prelude::*;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A label that reports a custom default size, like a platform with larger
/// default fonts.
struct FixedMetrics(f64);

impl FontMetrics for FixedMetrics {
    fn default_label_font_size(&self) -> f64 {
        self.0
    }
}

#[test]
fn test_bold_blue_centered() {
    setup();
    let style = LabelStyle::new()
        .with_font_attributes(FontAttributes::BOLD)
        .with_text_color(Color::new(0.0, 0.0, 1.0, 1.0))
        .with_horizontal_text_alignment(TextAlignment::Center);

    let html = StyleComposer::new(&style, "Hi").render(&SystemFontMetrics);
    assert_eq!(
        html.as_deref(),
        Some(
            "<div style=\"font-weight:bold;\
             font-family:'-apple-system,system-ui,BlinkMacSystemFont,Segoe UI';\
             color:#0000FF;color:rgba(0,0,255,1);\
             text-align:center\">Hi</div>"
        )
    );
}

#[test]
fn test_font_size_only_when_not_default() {
    setup();
    let style = LabelStyle::new().with_font_size(18.0);

    let html = StyleComposer::new(&style, "Hi")
        .render(&FixedMetrics(18.0))
        .unwrap();
    assert!(!html.contains("font-size"));

    let html = StyleComposer::new(&style, "Hi")
        .render(&FixedMetrics(18.000_001))
        .unwrap();
    assert!(html.ends_with(";font-size:18px\">Hi</div>"));
}

#[test]
fn test_no_trailing_separator() {
    setup();
    let style = LabelStyle::new().with_horizontal_text_alignment(TextAlignment::End);
    let html = StyleComposer::new(&style, "Hi").render(&SystemFontMetrics).unwrap();
    assert!(html.contains("text-align:end\">"));
    assert!(!html.contains(";\""));
}

#[test]
fn test_text_is_not_escaped() {
    setup();
    let style = LabelStyle::new();
    let html = StyleComposer::new(&style, "  <b>bold</b> & more ")
        .render(&SystemFontMetrics)
        .unwrap();
    assert!(html.ends_with("\"><b>bold</b> & more</div>"));
}

#[test]
fn test_whitespace_text_renders_nothing() {
    setup();
    let style = LabelStyle::new()
        .with_font_attributes(FontAttributes::ITALIC)
        .with_horizontal_text_alignment(TextAlignment::Center);
    assert_eq!(StyleComposer::new(&style, " \r\n ").render(&SystemFontMetrics), None);
}

#[test]
fn test_snapshot_matches_source() {
    let style = LabelStyle::new()
        .with_font_family("Inter")
        .with_text_color(Color::GRAY)
        .with_font_size(11.0);
    assert_eq!(LabelStyle::snapshot(&style), style);
}

#[test]
fn test_relevant_properties() {
    for name in [
        property_names::TEXT,
        property_names::FONT_ATTRIBUTES,
        property_names::FONT_FAMILY,
        property_names::FONT_SIZE,
        property_names::HORIZONTAL_TEXT_ALIGNMENT,
        property_names::TEXT_COLOR,
    ] {
        assert!(is_relevant_property(name));
    }
    assert!(!is_relevant_property(""));
    assert!(!is_relevant_property("IsVisible"));
}
