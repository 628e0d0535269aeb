//! Label property names that affect the composed HTML.
//!
//! Hosts notify property changes by name. Only a change to one of the names
//! in [`RELEVANT_PROPERTIES`] requires the fragment to be composed again.

/// Names of the label properties read during composition.
pub mod property_names {
    /// The label text.
    pub const TEXT: &str = "Text";
    /// Bold/italic flags.
    pub const FONT_ATTRIBUTES: &str = "FontAttributes";
    /// Custom font family.
    pub const FONT_FAMILY: &str = "FontFamily";
    /// Font size in points.
    pub const FONT_SIZE: &str = "FontSize";
    /// Horizontal text alignment.
    pub const HORIZONTAL_TEXT_ALIGNMENT: &str = "HorizontalTextAlignment";
    /// Text color.
    pub const TEXT_COLOR: &str = "TextColor";
}

/// Every property name whose change invalidates the composed HTML.
pub const RELEVANT_PROPERTIES: [&str; 6] = [
    property_names::TEXT,
    property_names::FONT_ATTRIBUTES,
    property_names::FONT_FAMILY,
    property_names::FONT_SIZE,
    property_names::HORIZONTAL_TEXT_ALIGNMENT,
    property_names::TEXT_COLOR,
];

/// Check whether a change to `property` requires the HTML to be rebuilt.
///
/// Names are matched exactly (case-sensitive).
pub fn is_relevant_property(property: &str) -> bool {
    RELEVANT_PROPERTIES.contains(&property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exactly_six_properties() {
        for name in RELEVANT_PROPERTIES {
            assert!(is_relevant_property(name), "{name} should be relevant");
        }
    }

    #[test]
    fn rejects_other_names() {
        assert!(!is_relevant_property(""));
        assert!(!is_relevant_property("text"));
        assert!(!is_relevant_property("LineBreakMode"));
        assert!(!is_relevant_property("BrowserLaunchOptions"));
    }
}
