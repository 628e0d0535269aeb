//! Label widget displaying HTML text.
//!
//! The HtmlLabel widget holds:
//! - The text, which may contain HTML markup and links
//! - Font attributes, family and size
//! - Text color and horizontal alignment
//! - Options for opening web links
//!
//! # Example
//!
//! ```
//! use html_label::HtmlLabel;
//! use html_label_style::prelude::*;
//!
//! let label = HtmlLabel::new("Read the <a href=\"https://example.com\">docs</a>")
//!     .with_font_attributes(FontAttributes::ITALIC)
//!     .with_horizontal_text_alignment(TextAlignment::Center);
//!
//! let html = label.to_html(&SystemFontMetrics).unwrap();
//! assert!(html.starts_with("<div style=\"font-style:italic;"));
//! ```

use std::sync::Arc;

use html_label_core::{Property, Signal};
use html_label_style::composer::{FontMetrics, StyleComposer, StyleSource, DEFAULT_LABEL_FONT_SIZE};
use html_label_style::properties::property_names;
use html_label_style::types::{Color, FontAttributes, TextAlignment};

use crate::navigation::{BrowserLaunchOptions, WebNavigatingEventArgs};

/// Name of the browser launch options property.
pub const BROWSER_LAUNCH_OPTIONS: &str = "BrowserLaunchOptions";

/// A label whose text is rendered as HTML.
///
/// Properties use interior mutability, so a label can be shared as
/// `Arc<HtmlLabel>` between the UI thread, its renderer and navigation
/// tasks.
///
/// # Signals
///
/// - `property_changed`: the name of a property whose value changed
/// - `navigating`: a link is about to be followed; observers may cancel
/// - `navigated`: a link was followed
#[derive(Debug)]
pub struct HtmlLabel {
    text: Property<String>,
    font_attributes: Property<FontAttributes>,
    font_family: Property<Option<String>>,
    font_size: Property<f64>,
    text_color: Property<Option<Color>>,
    horizontal_text_alignment: Property<TextAlignment>,
    browser_launch_options: Property<Option<BrowserLaunchOptions>>,

    /// Signal emitted with the property name when a property changes.
    pub property_changed: Signal<&'static str>,

    /// Signal emitted before a tapped link is followed.
    pub navigating: Signal<Arc<WebNavigatingEventArgs>>,

    /// Signal emitted after a tapped link was followed.
    pub navigated: Signal<Arc<WebNavigatingEventArgs>>,
}

impl Default for HtmlLabel {
    fn default() -> Self {
        Self::new("")
    }
}

impl HtmlLabel {
    /// Create a new label with the specified text.
    ///
    /// The label is created with default settings:
    /// - Regular weight, system font family at the default label size
    /// - Viewer default text color
    /// - Start alignment
    /// - Platform default browser options
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Property::new(text.into()),
            font_attributes: Property::new(FontAttributes::NONE),
            font_family: Property::new(None),
            font_size: Property::new(DEFAULT_LABEL_FONT_SIZE),
            text_color: Property::new(None),
            horizontal_text_alignment: Property::new(TextAlignment::Start),
            browser_launch_options: Property::new(None),
            property_changed: Signal::new(),
            navigating: Signal::new(),
            navigated: Signal::new(),
        }
    }

    /// Emit `property_changed` if `changed` is set.
    fn notify(&self, changed: bool, property: &'static str) {
        if changed {
            self.property_changed.emit(property);
        }
    }

    /// Get the text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.notify(self.text.set(text.into()), property_names::TEXT);
    }

    /// Set the text using builder pattern.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.text.set_silent(text.into());
        self
    }

    /// Get the font attributes.
    pub fn font_attributes(&self) -> FontAttributes {
        self.font_attributes.get()
    }

    /// Set the font attributes.
    pub fn set_font_attributes(&self, attributes: FontAttributes) {
        self.notify(
            self.font_attributes.set(attributes),
            property_names::FONT_ATTRIBUTES,
        );
    }

    /// Set font attributes using builder pattern.
    pub fn with_font_attributes(self, attributes: FontAttributes) -> Self {
        self.font_attributes.set_silent(attributes);
        self
    }

    /// Get the custom font family.
    pub fn font_family(&self) -> Option<String> {
        self.font_family.get()
    }

    /// Set or clear the custom font family.
    pub fn set_font_family(&self, family: Option<String>) {
        self.notify(self.font_family.set(family), property_names::FONT_FAMILY);
    }

    /// Set font family using builder pattern.
    pub fn with_font_family(self, family: impl Into<String>) -> Self {
        self.font_family.set_silent(Some(family.into()));
        self
    }

    /// Get the font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size.get()
    }

    /// Set the font size in points.
    pub fn set_font_size(&self, size: f64) {
        self.notify(self.font_size.set(size), property_names::FONT_SIZE);
    }

    /// Set font size using builder pattern.
    pub fn with_font_size(self, size: f64) -> Self {
        self.font_size.set_silent(size);
        self
    }

    /// Get the text color, if one is set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color.get()
    }

    /// Set or clear the text color.
    pub fn set_text_color(&self, color: Option<Color>) {
        self.notify(self.text_color.set(color), property_names::TEXT_COLOR);
    }

    /// Set text color using builder pattern.
    pub fn with_text_color(self, color: Color) -> Self {
        self.text_color.set_silent(Some(color));
        self
    }

    /// Get the horizontal alignment.
    pub fn horizontal_text_alignment(&self) -> TextAlignment {
        self.horizontal_text_alignment.get()
    }

    /// Set the horizontal alignment.
    pub fn set_horizontal_text_alignment(&self, alignment: TextAlignment) {
        self.notify(
            self.horizontal_text_alignment.set(alignment),
            property_names::HORIZONTAL_TEXT_ALIGNMENT,
        );
    }

    /// Set horizontal alignment using builder pattern.
    pub fn with_horizontal_text_alignment(self, alignment: TextAlignment) -> Self {
        self.horizontal_text_alignment.set_silent(alignment);
        self
    }

    /// Get the options used to open web links, if configured.
    pub fn browser_launch_options(&self) -> Option<BrowserLaunchOptions> {
        self.browser_launch_options.get()
    }

    /// Set or clear the options used to open web links.
    pub fn set_browser_launch_options(&self, options: Option<BrowserLaunchOptions>) {
        self.notify(
            self.browser_launch_options.set(options),
            BROWSER_LAUNCH_OPTIONS,
        );
    }

    /// Set browser launch options using builder pattern.
    pub fn with_browser_launch_options(self, options: BrowserLaunchOptions) -> Self {
        self.browser_launch_options.set_silent(Some(options));
        self
    }

    /// Compose the styled HTML for the current properties.
    ///
    /// Returns `None` when the text is blank.
    pub fn to_html<M: FontMetrics + ?Sized>(&self, metrics: &M) -> Option<String> {
        let text = self.text();
        StyleComposer::new(self, &text).render(metrics)
    }
}

impl StyleSource for HtmlLabel {
    fn font_attributes(&self) -> FontAttributes {
        self.font_attributes.get()
    }

    fn font_family(&self) -> Option<String> {
        self.font_family.get()
    }

    fn font_size(&self) -> f64 {
        self.font_size.get()
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color.get()
    }

    fn horizontal_text_alignment(&self) -> TextAlignment {
        self.horizontal_text_alignment.get()
    }
}
