//! Composition of a label's properties into a styled HTML fragment.
//!
//! [`StyleComposer`] reads a [`StyleSource`] (the label), maps each visual
//! property to one or more CSS declarations and wraps the trimmed text in a
//! `<div>` carrying them as an inline `style` attribute.
//!
//! # Example
//!
//! ```
//! use html_label_style::prelude::*;
//!
//! let style = LabelStyle::new().with_horizontal_text_alignment(TextAlignment::End);
//!
//! let mut composer = StyleComposer::new(&style, "Hello");
//! composer.add_horizontal_text_alignment(style.horizontal_text_alignment());
//! assert_eq!(composer.style(), "text-align:right;text-align:end");
//! ```

use html_label_core::logging::targets;

use crate::declaration::StyleSet;
use crate::error::{Error, Result};
use crate::types::{Color, FontAttributes, TextAlignment};

/// System font families placed ahead of any custom family.
pub const SYSTEM_FONT_FAMILIES: &str = "-apple-system,system-ui,BlinkMacSystemFont,Segoe UI";

/// Default label font size on desktop platforms, in points.
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 14.0;

/// The label properties read during composition.
pub trait StyleSource {
    /// Bold/italic flags.
    fn font_attributes(&self) -> FontAttributes;
    /// Custom font family, if any.
    fn font_family(&self) -> Option<String>;
    /// Font size in points.
    fn font_size(&self) -> f64;
    /// Text color, or `None` to keep the viewer's default.
    fn text_color(&self) -> Option<Color>;
    /// Horizontal text alignment.
    fn horizontal_text_alignment(&self) -> TextAlignment;
}

/// Platform font metrics.
pub trait FontMetrics {
    /// The font size a label uses when none is set explicitly.
    fn default_label_font_size(&self) -> f64;
}

/// Font metrics of the desktop platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFontMetrics;

impl FontMetrics for SystemFontMetrics {
    fn default_label_font_size(&self) -> f64 {
        DEFAULT_LABEL_FONT_SIZE
    }
}

/// A plain snapshot of label style properties.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font_attributes: FontAttributes,
    pub font_family: Option<String>,
    pub font_size: f64,
    pub text_color: Option<Color>,
    pub horizontal_text_alignment: TextAlignment,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_attributes: FontAttributes::NONE,
            font_family: None,
            font_size: DEFAULT_LABEL_FONT_SIZE,
            text_color: None,
            horizontal_text_alignment: TextAlignment::Start,
        }
    }
}

impl LabelStyle {
    /// Create a snapshot with every property at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current properties of any style source.
    pub fn snapshot<S: StyleSource + ?Sized>(source: &S) -> Self {
        Self {
            font_attributes: source.font_attributes(),
            font_family: source.font_family(),
            font_size: source.font_size(),
            text_color: source.text_color(),
            horizontal_text_alignment: source.horizontal_text_alignment(),
        }
    }

    /// Set font attributes using builder pattern.
    pub fn with_font_attributes(mut self, attributes: FontAttributes) -> Self {
        self.font_attributes = attributes;
        self
    }

    /// Set font family using builder pattern.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set font size using builder pattern.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set horizontal alignment using builder pattern.
    pub fn with_horizontal_text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.horizontal_text_alignment = alignment;
        self
    }
}

impl StyleSource for LabelStyle {
    fn font_attributes(&self) -> FontAttributes {
        self.font_attributes
    }

    fn font_family(&self) -> Option<String> {
        self.font_family.clone()
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    fn horizontal_text_alignment(&self) -> TextAlignment {
        self.horizontal_text_alignment
    }
}

/// Builds the styled HTML fragment for one label.
///
/// A composer is used for a single render: [`render`](Self::render) consumes
/// it. The individual `add_*` methods are public so hosts can compose partial
/// styles, and every one of them only appends.
pub struct StyleComposer<'a, S: StyleSource + ?Sized> {
    source: &'a S,
    text: String,
    styles: StyleSet,
}

impl<'a, S: StyleSource + ?Sized> StyleComposer<'a, S> {
    /// Create a composer for `source` and `text`.
    ///
    /// Leading and trailing whitespace is removed from the text.
    pub fn new(source: &'a S, text: &str) -> Self {
        Self {
            source,
            text: text.trim().to_owned(),
            styles: StyleSet::new(),
        }
    }

    /// Create a composer from values that may be missing.
    ///
    /// Missing text is treated as blank, so the composer renders nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLabel`] if `source` is `None`.
    pub fn try_new(source: Option<&'a S>, text: Option<&str>) -> Result<Self> {
        let source = source.ok_or(Error::MissingLabel)?;
        Ok(Self::new(source, text.unwrap_or_default()))
    }

    /// The trimmed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The declarations added so far.
    pub fn declarations(&self) -> &StyleSet {
        &self.styles
    }

    /// The declarations added so far, formatted for a `style` attribute.
    pub fn style(&self) -> String {
        self.styles.to_css()
    }

    /// Add `font-weight:bold` or `font-style:italic`.
    ///
    /// Only the exact single-flag values match. `BOLD | ITALIC` is neither
    /// and, like `NONE`, adds nothing.
    pub fn add_font_attributes(&mut self, attributes: FontAttributes) {
        if attributes == FontAttributes::BOLD {
            self.styles.push("font-weight", "bold");
        } else if attributes == FontAttributes::ITALIC {
            self.styles.push("font-style", "italic");
        }
    }

    /// Add the `font-family` declaration.
    ///
    /// The system families are always listed; a non-blank custom family is
    /// appended after them.
    pub fn add_font_family(&mut self, family: Option<&str>) {
        let custom = match family {
            Some(name) if !name.trim().is_empty() => format!(",{name}"),
            _ => String::new(),
        };
        self.styles
            .push("font-family", format!("'{SYSTEM_FONT_FAMILIES}{custom}'"));
    }

    /// Add `font-size` in pixels.
    pub fn add_font_size(&mut self, size: f64) {
        self.styles.push("font-size", format!("{size}px"));
    }

    /// Add the text color as `#RRGGBB` followed by `rgba(...)`.
    ///
    /// `None` adds nothing.
    pub fn add_text_color(&mut self, color: Option<Color>) {
        let Some(color) = color else {
            return;
        };
        self.styles.push("color", color.to_hex());
        self.styles.push("color", color.to_rgba_css());
    }

    /// Add `text-align`.
    ///
    /// `End` adds `right` then `end`, so viewers without `end` support still
    /// right-align. `Start` adds nothing.
    pub fn add_horizontal_text_alignment(&mut self, alignment: TextAlignment) {
        match alignment {
            TextAlignment::Center => self.styles.push("text-align", "center"),
            TextAlignment::End => {
                self.styles.push("text-align", "right");
                self.styles.push("text-align", "end");
            }
            TextAlignment::Start => {}
        }
    }

    /// Compose the HTML fragment.
    ///
    /// Returns `None` when the text is blank. Declarations are added in a
    /// fixed order: font attributes, family, color, alignment, then the font
    /// size if it differs from the platform default.
    pub fn render<M: FontMetrics + ?Sized>(mut self, metrics: &M) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }

        let source = self.source;
        self.add_font_attributes(source.font_attributes());
        self.add_font_family(source.font_family().as_deref());
        self.add_text_color(source.text_color());
        self.add_horizontal_text_alignment(source.horizontal_text_alignment());

        let font_size = source.font_size();
        if font_size != metrics.default_label_font_size() {
            self.add_font_size(font_size);
        }

        tracing::debug!(
            target: targets::STYLE,
            declarations = self.styles.len(),
            text_len = self.text.len(),
            "composed label style"
        );

        Some(format!("<div style=\"{}\">{}</div>", self.styles, self.text))
    }
}
