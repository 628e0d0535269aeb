//! Value types read from a label when composing its style.

use std::fmt;
use std::ops::BitOr;

/// Font emphasis flags.
///
/// Flags combine with `|`, so a label may be both bold and italic. Style
/// composition only recognizes the single-flag values; see
/// [`StyleComposer::add_font_attributes`](crate::composer::StyleComposer::add_font_attributes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontAttributes(u8);

impl FontAttributes {
    /// Regular text.
    pub const NONE: Self = Self(0);
    /// Bold text.
    pub const BOLD: Self = Self(1);
    /// Italic text.
    pub const ITALIC: Self = Self(1 << 1);

    /// Check whether every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FontAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for FontAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::BOLD), self.contains(Self::ITALIC)) {
            (false, false) => write!(f, "FontAttributes(NONE)"),
            (true, false) => write!(f, "FontAttributes(BOLD)"),
            (false, true) => write!(f, "FontAttributes(ITALIC)"),
            (true, true) => write!(f, "FontAttributes(BOLD | ITALIC)"),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align to the start of the text direction (left for LTR, right for RTL).
    #[default]
    Start,
    /// Center the text.
    Center,
    /// Align to the end of the text direction (right for LTR, left for RTL).
    End,
}

/// An RGBA color with non-premultiplied components in the 0.0-1.0 range.
///
/// A label with no explicit text color carries `Option::<Color>::None`; the
/// composer emits nothing for it and the viewer's default color applies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// 8-bit red, green and blue channels.
    ///
    /// Each component is scaled by 255 and truncated toward zero, so 0.5 maps
    /// to 127 rather than 128.
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Format as `rgba(r,g,b,a)` with 8-bit channels and the alpha component
    /// left in the 0.0-1.0 range.
    pub fn to_rgba_css(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgba({r},{g},{b},{})", self.a)
    }

    // Common colors
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

// `as` truncates toward zero and saturates outside 0..=255.
fn channel(component: f64) -> u8 {
    (component * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_attributes_combine() {
        let both = FontAttributes::BOLD | FontAttributes::ITALIC;
        assert!(both.contains(FontAttributes::BOLD));
        assert!(both.contains(FontAttributes::ITALIC));
        assert_ne!(both, FontAttributes::BOLD);
        assert_eq!(FontAttributes::default(), FontAttributes::NONE);
        assert_eq!(format!("{both:?}"), "FontAttributes(BOLD | ITALIC)");
    }

    #[test]
    fn text_alignment_defaults_to_start() {
        assert_eq!(TextAlignment::default(), TextAlignment::Start);
    }

    #[test]
    fn color_channels_truncate() {
        assert_eq!(Color::GRAY.to_rgb8(), [127, 127, 127]);
        assert_eq!(Color::from_rgb(1.0, 1.0, 1.0).to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::from_rgb(0.999, 0.0, 0.0).to_rgb8(), [254, 0, 0]);
    }

    #[test]
    fn color_css_formats() {
        let color = Color::new(1.0, 0.0, 0.0, 0.5);
        assert_eq!(color.to_hex(), "#FF0000");
        assert_eq!(color.to_rgba_css(), "rgba(255,0,0,0.5)");
        assert_eq!(Color::new(0.0, 0.0, 1.0, 1.0).to_hex(), "#0000FF");
        assert_eq!(Color::BLACK.to_rgba_css(), "rgba(0,0,0,1)");
    }
}
