//! Inline CSS composition for HTML Label.
//!
//! This crate turns a label's visual properties into an HTML fragment:
//!
//! - **Declarations**: An ordered, append-only list of CSS declarations where
//!   a later declaration for the same property overrides an earlier one
//! - **Composition**: One mapping per label property (font attributes,
//!   family, size, color, alignment)
//! - **Relevance**: Which property changes require the fragment to be rebuilt
//!
//! # Example
//!
//! ```
//! use html_label_style::prelude::*;
//!
//! let style = LabelStyle::new()
//!     .with_font_attributes(FontAttributes::BOLD)
//!     .with_text_color(Color::BLUE)
//!     .with_horizontal_text_alignment(TextAlignment::Center);
//!
//! let html = StyleComposer::new(&style, "  Hi  ").render(&SystemFontMetrics);
//! assert_eq!(
//!     html.as_deref(),
//!     Some(
//!         "<div style=\"font-weight:bold;\
//!          font-family:'-apple-system,system-ui,BlinkMacSystemFont,Segoe UI';\
//!          color:#0000FF;color:rgba(0,0,255,1);text-align:center\">Hi</div>"
//!     ),
//! );
//! ```

pub mod composer;
pub mod declaration;
pub mod properties;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::composer::{
        FontMetrics, LabelStyle, StyleComposer, StyleSource, SystemFontMetrics,
        SYSTEM_FONT_FAMILIES,
    };
    pub use crate::declaration::{StyleDeclaration, StyleSet};
    pub use crate::properties::{is_relevant_property, property_names};
    pub use crate::types::{Color, FontAttributes, TextAlignment};
}
