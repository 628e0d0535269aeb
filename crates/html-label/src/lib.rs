//! HTML label widget.
//!
//! This crate provides a label whose text is shown as HTML:
//!
//! - **[`HtmlLabel`]**: The widget model (text, font, color, alignment, link options)
//! - **[`HtmlLabelRenderer`]**: Keeps the styled HTML fragment current as properties change
//! - **[`NavigationDispatcher`]**: Follows tapped links in a browser or the
//!   application registered for the link's scheme
//! - **[`platform`]**: Operating system launchers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use html_label::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let label = Arc::new(
//!         HtmlLabel::new("Mail <a href=\"mailto:team@example.com\">the team</a>")
//!             .with_font_attributes(FontAttributes::BOLD),
//!     );
//!     let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);
//!     println!("{}", renderer.html().unwrap_or_default());
//!
//!     label.navigated.connect(|args| println!("opened {}", args.url()));
//!
//!     let dispatcher = Arc::new(NavigationDispatcher::system());
//!     let outcome = dispatcher
//!         .spawn_link(label.clone(), "mailto:team@example.com")
//!         .await
//!         .unwrap();
//!     println!("{outcome:?}");
//! }
//! ```

pub mod label;
pub mod navigation;
pub mod platform;
pub mod renderer;

pub use label::HtmlLabel;
pub use navigation::{NavigationDispatcher, NavigationOutcome};
pub use renderer::HtmlLabelRenderer;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::label::HtmlLabel;
    pub use crate::navigation::{
        BrowserLaunchMode, BrowserLaunchOptions, BrowserTitleMode, LinkHandler,
        NavigationDispatcher, NavigationOutcome, WebNavigatingEventArgs, WebNavigationEvent,
    };
    pub use crate::platform::{
        BrowserLauncher, LaunchError, SystemBrowser, SystemLauncher, UriLauncher,
    };
    pub use crate::renderer::HtmlLabelRenderer;
    pub use html_label_core::{ConnectionId, Signal};
    pub use html_label_style::prelude::*;
}
