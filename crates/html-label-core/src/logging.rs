//! Logging facilities for HTML Label.
//!
//! All crates in the workspace log through `tracing`. Nothing is printed unless
//! the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] name the target of every event emitted by the
//! workspace, so logs can be filtered per subsystem, e.g.
//! `RUST_LOG=html_label::navigation=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "html_label_core::signal";
    /// Style composition target.
    pub const STYLE: &str = "html_label_style::composer";
    /// Label renderer target.
    pub const RENDERER: &str = "html_label::renderer";
    /// Link navigation target.
    pub const NAVIGATION: &str = "html_label::navigation";
    /// Platform launcher target.
    pub const PLATFORM: &str = "html_label::platform";
}
