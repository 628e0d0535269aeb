//! Platform launchers for link navigation.
//!
//! The navigation dispatcher talks to the operating system through two
//! traits:
//!
//! - [`BrowserLauncher`] opens web links in a browser
//! - [`UriLauncher`] hands any other URI to the application registered for
//!   its scheme, after asking whether one exists
//!
//! [`SystemBrowser`] and [`SystemLauncher`] implement them with the `open`
//! crate. Hosts embedding an in-app browser view provide their own
//! [`BrowserLauncher`].
//!
//! # Platform Notes
//!
//! - **Windows**: Opens through `cmd /c start`; handlers are found in the registry
//! - **macOS**: Opens through the `open` command
//! - **Linux**: Opens through `xdg-open` or similar; handlers are found with
//!   `xdg-mime`

mod launcher;
mod system;

pub use launcher::{BrowserLauncher, LaunchError, UriLauncher};
pub use system::{SystemBrowser, SystemLauncher};
