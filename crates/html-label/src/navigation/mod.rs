//! Link navigation for HTML labels.
//!
//! A tap on a link inside a label's HTML becomes a navigation:
//!
//! ```text
//! tap ──▶ validate URL ──▶ emit `navigating` ──▶ cancelled? ──▶ stop
//!                                                    │
//!                                                    ▼
//!                                    http/https ─▶ browser launcher
//!                                    other      ─▶ scheme launcher (if any)
//!                                                    │
//!                                                    ▼
//!                                  navigated? ──▶ emit `navigated`
//! ```
//!
//! Malformed URLs, vetoed navigations and schemes without a registered
//! application end the navigation quietly; nothing is returned to the tap
//! handler as an error.

mod dispatcher;
mod event;
mod options;

pub use dispatcher::{LinkHandler, NavigationDispatcher, NavigationOutcome, parse_absolute_uri};
pub use event::{UrlWebViewSource, WebNavigatingEventArgs, WebNavigationEvent};
pub use options::{BrowserLaunchMode, BrowserLaunchOptions, BrowserTitleMode};
