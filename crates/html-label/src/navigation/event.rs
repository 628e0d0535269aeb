//! Navigation event descriptors delivered to label observers.

use std::sync::atomic::{AtomicBool, Ordering};

/// How a navigation was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebNavigationEvent {
    /// Navigating back in history.
    Back,
    /// Navigating forward in history.
    Forward,
    /// Navigating to a new page, e.g. after a link tap.
    NewPage,
    /// Reloading the current page.
    Refresh,
}

/// The content a navigation targets, identified by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlWebViewSource {
    /// The target URL.
    pub url: String,
}

impl UrlWebViewSource {
    /// Create a source for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Arguments of the `navigating` and `navigated` label signals.
///
/// One instance is created per link tap and shared (as an `Arc`) by both
/// notifications. An observer of `navigating` may call
/// [`cancel`](Self::cancel) to veto the navigation; the flag is read once,
/// right after `navigating` has been emitted.
#[derive(Debug)]
pub struct WebNavigatingEventArgs {
    event: WebNavigationEvent,
    source: UrlWebViewSource,
    url: String,
    cancel: AtomicBool,
}

impl WebNavigatingEventArgs {
    /// Create the arguments for a navigation to `url`.
    pub fn new(
        event: WebNavigationEvent,
        source: UrlWebViewSource,
        url: impl Into<String>,
    ) -> Self {
        Self {
            event,
            source,
            url: url.into(),
            cancel: AtomicBool::new(false),
        }
    }

    /// Arguments for a tapped link.
    pub fn new_page(url: &str) -> Self {
        Self::new(WebNavigationEvent::NewPage, UrlWebViewSource::new(url), url)
    }

    /// How the navigation was initiated.
    pub fn event(&self) -> WebNavigationEvent {
        self.event
    }

    /// The navigation target.
    pub fn source(&self) -> &UrlWebViewSource {
        &self.source
    }

    /// The target URL as it was tapped.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Veto the navigation.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Check whether an observer vetoed the navigation.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_args() {
        let args = WebNavigatingEventArgs::new_page("https://example.com/");
        assert_eq!(args.event(), WebNavigationEvent::NewPage);
        assert_eq!(args.source().url, "https://example.com/");
        assert_eq!(args.url(), "https://example.com/");
        assert!(!args.is_cancelled());

        args.cancel();
        assert!(args.is_cancelled());
    }
}
