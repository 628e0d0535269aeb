//! Link tap dispatch.

use std::sync::Arc;

use html_label_core::logging::targets;
use tokio::task::JoinHandle;
use url::Url;

use super::event::WebNavigatingEventArgs;
use super::options::BrowserLaunchOptions;
use crate::label::HtmlLabel;
use crate::platform::{BrowserLauncher, SystemBrowser, SystemLauncher, UriLauncher};

/// The launch path for a link, chosen by URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkHandler {
    /// `http` and `https` links open in a browser.
    Browser,
    /// Every other scheme goes to the application registered for it, if any.
    External,
}

impl LinkHandler {
    /// Schemes handled by the browser.
    pub const BROWSER_SCHEMES: [&'static str; 2] = ["http", "https"];

    /// Select the handler for `uri`.
    pub fn for_uri(uri: &Url) -> Self {
        Self::for_scheme(uri.scheme())
    }

    /// Select the handler for a scheme (case-insensitive).
    pub fn for_scheme(scheme: &str) -> Self {
        if Self::BROWSER_SCHEMES
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(scheme))
        {
            Self::Browser
        } else {
            Self::External
        }
    }
}

/// How a link tap ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationOutcome {
    /// The URL was missing or not a well-formed absolute URI. No observer was
    /// notified.
    Ignored,
    /// A `navigating` observer vetoed the navigation. No launcher was called.
    Cancelled,
    /// The link was handed to a launcher. `navigated` is `true` when it
    /// reported success, in which case `navigated` was also emitted.
    Dispatched { navigated: bool },
}

/// Check whether `url` is a well-formed absolute URI.
///
/// Whitespace, control characters and malformed percent-escapes are rejected
/// rather than escaped, and relative references have no base to resolve
/// against.
pub fn parse_absolute_uri(url: &str) -> Option<Url> {
    if url.is_empty()
        || url.chars().any(|c| c.is_whitespace() || c.is_control())
        || has_malformed_escape(url)
    {
        return None;
    }
    Url::parse(url).ok()
}

/// Check for a `%` not followed by two hex digits.
fn has_malformed_escape(url: &str) -> bool {
    let bytes = url.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit()
            )
    })
}

/// Routes tapped links to a browser or to the scheme's registered
/// application.
///
/// Every call to [`handle_link`](Self::handle_link) runs its own
/// navigation with its own [`WebNavigatingEventArgs`]; the dispatcher holds
/// no per-navigation state and can be shared between concurrent taps.
///
/// # Example
///
/// ```no_run
/// use html_label::{HtmlLabel, NavigationDispatcher};
///
/// # async fn run() {
/// let label = HtmlLabel::new("<a href=\"https://example.com\">Example</a>");
/// label.navigating.connect(|args| {
///     if args.url().starts_with("http://") {
///         args.cancel();
///     }
/// });
///
/// let dispatcher = NavigationDispatcher::system();
/// dispatcher.handle_link(&label, Some("https://example.com")).await;
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavigationDispatcher<B = SystemBrowser, L = SystemLauncher> {
    browser: B,
    launcher: L,
}

impl NavigationDispatcher {
    /// A dispatcher using the operating system's browser and launcher.
    pub fn system() -> Self {
        Self::new(SystemBrowser, SystemLauncher)
    }
}

impl<B: BrowserLauncher, L: UriLauncher> NavigationDispatcher<B, L> {
    /// Create a dispatcher with custom launchers.
    pub fn new(browser: B, launcher: L) -> Self {
        Self { browser, launcher }
    }

    /// The browser launcher.
    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// The scheme launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Handle a tap on a link of `label`.
    ///
    /// 1. A missing or malformed URL is ignored.
    /// 2. `label.navigating` is emitted; an observer may cancel.
    /// 3. The link is dispatched by scheme (see [`LinkHandler`]).
    /// 4. On success `label.navigated` is emitted with the same arguments.
    ///
    /// Launch failures are logged and reported as `navigated: false`.
    pub async fn handle_link(&self, label: &HtmlLabel, url: Option<&str>) -> NavigationOutcome {
        let Some((url, uri)) = url.and_then(|url| parse_absolute_uri(url).map(|uri| (url, uri)))
        else {
            tracing::debug!(
                target: targets::NAVIGATION,
                url = ?url,
                "ignoring link: not an absolute uri"
            );
            return NavigationOutcome::Ignored;
        };

        let args = Arc::new(WebNavigatingEventArgs::new_page(url));
        label.navigating.emit(args.clone());

        if args.is_cancelled() {
            tracing::debug!(target: targets::NAVIGATION, url, "navigation cancelled");
            return NavigationOutcome::Cancelled;
        }

        let handler = LinkHandler::for_uri(&uri);
        tracing::trace!(target: targets::NAVIGATION, url, ?handler, "dispatching link");

        let navigated = self.attempt(handler, label, &uri).await;
        if navigated {
            label.navigated.emit(args);
        }

        tracing::debug!(target: targets::NAVIGATION, url, navigated, "link dispatched");
        NavigationOutcome::Dispatched { navigated }
    }

    /// Run one launch path for `uri`, returning whether it navigated.
    pub async fn attempt(&self, handler: LinkHandler, label: &HtmlLabel, uri: &Url) -> bool {
        match handler {
            LinkHandler::Browser => self.launch_browser(label, uri).await,
            LinkHandler::External => self.launch_app(uri).await,
        }
    }

    async fn launch_browser(&self, label: &HtmlLabel, uri: &Url) -> bool {
        let result = match label.browser_launch_options() {
            Some(options) => self.browser.open(uri, &options).await,
            // Without explicit options the launch counts as a navigation
            // whatever the browser reports.
            None => self
                .browser
                .open(uri, &BrowserLaunchOptions::default())
                .await
                .map(|_| true),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(target: targets::NAVIGATION, error = %e, "browser launch failed");
            false
        })
    }

    async fn launch_app(&self, uri: &Url) -> bool {
        if !self.launcher.can_open(uri).await {
            tracing::debug!(target: targets::NAVIGATION, url = %uri, "no application for uri");
            return false;
        }

        match self.launcher.open(uri).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    target: targets::NAVIGATION,
                    error = %e,
                    "application launch failed"
                );
                false
            }
        }
    }
}

impl<B, L> NavigationDispatcher<B, L>
where
    B: BrowserLauncher + 'static,
    L: UriLauncher + 'static,
{
    /// Handle a link tap on the Tokio runtime.
    ///
    /// Tap handlers run on the UI thread and must not wait for the launch;
    /// the returned handle resolves once the navigation has finished.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_link(
        self: &Arc<Self>,
        label: Arc<HtmlLabel>,
        url: impl Into<String>,
    ) -> JoinHandle<NavigationOutcome> {
        let dispatcher = Arc::clone(self);
        let url = url.into();
        tokio::spawn(async move { dispatcher.handle_link(&label, Some(url.as_str())).await })
    }
}
