//! Browser launch configuration.

use html_label_style::types::Color;

/// Where a web link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrowserLaunchMode {
    /// Let the platform choose, preferring an in-app browser view where one
    /// exists. The launch is awaited until the platform reports its result.
    #[default]
    SystemPreferred,
    /// Hand the link to the external default browser without waiting for it.
    External,
}

/// Whether an in-app browser view shows the page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrowserTitleMode {
    /// Platform default.
    #[default]
    Default,
    /// Always show the title.
    Show,
    /// Hide the title.
    Hide,
}

/// Options for opening web links from a label.
///
/// Colors and title mode are hints for in-app browser views; launchers that
/// hand the link to an external application ignore them.
///
/// # Example
///
/// ```
/// use html_label::navigation::{BrowserLaunchMode, BrowserLaunchOptions};
/// use html_label_style::types::Color;
///
/// let options = BrowserLaunchOptions::new()
///     .with_launch_mode(BrowserLaunchMode::External)
///     .with_preferred_toolbar_color(Color::BLACK);
/// assert_eq!(options.launch_mode, BrowserLaunchMode::External);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserLaunchOptions {
    /// Where the link opens.
    pub launch_mode: BrowserLaunchMode,
    /// Title visibility in an in-app browser view.
    pub title_mode: BrowserTitleMode,
    /// Toolbar color of an in-app browser view.
    pub preferred_toolbar_color: Option<Color>,
    /// Control (button) color of an in-app browser view.
    pub preferred_control_color: Option<Color>,
}

impl BrowserLaunchOptions {
    /// Create options with platform defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the launch mode.
    pub fn with_launch_mode(mut self, mode: BrowserLaunchMode) -> Self {
        self.launch_mode = mode;
        self
    }

    /// Set the title mode.
    pub fn with_title_mode(mut self, mode: BrowserTitleMode) -> Self {
        self.title_mode = mode;
        self
    }

    /// Set the preferred toolbar color.
    pub fn with_preferred_toolbar_color(mut self, color: Color) -> Self {
        self.preferred_toolbar_color = Some(color);
        self
    }

    /// Set the preferred control color.
    pub fn with_preferred_control_color(mut self, color: Color) -> Self {
        self.preferred_control_color = Some(color);
        self
    }
}
