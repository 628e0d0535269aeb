use std::future::Future;
use std::io;

use url::Url;

use crate::navigation::BrowserLaunchOptions;

/// Error type for launcher operations.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The platform failed to open the URI.
    #[error("failed to open '{uri}': {source}")]
    OpenFailed {
        uri: String,
        #[source]
        source: io::Error,
    },

    /// The blocking launch task panicked or was cancelled.
    #[error("launch task for '{uri}' did not complete: {message}")]
    TaskFailed { uri: String, message: String },
}

impl LaunchError {
    /// Create an open error.
    pub fn open_failed(uri: &Url, source: io::Error) -> Self {
        Self::OpenFailed {
            uri: uri.to_string(),
            source,
        }
    }

    /// Create a task error.
    pub fn task_failed(uri: &Url, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            uri: uri.to_string(),
            message: message.into(),
        }
    }
}

/// Opens web links in a browser.
pub trait BrowserLauncher: Send + Sync {
    /// Open `uri` using `options`.
    ///
    /// Resolves to `true` if the browser reports that the page was opened.
    fn open(
        &self,
        uri: &Url,
        options: &BrowserLaunchOptions,
    ) -> impl Future<Output = Result<bool, LaunchError>> + Send;
}

/// Hands URIs to the application registered for their scheme.
pub trait UriLauncher: Send + Sync {
    /// Ask whether an application can handle `uri`.
    fn can_open(&self, uri: &Url) -> impl Future<Output = bool> + Send;

    /// Open `uri` with the registered application.
    fn open(&self, uri: &Url) -> impl Future<Output = Result<(), LaunchError>> + Send;
}
