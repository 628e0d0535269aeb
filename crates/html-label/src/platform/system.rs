use std::io;
use std::process::{Command, Stdio};

use html_label_core::logging::targets;
use url::Url;

use super::launcher::{BrowserLauncher, LaunchError, UriLauncher};
use crate::navigation::{BrowserLaunchMode, BrowserLaunchOptions};

/// Opens web links in the default browser.
///
/// `SystemPreferred` waits for the platform opener to report its result;
/// `External` detaches the browser process and returns as soon as it is
/// spawned. Title mode and colors have no desktop equivalent and are ignored.
///
/// Must be awaited inside a Tokio runtime: the platform call runs on the
/// blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    async fn open(&self, uri: &Url, options: &BrowserLaunchOptions) -> Result<bool, LaunchError> {
        let target = uri.to_string();
        let mode = options.launch_mode;
        tracing::debug!(target: targets::PLATFORM, url = %target, ?mode, "opening browser");

        tokio::task::spawn_blocking(move || match mode {
            BrowserLaunchMode::SystemPreferred => open::that(&target),
            BrowserLaunchMode::External => open::that_detached(&target),
        })
        .await
        .map_err(|e| LaunchError::task_failed(uri, e.to_string()))?
        .map_err(|e| LaunchError::open_failed(uri, e))?;

        Ok(true)
    }
}

/// Hands URIs to the application the operating system associates with their
/// scheme.
///
/// # Platform Notes
///
/// - **Linux/BSD**: asks `xdg-mime` for the `x-scheme-handler/<scheme>` default
/// - **Windows**: looks for the scheme's `URL Protocol` registry value
/// - **macOS**: Launch Services has no command-line query, so no scheme is
///   reported as handled
///
/// Opening waits for the platform opener to exit, and a non-zero exit status
/// is an error.
///
/// Must be awaited inside a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl UriLauncher for SystemLauncher {
    async fn can_open(&self, uri: &Url) -> bool {
        let Some(query) = handler_query(uri.scheme()) else {
            tracing::debug!(
                target: targets::PLATFORM,
                url = %uri,
                "no scheme handler query on this platform"
            );
            return false;
        };

        let available = tokio::task::spawn_blocking(move || handler_registered(query))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(
                    target: targets::PLATFORM,
                    error = %e,
                    "scheme handler query did not complete"
                );
                false
            });
        tracing::trace!(target: targets::PLATFORM, url = %uri, available, "queried uri handler");
        available
    }

    async fn open(&self, uri: &Url) -> Result<(), LaunchError> {
        let target = uri.to_string();
        tracing::debug!(
            target: targets::PLATFORM,
            url = %target,
            "opening with default application"
        );

        tokio::task::spawn_blocking(move || run_opener(open::commands(&target)))
            .await
            .map_err(|e| LaunchError::task_failed(uri, e.to_string()))?
            .map_err(|e| LaunchError::open_failed(uri, e))
    }
}

/// The command that reports the handler registered for `scheme`.
#[cfg(all(unix, not(target_os = "macos")))]
fn handler_query(scheme: &str) -> Option<Command> {
    let mut command = Command::new("xdg-mime");
    command.args(["query", "default", &format!("x-scheme-handler/{scheme}")]);
    Some(command)
}

#[cfg(windows)]
fn handler_query(scheme: &str) -> Option<Command> {
    let mut command = Command::new("reg");
    command.args([
        "query",
        &format!("HKEY_CLASSES_ROOT\\{scheme}"),
        "/v",
        "URL Protocol",
    ]);
    Some(command)
}

#[cfg(not(any(all(unix, not(target_os = "macos")), windows)))]
fn handler_query(_scheme: &str) -> Option<Command> {
    None
}

/// Run a handler query; a handler is registered when the query succeeds and
/// prints something.
fn handler_registered(mut query: Command) -> bool {
    match query.stdin(Stdio::null()).stderr(Stdio::null()).output() {
        Ok(output) => {
            output.status.success() && !String::from_utf8_lossy(&output.stdout).trim().is_empty()
        }
        Err(e) => {
            tracing::debug!(target: targets::PLATFORM, error = %e, "scheme handler query failed");
            false
        }
    }
}

/// Run the first opener command that can be started and wait for it.
///
/// Commands that fail to start are skipped. The exit status of the first one
/// that starts decides the result.
fn run_opener(commands: impl IntoIterator<Item = Command>) -> io::Result<()> {
    let mut last_error = None;

    for mut command in commands {
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => {
                return Err(io::Error::other(format!(
                    "{} exited with {status}",
                    command.get_program().to_string_lossy()
                )));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no opener command available")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unregistered_scheme_cannot_be_opened() {
        let uri = Url::parse("zz-no-such-handler-scheme:whatever").unwrap();
        assert!(!SystemLauncher.can_open(&uri).await);
    }

    #[test]
    fn test_missing_query_program_means_no_handler() {
        assert!(!handler_registered(Command::new("html-label-no-such-program")));
    }

    #[cfg(unix)]
    #[test]
    fn test_handler_query_output() {
        // Success with no output: nothing registered.
        assert!(!handler_registered(Command::new("true")));
        assert!(!handler_registered(Command::new("false")));

        let mut registered = Command::new("echo");
        registered.arg("thunderbird.desktop");
        assert!(handler_registered(registered));
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_exit_status() {
        assert!(run_opener([Command::new("true")]).is_ok());

        let error = run_opener([Command::new("false")]).unwrap_err();
        assert!(error.to_string().starts_with("false exited with"));

        // A failing opener stops the search.
        assert!(run_opener([Command::new("false"), Command::new("true")]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_skips_commands_that_cannot_start() {
        let commands = [Command::new("html-label-no-such-program"), Command::new("true")];
        assert!(run_opener(commands).is_ok());
    }

    #[test]
    fn test_no_opener_available() {
        let error = run_opener(Vec::new()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);

        let error = run_opener([Command::new("html-label-no-such-program")]).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
