//! Process-level helpers: where the binary lives and when to shut down

use crate::error::ProcessError;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// A signal asking the process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl-C on non-unix platforms
    Interrupt,
    /// SIGTERM
    Terminate,
    /// SIGQUIT
    Quit,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
            Self::Quit => "SIGQUIT",
        })
    }
}

/// Directory containing the running executable, symlinks resolved.
///
/// Useful for locating files shipped next to the binary.
pub fn exec_dir() -> Result<PathBuf, ProcessError> {
    let exe = std::env::current_exe().map_err(ProcessError::CurrentExe)?;
    let resolved = std::fs::canonicalize(&exe).map_err(|source| ProcessError::Canonicalize {
        path: exe.clone(),
        source,
    })?;

    let Some(dir) = resolved.parent().map(Path::to_path_buf) else {
        return Err(ProcessError::NoParent(resolved));
    };
    Ok(dir)
}

/// Wait until the process receives a shutdown signal or `token` is cancelled.
///
/// Returns the signal, or `None` when the token won. Listens for SIGINT,
/// SIGTERM and SIGQUIT on unix and for Ctrl-C elsewhere.
///
/// # Examples
///
/// ```no_run
/// use utilkit::wait_for_shutdown;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), utilkit::ProcessError> {
/// let token = CancellationToken::new();
/// if let Some(signal) = wait_for_shutdown(&token).await? {
///     println!("cleanup requested by {signal}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn wait_for_shutdown(
    token: &CancellationToken,
) -> Result<Option<ShutdownSignal>, ProcessError> {
    tokio::select! {
        biased;
        () = token.cancelled() => Ok(None),
        signal = next_signal() => {
            let signal = signal?;
            info!(%signal, "shutdown requested");
            Ok(Some(signal))
        }
    }
}

/// Wait as [`wait_for_shutdown`] does, then run `handler` with the signal.
///
/// The handler is not called when `token` is cancelled first.
pub async fn on_shutdown<F, R>(
    token: &CancellationToken,
    handler: F,
) -> Result<Option<R>, ProcessError>
where
    F: FnOnce(ShutdownSignal) -> R,
{
    Ok(wait_for_shutdown(token).await?.map(handler))
}

#[cfg(unix)]
async fn next_signal() -> Result<ShutdownSignal, ProcessError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(ProcessError::Signal)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(ProcessError::Signal)?;
    let mut quit = signal(SignalKind::quit()).map_err(ProcessError::Signal)?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = quit.recv() => ShutdownSignal::Quit,
    })
}

#[cfg(not(unix))]
async fn next_signal() -> Result<ShutdownSignal, ProcessError> {
    tokio::signal::ctrl_c()
        .await
        .map_err(ProcessError::Signal)?;
    Ok(ShutdownSignal::Interrupt)
}
