use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("netsh command failed: {0}")]
    Failed(String),
    #[error("netsh command timed out after {0} seconds")]
    TimedOut(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Dispatches one invocation of the external network-configuration utility.
///
/// Arguments are passed as discrete tokens, never through a shell, so
/// interface names need no quoting or escaping. Implementations must be
/// callable from any thread.
pub trait Runner {
    fn run(&self, args: &[&str]) -> impl Future<Output = Result<String>> + Send;
}

/// The real runner: `netsh <args...>`, non-interactive, console window
/// suppressed, bounded by a per-invocation timeout.
#[derive(Clone, Debug)]
pub struct Netsh {
    timeout: Duration,
}

impl Netsh {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for Netsh {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner for Netsh {
    async fn run(&self, args: &[&str]) -> Result<String> {
        let mut command = Command::new("netsh");
        command.args(args);

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result?,
            Err(_) => return Err(CommandError::TimedOut(self.timeout.as_secs())),
        };

        if !output.status.success() {
            // netsh reports most errors on stdout rather than stderr.
            let stderr = String::from_utf8_lossy(&output.stderr);
            let diagnostic = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(CommandError::Failed(normalize_error_message(&diagnostic)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn normalize_error_message(msg: &str) -> String {
    msg.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
