//! The registry publish subprocess.
//!
//! Runs `npm publish` with the caller's stdin/stdout/stderr so registry
//! output and any interactive prompts reach the terminal directly.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::PublishError;

/// Trait for running the publish command.
///
/// This abstraction allows mocking the npm subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublishExecutor: Send + Sync {
    /// Publish the package in `dir`, authorizing with `otp`.
    async fn publish(&self, dir: &Path, otp: &str) -> Result<(), PublishError>;
}

/// Executor that calls the real npm CLI.
pub struct NpmExecutor {
    program: String,
}

impl NpmExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmExecutor {
    fn default() -> Self {
        Self::new("npm")
    }
}

/// Arguments for `npm publish`. Public access is always requested.
pub fn publish_args(otp: &str) -> Vec<String> {
    vec![
        "publish".to_string(),
        "--access".to_string(),
        "public".to_string(),
        format!("--otp={}", otp),
    ]
}

#[async_trait]
impl PublishExecutor for NpmExecutor {
    async fn publish(&self, dir: &Path, otp: &str) -> Result<(), PublishError> {
        let program = which::which(&self.program)
            .map_err(|_| PublishError::NotInstalled(self.program.clone()))?;

        debug!(program = %program.display(), dir = %dir.display(), "Running publish command");

        let status = Command::new(program)
            .args(publish_args(otp))
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(PublishError::SpawnFailed)?;

        if !status.success() {
            return Err(PublishError::NonZeroExit {
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_args_request_public_access() {
        assert_eq!(
            publish_args("123456"),
            vec!["publish", "--access", "public", "--otp=123456"]
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_not_installed() {
        let executor = NpmExecutor::new("pkg-release-definitely-not-installed");
        let dir = tempfile::tempdir().unwrap();

        let result = executor.publish(dir.path(), "000000").await;
        assert!(matches!(
            result,
            Err(PublishError::NotInstalled(ref p)) if p == "pkg-release-definitely-not-installed"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        // `true` ignores its arguments and exits 0
        let executor = NpmExecutor::new("true");
        let dir = tempfile::tempdir().unwrap();

        assert!(executor.publish(dir.path(), "000000").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_exit_code() {
        let executor = NpmExecutor::new("false");
        let dir = tempfile::tempdir().unwrap();

        let result = executor.publish(dir.path(), "000000").await;
        assert!(matches!(result, Err(PublishError::NonZeroExit { code: Some(1) })));
    }
}
